//! The `Register` enum and the static register table.
//!
//! Generated from the register definitions; keep rows in sync with the
//! per-class id ranges.

use super::RegisterClass;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

pub(crate) struct RegisterInfo {
    pub name: &'static str,
    pub class: RegisterClass,
    pub id: u8,
    /// Width in 16/32-bit modes, in bits. `0` if unavailable there.
    pub width: u16,
    /// Width in 64-bit mode, in bits. `0` if unavailable there.
    pub width64: u16,
}

macro_rules! registers {
    ($(($variant:ident, $name:literal, $class:ident, $id:expr, $w:expr, $w64:expr),)*) => {
        #[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum Register {
            $($variant),*
        }

        pub(crate) static REGISTER_INFO: &[RegisterInfo] = &[
            $(RegisterInfo {
                name: $name,
                class: RegisterClass::$class,
                id: $id,
                width: $w,
                width64: $w64,
            },)*
        ];

        pub(crate) static REGISTERS: &[Register] = &[$(Register::$variant),*];
    };
}

registers! {
    (None, "none", Invalid, 0, 0, 0),
    // General purpose registers, 8-bit.
    (AL, "al", Gpr8, 0, 8, 8),
    (CL, "cl", Gpr8, 1, 8, 8),
    (DL, "dl", Gpr8, 2, 8, 8),
    (BL, "bl", Gpr8, 3, 8, 8),
    (AH, "ah", Gpr8, 4, 8, 8),
    (CH, "ch", Gpr8, 5, 8, 8),
    (DH, "dh", Gpr8, 6, 8, 8),
    (BH, "bh", Gpr8, 7, 8, 8),
    (SPL, "spl", Gpr8, 4, 0, 8),
    (BPL, "bpl", Gpr8, 5, 0, 8),
    (SIL, "sil", Gpr8, 6, 0, 8),
    (DIL, "dil", Gpr8, 7, 0, 8),
    (R8B, "r8b", Gpr8, 8, 0, 8),
    (R9B, "r9b", Gpr8, 9, 0, 8),
    (R10B, "r10b", Gpr8, 10, 0, 8),
    (R11B, "r11b", Gpr8, 11, 0, 8),
    (R12B, "r12b", Gpr8, 12, 0, 8),
    (R13B, "r13b", Gpr8, 13, 0, 8),
    (R14B, "r14b", Gpr8, 14, 0, 8),
    (R15B, "r15b", Gpr8, 15, 0, 8),
    // General purpose registers, 16-bit.
    (AX, "ax", Gpr16, 0, 16, 16),
    (CX, "cx", Gpr16, 1, 16, 16),
    (DX, "dx", Gpr16, 2, 16, 16),
    (BX, "bx", Gpr16, 3, 16, 16),
    (SP, "sp", Gpr16, 4, 16, 16),
    (BP, "bp", Gpr16, 5, 16, 16),
    (SI, "si", Gpr16, 6, 16, 16),
    (DI, "di", Gpr16, 7, 16, 16),
    (R8W, "r8w", Gpr16, 8, 0, 16),
    (R9W, "r9w", Gpr16, 9, 0, 16),
    (R10W, "r10w", Gpr16, 10, 0, 16),
    (R11W, "r11w", Gpr16, 11, 0, 16),
    (R12W, "r12w", Gpr16, 12, 0, 16),
    (R13W, "r13w", Gpr16, 13, 0, 16),
    (R14W, "r14w", Gpr16, 14, 0, 16),
    (R15W, "r15w", Gpr16, 15, 0, 16),
    // General purpose registers, 32-bit.
    (EAX, "eax", Gpr32, 0, 32, 32),
    (ECX, "ecx", Gpr32, 1, 32, 32),
    (EDX, "edx", Gpr32, 2, 32, 32),
    (EBX, "ebx", Gpr32, 3, 32, 32),
    (ESP, "esp", Gpr32, 4, 32, 32),
    (EBP, "ebp", Gpr32, 5, 32, 32),
    (ESI, "esi", Gpr32, 6, 32, 32),
    (EDI, "edi", Gpr32, 7, 32, 32),
    (R8D, "r8d", Gpr32, 8, 0, 32),
    (R9D, "r9d", Gpr32, 9, 0, 32),
    (R10D, "r10d", Gpr32, 10, 0, 32),
    (R11D, "r11d", Gpr32, 11, 0, 32),
    (R12D, "r12d", Gpr32, 12, 0, 32),
    (R13D, "r13d", Gpr32, 13, 0, 32),
    (R14D, "r14d", Gpr32, 14, 0, 32),
    (R15D, "r15d", Gpr32, 15, 0, 32),
    // General purpose registers, 64-bit.
    (RAX, "rax", Gpr64, 0, 0, 64),
    (RCX, "rcx", Gpr64, 1, 0, 64),
    (RDX, "rdx", Gpr64, 2, 0, 64),
    (RBX, "rbx", Gpr64, 3, 0, 64),
    (RSP, "rsp", Gpr64, 4, 0, 64),
    (RBP, "rbp", Gpr64, 5, 0, 64),
    (RSI, "rsi", Gpr64, 6, 0, 64),
    (RDI, "rdi", Gpr64, 7, 0, 64),
    (R8, "r8", Gpr64, 8, 0, 64),
    (R9, "r9", Gpr64, 9, 0, 64),
    (R10, "r10", Gpr64, 10, 0, 64),
    (R11, "r11", Gpr64, 11, 0, 64),
    (R12, "r12", Gpr64, 12, 0, 64),
    (R13, "r13", Gpr64, 13, 0, 64),
    (R14, "r14", Gpr64, 14, 0, 64),
    (R15, "r15", Gpr64, 15, 0, 64),
    // Floating point legacy registers.
    (ST0, "st0", X87, 0, 80, 80),
    (ST1, "st1", X87, 1, 80, 80),
    (ST2, "st2", X87, 2, 80, 80),
    (ST3, "st3", X87, 3, 80, 80),
    (ST4, "st4", X87, 4, 80, 80),
    (ST5, "st5", X87, 5, 80, 80),
    (ST6, "st6", X87, 6, 80, 80),
    (ST7, "st7", X87, 7, 80, 80),
    // Multimedia registers.
    (MM0, "mm0", Mmx, 0, 64, 64),
    (MM1, "mm1", Mmx, 1, 64, 64),
    (MM2, "mm2", Mmx, 2, 64, 64),
    (MM3, "mm3", Mmx, 3, 64, 64),
    (MM4, "mm4", Mmx, 4, 64, 64),
    (MM5, "mm5", Mmx, 5, 64, 64),
    (MM6, "mm6", Mmx, 6, 64, 64),
    (MM7, "mm7", Mmx, 7, 64, 64),
    // Floating point vector registers, 128-bit.
    (XMM0, "xmm0", Xmm, 0, 128, 128),
    (XMM1, "xmm1", Xmm, 1, 128, 128),
    (XMM2, "xmm2", Xmm, 2, 128, 128),
    (XMM3, "xmm3", Xmm, 3, 128, 128),
    (XMM4, "xmm4", Xmm, 4, 128, 128),
    (XMM5, "xmm5", Xmm, 5, 128, 128),
    (XMM6, "xmm6", Xmm, 6, 128, 128),
    (XMM7, "xmm7", Xmm, 7, 128, 128),
    (XMM8, "xmm8", Xmm, 8, 0, 128),
    (XMM9, "xmm9", Xmm, 9, 0, 128),
    (XMM10, "xmm10", Xmm, 10, 0, 128),
    (XMM11, "xmm11", Xmm, 11, 0, 128),
    (XMM12, "xmm12", Xmm, 12, 0, 128),
    (XMM13, "xmm13", Xmm, 13, 0, 128),
    (XMM14, "xmm14", Xmm, 14, 0, 128),
    (XMM15, "xmm15", Xmm, 15, 0, 128),
    (XMM16, "xmm16", Xmm, 16, 0, 128),
    (XMM17, "xmm17", Xmm, 17, 0, 128),
    (XMM18, "xmm18", Xmm, 18, 0, 128),
    (XMM19, "xmm19", Xmm, 19, 0, 128),
    (XMM20, "xmm20", Xmm, 20, 0, 128),
    (XMM21, "xmm21", Xmm, 21, 0, 128),
    (XMM22, "xmm22", Xmm, 22, 0, 128),
    (XMM23, "xmm23", Xmm, 23, 0, 128),
    (XMM24, "xmm24", Xmm, 24, 0, 128),
    (XMM25, "xmm25", Xmm, 25, 0, 128),
    (XMM26, "xmm26", Xmm, 26, 0, 128),
    (XMM27, "xmm27", Xmm, 27, 0, 128),
    (XMM28, "xmm28", Xmm, 28, 0, 128),
    (XMM29, "xmm29", Xmm, 29, 0, 128),
    (XMM30, "xmm30", Xmm, 30, 0, 128),
    (XMM31, "xmm31", Xmm, 31, 0, 128),
    // Floating point vector registers, 256-bit.
    (YMM0, "ymm0", Ymm, 0, 256, 256),
    (YMM1, "ymm1", Ymm, 1, 256, 256),
    (YMM2, "ymm2", Ymm, 2, 256, 256),
    (YMM3, "ymm3", Ymm, 3, 256, 256),
    (YMM4, "ymm4", Ymm, 4, 256, 256),
    (YMM5, "ymm5", Ymm, 5, 256, 256),
    (YMM6, "ymm6", Ymm, 6, 256, 256),
    (YMM7, "ymm7", Ymm, 7, 256, 256),
    (YMM8, "ymm8", Ymm, 8, 0, 256),
    (YMM9, "ymm9", Ymm, 9, 0, 256),
    (YMM10, "ymm10", Ymm, 10, 0, 256),
    (YMM11, "ymm11", Ymm, 11, 0, 256),
    (YMM12, "ymm12", Ymm, 12, 0, 256),
    (YMM13, "ymm13", Ymm, 13, 0, 256),
    (YMM14, "ymm14", Ymm, 14, 0, 256),
    (YMM15, "ymm15", Ymm, 15, 0, 256),
    (YMM16, "ymm16", Ymm, 16, 0, 256),
    (YMM17, "ymm17", Ymm, 17, 0, 256),
    (YMM18, "ymm18", Ymm, 18, 0, 256),
    (YMM19, "ymm19", Ymm, 19, 0, 256),
    (YMM20, "ymm20", Ymm, 20, 0, 256),
    (YMM21, "ymm21", Ymm, 21, 0, 256),
    (YMM22, "ymm22", Ymm, 22, 0, 256),
    (YMM23, "ymm23", Ymm, 23, 0, 256),
    (YMM24, "ymm24", Ymm, 24, 0, 256),
    (YMM25, "ymm25", Ymm, 25, 0, 256),
    (YMM26, "ymm26", Ymm, 26, 0, 256),
    (YMM27, "ymm27", Ymm, 27, 0, 256),
    (YMM28, "ymm28", Ymm, 28, 0, 256),
    (YMM29, "ymm29", Ymm, 29, 0, 256),
    (YMM30, "ymm30", Ymm, 30, 0, 256),
    (YMM31, "ymm31", Ymm, 31, 0, 256),
    // Floating point vector registers, 512-bit.
    (ZMM0, "zmm0", Zmm, 0, 512, 512),
    (ZMM1, "zmm1", Zmm, 1, 512, 512),
    (ZMM2, "zmm2", Zmm, 2, 512, 512),
    (ZMM3, "zmm3", Zmm, 3, 512, 512),
    (ZMM4, "zmm4", Zmm, 4, 512, 512),
    (ZMM5, "zmm5", Zmm, 5, 512, 512),
    (ZMM6, "zmm6", Zmm, 6, 512, 512),
    (ZMM7, "zmm7", Zmm, 7, 512, 512),
    (ZMM8, "zmm8", Zmm, 8, 0, 512),
    (ZMM9, "zmm9", Zmm, 9, 0, 512),
    (ZMM10, "zmm10", Zmm, 10, 0, 512),
    (ZMM11, "zmm11", Zmm, 11, 0, 512),
    (ZMM12, "zmm12", Zmm, 12, 0, 512),
    (ZMM13, "zmm13", Zmm, 13, 0, 512),
    (ZMM14, "zmm14", Zmm, 14, 0, 512),
    (ZMM15, "zmm15", Zmm, 15, 0, 512),
    (ZMM16, "zmm16", Zmm, 16, 0, 512),
    (ZMM17, "zmm17", Zmm, 17, 0, 512),
    (ZMM18, "zmm18", Zmm, 18, 0, 512),
    (ZMM19, "zmm19", Zmm, 19, 0, 512),
    (ZMM20, "zmm20", Zmm, 20, 0, 512),
    (ZMM21, "zmm21", Zmm, 21, 0, 512),
    (ZMM22, "zmm22", Zmm, 22, 0, 512),
    (ZMM23, "zmm23", Zmm, 23, 0, 512),
    (ZMM24, "zmm24", Zmm, 24, 0, 512),
    (ZMM25, "zmm25", Zmm, 25, 0, 512),
    (ZMM26, "zmm26", Zmm, 26, 0, 512),
    (ZMM27, "zmm27", Zmm, 27, 0, 512),
    (ZMM28, "zmm28", Zmm, 28, 0, 512),
    (ZMM29, "zmm29", Zmm, 29, 0, 512),
    (ZMM30, "zmm30", Zmm, 30, 0, 512),
    (ZMM31, "zmm31", Zmm, 31, 0, 512),
    // Flags registers.
    (FLAGS, "flags", Flags, 0, 16, 16),
    (EFLAGS, "eflags", Flags, 1, 32, 32),
    (RFLAGS, "rflags", Flags, 2, 0, 64),
    // Instruction-pointer registers.
    (IP, "ip", Ip, 0, 16, 16),
    (EIP, "eip", Ip, 1, 32, 32),
    (RIP, "rip", Ip, 2, 0, 64),
    // Segment registers.
    (ES, "es", Segment, 0, 16, 16),
    (CS, "cs", Segment, 1, 16, 16),
    (SS, "ss", Segment, 2, 16, 16),
    (DS, "ds", Segment, 3, 16, 16),
    (FS, "fs", Segment, 4, 16, 16),
    (GS, "gs", Segment, 5, 16, 16),
    // Test registers.
    (TR0, "tr0", Test, 0, 32, 32),
    (TR1, "tr1", Test, 1, 32, 32),
    (TR2, "tr2", Test, 2, 32, 32),
    (TR3, "tr3", Test, 3, 32, 32),
    (TR4, "tr4", Test, 4, 32, 32),
    (TR5, "tr5", Test, 5, 32, 32),
    (TR6, "tr6", Test, 6, 32, 32),
    (TR7, "tr7", Test, 7, 32, 32),
    // Control registers.
    (CR0, "cr0", Control, 0, 32, 64),
    (CR1, "cr1", Control, 1, 32, 64),
    (CR2, "cr2", Control, 2, 32, 64),
    (CR3, "cr3", Control, 3, 32, 64),
    (CR4, "cr4", Control, 4, 32, 64),
    (CR5, "cr5", Control, 5, 32, 64),
    (CR6, "cr6", Control, 6, 32, 64),
    (CR7, "cr7", Control, 7, 32, 64),
    (CR8, "cr8", Control, 8, 0, 64),
    (CR9, "cr9", Control, 9, 0, 64),
    (CR10, "cr10", Control, 10, 0, 64),
    (CR11, "cr11", Control, 11, 0, 64),
    (CR12, "cr12", Control, 12, 0, 64),
    (CR13, "cr13", Control, 13, 0, 64),
    (CR14, "cr14", Control, 14, 0, 64),
    (CR15, "cr15", Control, 15, 0, 64),
    // Debug registers.
    (DR0, "dr0", Debug, 0, 32, 64),
    (DR1, "dr1", Debug, 1, 32, 64),
    (DR2, "dr2", Debug, 2, 32, 64),
    (DR3, "dr3", Debug, 3, 32, 64),
    (DR4, "dr4", Debug, 4, 32, 64),
    (DR5, "dr5", Debug, 5, 32, 64),
    (DR6, "dr6", Debug, 6, 32, 64),
    (DR7, "dr7", Debug, 7, 32, 64),
    (DR8, "dr8", Debug, 8, 0, 64),
    (DR9, "dr9", Debug, 9, 0, 64),
    (DR10, "dr10", Debug, 10, 0, 64),
    (DR11, "dr11", Debug, 11, 0, 64),
    (DR12, "dr12", Debug, 12, 0, 64),
    (DR13, "dr13", Debug, 13, 0, 64),
    (DR14, "dr14", Debug, 14, 0, 64),
    (DR15, "dr15", Debug, 15, 0, 64),
    // Mask registers.
    (K0, "k0", Mask, 0, 64, 64),
    (K1, "k1", Mask, 1, 64, 64),
    (K2, "k2", Mask, 2, 64, 64),
    (K3, "k3", Mask, 3, 64, 64),
    (K4, "k4", Mask, 4, 64, 64),
    (K5, "k5", Mask, 5, 64, 64),
    (K6, "k6", Mask, 6, 64, 64),
    (K7, "k7", Mask, 7, 64, 64),
    // Bound registers.
    (BND0, "bnd0", Bound, 0, 128, 128),
    (BND1, "bnd1", Bound, 1, 128, 128),
    (BND2, "bnd2", Bound, 2, 128, 128),
    (BND3, "bnd3", Bound, 3, 128, 128),
    (BNDCFG, "bndcfg", Bound, 4, 64, 64),
    (BNDSTATUS, "bndstatus", Bound, 5, 64, 64),
}

pub const REGISTER_MAX_VALUE: Register = Register::BNDSTATUS;

impl Default for Register {
    fn default() -> Self {
        Register::None
    }
}
