//! The `Mnemonic` enum and its string table.
//!
//! Generated from the instruction definitions; entries are ordered
//! alphabetically.

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

macro_rules! mnemonics {
    ($(($variant:ident, $string:literal),)*) => {
        #[allow(non_camel_case_types)]
        #[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum Mnemonic {
            $($variant),*
        }

        pub(crate) static MNEMONIC_STRINGS: &[&str] = &[$($string),*];
    };
}

mnemonics! {
    (INVALID, "invalid"),
    (ADC, "adc"),
    (ADD, "add"),
    (ADDPD, "addpd"),
    (ADDPS, "addps"),
    (ADDSD, "addsd"),
    (ADDSS, "addss"),
    (AND, "and"),
    (ANDNPD, "andnpd"),
    (ANDNPS, "andnps"),
    (ANDPD, "andpd"),
    (ANDPS, "andps"),
    (BOUND, "bound"),
    (BSF, "bsf"),
    (BSR, "bsr"),
    (BT, "bt"),
    (BTC, "btc"),
    (BTR, "btr"),
    (BTS, "bts"),
    (CALL, "call"),
    (CBW, "cbw"),
    (CDQ, "cdq"),
    (CDQE, "cdqe"),
    (CLC, "clc"),
    (CLD, "cld"),
    (CLI, "cli"),
    (CLTS, "clts"),
    (CMC, "cmc"),
    (CMOVB, "cmovb"),
    (CMOVBE, "cmovbe"),
    (CMOVL, "cmovl"),
    (CMOVLE, "cmovle"),
    (CMOVNB, "cmovnb"),
    (CMOVNBE, "cmovnbe"),
    (CMOVNL, "cmovnl"),
    (CMOVNLE, "cmovnle"),
    (CMOVNO, "cmovno"),
    (CMOVNP, "cmovnp"),
    (CMOVNS, "cmovns"),
    (CMOVNZ, "cmovnz"),
    (CMOVO, "cmovo"),
    (CMOVP, "cmovp"),
    (CMOVS, "cmovs"),
    (CMOVZ, "cmovz"),
    (CMP, "cmp"),
    (CMPPD, "cmppd"),
    (CMPPS, "cmpps"),
    (CMPSB, "cmpsb"),
    (CMPSD, "cmpsd"),
    (CMPSQ, "cmpsq"),
    (CMPSS, "cmpss"),
    (CMPSW, "cmpsw"),
    (CMPXCHG, "cmpxchg"),
    (COMISD, "comisd"),
    (COMISS, "comiss"),
    (CPUID, "cpuid"),
    (CQO, "cqo"),
    (CRC32, "crc32"),
    (CWD, "cwd"),
    (CWDE, "cwde"),
    (DEC, "dec"),
    (DIV, "div"),
    (DIVPD, "divpd"),
    (DIVPS, "divps"),
    (DIVSD, "divsd"),
    (DIVSS, "divss"),
    (EMMS, "emms"),
    (ENTER, "enter"),
    (FEMMS, "femms"),
    (HLT, "hlt"),
    (IDIV, "idiv"),
    (IMUL, "imul"),
    (INC, "inc"),
    (INT, "int"),
    (INT3, "int3"),
    (INTO, "into"),
    (JB, "jb"),
    (JBE, "jbe"),
    (JCXZ, "jcxz"),
    (JECXZ, "jecxz"),
    (JL, "jl"),
    (JLE, "jle"),
    (JMP, "jmp"),
    (JNB, "jnb"),
    (JNBE, "jnbe"),
    (JNL, "jnl"),
    (JNLE, "jnle"),
    (JNO, "jno"),
    (JNP, "jnp"),
    (JNS, "jns"),
    (JNZ, "jnz"),
    (JO, "jo"),
    (JP, "jp"),
    (JRCXZ, "jrcxz"),
    (JS, "js"),
    (JZ, "jz"),
    (LAHF, "lahf"),
    (LDS, "lds"),
    (LEA, "lea"),
    (LEAVE, "leave"),
    (LES, "les"),
    (LODSB, "lodsb"),
    (LODSD, "lodsd"),
    (LODSQ, "lodsq"),
    (LODSW, "lodsw"),
    (LOOP, "loop"),
    (LOOPE, "loope"),
    (LOOPNE, "loopne"),
    (LZCNT, "lzcnt"),
    (MAXPD, "maxpd"),
    (MAXPS, "maxps"),
    (MAXSD, "maxsd"),
    (MAXSS, "maxss"),
    (MINPD, "minpd"),
    (MINPS, "minps"),
    (MINSD, "minsd"),
    (MINSS, "minss"),
    (MOV, "mov"),
    (MOVAPD, "movapd"),
    (MOVAPS, "movaps"),
    (MOVBE, "movbe"),
    (MOVD, "movd"),
    (MOVDQA, "movdqa"),
    (MOVDQU, "movdqu"),
    (MOVQ, "movq"),
    (MOVSB, "movsb"),
    (MOVSD, "movsd"),
    (MOVSQ, "movsq"),
    (MOVSS, "movss"),
    (MOVSW, "movsw"),
    (MOVSX, "movsx"),
    (MOVSXD, "movsxd"),
    (MOVUPD, "movupd"),
    (MOVUPS, "movups"),
    (MOVZX, "movzx"),
    (MUL, "mul"),
    (MULPD, "mulpd"),
    (MULPS, "mulps"),
    (MULSD, "mulsd"),
    (MULSS, "mulss"),
    (NEG, "neg"),
    (NOP, "nop"),
    (NOT, "not"),
    (OR, "or"),
    (ORPD, "orpd"),
    (ORPS, "orps"),
    (PADDB, "paddb"),
    (PADDD, "paddd"),
    (PADDQ, "paddq"),
    (PADDW, "paddw"),
    (PALIGNR, "palignr"),
    (PAND, "pand"),
    (PANDN, "pandn"),
    (PAUSE, "pause"),
    (PCMPEQB, "pcmpeqb"),
    (PCMPEQD, "pcmpeqd"),
    (PCMPEQW, "pcmpeqw"),
    (PF2ID, "pf2id"),
    (PFADD, "pfadd"),
    (PFMUL, "pfmul"),
    (PFRCP, "pfrcp"),
    (PFSUB, "pfsub"),
    (PI2FD, "pi2fd"),
    (POP, "pop"),
    (POPCNT, "popcnt"),
    (POPF, "popf"),
    (POPFD, "popfd"),
    (POPFQ, "popfq"),
    (POR, "por"),
    (PSHUFB, "pshufb"),
    (PSHUFD, "pshufd"),
    (PSHUFHW, "pshufhw"),
    (PSHUFLW, "pshuflw"),
    (PSHUFW, "pshufw"),
    (PSUBB, "psubb"),
    (PSUBD, "psubd"),
    (PSUBQ, "psubq"),
    (PSUBW, "psubw"),
    (PUSH, "push"),
    (PUSHF, "pushf"),
    (PUSHFD, "pushfd"),
    (PUSHFQ, "pushfq"),
    (PXOR, "pxor"),
    (RCL, "rcl"),
    (RCR, "rcr"),
    (RDTSC, "rdtsc"),
    (RET, "ret"),
    (ROL, "rol"),
    (ROR, "ror"),
    (ROUNDPS, "roundps"),
    (SAHF, "sahf"),
    (SAR, "sar"),
    (SBB, "sbb"),
    (SCASB, "scasb"),
    (SCASD, "scasd"),
    (SCASQ, "scasq"),
    (SCASW, "scasw"),
    (SETB, "setb"),
    (SETBE, "setbe"),
    (SETL, "setl"),
    (SETLE, "setle"),
    (SETNB, "setnb"),
    (SETNBE, "setnbe"),
    (SETNL, "setnl"),
    (SETNLE, "setnle"),
    (SETNO, "setno"),
    (SETNP, "setnp"),
    (SETNS, "setns"),
    (SETNZ, "setnz"),
    (SETO, "seto"),
    (SETP, "setp"),
    (SETS, "sets"),
    (SETZ, "setz"),
    (SHL, "shl"),
    (SHR, "shr"),
    (SHUFPD, "shufpd"),
    (SHUFPS, "shufps"),
    (SQRTPD, "sqrtpd"),
    (SQRTPS, "sqrtps"),
    (SQRTSD, "sqrtsd"),
    (SQRTSS, "sqrtss"),
    (STC, "stc"),
    (STD, "std"),
    (STI, "sti"),
    (STOSB, "stosb"),
    (STOSD, "stosd"),
    (STOSQ, "stosq"),
    (STOSW, "stosw"),
    (SUB, "sub"),
    (SUBPD, "subpd"),
    (SUBPS, "subps"),
    (SUBSD, "subsd"),
    (SUBSS, "subss"),
    (SYSCALL, "syscall"),
    (TEST, "test"),
    (TZCNT, "tzcnt"),
    (UCOMISD, "ucomisd"),
    (UCOMISS, "ucomiss"),
    (UD2, "ud2"),
    (VADDPD, "vaddpd"),
    (VADDPS, "vaddps"),
    (VADDSD, "vaddsd"),
    (VADDSS, "vaddss"),
    (VANDPD, "vandpd"),
    (VANDPS, "vandps"),
    (VBROADCASTSS, "vbroadcastss"),
    (VCMPPD, "vcmppd"),
    (VCMPPS, "vcmpps"),
    (VCMPSD, "vcmpsd"),
    (VCMPSS, "vcmpss"),
    (VDIVPD, "vdivpd"),
    (VDIVPS, "vdivps"),
    (VDIVSD, "vdivsd"),
    (VDIVSS, "vdivss"),
    (VEXTRACTF128, "vextractf128"),
    (VFMADD132PS, "vfmadd132ps"),
    (VFMADD213PS, "vfmadd213ps"),
    (VFMADD231PS, "vfmadd231ps"),
    (VFRCZPD, "vfrczpd"),
    (VFRCZPS, "vfrczps"),
    (VFRCZSD, "vfrczsd"),
    (VFRCZSS, "vfrczss"),
    (VINSERTF128, "vinsertf128"),
    (VMOVAPD, "vmovapd"),
    (VMOVAPS, "vmovaps"),
    (VMOVD, "vmovd"),
    (VMOVDQA, "vmovdqa"),
    (VMOVDQA32, "vmovdqa32"),
    (VMOVDQA64, "vmovdqa64"),
    (VMOVDQU, "vmovdqu"),
    (VMOVDQU32, "vmovdqu32"),
    (VMOVDQU64, "vmovdqu64"),
    (VMOVQ, "vmovq"),
    (VMOVSD, "vmovsd"),
    (VMOVSS, "vmovss"),
    (VMOVUPD, "vmovupd"),
    (VMOVUPS, "vmovups"),
    (VMULPD, "vmulpd"),
    (VMULPS, "vmulps"),
    (VMULSD, "vmulsd"),
    (VMULSS, "vmulss"),
    (VORPD, "vorpd"),
    (VORPS, "vorps"),
    (VPADDB, "vpaddb"),
    (VPADDD, "vpaddd"),
    (VPADDQ, "vpaddq"),
    (VPADDW, "vpaddw"),
    (VPALIGNR, "vpalignr"),
    (VPAND, "vpand"),
    (VPBROADCASTB, "vpbroadcastb"),
    (VPBROADCASTD, "vpbroadcastd"),
    (VPBROADCASTQ, "vpbroadcastq"),
    (VPBROADCASTW, "vpbroadcastw"),
    (VPERM2F128, "vperm2f128"),
    (VPERMILPS, "vpermilps"),
    (VPGATHERDD, "vpgatherdd"),
    (VPGATHERQQ, "vpgatherqq"),
    (VPOR, "vpor"),
    (VPSHUFB, "vpshufb"),
    (VPSUBD, "vpsubd"),
    (VPXOR, "vpxor"),
    (VPXORD, "vpxord"),
    (VPXORQ, "vpxorq"),
    (VSQRTPD, "vsqrtpd"),
    (VSQRTPS, "vsqrtps"),
    (VSUBPD, "vsubpd"),
    (VSUBPS, "vsubps"),
    (VSUBSD, "vsubsd"),
    (VSUBSS, "vsubss"),
    (VXORPD, "vxorpd"),
    (VXORPS, "vxorps"),
    (VZEROALL, "vzeroall"),
    (VZEROUPPER, "vzeroupper"),
    (XADD, "xadd"),
    (XCHG, "xchg"),
    (XOR, "xor"),
    (XORPD, "xorpd"),
    (XORPS, "xorps"),
}

pub const MNEMONIC_MAX_VALUE: Mnemonic = Mnemonic::XORPS;

impl Mnemonic {
    /// Returns the string corresponding to this mnemonic.
    ///
    /// # Examples
    /// ```
    /// use oxidis::Mnemonic;
    /// assert_eq!(Mnemonic::CMOVP.get_string(), Some("cmovp"));
    /// ```
    pub fn get_string(self) -> Option<&'static str> {
        match self {
            Mnemonic::INVALID => None,
            other => Some(MNEMONIC_STRINGS[other as usize]),
        }
    }
}
