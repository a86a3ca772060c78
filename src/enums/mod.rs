//! Definitions for all enums used throughout the library and some utility
//! functions on them.

// Names like `AVX512_BITALG` or `_1_TO_16` read much better than their
// camel-case renditions, so we use UPPERCASE where it makes sense.
#![allow(non_camel_case_types)]

use bitflags::bitflags;

pub mod instructioncategory;
pub mod isaext;
pub mod isaset;
pub mod mnemonic;
pub mod register;

use core::fmt;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

pub use self::{instructioncategory::*, isaext::*, isaset::*, mnemonic::*, register::*};

/// The maximum length of an x86 instruction, in bytes.
pub const MAX_INSTRUCTION_LENGTH: usize = 15;

/// The maximum number of (visible and hidden) operands of an instruction.
pub const MAX_OPERAND_COUNT: usize = 10;

/// The maximum number of visible operands of an instruction.
pub const MAX_OPERAND_COUNT_VISIBLE: usize = 5;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Feature {
    AVX512,
    KNC,
}

pub const FEATURE_MAX_VALUE: Feature = Feature::KNC;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum MachineMode {
    Long64,
    LongCompat32,
    LongCompat16,
    Legacy32,
    Legacy16,
    Real16,
}

pub const MACHINE_MODE_MAX_VALUE: MachineMode = MachineMode::Real16;

impl MachineMode {
    /// The stack width implied by this machine mode.
    pub fn stack_width(self) -> StackWidth {
        match self {
            MachineMode::Long64 => StackWidth::_64,
            MachineMode::LongCompat32 | MachineMode::Legacy32 => StackWidth::_32,
            MachineMode::LongCompat16 | MachineMode::Legacy16 | MachineMode::Real16 => {
                StackWidth::_16
            }
        }
    }
}

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum StackWidth {
    _16,
    _32,
    _64,
}

pub const STACK_WIDTH_MAX_VALUE: StackWidth = StackWidth::_64;

impl StackWidth {
    /// This stack width in bits (16, 32 or 64).
    pub fn bits(self) -> u8 {
        match self {
            StackWidth::_16 => 16,
            StackWidth::_32 => 32,
            StackWidth::_64 => 64,
        }
    }
}

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum DecoderMode {
    AmdBranches,
    Knc,
    Mpx,
    Cet,
    Lzcnt,
    Tzcnt,
    Wbnoinvd,
    Cldemote,
    Iprefetch,
    Ud0Compat,
}

pub const DECODER_MODE_MAX_VALUE: DecoderMode = DecoderMode::Ud0Compat;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum RegisterClass {
    Invalid,
    Gpr8,
    Gpr16,
    Gpr32,
    Gpr64,
    X87,
    Mmx,
    Xmm,
    Ymm,
    Zmm,
    Flags,
    Ip,
    Segment,
    Test,
    Control,
    Debug,
    Mask,
    Bound,
}

pub const REGISTER_CLASS_MAX_VALUE: RegisterClass = RegisterClass::Bound;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum FormatterStyle {
    ATT,
    Intel,
    IntelMasm,
}

pub const FORMATTER_STYLE_MAX_VALUE: FormatterStyle = FormatterStyle::IntelMasm;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum NumericBase {
    Decimal,
    Hex,
}

pub const NUMERIC_BASE_MAX_VALUE: NumericBase = NumericBase::Hex;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Signedness {
    Auto,
    Signed,
    Unsigned,
}

pub const SIGNEDNESS_MAX_VALUE: Signedness = Signedness::Unsigned;

/// Padding for formatted numbers: disabled, automatic (derived from the
/// value width), or a fixed number of digits.
#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Padding {
    Disabled,
    Auto,
    Fixed(u8),
}

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Decorator {
    Invalid,
    Mask,
    Bc,
    Rc,
    Sae,
    Swizzle,
    Conversion,
    Eh,
}

pub const DECORATOR_MAX_VALUE: Decorator = Decorator::Eh;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ElementType {
    Invalid,
    Struct,
    Uint,
    Int,
    Float16,
    Float32,
    Float64,
    Float80,
    LongBcd,
    Cc,
}

pub const ELEMENT_TYPE_MAX_VALUE: ElementType = ElementType::Cc;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum OperandType {
    Unused,
    Register,
    Memory,
    Pointer,
    Immediate,
}

pub const OPERAND_TYPE_MAX_VALUE: OperandType = OperandType::Immediate;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum OperandEncoding {
    None,
    ModrmReg,
    ModrmRm,
    Opcode,
    NdsNdd,
    Is4,
    Mask,
    Disp8,
    Disp16,
    Disp32,
    Disp64,
    Disp16_32_64,
    Uimm8,
    Uimm16,
    Uimm32,
    Uimm64,
    Uimm16_32_64,
    Uimm32_32_64,
    Uimm16_32_32,
    Simm8,
    Simm16,
    Simm32,
    Simm64,
    Simm16_32_64,
    Simm32_32_64,
    Simm16_32_32,
    Jimm8,
    Jimm16,
    Jimm32,
    Jimm64,
    Jimm16_32_64,
    Jimm32_32_64,
    Jimm16_32_32,
}

pub const OPERAND_ENCODING_MAX_VALUE: OperandEncoding = OperandEncoding::Jimm16_32_32;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum OperandVisibility {
    Invalid,
    Explicit,
    Implicit,
    Hidden,
}

pub const OPERAND_VISIBILITY_MAX_VALUE: OperandVisibility = OperandVisibility::Hidden;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum OperandAction {
    Invalid,
    Read,
    Write,
    ReadWrite,
    CondRead,
    CondWrite,
    ReadCondWrite,
    CondReadWrite,
}

pub const OPERAND_ACTION_MAX_VALUE: OperandAction = OperandAction::CondReadWrite;

impl OperandAction {
    /// Whether the operand is (conditionally or unconditionally) read.
    pub fn is_read(self) -> bool {
        matches!(
            self,
            OperandAction::Read
                | OperandAction::ReadWrite
                | OperandAction::CondRead
                | OperandAction::ReadCondWrite
                | OperandAction::CondReadWrite
        )
    }

    /// Whether the operand is (conditionally or unconditionally) written.
    pub fn is_written(self) -> bool {
        matches!(
            self,
            OperandAction::Write
                | OperandAction::ReadWrite
                | OperandAction::CondWrite
                | OperandAction::ReadCondWrite
                | OperandAction::CondReadWrite
        )
    }
}

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum InstructionEncoding {
    Legacy,
    _3DNOW,
    Xop,
    Vex,
    Evex,
    Mvex,
}

pub const INSTRUCTION_ENCODING_MAX_VALUE: InstructionEncoding = InstructionEncoding::Mvex;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum OpcodeMap {
    Default,
    _0F,
    _0F38,
    _0F3A,
    _0F0F,
    Xop8,
    Xop9,
    XopA,
}

pub const OPCODE_MAP_MAX_VALUE: OpcodeMap = OpcodeMap::XopA;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum MemoryOperandType {
    Invalid,
    /// Normal memory operand.
    Mem,
    /// The memory operand is only used for address generation (`LEA`).
    Agen,
    /// A memory operand using `SIB` addressing where the index register is
    /// interpreted as a bounds-register pair (`MPX`).
    Mib,
    /// Vector-indexed memory addressing with an `XMM` index register.
    Vsibx,
    /// Vector-indexed memory addressing with a `YMM` index register.
    Vsiby,
    /// Vector-indexed memory addressing with a `ZMM` index register.
    Vsibz,
}

pub const MEMORY_OPERAND_TYPE_MAX_VALUE: MemoryOperandType = MemoryOperandType::Vsibz;

bitflags! {
    /// Masks for the bits of `FLAGS/EFLAGS/RFLAGS` accessed by an
    /// instruction.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct CpuFlags: u32 {
        const CF   = 1 << 0;
        const PF   = 1 << 2;
        const AF   = 1 << 4;
        const ZF   = 1 << 6;
        const SF   = 1 << 7;
        const TF   = 1 << 8;
        const IF   = 1 << 9;
        const DF   = 1 << 10;
        const OF   = 1 << 11;
        const IOPL = 3 << 12;
        const NT   = 1 << 14;
        const RF   = 1 << 16;
        const VM   = 1 << 17;
        const AC   = 1 << 18;
        const VIF  = 1 << 19;
        const VIP  = 1 << 20;
        const ID   = 1 << 21;
    }
}

bitflags! {
    /// Masks for the `x87` condition flags accessed by an instruction.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct FpuFlags: u8 {
        const C0 = 1 << 0;
        const C1 = 1 << 1;
        const C2 = 1 << 2;
        const C3 = 1 << 3;
    }
}

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum CpuFlagAction {
    None,
    Tested,
    TestedModified,
    Modified,
    Set0,
    Set1,
    Undefined,
}

pub const CPU_FLAG_ACTION_MAX_VALUE: CpuFlagAction = CpuFlagAction::Undefined;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ExceptionClass {
    None,
    Sse1,
    Sse2,
    Sse3,
    Sse4,
    Sse5,
    Sse7,
    Avx1,
    Avx2,
    Avx3,
    Avx4,
    Avx5,
    Avx6,
    Avx7,
    Avx8,
    Avx11,
    Avx12,
    E1,
    E1NF,
    E2,
    E2NF,
    E3,
    E3NF,
    E4,
    E4NF,
    E5,
    E5NF,
    E6,
    E6NF,
    E7NM,
    E7NM128,
    E9NF,
    E10,
    E10NF,
    E11,
    E11NF,
    E12,
    E12NP,
    K20,
    K21,
}

pub const EXCEPTION_CLASS_MAX_VALUE: ExceptionClass = ExceptionClass::K21;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum MaskMode {
    Invalid,
    /// Masking is disabled (`K0` encoded).
    Disabled,
    /// Merging masking.
    Merging,
    /// Zeroing masking.
    Zeroing,
    /// The mask register is a control operand (gather/scatter).
    Control,
    /// The mask register is a control operand with zeroing semantics.
    ControlZeroing,
}

pub const MASK_MODE_MAX_VALUE: MaskMode = MaskMode::ControlZeroing;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum BroadcastMode {
    Invalid,
    _1_TO_2,
    _1_TO_4,
    _1_TO_8,
    _1_TO_16,
    _1_TO_32,
    _1_TO_64,
    _2_TO_4,
    _2_TO_8,
    _2_TO_16,
    _4_TO_8,
    _4_TO_16,
    _8_TO_16,
}

pub const BROADCAST_MODE_MAX_VALUE: BroadcastMode = BroadcastMode::_8_TO_16;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum RoundingMode {
    Invalid,
    /// Round to nearest (even).
    Rn,
    /// Round down (toward negative infinity).
    Rd,
    /// Round up (toward positive infinity).
    Ru,
    /// Round toward zero (truncate).
    Rz,
}

pub const ROUNDING_MODE_MAX_VALUE: RoundingMode = RoundingMode::Rz;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum SwizzleMode {
    Invalid,
    Dcba,
    Cdab,
    Badc,
    Dacb,
    Aaaa,
    Bbbb,
    Cccc,
    Dddd,
}

pub const SWIZZLE_MODE_MAX_VALUE: SwizzleMode = SwizzleMode::Dddd;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ConversionMode {
    Invalid,
    Float16,
    Sint8,
    Uint8,
    Sint16,
    Uint16,
}

pub const CONVERSION_MODE_MAX_VALUE: ConversionMode = ConversionMode::Uint16;

/// The EVEX tuple type, which describes how the size of a memory operand
/// scales with element size and broadcast. Used to derive the compressed
/// 8-bit displacement multiplier.
#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum TupleType {
    Invalid,
    /// Full vector, broadcast capable.
    Fv,
    /// Half vector, broadcast capable.
    Hv,
    /// Full vector memory.
    Fvm,
    /// Tuple1 scalar.
    T1S,
    /// Tuple1 fixed.
    T1F,
    /// Tuple1 4x32.
    T1_4X,
    /// Gather/scatter element.
    Gscat,
    /// Tuple2.
    T2,
    /// Tuple4.
    T4,
    /// Tuple8.
    T8,
    /// Half vector memory.
    Hvm,
    /// Quarter vector memory.
    Qvm,
    /// Eighth vector memory.
    Ovm,
    /// 128-bit memory.
    M128,
    /// Duplicate (`movddup`-style).
    Dup,
}

pub const TUPLE_TYPE_MAX_VALUE: TupleType = TupleType::Dup;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum PrefixType {
    /// The prefix is redundant and ignored.
    Ignored,
    /// The prefix is in effect for the decoded instruction.
    Effective,
    /// The prefix is consumed as a mandatory prefix of the opcode.
    Mandatory,
}

pub const PREFIX_TYPE_MAX_VALUE: PrefixType = PrefixType::Mandatory;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum BranchType {
    None,
    Short,
    Near,
    Far,
}

pub const BRANCH_TYPE_MAX_VALUE: BranchType = BranchType::Far;

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum BranchWidth {
    None,
    _8,
    _16,
    _32,
    _64,
}

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum AddressSizeHint {
    None,
    _16,
    _32,
    _64,
}

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum OperandSizeHint {
    None,
    _8,
    _16,
    _32,
    _64,
}

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum InstructionSegmentKind {
    None,
    Prefixes,
    Rex,
    Xop,
    Vex,
    Evex,
    Mvex,
    Opcode,
    ModRm,
    Sib,
    Displacement,
    Immediate,
}

pub const INSTRUCTION_SEGMENT_MAX_VALUE: InstructionSegmentKind = InstructionSegmentKind::Immediate;

/// The type of a formatter token.
#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Token(pub u8);

pub const TOKEN_INVALID: Token = Token(0x0);
pub const TOKEN_WHITESPACE: Token = Token(0x1);
pub const TOKEN_DELIMITER: Token = Token(0x2);
pub const TOKEN_PARENTHESIS_OPEN: Token = Token(0x3);
pub const TOKEN_PARENTHESIS_CLOSE: Token = Token(0x4);
pub const TOKEN_PREFIX: Token = Token(0x5);
pub const TOKEN_MNEMONIC: Token = Token(0x6);
pub const TOKEN_REGISTER: Token = Token(0x7);
pub const TOKEN_ADDRESS_ABS: Token = Token(0x8);
pub const TOKEN_ADDRESS_REL: Token = Token(0x9);
pub const TOKEN_DISPLACEMENT: Token = Token(0xA);
pub const TOKEN_IMMEDIATE: Token = Token(0xB);
pub const TOKEN_TYPECAST: Token = Token(0xC);
pub const TOKEN_DECORATOR: Token = Token(0xD);
pub const TOKEN_SYMBOL: Token = Token(0xE);
/// The base for user defined tokens.
pub const TOKEN_USER: Token = Token(0x80);

static TOKEN_NAMES: [&str; 0xF] = [
    "invalid",
    "whitespace",
    "delimiter",
    "opening parenthesis",
    "closing parenthesis",
    "prefix",
    "mnemonic",
    "register",
    "absolute address",
    "relative address",
    "displacement",
    "immediate",
    "typecast",
    "decorator",
    "symbol",
];

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0 <= 0xE {
            write!(f, "{}", TOKEN_NAMES[self.0 as usize])
        } else {
            write!(f, "<unknown>")
        }
    }
}

bitflags! {
    /// Attribute bits of a decoded instruction. `ACCEPTS_*` bits record
    /// which optional prefixes the opcode tolerates, `HAS_*` bits record
    /// what was actually encoded.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct InstructionAttributes: u64 {
        const HAS_MODRM                = 1 << 0;
        const HAS_SIB                  = 1 << 1;
        const HAS_REX                  = 1 << 2;
        const HAS_XOP                  = 1 << 3;
        const HAS_VEX                  = 1 << 4;
        const HAS_EVEX                 = 1 << 5;
        const HAS_MVEX                 = 1 << 6;
        const IS_RELATIVE              = 1 << 7;
        const IS_PRIVILEGED            = 1 << 8;
        const IS_FAR_BRANCH            = 1 << 9;
        const ACCEPTS_LOCK             = 1 << 10;
        const ACCEPTS_REP              = 1 << 11;
        const ACCEPTS_REPE             = 1 << 12;
        const ACCEPTS_REPNE            = 1 << 13;
        const ACCEPTS_BND              = 1 << 14;
        const ACCEPTS_XACQUIRE         = 1 << 15;
        const ACCEPTS_XRELEASE         = 1 << 16;
        const ACCEPTS_HLE_WITHOUT_LOCK = 1 << 17;
        const ACCEPTS_BRANCH_HINTS     = 1 << 18;
        const ACCEPTS_SEGMENT          = 1 << 19;
        const HAS_LOCK                 = 1 << 20;
        const HAS_REP                  = 1 << 21;
        const HAS_REPE                 = 1 << 22;
        const HAS_REPNE                = 1 << 23;
        const HAS_BND                  = 1 << 24;
        const HAS_XACQUIRE             = 1 << 25;
        const HAS_XRELEASE             = 1 << 26;
        const HAS_BRANCH_NOT_TAKEN     = 1 << 27;
        const HAS_BRANCH_TAKEN         = 1 << 28;
        const HAS_SEGMENT_CS           = 1 << 29;
        const HAS_SEGMENT_SS           = 1 << 30;
        const HAS_SEGMENT_DS           = 1 << 31;
        const HAS_SEGMENT_ES           = 1 << 32;
        const HAS_SEGMENT_FS           = 1 << 33;
        const HAS_SEGMENT_GS           = 1 << 34;
        const HAS_SEGMENT              = Self::HAS_SEGMENT_CS.bits()
            | Self::HAS_SEGMENT_SS.bits()
            | Self::HAS_SEGMENT_DS.bits()
            | Self::HAS_SEGMENT_ES.bits()
            | Self::HAS_SEGMENT_FS.bits()
            | Self::HAS_SEGMENT_GS.bits();
        const HAS_OPERANDSIZE          = 1 << 35;
        const HAS_ADDRESSSIZE          = 1 << 36;
        const CPUFLAG_ACCESS           = 1 << 37;
    }
}

impl InstructionAttributes {
    /// The `HAS_SEGMENT_*` attribute bit for the given segment register, if
    /// any.
    pub fn segment_attribute(segment: Register) -> InstructionAttributes {
        match segment {
            Register::CS => InstructionAttributes::HAS_SEGMENT_CS,
            Register::SS => InstructionAttributes::HAS_SEGMENT_SS,
            Register::DS => InstructionAttributes::HAS_SEGMENT_DS,
            Register::ES => InstructionAttributes::HAS_SEGMENT_ES,
            Register::FS => InstructionAttributes::HAS_SEGMENT_FS,
            Register::GS => InstructionAttributes::HAS_SEGMENT_GS,
            _ => InstructionAttributes::empty(),
        }
    }
}
