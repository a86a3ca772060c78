//! The decoded instruction and operand model.

use crate::enums::*;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct AccessedFlags<FlagType> {
    /// Flags that may be read by the instruction.
    pub tested: FlagType,
    /// Flags that may be modified by the instruction.
    pub modified: FlagType,
    /// Flags that the instruction sets to 0.
    pub set_0: FlagType,
    /// Flags that the instruction sets to 1.
    pub set_1: FlagType,
    /// Flags where access behavior is undefined / CPU model specific.
    pub undefined: FlagType,
}

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum DecodedOperandKind {
    Unused,
    Reg(Register),
    Mem(MemoryInfo),
    Ptr(PointerInfo),
    Imm(ImmediateInfo),
}

impl Default for DecodedOperandKind {
    fn default() -> Self {
        DecodedOperandKind::Unused
    }
}

/// A decoded operand.
#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DecodedOperand {
    /// The operand id.
    pub id: u8,
    /// The visibility of the operand.
    pub visibility: OperandVisibility,
    /// The operand action.
    pub action: OperandAction,
    /// The operand encoding.
    pub encoding: OperandEncoding,
    /// The logical size of the operand, in bits.
    pub size: u16,
    /// The element type.
    pub element_type: ElementType,
    /// The size of a single element.
    pub element_size: u16,
    /// The number of elements.
    pub element_count: u16,
    /// Operand information specific to the kind of the operand.
    pub kind: DecodedOperandKind,
}

impl Default for OperandVisibility {
    fn default() -> Self {
        OperandVisibility::Invalid
    }
}

impl Default for OperandAction {
    fn default() -> Self {
        OperandAction::Invalid
    }
}

impl Default for OperandEncoding {
    fn default() -> Self {
        OperandEncoding::None
    }
}

impl Default for ElementType {
    fn default() -> Self {
        ElementType::Invalid
    }
}

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MemoryInfo {
    pub ty: MemoryOperandType,
    pub segment: Register,
    pub base: Register,
    pub index: Register,
    pub scale: u8,
    pub disp: DisplacementInfo,
}

impl Default for MemoryInfo {
    fn default() -> Self {
        MemoryInfo {
            ty: MemoryOperandType::Invalid,
            segment: Register::None,
            base: Register::None,
            index: Register::None,
            scale: 0,
            disp: DisplacementInfo::default(),
        }
    }
}

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct DisplacementInfo {
    /// Signals if a displacement is present.
    pub has_displacement: bool,
    /// The displacement value.
    pub displacement: i64,
}

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct PointerInfo {
    pub segment: u16,
    pub offset: u32,
}

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ImmediateInfo {
    /// Signals, if the immediate is signed.
    pub is_signed: bool,
    /// Signals, if the immediate is relative.
    pub is_relative: bool,
    /// The immediate value. Reinterpret as `i64` if `is_signed` is set.
    pub value: u64,
}

/// Extended information for `AVX` instructions.
#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AvxInfo {
    /// The `AVX` vector length, in bits (0 if not applicable).
    pub vector_length: u16,
    /// The `EVEX` tuple type of the memory operand.
    pub tuple_type: TupleType,
    /// The element size the tuple scaling is based on, in bits.
    pub element_size: u16,
    /// The scale factor for compressed 8-bit displacement values.
    pub cd8_scale: u8,
    /// The masking mode.
    pub mask_mode: MaskMode,
    /// The mask register.
    pub mask_reg: Register,
    /// Signals if the broadcast is a static broadcast (always active).
    pub broadcast_static: bool,
    /// The `AVX` broadcast mode.
    pub broadcast_mode: BroadcastMode,
    /// The `AVX` rounding mode.
    pub rounding_mode: RoundingMode,
    /// The `AVX` register swizzle mode (`MVEX` only).
    pub swizzle_mode: SwizzleMode,
    /// The `AVX` data conversion mode (`MVEX` only).
    pub conversion_mode: ConversionMode,
    /// Signals if suppress-all-exceptions is enabled.
    pub has_sae: bool,
    /// Signals if the instruction has a memory eviction hint. Only ever
    /// reported for memory forms of `MVEX` instructions; for register
    /// forms the `E` bit selects rounding/SAE instead.
    pub has_eviction_hint: bool,
}

impl Default for AvxInfo {
    fn default() -> Self {
        AvxInfo {
            vector_length: 0,
            tuple_type: TupleType::Invalid,
            element_size: 0,
            cd8_scale: 0,
            mask_mode: MaskMode::Invalid,
            mask_reg: Register::None,
            broadcast_static: false,
            broadcast_mode: BroadcastMode::Invalid,
            rounding_mode: RoundingMode::Invalid,
            swizzle_mode: SwizzleMode::Invalid,
            conversion_mode: ConversionMode::Invalid,
            has_sae: false,
            has_eviction_hint: false,
        }
    }
}

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MetaInfo {
    /// The category this instruction belongs to.
    pub category: InstructionCategory,
    /// The instruction set this instruction belongs to.
    pub isa_set: ISASet,
    /// The instruction set extension this instruction belongs to.
    pub isa_ext: ISAExt,
    /// The branch type.
    pub branch_type: BranchType,
    /// The exception class of this instruction.
    pub exception_class: ExceptionClass,
}

impl Default for MetaInfo {
    fn default() -> Self {
        MetaInfo {
            category: InstructionCategory::INVALID,
            isa_set: ISASet::INVALID,
            isa_ext: ISAExt::INVALID,
            branch_type: BranchType::None,
            exception_class: ExceptionClass::None,
        }
    }
}

/// Detailed info about the `REX` prefix.
#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[allow(non_snake_case)]
pub struct RawInfoRex {
    /// 64-bit operand-size promotion.
    pub W: u8,
    /// Extension of the `ModRM.reg` field.
    pub R: u8,
    /// Extension of the `SIB.index` field.
    pub X: u8,
    /// Extension of the `ModRM.rm`, `SIB.base` or `opcode.reg` field.
    pub B: u8,
    /// The offset of the effective `REX` byte, relative to the beginning of
    /// the instruction, in bytes.
    pub offset: u8,
}

/// Detailed info about the `XOP` prefix.
#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[allow(non_snake_case)]
pub struct RawInfoXop {
    /// Extension of the `ModRM.reg` field (inverted).
    pub R: u8,
    /// Extension of the `SIB.index` field (inverted).
    pub X: u8,
    /// Extension of the `ModRM.rm`, `SIB.base` or `opcode.reg` (inverted).
    pub B: u8,
    /// Opcode-map specifier.
    pub m_mmmm: u8,
    /// 64-bit operand-size promotion or opcode-extension.
    pub W: u8,
    /// `NDS`/`NDD` register specifier (inverted).
    pub vvvv: u8,
    /// Vector-length specifier.
    pub L: u8,
    /// Compressed legacy prefix.
    pub pp: u8,
    /// The offset of the first `XOP` byte, in bytes.
    pub offset: u8,
}

/// Detailed info about the `VEX` prefix.
#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[allow(non_snake_case)]
pub struct RawInfoVex {
    /// Extension of the `ModRM.reg` field (inverted).
    pub R: u8,
    /// Extension of the `SIB.index` field (inverted).
    pub X: u8,
    /// Extension of the `ModRM.rm`, `SIB.base` or `opcode.reg` field
    /// (inverted).
    pub B: u8,
    /// Opcode-map specifier.
    pub m_mmmm: u8,
    /// 64-bit operand-size promotion or opcode-extension.
    pub W: u8,
    /// `NDS`/`NDD` register specifier (inverted).
    pub vvvv: u8,
    /// Vector-length specifier.
    pub L: u8,
    /// Compressed legacy prefix.
    pub pp: u8,
    /// The offset of the first `VEX` byte, in bytes.
    pub offset: u8,
    /// The size of the `VEX` prefix, in bytes (2 or 3).
    pub size: u8,
}

/// Detailed info about the `EVEX` prefix.
#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[allow(non_snake_case)]
pub struct RawInfoEvex {
    /// Extension of the `ModRM.reg` field (inverted).
    pub R: u8,
    /// Extension of the `SIB.index/vidx` field (inverted).
    pub X: u8,
    /// Extension of the `ModRM.rm` or `SIB.base` field (inverted).
    pub B: u8,
    /// High-16 register specifier modifier (inverted).
    pub R2: u8,
    /// Opcode-map specifier.
    pub mmm: u8,
    /// 64-bit operand-size promotion or opcode-extension.
    pub W: u8,
    /// `NDS`/`NDD` register specifier (inverted).
    pub vvvv: u8,
    /// Compressed legacy prefix.
    pub pp: u8,
    /// Zeroing/merging.
    pub z: u8,
    /// Vector-length or rounding-control specifier (most significant bit).
    pub L2: u8,
    /// Vector-length or rounding-control specifier (least significant bit).
    pub L: u8,
    /// Broadcast/RC/SAE context.
    pub b: u8,
    /// High-16 `NDS`/`VIDX` register specifier (inverted).
    pub V2: u8,
    /// Embedded opmask register specifier.
    pub aaa: u8,
    /// The offset of the first `EVEX` byte, in bytes.
    pub offset: u8,
}

/// Detailed info about the `MVEX` prefix.
#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[allow(non_snake_case)]
pub struct RawInfoMvex {
    /// Extension of the `ModRM.reg` field (inverted).
    pub R: u8,
    /// Extension of the `SIB.index/vidx` field (inverted).
    pub X: u8,
    /// Extension of the `ModRM.rm` or `SIB.base` field (inverted).
    pub B: u8,
    /// High-16 register specifier modifier (inverted).
    pub R2: u8,
    /// Opcode-map specifier.
    pub mmmm: u8,
    /// 64-bit operand-size promotion or opcode-extension.
    pub W: u8,
    /// `NDS`/`NDD` register specifier (inverted).
    pub vvvv: u8,
    /// Compressed legacy prefix.
    pub pp: u8,
    /// Non-temporal/eviction hint.
    pub E: u8,
    /// Swizzle/broadcast/up-convert/down-convert/static-rounding controls.
    pub SSS: u8,
    /// High-16 `NDS`/`VIDX` register specifier (inverted).
    pub V2: u8,
    /// Embedded opmask register specifier.
    pub kkk: u8,
    /// The offset of the first `MVEX` byte, in bytes.
    pub offset: u8,
}

/// Detailed info about the `ModRM` byte.
#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct RawInfoModRm {
    /// The addressing mode.
    pub mod_: u8,
    /// Register specifier or opcode-extension.
    pub reg: u8,
    /// Register specifier or opcode-extension.
    pub rm: u8,
    /// The offset of the `ModRM` byte, in bytes.
    pub offset: u8,
}

/// Detailed info about the `SIB` byte.
#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct RawInfoSib {
    /// The scale factor.
    pub scale: u8,
    /// The index-register specifier.
    pub index: u8,
    /// The base-register specifier.
    pub base: u8,
    /// The offset of the `SIB` byte, in bytes.
    pub offset: u8,
}

/// Detailed info about displacement bytes.
#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct RawInfoDisp {
    /// The displacement value.
    pub value: i64,
    /// The physical displacement size, in bits.
    pub size: u8,
    /// The offset of the displacement data, in bytes.
    pub offset: u8,
}

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct RawImmediateInfo {
    /// Signals, if the immediate value is signed.
    pub is_signed: bool,
    /// Signals, if the immediate value contains a relative offset. Use
    /// [`crate::calc_absolute_address`] to determine the absolute address.
    pub is_relative: bool,
    /// The immediate value. Reinterpret as `i64` if `is_signed` is set.
    pub value: u64,
    /// The physical immediate size, in bits.
    pub size: u8,
    /// The offset of the immediate data, in bytes.
    pub offset: u8,
}

/// Detailed info about a legacy prefix byte.
#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Prefix {
    /// The type of this prefix.
    pub ty: PrefixType,
    /// The value of this prefix.
    pub value: u8,
}

impl Default for Prefix {
    fn default() -> Self {
        Prefix {
            ty: PrefixType::Ignored,
            value: 0,
        }
    }
}

/// Raw info for the mutually exclusive vector/REX prefix families.
#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RawInfoKindSpecific {
    Legacy(RawInfoRex),
    _3DNOW,
    Xop(RawInfoXop),
    Vex(RawInfoVex),
    Evex(RawInfoEvex),
    Mvex(RawInfoMvex),
}

impl Default for RawInfoKindSpecific {
    fn default() -> Self {
        RawInfoKindSpecific::Legacy(RawInfoRex::default())
    }
}

#[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct RawInfo {
    /// The number of legacy prefixes.
    pub prefix_count: u8,
    /// Detailed info about the legacy prefixes (including `REX`).
    pub prefixes: [Prefix; MAX_INSTRUCTION_LENGTH],
    /// Raw info depending on the instruction kind.
    pub kind_specific: RawInfoKindSpecific,
    /// Detailed info about the `ModRM` byte.
    pub modrm: RawInfoModRm,
    /// Detailed info about the `SIB` byte.
    pub sib: RawInfoSib,
    /// Detailed info about displacement bytes.
    pub disp: RawInfoDisp,
    /// Detailed information about immediate bytes.
    pub imm: [RawImmediateInfo; 2],
}

/// All information the decoder discovers about an instruction.
#[cfg_attr(feature = "serialization", derive(Serialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DecodedInstruction {
    /// The machine mode used to decode this instruction.
    pub machine_mode: MachineMode,
    /// The instruction mnemonic.
    pub mnemonic: Mnemonic,
    /// The length of the decoded instruction, in bytes.
    pub length: u8,
    /// The instruction encoding.
    pub encoding: InstructionEncoding,
    /// The opcode map.
    pub opcode_map: OpcodeMap,
    /// The instruction opcode.
    pub opcode: u8,
    /// The stack width, in bits.
    pub stack_width: u8,
    /// The effective operand width, in bits.
    pub operand_width: u8,
    /// The effective address width, in bits.
    pub address_width: u8,
    /// The number of instruction operands (including implicit and hidden
    /// ones).
    pub operand_count: u8,
    /// The number of explicit (visible) instruction operands.
    pub operand_count_visible: u8,
    /// Instruction attributes.
    pub attributes: InstructionAttributes,
    /// Information about the CPU flags accessed by the instruction.
    ///
    /// The bits in the masks correspond to the actual bits in the
    /// `FLAGS/EFLAGS/RFLAGS` register.
    pub cpu_flags: Option<&'static AccessedFlags<CpuFlags>>,
    /// Information about the FPU flags accessed by the instruction.
    pub fpu_flags: Option<&'static AccessedFlags<FpuFlags>>,
    /// Extended information for `AVX` instructions.
    pub avx: AvxInfo,
    /// Meta info.
    pub meta: MetaInfo,
    /// Detailed information about different instruction parts.
    pub raw: RawInfo,
}

impl Default for DecodedInstruction {
    fn default() -> Self {
        DecodedInstruction {
            machine_mode: MachineMode::Long64,
            mnemonic: Mnemonic::INVALID,
            length: 0,
            encoding: InstructionEncoding::Legacy,
            opcode_map: OpcodeMap::Default,
            opcode: 0,
            stack_width: 0,
            operand_width: 0,
            address_width: 0,
            operand_count: 0,
            operand_count_visible: 0,
            attributes: InstructionAttributes::empty(),
            cpu_flags: None,
            fpu_flags: None,
            avx: AvxInfo::default(),
            meta: MetaInfo::default(),
            raw: RawInfo::default(),
        }
    }
}

impl DecodedInstruction {
    /// Calculates the absolute address for the given instruction operand,
    /// using `address` as the runtime address of this instruction.
    #[inline]
    pub fn calc_absolute_address(
        &self,
        address: u64,
        operand: &DecodedOperand,
    ) -> crate::Result<u64> {
        crate::utils::calc_absolute_address(self, operand, address)
    }
}
