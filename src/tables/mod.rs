//! The read-only instruction table model: decoder tree nodes, physical
//! encoding info, instruction definitions and operand definitions.
//!
//! All tables are statically initialized and never mutated at runtime. The
//! decoder tree is a flat arena of nodes; each node is a slice of 16-bit
//! cells. The first cell is the header `(arg0 << 8) | type`, the remaining
//! cells are entries holding either node ids (indices into the arena) or
//! the explicit `INVALID_NODE` marker. Definition leaves carry the physical
//! encoding id in `arg0` and the definition id in their single entry.

pub(crate) mod generated;

use crate::decoder::types::AccessedFlags;
use crate::enums::*;

/// Entry marker for an invalid (undefined) encoding.
pub(crate) const INVALID_NODE: u16 = 0xFFFF;

/// Opcode-table ids, as stored in `SwitchTable` node arguments. The vector
/// prefix families add their map value to the base id.
pub(crate) const OPCODE_TABLE_PRIMARY: u8 = 0x00;
pub(crate) const OPCODE_TABLE_0F: u8 = 0x01;
pub(crate) const OPCODE_TABLE_0F38: u8 = 0x02;
pub(crate) const OPCODE_TABLE_0F3A: u8 = 0x03;
pub(crate) const OPCODE_TABLE_VEX: u8 = 0x04;
pub(crate) const OPCODE_TABLE_EVEX: u8 = 0x14;
pub(crate) const OPCODE_TABLE_MVEX: u8 = 0x34;
pub(crate) const OPCODE_TABLE_XOP: u8 = 0x44;
pub(crate) const OPCODE_TABLE_3DNOW: u8 = 0x47;

/// Decoder tree node types. The 8-bit argument of the header and the entry
/// arity depend on the type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub(crate) enum NodeType {
    Invalid = 0x00,
    /// Leaf. `arg0` = encoding-info id, entry 0 = definition id.
    Definition = 0x01,
    /// Pivot to a new opcode table. `arg0` = opcode-table id.
    SwitchTable = 0x02,
    /// 256 entries, indexed by the next opcode byte.
    OpcodeTable = 0x03,
    /// 2 entries: \[!64-bit, 64-bit\].
    Mode = 0x04,
    /// 2 entries: \[mod != 3, mod == 3\].
    ModrmMod = 0x05,
    /// 8 entries, indexed by `ModRM.reg` (without extension bits).
    ModrmReg = 0x06,
    /// 8 entries, indexed by `ModRM.rm` (without extension bits).
    ModrmRm = 0x07,
    /// 4 entries: \[none, 66, F3, F2\].
    MandatoryPrefix = 0x08,
    /// 2 entries: \[16, 32/64\].
    OperandSize = 0x09,
    /// 3 entries: \[16, 32, 64\].
    AddressSize = 0x0A,
    /// 3 entries: \[128, 256, 512\].
    VectorLength = 0x0B,
    /// 2 entries, indexed by `REX/XOP/VEX/EVEX/MVEX.W`.
    RexW = 0x0C,
    /// 2 entries, indexed by `REX/XOP/VEX/EVEX/MVEX.B`.
    RexB = 0x0D,
    /// 2 entries, indexed by `EVEX.b`.
    EvexB = 0x0E,
    /// 2 entries, indexed by `MVEX.E`.
    MvexE = 0x0F,
    /// 2 entries each: \[mode disabled, mode enabled\].
    ModeAmd = 0x10,
    ModeKnc = 0x11,
    ModeMpx = 0x12,
    ModeCet = 0x13,
    ModeLzcnt = 0x14,
    ModeTzcnt = 0x15,
    ModeWbnoinvd = 0x16,
    ModeCldemote = 0x17,
    ModeIprefetch = 0x18,
    ModeUd0Compat = 0x19,
}

impl NodeType {
    pub(crate) fn from_raw(raw: u8) -> NodeType {
        match raw {
            0x01 => NodeType::Definition,
            0x02 => NodeType::SwitchTable,
            0x03 => NodeType::OpcodeTable,
            0x04 => NodeType::Mode,
            0x05 => NodeType::ModrmMod,
            0x06 => NodeType::ModrmReg,
            0x07 => NodeType::ModrmRm,
            0x08 => NodeType::MandatoryPrefix,
            0x09 => NodeType::OperandSize,
            0x0A => NodeType::AddressSize,
            0x0B => NodeType::VectorLength,
            0x0C => NodeType::RexW,
            0x0D => NodeType::RexB,
            0x0E => NodeType::EvexB,
            0x0F => NodeType::MvexE,
            0x10 => NodeType::ModeAmd,
            0x11 => NodeType::ModeKnc,
            0x12 => NodeType::ModeMpx,
            0x13 => NodeType::ModeCet,
            0x14 => NodeType::ModeLzcnt,
            0x15 => NodeType::ModeTzcnt,
            0x16 => NodeType::ModeWbnoinvd,
            0x17 => NodeType::ModeCldemote,
            0x18 => NodeType::ModeIprefetch,
            0x19 => NodeType::ModeUd0Compat,
            _ => NodeType::Invalid,
        }
    }
}

/// View over one node of the decoder tree.
#[derive(Clone, Copy)]
pub(crate) struct TreeNode {
    cells: &'static [u16],
}

impl TreeNode {
    pub(crate) fn get(id: u16) -> TreeNode {
        TreeNode {
            cells: generated::trees::TREE_NODES[id as usize],
        }
    }

    pub(crate) fn ty(self) -> NodeType {
        NodeType::from_raw((self.cells[0] & 0xFF) as u8)
    }

    pub(crate) fn arg0(self) -> u8 {
        (self.cells[0] >> 8) as u8
    }

    /// The entry at `index`, a node id or `INVALID_NODE`.
    pub(crate) fn entry(self, index: usize) -> u16 {
        self.cells[1 + index]
    }
}

/// Returns the arena id of the root node for the given opcode-table id.
pub(crate) fn opcode_table_root(table_id: u8) -> Option<u16> {
    use generated::trees as t;
    Some(match table_id {
        OPCODE_TABLE_PRIMARY => t::TABLE_PRIMARY,
        OPCODE_TABLE_0F => t::TABLE_0F,
        OPCODE_TABLE_0F38 => t::TABLE_0F38,
        OPCODE_TABLE_0F3A => t::TABLE_0F3A,
        0x05 => t::TABLE_VEX_0F,
        0x06 => t::TABLE_VEX_0F38,
        0x07 => t::TABLE_VEX_0F3A,
        0x15 => t::TABLE_EVEX_0F,
        0x16 => t::TABLE_EVEX_0F38,
        0x17 => t::TABLE_EVEX_0F3A,
        0x35 => t::TABLE_MVEX_0F,
        0x44 => t::TABLE_XOP8,
        0x45 => t::TABLE_XOP9,
        0x46 => t::TABLE_XOPA,
        OPCODE_TABLE_3DNOW => t::TABLE_3DNOW,
        _ => return None,
    })
}

/* ---------------------------------------------------------------------- */
/* Physical encoding info                                                 */
/* ---------------------------------------------------------------------- */

pub(crate) const ENC_FLAG_HAS_MODRM: u8 = 0x01;
pub(crate) const ENC_FLAG_HAS_DISP: u8 = 0x02;
pub(crate) const ENC_FLAG_HAS_IMM0: u8 = 0x04;
pub(crate) const ENC_FLAG_HAS_IMM1: u8 = 0x08;
/// `modrm.mod` is ignored and always treated as 3 ("reg, reg" form).
pub(crate) const ENC_FLAG_FORCE_REG_FORM: u8 = 0x10;

#[derive(Clone, Copy, Debug)]
pub(crate) struct ImmediateEncodingInfo {
    /// Physical size in bits, indexed by the effective-operand-size index.
    pub size: [u8; 3],
    pub is_signed: bool,
    pub is_address: bool,
    pub is_relative: bool,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct InstructionEncodingInfo {
    pub flags: u8,
    /// Physical displacement size in bits, indexed by the effective
    /// address-size index.
    pub disp_size: [u8; 3],
    pub imm: [ImmediateEncodingInfo; 2],
}

pub(crate) fn encoding_info(id: u8) -> &'static InstructionEncodingInfo {
    &generated::encodings::INSTR_ENCODINGS[id as usize]
}

/* ---------------------------------------------------------------------- */
/* Operand definitions                                                    */
/* ---------------------------------------------------------------------- */

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SemanticOperandType {
    ImplicitReg,
    ImplicitMem,
    Gpr8,
    Gpr16,
    Gpr32,
    Gpr64,
    /// GPR sized 16/32/64 by effective operand size.
    GprV,
    /// GPR sized 32/32/64 by effective operand size.
    GprY,
    /// GPR sized 16/32/32 by effective operand size.
    GprZ,
    Fpr,
    Mmx,
    Xmm,
    Ymm,
    Zmm,
    Bnd,
    Sreg,
    Cr,
    Dr,
    MaskReg,
    Mem,
    MemVsibX,
    MemVsibY,
    MemVsibZ,
    Imm,
    Rel,
    Ptr,
    Agen,
    Moffs,
}

/// Size-family selector for implicit GPR/IP/FLAGS operands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ImplicitRegister {
    Static(Register),
    /// GPR with the given id, sized by effective operand size.
    GprOsz(u8),
    /// GPR with the given id, sized by effective address size.
    GprAsz(u8),
    /// GPR with the given id, sized by stack width.
    GprSsz(u8),
    /// Instruction pointer sized by stack width.
    IpSsz,
    /// Flags register sized by stack width.
    FlagsSsz,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ImplicitMemBase {
    /// `[rAX]`, sized by effective address size.
    AAx,
    /// `[rBX]`.
    ABx,
    /// `[rSI]`.
    ASi,
    /// `[rDI]`.
    ADi,
    /// `[rSP]`, sized by stack width (stack accesses).
    ASp,
    /// `[rBP]`, sized by stack width.
    ABp,
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum OperandSource {
    None,
    Encoding(OperandEncoding),
    ImplicitReg(ImplicitRegister),
    ImplicitMem {
        segment: Register,
        base: ImplicitMemBase,
    },
}

/// Internal element types carry their width where it is fixed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum InternalElementType {
    Invalid,
    Variable,
    Struct,
    Int,
    Uint,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uint128,
    Uint256,
    Float16,
    Float32,
    Float64,
    Float80,
    Bcd80,
    Cc,
}

impl InternalElementType {
    /// Resolves to the public element type and size. A size of `0` means
    /// "the operand size" (scalar int/uint).
    pub(crate) fn resolve(self) -> (ElementType, u16) {
        use InternalElementType::*;
        match self {
            Invalid | Variable => (ElementType::Invalid, 0),
            Struct => (ElementType::Struct, 0),
            Int => (ElementType::Int, 0),
            Uint => (ElementType::Uint, 0),
            Int8 => (ElementType::Int, 8),
            Int16 => (ElementType::Int, 16),
            Int32 => (ElementType::Int, 32),
            Int64 => (ElementType::Int, 64),
            Uint8 => (ElementType::Uint, 8),
            Uint16 => (ElementType::Uint, 16),
            Uint32 => (ElementType::Uint, 32),
            Uint64 => (ElementType::Uint, 64),
            Uint128 => (ElementType::Uint, 128),
            Uint256 => (ElementType::Uint, 256),
            Float16 => (ElementType::Float16, 16),
            Float32 => (ElementType::Float32, 32),
            Float64 => (ElementType::Float64, 64),
            Float80 => (ElementType::Float80, 80),
            Bcd80 => (ElementType::LongBcd, 80),
            Cc => (ElementType::Cc, 0),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct OperandDefinition {
    pub ty: SemanticOperandType,
    pub visibility: OperandVisibility,
    pub action: OperandAction,
    /// Logical operand size in bits for effective operand sizes 16/32/64.
    pub size: [u16; 3],
    pub element_type: InternalElementType,
    pub op: OperandSource,
}

/* ---------------------------------------------------------------------- */
/* Instruction definitions                                                */
/* ---------------------------------------------------------------------- */

/// How the effective operand size maps onto this instruction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum OperandSizeMap {
    /// 16/32/64 selected by prefixes as usual.
    Default,
    /// In 64-bit mode the size defaults to 64 without a 66 prefix
    /// (`PUSH`, near branches).
    Default64,
    /// In 64-bit mode the size is always 64.
    Force64,
    /// Byte-sized instruction; the effective operand width is 8.
    Byte,
}

bitflags::bitflags! {
    /// Optional prefixes a `DEFAULT`-encoding instruction tolerates.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub(crate) struct AcceptedPrefixes: u16 {
        const LOCK             = 1 << 0;
        const REP              = 1 << 1;
        const REPE_REPZ        = 1 << 2;
        const REPNE_REPNZ      = 1 << 3;
        const BOUND            = 1 << 4;
        const XACQUIRE         = 1 << 5;
        const XRELEASE         = 1 << 6;
        const HLE_WITHOUT_LOCK = 1 << 7;
        const BRANCH_HINTS     = 1 << 8;
        const SEGMENT          = 1 << 9;
    }
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub(crate) struct DefinitionFlags: u8 {
        const PRIVILEGED = 1 << 0;
        const FAR_BRANCH = 1 << 1;
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct MetaData {
    pub category: InstructionCategory,
    pub isa_set: ISASet,
    pub isa_ext: ISAExt,
    pub branch_type: BranchType,
    pub exception_class: ExceptionClass,
}

/// Fields shared by all encoding classes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct InstructionDefinition {
    pub mnemonic: Mnemonic,
    pub operands: &'static [OperandDefinition],
    pub op_size_map: OperandSizeMap,
    pub cpu_flags: Option<&'static AccessedFlags<CpuFlags>>,
    pub fpu_flags: Option<&'static AccessedFlags<FpuFlags>>,
    pub meta: MetaData,
    pub flags: DefinitionFlags,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct LegacyDefinition {
    pub base: InstructionDefinition,
    pub accepts: AcceptedPrefixes,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct VexDefinition {
    pub base: InstructionDefinition,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct XopDefinition {
    pub base: InstructionDefinition,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ThreeDNowDefinition {
    pub base: InstructionDefinition,
}

/// The meaning of `EVEX.b` for an instruction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EvexFunctionality {
    Invalid,
    /// `EVEX.b` enables broadcast.
    Bc,
    /// `EVEX.b` enables embedded rounding (register form).
    Rc,
    /// `EVEX.b` enables suppress-all-exceptions (register form).
    Sae,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum MaskPolicy {
    Invalid,
    /// Accepts any mask register, `K0` included.
    Allowed,
    /// Requires a mask register other than `K0`.
    Required,
    /// Forbids mask registers other than `K0`.
    Forbidden,
}

/// Fixed vector length requirement of a definition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum InternalVectorLength {
    Default,
    Fixed128,
    Fixed256,
    Fixed512,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct EvexDefinition {
    pub base: InstructionDefinition,
    pub vector_length: InternalVectorLength,
    pub tuple_type: TupleType,
    /// Element size in bits (the broadcast granularity), 0 if N/A.
    pub element_size: u16,
    pub functionality: EvexFunctionality,
    pub mask_policy: MaskPolicy,
    /// Mask register is a control operand (gathers/compares into masks).
    pub mask_is_control: bool,
    /// The instruction only supports zeroing masking.
    pub zeroing_only: bool,
}

/// What `MVEX.SSS` controls for an instruction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum MvexFunctionality {
    Invalid,
    /// `SSS` is ignored.
    Ignored,
    /// Embedded rounding and SAE (register form).
    Rc,
    /// Register swizzle, 32-bit elements.
    RegSwizzle32,
    /// Register swizzle, 64-bit elements.
    RegSwizzle64,
    /// 32-bit float up-conversion for load-op memory operands.
    FloatUconv32,
    /// 64-bit float up-conversion for load-op memory operands.
    FloatUconv64,
    /// 32-bit integer up-conversion for load-op memory operands.
    IntUconv32,
    /// 64-bit integer up-conversion for load-op memory operands.
    IntUconv64,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct MvexDefinition {
    pub base: InstructionDefinition,
    pub functionality: MvexFunctionality,
    pub mask_policy: MaskPolicy,
}

pub(crate) fn definition_legacy(id: u16) -> &'static LegacyDefinition {
    &generated::legacy::DEFINITIONS_LEGACY[id as usize]
}

pub(crate) fn definition_3dnow(id: u16) -> &'static ThreeDNowDefinition {
    &generated::tdnow::DEFINITIONS_3DNOW[id as usize]
}

pub(crate) fn definition_xop(id: u16) -> &'static XopDefinition {
    &generated::xop::DEFINITIONS_XOP[id as usize]
}

pub(crate) fn definition_vex(id: u16) -> &'static VexDefinition {
    &generated::vex::DEFINITIONS_VEX[id as usize]
}

pub(crate) fn definition_evex(id: u16) -> &'static EvexDefinition {
    &generated::evex::DEFINITIONS_EVEX[id as usize]
}

pub(crate) fn definition_mvex(id: u16) -> &'static MvexDefinition {
    &generated::mvex::DEFINITIONS_MVEX[id as usize]
}
