//! The decoder state machine: prefix absorption, encoding dispatch, the
//! decision-tree walk and optional-part harvesting.

use crate::decoder::operands;
use crate::decoder::types::*;
use crate::decoder::Decoder;
use crate::enums::*;
use crate::status::{Result, Status};
use crate::tables::{self, NodeType, TreeNode, INVALID_NODE};

/// Bounded byte reader over the input window.
pub(crate) struct Reader<'a> {
    bytes: &'a [u8],
    pub pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Reader { bytes, pos: 0 }
    }

    fn check(&self, at: usize) -> Result<()> {
        if at >= MAX_INSTRUCTION_LENGTH {
            return Err(Status::InstructionTooLong);
        }
        if at >= self.bytes.len() {
            return Err(Status::NoMoreData);
        }
        Ok(())
    }

    fn peek(&self) -> Result<u8> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Result<u8> {
        self.check(self.pos + offset)?;
        Ok(self.bytes[self.pos + offset])
    }

    fn read_u8(&mut self) -> Result<u8> {
        let value = self.peek()?;
        self.pos += 1;
        Ok(value)
    }

    /// Reads a little-endian unsigned value of `bits` size (8/16/32/64).
    fn read_uint(&mut self, bits: u8) -> Result<u64> {
        let count = (bits / 8) as usize;
        let mut value = 0u64;
        for i in 0..count {
            value |= (self.read_u8()? as u64) << (i * 8);
        }
        Ok(value)
    }

    /// Reads a little-endian sign-extended value of `bits` size.
    fn read_sint(&mut self, bits: u8) -> Result<i64> {
        let raw = self.read_uint(bits)?;
        let shift = 64 - bits as u32;
        Ok(((raw << shift) as i64) >> shift)
    }
}

/// Per-call decode context: harvested prefix/vector state shared between
/// the tree walk and operand materialization.
#[derive(Default)]
pub(crate) struct Ctx {
    pub mode64: bool,

    // Prefix state.
    pub lock: bool,
    /// Last effective group-1 byte (0xF2/0xF3) or 0.
    pub group1: u8,
    pub group1_index: usize,
    pub has_osz_override: bool,
    pub osz_index: usize,
    pub has_asz_override: bool,
    /// Last segment override, if any.
    pub segment: Register,
    pub mandatory_66: bool,
    pub mandatory_f2f3: bool,

    // Unified REX/XOP/VEX/EVEX/MVEX state (extension bits, not inverted).
    pub rex_present: bool,
    pub vector_prefix: bool,
    pub w: u8,
    pub r: u8,
    pub x: u8,
    pub b: u8,
    pub r2: u8,
    pub v2: u8,
    pub vvvv: u8,
    pub ll: u8,
    pub evex_b: u8,
    pub evex_z: u8,
    pub mvex_e: u8,
    pub mvex_sss: u8,
    pub mask: u8,

    // ModRM/SIB state.
    pub has_modrm: bool,
    pub addressing_done: bool,

    // Effective sizes.
    pub easz_idx: usize,
    pub eosz_idx: usize,

    // Compressed disp8 scale, filled after the definition is known.
    pub cd8_scale: u8,

    // The bound definition id (valid after the tree walk).
    pub definition_id: u16,
}

impl Ctx {
    pub(crate) fn easz_bits(&self) -> u8 {
        16 << self.easz_idx
    }

    pub(crate) fn modrm_is_reg(&self, insn: &DecodedInstruction) -> bool {
        insn.raw.modrm.mod_ == 3
    }

    /// The segment override that applies to memory operands. Outside of
    /// 64-bit mode every override is effective; in 64-bit mode only FS/GS
    /// are honored.
    pub(crate) fn effective_segment(&self) -> Register {
        match self.segment {
            Register::FS | Register::GS => self.segment,
            Register::None => Register::None,
            _ if !self.mode64 => self.segment,
            _ => Register::None,
        }
    }
}

pub(crate) fn decode_instruction(
    decoder: &Decoder,
    buffer: &[u8],
) -> Result<(DecodedInstruction, [DecodedOperand; MAX_OPERAND_COUNT])> {
    if buffer.is_empty() {
        return Err(Status::NoMoreData);
    }

    let mut insn = DecodedInstruction {
        machine_mode: decoder.machine_mode(),
        stack_width: decoder.stack_width().bits(),
        ..Default::default()
    };
    let mut ctx = Ctx {
        mode64: decoder.is_mode64(),
        segment: Register::None,
        ..Default::default()
    };
    let mut reader = Reader::new(buffer);

    collect_prefixes(decoder, &mut reader, &mut insn, &mut ctx)?;
    let table_id = decode_encoding_prefix(decoder, &mut reader, &mut insn, &mut ctx)?;

    let (encoding_id, definition_id) =
        walk_tree(decoder, &mut reader, &mut insn, &mut ctx, table_id)?;
    ctx.definition_id = definition_id;

    let definition = bind_definition(&mut insn, &mut ctx, definition_id)?;

    compute_effective_sizes(&mut insn, &mut ctx, definition);
    operands::fill_avx_info(&mut insn, &mut ctx, definition_id)?;

    read_optional_parts(&mut reader, &mut insn, &mut ctx, encoding_id)?;
    insn.length = reader.pos as u8;

    apply_prefix_semantics(&mut insn, &mut ctx, definition)?;

    let mut ops: [DecodedOperand; MAX_OPERAND_COUNT] =
        core::array::from_fn(|_| DecodedOperand::default());
    operands::materialize(&mut insn, &ctx, definition, &mut ops)?;
    operands::validate_masking(&insn, &ctx, definition_id)?;

    Ok((insn, ops))
}

/* ---------------------------------------------------------------------- */
/* Prefixes                                                               */
/* ---------------------------------------------------------------------- */

fn record_prefix(insn: &mut DecodedInstruction, ty: PrefixType, value: u8) -> usize {
    let index = insn.raw.prefix_count as usize;
    insn.raw.prefixes[index] = Prefix { ty, value };
    insn.raw.prefix_count += 1;
    index
}

fn collect_prefixes(
    decoder: &Decoder,
    reader: &mut Reader,
    insn: &mut DecodedInstruction,
    ctx: &mut Ctx,
) -> Result<()> {
    let mut rex: Option<(u8, usize)> = None;
    let mut last_segment_index = usize::MAX;

    loop {
        let byte = reader.peek()?;
        let is_prefix = matches!(
            byte,
            0xF0 | 0xF2 | 0xF3 | 0x2E | 0x36 | 0x3E | 0x26 | 0x64 | 0x65 | 0x66 | 0x67
        ) || (decoder.is_mode64() && (byte & 0xF0) == 0x40);

        if !is_prefix {
            break;
        }
        reader.pos += 1;

        // A REX prefix is only effective directly in front of the opcode.
        if let Some((_, index)) = rex.take() {
            insn.raw.prefixes[index].ty = PrefixType::Ignored;
        }

        match byte {
            0xF0 => {
                ctx.lock = true;
                record_prefix(insn, PrefixType::Effective, byte);
            }
            0xF2 | 0xF3 => {
                if ctx.group1 != 0 {
                    insn.raw.prefixes[ctx.group1_index].ty = PrefixType::Ignored;
                }
                ctx.group1 = byte;
                ctx.group1_index = record_prefix(insn, PrefixType::Effective, byte);
            }
            0x2E | 0x36 | 0x3E | 0x26 | 0x64 | 0x65 => {
                if last_segment_index != usize::MAX {
                    insn.raw.prefixes[last_segment_index].ty = PrefixType::Ignored;
                }
                ctx.segment = match byte {
                    0x2E => Register::CS,
                    0x36 => Register::SS,
                    0x3E => Register::DS,
                    0x26 => Register::ES,
                    0x64 => Register::FS,
                    _ => Register::GS,
                };
                last_segment_index = record_prefix(insn, PrefixType::Effective, byte);
            }
            0x66 => {
                ctx.has_osz_override = true;
                ctx.osz_index = record_prefix(insn, PrefixType::Effective, byte);
            }
            0x67 => {
                ctx.has_asz_override = true;
                record_prefix(insn, PrefixType::Effective, byte);
            }
            _ => {
                let index = record_prefix(insn, PrefixType::Effective, byte);
                rex = Some((byte, index));
            }
        }
    }

    if let Some((value, index)) = rex {
        ctx.rex_present = true;
        ctx.w = (value >> 3) & 1;
        ctx.r = (value >> 2) & 1;
        ctx.x = (value >> 1) & 1;
        ctx.b = value & 1;
        insn.attributes |= InstructionAttributes::HAS_REX;
        insn.raw.kind_specific = RawInfoKindSpecific::Legacy(RawInfoRex {
            W: ctx.w,
            R: ctx.r,
            X: ctx.x,
            B: ctx.b,
            offset: index as u8,
        });
    }

    Ok(())
}

/* ---------------------------------------------------------------------- */
/* Encoding dispatch                                                      */
/* ---------------------------------------------------------------------- */

/// Determines the instruction encoding from the byte at the current
/// position, parses XOP/VEX/EVEX/MVEX prefixes and returns the id of the
/// opcode table to start the tree walk at.
fn decode_encoding_prefix(
    decoder: &Decoder,
    reader: &mut Reader,
    insn: &mut DecodedInstruction,
    ctx: &mut Ctx,
) -> Result<u8> {
    let byte = reader.peek()?;
    let vector = match byte {
        // A VEX/EVEX prefix outside of 64-bit mode is only recognized when
        // the byte after it has its top two bits set (`LES`/`LDS`/`BOUND`
        // otherwise).
        0xC5 => decoder.is_mode64() || (reader.peek_at(1)? & 0xC0) == 0xC0,
        0xC4 | 0x62 => decoder.is_mode64() || (reader.peek_at(1)? & 0xC0) == 0xC0,
        0x8F => (reader.peek_at(1)? & 0x1F) >= 8,
        _ => return Ok(tables::OPCODE_TABLE_PRIMARY),
    };
    if !vector {
        return Ok(tables::OPCODE_TABLE_PRIMARY);
    }

    if ctx.lock || ctx.group1 != 0 || ctx.has_osz_override {
        return Err(Status::IllegalLegacyPfx);
    }
    if ctx.rex_present {
        return Err(Status::IllegalRex);
    }

    let offset = reader.pos as u8;
    reader.pos += 1;
    ctx.vector_prefix = true;

    match byte {
        0xC5 => {
            let p0 = reader.read_u8()?;
            ctx.r = (!p0 >> 7) & 1;
            ctx.vvvv = (!p0 >> 3) & 0xF;
            ctx.ll = (p0 >> 2) & 1;
            insn.encoding = InstructionEncoding::Vex;
            insn.raw.kind_specific = RawInfoKindSpecific::Vex(RawInfoVex {
                R: (p0 >> 7) & 1,
                X: 1,
                B: 1,
                m_mmmm: 1,
                W: 0,
                vvvv: (p0 >> 3) & 0xF,
                L: (p0 >> 2) & 1,
                pp: p0 & 3,
                offset,
                size: 2,
            });
            ctx.mandatory_pp(p0 & 3);
            Ok(tables::OPCODE_TABLE_VEX + 1)
        }
        0xC4 => {
            let p0 = reader.read_u8()?;
            let p1 = reader.read_u8()?;
            let m_mmmm = p0 & 0x1F;
            if m_mmmm == 0 || m_mmmm > 3 {
                return Err(Status::InvalidMap);
            }
            ctx.r = (!p0 >> 7) & 1;
            ctx.x = (!p0 >> 6) & 1;
            ctx.b = (!p0 >> 5) & 1;
            ctx.w = (p1 >> 7) & 1;
            ctx.vvvv = (!p1 >> 3) & 0xF;
            ctx.ll = (p1 >> 2) & 1;
            insn.encoding = InstructionEncoding::Vex;
            insn.raw.kind_specific = RawInfoKindSpecific::Vex(RawInfoVex {
                R: (p0 >> 7) & 1,
                X: (p0 >> 6) & 1,
                B: (p0 >> 5) & 1,
                m_mmmm,
                W: (p1 >> 7) & 1,
                vvvv: (p1 >> 3) & 0xF,
                L: (p1 >> 2) & 1,
                pp: p1 & 3,
                offset,
                size: 3,
            });
            ctx.mandatory_pp(p1 & 3);
            Ok(tables::OPCODE_TABLE_VEX + m_mmmm)
        }
        0x8F => {
            let p0 = reader.read_u8()?;
            let p1 = reader.read_u8()?;
            let m_mmmm = p0 & 0x1F;
            if !(8..=0xA).contains(&m_mmmm) {
                return Err(Status::InvalidMap);
            }
            ctx.r = (!p0 >> 7) & 1;
            ctx.x = (!p0 >> 6) & 1;
            ctx.b = (!p0 >> 5) & 1;
            ctx.w = (p1 >> 7) & 1;
            ctx.vvvv = (!p1 >> 3) & 0xF;
            ctx.ll = (p1 >> 2) & 1;
            insn.encoding = InstructionEncoding::Xop;
            insn.raw.kind_specific = RawInfoKindSpecific::Xop(RawInfoXop {
                R: (p0 >> 7) & 1,
                X: (p0 >> 6) & 1,
                B: (p0 >> 5) & 1,
                m_mmmm,
                W: (p1 >> 7) & 1,
                vvvv: (p1 >> 3) & 0xF,
                L: (p1 >> 2) & 1,
                pp: p1 & 3,
                offset,
            });
            ctx.mandatory_pp(p1 & 3);
            Ok(tables::OPCODE_TABLE_XOP + (m_mmmm - 8))
        }
        0x62 => {
            let p0 = reader.read_u8()?;
            let p1 = reader.read_u8()?;
            let p2 = reader.read_u8()?;
            ctx.r = (!p0 >> 7) & 1;
            ctx.x = (!p0 >> 6) & 1;
            ctx.b = (!p0 >> 5) & 1;
            ctx.r2 = (!p0 >> 4) & 1;
            ctx.w = (p1 >> 7) & 1;
            ctx.vvvv = (!p1 >> 3) & 0xF;
            if (p1 >> 2) & 1 == 1 {
                // EVEX: P0 bit 3 is reserved.
                if (p0 >> 3) & 1 != 0 {
                    return Err(Status::MalformedEvex);
                }
                let mmm = p0 & 0x7;
                if mmm == 0 || mmm > 3 {
                    return Err(Status::InvalidMap);
                }
                ctx.evex_z = (p2 >> 7) & 1;
                ctx.ll = (p2 >> 5) & 3;
                ctx.evex_b = (p2 >> 4) & 1;
                ctx.v2 = (!p2 >> 3) & 1;
                ctx.mask = p2 & 0x7;
                insn.encoding = InstructionEncoding::Evex;
                insn.raw.kind_specific = RawInfoKindSpecific::Evex(RawInfoEvex {
                    R: (p0 >> 7) & 1,
                    X: (p0 >> 6) & 1,
                    B: (p0 >> 5) & 1,
                    R2: (p0 >> 4) & 1,
                    mmm,
                    W: (p1 >> 7) & 1,
                    vvvv: (p1 >> 3) & 0xF,
                    pp: p1 & 3,
                    z: (p2 >> 7) & 1,
                    L2: (p2 >> 6) & 1,
                    L: (p2 >> 5) & 1,
                    b: (p2 >> 4) & 1,
                    V2: (p2 >> 3) & 1,
                    aaa: p2 & 0x7,
                    offset,
                });
                ctx.mandatory_pp(p1 & 3);
                Ok(tables::OPCODE_TABLE_EVEX + mmm)
            } else {
                // MVEX is gated behind the KNC decoder mode.
                if !decoder.mode_enabled(DecoderMode::Knc) {
                    return Err(Status::MalformedEvex);
                }
                let mmmm = p0 & 0xF;
                if mmmm == 0 || mmmm > 3 {
                    return Err(Status::InvalidMap);
                }
                ctx.mvex_e = (p2 >> 7) & 1;
                ctx.mvex_sss = (p2 >> 4) & 0x7;
                ctx.v2 = (!p2 >> 3) & 1;
                ctx.mask = p2 & 0x7;
                insn.encoding = InstructionEncoding::Mvex;
                insn.raw.kind_specific = RawInfoKindSpecific::Mvex(RawInfoMvex {
                    R: (p0 >> 7) & 1,
                    X: (p0 >> 6) & 1,
                    B: (p0 >> 5) & 1,
                    R2: (p0 >> 4) & 1,
                    mmmm,
                    W: (p1 >> 7) & 1,
                    vvvv: (p1 >> 3) & 0xF,
                    pp: p1 & 3,
                    E: (p2 >> 7) & 1,
                    SSS: (p2 >> 4) & 0x7,
                    V2: (p2 >> 3) & 1,
                    kkk: p2 & 0x7,
                    offset,
                });
                ctx.mandatory_pp(p1 & 3);
                Ok(tables::OPCODE_TABLE_MVEX + mmmm)
            }
        }
        _ => unreachable!(),
    }
}

impl Ctx {
    /// Stashes the compressed legacy prefix of a vector prefix as the
    /// mandatory-prefix selector index.
    fn mandatory_pp(&mut self, pp: u8) {
        self.group1 = match pp {
            2 => 0xF3,
            3 => 0xF2,
            _ => 0,
        };
        self.has_osz_override = pp == 1;
    }
}

/* ---------------------------------------------------------------------- */
/* Tree walk                                                              */
/* ---------------------------------------------------------------------- */

fn opcode_map_for_table(table_id: u8) -> OpcodeMap {
    match table_id {
        tables::OPCODE_TABLE_0F => OpcodeMap::_0F,
        tables::OPCODE_TABLE_0F38 => OpcodeMap::_0F38,
        tables::OPCODE_TABLE_0F3A => OpcodeMap::_0F3A,
        0x05 | 0x15 | 0x35 => OpcodeMap::_0F,
        0x06 | 0x16 => OpcodeMap::_0F38,
        0x07 | 0x17 => OpcodeMap::_0F3A,
        0x44 => OpcodeMap::Xop8,
        0x45 => OpcodeMap::Xop9,
        0x46 => OpcodeMap::XopA,
        tables::OPCODE_TABLE_3DNOW => OpcodeMap::_0F0F,
        _ => OpcodeMap::Default,
    }
}

fn ensure_modrm(reader: &mut Reader, insn: &mut DecodedInstruction, ctx: &mut Ctx) -> Result<()> {
    if ctx.has_modrm {
        return Ok(());
    }
    let offset = reader.pos as u8;
    let byte = reader.read_u8()?;
    insn.raw.modrm = RawInfoModRm {
        mod_: byte >> 6,
        reg: (byte >> 3) & 0x7,
        rm: byte & 0x7,
        offset,
    };
    insn.attributes |= InstructionAttributes::HAS_MODRM;
    ctx.has_modrm = true;
    Ok(())
}

/// Reads the SIB byte and ModRM displacement for memory forms. Idempotent.
fn read_sib_and_disp(
    reader: &mut Reader,
    insn: &mut DecodedInstruction,
    ctx: &mut Ctx,
) -> Result<()> {
    if ctx.addressing_done || !ctx.has_modrm || insn.raw.modrm.mod_ == 3 {
        ctx.addressing_done = true;
        return Ok(());
    }
    ctx.addressing_done = true;
    compute_easz_for_insn(insn, ctx);

    let modrm = insn.raw.modrm;
    let mut disp_bits: u8 = 0;

    if ctx.easz_idx == 0 {
        disp_bits = match modrm.mod_ {
            0 if modrm.rm == 6 => 16,
            1 => 8,
            2 => 16,
            _ => 0,
        };
    } else {
        if modrm.rm == 4 {
            let offset = reader.pos as u8;
            let sib = reader.read_u8()?;
            insn.raw.sib = RawInfoSib {
                scale: sib >> 6,
                index: (sib >> 3) & 0x7,
                base: sib & 0x7,
                offset,
            };
            insn.attributes |= InstructionAttributes::HAS_SIB;
            if modrm.mod_ == 0 && insn.raw.sib.base == 5 {
                disp_bits = 32;
            }
        }
        disp_bits = match modrm.mod_ {
            0 if modrm.rm == 5 => 32,
            1 => 8,
            2 => 32,
            _ => disp_bits,
        };
    }

    if disp_bits != 0 {
        let offset = reader.pos as u8;
        let value = reader.read_sint(disp_bits)?;
        insn.raw.disp = RawInfoDisp {
            value,
            size: disp_bits,
            offset,
        };
    }
    Ok(())
}

fn walk_tree(
    decoder: &Decoder,
    reader: &mut Reader,
    insn: &mut DecodedInstruction,
    ctx: &mut Ctx,
    initial_table: u8,
) -> Result<(u8, u16)> {
    let mut node_id = tables::opcode_table_root(initial_table).ok_or(Status::InvalidMap)?;
    insn.opcode_map = opcode_map_for_table(initial_table);

    loop {
        let node = TreeNode::get(node_id);
        let next = match node.ty() {
            NodeType::Invalid => return Err(Status::DecodingError),
            NodeType::Definition => return Ok((node.arg0(), node.entry(0))),
            NodeType::OpcodeTable => {
                let byte = reader.read_u8()?;
                insn.opcode = byte;
                node.entry(byte as usize)
            }
            NodeType::SwitchTable => {
                let table_id = node.arg0();
                if table_id == tables::OPCODE_TABLE_3DNOW {
                    return walk_3dnow(reader, insn, ctx);
                }
                node_id = tables::opcode_table_root(table_id).ok_or(Status::InvalidMap)?;
                insn.opcode_map = opcode_map_for_table(table_id);
                continue;
            }
            NodeType::Mode => node.entry(ctx.mode64 as usize),
            NodeType::ModrmMod => {
                ensure_modrm(reader, insn, ctx)?;
                node.entry((insn.raw.modrm.mod_ == 3) as usize)
            }
            NodeType::ModrmReg => {
                ensure_modrm(reader, insn, ctx)?;
                node.entry(insn.raw.modrm.reg as usize)
            }
            NodeType::ModrmRm => {
                ensure_modrm(reader, insn, ctx)?;
                node.entry(insn.raw.modrm.rm as usize)
            }
            NodeType::MandatoryPrefix => select_mandatory(insn, ctx, node)?,
            NodeType::OperandSize => {
                let osz16 = match (decoder.machine_mode().stack_width(), ctx.has_osz_override) {
                    (StackWidth::_16, false) => true,
                    (StackWidth::_16, true) => false,
                    (_, override_) => override_ && ctx.w == 0,
                };
                node.entry(!osz16 as usize)
            }
            NodeType::AddressSize => {
                compute_easz_for_insn(insn, ctx);
                node.entry(ctx.easz_idx)
            }
            NodeType::VectorLength => {
                if ctx.ll > 2 {
                    return Err(Status::DecodingError);
                }
                node.entry(ctx.ll as usize)
            }
            NodeType::RexW => node.entry(ctx.w as usize),
            NodeType::RexB => node.entry(ctx.b as usize),
            NodeType::EvexB => node.entry(ctx.evex_b as usize),
            NodeType::MvexE => node.entry(ctx.mvex_e as usize),
            NodeType::ModeAmd => node.entry(decoder.mode_enabled(DecoderMode::AmdBranches) as usize),
            NodeType::ModeKnc => node.entry(decoder.mode_enabled(DecoderMode::Knc) as usize),
            NodeType::ModeMpx => node.entry(decoder.mode_enabled(DecoderMode::Mpx) as usize),
            NodeType::ModeCet => node.entry(decoder.mode_enabled(DecoderMode::Cet) as usize),
            NodeType::ModeLzcnt => node.entry(decoder.mode_enabled(DecoderMode::Lzcnt) as usize),
            NodeType::ModeTzcnt => node.entry(decoder.mode_enabled(DecoderMode::Tzcnt) as usize),
            NodeType::ModeWbnoinvd => {
                node.entry(decoder.mode_enabled(DecoderMode::Wbnoinvd) as usize)
            }
            NodeType::ModeCldemote => {
                node.entry(decoder.mode_enabled(DecoderMode::Cldemote) as usize)
            }
            NodeType::ModeIprefetch => {
                node.entry(decoder.mode_enabled(DecoderMode::Iprefetch) as usize)
            }
            NodeType::ModeUd0Compat => {
                node.entry(decoder.mode_enabled(DecoderMode::Ud0Compat) as usize)
            }
        };
        if next == INVALID_NODE {
            return Err(Status::DecodingError);
        }
        node_id = next;
    }
}

/// Selects the branch of a mandatory-prefix node. For the vector encodings
/// the compressed `pp` field picks the branch strictly; for legacy
/// encodings an absent branch falls back towards "no prefix" and leaves the
/// prefix byte unconsumed.
fn select_mandatory(
    insn: &mut DecodedInstruction,
    ctx: &mut Ctx,
    node: TreeNode,
) -> Result<u16> {
    let first_choice = match ctx.group1 {
        0xF3 => 2,
        0xF2 => 3,
        _ if ctx.has_osz_override => 1,
        _ => 0,
    };
    if ctx.vector_prefix {
        return Ok(node.entry(first_choice));
    }

    let mut candidates = [first_choice, 1, 0];
    if !ctx.has_osz_override {
        candidates[1] = 0;
    }
    for &index in candidates.iter() {
        let entry = node.entry(index);
        if entry != INVALID_NODE {
            match index {
                1 => {
                    ctx.mandatory_66 = true;
                    insn.raw.prefixes[ctx.osz_index].ty = PrefixType::Mandatory;
                }
                2 | 3 => {
                    ctx.mandatory_f2f3 = true;
                    insn.raw.prefixes[ctx.group1_index].ty = PrefixType::Mandatory;
                }
                _ => {}
            }
            return Ok(entry);
        }
    }
    Ok(INVALID_NODE)
}

/// 3DNow! encodes the actual opcode as a suffix byte after the operands.
fn walk_3dnow(
    reader: &mut Reader,
    insn: &mut DecodedInstruction,
    ctx: &mut Ctx,
) -> Result<(u8, u16)> {
    insn.encoding = InstructionEncoding::_3DNOW;
    insn.opcode_map = OpcodeMap::_0F0F;
    insn.raw.kind_specific = RawInfoKindSpecific::_3DNOW;
    ensure_modrm(reader, insn, ctx)?;
    read_sib_and_disp(reader, insn, ctx)?;
    let suffix = reader.read_u8()?;
    insn.opcode = suffix;
    let root = tables::opcode_table_root(tables::OPCODE_TABLE_3DNOW).ok_or(Status::InvalidMap)?;
    let node = TreeNode::get(root);
    let entry = node.entry(suffix as usize);
    if entry == INVALID_NODE {
        return Err(Status::DecodingError);
    }
    let leaf = TreeNode::get(entry);
    if leaf.ty() != NodeType::Definition {
        return Err(Status::DecodingError);
    }
    Ok((leaf.arg0(), leaf.entry(0)))
}

/* ---------------------------------------------------------------------- */
/* Definition binding and optional parts                                  */
/* ---------------------------------------------------------------------- */

fn bind_definition(
    insn: &mut DecodedInstruction,
    _ctx: &mut Ctx,
    definition_id: u16,
) -> Result<&'static tables::InstructionDefinition> {
    let definition = match insn.encoding {
        InstructionEncoding::Legacy => &tables::definition_legacy(definition_id).base,
        InstructionEncoding::_3DNOW => &tables::definition_3dnow(definition_id).base,
        InstructionEncoding::Xop => &tables::definition_xop(definition_id).base,
        InstructionEncoding::Vex => &tables::definition_vex(definition_id).base,
        InstructionEncoding::Evex => &tables::definition_evex(definition_id).base,
        InstructionEncoding::Mvex => &tables::definition_mvex(definition_id).base,
    };
    insn.mnemonic = definition.mnemonic;
    insn.meta = MetaInfo {
        category: definition.meta.category,
        isa_set: definition.meta.isa_set,
        isa_ext: definition.meta.isa_ext,
        branch_type: definition.meta.branch_type,
        exception_class: definition.meta.exception_class,
    };
    if definition.flags.contains(tables::DefinitionFlags::PRIVILEGED) {
        insn.attributes |= InstructionAttributes::IS_PRIVILEGED;
    }
    if definition.flags.contains(tables::DefinitionFlags::FAR_BRANCH) {
        insn.attributes |= InstructionAttributes::IS_FAR_BRANCH;
    }
    insn.cpu_flags = definition.cpu_flags;
    insn.fpu_flags = definition.fpu_flags;
    if definition.cpu_flags.is_some() || definition.fpu_flags.is_some() {
        insn.attributes |= InstructionAttributes::CPUFLAG_ACCESS;
    }
    Ok(definition)
}

fn compute_effective_sizes(
    insn: &mut DecodedInstruction,
    ctx: &mut Ctx,
    definition: &tables::InstructionDefinition,
) {
    compute_easz_for_insn(insn, ctx);

    let osz_override = ctx.has_osz_override && !ctx.mandatory_66;
    let base16 = insn.stack_width == 16;
    let mut eosz: u8 = match (base16, osz_override) {
        (true, false) => 16,
        (true, true) => 32,
        (false, true) => 16,
        (false, false) => 32,
    };
    if ctx.w == 1 && ctx.mode64 {
        eosz = 64;
    }

    use tables::OperandSizeMap::*;
    let width = match definition.op_size_map {
        Byte => {
            // Physical sizes stay byte-indexed through the regular triple.
            8
        }
        Default => eosz,
        Default64 => {
            if ctx.mode64 && eosz == 32 {
                64
            } else {
                eosz
            }
        }
        Force64 => {
            if ctx.mode64 {
                64
            } else {
                eosz
            }
        }
    };

    let effective = if definition.op_size_map == Byte { eosz } else { width };
    ctx.eosz_idx = match effective {
        16 => 0,
        32 => 1,
        _ => 2,
    };
    insn.operand_width = width;
    insn.address_width = ctx.easz_bits();
}

fn compute_easz_for_insn(insn: &mut DecodedInstruction, ctx: &mut Ctx) {
    ctx.easz_idx = match insn.stack_width {
        64 => {
            if ctx.has_asz_override {
                1
            } else {
                2
            }
        }
        32 => {
            if ctx.has_asz_override {
                0
            } else {
                1
            }
        }
        _ => {
            if ctx.has_asz_override {
                1
            } else {
                0
            }
        }
    };
}

fn read_optional_parts(
    reader: &mut Reader,
    insn: &mut DecodedInstruction,
    ctx: &mut Ctx,
    encoding_id: u8,
) -> Result<()> {
    let info = tables::encoding_info(encoding_id);

    if info.flags & tables::ENC_FLAG_HAS_MODRM != 0 {
        ensure_modrm(reader, insn, ctx)?;
        if info.flags & tables::ENC_FLAG_FORCE_REG_FORM != 0 && insn.raw.modrm.mod_ != 3 {
            return Err(Status::DecodingError);
        }
        read_sib_and_disp(reader, insn, ctx)?;
    }

    if info.flags & tables::ENC_FLAG_HAS_DISP != 0 {
        let bits = info.disp_size[ctx.easz_idx];
        if bits != 0 {
            let offset = reader.pos as u8;
            let value = reader.read_sint(bits)?;
            insn.raw.disp = RawInfoDisp {
                value,
                size: bits,
                offset,
            };
        }
    }

    for (index, imm) in info.imm.iter().enumerate() {
        let has = match index {
            0 => info.flags & tables::ENC_FLAG_HAS_IMM0 != 0,
            _ => info.flags & tables::ENC_FLAG_HAS_IMM1 != 0,
        };
        if !has {
            continue;
        }
        let bits = imm.size[ctx.eosz_idx];
        if bits == 0 {
            continue;
        }
        let offset = reader.pos as u8;
        let value = if imm.is_signed {
            reader.read_sint(bits)? as u64
        } else {
            reader.read_uint(bits)?
        };
        insn.raw.imm[index] = RawImmediateInfo {
            is_signed: imm.is_signed,
            is_relative: imm.is_relative,
            value,
            size: bits,
            offset,
        };
    }

    Ok(())
}

/* ---------------------------------------------------------------------- */
/* Prefix semantics                                                       */
/* ---------------------------------------------------------------------- */

fn apply_prefix_semantics(
    insn: &mut DecodedInstruction,
    ctx: &mut Ctx,
    definition: &tables::InstructionDefinition,
) -> Result<()> {
    use tables::AcceptedPrefixes as Ap;

    let _ = definition;
    let accepts = match insn.encoding {
        InstructionEncoding::Legacy => tables::definition_legacy(ctx.definition_id).accepts,
        _ => Ap::empty(),
    };

    if accepts.contains(Ap::LOCK) {
        insn.attributes |= InstructionAttributes::ACCEPTS_LOCK;
    }
    if accepts.contains(Ap::REP) {
        insn.attributes |= InstructionAttributes::ACCEPTS_REP;
    }
    if accepts.contains(Ap::REPE_REPZ) {
        insn.attributes |= InstructionAttributes::ACCEPTS_REPE;
    }
    if accepts.contains(Ap::REPNE_REPNZ) {
        insn.attributes |= InstructionAttributes::ACCEPTS_REPNE;
    }
    if accepts.contains(Ap::BOUND) {
        insn.attributes |= InstructionAttributes::ACCEPTS_BND;
    }
    if accepts.contains(Ap::XACQUIRE) {
        insn.attributes |= InstructionAttributes::ACCEPTS_XACQUIRE;
    }
    if accepts.contains(Ap::XRELEASE) {
        insn.attributes |= InstructionAttributes::ACCEPTS_XRELEASE;
    }
    if accepts.contains(Ap::HLE_WITHOUT_LOCK) {
        insn.attributes |= InstructionAttributes::ACCEPTS_HLE_WITHOUT_LOCK;
    }
    if accepts.contains(Ap::BRANCH_HINTS) {
        insn.attributes |= InstructionAttributes::ACCEPTS_BRANCH_HINTS;
    }
    if accepts.contains(Ap::SEGMENT) {
        insn.attributes |= InstructionAttributes::ACCEPTS_SEGMENT;
    }

    if ctx.lock {
        let mem_dest = ctx.has_modrm && insn.raw.modrm.mod_ != 3;
        if !accepts.contains(Ap::LOCK) || !mem_dest {
            return Err(Status::IllegalLock);
        }
        insn.attributes |= InstructionAttributes::HAS_LOCK;
    }

    match ctx.group1 {
        0xF2 if !ctx.mandatory_f2f3 && !ctx.vector_prefix => {
            if ctx.lock && accepts.contains(Ap::XACQUIRE) {
                insn.attributes |= InstructionAttributes::HAS_XACQUIRE;
            } else if accepts.contains(Ap::REPNE_REPNZ) {
                insn.attributes |= InstructionAttributes::HAS_REPNE;
            } else if accepts.contains(Ap::BOUND) {
                insn.attributes |= InstructionAttributes::HAS_BND;
            }
        }
        0xF3 if !ctx.mandatory_f2f3 && !ctx.vector_prefix => {
            if ctx.lock && accepts.contains(Ap::XRELEASE) {
                insn.attributes |= InstructionAttributes::HAS_XRELEASE;
            } else if !ctx.lock && accepts.contains(Ap::HLE_WITHOUT_LOCK) {
                insn.attributes |= InstructionAttributes::HAS_XRELEASE;
            } else if accepts.contains(Ap::REP) {
                insn.attributes |= InstructionAttributes::HAS_REP;
            } else if accepts.contains(Ap::REPE_REPZ) {
                insn.attributes |= InstructionAttributes::HAS_REPE;
            }
        }
        _ => {}
    }

    // Branch hints reuse the CS/DS segment override bytes.
    let mut hint_consumed = false;
    if accepts.contains(Ap::BRANCH_HINTS) {
        match ctx.segment {
            Register::CS => {
                insn.attributes |= InstructionAttributes::HAS_BRANCH_NOT_TAKEN;
                hint_consumed = true;
            }
            Register::DS => {
                insn.attributes |= InstructionAttributes::HAS_BRANCH_TAKEN;
                hint_consumed = true;
            }
            _ => {}
        }
    }
    if !hint_consumed && ctx.segment != Register::None {
        insn.attributes |= InstructionAttributes::segment_attribute(ctx.segment);
    }
    if hint_consumed {
        ctx.segment = Register::None;
    }

    if ctx.has_osz_override && !ctx.mandatory_66 && !ctx.vector_prefix {
        insn.attributes |= InstructionAttributes::HAS_OPERANDSIZE;
    }
    if ctx.has_asz_override {
        insn.attributes |= InstructionAttributes::HAS_ADDRESSSIZE;
    }
    match insn.encoding {
        InstructionEncoding::Xop => insn.attributes |= InstructionAttributes::HAS_XOP,
        InstructionEncoding::Vex => insn.attributes |= InstructionAttributes::HAS_VEX,
        InstructionEncoding::Evex => insn.attributes |= InstructionAttributes::HAS_EVEX,
        InstructionEncoding::Mvex => insn.attributes |= InstructionAttributes::HAS_MVEX,
        _ => {}
    }

    Ok(())
}
