//! Operand materialization and the semantic post-pass.

use crate::decoder::machine::Ctx;
use crate::decoder::types::*;
use crate::enums::*;
use crate::register::{encode_gpr, encode_gpr8};
use crate::status::{Result, Status};
use crate::tables::{
    self, ImplicitMemBase, ImplicitRegister, InstructionDefinition, InternalVectorLength,
    MvexFunctionality, OperandSource, SemanticOperandType,
};

/* ---------------------------------------------------------------------- */
/* AVX info                                                               */
/* ---------------------------------------------------------------------- */

pub(crate) fn fill_avx_info(
    insn: &mut DecodedInstruction,
    ctx: &mut Ctx,
    definition_id: u16,
) -> Result<()> {
    match insn.encoding {
        InstructionEncoding::Vex | InstructionEncoding::Xop => {
            insn.avx.vector_length = if ctx.ll & 1 == 1 { 256 } else { 128 };
        }
        InstructionEncoding::Evex => fill_evex_info(insn, ctx, definition_id)?,
        InstructionEncoding::Mvex => fill_mvex_info(insn, ctx, definition_id)?,
        _ => {}
    }
    Ok(())
}

fn fill_evex_info(
    insn: &mut DecodedInstruction,
    ctx: &mut Ctx,
    definition_id: u16,
) -> Result<()> {
    use tables::EvexFunctionality as Func;

    let def = tables::definition_evex(definition_id);
    let reg_form = !ctx.has_modrm || insn.raw.modrm.mod_ == 3;

    let mut vl: u16 = match def.vector_length {
        InternalVectorLength::Fixed128 => 128,
        InternalVectorLength::Fixed256 => 256,
        InternalVectorLength::Fixed512 => 512,
        InternalVectorLength::Default => match ctx.ll {
            0 => 128,
            1 => 256,
            2 => 512,
            _ => return Err(Status::DecodingError),
        },
    };

    if ctx.evex_b == 1 {
        if reg_form {
            match def.functionality {
                Func::Rc => {
                    insn.avx.rounding_mode = match ctx.ll {
                        0 => RoundingMode::Rn,
                        1 => RoundingMode::Rd,
                        2 => RoundingMode::Ru,
                        _ => RoundingMode::Rz,
                    };
                    insn.avx.has_sae = true;
                    vl = 512;
                }
                Func::Sae => {
                    insn.avx.has_sae = true;
                    vl = 512;
                }
                _ => return Err(Status::DecodingError),
            }
        } else {
            match def.functionality {
                Func::Bc => {
                    insn.avx.broadcast_static = false;
                    insn.avx.broadcast_mode = broadcast_mode(def.element_size, vl)
                        .ok_or(Status::DecodingError)?;
                }
                _ => return Err(Status::DecodingError),
            }
        }
    }

    insn.avx.vector_length = vl;
    insn.avx.tuple_type = def.tuple_type;
    insn.avx.element_size = def.element_size;
    insn.avx.cd8_scale = cd8_scale(def.tuple_type, def.element_size, vl, ctx.evex_b == 1);
    ctx.cd8_scale = insn.avx.cd8_scale;

    insn.avx.mask_reg = RegisterClass::Mask.encode(ctx.mask);
    insn.avx.mask_mode = if def.mask_is_control {
        if ctx.evex_z == 1 {
            MaskMode::ControlZeroing
        } else {
            MaskMode::Control
        }
    } else if ctx.evex_z == 1 {
        MaskMode::Zeroing
    } else {
        MaskMode::Merging
    };

    Ok(())
}

fn broadcast_mode(element_size: u16, vector_length: u16) -> Option<BroadcastMode> {
    let count = vector_length.checked_div(element_size)?;
    Some(match count {
        2 => BroadcastMode::_1_TO_2,
        4 => BroadcastMode::_1_TO_4,
        8 => BroadcastMode::_1_TO_8,
        16 => BroadcastMode::_1_TO_16,
        32 => BroadcastMode::_1_TO_32,
        64 => BroadcastMode::_1_TO_64,
        _ => return None,
    })
}

/// Derives the compressed disp8 multiplier from the tuple type.
fn cd8_scale(tuple: TupleType, element_size: u16, vector_length: u16, bc: bool) -> u8 {
    let esz = (element_size / 8) as u8;
    let vl = (vector_length / 8) as u8;
    match tuple {
        TupleType::Invalid => 0,
        TupleType::Fv => {
            if bc {
                esz
            } else {
                vl
            }
        }
        TupleType::Hv => {
            if bc {
                esz
            } else {
                vl / 2
            }
        }
        TupleType::Fvm => vl,
        TupleType::T1S | TupleType::T1F | TupleType::Gscat => esz,
        TupleType::T1_4X => 16,
        TupleType::T2 => esz * 2,
        TupleType::T4 => esz * 4,
        TupleType::T8 => esz * 8,
        TupleType::Hvm => vl / 2,
        TupleType::Qvm => vl / 4,
        TupleType::Ovm => vl / 8,
        TupleType::M128 => 16,
        TupleType::Dup => match vl {
            16 => 8,
            32 => 32,
            _ => 64,
        },
    }
}

fn fill_mvex_info(
    insn: &mut DecodedInstruction,
    ctx: &mut Ctx,
    definition_id: u16,
) -> Result<()> {
    let def = tables::definition_mvex(definition_id);
    let reg_form = !ctx.has_modrm || insn.raw.modrm.mod_ == 3;
    let sss = ctx.mvex_sss;

    insn.avx.vector_length = 512;
    let mut scale: u8 = 64;

    match def.functionality {
        MvexFunctionality::Rc => {
            if ctx.mvex_e == 1 && reg_form {
                insn.avx.rounding_mode = match sss & 3 {
                    0 => RoundingMode::Rn,
                    1 => RoundingMode::Rd,
                    2 => RoundingMode::Ru,
                    _ => RoundingMode::Rz,
                };
                insn.avx.has_sae = sss & 4 != 0;
            }
        }
        MvexFunctionality::RegSwizzle32 | MvexFunctionality::RegSwizzle64 => {
            if reg_form {
                insn.avx.swizzle_mode = match sss {
                    0 => SwizzleMode::Dcba,
                    1 => SwizzleMode::Cdab,
                    2 => SwizzleMode::Badc,
                    3 => SwizzleMode::Dacb,
                    4 => SwizzleMode::Aaaa,
                    5 => SwizzleMode::Bbbb,
                    6 => SwizzleMode::Cccc,
                    _ => SwizzleMode::Dddd,
                };
            }
        }
        MvexFunctionality::FloatUconv32 | MvexFunctionality::IntUconv32 => {
            if !reg_form {
                match sss {
                    0 => {}
                    1 => {
                        insn.avx.broadcast_mode = BroadcastMode::_1_TO_16;
                        scale = 4;
                    }
                    2 => {
                        insn.avx.broadcast_mode = BroadcastMode::_4_TO_16;
                        scale = 16;
                    }
                    3 => {
                        insn.avx.conversion_mode = ConversionMode::Float16;
                        scale = 32;
                    }
                    4 => {
                        insn.avx.conversion_mode = ConversionMode::Uint8;
                        scale = 16;
                    }
                    5 => {
                        insn.avx.conversion_mode = ConversionMode::Sint8;
                        scale = 16;
                    }
                    6 => {
                        insn.avx.conversion_mode = ConversionMode::Uint16;
                        scale = 32;
                    }
                    _ => {
                        insn.avx.conversion_mode = ConversionMode::Sint16;
                        scale = 32;
                    }
                }
            }
        }
        MvexFunctionality::FloatUconv64 | MvexFunctionality::IntUconv64 => {
            if !reg_form {
                match sss {
                    0 => {}
                    1 => {
                        insn.avx.broadcast_mode = BroadcastMode::_1_TO_8;
                        scale = 8;
                    }
                    2 => {
                        insn.avx.broadcast_mode = BroadcastMode::_4_TO_8;
                        scale = 32;
                    }
                    _ => return Err(Status::DecodingError),
                }
            }
        }
        MvexFunctionality::Ignored | MvexFunctionality::Invalid => {}
    }

    if !reg_form && ctx.mvex_e == 1 {
        insn.avx.has_eviction_hint = true;
    }

    insn.avx.cd8_scale = scale;
    ctx.cd8_scale = scale;
    insn.avx.mask_reg = RegisterClass::Mask.encode(ctx.mask);
    insn.avx.mask_mode = if ctx.mask != 0 {
        MaskMode::Merging
    } else {
        MaskMode::Disabled
    };

    Ok(())
}

pub(crate) fn validate_masking(
    insn: &DecodedInstruction,
    ctx: &Ctx,
    definition_id: u16,
) -> Result<()> {
    let policy = match insn.encoding {
        InstructionEncoding::Evex => tables::definition_evex(definition_id).mask_policy,
        InstructionEncoding::Mvex => tables::definition_mvex(definition_id).mask_policy,
        _ => return Ok(()),
    };
    match policy {
        tables::MaskPolicy::Required if ctx.mask == 0 => return Err(Status::InvalidMask),
        tables::MaskPolicy::Forbidden if ctx.mask != 0 => return Err(Status::InvalidMask),
        _ => {}
    }
    // Zeroing requires a mask register other than K0.
    if ctx.evex_z == 1 && ctx.mask == 0 {
        return Err(Status::InvalidMask);
    }
    Ok(())
}

/* ---------------------------------------------------------------------- */
/* Operand materialization                                                */
/* ---------------------------------------------------------------------- */

pub(crate) fn materialize(
    insn: &mut DecodedInstruction,
    ctx: &Ctx,
    definition: &InstructionDefinition,
    out: &mut [DecodedOperand; MAX_OPERAND_COUNT],
) -> Result<()> {
    let mut imm_slot = 0usize;
    let mut visible = 0u8;
    let mut nds_used = false;

    for (index, opdef) in definition.operands.iter().enumerate() {
        let mut operand = DecodedOperand {
            id: index as u8,
            visibility: opdef.visibility,
            action: opdef.action,
            ..Default::default()
        };
        if let OperandSource::Encoding(encoding) = opdef.op {
            operand.encoding = encoding;
            if encoding == OperandEncoding::NdsNdd {
                nds_used = true;
            }
        }

        operand.size = operand_size(insn, ctx, opdef);
        let (element_type, mut element_size) = opdef.element_type.resolve();
        if element_size == 0 {
            element_size = operand.size;
        }
        operand.element_type = element_type;
        operand.element_size = element_size;
        operand.element_count = if element_size != 0 && operand.size >= element_size {
            operand.size / element_size
        } else {
            1
        };

        operand.kind = decode_operand_kind(insn, ctx, opdef, &mut imm_slot, operand.size)?;

        // Broadcast memory operands read a single element.
        if let DecodedOperandKind::Mem(_) = operand.kind {
            if insn.avx.broadcast_mode != BroadcastMode::Invalid && !insn.avx.broadcast_static {
                operand.size = insn.avx.element_size;
                operand.element_size = insn.avx.element_size;
                operand.element_count = 1;
            }
            match &operand.kind {
                DecodedOperandKind::Mem(mem)
                    if mem.base == Register::RIP || mem.base == Register::EIP =>
                {
                    insn.attributes |= InstructionAttributes::IS_RELATIVE;
                }
                _ => {}
            }
        }
        if let DecodedOperandKind::Imm(imm) = &operand.kind {
            if imm.is_relative {
                insn.attributes |= InstructionAttributes::IS_RELATIVE;
            }
        }

        if opdef.visibility != OperandVisibility::Hidden {
            visible += 1;
        }
        out[index] = operand;
    }

    insn.operand_count = definition.operands.len() as u8;
    insn.operand_count_visible = visible;

    if ctx.vector_prefix && !nds_used && (ctx.vvvv != 0 || ctx.v2 != 0) {
        return Err(Status::DecodingError);
    }

    Ok(())
}

fn operand_size(insn: &DecodedInstruction, ctx: &Ctx, opdef: &tables::OperandDefinition) -> u16 {
    match opdef.op {
        OperandSource::ImplicitReg(ImplicitRegister::GprSsz(_))
        | OperandSource::ImplicitReg(ImplicitRegister::IpSsz)
        | OperandSource::ImplicitReg(ImplicitRegister::FlagsSsz) => insn.stack_width as u16,
        OperandSource::ImplicitReg(ImplicitRegister::GprAsz(_)) => ctx.easz_bits() as u16,
        OperandSource::ImplicitMem {
            base: ImplicitMemBase::ASp | ImplicitMemBase::ABp,
            ..
        } => insn.stack_width as u16,
        _ => opdef.size[ctx.eosz_idx],
    }
}

fn decode_operand_kind(
    insn: &DecodedInstruction,
    ctx: &Ctx,
    opdef: &tables::OperandDefinition,
    imm_slot: &mut usize,
    size: u16,
) -> Result<DecodedOperandKind> {
    use SemanticOperandType as S;

    Ok(match opdef.ty {
        S::ImplicitReg => {
            let reg = match opdef.op {
                OperandSource::ImplicitReg(r) => resolve_implicit_register(insn, ctx, r),
                _ => Register::None,
            };
            DecodedOperandKind::Reg(reg)
        }
        S::ImplicitMem => {
            let (segment, base) = match opdef.op {
                OperandSource::ImplicitMem { segment, base } => (segment, base),
                _ => (Register::DS, ImplicitMemBase::AAx),
            };
            DecodedOperandKind::Mem(implicit_memory(insn, ctx, segment, base))
        }
        S::Gpr8 => DecodedOperandKind::Reg(encode_gpr8(
            register_id(insn, ctx, opdef, RegisterClass::Gpr8)?,
            ctx.rex_present || ctx.vector_prefix,
        )),
        S::Gpr16 => gpr_kind(insn, ctx, opdef, 16)?,
        S::Gpr32 => gpr_kind(insn, ctx, opdef, 32)?,
        S::Gpr64 => gpr_kind(insn, ctx, opdef, 64)?,
        S::GprV | S::GprY | S::GprZ => gpr_kind(insn, ctx, opdef, size)?,
        S::Fpr => DecodedOperandKind::Reg(
            RegisterClass::X87.encode(insn.raw.modrm.rm & 0x7),
        ),
        S::Mmx => {
            let id = register_id(insn, ctx, opdef, RegisterClass::Mmx)? & 0x7;
            DecodedOperandKind::Reg(RegisterClass::Mmx.encode(id))
        }
        S::Xmm => vector_kind(insn, ctx, opdef, RegisterClass::Xmm)?,
        S::Ymm => vector_kind(insn, ctx, opdef, RegisterClass::Ymm)?,
        S::Zmm => vector_kind(insn, ctx, opdef, RegisterClass::Zmm)?,
        S::Bnd => {
            let id = register_id(insn, ctx, opdef, RegisterClass::Bound)?;
            if id > 3 {
                return Err(Status::BadRegister);
            }
            DecodedOperandKind::Reg(RegisterClass::Bound.encode(id))
        }
        S::Sreg => {
            let id = register_id(insn, ctx, opdef, RegisterClass::Segment)?;
            if id > 5 {
                return Err(Status::BadRegister);
            }
            if opdef.action.is_written() && id == 1 {
                // Writes to CS are undefined.
                return Err(Status::BadRegister);
            }
            DecodedOperandKind::Reg(RegisterClass::Segment.encode(id))
        }
        S::Cr => {
            let id = register_id(insn, ctx, opdef, RegisterClass::Control)?;
            if !matches!(id, 0 | 2 | 3 | 4 | 8) {
                return Err(Status::BadRegister);
            }
            DecodedOperandKind::Reg(RegisterClass::Control.encode(id))
        }
        S::Dr => {
            let id = register_id(insn, ctx, opdef, RegisterClass::Debug)?;
            if id > 7 {
                return Err(Status::BadRegister);
            }
            DecodedOperandKind::Reg(RegisterClass::Debug.encode(id))
        }
        S::MaskReg => {
            let id = register_id(insn, ctx, opdef, RegisterClass::Mask)?;
            if id > 7 {
                return Err(Status::BadRegister);
            }
            DecodedOperandKind::Reg(RegisterClass::Mask.encode(id))
        }
        S::Mem => DecodedOperandKind::Mem(decode_memory(insn, ctx, MemoryOperandType::Mem)?),
        S::MemVsibX => {
            DecodedOperandKind::Mem(decode_memory(insn, ctx, MemoryOperandType::Vsibx)?)
        }
        S::MemVsibY => {
            DecodedOperandKind::Mem(decode_memory(insn, ctx, MemoryOperandType::Vsiby)?)
        }
        S::MemVsibZ => {
            DecodedOperandKind::Mem(decode_memory(insn, ctx, MemoryOperandType::Vsibz)?)
        }
        S::Agen => DecodedOperandKind::Mem(decode_memory(insn, ctx, MemoryOperandType::Agen)?),
        S::Moffs => {
            let mut mem = MemoryInfo {
                ty: MemoryOperandType::Mem,
                ..Default::default()
            };
            mem.segment = match ctx.effective_segment() {
                Register::None => Register::DS,
                other => other,
            };
            mem.disp = DisplacementInfo {
                has_displacement: true,
                displacement: insn.raw.disp.value,
            };
            DecodedOperandKind::Mem(mem)
        }
        S::Imm => match opdef.op {
            OperandSource::None => {
                // Implicit constant immediate (shift/rotate by 1).
                DecodedOperandKind::Imm(ImmediateInfo {
                    is_signed: false,
                    is_relative: false,
                    value: 1,
                })
            }
            _ => {
                let raw = &insn.raw.imm[take_imm_slot(imm_slot)];
                DecodedOperandKind::Imm(ImmediateInfo {
                    is_signed: raw.is_signed,
                    is_relative: false,
                    value: raw.value,
                })
            }
        },
        S::Rel => {
            let raw = &insn.raw.imm[take_imm_slot(imm_slot)];
            DecodedOperandKind::Imm(ImmediateInfo {
                is_signed: true,
                is_relative: true,
                value: raw.value,
            })
        }
        S::Ptr => {
            *imm_slot = 2;
            DecodedOperandKind::Ptr(PointerInfo {
                segment: insn.raw.imm[1].value as u16,
                offset: insn.raw.imm[0].value as u32,
            })
        }
    })
}

fn take_imm_slot(slot: &mut usize) -> usize {
    let current = (*slot).min(1);
    *slot += 1;
    current
}

fn gpr_kind(
    insn: &DecodedInstruction,
    ctx: &Ctx,
    opdef: &tables::OperandDefinition,
    width: u16,
) -> Result<DecodedOperandKind> {
    let class = match width {
        16 => RegisterClass::Gpr16,
        32 => RegisterClass::Gpr32,
        64 => RegisterClass::Gpr64,
        8 => {
            return Ok(DecodedOperandKind::Reg(encode_gpr8(
                register_id(insn, ctx, opdef, RegisterClass::Gpr8)?,
                ctx.rex_present || ctx.vector_prefix,
            )))
        }
        _ => return Err(Status::BadRegister),
    };
    let id = register_id(insn, ctx, opdef, class)?;
    let reg = class.encode(id);
    if reg == Register::None {
        return Err(Status::BadRegister);
    }
    Ok(DecodedOperandKind::Reg(reg))
}

fn vector_kind(
    insn: &DecodedInstruction,
    ctx: &Ctx,
    opdef: &tables::OperandDefinition,
    class: RegisterClass,
) -> Result<DecodedOperandKind> {
    let id = register_id(insn, ctx, opdef, class)?;
    let reg = class.encode(id);
    if reg == Register::None {
        return Err(Status::BadRegister);
    }
    Ok(DecodedOperandKind::Reg(reg))
}

/// Decodes the register id from the operand's encoding slot, applying the
/// REX/VEX/EVEX extension bits that are valid for the register class.
fn register_id(
    insn: &DecodedInstruction,
    ctx: &Ctx,
    opdef: &tables::OperandDefinition,
    class: RegisterClass,
) -> Result<u8> {
    let wide = matches!(
        class,
        RegisterClass::Xmm | RegisterClass::Ymm | RegisterClass::Zmm
    );
    let evex = matches!(
        insn.encoding,
        InstructionEncoding::Evex | InstructionEncoding::Mvex
    );
    let encoding = match opdef.op {
        OperandSource::Encoding(e) => e,
        _ => return Err(Status::BadRegister),
    };
    Ok(match encoding {
        OperandEncoding::ModrmReg => {
            let mut id = insn.raw.modrm.reg | (ctx.r << 3);
            if wide || class == RegisterClass::Mask {
                id |= ctx.r2 << 4;
            }
            id
        }
        OperandEncoding::ModrmRm => {
            let mut id = insn.raw.modrm.rm | (ctx.b << 3);
            if wide && evex {
                id |= ctx.x << 4;
            }
            id
        }
        OperandEncoding::Opcode => (insn.opcode & 0x7) | (ctx.b << 3),
        OperandEncoding::NdsNdd => {
            let mut id = ctx.vvvv;
            if wide {
                id |= ctx.v2 << 4;
            }
            id
        }
        OperandEncoding::Mask => ctx.mask,
        OperandEncoding::Is4 => (insn.raw.imm[1].value as u8) >> 4,
        _ => return Err(Status::BadRegister),
    })
}

fn resolve_implicit_register(
    insn: &DecodedInstruction,
    ctx: &Ctx,
    implicit: ImplicitRegister,
) -> Register {
    match implicit {
        ImplicitRegister::Static(reg) => reg,
        ImplicitRegister::GprOsz(id) => {
            let width = match insn.operand_width {
                8 => 8,
                16 => 16,
                32 => 32,
                _ => 64,
            };
            encode_gpr(width, id, ctx.rex_present)
        }
        ImplicitRegister::GprAsz(id) => encode_gpr(ctx.easz_bits() as u16, id, ctx.rex_present),
        ImplicitRegister::GprSsz(id) => {
            encode_gpr(insn.stack_width as u16, id, ctx.rex_present)
        }
        ImplicitRegister::IpSsz => match insn.stack_width {
            16 => Register::IP,
            32 => Register::EIP,
            _ => Register::RIP,
        },
        ImplicitRegister::FlagsSsz => match insn.stack_width {
            16 => Register::FLAGS,
            32 => Register::EFLAGS,
            _ => Register::RFLAGS,
        },
    }
}

fn implicit_memory(
    insn: &DecodedInstruction,
    ctx: &Ctx,
    segment: Register,
    base: ImplicitMemBase,
) -> MemoryInfo {
    let easz = ctx.easz_bits() as u16;
    let ssz = insn.stack_width as u16;
    let base_reg = match base {
        ImplicitMemBase::AAx => encode_gpr(easz, 0, false),
        ImplicitMemBase::ABx => encode_gpr(easz, 3, false),
        ImplicitMemBase::ASi => encode_gpr(easz, 6, false),
        ImplicitMemBase::ADi => encode_gpr(easz, 7, false),
        ImplicitMemBase::ASp => encode_gpr(ssz, 4, false),
        ImplicitMemBase::ABp => encode_gpr(ssz, 5, false),
    };
    // Only the DS-defaulting accesses honor a segment override.
    let segment = match (segment, ctx.effective_segment()) {
        (Register::DS, Register::None) => Register::DS,
        (Register::DS, override_) => override_,
        (fixed, _) => fixed,
    };
    MemoryInfo {
        ty: MemoryOperandType::Mem,
        segment,
        base: base_reg,
        index: Register::None,
        scale: 0,
        disp: DisplacementInfo::default(),
    }
}

fn decode_memory(
    insn: &DecodedInstruction,
    ctx: &Ctx,
    ty: MemoryOperandType,
) -> Result<MemoryInfo> {
    if !ctx.has_modrm || insn.raw.modrm.mod_ == 3 {
        return Err(Status::DecodingError);
    }
    let modrm = insn.raw.modrm;
    let vsib_class = match ty {
        MemoryOperandType::Vsibx => Some(RegisterClass::Xmm),
        MemoryOperandType::Vsiby => Some(RegisterClass::Ymm),
        MemoryOperandType::Vsibz => Some(RegisterClass::Zmm),
        _ => None,
    };

    let mut mem = MemoryInfo {
        ty,
        ..Default::default()
    };

    if ctx.easz_idx == 0 {
        static BASES16: [(Register, Register); 8] = [
            (Register::BX, Register::SI),
            (Register::BX, Register::DI),
            (Register::BP, Register::SI),
            (Register::BP, Register::DI),
            (Register::SI, Register::None),
            (Register::DI, Register::None),
            (Register::BP, Register::None),
            (Register::BX, Register::None),
        ];
        if vsib_class.is_some() {
            return Err(Status::InvalidVsib);
        }
        let (base, index) = BASES16[modrm.rm as usize];
        if modrm.mod_ == 0 && modrm.rm == 6 {
            mem.base = Register::None;
        } else {
            mem.base = base;
            mem.index = index;
            if mem.index != Register::None {
                mem.scale = 1;
            }
        }
    } else {
        let gpr = if ctx.easz_idx == 2 {
            RegisterClass::Gpr64
        } else {
            RegisterClass::Gpr32
        };
        if modrm.rm == 4 {
            let sib = insn.raw.sib;
            if modrm.mod_ == 0 && sib.base == 5 {
                mem.base = Register::None;
            } else {
                mem.base = gpr.encode(sib.base | (ctx.b << 3));
            }
            if let Some(class) = vsib_class {
                let id = sib.index | (ctx.x << 3) | (ctx.v2 << 4);
                mem.index = class.encode(id);
                if mem.index == Register::None {
                    return Err(Status::InvalidVsib);
                }
                mem.scale = 1 << sib.scale;
            } else {
                let index_id = sib.index | (ctx.x << 3);
                if index_id != 4 {
                    mem.index = gpr.encode(index_id);
                    mem.scale = 1 << sib.scale;
                }
            }
        } else {
            if vsib_class.is_some() {
                return Err(Status::InvalidVsib);
            }
            if modrm.mod_ == 0 && modrm.rm == 5 {
                if insn.machine_mode == MachineMode::Long64 {
                    mem.base = if ctx.easz_idx == 2 {
                        Register::RIP
                    } else {
                        Register::EIP
                    };
                } else {
                    mem.base = Register::None;
                }
            } else {
                mem.base = gpr.encode(modrm.rm | (ctx.b << 3));
            }
        }
    }

    if insn.raw.disp.size != 0 {
        let mut value = insn.raw.disp.value;
        if insn.raw.disp.size == 8 && ctx.cd8_scale > 1 {
            value *= ctx.cd8_scale as i64;
        }
        mem.disp = DisplacementInfo {
            has_displacement: true,
            displacement: value,
        };
    }

    if ty != MemoryOperandType::Agen {
        mem.segment = match ctx.effective_segment() {
            Register::None => match mem.base {
                Register::BP | Register::SP | Register::EBP | Register::ESP | Register::RBP
                | Register::RSP => Register::SS,
                _ => Register::DS,
            },
            other => other,
        };
    }

    Ok(mem)
}
