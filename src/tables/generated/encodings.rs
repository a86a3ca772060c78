//! Physical instruction encoding records, referenced by definition-node
//! headers.

use crate::tables::{
    ImmediateEncodingInfo, InstructionEncodingInfo, ENC_FLAG_FORCE_REG_FORM, ENC_FLAG_HAS_DISP,
    ENC_FLAG_HAS_IMM0, ENC_FLAG_HAS_IMM1, ENC_FLAG_HAS_MODRM,
};

const NO_IMM: ImmediateEncodingInfo = ImmediateEncodingInfo {
    size: [0, 0, 0],
    is_signed: false,
    is_address: false,
    is_relative: false,
};

const fn imm(size: [u8; 3], is_signed: bool) -> ImmediateEncodingInfo {
    ImmediateEncodingInfo {
        size,
        is_signed,
        is_address: false,
        is_relative: false,
    }
}

const fn jimm(size: [u8; 3]) -> ImmediateEncodingInfo {
    ImmediateEncodingInfo {
        size,
        is_signed: true,
        is_address: false,
        is_relative: true,
    }
}

const fn aimm(size: [u8; 3]) -> ImmediateEncodingInfo {
    ImmediateEncodingInfo {
        size,
        is_signed: false,
        is_address: true,
        is_relative: false,
    }
}

const fn enc(
    flags: u8,
    disp_size: [u8; 3],
    imm0: ImmediateEncodingInfo,
    imm1: ImmediateEncodingInfo,
) -> InstructionEncodingInfo {
    InstructionEncodingInfo {
        flags,
        disp_size,
        imm: [imm0, imm1],
    }
}

macro_rules! encodings {
    ($($name:ident => $info:expr,)*) => {
        #[allow(non_camel_case_types, dead_code)]
        #[repr(u8)]
        enum Id {
            $($name),*
        }
        $(pub(crate) const $name: u8 = Id::$name as u8;)*
        pub(crate) static INSTR_ENCODINGS: &[InstructionEncodingInfo] = &[$($info),*];
    };
}

encodings! {
    EI_NONE => enc(0, [0, 0, 0], NO_IMM, NO_IMM),
    EI_MODRM => enc(ENC_FLAG_HAS_MODRM, [0, 0, 0], NO_IMM, NO_IMM),
    EI_MODRM_REGONLY => enc(
        ENC_FLAG_HAS_MODRM | ENC_FLAG_FORCE_REG_FORM,
        [0, 0, 0],
        NO_IMM,
        NO_IMM
    ),
    EI_MODRM_IMM8 => enc(
        ENC_FLAG_HAS_MODRM | ENC_FLAG_HAS_IMM0,
        [0, 0, 0],
        imm([8, 8, 8], false),
        NO_IMM
    ),
    EI_MODRM_SIMM8 => enc(
        ENC_FLAG_HAS_MODRM | ENC_FLAG_HAS_IMM0,
        [0, 0, 0],
        imm([8, 8, 8], true),
        NO_IMM
    ),
    EI_MODRM_SIMMZ => enc(
        ENC_FLAG_HAS_MODRM | ENC_FLAG_HAS_IMM0,
        [0, 0, 0],
        imm([16, 32, 32], true),
        NO_IMM
    ),
    EI_IMM8 => enc(ENC_FLAG_HAS_IMM0, [0, 0, 0], imm([8, 8, 8], false), NO_IMM),
    EI_SIMM8 => enc(ENC_FLAG_HAS_IMM0, [0, 0, 0], imm([8, 8, 8], true), NO_IMM),
    EI_SIMMZ => enc(
        ENC_FLAG_HAS_IMM0,
        [0, 0, 0],
        imm([16, 32, 32], true),
        NO_IMM
    ),
    EI_IMMV => enc(
        ENC_FLAG_HAS_IMM0,
        [0, 0, 0],
        imm([16, 32, 64], false),
        NO_IMM
    ),
    EI_IMM16 => enc(
        ENC_FLAG_HAS_IMM0,
        [0, 0, 0],
        imm([16, 16, 16], false),
        NO_IMM
    ),
    EI_IMM16_IMM8 => enc(
        ENC_FLAG_HAS_IMM0 | ENC_FLAG_HAS_IMM1,
        [0, 0, 0],
        imm([16, 16, 16], false),
        imm([8, 8, 8], false)
    ),
    EI_JIMM8 => enc(ENC_FLAG_HAS_IMM0, [0, 0, 0], jimm([8, 8, 8]), NO_IMM),
    EI_JIMMZ => enc(ENC_FLAG_HAS_IMM0, [0, 0, 0], jimm([16, 32, 32]), NO_IMM),
    EI_MOFFS => enc(ENC_FLAG_HAS_DISP, [16, 32, 64], NO_IMM, NO_IMM),
    EI_PTR => enc(
        ENC_FLAG_HAS_IMM0 | ENC_FLAG_HAS_IMM1,
        [0, 0, 0],
        aimm([16, 32, 32]),
        aimm([16, 16, 16])
    ),
    EI_3DNOW => enc(ENC_FLAG_HAS_MODRM, [0, 0, 0], NO_IMM, NO_IMM),
}
