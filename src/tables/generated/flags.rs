//! Accessed CPU-flag entries referenced by the instruction definitions.

use crate::decoder::types::AccessedFlags;
use crate::enums::CpuFlags;

const fn flags(
    tested: CpuFlags,
    modified: CpuFlags,
    set_0: CpuFlags,
    set_1: CpuFlags,
    undefined: CpuFlags,
) -> AccessedFlags<CpuFlags> {
    AccessedFlags {
        tested,
        modified,
        set_0,
        set_1,
        undefined,
    }
}

const NONE: CpuFlags = CpuFlags::empty();
const ARITH: CpuFlags = CpuFlags::CF
    .union(CpuFlags::OF)
    .union(CpuFlags::SF)
    .union(CpuFlags::ZF)
    .union(CpuFlags::AF)
    .union(CpuFlags::PF);
const SZP: CpuFlags = CpuFlags::SF.union(CpuFlags::ZF).union(CpuFlags::PF);

pub(crate) static FL_ARITH: AccessedFlags<CpuFlags> = flags(NONE, ARITH, NONE, NONE, NONE);

pub(crate) static FL_ARITH_CARRY: AccessedFlags<CpuFlags> =
    flags(CpuFlags::CF, ARITH, NONE, NONE, NONE);

pub(crate) static FL_LOGIC: AccessedFlags<CpuFlags> = flags(
    NONE,
    SZP,
    CpuFlags::CF.union(CpuFlags::OF),
    NONE,
    CpuFlags::AF,
);

pub(crate) static FL_INC_DEC: AccessedFlags<CpuFlags> = flags(
    NONE,
    CpuFlags::OF
        .union(CpuFlags::SF)
        .union(CpuFlags::ZF)
        .union(CpuFlags::AF)
        .union(CpuFlags::PF),
    NONE,
    NONE,
    NONE,
);

pub(crate) static FL_NEG: AccessedFlags<CpuFlags> = flags(NONE, ARITH, NONE, NONE, NONE);

pub(crate) static FL_SHIFT: AccessedFlags<CpuFlags> = flags(
    NONE,
    CpuFlags::CF.union(SZP),
    NONE,
    NONE,
    CpuFlags::OF.union(CpuFlags::AF),
);

pub(crate) static FL_ROTATE: AccessedFlags<CpuFlags> =
    flags(NONE, CpuFlags::CF, NONE, NONE, CpuFlags::OF);

pub(crate) static FL_ROTATE_CARRY: AccessedFlags<CpuFlags> =
    flags(CpuFlags::CF, CpuFlags::CF, NONE, NONE, CpuFlags::OF);

pub(crate) static FL_MUL: AccessedFlags<CpuFlags> = flags(
    NONE,
    CpuFlags::CF.union(CpuFlags::OF),
    NONE,
    NONE,
    SZP.union(CpuFlags::AF),
);

pub(crate) static FL_DIV: AccessedFlags<CpuFlags> = flags(NONE, NONE, NONE, NONE, ARITH);

// Condition-code test masks, shared by `Jcc`, `SETcc` and `CMOVcc`.
pub(crate) static FL_CC_O: AccessedFlags<CpuFlags> =
    flags(CpuFlags::OF, NONE, NONE, NONE, NONE);
pub(crate) static FL_CC_B: AccessedFlags<CpuFlags> =
    flags(CpuFlags::CF, NONE, NONE, NONE, NONE);
pub(crate) static FL_CC_Z: AccessedFlags<CpuFlags> =
    flags(CpuFlags::ZF, NONE, NONE, NONE, NONE);
pub(crate) static FL_CC_BE: AccessedFlags<CpuFlags> =
    flags(CpuFlags::CF.union(CpuFlags::ZF), NONE, NONE, NONE, NONE);
pub(crate) static FL_CC_S: AccessedFlags<CpuFlags> =
    flags(CpuFlags::SF, NONE, NONE, NONE, NONE);
pub(crate) static FL_CC_P: AccessedFlags<CpuFlags> =
    flags(CpuFlags::PF, NONE, NONE, NONE, NONE);
pub(crate) static FL_CC_L: AccessedFlags<CpuFlags> =
    flags(CpuFlags::SF.union(CpuFlags::OF), NONE, NONE, NONE, NONE);
pub(crate) static FL_CC_LE: AccessedFlags<CpuFlags> = flags(
    CpuFlags::SF.union(CpuFlags::OF).union(CpuFlags::ZF),
    NONE,
    NONE,
    NONE,
    NONE,
);

pub(crate) static FL_CLC: AccessedFlags<CpuFlags> =
    flags(NONE, NONE, CpuFlags::CF, NONE, NONE);
pub(crate) static FL_STC: AccessedFlags<CpuFlags> =
    flags(NONE, NONE, NONE, CpuFlags::CF, NONE);
pub(crate) static FL_CMC: AccessedFlags<CpuFlags> =
    flags(CpuFlags::CF, CpuFlags::CF, NONE, NONE, NONE);
pub(crate) static FL_CLD: AccessedFlags<CpuFlags> =
    flags(NONE, NONE, CpuFlags::DF, NONE, NONE);
pub(crate) static FL_STD: AccessedFlags<CpuFlags> =
    flags(NONE, NONE, NONE, CpuFlags::DF, NONE);
pub(crate) static FL_CLI: AccessedFlags<CpuFlags> =
    flags(NONE, NONE, CpuFlags::IF, NONE, NONE);
pub(crate) static FL_STI: AccessedFlags<CpuFlags> =
    flags(NONE, NONE, NONE, CpuFlags::IF, NONE);

pub(crate) static FL_LAHF: AccessedFlags<CpuFlags> =
    flags(ARITH.difference(CpuFlags::OF), NONE, NONE, NONE, NONE);
pub(crate) static FL_SAHF: AccessedFlags<CpuFlags> =
    flags(NONE, ARITH.difference(CpuFlags::OF), NONE, NONE, NONE);

pub(crate) static FL_BT: AccessedFlags<CpuFlags> = flags(
    NONE,
    CpuFlags::CF,
    NONE,
    NONE,
    CpuFlags::OF.union(CpuFlags::SF).union(CpuFlags::AF).union(CpuFlags::PF),
);

pub(crate) static FL_BSCAN: AccessedFlags<CpuFlags> = flags(
    NONE,
    CpuFlags::ZF,
    NONE,
    NONE,
    CpuFlags::CF
        .union(CpuFlags::OF)
        .union(CpuFlags::SF)
        .union(CpuFlags::AF)
        .union(CpuFlags::PF),
);

pub(crate) static FL_CNT: AccessedFlags<CpuFlags> = flags(
    NONE,
    CpuFlags::CF.union(CpuFlags::ZF),
    NONE,
    NONE,
    CpuFlags::OF.union(CpuFlags::SF).union(CpuFlags::AF).union(CpuFlags::PF),
);

pub(crate) static FL_POPCNT: AccessedFlags<CpuFlags> = flags(
    NONE,
    CpuFlags::ZF,
    CpuFlags::CF
        .union(CpuFlags::OF)
        .union(CpuFlags::SF)
        .union(CpuFlags::AF)
        .union(CpuFlags::PF),
    NONE,
    NONE,
);

pub(crate) static FL_COMIS: AccessedFlags<CpuFlags> = flags(
    NONE,
    CpuFlags::ZF.union(CpuFlags::PF).union(CpuFlags::CF),
    CpuFlags::OF.union(CpuFlags::SF).union(CpuFlags::AF),
    NONE,
    NONE,
);

pub(crate) static FL_STRING: AccessedFlags<CpuFlags> =
    flags(CpuFlags::DF, NONE, NONE, NONE, NONE);

pub(crate) static FL_STRING_CMP: AccessedFlags<CpuFlags> =
    flags(CpuFlags::DF, ARITH, NONE, NONE, NONE);

pub(crate) static FL_INTERRUPT: AccessedFlags<CpuFlags> = flags(
    NONE,
    CpuFlags::IF.union(CpuFlags::NT).union(CpuFlags::RF),
    CpuFlags::TF,
    NONE,
    NONE,
);

pub(crate) static FL_INTO: AccessedFlags<CpuFlags> = flags(
    CpuFlags::OF,
    CpuFlags::IF.union(CpuFlags::NT).union(CpuFlags::RF),
    CpuFlags::TF,
    NONE,
    NONE,
);

pub(crate) static FL_LOOPE: AccessedFlags<CpuFlags> =
    flags(CpuFlags::ZF, NONE, NONE, NONE, NONE);
