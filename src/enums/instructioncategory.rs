//! The `InstructionCategory` enum.

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

macro_rules! categories {
    ($(($variant:ident, $string:literal),)*) => {
        #[allow(non_camel_case_types)]
        #[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
        #[repr(u8)]
        pub enum InstructionCategory {
            $($variant),*
        }

        pub(crate) static CATEGORY_STRINGS: &[&str] = &[$($string),*];
    };
}

categories! {
    (INVALID, "invalid"),
    (_3DNOW, "3dnow"),
    (AVX, "avx"),
    (AVX2, "avx2"),
    (AVX2GATHER, "avx2gather"),
    (AVX512, "avx512"),
    (BINARY, "binary"),
    (BITBYTE, "bitbyte"),
    (BROADCAST, "broadcast"),
    (CALL, "call"),
    (CMOV, "cmov"),
    (COMPARE, "compare"),
    (COND_BR, "cond_br"),
    (CONVERT, "convert"),
    (DATAXFER, "dataxfer"),
    (FLAGOP, "flagop"),
    (FMA, "fma"),
    (INTERRUPT, "interrupt"),
    (KNC, "knc"),
    (LOGICAL, "logical"),
    (LOGICAL_FP, "logical_fp"),
    (MISC, "misc"),
    (MMX, "mmx"),
    (MPX, "mpx"),
    (NOP, "nop"),
    (POP, "pop"),
    (PUSH, "push"),
    (RET, "ret"),
    (ROTATE, "rotate"),
    (SEMAPHORE, "semaphore"),
    (SETCC, "setcc"),
    (SHIFT, "shift"),
    (SSE, "sse"),
    (STRINGOP, "stringop"),
    (SYSCALL, "syscall"),
    (SYSTEM, "system"),
    (UNCOND_BR, "uncond_br"),
    (WIDENOP, "widenop"),
    (XOP, "xop"),
}

pub const INSTRUCTION_CATEGORY_MAX_VALUE: InstructionCategory = InstructionCategory::XOP;

impl InstructionCategory {
    /// Returns the string corresponding to this category.
    pub fn get_string(self) -> Option<&'static str> {
        match self {
            InstructionCategory::INVALID => None,
            other => Some(CATEGORY_STRINGS[other as usize]),
        }
    }
}
