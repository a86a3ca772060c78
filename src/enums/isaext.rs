//! The `ISAExt` enum.

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

macro_rules! isa_exts {
    ($(($variant:ident, $string:literal),)*) => {
        #[allow(non_camel_case_types)]
        #[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
        #[repr(u8)]
        pub enum ISAExt {
            $($variant),*
        }

        pub(crate) static ISA_EXT_STRINGS: &[&str] = &[$($string),*];
    };
}

isa_exts! {
    (INVALID, "invalid"),
    (_3DNOW, "3dnow"),
    (AVX, "avx"),
    (AVX2, "avx2"),
    (AVX2GATHER, "avx2gather"),
    (AVX512EVEX, "avx512evex"),
    (BASE, "base"),
    (FMA, "fma"),
    (KNC, "knc"),
    (LONGMODE, "longmode"),
    (LZCNT, "lzcnt"),
    (MMX, "mmx"),
    (MOVBE, "movbe"),
    (MPX, "mpx"),
    (SSE, "sse"),
    (SSE2, "sse2"),
    (SSE4, "sse4"),
    (SSE42, "sse42"),
    (SSSE3, "ssse3"),
    (XOP, "xop"),
}

pub const ISA_EXT_MAX_VALUE: ISAExt = ISAExt::XOP;

impl ISAExt {
    /// Returns the string corresponding to this ISA extension.
    pub fn get_string(self) -> Option<&'static str> {
        match self {
            ISAExt::INVALID => None,
            other => Some(ISA_EXT_STRINGS[other as usize]),
        }
    }
}
