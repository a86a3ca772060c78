//! The `ISASet` enum.

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

macro_rules! isa_sets {
    ($(($variant:ident, $string:literal),)*) => {
        #[allow(non_camel_case_types)]
        #[cfg_attr(feature = "serialization", derive(Deserialize, Serialize))]
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
        #[repr(u8)]
        pub enum ISASet {
            $($variant),*
        }

        pub(crate) static ISA_SET_STRINGS: &[&str] = &[$($string),*];
    };
}

isa_sets! {
    (INVALID, "invalid"),
    (_3DNOW, "3dnow"),
    (AVX, "avx"),
    (AVX2, "avx2"),
    (AVX2GATHER, "avx2gather"),
    (AVX512BW_128, "avx512bw_128"),
    (AVX512BW_512, "avx512bw_512"),
    (AVX512F_128, "avx512f_128"),
    (AVX512F_256, "avx512f_256"),
    (AVX512F_512, "avx512f_512"),
    (AVX512F_SCALAR, "avx512f_scalar"),
    (BM1, "bm1"),
    (CMOV, "cmov"),
    (CMPXCHG, "cmpxchg"),
    (FMA, "fma"),
    (I186, "i186"),
    (I386, "i386"),
    (I486, "i486"),
    (I86, "i86"),
    (KNCE, "knce"),
    (KNCV, "kncv"),
    (LONGMODE, "longmode"),
    (LZCNT, "lzcnt"),
    (MMX, "mmx"),
    (MOVBE, "movbe"),
    (MPX, "mpx"),
    (PENTIUM, "pentium"),
    (POPCNT, "popcnt"),
    (PPRO, "ppro"),
    (SSE, "sse"),
    (SSE2, "sse2"),
    (SSE2MMX, "sse2mmx"),
    (SSE42, "sse42"),
    (SSE4_ROUND, "sse4_round"),
    (SSEMXCSR, "ssemxcsr"),
    (SSSE3, "ssse3"),
    (SSSE3MMX, "ssse3mmx"),
    (XOP, "xop"),
}

pub const ISA_SET_MAX_VALUE: ISASet = ISASet::XOP;

impl ISASet {
    /// Returns the string corresponding to this ISA set.
    pub fn get_string(self) -> Option<&'static str> {
        match self {
            ISASet::INVALID => None,
            other => Some(ISA_SET_STRINGS[other as usize]),
        }
    }
}
