//! Pure-Rust x86/x86-64 instruction decoder, encoder and formatter.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod decoder;
pub mod enums;
pub mod register;
pub mod status;
pub(crate) mod tables;

pub use decoder::Decoder;
pub use enums::*;
pub use status::{Result, Status};
