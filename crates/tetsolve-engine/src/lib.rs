pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid piece kind: {value} (expected 1-7)")]
pub struct InvalidPieceKindError {
    value: u8,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("field width must be between {min} and {max}, got {width}")]
    WidthOutOfRange {
        width: usize,
        min: usize,
        max: usize,
    },
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum InvalidSeedError {
    #[display("invalid seed: expected 32 hex characters, got {len}")]
    Length { len: usize },
    #[display("invalid seed: {_0}")]
    Hex(std::num::ParseIntError),
}
