pub use self::{field::*, piece::*};

pub(crate) mod field;
pub(crate) mod piece;
