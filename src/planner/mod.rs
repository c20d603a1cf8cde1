//! Multipart planning: how a payload is cut into parts.

mod digest;
mod split;

pub use digest::*;
pub use split::*;
