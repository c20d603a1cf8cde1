//! Stream helpers: remaining-length queries and read wrappers.

mod discard;
mod length;
mod limit;

pub use discard::*;
pub use length::*;
pub use limit::*;
