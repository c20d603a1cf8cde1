//! Value types shared by the planner and the range resolver.

mod part;
mod range;

pub use part::*;
pub use range::*;
