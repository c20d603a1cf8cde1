//! XML text handling for request bodies.

mod escape;

pub use escape::*;
