//! Shared terminal utilities.
//!
//! Box drawing for help and notices, styled stderr messages.

mod output;
mod style;

pub use output::*;
pub use style::*;
