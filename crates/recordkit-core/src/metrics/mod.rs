//! Derived metrics.
//!
//! Every function here is pure: identical inputs give identical outputs, and
//! degenerate denominators resolve to documented defaults instead of NaN.

mod aggregate;
mod grades;
mod urgency;
mod zones;

pub use aggregate::*;
pub use grades::*;
pub use urgency::*;
pub use zones::*;
