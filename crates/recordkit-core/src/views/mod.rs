//! Domain views for the two consuming applications.
//!
//! Views compose [`query`](crate::query) and [`metrics`](crate::metrics) over a
//! store snapshot. The `with_*` builders return the next full collection for a
//! mutation; callers hand it to `PersistentStore::replace`.

mod academic;
mod respiratory;

pub use academic::*;
pub use respiratory::*;
