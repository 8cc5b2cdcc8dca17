//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod clock;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use store::PostStore;
