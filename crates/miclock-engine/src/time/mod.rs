//! Time subsystem.
//!
//! Two independent clocks live here:
//! - wall-clock time ([`WallTime`], [`TimeSource`]) that the clock face displays
//! - frame timing ([`FrameClock`]) that animation drivers use to pace redraws
//!
//! Neither is coupled to a runtime; hosts decide when to read them.

mod frame_clock;
mod source;
mod wall;

pub use frame_clock::{FrameClock, FrameTime};
pub use source::{FixedClock, SystemClock, TimeSource};
pub use wall::{TimeParseError, WallTime};
