//! Time subsystem.
//!
//! - `FrameClock`: one per window, `tick()` once per presented frame.
//! - `FrameStats`: rolling fps estimate over a fixed report interval, fed
//!   with `FrameTime::elapsed`.

mod frame_clock;
mod frame_stats;

pub use frame_clock::{FrameClock, FrameTime};
pub use frame_stats::{status_title, FrameReport, FrameStats};
