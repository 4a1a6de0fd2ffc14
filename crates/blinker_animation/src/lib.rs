//! Blinker Animation System
//!
//! Timing for periodic show/hide animations.
//!
//! # Features
//!
//! - **Easing**: accelerate/decelerate timing curve (slow at the extremes)
//! - **Sweeps**: infinitely repeating ping-pong progress driven by explicit ticks
//! - **Blink Controller**: start/stop intent that survives detach/attach, with
//!   smooth fade or hard on/off cut

pub mod blink;
pub mod easing;
pub mod sweep;

pub use blink::{
    validate_interval, BlinkController, DEFAULT_INTERVAL_MS, HARD_CUT_THRESHOLD,
};
pub use easing::Easing;
pub use sweep::{Sweep, SweepDirection};
