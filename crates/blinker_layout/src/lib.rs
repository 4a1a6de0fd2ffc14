//! Blinker Layout
//!
//! Places blinking content inside its host viewport.
//!
//! Three scale modes are supported:
//!
//! - **Stretch**: fill the padded viewport, aspect ratio ignored
//! - **Constrain**: keep the aspect ratio, filling the padded width for
//!   landscape content and the padded height for portrait content
//! - **Center**: intrinsic size, centered on the whole viewport
//!
//! Content without an intrinsic size is always stretched.

pub mod bounds;
pub mod scale;

pub use bounds::{
    center_bounds, compute_bounds, constrain_bounds, stretch_bounds, BoundsCalculator,
};
pub use scale::ScaleMode;
