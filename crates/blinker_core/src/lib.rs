//! Blinker Core
//!
//! Shared primitives for the Blinker crates:
//!
//! - **Geometry**: integer viewports, padding, intrinsic content sizes and
//!   the bounds rectangle content is drawn into
//! - **Errors**: configuration validation errors
//! - **Redraw signalling**: the flag/callback pair components use to ask the
//!   host for a render pass
//!
//! # Example
//!
//! ```rust
//! use blinker_core::{Bounds, Padding, Viewport};
//!
//! let viewport = Viewport::new(200, 100).with_padding(Padding::uniform(10));
//! assert_eq!(viewport.padded_bounds(), Bounds::new(10, 10, 190, 90));
//! ```

pub mod error;
pub mod geometry;
pub mod redraw;

pub use error::{BlinkerError, Result};
pub use geometry::{Bounds, ContentSize, Padding, Point, Size, Viewport};
pub use redraw::{RedrawCallback, RedrawSignal};
