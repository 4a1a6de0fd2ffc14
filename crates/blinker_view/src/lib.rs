//! Blinker View
//!
//! An embeddable element that periodically blinks a piece of content inside
//! a padded viewport. The element only decides *where* to draw and *how
//! opaque* to draw; decoding, input and persistence belong to the host.
//!
//! # Features
//!
//! - **BlinkerView**: host hooks (`on_attach`, `on_detach`,
//!   `on_layout_changed`, `tick`, `render`) over a bounds calculator and a
//!   blink controller
//! - **Content/Canvas**: the two traits a host implements to plug in
//! - **Config**: validated construction settings, loadable from TOML
//! - **State**: a serializable snapshot for host save/restore
//! - **Stage**: several views driven by one clock and one redraw signal

pub mod config;
pub mod content;
pub mod stage;
pub mod view;

pub use config::{BlinkerConfig, BlinkerState};
pub use content::{Canvas, Content, Frame, RecordingCanvas};
pub use stage::{Stage, ViewId};
pub use view::BlinkerView;

// Re-export the pieces hosts need alongside the view
pub use blinker_animation::{BlinkController, Easing};
pub use blinker_core::{
    BlinkerError, Bounds, ContentSize, Padding, RedrawSignal, Result, Size, Viewport,
};
pub use blinker_layout::ScaleMode;
