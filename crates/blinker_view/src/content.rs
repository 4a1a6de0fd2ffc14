//! Content and canvas seams
//!
//! The view never touches pixels. It asks its content for an intrinsic size
//! and hands a [`Frame`] (where, and how opaque) to a host-provided
//! [`Canvas`] when rendering.

use blinker_core::{Bounds, ContentSize, Size};
use serde::{Deserialize, Serialize};

/// Something that can be blinked
pub trait Content {
    /// Natural size of the content, if it has one
    ///
    /// Queried lazily whenever bounds are recomputed.
    fn intrinsic_size(&self) -> ContentSize;
}

impl Content for ContentSize {
    fn intrinsic_size(&self) -> ContentSize {
        *self
    }
}

impl Content for Size {
    fn intrinsic_size(&self) -> ContentSize {
        (*self).into()
    }
}

impl<T: Content + ?Sized> Content for Box<T> {
    fn intrinsic_size(&self) -> ContentSize {
        (**self).intrinsic_size()
    }
}

/// Everything needed to draw the content for one render pass
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Where to draw, relative to the viewport
    pub bounds: Bounds,
    /// Normalized opacity in `[0, 1]`
    pub opacity: f32,
    /// The same opacity as an 8-bit alpha value
    pub alpha: u8,
}

impl Frame {
    /// True if nothing would be visible
    pub fn is_hidden(&self) -> bool {
        self.alpha == 0 || self.bounds.is_empty()
    }
}

/// Host rendering target
pub trait Canvas<C: ?Sized> {
    /// Draw `content` into `frame.bounds` at `frame.opacity`
    fn draw_content(&mut self, content: &C, frame: Frame);
}

/// A canvas that records frames for later inspection
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    frames: Vec<Frame>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded frames
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The most recently recorded frame
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl<C: ?Sized> Canvas<C> for RecordingCanvas {
    fn draw_content(&mut self, _content: &C, frame: Frame) {
        self.frames.push(frame);
    }
}
