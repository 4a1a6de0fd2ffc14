//! Integer geometry for laying out blinking content
//!
//! Hosts report their size and padding in whole device pixels, and the
//! computed content rectangle is handed back in the same unit. Everything
//! here is integer-based so that layouts are reproducible pixel for pixel.
//!
//! - **Size**: an unsigned width/height pair
//! - **Padding**: insets on each edge of a viewport
//! - **Viewport**: the host element's size plus its padding
//! - **ContentSize**: intrinsic content dimensions, possibly unknown
//! - **Bounds**: a signed left/top/right/bottom rectangle

use serde::{Deserialize, Serialize};

/// Clamp an unsigned pixel count into the signed coordinate space.
#[inline]
pub fn px(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

// ─────────────────────────────────────────────────────────────────────────────
// Points and Sizes
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point in pixel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 2D size in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Padding and Viewport
// ─────────────────────────────────────────────────────────────────────────────

/// Insets applied to each edge of a viewport
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    pub const ZERO: Padding = Padding {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same inset on every edge
    pub const fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Combined left and right inset
    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Combined top and bottom inset
    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Snapshot of the host element's geometry
///
/// Hosts push a new viewport on every resize, layout or padding change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub padding: Padding,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            padding: Padding::ZERO,
        }
    }

    /// Set the padding, builder style
    pub const fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Width left over once horizontal padding is removed
    pub fn padded_width(&self) -> u32 {
        self.width.saturating_sub(self.padding.horizontal())
    }

    /// Height left over once vertical padding is removed
    pub fn padded_height(&self) -> u32 {
        self.height.saturating_sub(self.padding.vertical())
    }

    /// The viewport rectangle with padding removed from every edge
    pub fn padded_bounds(&self) -> Bounds {
        Bounds::new(
            px(self.padding.left),
            px(self.padding.top),
            px(self.width) - px(self.padding.right),
            px(self.height) - px(self.padding.bottom),
        )
    }

    /// The full viewport rectangle, padding ignored
    pub fn full_bounds(&self) -> Bounds {
        Bounds::new(0, 0, px(self.width), px(self.height))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Content Size
// ─────────────────────────────────────────────────────────────────────────────

/// Natural dimensions of the content being drawn
///
/// Either dimension may be unknown, e.g. for solid fills or shapes that
/// simply take whatever rectangle they are given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentSize {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ContentSize {
    /// Content with no natural dimensions
    pub const UNKNOWN: ContentSize = ContentSize {
        width: None,
        height: None,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Both dimensions, if both are known
    pub fn known(&self) -> Option<Size> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => Some(Size::new(width, height)),
            _ => None,
        }
    }

    pub fn is_known(&self) -> bool {
        self.known().is_some()
    }
}

impl From<Size> for ContentSize {
    fn from(size: Size) -> Self {
        ContentSize::new(size.width, size.height)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Bounds
// ─────────────────────────────────────────────────────────────────────────────

/// Edge-based rectangle where content gets drawn
///
/// Coordinates are relative to the viewport's top-left corner and may be
/// negative when content overflows it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Center point, truncated toward zero
    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.width() / 2,
            self.top + self.height() / 2,
        )
    }

    /// True if the rectangle covers no area
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// True if `other` lies entirely within this rectangle (edges inclusive)
    pub fn contains(&self, other: &Bounds) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.left, self.top, self.right, self.bottom
        )
    }
}
