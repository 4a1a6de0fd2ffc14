//! Content bounds computation
//!
//! [`compute_bounds`] is a pure function from viewport, intrinsic content
//! size and scale mode to the rectangle the content should be drawn into.
//! [`BoundsCalculator`] memoizes it so repeated layout passes with unchanged
//! inputs are free and only real changes are reported.
//!
//! ```rust
//! use blinker_core::{Bounds, ContentSize, Viewport};
//! use blinker_layout::{compute_bounds, ScaleMode};
//!
//! let bounds = compute_bounds(
//!     &Viewport::new(200, 100),
//!     ContentSize::new(50, 50),
//!     ScaleMode::Center,
//! );
//! assert_eq!(bounds, Bounds::new(75, 25, 125, 75));
//! ```

use crate::scale::ScaleMode;
use blinker_core::{Bounds, ContentSize, Size, Viewport};

/// Narrow an intermediate coordinate back into the bounds' range
#[inline]
fn coord(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Compute where content should be drawn
///
/// Never fails. Ratio-preserving modes fall back to stretching when the
/// content has no usable intrinsic size.
pub fn compute_bounds(viewport: &Viewport, content: ContentSize, mode: ScaleMode) -> Bounds {
    match mode {
        ScaleMode::Stretch => stretch_bounds(viewport),
        ScaleMode::Constrain => match content.known().filter(|size| !size.is_empty()) {
            Some(size) => constrain_bounds(viewport, size),
            None => {
                tracing::warn!(
                    "Content has no usable intrinsic size ({:?}), stretching",
                    content
                );
                stretch_bounds(viewport)
            }
        },
        ScaleMode::Center => match content.known() {
            Some(size) => center_bounds(viewport, size),
            None => {
                tracing::warn!("Content has no intrinsic size, stretching");
                stretch_bounds(viewport)
            }
        },
    }
}

/// The padded viewport rectangle
pub fn stretch_bounds(viewport: &Viewport) -> Bounds {
    viewport.padded_bounds()
}

/// Aspect-preserving fit driven by the content's own orientation
///
/// Landscape and square content (`ratio >= 1`) spans the padded width;
/// portrait content spans the padded height. The other axis is centered on
/// the full viewport dimension, padding ignored, with the far edge mirrored
/// from the near one. The free axis is not clamped, so content that is
/// relatively taller (or wider) than the viewport overflows it.
pub fn constrain_bounds(viewport: &Viewport, intrinsic: Size) -> Bounds {
    let view_w = viewport.width as i64;
    let view_h = viewport.height as i64;
    let padding = viewport.padding;
    let padded_w = viewport.padded_width() as i64;
    let padded_h = viewport.padded_height() as i64;
    let ratio = intrinsic.width as f64 / intrinsic.height as f64;

    if intrinsic.width >= intrinsic.height {
        // Landscape (maximize width)
        let height = (padded_w as f64 / ratio).round() as i64;
        let top = view_h / 2 - height / 2;
        Bounds::new(
            coord(padding.left as i64),
            coord(top),
            coord(view_w - padding.right as i64),
            coord(view_h - top),
        )
    } else {
        // Portrait (maximize height)
        let width = (padded_h as f64 * ratio).round() as i64;
        let left = view_w / 2 - width / 2;
        Bounds::new(
            coord(left),
            coord(padding.top as i64),
            coord(view_w - left),
            coord(view_h - padding.bottom as i64),
        )
    }
}

/// Intrinsic size centered on the full viewport, padding ignored
pub fn center_bounds(viewport: &Viewport, intrinsic: Size) -> Bounds {
    let half_w = viewport.width as i64 / 2;
    let half_h = viewport.height as i64 / 2;
    let content_half_w = intrinsic.width as i64 / 2;
    let content_half_h = intrinsic.height as i64 / 2;
    Bounds::new(
        coord(half_w - content_half_w),
        coord(half_h - content_half_h),
        coord(half_w + content_half_w),
        coord(half_h + content_half_h),
    )
}

/// Memoized [`compute_bounds`]
#[derive(Clone, Debug, Default)]
pub struct BoundsCalculator {
    last: Option<CachedBounds>,
}

#[derive(Clone, Copy, Debug)]
struct CachedBounds {
    viewport: Viewport,
    content: ContentSize,
    mode: ScaleMode,
    bounds: Bounds,
}

impl BoundsCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute bounds if any input changed
    ///
    /// Returns true if the resulting rectangle differs from the previous one
    /// (or if this is the first computation).
    pub fn update(&mut self, viewport: Viewport, content: ContentSize, mode: ScaleMode) -> bool {
        if let Some(cached) = &self.last {
            if cached.viewport == viewport && cached.content == content && cached.mode == mode {
                return false;
            }
        }

        let bounds = compute_bounds(&viewport, content, mode);
        let changed = self.last.map_or(true, |cached| cached.bounds != bounds);
        self.last = Some(CachedBounds {
            viewport,
            content,
            mode,
            bounds,
        });
        changed
    }

    /// The last computed rectangle, if any
    pub fn bounds(&self) -> Option<Bounds> {
        self.last.map(|cached| cached.bounds)
    }

    /// Forget the cached result
    pub fn clear(&mut self) {
        self.last = None;
    }
}
