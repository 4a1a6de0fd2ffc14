//! Blinking content element
//!
//! [`BlinkerView`] composes a [`BoundsCalculator`] and a [`BlinkController`]
//! behind the hooks a host UI framework would call:
//!
//! - `on_attach` / `on_detach` when the element becomes live or goes away
//! - `on_layout_changed` / `set_padding` when geometry changes
//! - `tick` from the host's frame clock
//! - `render` from the host's draw pass
//!
//! Geometry changes refresh a cached rectangle, ticks refresh the opacity,
//! and a render pass reads both. Every visible change raises the shared
//! [`RedrawSignal`].
//!
//! ```rust
//! use blinker_view::{
//!     BlinkerConfig, BlinkerView, Bounds, ContentSize, RecordingCanvas, ScaleMode, Viewport,
//! };
//! use std::time::Duration;
//!
//! let config = BlinkerConfig::default().scale_mode(ScaleMode::Center).fade(false);
//! let mut view = BlinkerView::new(config)
//!     .unwrap()
//!     .with_content(ContentSize::new(50, 50));
//!
//! view.on_attach();
//! view.on_layout_changed(Viewport::new(200, 100));
//! view.start();
//! view.tick(Duration::from_millis(400));
//!
//! let mut canvas = RecordingCanvas::new();
//! view.render(&mut canvas);
//! let frame = canvas.last().unwrap();
//! assert_eq!(frame.bounds, Bounds::new(75, 25, 125, 75));
//! assert_eq!(frame.alpha, 255);
//! ```

use crate::config::{BlinkerConfig, BlinkerState};
use crate::content::{Canvas, Content, Frame};
use blinker_animation::BlinkController;
use blinker_core::{Bounds, Padding, RedrawSignal, Result, Viewport};
use blinker_layout::{BoundsCalculator, ScaleMode};
use std::time::Duration;

/// A single blinking element inside a padded viewport
#[derive(Debug)]
pub struct BlinkerView<C> {
    content: Option<C>,
    viewport: Viewport,
    scale_mode: ScaleMode,
    layout: BoundsCalculator,
    blink: BlinkController,
    redraw: RedrawSignal,
}

impl<C: Content> BlinkerView<C> {
    /// Create a detached view from a validated configuration
    ///
    /// With `autostart` the blink intent is recorded now and the animation
    /// begins on the first [`BlinkerView::on_attach`].
    pub fn new(config: BlinkerConfig) -> Result<Self> {
        config.validate()?;
        let redraw = RedrawSignal::new();
        let mut blink = BlinkController::new(config.interval_ms, config.fade)?
            .with_redraw_signal(redraw.clone());
        blink.set_preview_mode(config.preview);
        if config.autostart {
            blink.start();
        }

        Ok(Self {
            content: None,
            viewport: Viewport::default(),
            scale_mode: config.scale_mode,
            layout: BoundsCalculator::new(),
            blink,
            redraw,
        })
    }

    /// Set the content, builder style
    pub fn with_content(mut self, content: C) -> Self {
        self.set_content(Some(content));
        self
    }

    /// Share a redraw signal with the host (or a [`crate::Stage`])
    pub fn set_redraw_signal(&mut self, redraw: RedrawSignal) {
        self.blink.set_redraw_signal(redraw.clone());
        self.redraw = redraw;
    }

    pub fn redraw_signal(&self) -> &RedrawSignal {
        &self.redraw
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Replace the content; `None` makes the element draw nothing
    pub fn set_content(&mut self, content: Option<C>) {
        self.content = content;
        self.layout.clear();
        self.refresh_bounds();
        self.redraw.request();
    }

    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    /// Remove and return the content
    pub fn take_content(&mut self) -> Option<C> {
        let content = self.content.take();
        if content.is_some() {
            self.layout.clear();
            self.redraw.request();
        }
        content
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// The host's size, padding or position changed
    pub fn on_layout_changed(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if self.refresh_bounds() {
            self.redraw.request();
        }
    }

    /// Change only the padding
    pub fn set_padding(&mut self, padding: Padding) {
        self.viewport.padding = padding;
        self.refresh_bounds();
        self.redraw.request();
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_scale_mode(&mut self, scale_mode: ScaleMode) {
        self.scale_mode = scale_mode;
        self.refresh_bounds();
        self.redraw.request();
    }

    /// Set the scale mode from its integer encoding
    ///
    /// Unknown values degrade to [`ScaleMode::Stretch`] with a warning.
    pub fn set_scale_mode_raw(&mut self, raw: i32) {
        self.set_scale_mode(ScaleMode::from_raw_or_stretch(raw));
    }

    pub fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }

    /// Where the content will be drawn, if there is content
    pub fn bounds(&self) -> Option<Bounds> {
        self.content.as_ref().and(self.layout.bounds())
    }

    /// Recompute bounds; no-op without content. Returns true on change.
    fn refresh_bounds(&mut self) -> bool {
        let Some(content) = &self.content else {
            return false;
        };
        self.layout
            .update(self.viewport, content.intrinsic_size(), self.scale_mode)
    }

    // =========================================================================
    // Blinking
    // =========================================================================

    /// See [`BlinkController::configure`]
    pub fn configure(&mut self, interval_ms: i64, fade: bool) -> Result<()> {
        self.blink.configure(interval_ms, fade)
    }

    pub fn start(&mut self) {
        self.blink.start();
    }

    pub fn stop(&mut self) {
        self.blink.stop();
    }

    /// Stop if blinking, start otherwise; returns the new intent
    pub fn toggle(&mut self) -> bool {
        self.blink.toggle()
    }

    pub fn is_enabled(&self) -> bool {
        self.blink.is_enabled()
    }

    pub fn is_running(&self) -> bool {
        self.blink.is_running()
    }

    pub fn set_preview_mode(&mut self, preview: bool) {
        self.blink.set_preview_mode(preview);
    }

    /// Read-only access to the blink state machine
    pub fn blink(&self) -> &BlinkController {
        &self.blink
    }

    /// Current opacity in `[0, 1]`
    pub fn opacity(&self) -> f32 {
        self.blink.current_opacity()
    }

    // =========================================================================
    // Host Lifecycle
    // =========================================================================

    pub fn on_attach(&mut self) {
        self.blink.on_attach();
    }

    pub fn on_detach(&mut self) {
        self.blink.on_detach();
    }

    pub fn is_attached(&self) -> bool {
        self.blink.is_attached()
    }

    /// Advance the blink animation; returns true while more ticks are wanted
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.blink.tick(dt)
    }

    /// The frame a render pass would draw, if any
    pub fn frame(&self) -> Option<Frame> {
        let bounds = self.bounds()?;
        Some(Frame {
            bounds,
            opacity: self.blink.current_opacity(),
            alpha: self.blink.alpha(),
        })
    }

    /// Draw the content onto `canvas`
    ///
    /// Draws nothing without content. Returns true if something was drawn.
    pub fn render<K>(&self, canvas: &mut K) -> bool
    where
        K: Canvas<C> + ?Sized,
    {
        match (&self.content, self.frame()) {
            (Some(content), Some(frame)) => {
                canvas.draw_content(content, frame);
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // Persisted State
    // =========================================================================

    /// Snapshot for the host to persist
    pub fn save_state(&self) -> BlinkerState {
        BlinkerState {
            scale_mode: self.scale_mode,
            interval_ms: self.blink.interval_ms() as i64,
            fade: self.blink.fade(),
            enabled: self.blink.is_enabled(),
        }
    }

    /// Re-apply a persisted snapshot
    ///
    /// The whole snapshot is rejected (and nothing changes) if it is invalid.
    pub fn restore_state(&mut self, state: BlinkerState) -> Result<()> {
        state.validate()?;
        self.set_scale_mode(state.scale_mode);
        self.configure(state.interval_ms, state.fade)?;
        if state.enabled {
            self.start();
        } else {
            self.stop();
        }
        tracing::debug!("BlinkerView: restored {:?}", state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::RecordingCanvas;
    use blinker_core::{BlinkerError, ContentSize};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn sample_view(config: BlinkerConfig) -> BlinkerView<ContentSize> {
        let mut view = BlinkerView::new(config)
            .unwrap()
            .with_content(ContentSize::new(50, 50));
        view.on_layout_changed(Viewport::new(200, 100));
        view
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = BlinkerView::<ContentSize>::new(BlinkerConfig::default().interval_ms(0))
            .unwrap_err();
        assert_eq!(err, BlinkerError::InvalidInterval(0));
    }

    #[test]
    fn test_autostart_waits_for_attach() {
        let mut view = sample_view(BlinkerConfig::default().autostart(true));
        assert!(view.is_enabled());
        assert!(!view.is_running());
        assert_eq!(view.opacity(), 1.0);

        view.on_attach();
        assert!(view.is_running());
        assert_eq!(view.opacity(), 0.0);
    }

    #[test]
    fn test_no_content_draws_nothing() {
        let mut view: BlinkerView<ContentSize> = BlinkerView::new(BlinkerConfig::default()).unwrap();
        view.on_layout_changed(Viewport::new(200, 100));
        assert_eq!(view.bounds(), None);
        assert_eq!(view.frame(), None);

        let mut canvas = RecordingCanvas::new();
        assert!(!view.render(&mut canvas));
        assert!(canvas.frames().is_empty());
    }

    #[test]
    fn test_take_content_hides_element() {
        let mut view = sample_view(BlinkerConfig::default());
        assert!(view.bounds().is_some());
        assert_eq!(view.take_content(), Some(ContentSize::new(50, 50)));
        assert_eq!(view.bounds(), None);
    }

    #[test]
    fn test_scale_mode_changes_bounds() {
        let mut view = sample_view(BlinkerConfig::default());
        assert_eq!(view.bounds(), Some(Bounds::new(0, 0, 200, 100)));

        view.set_scale_mode(ScaleMode::Center);
        assert_eq!(view.bounds(), Some(Bounds::new(75, 25, 125, 75)));

        view.set_scale_mode_raw(42);
        assert_eq!(view.scale_mode(), ScaleMode::Stretch);
        assert_eq!(view.bounds(), Some(Bounds::new(0, 0, 200, 100)));
    }

    #[test]
    fn test_padding_always_requests_redraw() {
        let mut view = sample_view(BlinkerConfig::default());
        view.redraw_signal().take_needs_redraw();

        view.set_padding(Padding::uniform(10));
        assert!(view.redraw_signal().take_needs_redraw());
        assert_eq!(view.bounds(), Some(Bounds::new(10, 10, 190, 90)));

        // Center ignores padding, but the padding change still redraws
        view.set_scale_mode(ScaleMode::Center);
        view.redraw_signal().take_needs_redraw();
        view.set_padding(Padding::uniform(20));
        assert!(view.redraw_signal().take_needs_redraw());
    }

    #[test]
    fn test_unchanged_layout_does_not_redraw() {
        let mut view = sample_view(BlinkerConfig::default());
        view.redraw_signal().take_needs_redraw();
        view.on_layout_changed(Viewport::new(200, 100));
        assert!(!view.redraw_signal().take_needs_redraw());

        view.on_layout_changed(Viewport::new(300, 100));
        assert!(view.redraw_signal().take_needs_redraw());
    }

    #[test]
    fn test_ticks_share_the_view_signal() {
        let mut view = sample_view(BlinkerConfig::default());
        view.on_attach();
        view.start();
        let before = view.redraw_signal().request_count();
        view.tick(ms(16));
        assert_eq!(view.redraw_signal().request_count(), before + 1);
    }

    #[test]
    fn test_render_applies_opacity() {
        let mut view = sample_view(BlinkerConfig::default().fade(true));
        view.on_attach();
        view.start();
        view.tick(ms(500));

        let mut canvas = RecordingCanvas::new();
        assert!(view.render(&mut canvas));
        let frame = canvas.last().copied().unwrap();
        assert_eq!(frame.opacity, 1.0);
        assert_eq!(frame.alpha, 255);
        assert_eq!(frame.bounds, Bounds::new(0, 0, 200, 100));
    }

    #[test]
    fn test_save_and_restore_state() {
        let mut view = sample_view(BlinkerConfig::default().scale_mode(ScaleMode::Constrain));
        view.configure(800, false).unwrap();
        view.start();
        let saved = view.save_state();
        assert_eq!(
            saved,
            BlinkerState {
                scale_mode: ScaleMode::Constrain,
                interval_ms: 800,
                fade: false,
                enabled: true,
            }
        );

        let mut restored = sample_view(BlinkerConfig::default());
        restored.restore_state(saved).unwrap();
        assert_eq!(restored.save_state(), saved);
        restored.on_attach();
        assert!(restored.is_running());
    }

    #[test]
    fn test_invalid_state_changes_nothing() {
        let mut view = sample_view(BlinkerConfig::default());
        let before = view.save_state();
        let result = view.restore_state(BlinkerState {
            scale_mode: ScaleMode::Center,
            interval_ms: 0,
            fade: false,
            enabled: true,
        });
        assert!(result.is_err());
        assert_eq!(view.save_state(), before);
    }
}
