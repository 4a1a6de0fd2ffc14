//! Blink controller
//!
//! Owns the blink state machine. Two pieces of state are kept apart:
//!
//! - **intent** (`enabled`): whether the element should be blinking. It is
//!   only changed by [`BlinkController::start`] and [`BlinkController::stop`]
//!   and survives detach/attach cycles.
//! - **progress** (the running [`Sweep`]): exists only while the controller
//!   is enabled and attached to a live clock. It is rebuilt from scratch
//!   whenever blinking (re)starts.
//!
//! The host drives time by calling [`BlinkController::tick`] from its frame
//! clock and reads [`BlinkController::current_opacity`] when drawing.
//!
//! ```rust
//! use blinker_animation::BlinkController;
//! use std::time::Duration;
//!
//! let mut blink = BlinkController::new(500, false).unwrap();
//! blink.on_attach();
//! blink.start();
//! blink.tick(Duration::from_millis(250));
//! assert_eq!(blink.current_opacity(), 0.0);
//! ```

use crate::easing::Easing;
use crate::sweep::{Sweep, SweepDirection};
use blinker_core::{BlinkerError, RedrawSignal, Result};
use std::time::Duration;

/// Default length of one half of a blink, in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 500;

/// Phase above which a hard-cut blink shows the content
///
/// The comparison is strict: a phase of exactly 0.5 is hidden.
pub const HARD_CUT_THRESHOLD: f32 = 0.5;

/// Validate a raw interval value
pub fn validate_interval(interval_ms: i64) -> Result<u64> {
    match u64::try_from(interval_ms) {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(BlinkerError::InvalidInterval(interval_ms)),
    }
}

/// Blink state machine for a single element
#[derive(Debug)]
pub struct BlinkController {
    interval_ms: u64,
    fade: bool,
    easing: Easing,
    /// Durable "should blink" intent
    enabled: bool,
    /// Whether the host element is live and ticking
    attached: bool,
    /// Edit/preview mode always draws fully opaque
    preview: bool,
    /// Transient progress, present only while actually blinking
    sweep: Option<Sweep>,
    redraw: RedrawSignal,
}

impl Default for BlinkController {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            fade: true,
            easing: Easing::AccelerateDecelerate,
            enabled: false,
            attached: false,
            preview: false,
            sweep: None,
            redraw: RedrawSignal::new(),
        }
    }
}

impl BlinkController {
    /// Create a detached, stopped controller
    pub fn new(interval_ms: i64, fade: bool) -> Result<Self> {
        Ok(Self {
            interval_ms: validate_interval(interval_ms)?,
            fade,
            ..Self::default()
        })
    }

    /// Share a redraw signal with the host
    pub fn with_redraw_signal(mut self, redraw: RedrawSignal) -> Self {
        self.redraw = redraw;
        self
    }

    pub fn set_redraw_signal(&mut self, redraw: RedrawSignal) {
        self.redraw = redraw;
    }

    pub fn redraw_signal(&self) -> &RedrawSignal {
        &self.redraw
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the interval and fade mode
    ///
    /// A non-positive interval is rejected and the previous settings are kept.
    /// If the controller is currently blinking, the sweep restarts from
    /// phase 0 with the new settings.
    pub fn configure(&mut self, interval_ms: i64, fade: bool) -> Result<()> {
        let interval_ms = match validate_interval(interval_ms) {
            Ok(ms) => ms,
            Err(err) => {
                tracing::warn!("BlinkController: rejected configuration: {}", err);
                return Err(err);
            }
        };

        self.interval_ms = interval_ms;
        self.fade = fade;
        if self.sweep.is_some() {
            tracing::debug!(
                "BlinkController: restarting with interval={}ms fade={}",
                interval_ms,
                fade
            );
            self.begin_sweep();
        }
        Ok(())
    }

    /// Replace the timing curve (accelerate/decelerate by default)
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
        if self.sweep.is_some() {
            self.begin_sweep();
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Length of one half of a blink
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn fade(&self) -> bool {
        self.fade
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Force full opacity regardless of blink state
    pub fn set_preview_mode(&mut self, preview: bool) {
        if self.preview != preview {
            self.preview = preview;
            self.redraw.request();
        }
    }

    pub fn is_preview_mode(&self) -> bool {
        self.preview
    }

    // =========================================================================
    // Intent
    // =========================================================================

    /// Start blinking
    ///
    /// When attached, the sweep (re)starts immediately from phase 0.
    /// Otherwise the intent is recorded and the sweep begins on attach.
    pub fn start(&mut self) {
        self.enabled = true;
        if self.attached {
            tracing::debug!("BlinkController: start");
            self.begin_sweep();
        } else {
            tracing::debug!("BlinkController: start deferred until attached");
        }
    }

    /// Stop blinking and return to full opacity
    ///
    /// Calling this when already stopped does nothing.
    pub fn stop(&mut self) {
        if !self.enabled && self.sweep.is_none() {
            return;
        }
        tracing::debug!("BlinkController: stop");
        self.enabled = false;
        self.sweep = None;
        self.redraw.request();
    }

    /// Stop if blinking, start otherwise
    ///
    /// Returns the new intent.
    pub fn toggle(&mut self) -> bool {
        if self.enabled {
            self.stop();
        } else {
            self.start();
        }
        self.enabled
    }

    /// Whether the element should be blinking
    ///
    /// This is the intent only; see [`BlinkController::is_running`].
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a sweep is actually in progress
    pub fn is_running(&self) -> bool {
        self.sweep.is_some()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// The host element became live
    pub fn on_attach(&mut self) {
        self.attached = true;
        if self.enabled && self.sweep.is_none() {
            tracing::debug!("BlinkController: attached, resuming");
            self.begin_sweep();
        }
    }

    /// The host element went away
    ///
    /// Cancels the sweep but keeps the intent, so re-attaching resumes.
    /// Cancelling a running sweep snaps back to full opacity and requests a
    /// redraw so a hidden frame does not stay on screen.
    pub fn on_detach(&mut self) {
        self.attached = false;
        if self.sweep.take().is_some() {
            tracing::debug!("BlinkController: detached, sweep cancelled");
            self.redraw.request();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Advance the animation by one clock tick
    ///
    /// Requests exactly one redraw per tick while blinking. Returns true if
    /// the controller wants more ticks.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(sweep) = self.sweep.as_mut() else {
            return false;
        };
        sweep.tick(dt);
        tracing::trace!(
            "BlinkController: tick dt={:?} phase={:.3}",
            dt,
            sweep.phase()
        );
        self.redraw.request();
        true
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Current sweep phase, if blinking
    pub fn phase(&self) -> Option<f32> {
        self.sweep.as_ref().map(Sweep::phase)
    }

    /// Current sweep direction, if blinking
    pub fn direction(&self) -> Option<SweepDirection> {
        self.sweep.as_ref().map(Sweep::direction)
    }

    /// Opacity to draw with, in `[0, 1]`
    ///
    /// Fully opaque unless enabled, running and not in preview mode. With
    /// fade on the phase is used directly; with fade off it is cut hard at
    /// the midpoint.
    pub fn current_opacity(&self) -> f32 {
        if self.preview || !self.enabled {
            return 1.0;
        }
        let Some(phase) = self.phase() else {
            return 1.0;
        };
        if self.fade {
            phase
        } else if phase > HARD_CUT_THRESHOLD {
            1.0
        } else {
            0.0
        }
    }

    /// Opacity as an 8-bit alpha value
    pub fn alpha(&self) -> u8 {
        (self.current_opacity() * 255.0).round().clamp(0.0, 255.0) as u8
    }

    fn begin_sweep(&mut self) {
        self.sweep = Some(Sweep::new(self.interval(), self.easing));
        self.redraw.request();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn running(interval_ms: i64, fade: bool) -> BlinkController {
        let mut blink = BlinkController::new(interval_ms, fade).unwrap();
        blink.on_attach();
        blink.start();
        blink
    }

    #[test]
    fn test_stopped_controller_is_opaque() {
        let blink = BlinkController::default();
        assert!(!blink.is_enabled());
        assert_eq!(blink.current_opacity(), 1.0);
        assert_eq!(blink.alpha(), 255);
    }

    #[test]
    fn test_midpoint_is_hidden_with_hard_cut() {
        let mut blink = running(500, false);
        blink.tick(ms(250));
        assert_eq!(blink.current_opacity(), 0.0);
    }

    #[test]
    fn test_hard_cut_shows_past_the_midpoint() {
        let mut blink = running(500, false);
        blink.tick(ms(300));
        assert_eq!(blink.current_opacity(), 1.0);
    }

    #[test]
    fn test_hard_cut_only_produces_extremes() {
        let mut blink = running(500, false);
        for _ in 0..200 {
            blink.tick(ms(7));
            let opacity = blink.current_opacity();
            assert!(opacity == 0.0 || opacity == 1.0, "got {}", opacity);
        }
    }

    #[test]
    fn test_fade_rises_then_falls() {
        let mut blink = running(500, true);
        assert_eq!(blink.current_opacity(), 0.0);

        let mut samples = vec![blink.current_opacity()];
        for _ in 0..40 {
            blink.tick(ms(25));
            samples.push(blink.current_opacity());
        }

        let peak = samples
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak, 20);
        assert!(samples[..=peak].windows(2).all(|w| w[0] <= w[1]));
        assert!(samples[peak..].windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(*samples.last().unwrap(), 0.0);
    }

    #[test]
    fn test_stop_restores_full_opacity_and_is_idempotent() {
        let mut blink = running(500, true);
        blink.tick(ms(100));
        blink.stop();
        assert_eq!(blink.current_opacity(), 1.0);
        assert!(!blink.is_enabled());
        assert!(!blink.tick(ms(100)));

        let requests = blink.redraw_signal().request_count();
        blink.stop();
        assert_eq!(blink.redraw_signal().request_count(), requests);
    }

    #[test]
    fn test_detach_keeps_intent_and_reattach_restarts() {
        let mut blink = running(500, true);
        blink.tick(ms(200));
        assert!(blink.phase().unwrap() > 0.0);

        blink.redraw_signal().take_needs_redraw();
        blink.on_detach();
        assert!(blink.redraw_signal().take_needs_redraw());
        assert!(blink.is_enabled());
        assert!(!blink.is_running());
        assert_eq!(blink.current_opacity(), 1.0);
        assert!(!blink.tick(ms(50)));

        // Nothing left to cancel
        blink.on_detach();
        assert!(!blink.redraw_signal().take_needs_redraw());

        blink.on_attach();
        assert!(blink.is_enabled());
        assert_eq!(blink.phase(), Some(0.0));
        assert_eq!(blink.direction(), Some(SweepDirection::Forward));
    }

    #[test]
    fn test_start_while_detached_defers() {
        let mut blink = BlinkController::default();
        blink.start();
        assert!(blink.is_enabled());
        assert!(!blink.is_running());

        blink.on_attach();
        assert!(blink.is_running());
    }

    #[test]
    fn test_configure_rejects_non_positive_interval() {
        let mut blink = running(300, true);
        assert_eq!(
            blink.configure(0, false),
            Err(BlinkerError::InvalidInterval(0))
        );
        assert_eq!(
            blink.configure(-20, false),
            Err(BlinkerError::InvalidInterval(-20))
        );
        assert_eq!(blink.interval_ms(), 300);
        assert!(blink.fade());
        assert!(BlinkController::new(0, true).is_err());
    }

    #[test]
    fn test_configure_restarts_running_sweep() {
        let mut blink = running(500, true);
        blink.tick(ms(400));
        blink.configure(1000, false).unwrap();
        assert_eq!(blink.phase(), Some(0.0));
        assert_eq!(blink.interval(), ms(1000));
        assert!(!blink.fade());
    }

    #[test]
    fn test_configure_while_stopped_does_not_start() {
        let mut blink = BlinkController::default();
        blink.on_attach();
        blink.configure(250, false).unwrap();
        assert!(!blink.is_running());
        assert_eq!(blink.interval_ms(), 250);
    }

    #[test]
    fn test_one_redraw_per_tick() {
        let mut blink = running(500, true);
        let before = blink.redraw_signal().request_count();
        for _ in 0..5 {
            blink.tick(ms(16));
        }
        assert_eq!(blink.redraw_signal().request_count(), before + 5);
    }

    #[test]
    fn test_preview_mode_is_opaque() {
        let mut blink = running(500, true);
        blink.set_preview_mode(true);
        assert_eq!(blink.current_opacity(), 1.0);
        blink.set_preview_mode(false);
        assert_eq!(blink.current_opacity(), 0.0);
    }

    #[test]
    fn test_toggle() {
        let mut blink = BlinkController::default();
        blink.on_attach();
        assert!(blink.toggle());
        assert!(blink.is_running());
        assert!(!blink.toggle());
        assert!(!blink.is_running());
    }
}
