//! Stage
//!
//! Owns several views that share one host surface and one frame clock.
//! Views are registered and addressed through [`ViewId`] handles; the stage
//! attaches, detaches and ticks them together and funnels all of their
//! redraw requests into a single signal.

use crate::content::{Canvas, Content};
use crate::view::BlinkerView;
use blinker_core::{RedrawSignal, Viewport};
use slotmap::{new_key_type, SlotMap};
use std::time::Duration;

new_key_type! {
    /// Handle to a view registered with a [`Stage`]
    pub struct ViewId;
}

/// A collection of views driven together
pub struct Stage<C> {
    views: SlotMap<ViewId, BlinkerView<C>>,
    redraw: RedrawSignal,
    attached: bool,
}

impl<C: Content> Default for Stage<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Content> Stage<C> {
    pub fn new() -> Self {
        Self::with_redraw_signal(RedrawSignal::new())
    }

    /// Create a stage that reports through the host's signal
    pub fn with_redraw_signal(redraw: RedrawSignal) -> Self {
        Self {
            views: SlotMap::with_key(),
            redraw,
            attached: false,
        }
    }

    pub fn redraw_signal(&self) -> &RedrawSignal {
        &self.redraw
    }

    /// Check and clear the shared needs_redraw flag
    pub fn take_needs_redraw(&self) -> bool {
        self.redraw.take_needs_redraw()
    }

    /// Register a view
    ///
    /// The view's redraw signal is replaced by the stage's. If the stage is
    /// attached, the view is attached immediately.
    pub fn insert(&mut self, mut view: BlinkerView<C>) -> ViewId {
        view.set_redraw_signal(self.redraw.clone());
        if self.attached {
            view.on_attach();
        }
        self.redraw.request();
        self.views.insert(view)
    }

    /// Unregister a view, detaching it
    pub fn remove(&mut self, id: ViewId) -> Option<BlinkerView<C>> {
        let mut view = self.views.remove(id)?;
        view.on_detach();
        view.set_redraw_signal(RedrawSignal::new());
        self.redraw.request();
        Some(view)
    }

    pub fn get(&self, id: ViewId) -> Option<&BlinkerView<C>> {
        self.views.get(id)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut BlinkerView<C>> {
        self.views.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ViewId, &BlinkerView<C>)> {
        self.views.iter()
    }

    /// Attach every view
    pub fn attach_all(&mut self) {
        self.attached = true;
        for (_, view) in self.views.iter_mut() {
            view.on_attach();
        }
    }

    /// Detach every view; blink intent is kept
    pub fn detach_all(&mut self) {
        self.attached = false;
        for (_, view) in self.views.iter_mut() {
            view.on_detach();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Push the same viewport to every view
    pub fn layout_all(&mut self, viewport: Viewport) {
        for (_, view) in self.views.iter_mut() {
            view.on_layout_changed(viewport);
        }
    }

    /// Tick every view
    ///
    /// Returns true if any view is still animating.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let mut active = false;
        for (_, view) in self.views.iter_mut() {
            active |= view.tick(dt);
        }
        active
    }

    /// Whether any view is animating
    pub fn has_active_animations(&self) -> bool {
        self.views.iter().any(|(_, view)| view.is_running())
    }

    /// Render every view in registration order; returns the number drawn
    pub fn render<K>(&self, canvas: &mut K) -> usize
    where
        K: Canvas<C> + ?Sized,
    {
        let mut drawn = 0;
        for (_, view) in self.views.iter() {
            if view.render(&mut *canvas) {
                drawn += 1;
            }
        }
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlinkerConfig;
    use crate::content::RecordingCanvas;
    use blinker_core::ContentSize;

    fn blinker(autostart: bool) -> BlinkerView<ContentSize> {
        BlinkerView::new(BlinkerConfig::default().autostart(autostart))
            .unwrap()
            .with_content(ContentSize::new(10, 10))
    }

    #[test]
    fn test_insert_shares_redraw_signal() {
        let mut stage = Stage::new();
        let id = stage.insert(blinker(false));
        stage.take_needs_redraw();

        stage.get_mut(id).unwrap().start();
        stage.attach_all();
        assert!(stage.take_needs_redraw());
    }

    #[test]
    fn test_attach_starts_autostart_views_only() {
        let mut stage = Stage::new();
        let auto = stage.insert(blinker(true));
        let manual = stage.insert(blinker(false));
        assert!(!stage.has_active_animations());

        stage.attach_all();
        assert!(stage.get(auto).unwrap().is_running());
        assert!(!stage.get(manual).unwrap().is_running());
        assert!(stage.tick(Duration::from_millis(16)));
    }

    #[test]
    fn test_detach_all_keeps_intent() {
        let mut stage = Stage::new();
        let id = stage.insert(blinker(true));
        stage.attach_all();
        stage.detach_all();

        let view = stage.get(id).unwrap();
        assert!(view.is_enabled());
        assert!(!view.is_running());
        assert!(!stage.tick(Duration::from_millis(16)));
    }

    #[test]
    fn test_insert_into_attached_stage_attaches() {
        let mut stage = Stage::new();
        stage.attach_all();
        let id = stage.insert(blinker(true));
        assert!(stage.get(id).unwrap().is_running());
    }

    #[test]
    fn test_remove_detaches() {
        let mut stage = Stage::new();
        stage.attach_all();
        let id = stage.insert(blinker(true));
        let view = stage.remove(id).unwrap();
        assert!(!view.is_attached());
        assert!(stage.get(id).is_none());
        assert!(stage.is_empty());
    }

    #[test]
    fn test_render_draws_each_view() {
        let mut stage = Stage::new();
        stage.insert(blinker(false));
        stage.insert(blinker(false));
        stage.insert(BlinkerView::new(BlinkerConfig::default()).unwrap());
        stage.layout_all(Viewport::new(40, 40));

        let mut canvas = RecordingCanvas::new();
        assert_eq!(stage.render(&mut canvas), 2);
        assert_eq!(canvas.frames().len(), 2);
    }
}
