// src/view_transform.rs
//
// Pan/zoom state of the map view. Scale is stepped, never continuous.
use crate::region_data::{Dataset, Region};

/// Primary mouse button as reported by `MouseEvent::button()`.
pub const PRIMARY_BUTTON: i16 = 0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 3.0,
            step: 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    limits: ZoomLimits,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

impl ViewTransform {
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            limits,
        }
    }

    pub fn zoom_in(&mut self) {
        self.scale = (self.scale + self.limits.step).min(self.limits.max);
    }

    pub fn zoom_out(&mut self) {
        self.scale = (self.scale - self.limits.step).max(self.limits.min);
    }

    pub fn can_zoom_in(&self) -> bool {
        self.scale < self.limits.max
    }

    pub fn can_zoom_out(&self) -> bool {
        self.scale > self.limits.min
    }

    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.offset_x == 0.0 && self.offset_y == 0.0
    }

    /// Apply a screen-space drag delta. Offsets live inside the scaled layer,
    /// so the delta is divided by the current scale.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx / self.scale;
        self.offset_y += dy / self.scale;
    }

    pub fn css_transform(&self) -> String {
        format!(
            "scale({}) translate({}px, {}px)",
            self.scale, self.offset_x, self.offset_y
        )
    }

    pub fn percent(&self) -> i32 {
        (self.scale * 100.0).round() as i32
    }
}

/// Mouse drag bookkeeping for panning.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    active: bool,
    last_x: f32,
    last_y: f32,
}

impl DragState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Begin a drag; only the primary button counts.
    pub fn start(&mut self, button: i16, x: f32, y: f32) -> bool {
        if button != PRIMARY_BUTTON {
            return false;
        }
        self.active = true;
        self.last_x = x;
        self.last_y = y;
        true
    }

    /// Delta since the previous pointer position while dragging.
    pub fn move_to(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        if !self.active {
            return None;
        }
        let delta = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        Some(delta)
    }

    pub fn end(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }
}

/// Region under the pointer and where the pointer is, in client coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HoverState {
    hovered: Option<Region>,
    pointer: (f64, f64),
}

impl HoverState {
    pub fn hovered(&self) -> Option<&Region> {
        self.hovered.as_ref()
    }

    pub fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    /// Pointer entered the shape `id`. Ids with no region leave the state alone.
    pub fn enter(&mut self, dataset: &Dataset, id: &str, x: f64, y: f64) -> bool {
        match dataset.find(id) {
            Some(region) => {
                self.hovered = Some(region.clone());
                self.pointer = (x, y);
                true
            }
            None => false,
        }
    }

    /// Track the pointer while a shape is hovered.
    pub fn move_to(&mut self, x: f64, y: f64) -> bool {
        if self.hovered.is_none() {
            return false;
        }
        self.pointer = (x, y);
        true
    }

    pub fn leave(&mut self) -> bool {
        self.hovered.take().is_some()
    }
}

/// Region a click on shape `id` selects, if any.
pub fn resolve_click(dataset: &Dataset, id: &str) -> Option<Region> {
    dataset.find(id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::load().unwrap()
    }

    #[test]
    fn test_zoom_in_clamps_at_max() {
        let mut view = ViewTransform::default();
        for _ in 0..50 {
            view.zoom_in();
            assert!(view.scale <= 3.0);
        }
        assert_eq!(view.scale, 3.0);
        assert!(!view.can_zoom_in());
    }

    #[test]
    fn test_zoom_out_clamps_at_min() {
        let mut view = ViewTransform::default();
        for _ in 0..50 {
            view.zoom_out();
            assert!(view.scale >= 0.5);
        }
        assert_eq!(view.scale, 0.5);
        assert!(!view.can_zoom_out());
    }

    #[test]
    fn test_zoom_step() {
        let mut view = ViewTransform::default();
        view.zoom_in();
        assert!((view.scale - 1.2).abs() < 1e-6);
        assert_eq!(view.percent(), 120);
        view.zoom_out();
        view.zoom_out();
        assert!((view.scale - 0.8).abs() < 1e-6);
        assert_eq!(view.percent(), 80);
    }

    #[test]
    fn test_reset_restores_identity() {
        let mut view = ViewTransform::default();
        view.zoom_in();
        view.zoom_in();
        view.pan_by(40.0, -25.0);
        assert!(!view.is_identity());
        view.reset();
        assert_eq!(view.scale, 1.0);
        assert_eq!((view.offset_x, view.offset_y), (0.0, 0.0));
        assert!(view.is_identity());
    }

    #[test]
    fn test_pan_is_divided_by_scale() {
        let mut view = ViewTransform::default();
        view.pan_by(10.0, 20.0);
        assert_eq!((view.offset_x, view.offset_y), (10.0, 20.0));

        let mut zoomed = ViewTransform::new(ZoomLimits {
            min: 0.5,
            max: 3.0,
            step: 1.0,
        });
        zoomed.zoom_in();
        assert_eq!(zoomed.scale, 2.0);
        zoomed.pan_by(10.0, 20.0);
        assert_eq!((zoomed.offset_x, zoomed.offset_y), (5.0, 10.0));
    }

    #[test]
    fn test_css_transform() {
        let mut view = ViewTransform::default();
        view.pan_by(3.0, 4.0);
        assert_eq!(view.css_transform(), "scale(1) translate(3px, 4px)");
    }

    #[test]
    fn test_drag_requires_primary_button() {
        let mut drag = DragState::default();
        assert!(!drag.start(2, 0.0, 0.0));
        assert!(!drag.is_active());
        assert_eq!(drag.move_to(5.0, 5.0), None);
    }

    #[test]
    fn test_drag_deltas() {
        let mut drag = DragState::default();
        assert!(drag.start(PRIMARY_BUTTON, 100.0, 100.0));
        assert_eq!(drag.move_to(110.0, 95.0), Some((10.0, -5.0)));
        assert_eq!(drag.move_to(110.0, 100.0), Some((0.0, 5.0)));
        assert!(drag.end());
        assert!(!drag.end());
        assert_eq!(drag.move_to(200.0, 200.0), None);
    }

    #[test]
    fn test_hover_enter_move_leave() {
        let data = dataset();
        let mut hover = HoverState::default();
        assert!(hover.enter(&data, "KA", 10.0, 20.0));
        assert_eq!(hover.hovered().map(|r| r.name.as_str()), Some("Karnataka"));
        assert_eq!(hover.pointer(), (10.0, 20.0));

        assert!(hover.move_to(15.0, 25.0));
        assert_eq!(hover.pointer(), (15.0, 25.0));

        assert!(hover.leave());
        assert!(hover.hovered().is_none());
        assert!(!hover.leave());
    }

    #[test]
    fn test_pointer_ignored_without_hover() {
        let mut hover = HoverState::default();
        assert!(!hover.move_to(50.0, 60.0));
        assert_eq!(hover.pointer(), (0.0, 0.0));
    }

    #[test]
    fn test_unknown_shape_id_is_noop() {
        let data = dataset();
        let mut hover = HoverState::default();
        assert!(!hover.enter(&data, "XX", 1.0, 2.0));
        assert_eq!(hover, HoverState::default());

        assert!(hover.enter(&data, "GA", 3.0, 4.0));
        let before = hover.clone();
        assert!(!hover.enter(&data, "XX", 9.0, 9.0));
        assert_eq!(hover, before);

        assert!(resolve_click(&data, "XX").is_none());
        assert!(resolve_click(&data, "").is_none());
    }

    #[test]
    fn test_click_karnataka() {
        let region = resolve_click(&dataset(), "KA").unwrap();
        assert_eq!(region.name, "Karnataka");
        assert_eq!(region.capital, "Bengaluru");
    }
}
