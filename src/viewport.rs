use eframe::egui::Vec2;

/// Bounds for user-driven zoom so repeated zoom-out never reaches zero.
pub const MIN_ZOOM: f32 = 0.01;
pub const MAX_ZOOM: f32 = 100.0;

// ---------------------------------------------------------------------------
// Fit-to-viewport scale
// ---------------------------------------------------------------------------

/// Uniform scale that makes `image` fit entirely inside `viewport`.
///
/// Both extents must be positive in both axes.
pub fn fit_zoom(viewport: Vec2, image: Vec2) -> f32 {
    let viewport_aspect = viewport.x / viewport.y;
    let image_aspect = image.x / image.y;
    if image_aspect > viewport_aspect {
        // Wider than the viewport: width is the binding side.
        viewport.x / image.x
    } else {
        viewport.y / image.y
    }
}

// ---------------------------------------------------------------------------
// Per-pane zoom state
// ---------------------------------------------------------------------------

/// Zoom factor of one image pane, either fitted to the pane or user-set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    pub zoom: f32,
    /// When set, `zoom` is recomputed from the pane size every frame.
    pub fit: bool,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            fit: true,
        }
    }
}

impl ZoomState {
    /// A fitted zoom may already sit outside `[MIN_ZOOM, MAX_ZOOM]`; a step
    /// never moves it the wrong way.
    pub fn zoom_in(&mut self, step: f32) {
        self.zoom = (self.zoom * step).min(MAX_ZOOM.max(self.zoom));
        self.fit = false;
    }

    pub fn zoom_out(&mut self, step: f32) {
        self.zoom = (self.zoom / step).max(MIN_ZOOM.min(self.zoom));
        self.fit = false;
    }

    /// Show the image at its natural size.
    pub fn actual_size(&mut self) {
        self.zoom = 1.0;
        self.fit = false;
    }

    pub fn fit_to_view(&mut self) {
        self.fit = true;
    }

    /// Scale to draw `image` at inside `viewport` this frame.
    pub fn resolve(&mut self, viewport: Vec2, image: Vec2) -> f32 {
        let positive = viewport.x > 0.0 && viewport.y > 0.0 && image.x > 0.0 && image.y > 0.0;
        if self.fit && positive {
            self.zoom = fit_zoom(viewport, image);
        }
        self.zoom
    }

    /// Human readable zoom, e.g. `"Zoom 50.0%"`.
    pub fn label(&self) -> String {
        format!("Zoom {:.1}%", self.zoom * 100.0)
    }
}

/// Offset that centers a `displayed` rectangle inside `viewport`.
pub fn centered_offset(viewport: Vec2, displayed: Vec2) -> Vec2 {
    (viewport - displayed) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn square_image_in_wide_viewport_is_height_bound() {
        assert_eq!(fit_zoom(v(200.0, 100.0), v(100.0, 100.0)), 1.0);
    }

    #[test]
    fn wide_image_is_width_bound() {
        assert_eq!(fit_zoom(v(100.0, 100.0), v(400.0, 100.0)), 0.25);
    }

    #[test]
    fn fitted_image_stays_inside_viewport() {
        let viewports = [v(200.0, 100.0), v(640.0, 480.0), v(31.0, 977.0), v(1.0, 1.0)];
        let images = [v(100.0, 100.0), v(4000.0, 3000.0), v(7.0, 2.0), v(1.0, 5000.0)];
        for viewport in viewports {
            for image in images {
                let zoom = fit_zoom(viewport, image);
                let shown = image * zoom;
                // Allow one ulp-ish of float slack on the binding side.
                assert!(shown.x <= viewport.x * (1.0 + 1e-6), "{viewport:?} {image:?}");
                assert!(shown.y <= viewport.y * (1.0 + 1e-6), "{viewport:?} {image:?}");
            }
        }
    }

    #[test]
    fn fit_zoom_is_deterministic() {
        let a = fit_zoom(v(333.0, 777.0), v(1920.0, 1080.0));
        let b = fit_zoom(v(333.0, 777.0), v(1920.0, 1080.0));
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn user_zoom_clears_fit() {
        let mut state = ZoomState::default();
        assert!(state.fit);

        state.zoom_in(2.0);
        assert!(!state.fit);
        assert_eq!(state.zoom, 2.0);

        state.zoom_out(4.0);
        assert_eq!(state.zoom, 0.5);

        state.fit_to_view();
        assert!(state.fit);
        state.actual_size();
        assert!(!state.fit);
        assert_eq!(state.zoom, 1.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut state = ZoomState::default();
        for _ in 0..200 {
            state.zoom_out(1.1);
        }
        assert_eq!(state.zoom, MIN_ZOOM);
        for _ in 0..200 {
            state.zoom_in(1.1);
        }
        assert_eq!(state.zoom, MAX_ZOOM);
    }

    #[test]
    fn resolve_only_recomputes_when_fitting() {
        let mut state = ZoomState::default();
        assert_eq!(state.resolve(v(50.0, 50.0), v(100.0, 100.0)), 0.5);

        state.zoom_in(2.0);
        assert_eq!(state.resolve(v(50.0, 50.0), v(100.0, 100.0)), 1.0);
    }

    #[test]
    fn stepping_from_large_fit_zoom_keeps_direction() {
        // 2x2 image in an 800x800 pane fits at 400x, above MAX_ZOOM.
        let mut state = ZoomState::default();
        assert_eq!(state.resolve(v(800.0, 800.0), v(2.0, 2.0)), 400.0);

        state.zoom_in(1.1);
        assert_eq!(state.zoom, 400.0);

        state.zoom_out(2.0);
        assert_eq!(state.zoom, 200.0);
    }

    #[test]
    fn stepping_from_tiny_fit_zoom_keeps_direction() {
        // 100000x100000 image in a 100x100 pane fits at 0.001, below MIN_ZOOM.
        let mut state = ZoomState::default();
        let fitted = state.resolve(v(100.0, 100.0), v(100_000.0, 100_000.0));
        assert!(fitted < MIN_ZOOM);

        state.zoom_out(1.1);
        assert_eq!(state.zoom, fitted);

        state.zoom_in(2.0);
        assert_eq!(state.zoom, fitted * 2.0);
    }

    #[test]
    fn resolve_ignores_empty_viewport() {
        let mut state = ZoomState::default();
        assert_eq!(state.resolve(v(0.0, 0.0), v(100.0, 100.0)), 1.0);
    }

    #[test]
    fn centers_displayed_image() {
        assert_eq!(centered_offset(v(200.0, 100.0), v(100.0, 100.0)), v(50.0, 0.0));
    }

    #[test]
    fn label_formats_percent() {
        let state = ZoomState { zoom: 0.5, fit: false };
        assert_eq!(state.label(), "Zoom 50.0%");
    }
}
