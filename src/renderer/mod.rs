//! Rendering collaborator
//!
//! The slider model never touches a drawing API directly. Each state change
//! produces a [`RenderFrame`] that is pushed to an injected [`SliderRenderer`].

pub mod arc_path;

pub use arc_path::arc_path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::slider::ArcSweep;

/// Everything needed to draw the slider for one state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub value: i64,
    /// Handle angle (screen radians)
    pub angle: f64,
    /// Handle position relative to the circle center
    pub handle: DVec2,
    /// Progress arc
    pub sweep: ArcSweep,
    /// Track circle is see-through so a badge image shows behind it
    pub transparent_track: bool,
    /// Center label text
    pub label: String,
}

/// Drawing surface driven by the slider model
pub trait SliderRenderer {
    /// Redraw handle, arc and label
    fn render(&mut self, frame: &RenderFrame);

    /// Toggle the handle's active-drag marker
    fn set_dragging(&mut self, _active: bool) {}
}

/// Renderer that draws nothing (headless use)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl SliderRenderer for NullRenderer {
    fn render(&mut self, _frame: &RenderFrame) {}
}

impl<R: SliderRenderer + ?Sized> SliderRenderer for Box<R> {
    fn render(&mut self, frame: &RenderFrame) {
        (**self).render(frame);
    }

    fn set_dragging(&mut self, active: bool) {
        (**self).set_dragging(active);
    }
}
