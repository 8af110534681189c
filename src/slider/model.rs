//! Slider model
//!
//! Owns the current value and handle angle, drives the drag controller and
//! pushes a fresh [`RenderFrame`] to the renderer after every mutation.

use glam::DVec2;

use super::angle::{angle_to_offset, angle_to_value, value_to_angle};
use super::drag::{DragController, DragPhase, DragUpdate};
use super::events::{ChangeEndStream, Subscription};
use super::sweep::ArcSweep;
use crate::config::SliderConfig;
use crate::consts::INITIAL_ANGLE;
use crate::renderer::{NullRenderer, RenderFrame, SliderRenderer};
use crate::{finite_or_zero, round_half_up};

type DiagnosticHook = Box<dyn FnMut(&RenderFrame)>;

/// State of one slider widget
pub struct SliderModel<R: SliderRenderer = NullRenderer> {
    config: SliderConfig,
    value: i64,
    /// Handle angle (screen radians)
    angle: f64,
    drag: DragController,
    change_end: ChangeEndStream,
    renderer: R,
    diagnostic_hook: Option<DiagnosticHook>,
}

impl<R: SliderRenderer> SliderModel<R> {
    /// Create a slider with the handle at the bottom of the circle
    pub fn new(config: SliderConfig, renderer: R) -> Self {
        let max = config.max;
        let mut model = Self {
            value: angle_to_value(INITIAL_ANGLE, max),
            angle: INITIAL_ANGLE,
            drag: DragController::new(max),
            change_end: ChangeEndStream::new(),
            renderer,
            diagnostic_hook: None,
            config,
        };
        model.render();
        model
    }

    /// Create a slider seeded with a host value
    pub fn with_value(config: SliderConfig, renderer: R, value: f64) -> Self {
        let mut model = Self::new(config, renderer);
        model.set_value(value);
        model
    }

    /// Set the value from the host: rounded, not clamped to `[min, max]`
    pub fn set_value(&mut self, value: f64) {
        self.value = round_half_up(finite_or_zero(value)) as i64;
        self.angle = value_to_angle(self.value as f64, self.config.max);
        self.render();
    }

    /// Last committed or interim value
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Value clamped into `[min, max]`
    pub fn clamped_value(&self) -> i64 {
        let (lo, hi) = (self.config.min.min(self.config.max), self.config.max.max(self.config.min));
        self.value.clamp(lo, hi)
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn phase(&self) -> DragPhase {
        self.drag.phase()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Center label, e.g. `42%`
    pub fn label(&self) -> String {
        format!("{}{}", self.value, self.config.units)
    }

    /// Stream of committed values, one per completed drag
    pub fn change_end(&self) -> &ChangeEndStream {
        &self.change_end
    }

    /// Shorthand for `change_end().subscribe(..)`
    #[must_use = "dropping the subscription detaches the listener"]
    pub fn on_change_end(&self, listener: impl Fn(i64) + 'static) -> Subscription {
        self.change_end.subscribe(listener)
    }

    /// Observe every frame pushed to the renderer
    pub fn set_diagnostic_hook(&mut self, hook: impl FnMut(&RenderFrame) + 'static) {
        self.diagnostic_hook = Some(Box::new(hook));
    }

    pub fn clear_diagnostic_hook(&mut self) {
        self.diagnostic_hook = None;
    }

    /// Handle grabbed. Returns true if a gesture started; the host should then
    /// stop the pointer event from propagating.
    pub fn drag_start(&mut self) -> bool {
        if !self.drag.on_drag_start() {
            return false;
        }
        log::debug!("Drag started at value {}", self.value);
        self.renderer.set_dragging(true);
        true
    }

    /// Pointer moved during a gesture (coordinates relative to the center)
    pub fn drag_move(&mut self, pointer: DVec2) {
        if let Some(step) = self.drag.on_drag(pointer) {
            self.apply(step);
        }
    }

    /// Pointer released. Commits and notifies; returns the committed value.
    pub fn drag_end(&mut self, pointer: DVec2) -> Option<i64> {
        let commit = self.drag.on_drag_end(pointer)?;
        self.apply(commit);
        self.renderer.set_dragging(false);
        log::debug!("Drag committed value {}", self.value);
        self.change_end.emit(self.value);
        Some(self.value)
    }

    /// Gesture aborted (pointer cancel, lost capture). Commits the last
    /// interim value; returns it if a gesture was running.
    pub fn drag_cancel(&mut self) -> Option<i64> {
        if !self.drag.on_drag_cancel() {
            return None;
        }
        self.renderer.set_dragging(false);
        log::debug!("Drag cancelled at value {}", self.value);
        self.change_end.emit(self.value);
        Some(self.value)
    }

    /// Frame for the current state, without side effects
    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            value: self.value,
            angle: self.angle,
            handle: angle_to_offset(self.angle, self.config.radius),
            sweep: ArcSweep::new(&self.config, self.angle, self.value),
            transparent_track: self.config.has_image(),
            label: self.label(),
        }
    }

    fn apply(&mut self, step: DragUpdate) {
        self.angle = step.angle;
        self.value = step.value;
        self.render();
    }

    fn render(&mut self) {
        let frame = self.frame();
        if let Some(hook) = self.diagnostic_hook.as_mut() {
            hook(&frame);
        }
        self.renderer.render(&frame);
    }
}
