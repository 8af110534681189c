//! Slider core
//!
//! Pure and headless: no drawing API is touched here.
//! - `angle`: value <-> angle mapping
//! - `sweep`: progress arc end angle with wrap-around handling
//! - `drag`: gesture state machine
//! - `events`: change-end notification stream
//! - `model`: composes the above around the current value

pub mod angle;
pub mod drag;
pub mod events;
pub mod model;
pub mod sweep;

pub use angle::{ZERO_VALUE_ANGLE, angle_to_offset, angle_to_value, value_to_angle};
pub use drag::{DragController, DragPhase, DragUpdate};
pub use events::{ChangeEndStream, Subscription};
pub use model::SliderModel;
pub use sweep::{ArcSweep, sweep_end_angle};
