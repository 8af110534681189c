//! Round Slider demo
//!
//! Drives a headless slider through one drag gesture around the ring and
//! logs every frame. Pass a JSON config file path to override the defaults.
//! In the browser the widget is mounted through `round_slider::web::RoundSlider`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use glam::DVec2;

    use round_slider::renderer::arc_path;
    use round_slider::{RenderFrame, SliderConfig, SliderModel, SliderRenderer};

    /// Prints each frame instead of drawing it
    struct LogRenderer;

    impl SliderRenderer for LogRenderer {
        fn render(&mut self, frame: &RenderFrame) {
            log::info!(
                "{:>6} handle=({:7.2}, {:7.2}) arc={}",
                frame.label,
                frame.handle.x,
                frame.handle.y,
                arc_path(&frame.sweep)
            );
        }

        fn set_dragging(&mut self, active: bool) {
            log::info!("dragging: {}", active);
        }
    }

    fn load_config() -> SliderConfig {
        let Some(path) = std::env::args().nth(1) else {
            return SliderConfig::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => match SliderConfig::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path);
                    config
                }
                Err(e) => {
                    log::error!("Invalid config {}: {}", path, e);
                    SliderConfig::default()
                }
            },
            Err(e) => {
                log::error!("Could not read {}: {}", path, e);
                SliderConfig::default()
            }
        }
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::info!("Round Slider (native) starting...");

        let config = load_config();
        let radius = config.radius;
        let mut slider = SliderModel::new(config, LogRenderer);

        let _sub = slider.on_change_end(|value| println!("committed: {}", value));

        // Host-set value, including a malformed one
        slider.set_value(42.4);
        slider.set_value(f64::NAN);

        // Grab the handle and walk it clockwise from 6 o'clock in 30° steps
        slider.drag_start();
        for step in 0..=11 {
            let theta = std::f64::consts::FRAC_PI_2 + step as f64 * std::f64::consts::PI / 6.0;
            slider.drag_move(DVec2::new(radius * theta.cos(), radius * theta.sin()));
        }
        slider.drag_end(DVec2::new(radius, 0.0));

        println!("final value: {}", slider.value());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The widget is created from JS via RoundSlider, nothing to start here
}
