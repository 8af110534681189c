//! Browser host
//!
//! Builds the widget DOM (container, label, optional badge image, SVG ring)
//! inside a host element and feeds handle pointer events into the slider model.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use glam::DVec2;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, PointerEvent};

use crate::config::SliderConfig;
use crate::consts::HANDLE_RADIUS;
use crate::renderer::{RenderFrame, SliderRenderer, arc_path};
use crate::slider::{SliderModel, Subscription};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

static LOGGER: Once = Once::new();

fn init_logging() {
    LOGGER.call_once(|| {
        console_error_panic_hook::set_once();
        // The embedding page may already have installed a logger
        let _ = console_log::init_with_level(log::Level::Info);
    });
}

/// Parse a plain JS object (or undefined) into a config
fn parse_config(config: &JsValue) -> Result<SliderConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(SliderConfig::default());
    }
    let json: String = js_sys::JSON::stringify(config)?.into();
    SliderConfig::from_json(&json).map_err(|e| JsValue::from_str(&format!("invalid slider config: {e}")))
}

fn html_element(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    el.set_attribute("class", class)?;
    Ok(el)
}

fn svg_element(document: &Document, tag: &str, attrs: &[(&str, &str)]) -> Result<Element, JsValue> {
    let el = document.create_element_ns(Some(SVG_NS), tag)?;
    for (name, value) in attrs {
        el.set_attribute(name, value)?;
    }
    Ok(el)
}

/// Pointer position relative to the ring center
fn pointer_offset(svg: &Element, event: &PointerEvent, center: DVec2) -> DVec2 {
    let rect = svg.get_bounding_client_rect();
    DVec2::new(
        event.client_x() as f64 - rect.left(),
        event.client_y() as f64 - rect.top(),
    ) - center
}

/// Writes render frames into the SVG elements
struct SvgRenderer {
    label: Element,
    track: Element,
    arc: Element,
    thumb: Element,
}

impl SliderRenderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) {
        self.label.set_text_content(Some(&frame.label));

        let track_class = if frame.transparent_track {
            "circumference transparent"
        } else {
            "circumference"
        };
        let _ = self.track.set_attribute("class", track_class);
        let _ = self.arc.set_attribute("d", &arc_path(&frame.sweep));
        let _ = self.thumb.set_attribute("cx", &frame.handle.x.to_string());
        let _ = self.thumb.set_attribute("cy", &frame.handle.y.to_string());
    }

    fn set_dragging(&mut self, active: bool) {
        if let Err(e) = self.thumb.class_list().toggle_with_force("dragging", active) {
            log::warn!("Could not toggle dragging class: {:?}", e);
        }
    }
}

/// Deliver queued commits once the model is no longer borrowed
fn deliver_commits(pending: &RefCell<Vec<i64>>, callback: &RefCell<Option<js_sys::Function>>) {
    let values: Vec<i64> = pending.borrow_mut().drain(..).collect();
    let Some(callback) = callback.borrow().clone() else {
        return;
    };
    for value in values {
        if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_f64(value as f64)) {
            log::error!("onChangeEnd callback failed: {:?}", e);
        }
    }
}

type PointerListener = Closure<dyn FnMut(PointerEvent)>;

/// Round slider widget mounted in a host element
#[wasm_bindgen]
pub struct RoundSlider {
    model: Rc<RefCell<SliderModel<SvgRenderer>>>,
    container: Element,
    thumb: Element,
    listeners: Vec<(&'static str, PointerListener)>,
    on_change_end: Rc<RefCell<Option<js_sys::Function>>>,
    _subscription: Subscription,
}

#[wasm_bindgen]
impl RoundSlider {
    /// Mount a slider inside `host`. `config` is a plain object such as
    /// `{ width, height, radius, thick, min, max, units, imageUrl }`.
    #[wasm_bindgen(constructor)]
    pub fn new(host: &Element, config: JsValue) -> Result<RoundSlider, JsValue> {
        init_logging();
        let config = parse_config(&config)?;
        let document = host
            .owner_document()
            .ok_or_else(|| JsValue::from_str("host element is not attached to a document"))?;

        let container = html_element(&document, "div", "round-slider-container")?;
        container.set_attribute(
            "style",
            &format!("width:{}px;height:{}px", config.width, config.height),
        )?;

        let label = html_element(&document, "span", "round-slider-text")?;
        container.append_child(&label)?;

        if let Some(url) = config.image_url.as_deref().filter(|url| !url.is_empty()) {
            let image = html_element(&document, "div", "round-slider-image")?;
            image.set_attribute(
                "style",
                &format!(
                    "background-image:url({url});width:{size}px;height:{size}px;top:{pos}px;left:{pos}px",
                    size = config.image_size(),
                    pos = config.image_position(),
                ),
            )?;
            container.append_child(&image)?;
        }

        let center = config.center();
        let svg = svg_element(
            &document,
            "svg",
            &[
                ("width", config.width.to_string().as_str()),
                ("height", config.height.to_string().as_str()),
                ("class", "container"),
            ],
        )?;
        let root = svg_element(
            &document,
            "g",
            &[("transform", format!("translate({},{})", center.x, center.y).as_str())],
        )?;
        let track = svg_element(
            &document,
            "circle",
            &[("r", config.track_radius().to_string().as_str()), ("class", "circumference")],
        )?;
        let arc = svg_element(&document, "path", &[("class", "arc")])?;
        let dot = svg_element(&document, "g", &[("class", "dot")])?;
        let thumb = svg_element(
            &document,
            "circle",
            &[("r", HANDLE_RADIUS.to_string().as_str()), ("style", "touch-action:none")],
        )?;

        dot.append_child(&thumb)?;
        root.append_child(&track)?;
        root.append_child(&arc)?;
        root.append_child(&dot)?;
        svg.append_child(&root)?;
        container.append_child(&svg)?;
        host.append_child(&container)?;

        let renderer = SvgRenderer {
            label,
            track,
            arc,
            thumb: thumb.clone(),
        };
        let model = Rc::new(RefCell::new(SliderModel::new(config, renderer)));

        // Commits are queued here so the JS callback never runs while the model is borrowed
        let pending = Rc::new(RefCell::new(Vec::new()));
        let subscription = {
            let pending = Rc::clone(&pending);
            model
                .borrow()
                .on_change_end(move |value| pending.borrow_mut().push(value))
        };
        let on_change_end = Rc::new(RefCell::new(None));

        let mut listeners: Vec<(&'static str, PointerListener)> = Vec::new();

        // Grab: keep ancestors from seeing the gesture and capture the pointer
        {
            let model = Rc::clone(&model);
            let thumb_clone = thumb.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.stop_propagation();
                event.prevent_default();
                if model.borrow_mut().drag_start() {
                    if let Err(e) = thumb_clone.set_pointer_capture(event.pointer_id()) {
                        log::warn!("Pointer capture failed: {:?}", e);
                    }
                }
            });
            thumb.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())?;
            listeners.push(("pointerdown", closure));
        }

        // Move
        {
            let model = Rc::clone(&model);
            let svg = svg.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                if !model.borrow().is_dragging() {
                    return;
                }
                let pointer = pointer_offset(&svg, &event, center);
                model.borrow_mut().drag_move(pointer);
            });
            thumb.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())?;
            listeners.push(("pointermove", closure));
        }

        // Release
        {
            let model = Rc::clone(&model);
            let svg = svg.clone();
            let pending = Rc::clone(&pending);
            let on_change_end = Rc::clone(&on_change_end);
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let pointer = pointer_offset(&svg, &event, center);
                let committed = model.borrow_mut().drag_end(pointer);
                if committed.is_some() {
                    deliver_commits(&pending, &on_change_end);
                }
            });
            thumb.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref())?;
            listeners.push(("pointerup", closure));
        }

        // Platform abort: touch interruption, system gesture, lost capture.
        // lostpointercapture also follows a normal pointerup, where the model is already idle.
        for name in ["pointercancel", "lostpointercapture"] {
            let model = Rc::clone(&model);
            let pending = Rc::clone(&pending);
            let on_change_end = Rc::clone(&on_change_end);
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                let committed = model.borrow_mut().drag_cancel();
                if committed.is_some() {
                    deliver_commits(&pending, &on_change_end);
                }
            });
            thumb.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
            listeners.push((name, closure));
        }

        log::info!("Round slider mounted");

        Ok(Self {
            model,
            container,
            thumb,
            listeners,
            on_change_end,
            _subscription: subscription,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn value(&self) -> f64 {
        self.model.borrow().value() as f64
    }

    /// Host-side value update: rounded, re-rendered, not clamped
    #[wasm_bindgen(setter)]
    pub fn set_value(&self, value: f64) {
        self.model.borrow_mut().set_value(value);
    }

    #[wasm_bindgen(getter)]
    pub fn dragging(&self) -> bool {
        self.model.borrow().is_dragging()
    }

    #[wasm_bindgen(getter)]
    pub fn label(&self) -> String {
        self.model.borrow().label()
    }

    /// Register (or clear with `null`) the callback receiving committed values
    #[wasm_bindgen(js_name = onChangeEnd)]
    pub fn on_change_end(&self, callback: Option<js_sys::Function>) {
        *self.on_change_end.borrow_mut() = callback;
    }
}

impl Drop for RoundSlider {
    fn drop(&mut self) {
        for (name, closure) in &self.listeners {
            let _ = self
                .thumb
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
        self.container.remove();
    }
}
