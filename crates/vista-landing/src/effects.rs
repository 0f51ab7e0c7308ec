//! Decorative page effects.
//!
//! Every `use_*` helper creates its own signal and listener, owned by the
//! calling component and removed with it. Nothing here is shared with the
//! lead form.

use leptos::{ev, prelude::*};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

/// Element id of the lead form, target of every call-to-action button.
pub const FORM_ID: &str = "contact-form";

/// Pixels of pointer parallax at the edge of the viewport.
pub const PARALLAX_STRENGTH: f64 = 20.0;

const SCROLL_ANIMATE: &str = ".scroll-animate";
const ANIMATE_IN: &str = "animate-in";

/// Index of the slide after `current`, wrapping around.
pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// How far down the page the visitor is, in `0.0..=1.0`.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

/// Offset of the hero background for a pointer at `position` along an axis
/// of length `extent`; zero at the centre.
pub fn parallax(position: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    (position / extent - 0.5) * PARALLAX_STRENGTH
}

pub fn use_scroll_y() -> ReadSignal<f64> {
    let (scroll_y, set_scroll_y) = signal(current_scroll_y());
    let handle = window_event_listener(ev::scroll, move |_| set_scroll_y.set(current_scroll_y()));
    on_cleanup(move || handle.remove());
    scroll_y
}

/// Parallax offset `(x, y)` following the pointer.
pub fn use_pointer_offset() -> ReadSignal<(f64, f64)> {
    let (offset, set_offset) = signal((0.0, 0.0));
    let handle = window_event_listener(ev::mousemove, move |ev| {
        let (width, height) = viewport_size();
        set_offset.set((
            parallax(f64::from(ev.client_x()), width),
            parallax(f64::from(ev.client_y()), height),
        ));
    });
    on_cleanup(move || handle.remove());
    offset
}

pub fn document_height() -> f64 {
    document()
        .document_element()
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or_default()
}

pub fn viewport_size() -> (f64, f64) {
    let window = window();
    let dimension = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or_default()
    };
    (dimension(window.inner_width()), dimension(window.inner_height()))
}

pub fn scroll_to_form() {
    let Some(form) = document().get_element_by_id(FORM_ID) else {
        log::warn!("no #{FORM_ID} on this page");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    form.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Adds `animate-in` to every `.scroll-animate` element the first time it
/// enters the viewport. The observer is disconnected on drop.
pub struct ScrollAnimations {
    observer: IntersectionObserver,
    observed: u32,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ScrollAnimations {
    /// Start observing the `.scroll-animate` elements currently in the page.
    pub fn observe() -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        _ = entry.target().class_list().add_1(ANIMATE_IN);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&0.1.into());
        options.set_root_margin("0px 0px -100px 0px");

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let nodes = document().query_selector_all(SCROLL_ANIMATE)?;
        let mut observed = 0;
        for index in 0..nodes.length() {
            if let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&element);
                observed += 1;
            }
        }

        Ok(Self {
            observer,
            observed,
            _callback: callback,
        })
    }

    pub fn observed(&self) -> u32 {
        self.observed
    }
}

impl Drop for ScrollAnimations {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Run [`ScrollAnimations`] for as long as the current reactive owner lives.
pub fn observe_scroll_animations() {
    match ScrollAnimations::observe() {
        Ok(animations) => {
            log::debug!("animating {} element(s) on scroll", animations.observed());
            _ = StoredValue::new_local(animations);
        }
        Err(err) => log::warn!("scroll animations disabled: {err:?}"),
    }
}

fn current_scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}
