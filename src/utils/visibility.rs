use std::cell::Cell;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Keeps an observer and its callback alive; disconnects on drop.
pub struct VisibilityGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for VisibilityGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Invoke `on_visible` the first time `element` crosses `threshold` within
/// the viewport (adjusted by `root_margin`). The element is unobserved after
/// firing, so the callback runs at most once. Returns `None` when the
/// observer cannot be constructed.
pub fn observe_once(
    element: &Element,
    threshold: f64,
    root_margin: &str,
    mut on_visible: impl FnMut() + 'static,
) -> Option<VisibilityGuard> {
    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from(threshold));
    options.root_margin(root_margin);

    let fired = Cell::new(false);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() && !fired.get() {
                    fired.set(true);
                    observer.unobserve(&entry.target());
                    on_visible();
                }
            }
        },
    );

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some(VisibilityGuard {
                observer,
                _callback: callback,
            })
        }
        Err(err) => {
            log::warn!("intersection observer unavailable: {:?}", err);
            None
        }
    }
}
