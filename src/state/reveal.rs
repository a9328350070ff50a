// Reveal plumbing for map images and scroll-in cards: a one-shot latch, a
// keep-alive wrapper around IntersectionObserver, and the map reveal itself.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::Callback;

/// Delay between an image reporting loaded and the reveal firing.
const LOADED_SETTLE_MS: u32 = 100;
/// Reveal fires regardless once this elapses without a load event.
const LOAD_FALLBACK_MS: u32 = 3_000;
/// The scroll-into-view trigger is armed after this delay so a fast image
/// load wins without the observer ever being constructed.
const OBSERVE_DELAY_MS: u32 = 500;
/// Fraction of the image that must be visible to count as scrolled into view.
const REVEAL_THRESHOLD: f64 = 0.3;

/// Latch that lets the first of several competing triggers through.
#[derive(Clone, Default)]
pub struct OneShot {
    fired: Rc<Cell<bool>>,
}

impl OneShot {
    /// Returns true exactly once; later callers see false.
    pub fn fire(&self) -> bool {
        if self.fired.get() {
            false
        } else {
            self.fired.set(true);
            true
        }
    }

    pub fn fired(&self) -> bool {
        self.fired.get()
    }
}

/// Keeps an `IntersectionObserver` and its callback alive until dropped.
pub struct IntersectionBinding {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl IntersectionBinding {
    /// Emits `on_visible` when `target` crosses `threshold`, then stops
    /// watching it. Returns `None` where IntersectionObserver is unavailable
    /// so callers can fall back to timers or showing content outright.
    pub fn observe_once(
        target: &Element,
        threshold: f64,
        root_margin: &str,
        on_visible: Callback<()>,
    ) -> Option<Self> {
        let observer_slot: Rc<RefCell<Option<IntersectionObserver>>> =
            Rc::new(RefCell::new(None));
        let callback = {
            let observer_slot = observer_slot.clone();
            Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        if let Some(observer) = observer_slot.borrow().as_ref() {
                            observer.unobserve(&entry.target());
                        }
                        on_visible.emit(());
                    }
                }
            })
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        observer.observe(target);
        *observer_slot.borrow_mut() = Some(observer.clone());

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for IntersectionBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// One-shot reveal of a map image. The reveal fires on the first of: the
/// image finishing loading, the image scrolling into view, or the fallback
/// timer elapsing. Arming is a no-op per trigger once any of them has fired.
pub struct MapReveal {
    image: HtmlImageElement,
    load_listener: Option<Closure<dyn FnMut()>>,
    observer: Rc<RefCell<Option<IntersectionBinding>>>,
}

impl MapReveal {
    pub fn arm(image: HtmlImageElement, on_reveal: Callback<()>) -> Self {
        let gate = OneShot::default();
        let trigger = {
            let gate = gate.clone();
            Callback::from(move |_: ()| {
                if gate.fire() {
                    on_reveal.emit(());
                }
            })
        };

        let mut load_listener = None;
        if image.complete() && image.natural_height() != 0 {
            let trigger = trigger.clone();
            Timeout::new(LOADED_SETTLE_MS, move || trigger.emit(())).forget();
        } else {
            let listener = {
                let trigger = trigger.clone();
                Closure::<dyn FnMut()>::new(move || {
                    let trigger = trigger.clone();
                    Timeout::new(LOADED_SETTLE_MS, move || trigger.emit(())).forget();
                })
            };
            let _ = image
                .add_event_listener_with_callback("load", listener.as_ref().unchecked_ref());
            load_listener = Some(listener);

            let trigger = trigger.clone();
            Timeout::new(LOAD_FALLBACK_MS, move || trigger.emit(())).forget();
        }

        let observer = Rc::new(RefCell::new(None));
        {
            let observer_slot = observer.clone();
            let target: Element = image.clone().unchecked_into();
            Timeout::new(OBSERVE_DELAY_MS, move || {
                if gate.fired() {
                    return;
                }
                let on_visible = Callback::from(move |_: ()| trigger.emit(()));
                *observer_slot.borrow_mut() =
                    IntersectionBinding::observe_once(&target, REVEAL_THRESHOLD, "0px", on_visible);
            })
            .forget();
        }

        Self {
            image,
            load_listener,
            observer,
        }
    }
}

impl Drop for MapReveal {
    fn drop(&mut self) {
        if let Some(listener) = &self.load_listener {
            let _ = self
                .image
                .remove_event_listener_with_callback("load", listener.as_ref().unchecked_ref());
        }
        self.observer.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::OneShot;

    #[test]
    fn one_shot_fires_exactly_once() {
        let gate = OneShot::default();
        assert!(!gate.fired());
        assert!(gate.fire());
        assert!(gate.fired());
        assert!(!gate.fire());

        let alias = gate.clone();
        assert!(!alias.fire());
    }
}
