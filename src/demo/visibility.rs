//! One-shot viewport observation. The gate latches to "visible" on the
//! first intersection and drops its observer immediately; after that (or
//! after unmount teardown) no observation resource remains alive.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Clone, PartialEq, Debug)]
pub struct GateOptions {
    /// Distance outside the viewport at which the element already counts
    /// as "near" (IntersectionObserver rootMargin syntax).
    pub root_margin: String,
    /// Fraction of the element that must be visible, 0–1.
    pub threshold: f64,
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            root_margin: "200px".to_string(),
            threshold: 0.1,
        }
    }
}

/// An active observation that can be torn down. Implemented by the web
/// observer below and by counting doubles in tests.
pub trait ObserverHandle {
    fn disconnect(&mut self);
}

/// Latch over a single observation resource. The flag only moves
/// `false -> true`, exactly once; the handle is disconnected exactly once
/// no matter how trigger/release interleave.
#[derive(Default)]
pub struct VisibilityGate {
    triggered: bool,
    handle: Option<Box<dyn ObserverHandle>>,
}

impl VisibilityGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a live observation. If the gate already fired there is nothing
    /// left to wait for and the handle is disconnected on the spot.
    pub fn attach(&mut self, handle: Box<dyn ObserverHandle>) {
        let mut handle = handle;
        if self.triggered {
            handle.disconnect();
        } else {
            // A re-attach replaces the old observation.
            if let Some(mut old) = self.handle.take() {
                old.disconnect();
            }
            self.handle = Some(handle);
        }
    }

    /// First intersection arrived. Returns true only on the transition.
    pub fn trigger(&mut self) -> bool {
        if self.triggered {
            return false;
        }
        self.triggered = true;
        if let Some(mut handle) = self.handle.take() {
            handle.disconnect();
        }
        true
    }

    /// Unmount teardown. Safe to call any number of times, in any state.
    pub fn release(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.disconnect();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.triggered
    }
}

struct WebObserverHandle {
    observer: IntersectionObserver,
    // Kept alive for as long as the browser may still call it.
    _callback: Closure<dyn FnMut(js_sys::Array)>,
    disconnected: Rc<Cell<bool>>,
}

impl ObserverHandle for WebObserverHandle {
    fn disconnect(&mut self) {
        if !self.disconnected.replace(true) {
            self.observer.disconnect();
        }
    }
}

/// Start observing `element`, firing `on_enter` on the first intersection
/// that satisfies `options` and disconnecting right away. Returns `None`
/// when the IntersectionObserver API is missing or refuses the options;
/// the caller's gate then simply never auto-triggers.
pub fn observe_once(
    element: &Element,
    options: &GateOptions,
    on_enter: impl Fn() + 'static,
) -> Option<Box<dyn ObserverHandle>> {
    let disconnected = Rc::new(Cell::new(false));
    // The closure needs the observer to disconnect itself after the first
    // hit, but the observer needs the closure first; tie the knot with a
    // shared slot.
    let observer_slot: Rc<RefCell<Option<IntersectionObserver>>> = Rc::new(RefCell::new(None));

    let callback = {
        let observer_slot = observer_slot.clone();
        let disconnected = disconnected.clone();
        Closure::wrap(Box::new(move |entries: js_sys::Array| {
            let entered = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if entered && !disconnected.replace(true) {
                if let Some(observer) = observer_slot.borrow_mut().take() {
                    observer.disconnect();
                }
                on_enter();
            }
        }) as Box<dyn FnMut(js_sys::Array)>)
    };

    let mut init = IntersectionObserverInit::new();
    init.root_margin(&options.root_margin);
    init.threshold(&JsValue::from_f64(options.threshold));

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(_) => {
                warn!("IntersectionObserver unavailable, demo will wait for manual activation");
                return None;
            }
        };

    observer.observe(element);
    *observer_slot.borrow_mut() = Some(observer.clone());

    Some(Box::new(WebObserverHandle {
        observer,
        _callback: callback,
        disconnected,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingHandle {
        disconnects: Rc<Cell<u32>>,
    }

    impl CountingHandle {
        fn new() -> (Self, Rc<Cell<u32>>) {
            let disconnects = Rc::new(Cell::new(0));
            (
                Self {
                    disconnects: disconnects.clone(),
                },
                disconnects,
            )
        }
    }

    impl ObserverHandle for CountingHandle {
        fn disconnect(&mut self) {
            self.disconnects.set(self.disconnects.get() + 1);
        }
    }

    #[test]
    fn test_trigger_fires_once() {
        let mut gate = VisibilityGate::new();
        let (handle, disconnects) = CountingHandle::new();
        gate.attach(Box::new(handle));

        assert!(!gate.is_visible());
        assert!(gate.trigger());
        assert!(gate.is_visible());
        assert_eq!(disconnects.get(), 1);

        // Subsequent intersection callbacks are no-ops.
        assert!(!gate.trigger());
        assert!(gate.is_visible());
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn test_release_disconnects_exactly_once() {
        let mut gate = VisibilityGate::new();
        let (handle, disconnects) = CountingHandle::new();
        gate.attach(Box::new(handle));

        gate.release();
        gate.release();
        assert_eq!(disconnects.get(), 1);
        assert!(!gate.is_visible());
    }

    #[test]
    fn test_release_after_trigger_does_not_double_disconnect() {
        let mut gate = VisibilityGate::new();
        let (handle, disconnects) = CountingHandle::new();
        gate.attach(Box::new(handle));

        gate.trigger();
        gate.release();
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn test_attach_after_trigger_disconnects_immediately() {
        let mut gate = VisibilityGate::new();
        gate.trigger();

        let (handle, disconnects) = CountingHandle::new();
        gate.attach(Box::new(handle));
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn test_reattach_replaces_old_observation() {
        let mut gate = VisibilityGate::new();
        let (first, first_disconnects) = CountingHandle::new();
        let (second, second_disconnects) = CountingHandle::new();

        gate.attach(Box::new(first));
        gate.attach(Box::new(second));
        assert_eq!(first_disconnects.get(), 1);
        assert_eq!(second_disconnects.get(), 0);

        gate.release();
        assert_eq!(second_disconnects.get(), 1);
    }

    #[test]
    fn test_gate_without_observation_stays_quiet() {
        // ObserverUnavailable path: nothing attached, nothing leaks.
        let mut gate = VisibilityGate::new();
        assert!(!gate.is_visible());
        gate.release();
        assert!(gate.trigger());
        gate.release();
    }

    #[test]
    fn test_default_options() {
        let options = GateOptions::default();
        assert_eq!(options.root_margin, "200px");
        assert!((options.threshold - 0.1).abs() < f64::EPSILON);
    }
}
