use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::effects::reveal::{Observation, RevealMachine};

#[cfg(target_arch = "wasm32")]
type Machine = RevealMachine<browser::ObserverHandle>;
#[cfg(not(target_arch = "wasm32"))]
type Machine = RevealMachine<crate::effects::reveal::Unobserved>;

/// Holds its children back (transparent, shifted down) until they scroll
/// into view, then lets them settle. The transition happens once per mount.
///
/// `class` is appended to the wrapper, e.g. a `reveal--delay-200` stagger.
#[component]
pub fn Reveal(#[props(default)] class: String, children: Element) -> Element {
    let mut visible = use_signal(|| false);
    let machine: Rc<RefCell<Option<Machine>>> = use_hook(|| Rc::new(RefCell::new(None)));

    use_drop({
        let machine = machine.clone();
        move || release(&machine)
    });

    let on_mounted = move |evt: MountedEvent| {
        if machine.borrow().is_some() {
            return;
        }
        if !watch(&evt, visible, machine.clone()) {
            // Nothing can tell us when it scrolls in; don't leave it invisible.
            visible.set(true);
        }
    };

    let state = if visible() {
        "reveal reveal--visible"
    } else {
        "reveal"
    };

    rsx! {
        div {
            class: "{state} {class}",
            onmounted: on_mounted,
            {children}
        }
    }
}

/// Takes the machine out of its slot and detaches it. The browser observer's
/// callback holds a clone of the slot, so the slot must be emptied for the
/// observer and callback to be freed.
fn release<O: Observation>(slot: &RefCell<Option<RevealMachine<O>>>) {
    let taken = slot.borrow_mut().take();
    if let Some(mut machine) = taken {
        machine.detach();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn watch(_evt: &MountedEvent, mut visible: Signal<bool>, slot: Rc<RefCell<Option<Machine>>>) -> bool {
    if settle_unobserved(&slot) {
        visible.set(true);
    }
    true
}

/// Native webviews expose no intersection API: treat mount as fully visible.
/// Returns whether the wrapper should switch to visible.
#[cfg(not(target_arch = "wasm32"))]
fn settle_unobserved(slot: &RefCell<Option<Machine>>) -> bool {
    use crate::effects::reveal::{Unobserved, Visibility};

    let mut machine = RevealMachine::new(Unobserved);
    let revealed = machine.observe(Visibility::FULL);
    *slot.borrow_mut() = Some(machine);
    revealed
}

#[cfg(target_arch = "wasm32")]
fn watch(evt: &MountedEvent, visible: Signal<bool>, slot: Rc<RefCell<Option<Machine>>>) -> bool {
    browser::attach(evt, visible, slot)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::logger::tracing::warn;
    use dioxus::prelude::*;
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::Machine;
    use crate::effects::reveal::{Observation, RevealMachine, Visibility, REVEAL_THRESHOLD};

    type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    pub struct ObserverHandle {
        observer: IntersectionObserver,
        // Must outlive the observer; it may be running when `release` is called.
        _callback: EntriesCallback,
    }

    impl Observation for ObserverHandle {
        fn release(&mut self) {
            self.observer.disconnect();
        }
    }

    pub fn attach(
        evt: &MountedEvent,
        mut visible: Signal<bool>,
        slot: Rc<RefCell<Option<Machine>>>,
    ) -> bool {
        let Some(element) = evt.data().downcast::<web_sys::Element>().cloned() else {
            return false;
        };

        let callback_slot = slot.clone();
        let callback: EntriesCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let Ok(mut guard) = callback_slot.try_borrow_mut() else {
                    return;
                };
                let Some(machine) = guard.as_mut() else {
                    return;
                };
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let report = Visibility {
                        intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    if machine.observe(report) {
                        visible.set(true);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(err) => {
                    warn!("[reveal] IntersectionObserver unavailable: {err:?}");
                    return false;
                }
            };
        observer.observe(&element);

        *slot.borrow_mut() = Some(RevealMachine::new(ObserverHandle {
            observer,
            _callback: callback,
        }));
        true
    }
}
