//! Small browser helpers shared by the page sections.

use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::demo::visibility::{observe_once, GateOptions, VisibilityGate};

/// Open a link in a new tab. Failures (popup blocker, headless pass) are
/// silently ignored.
pub fn open_external(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

/// Smooth-scroll to the section matching the given selector, e.g. "#contact".
pub fn scroll_to(selector: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector(selector).ok())
        .flatten()
    {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// One-shot "section entered the viewport" hook for entrance animations.
/// Flips to true on the first intersection and stays true. Degrades to
/// immediately-true when the observer API is unavailable so content is
/// never left hidden.
#[hook]
pub fn use_reveal(node: &NodeRef) -> UseStateHandle<bool> {
    let revealed = use_state(|| false);
    let gate = use_mut_ref(VisibilityGate::new);

    {
        let revealed = revealed.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                if !*revealed {
                    match node.cast::<Element>() {
                        Some(element) => {
                            let options = GateOptions {
                                root_margin: "-120px".to_string(),
                                threshold: 0.0,
                            };
                            let on_enter = {
                                let revealed = revealed.clone();
                                let gate = gate.clone();
                                move || {
                                    if gate.borrow_mut().trigger() {
                                        revealed.set(true);
                                    }
                                }
                            };
                            match observe_once(&element, &options, on_enter) {
                                Some(handle) => gate.borrow_mut().attach(handle),
                                // No observer support: show the section outright.
                                None => revealed.set(true),
                            }
                        }
                        None => revealed.set(true),
                    }
                }
                move || gate.borrow_mut().release()
            },
            (),
        );
    }

    revealed
}
