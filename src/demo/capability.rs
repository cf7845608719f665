//! One-time environment probes for the 3D demo: WebGL support and the
//! motion/quality snapshot. Every failure path maps to a safe default;
//! nothing here panics or leaks a DOM node.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::demo::activation::RenderPrefs;

/// Try to create a WebGL context on a throwaway canvas. The canvas is
/// never attached to the document, so there is nothing to clean up.
/// Returns false in any environment without a window, a document, or a
/// usable context (including prerender passes).
pub fn probe() -> bool {
    let canvas = match web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.create_element("canvas").ok())
        .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
    {
        Some(canvas) => canvas,
        None => {
            warn!("WebGL probe: no document to create a canvas in");
            return false;
        }
    };

    let supported = matches!(canvas.get_context("webgl"), Ok(Some(_)))
        || matches!(canvas.get_context("experimental-webgl"), Ok(Some(_)));

    if !supported {
        warn!("WebGL probe: context creation failed, showing static fallback");
    }
    supported
}

/// Snapshot the reduced-motion preference and viewport width. Taken once
/// at mount and passed into the activation controller; never re-read.
pub fn detect_prefs() -> RenderPrefs {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return RenderPrefs::default(),
    };

    let reduced_motion = window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);

    let viewport_width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(f64::MAX);

    RenderPrefs::from_environment(reduced_motion, viewport_width)
}
