//! The decorative 3D scene: a translucent sphere inside a particle shell
//! with an orbiting ring, software-projected onto a 2D canvas. Mounted by
//! the viewer only after activation and never unmounted afterwards; owns
//! its animation loop and tears it down fully on unmount.

use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::demo::activation::Quality;

const CAMERA_Z: f64 = 5.0;
const FOV_DEGREES: f64 = 45.0;
const SPHERE_RADIUS: f64 = 1.5;
const RING_RADIUS: f64 = 2.2;
const TOOLTIP_MILLIS: u32 = 3000;

pub struct Particle {
    pub x: f64,
    pub base_y: f64,
    pub z: f64,
    pub color: (u8, u8, u8),
}

/// Scatter `count` particles over a spherical shell between radius 3 and 5,
/// tinted from deep blue to cyan. The random source is injected so the
/// distribution can be checked deterministically.
pub fn scatter_shell(count: usize, mut rand: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let radius = 3.0 + rand() * 2.0;
            let theta = rand() * PI * 2.0;
            let phi = (rand() * 2.0 - 1.0).acos();

            let t = rand();
            let color = (
                ((0.15 + t * 0.85) * 255.0) as u8,
                ((0.65 + t * 0.15) * 255.0) as u8,
                ((0.85 + t * 0.15) * 255.0) as u8,
            );

            Particle {
                x: radius * phi.sin() * theta.cos(),
                base_y: radius * phi.sin() * theta.sin(),
                z: radius * phi.cos(),
                color,
            }
        })
        .collect()
}

pub fn particle_budget(quality: Quality) -> usize {
    match quality {
        Quality::Low => 400,
        Quality::High => 1400,
    }
}

/// Pointer state shared between the event listeners and the frame loop.
#[derive(Default)]
struct Pointer {
    target_x: Cell<f64>,
    target_y: Cell<f64>,
    smooth_x: Cell<f64>,
    smooth_y: Cell<f64>,
    hovered: Cell<bool>,
    scale: Cell<f64>,
}

fn perspective(height: f64) -> f64 {
    (height / 2.0) / (FOV_DEGREES.to_radians() / 2.0).tan()
}

fn draw_frame(
    context: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    particles: &[Particle],
    pointer: &Pointer,
    time: f64,
    animate: bool,
) {
    let width = canvas.client_width() as f64;
    let height = canvas.client_height() as f64;
    if width < 1.0 || height < 1.0 {
        return;
    }
    // Keep the backing store in sync with the CSS size.
    if canvas.width() as f64 != width || canvas.height() as f64 != height {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }

    context.clear_rect(0.0, 0.0, width, height);

    let cx = width / 2.0;
    let cy = height / 2.0;
    let focal = perspective(height);

    // Pointer follow, eased per frame like the original scene.
    if animate {
        let sx = pointer.smooth_x.get() + (pointer.target_x.get() - pointer.smooth_x.get()) * 0.05;
        let sy = pointer.smooth_y.get() + (pointer.target_y.get() - pointer.smooth_y.get()) * 0.05;
        pointer.smooth_x.set(sx);
        pointer.smooth_y.set(sy);
    }

    let speed = if animate { 1.0 } else { 0.0 };
    let rot_y = time * 0.2 * speed + pointer.smooth_x.get() * 0.2;
    let rot_x = (time * 0.3 * speed).sin() * 0.1 + pointer.smooth_y.get() * 0.2;

    // Particle field, additive so overlapping dots glow.
    context.set_global_composite_operation("lighter").ok();
    let (sin_y, cos_y) = rot_y.sin_cos();
    let (sin_x, cos_x) = rot_x.sin_cos();
    for (i, particle) in particles.iter().enumerate() {
        let y = if animate {
            particle.base_y + (time + i as f64 * 0.05).sin() * 0.04
        } else {
            particle.base_y
        };

        // Rotate around Y, then X.
        let x1 = particle.x * cos_y + particle.z * sin_y;
        let z1 = -particle.x * sin_y + particle.z * cos_y;
        let y1 = y * cos_x - z1 * sin_x;
        let z2 = y * sin_x + z1 * cos_x;

        let depth = CAMERA_Z - z2;
        if depth < 0.5 {
            continue;
        }
        let px = cx + x1 * focal / depth;
        let py = cy - y1 * focal / depth;
        let size = (focal / depth) * 0.02;

        let (r, g, b) = particle.color;
        context.set_fill_style(&format!("rgba({}, {}, {}, 0.6)", r, g, b).into());
        context.begin_path();
        context.arc(px, py, size.max(0.4), 0.0, PI * 2.0).ok();
        context.fill();
    }
    context.set_global_composite_operation("source-over").ok();

    // Hover scale eases toward its target.
    let target_scale = if pointer.hovered.get() { 1.08 } else { 1.0 };
    let scale = pointer.scale.get() + (target_scale - pointer.scale.get()) * 0.08;
    pointer.scale.set(scale);

    // Inner glow behind the sphere.
    let glow_r = 1.6 * focal / CAMERA_Z * scale;
    context.set_fill_style(&"rgba(39, 166, 217, 0.1)".into());
    context.begin_path();
    context.arc(cx, cy, glow_r, 0.0, PI * 2.0).ok();
    context.fill();

    // Main sphere as an off-center radial gradient.
    let sphere_r = SPHERE_RADIUS * focal / CAMERA_Z * scale;
    if let Ok(gradient) = context.create_radial_gradient(
        cx - sphere_r * 0.35,
        cy - sphere_r * 0.35,
        sphere_r * 0.1,
        cx,
        cy,
        sphere_r,
    ) {
        gradient.add_color_stop(0.0, "rgba(140, 220, 250, 0.95)").ok();
        gradient.add_color_stop(0.55, "rgba(39, 166, 217, 0.75)").ok();
        gradient.add_color_stop(1.0, "rgba(12, 60, 90, 0.35)").ok();
        context.set_fill_style(&gradient.into());
        context.begin_path();
        context.arc(cx, cy, sphere_r, 0.0, PI * 2.0).ok();
        context.fill();
    }

    // Coral orbit ring, counter-rotating and tilted.
    let ring_r = RING_RADIUS * focal / CAMERA_Z;
    context.save();
    context.translate(cx, cy).ok();
    context.rotate(-time * 0.1 * speed).ok();
    context.scale(1.0, 0.35).ok();
    context.set_stroke_style(&"rgba(255, 114, 71, 0.6)".into());
    context.set_line_width((0.05 * focal / CAMERA_Z).max(1.0));
    context.begin_path();
    context.arc(0.0, 0.0, ring_r, 0.0, PI * 2.0).ok();
    context.stroke();
    context.restore();
}

#[derive(Properties, PartialEq)]
pub struct DemoSceneProps {
    pub quality: Quality,
    pub reduced_motion: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(DemoScene)]
pub fn demo_scene(props: &DemoSceneProps) -> Html {
    let canvas_ref = use_node_ref();
    let loaded = use_state(|| false);
    let show_tooltip = use_state(|| true);

    // Hide the usage hint after a few seconds.
    {
        let show_tooltip = show_tooltip.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(TOOLTIP_MILLIS, move || {
                    show_tooltip.set(false);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    // Animation loop plus pointer listeners, torn down on unmount.
    {
        let canvas_ref = canvas_ref.clone();
        let loaded = loaded.clone();
        let quality = props.quality;
        let reduced_motion = props.reduced_motion;
        use_effect_with_deps(
            move |_| {
                let running = Rc::new(Cell::new(true));
                let raf_id = Rc::new(Cell::new(None::<i32>));
                let frame_slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                    Rc::new(RefCell::new(None));
                let listeners: Rc<RefCell<Vec<(&'static str, Closure<dyn FnMut(MouseEvent)>)>>> =
                    Rc::new(RefCell::new(Vec::new()));
                let canvas = canvas_ref.cast::<HtmlCanvasElement>();

                if let Some(canvas) = canvas.clone() {
                    match canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|object| object.dyn_into::<CanvasRenderingContext2d>().ok())
                    {
                        Some(context) => {
                            let pointer = Rc::new(Pointer::default());
                            pointer.scale.set(1.0);

                            if !reduced_motion {
                                let on_move = {
                                    let pointer = pointer.clone();
                                    let canvas = canvas.clone();
                                    Closure::wrap(Box::new(move |event: MouseEvent| {
                                        let width = canvas.client_width() as f64;
                                        let height = canvas.client_height() as f64;
                                        if width > 0.0 && height > 0.0 {
                                            pointer
                                                .target_x
                                                .set(event.offset_x() as f64 / width * 2.0 - 1.0);
                                            pointer
                                                .target_y
                                                .set(event.offset_y() as f64 / height * 2.0 - 1.0);
                                        }
                                    })
                                        as Box<dyn FnMut(MouseEvent)>)
                                };
                                let on_enter = {
                                    let pointer = pointer.clone();
                                    Closure::wrap(Box::new(move |_: MouseEvent| {
                                        pointer.hovered.set(true);
                                    })
                                        as Box<dyn FnMut(MouseEvent)>)
                                };
                                let on_leave = {
                                    let pointer = pointer.clone();
                                    Closure::wrap(Box::new(move |_: MouseEvent| {
                                        pointer.hovered.set(false);
                                        pointer.target_x.set(0.0);
                                        pointer.target_y.set(0.0);
                                    })
                                        as Box<dyn FnMut(MouseEvent)>)
                                };
                                for (name, closure) in [
                                    ("mousemove", on_move),
                                    ("mouseenter", on_enter),
                                    ("mouseleave", on_leave),
                                ] {
                                    let _ = canvas.add_event_listener_with_callback(
                                        name,
                                        closure.as_ref().unchecked_ref(),
                                    );
                                    listeners.borrow_mut().push((name, closure));
                                }
                            }

                            let particles =
                                scatter_shell(particle_budget(quality), js_sys::Math::random);

                            let frame = {
                                let running = running.clone();
                                let raf_id = raf_id.clone();
                                let frame_slot = frame_slot.clone();
                                let first_frame = Cell::new(true);
                                Closure::wrap(Box::new(move |timestamp: f64| {
                                    if !running.get() {
                                        return;
                                    }
                                    draw_frame(
                                        &context,
                                        &canvas,
                                        &particles,
                                        &pointer,
                                        timestamp / 1000.0,
                                        !reduced_motion,
                                    );
                                    if first_frame.replace(false) {
                                        loaded.set(true);
                                    }
                                    if let Some(window) = web_sys::window() {
                                        if let Some(frame) = frame_slot.borrow().as_ref() {
                                            raf_id.set(
                                                window
                                                    .request_animation_frame(
                                                        frame.as_ref().unchecked_ref(),
                                                    )
                                                    .ok(),
                                            );
                                        }
                                    }
                                })
                                    as Box<dyn FnMut(f64)>)
                            };
                            *frame_slot.borrow_mut() = Some(frame);

                            if let Some(window) = web_sys::window() {
                                if let Some(frame) = frame_slot.borrow().as_ref() {
                                    raf_id.set(
                                        window
                                            .request_animation_frame(frame.as_ref().unchecked_ref())
                                            .ok(),
                                    );
                                }
                            }
                        }
                        None => {
                            warn!("demo scene: 2d context unavailable, canvas stays blank");
                            loaded.set(true);
                        }
                    }
                }

                move || {
                    running.set(false);
                    if let (Some(window), Some(id)) = (web_sys::window(), raf_id.take()) {
                        let _ = window.cancel_animation_frame(id);
                    }
                    if let Some(canvas) = canvas {
                        for (name, closure) in listeners.borrow_mut().drain(..) {
                            let _ = canvas.remove_event_listener_with_callback(
                                name,
                                closure.as_ref().unchecked_ref(),
                            );
                        }
                    }
                    frame_slot.borrow_mut().take();
                }
            },
            (props.quality, props.reduced_motion),
        );
    }

    html! {
        <div class={classes!("demo-scene", props.class.clone())}>
            <canvas ref={canvas_ref} class="demo-scene-canvas"></canvas>

            <div class={classes!("demo-scene-tooltip", (!*show_tooltip).then(|| "hidden"))}>
                {"Mova o cursor para explorar a cena"}
            </div>

            {
                if !*loaded {
                    html! {
                        <div class="demo-scene-loading">
                            <div class="demo-scene-spinner"></div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .demo-scene {
                    position: relative;
                    width: 100%;
                    height: 100%;
                }

                .demo-scene-canvas {
                    width: 100%;
                    height: 100%;
                    display: block;
                }

                .demo-scene-tooltip {
                    position: absolute;
                    bottom: 1rem;
                    left: 1rem;
                    padding: 0.5rem 1rem;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(4px);
                    color: #fff;
                    font-size: 0.85rem;
                    border-radius: 8px;
                    pointer-events: none;
                    opacity: 1;
                    transition: opacity 0.5s ease;
                }

                .demo-scene-tooltip.hidden {
                    opacity: 0;
                }

                .demo-scene-loading {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(5, 10, 16, 0.9);
                    backdrop-filter: blur(4px);
                }

                .demo-scene-spinner {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    border: 2px solid #27A6D9;
                    border-top-color: transparent;
                    animation: demo-spin 0.8s linear infinite;
                }

                @keyframes demo-spin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_source(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed;
        move || {
            // xorshift, plenty for distribution checks
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn test_scatter_count_and_shell_bounds() {
        let particles = scatter_shell(500, seeded_source(42));
        assert_eq!(particles.len(), 500);
        for particle in &particles {
            let radius = (particle.x * particle.x
                + particle.base_y * particle.base_y
                + particle.z * particle.z)
                .sqrt();
            assert!((3.0..=5.0).contains(&radius), "radius {} out of shell", radius);
        }
    }

    #[test]
    fn test_scatter_is_deterministic_for_same_source() {
        let a = scatter_shell(50, seeded_source(7));
        let b = scatter_shell(50, seeded_source(7));
        for (left, right) in a.iter().zip(&b) {
            assert_eq!(left.x, right.x);
            assert_eq!(left.base_y, right.base_y);
            assert_eq!(left.z, right.z);
            assert_eq!(left.color, right.color);
        }
    }

    #[test]
    fn test_particle_budget_by_quality() {
        assert!(particle_budget(Quality::Low) < particle_budget(Quality::High));
        assert_eq!(particle_budget(Quality::Low), 400);
        assert_eq!(particle_budget(Quality::High), 1400);
    }
}
