//! Hosts the demo area: probes WebGL once at mount, watches the container
//! with a one-shot gate, and mounts the scene when the activation
//! controller says so. All failure paths land on a static fallback.

use log::info;
use web_sys::Element;
use yew::prelude::*;

use crate::demo::activation::{ActivationMode, ActivationState, RenderPrefs};
use crate::demo::capability;
use crate::demo::scene::DemoScene;
use crate::demo::visibility::{observe_once, GateOptions, VisibilityGate};

#[derive(Properties, PartialEq)]
pub struct DemoViewerProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(DemoViewer)]
pub fn demo_viewer(props: &DemoViewerProps) -> Html {
    let container_ref = use_node_ref();
    let state = use_state(|| ActivationState::new(RenderPrefs::default()));
    let gate = use_mut_ref(VisibilityGate::new);

    // Probe once at mount; the result is cached in the state for the
    // component's lifetime.
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let prefs = capability::detect_prefs();
                let supported = capability::probe();
                info!(
                    "demo viewer: webgl supported={}, quality={:?}, reduced_motion={}",
                    supported, prefs.quality, prefs.reduced_motion
                );
                let mut next = ActivationState::new(prefs);
                next.resolve(supported);
                state.set(next);
                || ()
            },
            (),
        );
    }

    // Observation starts only once the probe confirmed support, and the
    // gate is released on every exit path.
    {
        let wants = state.wants_observation();
        let state = state.clone();
        let gate = gate.clone();
        let container_ref = container_ref.clone();
        use_effect_with_deps(
            move |wants: &bool| {
                if *wants {
                    if let Some(element) = container_ref.cast::<Element>() {
                        let on_enter = {
                            let state = state.clone();
                            let gate = gate.clone();
                            move || {
                                if gate.borrow_mut().trigger() {
                                    let mut next = (*state).clone();
                                    next.mark_visible();
                                    state.set(next);
                                }
                            }
                        };
                        if let Some(handle) =
                            observe_once(&element, &GateOptions::default(), on_enter)
                        {
                            gate.borrow_mut().attach(handle);
                        }
                    }
                }
                move || gate.borrow_mut().release()
            },
            wants,
        );
    }

    let on_activate = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            next.activate();
            state.set(next);
        })
    };

    let mode = state.mode();
    let prefs = state.prefs();

    html! {
        <div ref={container_ref} class={classes!("demo-viewer", props.class.clone())}>
            {
                match mode {
                    ActivationMode::Unsupported => html! {
                        <div class="demo-viewer-fallback">
                            <p class="demo-viewer-fallback-title">{"Visualização 3D indisponível"}</p>
                            <p class="demo-viewer-fallback-hint">
                                {"Seu dispositivo ou navegador não suporta WebGL."}
                            </p>
                        </div>
                    },
                    ActivationMode::Placeholder => html! {
                        <div class="demo-viewer-idle">
                            <div class="demo-viewer-pulse"></div>
                        </div>
                    },
                    ActivationMode::AwaitingUserActivation => html! {
                        <div class="demo-viewer-idle">
                            <div class="demo-viewer-pulse"></div>
                            <p class="demo-viewer-idle-label">{"Animação interativa"}</p>
                            <button class="demo-viewer-activate" onclick={on_activate}>
                                {"Ativar visualização 3D"}
                            </button>
                        </div>
                    },
                    // Terminal: once mounted, the scene stays mounted.
                    ActivationMode::Active => html! {
                        <DemoScene
                            quality={prefs.quality}
                            reduced_motion={prefs.reduced_motion}
                            class="demo-viewer-scene"
                        />
                    },
                }
            }

            <style>
                {r#"
                .demo-viewer {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .demo-viewer-scene {
                    position: relative;
                    z-index: 1;
                }

                .demo-viewer-fallback {
                    color: rgba(255, 255, 255, 0.7);
                    text-align: center;
                    padding: 0 1rem;
                }

                .demo-viewer-fallback-title {
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }

                .demo-viewer-fallback-hint {
                    font-size: 0.9rem;
                }

                .demo-viewer-idle {
                    width: 100%;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    border-radius: 12px;
                    background: linear-gradient(135deg, rgba(0, 0, 0, 0.2), transparent);
                    color: rgba(255, 255, 255, 0.6);
                }

                .demo-viewer-pulse {
                    width: 12rem;
                    height: 12rem;
                    border-radius: 50%;
                    background: rgba(39, 166, 217, 0.1);
                    animation: demo-pulse 2s ease-in-out infinite;
                    margin-bottom: 1rem;
                }

                .demo-viewer-idle-label {
                    font-weight: 500;
                    margin-bottom: 0.75rem;
                }

                .demo-viewer-activate {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 6px;
                    background: rgba(255, 255, 255, 0.08);
                    color: #fff;
                    font-size: 0.9rem;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .demo-viewer-activate:hover {
                    background: rgba(255, 255, 255, 0.16);
                }

                @keyframes demo-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                "#}
            </style>
        </div>
    }
}
