use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::util::{open_external, scroll_to};

const NAV_ITEMS: &[(&str, &str)] = &[
    ("#about", "Sobre"),
    ("#services", "Serviços"),
    ("#contact", "Contato"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let is_scrolled = use_state(|| false);
    let menu_open = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 50.0);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_click = {
        let menu_open = menu_open.clone();
        Callback::from(move |selector: &'static str| {
            scroll_to(selector);
            menu_open.set(false);
        })
    };

    let cta_click = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            open_external(&config::whatsapp_url(
                "Olá! Gostaria de agendar uma consultoria gratuita.",
            ));
            menu_open.set(false);
        })
    };

    let nav_buttons = |class: &'static str| -> Html {
        NAV_ITEMS
            .iter()
            .map(|(selector, label)| {
                let nav_click = nav_click.clone();
                let selector = *selector;
                html! {
                    <button
                        class={class}
                        onclick={Callback::from(move |_: MouseEvent| nav_click.emit(selector))}
                    >
                        {*label}
                    </button>
                }
            })
            .collect()
    };

    html! {
        <>
            <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
                <div class="header-content">
                    <div class="header-logo" onclick={{
                        Callback::from(move |_: MouseEvent| {
                            if let Some(window) = web_sys::window() {
                                window.scroll_to_with_x_and_y(0.0, 0.0);
                            }
                        })
                    }}>
                        <span class="header-logo-mark">{"{ }"}</span>
                        <span class="header-logo-text">{"CarvaCode"}</span>
                    </div>

                    <nav class="header-nav">
                        { nav_buttons("header-nav-link") }
                    </nav>

                    <div class="header-cta">
                        <button class="header-cta-button" onclick={cta_click.clone()}>
                            {"Agendar Consultoria"}
                        </button>
                    </div>

                    <button class="header-burger" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { nav_buttons("mobile-menu-link") }
                <button class="header-cta-button mobile" onclick={cta_click}>
                    {"Agendar Consultoria Grátis"}
                </button>
            </div>

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: background 0.5s ease, border-color 0.5s ease;
                    background: transparent;
                    border-bottom: 1px solid transparent;
                }

                .site-header.scrolled {
                    background: rgba(7, 12, 18, 0.95);
                    backdrop-filter: blur(12px);
                    border-bottom-color: rgba(255, 255, 255, 0.1);
                }

                .header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 64px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .header-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    cursor: pointer;
                }

                .header-logo-mark {
                    color: #FF7247;
                    font-weight: 700;
                    font-family: monospace;
                    font-size: 1.2rem;
                }

                .header-logo-text {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #27A6D9;
                }

                .header-nav {
                    display: none;
                    align-items: center;
                    gap: 2rem;
                }

                .header-nav-link {
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.9);
                    font-size: 0.9rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }

                .header-nav-link:hover {
                    color: #27A6D9;
                }

                .header-cta {
                    display: none;
                }

                .header-cta-button {
                    padding: 0.6rem 1.4rem;
                    border: none;
                    border-radius: 999px;
                    background: linear-gradient(90deg, #27A6D9, #1d7fab);
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .header-cta-button:hover {
                    transform: translateY(-1px);
                    box-shadow: 0 8px 20px rgba(39, 166, 217, 0.3);
                }

                .header-burger {
                    display: flex;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .header-burger span {
                    width: 22px;
                    height: 2px;
                    background: #fff;
                }

                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    background: rgba(7, 12, 18, 0.98);
                    backdrop-filter: blur(12px);
                    display: none;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                }

                .mobile-menu.open {
                    display: flex;
                }

                .mobile-menu-link {
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.5rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }

                .mobile-menu-link:hover {
                    color: #27A6D9;
                }

                @media (min-width: 768px) {
                    .header-nav { display: flex; }
                    .header-cta { display: flex; }
                    .header-burger { display: none; }
                    .mobile-menu { display: none !important; }
                }
                "#}
            </style>
        </>
    }
}
