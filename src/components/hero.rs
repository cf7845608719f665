use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::demo::viewer::DemoViewer;
use crate::util::{open_external, scroll_to};

const FEATURES: &[(&str, &str)] = &[
    ("#27A6D9", "Experiência técnica"),
    ("#FF7247", "Entregas ágeis"),
    ("#f59e0b", "Integração mobile/web"),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let whatsapp_click = Callback::from(|_: MouseEvent| {
        open_external(&config::whatsapp_url(
            "Olá! Gostaria de agendar uma consultoria gratuita para meu projeto.",
        ));
    });

    let services_click = Callback::from(|_: MouseEvent| scroll_to("#services"));
    let scroll_down_click = Callback::from(|_: MouseEvent| scroll_to("#about"));

    html! {
        <section class="hero">
            <div class="hero-grid-bg"></div>

            <div class="hero-container">
                <div class="hero-columns">
                    <div class="hero-copy">
                        <span class="hero-tag">{"🚀 Consultoria Especializada"}</span>

                        <h1 class="hero-heading">
                            <span class="white">{"Consultoria em"}</span>
                            <br />
                            <span class="blue">{"desenvolvimento web"}</span>
                            <span class="white">{" e "}</span>
                            <span class="coral">{"apps"}</span>
                        </h1>

                        <p class="hero-subtitle">
                            {"Transformamos ideias em produtos digitais escaláveis"}
                        </p>

                        <div class="hero-features">
                            {
                                FEATURES.iter().map(|(color, label)| html! {
                                    <div class="hero-feature">
                                        <div
                                            class="hero-feature-dot"
                                            style={format!("background-color: {};", color)}
                                        />
                                        <span>{*label}</span>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>

                        <div class="hero-ctas">
                            <button class="hero-cta primary" onclick={whatsapp_click}>
                                {"▶ Agendar consultoria grátis"}
                            </button>
                            <button class="hero-cta glass" onclick={services_click}>
                                {"Ver serviços ↓"}
                            </button>
                        </div>

                        <p class="hero-note">
                            {"Tecnologia que potencializa seu produto — animações interativas e desempenho otimizado"}
                        </p>
                    </div>

                    <div class="hero-visual">
                        <div class="hero-visual-glow"></div>
                        <DemoViewer class="hero-demo" />
                    </div>
                </div>

                <button class="hero-scroll-indicator" onclick={scroll_down_click}>
                    <span>{"Explore mais"}</span>
                    <span class="hero-scroll-arrow">{"↓"}</span>
                </button>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    overflow: hidden;
                    background: radial-gradient(ellipse at top, #0d1b26 0%, #070c12 60%);
                }

                .hero-grid-bg {
                    position: absolute;
                    inset: 0;
                    background-image:
                        linear-gradient(rgba(255, 255, 255, 0.02) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(255, 255, 255, 0.02) 1px, transparent 1px);
                    background-size: 50px 50px;
                }

                .hero-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    position: relative;
                    z-index: 1;
                }

                .hero-columns {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: center;
                    min-height: 100vh;
                    padding: 5rem 0;
                }

                .hero-copy {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    animation: hero-slide-in 0.8s ease-out both;
                }

                .hero-tag {
                    align-self: flex-start;
                    padding: 0.5rem 1rem;
                    background: rgba(39, 166, 217, 0.1);
                    border: 1px solid rgba(39, 166, 217, 0.4);
                    border-radius: 999px;
                    color: #27A6D9;
                    font-size: 0.85rem;
                    font-weight: 500;
                }

                .hero-heading {
                    font-size: clamp(2.2rem, 5vw, 3.8rem);
                    font-weight: 700;
                    line-height: 1.15;
                }

                .hero-heading .white { color: #fff; }
                .hero-heading .blue { color: #27A6D9; }
                .hero-heading .coral { color: #FF7247; }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: rgba(255, 255, 255, 0.8);
                    line-height: 1.6;
                    max-width: 36rem;
                }

                .hero-features {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    color: rgba(255, 255, 255, 0.7);
                }

                .hero-feature {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .hero-feature-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    animation: hero-pulse 2s ease-in-out infinite;
                }

                .hero-ctas {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    padding-top: 1rem;
                }

                .hero-cta {
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 999px;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .hero-cta.primary {
                    background: linear-gradient(90deg, #ff8a4b 0%, #ff5e3a 100%);
                    color: #fff;
                }

                .hero-cta.primary:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 12px 28px rgba(255, 94, 58, 0.35);
                }

                .hero-cta.glass {
                    background: rgba(255, 255, 255, 0.06);
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    color: #fff;
                }

                .hero-cta.glass:hover {
                    background: rgba(255, 255, 255, 0.12);
                }

                .hero-note {
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.6);
                    font-style: italic;
                    padding-top: 1rem;
                }

                .hero-visual {
                    position: relative;
                    height: 500px;
                    animation: hero-slide-in-right 0.8s ease-out 0.4s both;
                }

                .hero-visual-glow {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    filter: blur(64px);
                    background: rgba(39, 166, 217, 0.2);
                }

                .hero-demo {
                    position: relative;
                    z-index: 1;
                }

                .hero-scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.85rem;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }

                .hero-scroll-indicator:hover {
                    color: #fff;
                }

                .hero-scroll-arrow {
                    font-size: 1.4rem;
                    animation: hero-bounce 1.5s ease-in-out infinite;
                }

                @keyframes hero-slide-in {
                    from { opacity: 0; transform: translateX(-50px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                @keyframes hero-slide-in-right {
                    from { opacity: 0; transform: translateX(50px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                @keyframes hero-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }

                @keyframes hero-bounce {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(6px); }
                }

                @media (min-width: 1024px) {
                    .hero-columns {
                        grid-template-columns: 1fr 1fr;
                    }
                    .hero-visual {
                        height: 600px;
                    }
                }
                "#}
            </style>
        </section>
    }
}
