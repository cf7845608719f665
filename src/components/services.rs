use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::util::{open_external, use_reveal};

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
}

const SERVICES: &[Service] = &[
    Service {
        icon: "🌐",
        title: "Desenvolvimento Web",
        description: "Aplicações web modernas com as tecnologias mais atuais para máxima \
                      performance e escalabilidade.",
        features: &["SPA & SSR", "Headless CMS", "PWA", "WebAssembly"],
    },
    Service {
        icon: "📱",
        title: "Apps Mobile",
        description: "Aplicativos nativos e híbridos que oferecem experiência excepcional em \
                      iOS e Android.",
        features: &["React Native", "Flutter", "Apps Nativas", "Cross-platform"],
    },
    Service {
        icon: "🗄",
        title: "APIs & Integrações",
        description: "Desenvolvimento de APIs robustas e integrações com sistemas terceiros \
                      para conectar todos os pontos do seu ecossistema.",
        features: &["REST APIs", "GraphQL", "Microserviços", "Integrações"],
    },
    Service {
        icon: "⚡",
        title: "Performance & Otimização",
        description: "Análise e otimização de performance para garantir velocidade e \
                      eficiência em todos os dispositivos.",
        features: &["Core Web Vitals", "Bundle Optimization", "CDN Setup", "Monitoring"],
    },
    Service {
        icon: "🔍",
        title: "SEO & Analytics",
        description: "Implementação de SEO técnico e analytics para maximizar a visibilidade \
                      e conversão do seu produto.",
        features: &["SEO Técnico", "Analytics", "Meta Tags", "Structured Data"],
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(&section_ref);

    let cta_click = Callback::from(|_: MouseEvent| {
        open_external(&config::whatsapp_url(
            "Olá! Gostaria de conversar sobre meu projeto digital.",
        ));
    });

    html! {
        <section
            id="services"
            ref={section_ref}
            class={classes!("services", (*revealed).then(|| "visible"))}
        >
            <div class="services-radial-bg"></div>

            <div class="services-container">
                <div class="services-header">
                    <span class="section-chip">{"Nossos Serviços"}</span>
                    <h2 class="services-heading">
                        <span class="white">{"Soluções "}</span>
                        <span class="blue">{"completas"}</span>
                        <br />
                        <span class="white">{"para seu "}</span>
                        <span class="coral">{"produto digital"}</span>
                    </h2>
                </div>

                <div class="services-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <div class="service-card">
                                <div class="service-icon">{service.icon}</div>
                                <h3 class="service-title">{service.title}</h3>
                                <p class="service-description">{service.description}</p>
                                <div class="service-features">
                                    {
                                        service.features.iter().map(|feature| html! {
                                            <span class="service-feature">{*feature}</span>
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="services-cta">
                    <h3 class="services-cta-heading">
                        <span class="white">{"Pronto para transformar "}</span>
                        <span class="coral">{"sua ideia"}</span>
                        <span class="white">{" em realidade?"}</span>
                    </h3>
                    <p class="services-cta-text">
                        {"Vamos conversar sobre seu projeto e descobrir como podemos ajudar \
                          você a alcançar seus objetivos digitais."}
                    </p>
                    <button class="services-cta-button" onclick={cta_click}>
                        {"Vamos conversar →"}
                    </button>
                </div>
            </div>

            <style>
                {r#"
                .services {
                    position: relative;
                    padding: 6rem 0;
                    background: #0c141d;
                    overflow: hidden;
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .services.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .services-radial-bg {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(circle at 50% 50%, rgba(39, 166, 217, 0.1), transparent 50%);
                }

                .services-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    position: relative;
                    z-index: 1;
                }

                .services-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .services-heading {
                    font-size: clamp(1.9rem, 4vw, 2.6rem);
                    font-weight: 700;
                    line-height: 1.25;
                }

                .services-heading .white { color: #fff; }
                .services-heading .blue { color: #27A6D9; }
                .services-heading .coral { color: #FF7247; }

                .services-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    margin-bottom: 4rem;
                }

                .service-card {
                    padding: 2rem;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.02);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(4px);
                    transition: transform 0.5s ease, box-shadow 0.5s ease;
                }

                .service-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 20px 40px rgba(2, 6, 23, 0.6);
                }

                .service-icon {
                    width: 64px;
                    height: 64px;
                    border-radius: 16px;
                    background: linear-gradient(135deg, #27A6D9, #FF7247);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.8rem;
                    margin-bottom: 1.5rem;
                    transition: transform 0.3s ease;
                }

                .service-card:hover .service-icon {
                    transform: scale(1.1);
                }

                .service-title {
                    font-size: 1.2rem;
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 1rem;
                }

                .service-description {
                    color: rgba(255, 255, 255, 0.65);
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }

                .service-features {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .service-feature {
                    padding: 0.25rem 0.75rem;
                    background: rgba(39, 166, 217, 0.1);
                    border: 1px solid rgba(39, 166, 217, 0.2);
                    border-radius: 999px;
                    color: #27A6D9;
                    font-size: 0.75rem;
                    font-weight: 500;
                }

                .services-cta {
                    text-align: center;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.02);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                }

                .services-cta-heading {
                    font-size: clamp(1.5rem, 3vw, 2rem);
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .services-cta-heading .white { color: #fff; }
                .services-cta-heading .coral { color: #FF7247; }

                .services-cta-text {
                    color: rgba(255, 255, 255, 0.65);
                    font-size: 1.1rem;
                    line-height: 1.7;
                    max-width: 36rem;
                    margin: 0 auto 2rem;
                }

                .services-cta-button {
                    padding: 1rem 2.5rem;
                    border: none;
                    border-radius: 999px;
                    background: linear-gradient(90deg, #ff8a4b 0%, #ff5e3a 100%);
                    color: #fff;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .services-cta-button:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 12px 28px rgba(255, 94, 58, 0.35);
                }

                @media (min-width: 768px) {
                    .services-grid { grid-template-columns: 1fr 1fr; }
                }

                @media (min-width: 1024px) {
                    .services-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
