use yew::prelude::*;

use crate::util::use_reveal;

const STATS: &[(&str, &str, &str)] = &[
    ("🏆", "Projetos Entregues", "50+"),
    ("👥", "Clientes Satisfeitos", "30+"),
    ("⏱", "Anos de Experiência", "8+"),
    ("✓", "Taxa de Sucesso", "98%"),
];

const DIFFERENTIALS: &[(&str, &str)] = &[
    (
        "Experiência Técnica Sólida",
        "Mais de 8 anos desenvolvendo soluções web e mobile com as tecnologias mais modernas do mercado.",
    ),
    (
        "Entregas Ágeis",
        "Metodologia ágil garantindo entregas rápidas sem comprometer a qualidade do seu projeto.",
    ),
    (
        "Integração Mobile/Web",
        "Especialistas em criar ecossistemas digitais completos que funcionam perfeitamente em todas as plataformas.",
    ),
    (
        "Suporte Completo",
        "Acompanhamento desde a concepção até o deploy e manutenção contínua do seu produto.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(&section_ref);

    html! {
        <section
            id="about"
            ref={section_ref}
            class={classes!("about", (*revealed).then(|| "visible"))}
        >
            <div class="about-container">
                <div class="about-header">
                    <span class="section-chip">{"Sobre a CarvaCode"}</span>
                    <h2 class="about-heading">
                        <span class="white">{"Transformamos "}</span>
                        <span class="blue">{"ideias complexas"}</span>
                        <br />
                        <span class="white">{"em "}</span>
                        <span class="coral">{"soluções digitais"}</span>
                    </h2>
                    <p class="about-intro">
                        {"Somos uma consultoria especializada em desenvolvimento web e aplicativos \
                          móveis, focada em criar produtos digitais que realmente impactam os \
                          resultados do seu negócio. Nossa abordagem combina experiência técnica \
                          com visão estratégica."}
                    </p>
                </div>

                <div class="about-stats">
                    {
                        STATS.iter().map(|(icon, label, value)| html! {
                            <div class="about-stat">
                                <div class="about-stat-icon">{*icon}</div>
                                <div class="about-stat-value">{*value}</div>
                                <div class="about-stat-label">{*label}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="about-differentials">
                    {
                        DIFFERENTIALS.iter().map(|(title, description)| html! {
                            <div class="about-card">
                                <div class="about-card-badge">{"✓"}</div>
                                <div>
                                    <h3 class="about-card-title">{*title}</h3>
                                    <p class="about-card-text">{*description}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .about {
                    padding: 6rem 0;
                    background: #0a121a;
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .about.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .about-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .about-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .about-heading {
                    font-size: clamp(1.9rem, 4vw, 2.6rem);
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                    line-height: 1.25;
                }

                .about-heading .white { color: #fff; }
                .about-heading .blue { color: #27A6D9; }
                .about-heading .coral { color: #FF7247; }

                .about-intro {
                    font-size: 1.1rem;
                    color: rgba(255, 255, 255, 0.65);
                    max-width: 48rem;
                    margin: 0 auto;
                    line-height: 1.7;
                }

                .about-stats {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    margin-bottom: 5rem;
                }

                .about-stat {
                    text-align: center;
                }

                .about-stat-icon {
                    width: 64px;
                    height: 64px;
                    margin: 0 auto 1rem;
                    border-radius: 16px;
                    background: #27A6D9;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.6rem;
                    transition: transform 0.3s ease;
                }

                .about-stat:hover .about-stat-icon {
                    transform: scale(1.1);
                }

                .about-stat-value {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #27A6D9;
                    margin-bottom: 0.5rem;
                }

                .about-stat-label {
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.65);
                    font-weight: 500;
                }

                .about-differentials {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }

                .about-card {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    padding: 2rem;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.02);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(4px);
                    transition: box-shadow 0.3s ease;
                }

                .about-card:hover {
                    box-shadow: 0 14px 30px rgba(2, 6, 23, 0.5);
                }

                .about-card-badge {
                    flex-shrink: 0;
                    width: 48px;
                    height: 48px;
                    border-radius: 12px;
                    background: #FF7247;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.2rem;
                }

                .about-card-title {
                    font-size: 1.2rem;
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 0.75rem;
                }

                .about-card-text {
                    color: rgba(255, 255, 255, 0.65);
                    line-height: 1.7;
                }

                @media (min-width: 1024px) {
                    .about-stats { grid-template-columns: repeat(4, 1fr); }
                    .about-differentials { grid-template-columns: 1fr 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
