use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::util::{open_external, scroll_to};

const QUICK_LINKS: &[(&str, &str)] = &[
    ("#about", "Sobre"),
    ("#services", "Serviços"),
    ("#contact", "Contato"),
];

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/carvacode"),
    ("LinkedIn", "https://www.linkedin.com/company/carvacode"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = chrono::Utc::now().year();

    let whatsapp_click = Callback::from(|_: MouseEvent| {
        open_external(&config::whatsapp_url(
            "Olá! Gostaria de agendar uma consultoria gratuita.",
        ));
    });

    html! {
        <footer class="footer">
            <div class="footer-grid-bg"></div>

            <div class="footer-container">
                <div class="footer-main">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <span class="footer-logo-mark">{"{ }"}</span>
                            <span class="footer-logo-text">{"CarvaCode"}</span>
                        </div>
                        <p class="footer-blurb">
                            {"Transformamos ideias em produtos digitais escaláveis. \
                              Consultoria especializada em desenvolvimento web e apps."}
                        </p>
                        <button class="footer-cta" onclick={whatsapp_click}>
                            {"💬 Falemos — agende uma consultoria"}
                        </button>
                    </div>

                    <div class="footer-column">
                        <h3>{"Navegação"}</h3>
                        <ul class="footer-links">
                            {
                                QUICK_LINKS.iter().map(|(selector, label)| {
                                    let selector = *selector;
                                    html! {
                                        <li>
                                            <button
                                                class="footer-link"
                                                onclick={Callback::from(move |_: MouseEvent| scroll_to(selector))}
                                            >
                                                {*label}
                                            </button>
                                        </li>
                                    }
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h3>{"Contato"}</h3>
                        <p class="footer-contact-line">
                            <span class="strong">{"WhatsApp:"}</span>
                            <br />
                            {config::CONTACT_PHONE_DISPLAY}
                        </p>
                        <p class="footer-contact-line">
                            <span class="strong">{"Email:"}</span>
                            <br />
                            <a href={config::mailto_url()}>{config::CONTACT_EMAIL}</a>
                        </p>
                        <p class="footer-contact-line">
                            <span class="strong">{"Horário:"}</span>
                            <br />
                            {config::WORKING_HOURS}
                        </p>
                    </div>
                </div>

                <div class="footer-bottom">
                    <div class="footer-copyright">
                        {format!("© {} CarvaCode. Feito com ", current_year)}
                        <span class="footer-heart">{"❤"}</span>
                        {" para impulsionar seu negócio."}
                    </div>

                    <div class="footer-social">
                        {
                            SOCIAL_LINKS.iter().map(|(label, url)| {
                                let url = *url;
                                html! {
                                    <button
                                        class="footer-social-button"
                                        aria-label={*label}
                                        onclick={Callback::from(move |_: MouseEvent| open_external(url))}
                                    >
                                        {*label}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                        <a class="footer-social-button" href={config::mailto_url()}>
                            {"Email"}
                        </a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .footer {
                    position: relative;
                    overflow: hidden;
                    background: #070c12;
                }

                .footer-grid-bg {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background-image:
                        linear-gradient(rgba(255, 255, 255, 0.03) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(255, 255, 255, 0.03) 1px, transparent 1px);
                    background-size: 30px 30px;
                }

                .footer-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    position: relative;
                    z-index: 1;
                }

                .footer-main {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    padding: 4rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }

                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }

                .footer-logo-mark {
                    color: #FF7247;
                    font-weight: 700;
                    font-family: monospace;
                    font-size: 1.4rem;
                }

                .footer-logo-text {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #27A6D9;
                }

                .footer-blurb {
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 1.05rem;
                    line-height: 1.7;
                    max-width: 28rem;
                    margin-bottom: 2rem;
                }

                .footer-cta {
                    padding: 0.9rem 1.75rem;
                    border: none;
                    border-radius: 999px;
                    background: linear-gradient(90deg, #ff8a4b 0%, #ff5e3a 100%);
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }

                .footer-cta:hover {
                    transform: translateY(-2px);
                }

                .footer-column h3 {
                    color: #fff;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }

                .footer-links {
                    list-style: none;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .footer-link {
                    background: none;
                    border: none;
                    padding: 0;
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 0.95rem;
                    cursor: pointer;
                    transition: color 0.3s ease;
                    text-align: left;
                }

                .footer-link:hover {
                    color: #fff;
                }

                .footer-contact-line {
                    color: rgba(255, 255, 255, 0.7);
                    margin-bottom: 0.75rem;
                    line-height: 1.6;
                }

                .footer-contact-line .strong {
                    color: #fff;
                    font-weight: 500;
                }

                .footer-contact-line a {
                    color: inherit;
                    text-decoration: none;
                }

                .footer-contact-line a:hover {
                    color: #27A6D9;
                }

                .footer-bottom {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                    padding: 2rem 0;
                }

                .footer-copyright {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.85rem;
                }

                .footer-heart {
                    color: #FF7247;
                    animation: footer-pulse 2s ease-in-out infinite;
                }

                .footer-social {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .footer-social-button {
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 8px;
                    background: rgba(255, 255, 255, 0.05);
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.85rem;
                    cursor: pointer;
                    text-decoration: none;
                    transition: background 0.3s ease, color 0.3s ease;
                }

                .footer-social-button:hover {
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                }

                @keyframes footer-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }

                @media (min-width: 1024px) {
                    .footer-main {
                        grid-template-columns: 2fr 1fr 1fr;
                    }
                    .footer-bottom {
                        flex-direction: row;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
