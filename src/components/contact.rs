use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::util::{open_external, use_reveal};

const PROJECT_TYPES: &[(&str, &str)] = &[
    ("website", "Website/Landing Page"),
    ("ecommerce", "E-commerce"),
    ("webapp", "Aplicação Web"),
    ("mobile", "App Mobile"),
    ("api", "API/Backend"),
    ("consultoria", "Consultoria"),
    ("outro", "Outro"),
];

const BUDGET_RANGES: &[(&str, &str)] = &[
    ("5k-15k", "R$ 5.000 - R$ 15.000"),
    ("15k-30k", "R$ 15.000 - R$ 30.000"),
    ("30k-50k", "R$ 30.000 - R$ 50.000"),
    ("50k+", "R$ 50.000+"),
    ("nao-definido", "Ainda não definido"),
];

const BENEFITS: &[&str] = &[
    "Consultoria inicial gratuita",
    "Orçamento transparente sem surpresas",
    "Acompanhamento durante todo o projeto",
    "Suporte pós-entrega incluso",
];

#[derive(Clone, PartialEq, Default)]
struct ContactForm {
    name: String,
    email: String,
    project: String,
    budget: String,
    message: String,
}

impl ContactForm {
    /// Prefilled WhatsApp message; empty fields become bracketed prompts.
    fn whatsapp_message(&self) -> String {
        let name = if self.name.is_empty() {
            "[Seu Nome]"
        } else {
            self.name.as_str()
        };
        let project = if self.project.is_empty() {
            "[Descrição do projeto]"
        } else {
            self.project.as_str()
        };
        let budget = if self.budget.is_empty() {
            "[Valor aproximado]"
        } else {
            self.budget.as_str()
        };
        format!(
            "Olá! Meu nome é {}. Gostaria de conversar sobre meu projeto: {}. \
             Orçamento estimado: {}",
            name, project, budget
        )
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(&section_ref);

    let form = use_state(ContactForm::default);
    let is_submitting = use_state(|| false);
    let sent = use_state(|| false);

    let update_field = {
        let form = form.clone();
        move |field: fn(&mut ContactForm, String)| {
            let form = form.clone();
            Callback::from(move |value: String| {
                let mut next = (*form).clone();
                field(&mut next, value);
                form.set(next);
            })
        }
    };

    let on_name = update_field(|form, value| form.name = value);
    let on_email = update_field(|form, value| form.email = value);
    let on_project = update_field(|form, value| form.project = value);
    let on_budget = update_field(|form, value| form.budget = value);
    let on_message = update_field(|form, value| form.message = value);

    let on_submit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            is_submitting.set(true);

            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let sent = sent.clone();
            spawn_local(async move {
                // There is no backend; the send is simulated and the form
                // simply acknowledges and clears.
                TimeoutFuture::new(800).await;
                form.set(ContactForm::default());
                is_submitting.set(false);
                sent.set(true);

                TimeoutFuture::new(4000).await;
                sent.set(false);
            });
        })
    };

    let whatsapp_click = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            open_external(&config::whatsapp_url(&form.whatsapp_message()));
        })
    };

    html! {
        <section
            id="contact"
            ref={section_ref}
            class={classes!("contact", (*revealed).then(|| "visible"))}
        >
            <div class="contact-container">
                <div class="contact-header">
                    <span class="section-chip">{"Vamos Conversar"}</span>
                    <h2 class="contact-heading">
                        <span class="white">{"Pronto para "}</span>
                        <span class="blue">{"transformar"}</span>
                        <br />
                        <span class="white">{"sua "}</span>
                        <span class="coral">{"ideia"}</span>
                        <span class="white">{" em realidade?"}</span>
                    </h2>
                    <p class="contact-intro">
                        {"Agende uma consultoria gratuita ou preencha o formulário abaixo. \
                          Vamos descobrir juntos como podemos ajudar seu projeto a decolar."}
                    </p>
                </div>

                <div class="contact-grid">
                    <div class="contact-card form-card">
                        <h3 class="contact-card-title">{"✉ Conte-nos sobre seu projeto"}</h3>

                        {
                            if *sent {
                                html! {
                                    <div class="contact-sent-notice">
                                        {"Mensagem enviada! Obrigado pelo contato, responderemos em breve."}
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }

                        <form onsubmit={on_submit} class="contact-form">
                            <div class="contact-form-row">
                                <div class="contact-field">
                                    <label>{"Nome *"}</label>
                                    <input
                                        type="text"
                                        value={form.name.clone()}
                                        placeholder="Seu nome completo"
                                        required=true
                                        oninput={{
                                            let on_name = on_name.clone();
                                            Callback::from(move |e: InputEvent| {
                                                let input: HtmlInputElement = e.target_unchecked_into();
                                                on_name.emit(input.value());
                                            })
                                        }}
                                    />
                                </div>
                                <div class="contact-field">
                                    <label>{"Email *"}</label>
                                    <input
                                        type="email"
                                        value={form.email.clone()}
                                        placeholder="seu@email.com"
                                        required=true
                                        oninput={{
                                            let on_email = on_email.clone();
                                            Callback::from(move |e: InputEvent| {
                                                let input: HtmlInputElement = e.target_unchecked_into();
                                                on_email.emit(input.value());
                                            })
                                        }}
                                    />
                                </div>
                            </div>

                            <div class="contact-field">
                                <label>{"Tipo de projeto"}</label>
                                <select
                                    value={form.project.clone()}
                                    onchange={{
                                        let on_project = on_project.clone();
                                        Callback::from(move |e: Event| {
                                            let select: HtmlSelectElement = e.target_unchecked_into();
                                            on_project.emit(select.value());
                                        })
                                    }}
                                >
                                    <option value="" disabled=true selected={form.project.is_empty()}>
                                        {"Selecione o tipo de projeto"}
                                    </option>
                                    {
                                        PROJECT_TYPES.iter().map(|(value, label)| html! {
                                            <option value={*value} selected={form.project == *value}>
                                                {*label}
                                            </option>
                                        }).collect::<Html>()
                                    }
                                </select>
                            </div>

                            <div class="contact-field">
                                <label>{"Orçamento estimado"}</label>
                                <select
                                    value={form.budget.clone()}
                                    onchange={{
                                        let on_budget = on_budget.clone();
                                        Callback::from(move |e: Event| {
                                            let select: HtmlSelectElement = e.target_unchecked_into();
                                            on_budget.emit(select.value());
                                        })
                                    }}
                                >
                                    <option value="" disabled=true selected={form.budget.is_empty()}>
                                        {"Selecione a faixa de orçamento"}
                                    </option>
                                    {
                                        BUDGET_RANGES.iter().map(|(value, label)| html! {
                                            <option value={*value} selected={form.budget == *value}>
                                                {*label}
                                            </option>
                                        }).collect::<Html>()
                                    }
                                </select>
                            </div>

                            <div class="contact-field grow">
                                <label>{"Detalhes do projeto"}</label>
                                <textarea
                                    value={form.message.clone()}
                                    rows="6"
                                    placeholder="Conte mais sobre seu projeto, objetivos, prazos, funcionalidades desejadas..."
                                    oninput={{
                                        let on_message = on_message.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                                            on_message.emit(area.value());
                                        })
                                    }}
                                />
                            </div>

                            <button type="submit" class="contact-submit" disabled={*is_submitting}>
                                {
                                    if *is_submitting {
                                        html! { <>{"Enviando..."}</> }
                                    } else {
                                        html! { <>{"Enviar Mensagem"}</> }
                                    }
                                }
                            </button>
                        </form>
                    </div>

                    <div class="contact-side">
                        <div class="contact-card">
                            <h3 class="contact-card-title">{"💬 Prefere conversar agora?"}</h3>
                            <p class="contact-card-text">
                                {"Agende uma consultoria gratuita via WhatsApp. Resposta rápida \
                                  e atendimento personalizado."}
                            </p>
                            <button class="contact-whatsapp" onclick={whatsapp_click}>
                                {"Chamar no WhatsApp"}
                            </button>
                        </div>

                        <div class="contact-card">
                            <h3 class="contact-card-title">{"Outras formas de contato"}</h3>
                            <div class="contact-info">
                                <div class="contact-info-row">
                                    <div class="contact-info-icon blue">{"📞"}</div>
                                    <div>
                                        <p class="contact-info-main">{config::CONTACT_PHONE_DISPLAY}</p>
                                        <p class="contact-info-sub">{"Ligação ou WhatsApp"}</p>
                                    </div>
                                </div>
                                <div class="contact-info-row">
                                    <div class="contact-info-icon coral">{"✉"}</div>
                                    <div>
                                        <p class="contact-info-main">
                                            <a href={config::mailto_url()}>{config::CONTACT_EMAIL}</a>
                                        </p>
                                        <p class="contact-info-sub">{"Resposta em até 24h"}</p>
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class="contact-card">
                            <h3 class="contact-card-title">{"Por que escolher a CarvaCode?"}</h3>
                            <div class="contact-benefits">
                                {
                                    BENEFITS.iter().map(|benefit| html! {
                                        <div class="contact-benefit">
                                            <span class="contact-benefit-check">{"✓"}</span>
                                            <span>{*benefit}</span>
                                        </div>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact {
                    position: relative;
                    padding: 6rem 0;
                    background-color: #0b1115;
                    background-image:
                        linear-gradient(rgba(255, 255, 255, 0.02) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(255, 255, 255, 0.02) 1px, transparent 1px);
                    background-size: 56px 56px;
                    overflow: hidden;
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .contact.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .contact-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .contact-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .contact-heading {
                    font-size: clamp(1.9rem, 4vw, 2.6rem);
                    font-weight: 800;
                    margin-bottom: 1.5rem;
                    line-height: 1.25;
                }

                .contact-heading .white { color: #fff; }
                .contact-heading .blue { color: #27A6D9; }
                .contact-heading .coral { color: #FF7247; }

                .contact-intro {
                    font-size: 1.1rem;
                    color: rgba(255, 255, 255, 0.8);
                    max-width: 48rem;
                    margin: 0 auto;
                    line-height: 1.7;
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2.5rem;
                    max-width: 72rem;
                    margin: 0 auto;
                    align-items: stretch;
                }

                .contact-card {
                    border-radius: 16px;
                    padding: 1.5rem 2rem;
                    background: rgba(255, 255, 255, 0.02);
                    border: 1px solid rgba(255, 255, 255, 0.03);
                    box-shadow: 0 14px 30px rgba(2, 6, 23, 0.5);
                    backdrop-filter: blur(4px);
                }

                .contact-card-title {
                    font-size: 1.3rem;
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 1.25rem;
                }

                .contact-card-text {
                    color: rgba(255, 255, 255, 0.8);
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }

                .contact-sent-notice {
                    margin-bottom: 1rem;
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    background: rgba(39, 166, 217, 0.12);
                    border: 1px solid rgba(39, 166, 217, 0.35);
                    color: #7fd0ef;
                    font-size: 0.9rem;
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    flex: 1;
                }

                .contact-form-row {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }

                .contact-field {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1rem;
                }

                .contact-field.grow {
                    flex: 1;
                }

                .contact-field label {
                    font-size: 0.85rem;
                    font-weight: 500;
                    color: rgba(255, 255, 255, 0.7);
                    margin-bottom: 0.5rem;
                }

                .contact-field input,
                .contact-field select,
                .contact-field textarea {
                    padding: 0.6rem 0.75rem;
                    border-radius: 6px;
                    border: 1px solid rgba(255, 255, 255, 0.06);
                    background: transparent;
                    color: #fff;
                    font-size: 0.95rem;
                    font-family: inherit;
                }

                .contact-field input::placeholder,
                .contact-field textarea::placeholder {
                    color: rgba(255, 255, 255, 0.5);
                }

                .contact-field select option {
                    background: #0b1115;
                }

                .contact-field textarea {
                    resize: none;
                }

                .contact-submit {
                    margin-top: 1rem;
                    padding: 0.9rem 1.5rem;
                    border: none;
                    border-radius: 999px;
                    background: linear-gradient(90deg, #ff8a4b 0%, #ff5e3a 100%);
                    color: #fff;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: opacity 0.3s ease;
                }

                .contact-submit:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }

                .contact-side {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .contact-whatsapp {
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 999px;
                    background: #FF7247;
                    color: #fff;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .contact-whatsapp:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 12px 28px rgba(255, 114, 71, 0.35);
                }

                .contact-info {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .contact-info-row {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .contact-info-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 12px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.2rem;
                }

                .contact-info-icon.blue { background: rgba(39, 166, 217, 0.1); }
                .contact-info-icon.coral { background: rgba(255, 114, 71, 0.1); }

                .contact-info-main {
                    color: #fff;
                    font-weight: 500;
                }

                .contact-info-main a {
                    color: inherit;
                    text-decoration: none;
                }

                .contact-info-main a:hover {
                    color: #27A6D9;
                }

                .contact-info-sub {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.85rem;
                }

                .contact-benefits {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .contact-benefit {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: rgba(255, 255, 255, 0.8);
                }

                .contact-benefit-check {
                    color: #FF7247;
                    flex-shrink: 0;
                }

                @media (min-width: 768px) {
                    .contact-form-row { grid-template-columns: 1fr 1fr; }
                }

                @media (min-width: 1024px) {
                    .contact-grid { grid-template-columns: 1fr 1fr; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_message_with_placeholders() {
        let form = ContactForm::default();
        let message = form.whatsapp_message();
        assert!(message.contains("[Seu Nome]"));
        assert!(message.contains("[Descrição do projeto]"));
        assert!(message.contains("[Valor aproximado]"));
    }

    #[test]
    fn test_whatsapp_message_with_filled_fields() {
        let form = ContactForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            project: "webapp".to_string(),
            budget: "15k-30k".to_string(),
            message: String::new(),
        };
        let message = form.whatsapp_message();
        assert!(message.contains("Meu nome é Ana"));
        assert!(message.contains("meu projeto: webapp"));
        assert!(message.contains("Orçamento estimado: 15k-30k"));
        assert!(!message.contains('['));
    }
}
