use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::{info, warn};

use crate::config;
use crate::components::contact_models::{
    classify_response, ContactField, ContactFormModel, ContactRequest, ErrorResponse,
    SubmitOutcome,
};

pub enum ContactFormMsg {
    SetField(ContactField, String),
    Submit,
    Finished(SubmitOutcome),
    ConfirmationElapsed,
    ClearNotice,
}

pub struct ContactForm {
    model: ContactFormModel,
    // Dropping the handle cancels the pending revert.
    confirmation_timer: Option<Timeout>,
}

/// Posts one lead and classifies the result. Never retries.
pub async fn send_contact_request(endpoint: String, request: ContactRequest) -> SubmitOutcome {
    let pending = match Request::post(&endpoint).json(&request) {
        Ok(req) => req,
        Err(e) => {
            warn!("Could not encode contact request: {}", e);
            return SubmitOutcome::Unreachable;
        }
    };

    match pending.send().await {
        Ok(response) => {
            let status_ok = response.ok();
            let error_body = if status_ok {
                None
            } else {
                info!("Contact request rejected with status {}", response.status());
                response.json::<ErrorResponse>().await.ok()
            };
            classify_response(status_ok, error_body)
        }
        Err(e) => {
            warn!("Error de red: {}", e);
            SubmitOutcome::Unreachable
        }
    }
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            model: ContactFormModel::new(),
            confirmation_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::SetField(field, value) => {
                self.model.set_field(field, value);
                true
            }
            ContactFormMsg::Submit => {
                let Some(request) = self.model.begin_submit() else {
                    return true;
                };

                let endpoint = config::contact_endpoint();
                ctx.link().send_future(async move {
                    ContactFormMsg::Finished(send_contact_request(endpoint, request).await)
                });
                true
            }
            ContactFormMsg::Finished(outcome) => {
                if let Some(delay_ms) = self.model.finish(outcome) {
                    let link = ctx.link().clone();
                    self.confirmation_timer = Some(Timeout::new(delay_ms, move || {
                        link.send_message(ContactFormMsg::ConfirmationElapsed);
                    }));
                }
                true
            }
            ContactFormMsg::ConfirmationElapsed => {
                self.confirmation_timer = None;
                self.model.confirmation_elapsed();
                true
            }
            ContactFormMsg::ClearNotice => {
                self.model.clear_notice();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let busy = self.model.is_busy();

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });

        html! {
            <div id="contact-form" class="contact-card">
                <style>
                {r#".contact-card {
                    position: relative;
                    overflow: hidden;
                    background: #121214;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    padding: 1.5rem;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                    scroll-margin-top: 5rem;
                }
                .contact-card h3 {
                    font-family: Georgia, serif;
                    color: #fff;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 1.3px;
                    text-align: center;
                    margin-bottom: 1.25rem;
                }
                .contact-card form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .contact-card input,
                .contact-card textarea {
                    width: 100%;
                    box-sizing: border-box;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 12px;
                    padding: 1rem;
                    font-size: 16px; /* no zoom on iOS */
                    color: #e2e8f0;
                    outline: none;
                    resize: none;
                }
                .contact-card input:focus,
                .contact-card textarea:focus {
                    border-color: #fbbf24;
                }
                .contact-card label {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #fcd34d;
                    font-weight: bold;
                }
                .contact-submit {
                    background: #fbbf24;
                    color: #000;
                    font-weight: bold;
                    border: none;
                    border-radius: 12px;
                    padding: 1rem;
                    text-transform: uppercase;
                    font-size: 0.75rem;
                    letter-spacing: 1.3px;
                    cursor: pointer;
                }
                .contact-submit:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .contact-notice {
                    display: flex;
                    justify-content: space-between;
                    gap: 0.5rem;
                    background: rgba(239, 68, 68, 0.1);
                    border: 1px solid rgba(239, 68, 68, 0.4);
                    color: #fecaca;
                    border-radius: 12px;
                    padding: 0.75rem 1rem;
                    font-size: 0.875rem;
                }
                .contact-notice button {
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                }
                .contact-confirmation {
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                    background: #121214;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                    text-align: center;
                    border-radius: 16px;
                    animation: fade-in 0.3s ease-out;
                }
                .contact-confirmation .shield { font-size: 3.5rem; margin-bottom: 0.75rem; }
                .contact-confirmation h4 { color: #fff; font-family: Georgia, serif; font-size: 1.25rem; }
                .contact-confirmation p { color: #cbd5e1; font-size: 0.875rem; max-width: 280px; }
                @keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }"#}
                </style>
                <h3>{"Le contactaremos en menos de 2 horas"}</h3>

                if let Some(notice) = self.model.notice() {
                    <div class="contact-notice" role="alert">
                        <span>{ notice }</span>
                        <button
                            type="button"
                            aria-label="Cerrar aviso"
                            onclick={link.callback(|_| ContactFormMsg::ClearNotice)}
                        >
                            { "✕" }
                        </button>
                    </div>
                }

                <form {onsubmit}>
                    <input
                        name="nombre"
                        type="text"
                        required=true
                        placeholder="Nombre completo"
                        aria-label="Nombre completo"
                        value={self.model.field(ContactField::Name).to_string()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            ContactFormMsg::SetField(ContactField::Name, input.value())
                        })}
                    />
                    <input
                        name="telefono"
                        type="tel"
                        required=true
                        placeholder="Teléfono con lada"
                        aria-label="Teléfono con lada"
                        value={self.model.field(ContactField::Phone).to_string()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            ContactFormMsg::SetField(ContactField::Phone, input.value())
                        })}
                    />
                    <label>{"💬 Detalles de su caso:"}</label>
                    <textarea
                        name="caso"
                        required=true
                        rows="4"
                        placeholder="Explique brevemente su situación legal..."
                        aria-label="Detalles del caso"
                        value={self.model.field(ContactField::Case).to_string()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            ContactFormMsg::SetField(ContactField::Case, input.value())
                        })}
                    />
                    <button class="contact-submit" type="submit" disabled={busy}>
                        { if busy { "ENVIANDO..." } else { "SOLICITAR ATENCIÓN INMEDIATA" } }
                    </button>
                </form>

                if self.model.is_confirmed() {
                    <div class="contact-confirmation" role="status">
                        <span class="shield">{"🛡️"}</span>
                        <h4>{"Solicitud Recibida"}</h4>
                        <p>{"Un especialista revisará su caso y se contactará con usted en menos de 2 horas."}</p>
                    </div>
                }
            </div>
        }
    }
}
