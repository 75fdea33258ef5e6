use yew::prelude::*;
use chrono::Datelike;

use crate::components::contact_form::ContactForm;
use crate::components::floating_actions::FloatingActions;
use crate::site::{FirmProfile, Service};
use crate::utils::scroll_to_section;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub profile: &'static FirmProfile,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let profile = props.profile;
    let year = chrono::Utc::now().year();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let to_services = Callback::from(|_: MouseEvent| scroll_to_section("services"));
    let to_contact = Callback::from(|_: MouseEvent| scroll_to_section("contact"));

    html! {
        <div class="landing">
            <style>
            {r#".landing {
                min-height: 100vh;
                background: #0a0a0b;
                color: #cbd5e1;
                font-family: system-ui, -apple-system, sans-serif;
                overflow-x: hidden;
            }
            .landing h1, .landing h2, .landing h3 { font-family: Georgia, serif; color: #fff; }
            .hero {
                padding: 6rem 1.25rem 2.5rem;
                max-width: 80rem;
                margin: 0 auto;
                display: grid;
                gap: 2rem;
            }
            @media (min-width: 1024px) {
                .hero { grid-template-columns: 1fr 1fr; align-items: start; padding-top: 7rem; }
            }
            .hero-copy { text-align: center; animation: rise 0.5s ease-out; }
            .hero h1 { font-size: 2rem; line-height: 1.2; margin-bottom: 1.25rem; }
            .hero h1 em { display: block; margin-top: 0.5rem; color: rgba(253, 230, 138, 0.9); font-weight: 300; }
            .hero-lead { font-size: 1.125rem; color: #94a3b8; }
            .stats {
                display: flex;
                justify-content: center;
                gap: 2rem;
                border-top: 1px solid rgba(255, 255, 255, 0.1);
                padding-top: 1.25rem;
                margin: 1.5rem auto 0;
                max-width: 28rem;
            }
            .stat { min-width: 100px; }
            .stat strong { display: block; font-size: 2.25rem; color: #fff; font-family: Georgia, serif; }
            .stat span { font-size: 11px; text-transform: uppercase; letter-spacing: 0.05em; color: #94a3b8; font-weight: bold; }
            .direct-contact {
                margin: 2.5rem auto 0;
                max-width: 28rem;
                display: flex;
                flex-direction: column;
                gap: 1rem;
                scroll-margin-top: 5rem;
            }
            .direct-contact a {
                display: flex;
                align-items: center;
                justify-content: center;
                gap: 0.75rem;
                padding: 1.25rem;
                border-radius: 12px;
                font-weight: bold;
                font-size: 1.25rem;
                text-decoration: none;
            }
            .call-button { background: #fbbf24; color: #000; }
            .whatsapp-button { background: #25D366; color: #fff; }
            .section { padding: 3rem 1.25rem; }
            .section-inner { max-width: 80rem; margin: 0 auto; }
            .section h2 { font-size: 1.75rem; text-align: center; margin-bottom: 2rem; }
            .services { background: #0e0e10; }
            .services-grid { display: grid; gap: 1rem; grid-template-columns: 1fr; }
            @media (min-width: 640px) { .services-grid { grid-template-columns: repeat(2, 1fr); } }
            @media (min-width: 1024px) { .services-grid { grid-template-columns: repeat(3, 1fr); } }
            .service-card {
                background: #0a0a0b;
                padding: 1.5rem;
                border: 1px solid rgba(255, 255, 255, 0.05);
                border-radius: 16px;
                transition: transform 0.2s;
            }
            .service-card:hover { transform: translateY(-3px); }
            .service-icon { font-size: 1.75rem; display: block; margin-bottom: 0.75rem; }
            .service-card h3 { font-size: 1.125rem; margin-bottom: 0.5rem; }
            .service-card p { font-size: 15px; color: #94a3b8; line-height: 1.6; }
            .about { border-top: 1px solid rgba(255, 255, 255, 0.05); background: #0a0a0c; }
            .about-copy { max-width: 48rem; margin: 0 auto 2rem; line-height: 1.7; }
            .about-copy p { margin-bottom: 1.25rem; }
            .map-frame {
                height: 300px;
                width: 100%;
                border-radius: 16px;
                overflow: hidden;
                border: 1px solid rgba(255, 255, 255, 0.1);
            }
            @media (min-width: 1024px) { .map-frame { height: 350px; } }
            .map-frame iframe { width: 100%; height: 100%; border: 0; }
            .landing-footer {
                padding: 2rem 1.25rem;
                border-top: 1px solid rgba(255, 255, 255, 0.05);
                text-align: center;
                background: #080809;
                font-size: 0.75rem;
                letter-spacing: 1.3px;
                text-transform: uppercase;
                color: #64748b;
            }
            .landing-footer button {
                background: none;
                border: none;
                color: #94a3b8;
                font-size: 0.75rem;
                cursor: pointer;
                padding: 0.4rem 0.75rem;
            }
            .landing-footer button:hover { color: #fcd34d; }
            @keyframes rise {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }"#}
            </style>

            <FloatingActions profile={profile} />

            <section class="hero">
                <div class="hero-copy">
                    <h1>
                        {"Estamos para defenderlo "}
                        <em>{"en sus asuntos legales"}</em>
                    </h1>
                    <p class="hero-lead">{"Lo contactamos de inmediato con un especialista para su caso"}</p>

                    <div class="stats">
                        <div class="stat">
                            <strong>{ profile.stats.years }</strong>
                            <span>{"Años de Experiencia"}</span>
                        </div>
                        <div class="stat">
                            <strong>{ profile.stats.success_rate }</strong>
                            <span>{"Sentencias Favorables"}</span>
                        </div>
                    </div>

                    <div id="contact" class="direct-contact">
                        <h3>{"Contacto Directo"}</h3>
                        <a
                            class="call-button"
                            href={profile.tel_link()}
                            aria-label={format!("Llamar a {}", profile.display_phone)}
                        >
                            {"📞 "}{ profile.display_phone }
                        </a>
                        <a
                            class="whatsapp-button"
                            href={profile.whatsapp_link()}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Contactar por WhatsApp"
                        >
                            {"💬 Enviar WhatsApp"}
                        </a>
                        <p>{"Llámenos ahora para una consulta urgente"}</p>
                    </div>
                </div>

                <ContactForm />
            </section>

            <section id="services" class="section services">
                <div class="section-inner">
                    <h2>{"Nuestras Áreas de Especialización"}</h2>
                    <div class="services-grid">
                        { for profile.services.iter().map(render_service) }
                    </div>
                </div>
            </section>

            <section id="about" class="section about">
                <div class="section-inner">
                    <h2>{"Sobre Nosotros"}</h2>
                    <div class="about-copy">
                        { for profile.about.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
                        <p>
                            {format!(
                                "Con un historial del {} de sentencias favorables, nos enorgullece ser la primera opción para individuos y empresas que buscan representación legal confiable en {} y sus alrededores.",
                                profile.stats.success_rate,
                                profile.location,
                            )}
                        </p>
                    </div>
                    <div class="map-frame">
                        <iframe
                            src={profile.map_url}
                            title="Ubicación de oficinas"
                            loading="lazy"
                            allowfullscreen=true
                            aria-label={format!("Mapa de ubicación en {}", profile.location)}
                        />
                    </div>
                </div>
            </section>

            <footer class="landing-footer">
                <p>
                    {format!("© {} {}", year, profile.name)}
                    <br />
                    {format!("Abogados especialistas en {}", profile.location)}
                </p>
                <div>
                    <button onclick={to_services}>{"Áreas de Práctica"}</button>
                    <button onclick={to_contact}>{"Contacto"}</button>
                </div>
            </footer>
        </div>
    }
}

fn render_service(service: &Service) -> Html {
    html! {
        <div class="service-card" key={service.title}>
            <span class="service-icon">{ service.icon.glyph() }</span>
            <h3>{ service.title }</h3>
            <p>{ service.description }</p>
        </div>
    }
}
