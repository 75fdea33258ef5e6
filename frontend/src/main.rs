use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod site;
mod utils;
mod components {
    pub mod contact_form;
    pub mod contact_models;
    pub mod floating_actions;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;
use site::FirmProfile;
use utils::{scroll_to_section, use_scrolled_past};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing profile={site::active_profile()} /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub profile: &'static FirmProfile,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled_past(10.0);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Closes the mobile menu before jumping to a section.
    let go_to = |section: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(section);
        })
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>
            {r#".top-nav {
                position: fixed;
                top: 0;
                width: 100%;
                z-index: 110;
                border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                background: rgba(10, 10, 11, 0.95);
                backdrop-filter: blur(16px);
            }
            .top-nav.scrolled { box-shadow: 0 4px 20px rgba(0, 0, 0, 0.4); }
            .nav-content {
                max-width: 80rem;
                margin: 0 auto;
                padding: 0 1.25rem;
                height: 4rem;
                display: flex;
                justify-content: space-between;
                align-items: center;
            }
            .nav-brand { display: flex; align-items: center; gap: 0.75rem; min-width: 0; }
            .nav-brand-mark { font-size: 1.6rem; }
            .nav-brand strong { color: #fff; font-family: Georgia, serif; font-size: 0.875rem; letter-spacing: 0.05em; display: block; }
            .nav-brand small { font-size: 10px; color: rgba(251, 191, 36, 0.8); letter-spacing: 1.3px; text-transform: uppercase; font-weight: bold; }
            .nav-links { display: none; align-items: center; gap: 1.5rem; }
            .nav-link { background: none; border: none; color: #cbd5e1; font-size: 11px; text-transform: uppercase; letter-spacing: 0.1em; cursor: pointer; }
            .nav-cta {
                background: rgba(251, 191, 36, 0.1);
                border: 1px solid rgba(251, 191, 36, 0.3);
                color: #fbbf24;
                padding: 0.5rem 1rem;
                font-size: 10px;
                letter-spacing: 0.1em;
                border-radius: 8px;
                cursor: pointer;
            }
            .burger-menu { background: none; border: none; color: #fff; font-size: 1.5rem; cursor: pointer; }
            .mobile-menu {
                display: flex;
                flex-direction: column;
                gap: 1rem;
                padding: 1.25rem;
                background: #0e0e10;
                border-bottom: 1px solid rgba(255, 255, 255, 0.1);
            }
            .mobile-menu button {
                background: none;
                border: none;
                color: #cbd5e1;
                padding: 0.9rem;
                text-transform: uppercase;
                letter-spacing: 0.05em;
                cursor: pointer;
            }
            .mobile-menu .mobile-cta { background: #fbbf24; color: #000; font-weight: bold; border-radius: 8px; }
            @media (min-width: 768px) {
                .nav-links { display: flex; }
                .burger-menu, .mobile-menu { display: none; }
            }"#}
            </style>
            <div class="nav-content">
                <div class="nav-brand">
                    <span class="nav-brand-mark">{"⚖️"}</span>
                    <div>
                        <strong>{ props.profile.name }</strong>
                        <small>{ props.profile.tagline }</small>
                    </div>
                </div>

                <div class="nav-links">
                    <button class="nav-link" onclick={go_to("services")}>{"Práctica"}</button>
                    <button class="nav-cta" onclick={go_to("contact")}>{"CONTACTO"}</button>
                </div>

                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label={if *menu_open { "Cerrar menú" } else { "Abrir menú" }}
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    <button onclick={go_to("services")}>{"Áreas de Práctica"}</button>
                    <button onclick={go_to("about")}>{"Sobre Nosotros"}</button>
                    <button class="mobile-cta" onclick={go_to("contact")}>{"CONTACTO"}</button>
                </div>
            }
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav profile={site::active_profile()} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application, intake endpoint {}", config::contact_endpoint());
    yew::Renderer::<App>::new().render();
}
