use yew::prelude::*;

use crate::site::FirmProfile;
use crate::utils::{scroll_to_section, use_scrolled_past};

const SHOW_AFTER_PX: f64 = 300.0;

#[derive(Properties, PartialEq)]
pub struct FloatingActionsProps {
    pub profile: &'static FirmProfile,
}

/// WhatsApp and contact shortcuts pinned to the corner once the hero is
/// scrolled away.
#[function_component(FloatingActions)]
pub fn floating_actions(props: &FloatingActionsProps) -> Html {
    let visible = use_scrolled_past(SHOW_AFTER_PX);

    if !visible {
        return html! {};
    }

    let to_contact = Callback::from(|_: MouseEvent| scroll_to_section("contact"));

    html! {
        <div class="floating-actions">
            <style>
            {r#".floating-actions {
                position: fixed;
                bottom: 1.25rem;
                right: 1.25rem;
                z-index: 100;
                display: flex;
                flex-direction: column;
                gap: 1rem;
                animation: float-in 0.3s ease-out;
            }
            .floating-actions a,
            .floating-actions button {
                width: 3.75rem;
                height: 3.75rem;
                border-radius: 50%;
                border: none;
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 1.6rem;
                box-shadow: 0 10px 25px rgba(0, 0, 0, 0.5);
                cursor: pointer;
                text-decoration: none;
            }
            .floating-whatsapp { background: #25D366; color: #fff; }
            .floating-contact { background: #fbbf24; color: #000; }
            @keyframes float-in {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }"#}
            </style>
            <a
                class="floating-whatsapp"
                href={props.profile.whatsapp_link()}
                target="_blank"
                rel="noopener noreferrer"
                aria-label="WhatsApp"
            >
                {"💬"}
            </a>
            <button class="floating-contact" onclick={to_contact} aria-label="Contacto">
                {"📞"}
            </button>
        </div>
    }
}
