use leptos::prelude::*;
use vista_leads::LeadFormConfig;

use crate::effects::{scroll_to_form, use_scroll_y};

/// Mobile-only bar that slides in once the hero is out of view.
#[component]
pub fn StickyCta() -> impl IntoView {
    let threshold = use_context::<LeadFormConfig>()
        .unwrap_or_default()
        .sticky_cta_threshold_px;
    let scroll_y = use_scroll_y();

    view! {
        <div
            class=move || {
                let position = if scroll_y.get() > threshold { "translate-y-0" } else { "translate-y-full" };
                format!("fixed bottom-0 left-0 right-0 bg-olive-950/95 backdrop-blur-xl text-white p-4 shadow-2xl transform transition-transform duration-500 z-50 md:hidden {position}")
            }
            data-testid="sticky-mobile-cta"
        >
            <button
                class="w-full farmland-button text-white font-semibold py-4 text-base rounded-lg"
                data-testid="sticky-cta-button"
                on:click=move |_| scroll_to_form()
            >
                "Get Investment Strategy →"
            </button>
        </div>
    }
}
