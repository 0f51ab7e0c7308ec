use leptos::prelude::*;
use vista_leads::LeadFormConfig;

use crate::effects::{document_height, scroll_progress, scroll_to_form, use_scroll_y, viewport_size};

/// Fixed header, solid once the page has scrolled, with a reading
/// progress bar under it.
#[component]
pub fn Header() -> impl IntoView {
    let threshold = use_context::<LeadFormConfig>()
        .unwrap_or_default()
        .header_solid_threshold_px;
    let scroll_y = use_scroll_y();
    let solid = move || scroll_y.get() > threshold;

    let progress = move || {
        let (_, viewport_height) = viewport_size();
        scroll_progress(scroll_y.get(), document_height(), viewport_height)
    };

    view! {
        <header class=move || {
            if solid() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white/95 backdrop-blur-xl shadow-lg border-b border-olive-100"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                <img src="/assets/agrocorp-logo.png" alt="Agrocorp" class="h-12 w-auto" />
                <nav class="hidden md:flex items-center gap-8">
                    <a
                        href="#current-project"
                        class=move || if solid() { "text-sm font-medium hover:underline text-olive-900" } else { "text-sm font-medium hover:underline text-slate-900" }
                    >
                        "Central Vista Farms"
                    </a>
                    <button class="farmland-button text-white font-semibold px-6 py-2 rounded-lg" on:click=move |_| scroll_to_form()>
                        "Get Started →"
                    </button>
                </nav>
                <button class="md:hidden farmland-button text-white font-semibold px-4 py-2 rounded-lg" on:click=move |_| scroll_to_form()>
                    "Get Started"
                </button>
            </div>
        </header>

        <div class="scroll-progress" style=move || format!("transform: scaleX({})", progress())></div>
    }
}
