use crate::components::{
    carousel::Carousel, lead_form::LeadForm, main::Main, project_tabs::ProjectTabs,
    testimonials::Testimonials,
};
use crate::effects::{observe_scroll_animations, scroll_to_form, use_pointer_offset};
use leptos::prelude::*;

const STRATEGY: [(&str, &str); 4] = [
    (
        "Location Superiority",
        "60 Mins from Bangalore International Airport, bang on NH44 and just 7 mins from upcoming Bangalore-Vijayawada Expressway",
    ),
    (
        "Tropical Themed Community",
        "28 Acre of themed community with only 101 premium plots",
    ),
    (
        "Clear Title Guarantee",
        "Every plot is vetted on our multi-stage legal checklist before public offering. Your investment is safe, guaranteed.",
    ),
    (
        "Modern Infrastructure",
        "Wide open spaces, curated amenities, and nature all around, beautifully managed to stay pristine, effortless, and alive.",
    ),
];

/// Landing page for Central Vista Farms
#[component]
pub fn Home() -> impl IntoView {
    let pointer = use_pointer_offset();

    // Runs after the view is mounted, so every `.scroll-animate` exists.
    Effect::new(move |_| observe_scroll_animations());

    view! {
        <Main>

            // Hero Section
            <section class="relative min-h-screen flex items-center overflow-hidden" data-testid="hero-section">
                <div
                    class="absolute inset-0 bg-cover bg-center scale-110 transition-transform duration-300"
                    style=move || {
                        let (x, y) = pointer.get();
                        format!("background-image: url('/assets/hero.jpg'); transform: translate({x}px, {y}px)")
                    }
                ></div>
                <div class="absolute inset-0 bg-gradient-to-r from-white/90 via-white/70 to-transparent"></div>

                <div class="relative z-10 max-w-7xl mx-auto px-6 py-32">
                    <div class="max-w-3xl scroll-animate">
                        <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold text-slate-900 mb-6 leading-tight">
                            "Own a Managed Farmhouse near Bangalore"
                        </h1>
                        <p class="text-xl text-slate-700 mb-10 leading-relaxed">
                            "101 premium plots on 28 acres of lush green, 60 minutes from Bangalore International Airport."
                        </p>
                        <button
                            class="farmland-button text-white font-semibold px-10 py-4 rounded-lg text-lg"
                            data-testid="hero-cta"
                            on:click=move |_| scroll_to_form()
                        >
                            "Get Investment Strategy →"
                        </button>
                    </div>
                </div>
            </section>

            // Why a farmhouse
            <section id="investment-strategy" class="py-32 bg-white">
                <div class="max-w-7xl mx-auto px-6 grid lg:grid-cols-2 gap-16 items-center">
                    <div class="scroll-animate">
                        <h2 class="text-4xl sm:text-5xl font-bold text-slate-900 mb-6">
                            "Why do you need to own a farmhouse?"
                        </h2>
                        <p class="text-lg text-slate-600 leading-relaxed">
                            "A weekend home, a legacy for your family and an asset that grows with the land."
                        </p>
                    </div>
                    <div class="scroll-animate">
                        <Carousel />
                    </div>
                </div>
            </section>

            // Current project
            <section id="current-project" class="py-32 bg-olive-50">
                <div class="max-w-7xl mx-auto px-6">
                    <div class="text-center mb-16 scroll-animate">
                        <h2 class="text-4xl sm:text-5xl lg:text-6xl font-bold text-slate-900 mb-6">"Central Vista Farms"</h2>
                        <p class="text-lg sm:text-xl text-slate-600">"Prime Location. Limited Plots Available."</p>
                    </div>

                    <div class="grid md:grid-cols-2 gap-8 mb-12 scroll-animate">
                        {STRATEGY
                            .into_iter()
                            .map(|(title, desc)| view! {
                                <div class="glass-card-light rounded-2xl p-8 hover:shadow-xl transition-all duration-300 border-l-4 border-olive-700">
                                    <h3 class="text-xl font-bold text-slate-900 mb-2">{title}</h3>
                                    <p class="text-slate-600 leading-relaxed">{desc}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>

                    <div class="scroll-animate">
                        <ProjectTabs />
                    </div>
                </div>
            </section>

            // Contact
            <section id="contact" class="py-32 bg-white">
                <div class="max-w-2xl mx-auto px-6">
                    <div class="text-center mb-12 scroll-animate">
                        <h2 class="text-4xl sm:text-5xl font-bold text-slate-900 mb-4">"Get Your Investment Strategy"</h2>
                        <p class="text-lg text-slate-600">"Leave your details and our team will call you back."</p>
                    </div>
                    <div class="glass-card-light rounded-3xl p-8 sm:p-10 shadow-xl">
                        <LeadForm />
                    </div>
                </div>
            </section>

            <Testimonials />

        </Main>
    }
}
