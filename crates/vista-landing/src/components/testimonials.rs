use leptos::prelude::*;

struct Testimonial {
    name: &'static str,
    quote: &'static str,
    rating: usize,
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sreepriya H",
        quote: "The team explained everything with honesty and clarity. Agrocorp's managed farmland model gives us real peace of mind, our land's cared for, even when we're not around.",
        rating: 5,
    },
    Testimonial {
        name: "Manoj Inamdar",
        quote: "Loved the concept of managed farmlands with all the comforts of a gated community. The site was green, well kept, and beautifully planned, an ideal investment and weekend escape.",
        rating: 5,
    },
    Testimonial {
        name: "Gita Vijaykumar",
        quote: "Loved the idea of owning a managed farm. Big thanks to Syed for arranging our visit and to Deepak for his patient walkthrough. We had a great experience, our puppy had the best time too!",
        rating: 5,
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="py-32 bg-white relative overflow-hidden" data-testid="testimonials-section">
            <div class="max-w-6xl mx-auto px-6 relative z-10">
                <div class="text-center mb-20 scroll-animate">
                    <span class="text-sm font-semibold uppercase tracking-wide text-olive-900">"Client Success Stories"</span>
                    <h2 class="text-4xl sm:text-5xl lg:text-6xl font-bold text-slate-900 mb-6">"What Our Clients Say"</h2>
                    <p class="text-lg sm:text-xl text-slate-600">"Real experiences from satisfied landowners"</p>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(index, t)| {
                            view! {
                                <div class="testimonial-card-modern scroll-animate flex flex-col" data-testid=format!("testimonial-card-{index}")>
                                    <div class="flex gap-1 mb-4 text-amber-400">{"★".repeat(t.rating)}</div>
                                    <p class="text-slate-700 leading-relaxed flex-grow mb-6">"\u{201c}"{t.quote}"\u{201d}"</p>
                                    <div class="flex items-center gap-4">
                                        <div class="w-12 h-12 rounded-full flex items-center justify-center bg-olive-100">
                                            <span class="text-2xl font-bold text-olive-900">{t.name.chars().next().unwrap_or(' ').to_string()}</span>
                                        </div>
                                        <p class="font-bold text-slate-900">{t.name}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
