use std::time::Duration;

use leptos::prelude::*;
use vista_leads::LeadFormConfig;

use crate::effects::next_slide;

struct Slide {
    image: &'static str,
    caption: &'static str,
}

static SLIDES: [Slide; 6] = [
    Slide {
        image: "/assets/slides/trust.jpg",
        caption: "Invest with Trust. It's That Simple.",
    },
    Slide {
        image: "/assets/slides/legacy-home.jpg",
        caption: "Legacy Home: Beyond a House, It's Your Heritage.",
    },
    Slide {
        image: "/assets/slides/family.jpg",
        caption: "To Spend Quality Time with Family",
    },
    Slide {
        image: "/assets/slides/spread-out.jpg",
        caption: "Don't Just Live, Spread Out.",
    },
    Slide {
        image: "/assets/slides/unplug.jpg",
        caption: "Unplug Together. Recharge Your Relationship.",
    },
    Slide {
        image: "/assets/slides/self-discovery.jpg",
        caption: "Nature's Path to Self-Discovery.",
    },
];

/// Rotating image carousel; the indicators jump straight to a slide.
#[component]
pub fn Carousel() -> impl IntoView {
    let interval = use_context::<LeadFormConfig>()
        .unwrap_or_default()
        .carousel_interval_ms;
    let (current, set_current) = signal(0usize);

    match set_interval_with_handle(
        move || set_current.update(|i| *i = next_slide(*i, SLIDES.len())),
        Duration::from_millis(u64::from(interval)),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => log::warn!("carousel will not rotate: {err:?}"),
    }

    view! {
        <div class="relative rounded-3xl overflow-hidden shadow-2xl aspect-[4/3]" data-testid="image-carousel">
            {SLIDES
                .iter()
                .enumerate()
                .map(|(index, slide)| {
                    view! {
                        <div class=move || {
                            if current.get() == index {
                                "absolute inset-0 transition-opacity duration-1000 opacity-100"
                            } else {
                                "absolute inset-0 transition-opacity duration-1000 opacity-0"
                            }
                        }>
                            <img src=slide.image alt=slide.caption class="w-full h-full object-cover" />
                            <div class="absolute inset-0 bg-gradient-to-t from-black/70 via-transparent to-transparent"></div>
                            <p class="absolute bottom-16 left-8 right-8 text-white text-2xl sm:text-3xl font-bold">
                                {slide.caption}
                            </p>
                        </div>
                    }
                })
                .collect_view()}

            <div class="absolute bottom-6 left-0 right-0 flex justify-center gap-2">
                {(0..SLIDES.len())
                    .map(|index| {
                        view! {
                            <button
                                aria-label=format!("Go to slide {}", index + 1)
                                class=move || {
                                    if current.get() == index {
                                        "h-2 w-8 rounded-full bg-white transition-all"
                                    } else {
                                        "h-2 w-2 rounded-full bg-white/50 transition-all"
                                    }
                                }
                                on:click=move |_| set_current.set(index)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
