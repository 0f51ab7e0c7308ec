use crate::components::main::Main;
use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Main>
            <section class="min-h-screen flex items-center justify-center px-6 py-32 text-center" data-testid="not-found">
                <div class="max-w-3xl">
                    <h1 class="text-6xl font-bold text-slate-900 mb-6">"Page not found"</h1>
                    <p class="text-xl text-slate-600 mb-10 leading-relaxed">
                        "This plot is still unmapped. The farms are this way."
                    </p>
                    <a href="/" class="farmland-button text-white font-semibold px-8 py-3 rounded-lg">
                        "Back to Central Vista Farms"
                    </a>
                </div>
            </section>
        </Main>
    }
}
