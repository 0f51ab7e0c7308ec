use crate::components::{footer::Footer, header::Header, sticky_cta::StickyCta};
use leptos::prelude::*;

#[component]
pub fn Main(children: Children) -> impl IntoView {
    view! {
        <main>

        <div class="App farmland-theme min-h-screen">
            <Header />

            {children()}

            <Footer />
            <StickyCta />
        </div>
        </main>
    }
}
