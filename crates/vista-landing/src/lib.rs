use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use vista_leads::LeadFormConfig;

// Modules
mod components;
pub mod effects;
mod pages;

use pages::home::Home;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = LeadFormConfig::from_build_env();
    if let Err(err) = config.validate() {
        log::error!("ignoring invalid build configuration: {err}");
    }
    provide_context(config);

    view! {
        <Html attr:lang="en" attr:dir="ltr" />

        // sets the document title
        <Title text="Central Vista Farms | Managed Farmland near Bangalore" />

        // injects metadata in the <head> of the page
        <Meta charset="UTF-8" />
        <Meta name="viewport" content="width=device-width, initial-scale=1.0" />
        <Meta
            name="description"
            content="101 premium managed farm plots on 28 acres, 60 minutes from Bangalore International Airport."
        />

        <Router>
            <Routes fallback=|| view! { <pages::not_found::NotFound />}>
                <Route path=path!("/") view=Home />
            </Routes>
        </Router>
    }
}
