use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectTab {
    Highlights,
    Masterplan,
    LocationAdvantages,
    Amenities,
}

impl ProjectTab {
    pub const ALL: [ProjectTab; 4] = [
        ProjectTab::Highlights,
        ProjectTab::Masterplan,
        ProjectTab::LocationAdvantages,
        ProjectTab::Amenities,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectTab::Highlights => "Highlights",
            ProjectTab::Masterplan => "Masterplan",
            ProjectTab::LocationAdvantages => "Location Advantages",
            ProjectTab::Amenities => "Amenities & Features",
        }
    }
}

const HIGHLIGHTS: [(&str, &str); 7] = [
    ("60 Minutes", "from Bangalore International Airport"),
    ("28 Acres", "of Lush Green"),
    ("Tropical Themed", "Community"),
    ("Modern", "Amenities & Features"),
    ("101 Premium", "Farm Plots"),
    ("Multiple Sizes", "7000, 8000 & 10000 sqft"),
    ("Approved with Plan Sanctions", "Fully Legal & Verified"),
];

const LOCATIONS: [(&str, &str); 9] = [
    ("Bangalore-Vijayawada Expressway", "7 Mins"),
    ("Bengaluru-Hyderabad Highway", "3 Mins"),
    ("NACIN Mega Campus", "12 Mins"),
    ("Penukonda Fort", "35 Mins"),
    ("BEL Mega Campus", "12 Mins"),
    ("Lepakshi Temple", "20 Mins"),
    ("APIIC Industrial Park", "12 Mins"),
    ("Puttaparthi Temple", "40 Mins"),
    ("Upcoming IT City", "10 Mins"),
];

const AMENITIES: [&str; 12] = [
    "Amphitheatre",
    "BBQ Zone",
    "Bonfire Pits",
    "Children Play Area",
    "Cycling Tracks",
    "Jogging Tracks",
    "Multipurpose Playgrounds",
    "Senior Citizens Park",
    "Stargazing Deck",
    "Themed Gardens",
    "Themed Water Bodies",
    "Yoga & Meditation Decks",
];

const FEATURES: [&str; 11] = [
    "12 Meter Internal Access Ways",
    "24x7 Security",
    "90% Green & Open Spaces",
    "Avenue Plantation",
    "CCTV Surveillance",
    "Centralised Water Storage",
    "On Site Assistance",
    "RCC Panel Boundary Wall",
    "Smart Drainage & Water Harvesting",
    "Smart Irrigation System",
    "Solar Street Lights",
];

fn tab_content(tab: ProjectTab) -> AnyView {
    match tab {
        ProjectTab::Highlights => view! {
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                {HIGHLIGHTS
                    .into_iter()
                    .map(|(title, detail)| view! {
                        <div class="flex flex-col items-center text-center p-6 rounded-xl bg-olive-50 hover:shadow-lg transition-shadow">
                            <p class="font-bold text-xl mb-1 text-olive-950">{title}</p>
                            <p class="text-sm text-slate-600">{detail}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        ProjectTab::Masterplan => view! {
            <div class="max-w-6xl mx-auto text-center">
                <h4 class="text-2xl sm:text-3xl font-bold mb-6 text-olive-950">"Where Vision Becomes Reality"</h4>
                <img
                    src="/assets/masterplan.jpg"
                    alt="Central Vista Farms Master Plan - Where Vision Becomes Reality"
                    class="w-full rounded-2xl shadow-xl"
                />
            </div>
        }
        .into_any(),
        ProjectTab::LocationAdvantages => view! {
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                {LOCATIONS
                    .into_iter()
                    .map(|(place, distance)| view! {
                        <div class="flex items-center justify-between p-4 rounded-xl bg-olive-50">
                            <span class="font-medium text-slate-800">{place}</span>
                            <span class="font-bold text-olive-900">{distance}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        ProjectTab::Amenities => view! {
            <div class="grid md:grid-cols-2 gap-10">
                <FactList title="Amenities" items=&AMENITIES />
                <FactList title="Features" items=&FEATURES />
            </div>
        }
        .into_any(),
    }
}

#[component]
fn FactList(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-xl font-bold mb-4 text-olive-950">{title}</h4>
            <ul class="grid grid-cols-2 gap-3">
                {items
                    .iter()
                    .map(|item| view! { <li class="text-sm text-slate-700">{*item}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Project facts, one tab visible at a time.
#[component]
pub fn ProjectTabs() -> impl IntoView {
    let (active, set_active) = signal(ProjectTab::Highlights);

    view! {
        <div class="glass-card-light rounded-3xl overflow-hidden shadow-xl" data-testid="project-tabs">
            <div class="flex flex-wrap border-b border-olive-100">
                {ProjectTab::ALL
                    .into_iter()
                    .map(|tab| view! {
                        <button
                            class=move || {
                                if active.get() == tab {
                                    "flex-1 px-6 py-4 text-sm font-semibold text-white bg-olive-700 transition-colors"
                                } else {
                                    "flex-1 px-6 py-4 text-sm font-semibold text-slate-600 hover:bg-olive-50 transition-colors"
                                }
                            }
                            on:click=move |_| set_active.set(tab)
                        >
                            {tab.label()}
                        </button>
                    })
                    .collect_view()}
            </div>
            <div class="p-8 sm:p-12">{move || tab_content(active.get())}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_in_display_order() {
        let labels: Vec<_> = ProjectTab::ALL.into_iter().map(ProjectTab::label).collect();
        assert_eq!(
            labels,
            ["Highlights", "Masterplan", "Location Advantages", "Amenities & Features"]
        );
    }
}
