use leptos::prelude::*;
use leptos_router::components::A;

const FEATURES: [&str; 5] = [
    "📊 Crime data from NYC Open Data, updated bi-weekly",
    "🗺️ Interactive map with borough filters",
    "🔖 Bookmark crimes you want to track",
    "💬 Drop anonymous comments by location",
    "🔍 Insights coming soon!",
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-container">
            <h1>"🗽 Welcome to NYC Crime Tracker"</h1>
            <p>
                "See recent NYC crime complaints on a map, keep notes on the ones you care about, "
                "and share what you know about your borough."
            </p>

            <ul class="feature-list">
                {FEATURES.into_iter().map(|feature| view! { <li>{feature}</li> }).collect_view()}
            </ul>

            <div class="home-actions">
                <A href="/map">
                    <button class="btn-primary">"Open the Map"</button>
                </A>
                <A href="/crime">
                    <button class="btn-outlined">"Live Data"</button>
                </A>
            </div>
        </div>
    }
}
