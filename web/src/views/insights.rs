use leptos::prelude::*;

#[component]
pub fn InsightsPage() -> impl IntoView {
    view! {
        <div class="insights-container">
            <h1>"Coming Soon"</h1>
            <p>"Charts of the most common offenses and premises are on the way."</p>
        </div>
    }
}
