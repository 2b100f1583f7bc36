use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="footer">
            <p>{format!("© {} NYC Crime Tracker. Data from NYC Open Data.", year)}</p>
        </footer>
    }
}
