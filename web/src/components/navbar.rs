use leptos::prelude::*;
use leptos_router::components::A;

const LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/map", "Map"),
    ("/bookmarks", "Bookmarks"),
    ("/crime", "Live Data"),
    ("/insights", "Insights"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    // Hamburger menu state; only visible on narrow screens.
    let is_open = RwSignal::new(false);
    let close = move |_| is_open.set(false);

    view! {
        <nav class="navbar">
            <div class="navbar__brand">
                <A href="/" attr:class="navbar__logo" on:click=close>
                    "🗽 NYC Crime Tracker"
                </A>
            </div>

            <button
                class="navbar__hamburger"
                aria-label="Toggle navigation"
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                {(0..3)
                    .map(|_| {
                        view! { <span class="bar" class:open=move || is_open.get()></span> }
                    })
                    .collect_view()}
            </button>

            <ul class="navbar__links" class:active=move || is_open.get()>
                {LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <li>
                                <A href=href attr:class="navbar__link" on:click=close>
                                    {label}
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
