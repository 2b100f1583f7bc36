use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// Error banner for a failed fetch. With `on_retry` set it offers to run the
/// fetch again.
#[component]
pub fn ErrorView(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            <span>{message}</span>
            {on_retry.map(|retry| view! {
                <button class="btn-outlined" on:click=move |_| retry.run(())>
                    "Try again"
                </button>
            })}
        </MessageBar>
    }
}
