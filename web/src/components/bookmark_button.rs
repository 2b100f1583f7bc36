use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::bookmark::{ALREADY_BOOKMARKED, BOOKMARKED, BOOKMARK_FAILED};
use shared_types::{BookmarkOutcome, Incident, NewBookmark};
use thaw::{MessageBar, MessageBarIntent};

use crate::server_bookmarks::create_bookmark;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Notice {
    Saved,
    Duplicate,
    Failed,
}

impl Notice {
    fn intent(self) -> MessageBarIntent {
        match self {
            Notice::Saved => MessageBarIntent::Success,
            Notice::Duplicate => MessageBarIntent::Warning,
            Notice::Failed => MessageBarIntent::Error,
        }
    }

    fn text(self) -> &'static str {
        match self {
            Notice::Saved => BOOKMARKED,
            Notice::Duplicate => ALREADY_BOOKMARKED,
            Notice::Failed => BOOKMARK_FAILED,
        }
    }
}

#[component]
pub fn BookmarkButton(
    /// The incident whose snapshot gets saved
    incident: Incident,
) -> impl IntoView {
    let can_bookmark = incident.can_bookmark();
    let payload = NewBookmark::from_incident(&incident);

    // Disabled while the POST is in flight so a double click sends one request.
    let is_loading = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let handle_click = move |_| {
        let Some(payload) = payload.clone() else {
            return;
        };
        is_loading.set(true);
        notice.set(None);

        spawn_local(async move {
            let result = match create_bookmark(payload).await {
                Ok(BookmarkOutcome::Created(_)) => Notice::Saved,
                Ok(BookmarkOutcome::AlreadyBookmarked) => Notice::Duplicate,
                Err(e) => {
                    leptos::logging::error!("There was an error trying to bookmark the crime: {:?}", e);
                    Notice::Failed
                }
            };
            notice.set(Some(result));
            is_loading.set(false);
        });
    };

    view! {
        <div class="bookmark-action">
            <button
                class="bookmark-button"
                on:click=handle_click
                disabled=move || is_loading.get() || !can_bookmark
                title=if can_bookmark { "Save this incident" } else { "This record has no complaint number" }
            >
                {move || if is_loading.get() { "Saving..." } else { "📌 Bookmark This" }}
            </button>
            {move || {
                notice
                    .get()
                    .map(|notice| {
                        view! { <MessageBar intent=notice.intent()>{notice.text()}</MessageBar> }
                    })
            }}
        </div>
    }
}
