use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::{LatLong, NewComment};

use crate::server::post_comment;

/// Bumped after a comment is posted so open comment lists refetch.
#[derive(Clone, Copy)]
pub struct CommentsRefresh(pub RwSignal<u32>);

#[component]
pub fn CommentForm(
    /// Borough the comment is filed under
    area: String,
    position: Option<LatLong>,
) -> impl IntoView {
    let refresh = use_context::<CommentsRefresh>();
    let text = RwSignal::new(String::new());
    let is_posting = RwSignal::new(false);
    let posted = RwSignal::new(false);
    let placeholder = format!("Leave an anonymous comment about {}", area);

    let handle_submit = move |_| {
        let Some(comment) = NewComment::new(area.clone(), &text.get_untracked(), position) else {
            return;
        };
        is_posting.set(true);
        posted.set(false);

        spawn_local(async move {
            match post_comment(comment).await {
                Ok(_) => {
                    text.set(String::new());
                    posted.set(true);
                    if let Some(CommentsRefresh(counter)) = refresh {
                        counter.update(|n| *n += 1);
                    }
                }
                Err(e) => {
                    leptos::logging::error!("There was an error posting the comment: {:?}", e);
                }
            }
            is_posting.set(false);
        });
    };

    view! {
        <div class="comment-form">
            <textarea
                rows=2
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>
            <button
                class="comment-button"
                on:click=handle_submit
                disabled=move || is_posting.get() || text.with(|t| t.trim().is_empty())
            >
                "💬 Comment"
            </button>
            <Show when=move || posted.get()>
                <p class="comment-posted">"Comment posted."</p>
            </Show>
        </div>
    }
}
