use leptos::prelude::*;
use shared_types::{BoroughFilter, Comment, LatLong};

use crate::{
    components::{comment_form::CommentsRefresh, ErrorView, LoadingView},
    server::list_comments,
};

/// Comments for the borough picked in the map filter. Clicking one with
/// coordinates recenters the map.
#[component]
pub fn CommentsPanel(filter: RwSignal<BoroughFilter>, center: RwSignal<LatLong>) -> impl IntoView {
    let refresh = use_context::<CommentsRefresh>().map(|CommentsRefresh(counter)| counter);

    let comments = Resource::new(
        move || (filter.get().borough(), refresh.map(|c| c.get()).unwrap_or_default()),
        move |(borough, _)| async move {
            match borough {
                Some(borough) => list_comments(borough.name().to_string()).await.map(Some),
                None => Ok(None),
            }
        },
    );

    view! {
        <div class="comments-panel">
            <h3>"Community Comments"</h3>
            <Suspense fallback=|| view! { <LoadingView message="Loading comments..." /> }>
                {move || {
                    comments.get().map(|result| match result {
                        Ok(None) => view! {
                            <p class="comments-hint">"Pick a borough to read its comments."</p>
                        }.into_any(),
                        Ok(Some(list)) if list.is_empty() => view! {
                            <p class="comments-hint">
                                {format!("No comments for {} yet.", filter.get_untracked())}
                            </p>
                        }.into_any(),
                        Ok(Some(list)) => view! {
                            <ul class="comments-list">
                                {list.into_iter().map(|comment| view! {
                                    <CommentItem comment=comment center=center />
                                }).collect_view()}
                            </ul>
                        }.into_any(),
                        Err(err) => {
                            leptos::logging::error!("There was an error fetching the comments: {:?}", err);
                            view! {
                                <ErrorView
                                    message="Could not load comments."
                                    on_retry=Callback::new(move |_| comments.refetch())
                                />
                            }.into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn CommentItem(comment: Comment, center: RwSignal<LatLong>) -> impl IntoView {
    let position = comment.position();

    view! {
        <li
            class="comments-list__item"
            class:locatable=position.is_some()
            on:click=move |_| {
                if let Some(position) = position {
                    center.set(position);
                }
            }
        >
            <span class="comments-list__text">{comment.text}</span>
            {position.map(|_| view! { <span class="comments-list__pin">"📍"</span> })}
        </li>
    }
}
