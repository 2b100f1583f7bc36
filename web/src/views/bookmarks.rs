use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use shared_types::bookmark::{remove_bookmark, replace_bookmark};
use shared_types::Bookmark;

use crate::{
    components::{ErrorView, LoadingView},
    server_bookmarks::{delete_bookmark, list_bookmarks, update_bookmark_note},
};

#[component]
pub fn BookmarksPage() -> impl IntoView {
    let bookmarks_resource = Resource::new(|| (), |_| async move { list_bookmarks().await });

    view! {
        <div class="bookmarks-container">
            <h1>"🔖 Saved Bookmarks"</h1>
            <Suspense fallback=|| view! {
                <LoadingView message="Loading your bookmarks..." />
            }>
                {move || {
                    bookmarks_resource.get().map(|result| match result {
                        Ok(list) => view! { <BookmarkList initial=list /> }.into_any(),
                        Err(e) => {
                            leptos::logging::error!("There was an error fetching the bookmarks: {:?}", e);
                            view! {
                                <ErrorView
                                    message="Bookmarks are unavailable right now."
                                    on_retry=Callback::new(move |_| bookmarks_resource.refetch())
                                />
                            }.into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Editable copy of the fetched bookmarks. Entries change only after the
/// store confirms.
#[component]
fn BookmarkList(initial: Vec<Bookmark>) -> impl IntoView {
    let navigate = use_navigate();

    let bookmarks = RwSignal::new(initial);
    // Which bookmark's note is open, and the live draft text
    let editing_id = RwSignal::new(None::<String>);
    let note_text = RwSignal::new(String::new());

    let on_delete = Callback::new(move |id: String| {
        spawn_local(async move {
            match delete_bookmark(id.clone()).await {
                Ok(()) => bookmarks.update(|list| {
                    remove_bookmark(list, &id);
                }),
                Err(e) => leptos::logging::error!("There was an error deleting the bookmark: {:?}", e),
            }
        });
    });

    let on_save = Callback::new(move |id: String| {
        let notes = note_text.get_untracked();
        spawn_local(async move {
            match update_bookmark_note(id, notes).await {
                Ok(updated) => {
                    bookmarks.update(|list| {
                        replace_bookmark(list, updated);
                    });
                    editing_id.set(None);
                    note_text.set(String::new());
                }
                Err(e) => leptos::logging::error!("Error updating note: {:?}", e),
            }
        });
    });

    move || {
        let list = bookmarks.get();
        if list.is_empty() {
            let navigate = navigate.clone();
            view! {
                <div class="bookmarks-empty">
                    <p>"No bookmarks yet."</p>
                    <button
                        class="btn-primary"
                        on:click=move |_| navigate("/map", Default::default())
                    >
                        "Find incidents on the map"
                    </button>
                </div>
            }.into_any()
        } else {
            view! {
                <div class="bookmark-grid">
                    {list.into_iter().map(|bookmark| view! {
                        <BookmarkCard
                            bookmark=bookmark
                            editing_id=editing_id
                            note_text=note_text
                            on_save=on_save
                            on_delete=on_delete
                        />
                    }).collect_view()}
                </div>
            }.into_any()
        }
    }
}

#[component]
fn BookmarkCard(
    bookmark: Bookmark,
    editing_id: RwSignal<Option<String>>,
    note_text: RwSignal<String>,
    on_save: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let id = bookmark.id.clone();
    let is_editing = {
        let id = id.clone();
        move || editing_id.with(|editing| editing.as_deref() == Some(id.as_str()))
    };
    let edit_id = id.clone();
    let save_id = id.clone();
    let current_notes = bookmark.editable_notes();
    let notes = bookmark.notes().to_string();
    let victim = bookmark.victim().summary();
    let suspect = bookmark.suspect().summary();
    let station = bookmark.station().map(str::to_string);
    let housing = bookmark.housing_development().map(str::to_string);

    view! {
        <div class="bookmark-card">
            <h3>{bookmark.offense()}</h3>
            <p><strong>"Category: "</strong>{bookmark.law_category()}</p>
            <p><strong>"Status: "</strong>{bookmark.status()}</p>
            <p>
                <strong>"Location: "</strong>
                {format!("{} — {}", bookmark.premise(), bookmark.occurrence_location())}
            </p>
            <p><strong>"Borough: "</strong>{bookmark.borough()}</p>
            <p><strong>"Reported: "</strong>{bookmark.report_date()}</p>
            {station.map(|s| view! { <p><strong>"Nearby Station: "</strong>{s}</p> })}
            {housing.map(|h| view! { <p><strong>"Housing Development: "</strong>{h}</p> })}
            <p><strong>"Victim: "</strong>{victim}</p>
            <p><strong>"Suspect: "</strong>{suspect}</p>

            <Show
                when=is_editing
                fallback=move || {
                    let edit_id = edit_id.clone();
                    let current_notes = current_notes.clone();
                    view! {
                        <p><strong>"Notes: "</strong>{notes.clone()}</p>
                        <button on:click=move |_| {
                            editing_id.set(Some(edit_id.clone()));
                            note_text.set(current_notes.clone());
                        }>
                            "✏️ Edit Note"
                        </button>
                    }
                }
            >
                <textarea
                    rows=3
                    class="bookmark-card__note-editor"
                    prop:value=move || note_text.get()
                    on:input=move |ev| note_text.set(event_target_value(&ev))
                ></textarea>
                <div class="edit-buttons">
                    <button on:click={
                        let save_id = save_id.clone();
                        move |_| on_save.run(save_id.clone())
                    }>"💾 Save"</button>
                    <button on:click=move |_| editing_id.set(None)>"❌ Cancel"</button>
                </div>
            </Show>

            <button class="bookmark-card__delete" on:click=move |_| on_delete.run(id.clone())>
                "🗑️ Delete"
            </button>
        </div>
    }
}
