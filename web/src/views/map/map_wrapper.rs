use leptos::prelude::*;
use shared_types::borough::filter_incidents;
use shared_types::{BoroughFilter, Incident, IncidentQuery, LatLong, NYC_CENTER};

use crate::{
    components::{comment_form::CommentsRefresh, ErrorView, LoadingView},
    server::fetch_incidents,
    views::map::{
        comments_panel::CommentsPanel, drop_down_boroughs::DropDownBoroughs, icon::LEGEND,
        map_renderer::MapRenderer,
    },
};

#[component]
pub fn CrimeMap() -> impl IntoView {
    let filter = RwSignal::new(BoroughFilter::All);
    let map_center = RwSignal::new(NYC_CENTER);
    provide_context(CommentsRefresh(RwSignal::new(0)));

    // Fetched once per mount; the borough filter runs over this window.
    let incidents = Resource::new(
        || (),
        |_| async move { fetch_incidents(IncidentQuery::map()).await },
    );

    view! {
        <div class="map-page">
            <div class="map-page__header">
                <h1>"🗺️ NYC Crime Map 🗽"</h1>
            </div>

            <div class="map-page__content">
                <aside class="map-page__sidebar">
                    <div class="filter-section">
                        <h3>"Location"</h3>
                        <Suspense fallback=|| view! { <span>"Loading boroughs..."</span> }>
                            {move || {
                                incidents.get().map(|result| {
                                    let loaded: Vec<Incident> = result.unwrap_or_default();
                                    view! { <DropDownBoroughs filter=filter incidents=loaded /> }
                                })
                            }}
                        </Suspense>
                    </div>

                    <CommentsPanel filter=filter center=map_center />
                </aside>

                <div class="map-page__map">
                    <Suspense fallback=|| view! { <LoadingView message="Loading Map..." /> }>
                        {move || {
                            incidents.get().map(|result| match result {
                                Ok(list) => view! {
                                    <MapContent incidents=list filter=filter center=map_center />
                                }.into_any(),
                                Err(err) => {
                                    leptos::logging::error!("There was an error fetching the crime data: {:?}", err);
                                    view! {
                                        <ErrorView
                                            message="Crime data is unavailable right now."
                                            on_retry=Callback::new(move |_| incidents.refetch())
                                        />
                                    }.into_any()
                                }
                            })
                        }}
                    </Suspense>

                    <div class="map-legend">
                        <h4>"Map Legend"</h4>
                        <div class="legend-items">
                            {LEGEND
                                .into_iter()
                                .map(|(modifier, label)| {
                                    view! {
                                        <div class="legend-item">
                                            <div class=format!("legend-marker legend-marker--{}", modifier)></div>
                                            <span>{label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Map plus the unmappable note for one fetched window. The borough filter
/// runs over `incidents` without refetching.
#[component]
fn MapContent(
    incidents: Vec<Incident>,
    filter: RwSignal<BoroughFilter>,
    center: RwSignal<LatLong>,
) -> impl IntoView {
    let visible = Memo::new(move |_| filter_incidents(&incidents, filter.get()));
    let unmappable = move || visible.with(|list| list.iter().filter(|i| !i.is_mappable()).count());

    view! {
        <MapRenderer incidents=visible center=center />
        <Show when=move || { unmappable() > 0 }>
            <p class="map-page__note">
                {move || format!("{} incidents could not be placed on the map.", unmappable())}
            </p>
        </Show>
    }
}
