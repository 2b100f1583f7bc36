use leptos::prelude::*;
use shared_types::IncidentQuery;

use crate::{
    components::{ErrorView, LoadingView},
    server::fetch_incidents,
};

/// Plain list of the newest complaints.
#[component]
pub fn LiveDataPage() -> impl IntoView {
    let incidents = Resource::new(
        || (),
        |_| async move { fetch_incidents(IncidentQuery::live_data()).await },
    );

    view! {
        <div class="live-data">
            <h1>"📊 Live NYC Crime Data"</h1>
            <Suspense fallback=|| view! { <LoadingView /> }>
                {move || {
                    incidents.get().map(|result| match result {
                        Ok(list) => view! {
                            <ul class="live-data__list">
                                {list.into_iter().map(|incident| view! {
                                    <li>
                                        <strong>{incident.offense}</strong>
                                        {format!(
                                            " — {} on {} · {}",
                                            incident.borough, incident.report_date, incident.premise
                                        )}
                                    </li>
                                }).collect_view()}
                            </ul>
                        }.into_any(),
                        Err(err) => {
                            leptos::logging::error!("There was an error fetching the data: {:?}", err);
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
        </div>
    }
}
