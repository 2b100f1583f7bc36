use leptos::prelude::*;
use shared_types::borough::comment_area;
use shared_types::Incident;
use thaw::{Label, LabelSize};

use crate::components::{BookmarkButton, CommentForm};

#[component]
pub fn MapMarkerPopup(incident: Incident) -> impl IntoView {
    let area = comment_area(&incident.borough);
    let position = incident.position;
    let offense = incident.offense.clone();
    let premise = incident.premise.clone();
    let reported = format!("{} — {}", incident.borough, incident.report_date);
    let category = format!("{} · {}", incident.law_category, incident.status);
    let location = incident.occurrence_location.clone();
    let station = incident.station_name.clone();

    view! {
        <div class="incident-popup">
            <Label size=LabelSize::Large>{offense}</Label>
            <p class="incident-popup__premise">{premise}</p>
            <p>{reported}</p>
            <p>{category}</p>
            <p class="incident-popup__location">{location}</p>
            {station.map(|station| view! { <p>{format!("Nearby station: {}", station)}</p> })}
            <BookmarkButton incident=incident />
            {match area {
                Some(area) => view! { <CommentForm area=area.to_string() position=position /> }.into_any(),
                None => view! {
                    <p class="comments-hint">"Comments need a known borough."</p>
                }.into_any(),
            }}
        </div>
    }
}
