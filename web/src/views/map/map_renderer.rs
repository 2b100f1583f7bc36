use leptos::prelude::*;
use leptos_leaflet::{leaflet::Map, prelude::*};
use shared_types::{Incident, LatLong};

use crate::views::map::map_marker::MapMarker;

#[component]
pub fn MapRenderer(
    /// Incidents left after the borough filter
    incidents: Memo<Vec<Incident>>,
    /// Moves the view when set, e.g. from a comment
    center: RwSignal<LatLong>,
) -> impl IntoView {
    let initial = center.get_untracked();
    let map: JsRwSignal<Option<Map>> = JsRwSignal::new_local(None::<Map>);

    Effect::new(move |_| {
        let LatLong { lat, long } = center.get();
        if let Some(map) = map.get_untracked() {
            map.set_view(&Position::new(lat, long).as_lat_lng(), map.get_zoom());
        }
    });

    let markers = Memo::new(move |_| {
        incidents.with(|list| {
            list.iter()
                .filter_map(|incident| incident.position.map(|p| (incident.clone(), p)))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <MapContainer
            style="height: 100%; width: 100%; flex: 1"
            center=Position::new(initial.lat, initial.long)
            zoom=12.0
            set_view=true
            map=map.write_only()
        >
            <TileLayer
                url="https://tile.openstreetmap.org/{z}/{x}/{y}.png"
                attribution="&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            />
            <For
                each=move || markers.get()
                key=|(incident, _)| incident.key.clone()
                children=move |(incident, position)| {
                    view! { <MapMarker incident=incident position=position /> }
                }
            />
        </MapContainer>
    }
}
