use crate::views::map::{
    icon::{marker_icons, ICON_ANCHOR, ICON_SIZE},
    map_marker_popup::MapMarkerPopup,
};
use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::{Incident, LatLong};

/// One pin per mappable incident; callers skip incidents without a position.
#[component]
pub fn MapMarker(incident: Incident, position: LatLong) -> impl IntoView {
    let icon_url = marker_icons().for_incident(&incident).to_string();

    view! {
        <Marker
            position=Position::new(position.lat, position.long)
            draggable=false
            icon_url=Some(icon_url)
            icon_size=Some(ICON_SIZE)
            icon_anchor=Some(ICON_ANCHOR)
        >
            <Popup>
                <MapMarkerPopup incident=incident />
            </Popup>
        </Marker>
    }
}
