use leptos::prelude::*;
use shared_types::borough::count_for;
use shared_types::{BoroughFilter, Incident};
use thaw::{Combobox, ComboboxOption, Flex, FlexAlign, Label};

/// Borough select; option labels carry how many fetched incidents match.
#[component]
pub fn DropDownBoroughs(filter: RwSignal<BoroughFilter>, incidents: Vec<Incident>) -> impl IntoView {
    let selected_options: RwSignal<Option<String>> =
        RwSignal::new(Some(filter.get_untracked().to_string()));

    Effect::new(move |_| {
        if let Some(value) = selected_options.get() {
            match value.parse::<BoroughFilter>() {
                Ok(parsed) => filter.set(parsed),
                Err(err) => leptos::logging::error!("Ignoring borough selection: {}", err),
            }
        }
    });

    view! {
        <Flex vertical=true align=FlexAlign::Start>
            <Label>"Borough"</Label>
            <Combobox selected_options=selected_options placeholder="Filter by borough">
                {BoroughFilter::options()
                    .map(|option| {
                        let value = option.to_string();
                        let text = format!("{} ({})", value, count_for(&incidents, option));
                        view! { <ComboboxOption value=value text=text /> }
                    })
                    .collect_view()}
            </Combobox>
        </Flex>
    }
}
