use leptos::prelude::*;

use super::force_graph::LegendEntry;

/// Color key: one swatch and category name per entry.
#[component]
pub fn Legend(#[prop(into)] entries: Signal<Vec<LegendEntry>>) -> impl IntoView {
	view! {
		<div class="legend">
			<For
				each=move || entries.get()
				key=|entry| entry.category.clone()
				children=|entry| {
					view! {
						<div class="legend-item">
							<div class="legend-swatch" style:background-color=entry.color />
							<span>{entry.category}</span>
						</div>
					}
				}
			/>
		</div>
	}
}
