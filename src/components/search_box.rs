use leptos::prelude::*;

/// Word input plus the line showing the translation (or "not found").
#[component]
pub fn SearchBox(
	query: RwSignal<String>,
	#[prop(into)] result: Signal<String>,
) -> impl IntoView {
	view! {
		<div class="search-box">
			<input
				type="text"
				placeholder="Buscar palabra…"
				autocomplete="off"
				prop:value=move || query.get()
				on:input=move |ev| query.set(event_target_value(&ev))
			/>
			<p class="search-result">{move || result.get()}</p>
		</div>
	}
}
