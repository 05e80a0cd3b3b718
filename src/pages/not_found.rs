use leptos::prelude::*;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="status">
			<h1>"Página no encontrada"</h1>
			<a href="/">"Volver al grafo"</a>
		</div>
	}
}
