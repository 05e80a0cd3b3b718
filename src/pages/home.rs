use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;

use crate::components::force_graph::{CategoryPalette, ForceGraphCanvas, WordGraph, build_graph};
use crate::components::legend::Legend;
use crate::components::search_box::SearchBox;
use crate::config::GraphConfig;
use crate::dictionary::search::search;
use crate::dictionary::{self, Dictionary};
use crate::error::LoadError;

#[derive(Clone, Debug)]
enum LoadState {
	Loading,
	Ready(Dictionary),
	Failed(LoadError),
}

/// What the search box shows and which record the graph emphasizes.
#[derive(Clone, Debug, Default, PartialEq)]
struct SearchView {
	text: String,
	highlight: Option<String>,
}

fn search_view(state: &LoadState, query: &str) -> SearchView {
	let LoadState::Ready(dict) = state else {
		return SearchView::default();
	};
	let outcome = search(dict.records(), query);
	SearchView {
		text: outcome.display_text().to_string(),
		highlight: outcome.matched().map(|r| r.id.clone()),
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let query_map = use_query_map();
	let config = GraphConfig::default()
		.with_max_words(query_map.with_untracked(|q| q.get("max")).as_deref());

	let load_state = RwSignal::new(LoadState::Loading);
	let url = config.data_url.clone();
	spawn_local(async move {
		let next = match dictionary::fetch(&url).await {
			Ok(dict) => {
				info!("loaded {} words from {}", dict.len(), url);
				LoadState::Ready(dict)
			}
			Err(err) => {
				error!("dictionary load failed: {}", err);
				LoadState::Failed(err)
			}
		};
		let _ = load_state.try_set(next);
	});

	let max_words = config.max_words;
	let graph = Memo::new(move |_| {
		load_state.with(|state| match state {
			LoadState::Ready(dict) => {
				let graph = build_graph(dict.records(), max_words, &mut CategoryPalette::default());
				info!(
					"graph built: {} nodes, {} links, {} categories",
					graph.data.nodes.len(),
					graph.data.links.len(),
					graph.legend.len()
				);
				graph
			}
			_ => WordGraph::default(),
		})
	});

	let query = RwSignal::new(String::new());
	let found = Memo::new(move |_| {
		let q = query.get();
		load_state.with(|state| search_view(state, &q))
	});

	view! {
		<div class="fullscreen-graph">
			{move || {
				load_state
					.with(|state| match state {
						LoadState::Loading => {
							view! { <p class="status">"Cargando diccionario…"</p> }.into_any()
						}
						LoadState::Failed(err) => {
							view! {
								<div class="status error">
									<h2>"No se pudo cargar el diccionario"</h2>
									<p>{err.to_string()}</p>
								</div>
							}
								.into_any()
						}
						LoadState::Ready(_) => {
							view! {
								<ForceGraphCanvas
									data=Signal::derive(move || graph.get().data)
									highlight=Signal::derive(move || found.get().highlight)
									config=config.clone()
									fullscreen=true
								/>
							}
								.into_any()
						}
					})
			}}
			<div class="graph-overlay">
				<h1>"Palabras"</h1>
				<p class="subtitle">"Arrastra los nodos, usa la rueda para hacer zoom."</p>
				<SearchBox query=query result=Signal::derive(move || found.get().text) />
				<Legend entries=Signal::derive(move || graph.get().legend) />
			</div>
		</div>
	}
}
