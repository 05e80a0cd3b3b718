//! Turns the word list into the node/link model drawn by the canvas.

use std::collections::HashSet;

use super::palette::CategoryPalette;
use super::types::{
	GraphData, GraphLink, GraphNode, NodeKind, ROOT_ID, category_node_id, source_node_id,
	target_node_id,
};
use crate::dictionary::WordRecord;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
	pub category: String,
	pub color: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WordGraph {
	pub data: GraphData,
	/// Categories present in the graph, in first-seen order.
	pub legend: Vec<LegendEntry>,
}

/// Build the graph from the first `max_words` records.
pub fn build_graph(
	records: &[WordRecord],
	max_words: usize,
	palette: &mut CategoryPalette,
) -> WordGraph {
	let kept = &records[..records.len().min(max_words)];

	let mut seen = HashSet::new();
	let legend: Vec<LegendEntry> = kept
		.iter()
		.filter(|r| seen.insert(r.categoria.as_str()))
		.map(|r| LegendEntry {
			category: r.categoria.clone(),
			color: palette.color_for(&r.categoria).to_string(),
		})
		.collect();

	let color_of = |category: &str| {
		legend
			.iter()
			.find(|e| e.category == category)
			.map(|e| e.color.clone())
	};

	let mut nodes = Vec::with_capacity(1 + legend.len() + 2 * kept.len());
	let mut links = Vec::with_capacity(legend.len() + 2 * kept.len());

	nodes.push(GraphNode {
		id: ROOT_ID.into(),
		label: "palabra".into(),
		kind: NodeKind::Root,
		color: None,
	});
	for entry in &legend {
		let id = category_node_id(&entry.category);
		nodes.push(GraphNode {
			id: id.clone(),
			label: entry.category.clone(),
			kind: NodeKind::Category,
			color: Some(entry.color.clone()),
		});
		links.push(GraphLink {
			source: ROOT_ID.into(),
			target: id,
			record_id: None,
		});
	}

	for record in kept {
		let color = color_of(&record.categoria);
		let (es, ng) = (source_node_id(&record.id), target_node_id(&record.id));
		let category = category_node_id(&record.categoria);

		nodes.push(GraphNode {
			id: es.clone(),
			label: record.es.clone(),
			kind: NodeKind::Source,
			color: color.clone(),
		});
		nodes.push(GraphNode {
			id: ng.clone(),
			label: record.ng.clone(),
			kind: NodeKind::Target,
			color,
		});

		links.push(GraphLink {
			source: category,
			target: es.clone(),
			record_id: None,
		});
		links.push(GraphLink {
			source: es,
			target: ng,
			record_id: Some(record.id.clone()),
		});
	}

	WordGraph {
		data: GraphData { nodes, links },
		legend,
	}
}
