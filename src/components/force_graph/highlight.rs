//! Search highlighting: per-element styles keyed by node id, eased between
//! baseline and emphasis.

use std::collections::HashMap;

use super::types::{GraphData, source_node_id, target_node_id};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
	pub r: f64,
	pub g: f64,
	pub b: f64,
	pub a: f64,
}

impl Rgba {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self {
			r: r as f64,
			g: g as f64,
			b: b as f64,
			a: 1.0,
		}
	}

	const TRANSPARENT: Self = Self {
		r: 0.0,
		g: 0.0,
		b: 0.0,
		a: 0.0,
	};

	pub fn css(&self) -> String {
		format!(
			"rgba({}, {}, {}, {})",
			self.r.round(),
			self.g.round(),
			self.b.round(),
			self.a
		)
	}
}

const BLACK: Rgba = Rgba::rgb(0, 0, 0);
const RED: Rgba = Rgba::rgb(255, 0, 0);
const DARK_ORANGE: Rgba = Rgba::rgb(255, 140, 0);
const LINK_GRAY: Rgba = Rgba::rgb(0x99, 0x99, 0x99);

pub trait Lerp: Copy {
	fn lerp(a: Self, b: Self, t: f64) -> Self;
}

impl Lerp for f64 {
	fn lerp(a: Self, b: Self, t: f64) -> Self {
		a + (b - a) * t
	}
}

impl Lerp for Rgba {
	fn lerp(a: Self, b: Self, t: f64) -> Self {
		Self {
			r: f64::lerp(a.r, b.r, t),
			g: f64::lerp(a.g, b.g, t),
			b: f64::lerp(a.b, b.b, t),
			a: f64::lerp(a.a, b.a, t),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
	pub stroke: Rgba,
	pub stroke_width: f64,
	/// CSS font weight, 400 normal to 700 bold.
	pub font_weight: f64,
	pub label_fill: Rgba,
}

impl NodeStyle {
	pub const BASELINE: Self = Self {
		stroke: Rgba::TRANSPARENT,
		stroke_width: 0.0,
		font_weight: 400.0,
		label_fill: BLACK,
	};
	const SOURCE: Self = Self {
		stroke: BLACK,
		stroke_width: 3.0,
		font_weight: 700.0,
		label_fill: RED,
	};
	const TARGET: Self = Self {
		label_fill: DARK_ORANGE,
		..Self::SOURCE
	};
}

impl Lerp for NodeStyle {
	fn lerp(a: Self, b: Self, t: f64) -> Self {
		Self {
			stroke: Rgba::lerp(a.stroke, b.stroke, t),
			stroke_width: f64::lerp(a.stroke_width, b.stroke_width, t),
			font_weight: f64::lerp(a.font_weight, b.font_weight, t),
			label_fill: Rgba::lerp(a.label_fill, b.label_fill, t),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkStyle {
	pub stroke: Rgba,
	pub width: f64,
}

impl LinkStyle {
	pub const BASELINE: Self = Self {
		stroke: LINK_GRAY,
		width: 1.0,
	};
	const EMPHASIS: Self = Self {
		stroke: RED,
		width: 3.0,
	};
}

impl Lerp for LinkStyle {
	fn lerp(a: Self, b: Self, t: f64) -> Self {
		Self {
			stroke: Rgba::lerp(a.stroke, b.stroke, t),
			width: f64::lerp(a.width, b.width, t),
		}
	}
}

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// A style moving from `from` to `to`; `t` runs 0 → 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition<S> {
	from: S,
	to: S,
	t: f64,
}

impl<S: Lerp + PartialEq> Transition<S> {
	pub fn settled(style: S) -> Self {
		Self {
			from: style,
			to: style,
			t: 1.0,
		}
	}

	pub fn current(&self) -> S {
		if self.t >= 1.0 {
			return self.to;
		}
		S::lerp(self.from, self.to, ease_out_cubic(self.t))
	}

	/// Retarget from wherever the style currently is. Same target is a no-op.
	pub fn set(&mut self, to: S) {
		if self.to == to {
			return;
		}
		self.from = self.current();
		self.to = to;
		self.t = 0.0;
	}

	pub fn advance(&mut self, dt: f64, duration: f64) {
		self.t = if duration <= 0.0 {
			1.0
		} else {
			(self.t + dt / duration).min(1.0)
		};
	}

	pub fn is_settled(&self) -> bool {
		self.t >= 1.0
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinkVisual {
	pub source: String,
	pub target: String,
	pub style: Transition<LinkStyle>,
}

/// Visual state of every drawn node and link, looked up by id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualRegistry {
	node_index: HashMap<String, usize>,
	nodes: Vec<Transition<NodeStyle>>,
	links: Vec<LinkVisual>,
	/// record id → index of its translation link
	translations: HashMap<String, usize>,
}

impl VisualRegistry {
	pub fn new(data: &GraphData) -> Self {
		let node_index = data
			.nodes
			.iter()
			.enumerate()
			.map(|(i, n)| (n.id.clone(), i))
			.collect();
		let translations = data
			.links
			.iter()
			.enumerate()
			.filter_map(|(i, l)| l.record_id.clone().map(|id| (id, i)))
			.collect();
		Self {
			node_index,
			nodes: vec![Transition::settled(NodeStyle::BASELINE); data.nodes.len()],
			links: data
				.links
				.iter()
				.map(|l| LinkVisual {
					source: l.source.clone(),
					target: l.target.clone(),
					style: Transition::settled(LinkStyle::BASELINE),
				})
				.collect(),
			translations,
		}
	}

	/// Emphasize the two term nodes of `record_id` and the link from its source
	/// to its target term; everything else returns to baseline.
	pub fn highlight(&mut self, record_id: &str) {
		let (es, ng) = (source_node_id(record_id), target_node_id(record_id));
		let source = self.node_index.get(&es).copied();
		let target = self.node_index.get(&ng).copied();
		let link = self
			.translations
			.get(record_id)
			.copied()
			.filter(|&i| self.links[i].source == es && self.links[i].target == ng);

		for (i, node) in self.nodes.iter_mut().enumerate() {
			node.set(if Some(i) == source {
				NodeStyle::SOURCE
			} else if Some(i) == target {
				NodeStyle::TARGET
			} else {
				NodeStyle::BASELINE
			});
		}
		for (i, visual) in self.links.iter_mut().enumerate() {
			visual.style.set(if Some(i) == link {
				LinkStyle::EMPHASIS
			} else {
				LinkStyle::BASELINE
			});
		}
	}

	pub fn reset(&mut self) {
		for node in &mut self.nodes {
			node.set(NodeStyle::BASELINE);
		}
		for visual in &mut self.links {
			visual.style.set(LinkStyle::BASELINE);
		}
	}

	pub fn advance(&mut self, dt: f64, duration: f64) {
		for node in &mut self.nodes {
			node.advance(dt, duration);
		}
		for visual in &mut self.links {
			visual.style.advance(dt, duration);
		}
	}

	pub fn node_style(&self, id: &str) -> Option<NodeStyle> {
		self.node_index.get(id).map(|&i| self.nodes[i].current())
	}

	pub fn links(&self) -> &[LinkVisual] {
		&self.links
	}

	pub fn is_settled(&self) -> bool {
		self.nodes.iter().all(Transition::is_settled)
			&& self.links.iter().all(|l| l.style.is_settled())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::builder::build_graph;
	use crate::components::force_graph::types::{GraphLink, GraphNode, NodeKind};
	use crate::components::force_graph::palette::CategoryPalette;
	use crate::dictionary::record;

	fn registry() -> VisualRegistry {
		let records = vec![
			record("1", "Casa", "House", "sustantivo"),
			record("2", "Casar", "Marry", "verbo"),
		];
		let graph = build_graph(&records, 500, &mut CategoryPalette::default());
		VisualRegistry::new(&graph.data)
	}

	fn settle(reg: &mut VisualRegistry) {
		reg.advance(1.0, 0.2);
	}

	fn emphasized_links(reg: &VisualRegistry) -> Vec<(&str, &str)> {
		reg.links()
			.iter()
			.filter(|l| l.style.current() == LinkStyle::EMPHASIS)
			.map(|l| (l.source.as_str(), l.target.as_str()))
			.collect()
	}

	#[test]
	fn starts_at_baseline() {
		let reg = registry();
		assert!(reg.is_settled());
		assert_eq!(reg.node_style("root"), Some(NodeStyle::BASELINE));
		assert!(emphasized_links(&reg).is_empty());
	}

	#[test]
	fn highlight_marks_both_terms_and_translation_link() {
		let mut reg = registry();
		reg.highlight("1");
		settle(&mut reg);
		assert_eq!(reg.node_style("1_es"), Some(NodeStyle::SOURCE));
		assert_eq!(reg.node_style("1_ng"), Some(NodeStyle::TARGET));
		assert_eq!(reg.node_style("2_es"), Some(NodeStyle::BASELINE));
		assert_eq!(reg.node_style("cat_sustantivo"), Some(NodeStyle::BASELINE));
		assert_eq!(emphasized_links(&reg), vec![("1_es", "1_ng")]);
	}

	#[test]
	fn moving_highlight_clears_previous_pair() {
		let mut reg = registry();
		reg.highlight("1");
		reg.highlight("2");
		settle(&mut reg);
		assert_eq!(reg.node_style("1_es"), Some(NodeStyle::BASELINE));
		assert_eq!(reg.node_style("2_ng"), Some(NodeStyle::TARGET));
		assert_eq!(emphasized_links(&reg), vec![("2_es", "2_ng")]);
	}

	#[test]
	fn reversed_translation_link_is_not_emphasized() {
		let data = GraphData {
			nodes: registry_nodes(),
			links: vec![GraphLink {
				source: "1_ng".into(),
				target: "1_es".into(),
				record_id: Some("1".into()),
			}],
		};
		let mut reg = VisualRegistry::new(&data);
		reg.highlight("1");
		settle(&mut reg);
		assert!(emphasized_links(&reg).is_empty());
		assert_eq!(reg.node_style("1_es"), Some(NodeStyle::SOURCE));
	}

	fn registry_nodes() -> Vec<GraphNode> {
		["1_es", "1_ng"]
			.into_iter()
			.map(|id| GraphNode {
				id: id.into(),
				label: id.into(),
				kind: NodeKind::Source,
				color: None,
			})
			.collect()
	}

	#[test]
	fn unknown_record_resets_everything() {
		let mut reg = registry();
		reg.highlight("1");
		reg.highlight("99");
		settle(&mut reg);
		assert_eq!(reg.node_style("1_es"), Some(NodeStyle::BASELINE));
		assert!(emphasized_links(&reg).is_empty());
	}

	#[test]
	fn highlight_is_idempotent_mid_transition() {
		let mut once = registry();
		once.highlight("1");
		once.advance(0.05, 0.2);

		let mut twice = registry();
		twice.highlight("1");
		twice.advance(0.05, 0.2);
		twice.highlight("1");

		assert_eq!(once, twice);
	}

	#[test]
	fn reset_is_idempotent() {
		let mut once = registry();
		once.highlight("2");
		settle(&mut once);
		once.reset();

		let mut twice = once.clone();
		twice.reset();

		assert_eq!(once, twice);
		settle(&mut twice);
		assert_eq!(twice.node_style("2_es"), Some(NodeStyle::BASELINE));
		assert!(emphasized_links(&twice).is_empty());
	}

	#[test]
	fn transition_eases_toward_target() {
		let mut t = Transition::settled(LinkStyle::BASELINE);
		t.set(LinkStyle::EMPHASIS);
		assert_eq!(t.current(), LinkStyle::BASELINE);
		t.advance(0.1, 0.2);
		let mid = t.current();
		assert!(mid.width > 1.0 && mid.width < 3.0);
		assert!(!t.is_settled());
		t.advance(0.1, 0.2);
		assert!(t.is_settled());
		assert_eq!(t.current(), LinkStyle::EMPHASIS);
	}

	#[test]
	fn zero_duration_snaps() {
		let mut t = Transition::settled(NodeStyle::BASELINE);
		t.set(NodeStyle::SOURCE);
		t.advance(0.0, 0.0);
		assert_eq!(t.current(), NodeStyle::SOURCE);
	}

	#[test]
	fn css_rounds_channels() {
		assert_eq!(LINK_GRAY.css(), "rgba(153, 153, 153, 1)");
		assert_eq!(Rgba::TRANSPARENT.css(), "rgba(0, 0, 0, 0)");
	}
}
