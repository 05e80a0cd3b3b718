use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::highlight::VisualRegistry;
use super::types::{GraphData, NodeKind, ROOT_ID};
use crate::config::GraphConfig;

const ROOT_FILL: &str = "gray";
const FALLBACK_FILL: &str = "#7f7f7f";

pub const NODE_RADIUS: f64 = 12.0;
pub const HIT_RADIUS: f64 = 14.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub label: String,
	pub fill: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl ViewTransform {
	fn lerp(&self, to: &Self, t: f64) -> Self {
		Self {
			x: self.x + (to.x - self.x) * t,
			y: self.y + (to.y - self.y) * t,
			k: self.k + (to.k - self.k) * t,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Pending or running "centre the root" camera move.
#[derive(Clone, Debug)]
enum Focus {
	Waiting { remaining: f64 },
	Moving { from: ViewTransform, elapsed: f64 },
	Done,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub visuals: VisualRegistry,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub config: GraphConfig,
	/// (source, target, index into the registry's link visuals)
	links: Vec<(DefaultNodeIdx, DefaultNodeIdx, usize)>,
	root: Option<DefaultNodeIdx>,
	focus: Focus,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, config: GraphConfig, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 300.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut links = Vec::new();
		let mut root = None;

		for (i, node) in data.nodes.iter().enumerate() {
			let fill = match node.kind {
				NodeKind::Root => ROOT_FILL.to_string(),
				_ => node.color.clone().unwrap_or_else(|| FALLBACK_FILL.into()),
			};
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let (x, y) = ((100.0 * angle.cos()) as f32, (100.0 * angle.sin()) as f32);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.label.clone(),
					fill,
				},
			});
			if node.id == ROOT_ID {
				root = Some(idx);
			}
			id_to_idx.insert(node.id.clone(), idx);
		}

		for (i, link) in data.links.iter().enumerate() {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
				links.push((src, tgt, i));
			}
		}

		Self {
			graph,
			visuals: VisualRegistry::new(data),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: config.initial_zoom,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			width,
			height,
			animation_running: true,
			links,
			root,
			focus: Focus::Waiting {
				remaining: config.focus_delay_ms / 1000.0,
			},
			config,
		}
	}

	pub fn links(&self) -> &[(DefaultNodeIdx, DefaultNodeIdx, usize)] {
		&self.links
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// HIT_RADIUS is in world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn positions(&self) -> HashMap<DefaultNodeIdx, (f64, f64)> {
		let mut out = HashMap::new();
		self.graph.visit_nodes(|node| {
			out.insert(node.index(), (node.x() as f64, node.y() as f64));
		});
		out
	}

	/// Zoom by `factor` keeping the screen point `(x, y)` fixed.
	pub fn zoom_at(&mut self, x: f64, y: f64, factor: f64) {
		let new_k = self.config.clamp_zoom(self.transform.k * factor);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
		self.cancel_focus();
	}

	/// User navigation wins over the scheduled camera move.
	pub fn cancel_focus(&mut self) {
		self.focus = Focus::Done;
	}

	pub fn highlight_record(&mut self, record_id: &str) {
		self.visuals.highlight(record_id);
	}

	pub fn reset_highlight(&mut self) {
		self.visuals.reset();
	}

	pub fn tick(&mut self, dt: f32) {
		if self.animation_running {
			self.graph.update(dt);
		}
		let dt = dt as f64;
		if !self.visuals.is_settled() {
			self.visuals.advance(dt, self.config.transition_ms / 1000.0);
		}
		self.advance_focus(dt);
	}

	fn advance_focus(&mut self, dt: f64) {
		let duration = self.config.focus_duration_ms / 1000.0;
		self.focus = match std::mem::replace(&mut self.focus, Focus::Done) {
			Focus::Waiting { remaining } if remaining > dt => Focus::Waiting {
				remaining: remaining - dt,
			},
			Focus::Waiting { .. } => Focus::Moving {
				from: self.transform,
				elapsed: 0.0,
			},
			Focus::Moving { from, elapsed } => {
				let elapsed = elapsed + dt;
				let Some(to) = self.root_focus() else {
					return;
				};
				let t = if duration <= 0.0 {
					1.0
				} else {
					(elapsed / duration).min(1.0)
				};
				self.transform = from.lerp(&to, ease_in_out_cubic(t));
				if t >= 1.0 {
					Focus::Done
				} else {
					Focus::Moving { from, elapsed }
				}
			}
			Focus::Done => Focus::Done,
		};
	}

	/// Transform that puts the root node at the centre at `focus_zoom`.
	fn root_focus(&self) -> Option<ViewTransform> {
		let root = self.root?;
		let (rx, ry) = *self.positions().get(&root)?;
		Some(centred_on(rx, ry, self.width, self.height, self.config.focus_zoom))
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

fn centred_on(gx: f64, gy: f64, width: f64, height: f64, k: f64) -> ViewTransform {
	ViewTransform {
		x: width / 2.0 - gx * k,
		y: height / 2.0 - gy * k,
		k,
	}
}

fn ease_in_out_cubic(t: f64) -> f64 {
	if t < 0.5 {
		4.0 * t * t * t
	} else {
		1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::builder::build_graph;
	use crate::components::force_graph::palette::CategoryPalette;
	use crate::dictionary::record;

	// Simulation paused so the root stays where it was placed: index 0, at (100, 0).
	fn still_state() -> ForceGraphState {
		let records = vec![
			record("1", "Casa", "House", "sustantivo"),
			record("2", "Casar", "Marry", "verbo"),
		];
		let graph = build_graph(&records, 500, &mut CategoryPalette::default());
		let mut state = ForceGraphState::new(&graph.data, GraphConfig::default(), 800.0, 600.0);
		state.animation_running = false;
		state
	}

	fn run(state: &mut ForceGraphState, seconds: f64) {
		for _ in 0..(seconds / 0.05).round() as usize {
			state.tick(0.05);
		}
	}

	#[test]
	fn view_holds_still_during_focus_delay() {
		let mut state = still_state();
		run(&mut state, 0.5);
		assert_eq!(state.transform, ViewTransform { x: 400.0, y: 300.0, k: 0.5 });
		assert!(matches!(state.focus, Focus::Waiting { .. }));
	}

	#[test]
	fn view_settles_centred_on_root_after_delay_and_move() {
		let mut state = still_state();
		// 1 s delay + 0.75 s move, with slack.
		run(&mut state, 3.0);
		assert!(matches!(state.focus, Focus::Done));
		assert_eq!(state.transform.k, state.config.focus_zoom);
		assert_eq!(state.transform, centred_on(100.0, 0.0, 800.0, 600.0, 1.5));
	}

	#[test]
	fn focus_is_midway_while_moving() {
		let mut state = still_state();
		run(&mut state, 1.4);
		assert!(matches!(state.focus, Focus::Moving { .. }));
		assert!(state.transform.k > 0.5 && state.transform.k < 1.5);
	}

	#[test]
	fn user_zoom_cancels_pending_focus() {
		let mut state = still_state();
		state.zoom_at(400.0, 300.0, 1.1);
		assert!(matches!(state.focus, Focus::Done));
		let zoomed = state.transform;
		run(&mut state, 3.0);
		assert_eq!(state.transform, zoomed);
	}

	#[test]
	fn zoom_keeps_anchor_point_and_clamps() {
		let mut state = still_state();
		let before = state.screen_to_graph(120.0, 80.0);
		state.zoom_at(120.0, 80.0, 1.1);
		let after = state.screen_to_graph(120.0, 80.0);
		assert!((before.0 - after.0).abs() < 1e-9 && (before.1 - after.1).abs() < 1e-9);

		for _ in 0..100 {
			state.zoom_at(0.0, 0.0, 0.5);
		}
		assert_eq!(state.transform.k, state.config.zoom_min);
	}

	#[test]
	fn cancelled_focus_during_move_stops_camera() {
		let mut state = still_state();
		run(&mut state, 1.4);
		state.cancel_focus();
		let held = state.transform;
		run(&mut state, 2.0);
		assert_eq!(state.transform, held);
	}

	#[test]
	fn centring_maps_point_to_screen_middle() {
		let t = centred_on(40.0, -20.0, 800.0, 600.0, 1.5);
		let (sx, sy) = (40.0 * t.k + t.x, -20.0 * t.k + t.y);
		assert_eq!((sx, sy), (400.0, 300.0));
	}

	#[test]
	fn easing_hits_endpoints() {
		assert_eq!(ease_in_out_cubic(0.0), 0.0);
		assert_eq!(ease_in_out_cubic(1.0), 1.0);
		assert_eq!(ease_in_out_cubic(0.5), 0.5);
	}

	#[test]
	fn transform_lerp_is_linear() {
		let a = ViewTransform { x: 0.0, y: 0.0, k: 0.5 };
		let b = ViewTransform { x: 10.0, y: -10.0, k: 1.5 };
		assert_eq!(a.lerp(&b, 0.5), ViewTransform { x: 5.0, y: -5.0, k: 1.0 });
		assert_eq!(a.lerp(&b, 1.0), b);
	}
}
