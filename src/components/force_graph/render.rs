use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::highlight::NodeStyle;
use super::state::{ForceGraphState, NODE_RADIUS};

const BACKGROUND: &str = "#fafafa";
const LABEL_SIZE: f64 = 12.0;

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	draw_labels(state, ctx);
	ctx.restore();
}

fn draw_links(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let positions = state.positions();
	for &(src, tgt, i) in state.links() {
		let (Some(&(x1, y1)), Some(&(x2, y2)), Some(visual)) = (
			positions.get(&src),
			positions.get(&tgt),
			state.visuals.links().get(i),
		) else {
			continue;
		};
		let style = visual.style.current();
		ctx.set_stroke_style_str(&style.stroke.css());
		ctx.set_line_width(style.width);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	state.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);
		let info = &node.data.user_data;
		let style = state
			.visuals
			.node_style(&info.id)
			.unwrap_or(NodeStyle::BASELINE);

		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&info.fill);
		ctx.fill();

		if style.stroke_width > 0.01 {
			ctx.set_stroke_style_str(&style.stroke.css());
			ctx.set_line_width(style.stroke_width);
			ctx.stroke();
		}
	});
}

// Labels go on top of every circle so neighbouring nodes never hide them.
fn draw_labels(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	state.graph.visit_nodes(|node| {
		let info = &node.data.user_data;
		if info.label.is_empty() {
			return;
		}
		let style = state
			.visuals
			.node_style(&info.id)
			.unwrap_or(NodeStyle::BASELINE);
		ctx.set_fill_style_str(&style.label_fill.css());
		ctx.set_font(&format!(
			"{} {}px sans-serif",
			style.font_weight.round(),
			LABEL_SIZE
		));
		let _ = ctx.fill_text(&info.label, node.x() as f64, node.y() as f64);
	});
}
