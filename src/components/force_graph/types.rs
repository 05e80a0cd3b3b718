#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Root,
	Category,
	/// Source-language term.
	Source,
	/// Target-language term.
	Target,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	pub kind: NodeKind,
	pub color: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
	/// Set only on the translation link between a record's two terms.
	pub record_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

pub const ROOT_ID: &str = "root";

pub fn category_node_id(category: &str) -> String {
	format!("cat_{category}")
}

pub fn source_node_id(record_id: &str) -> String {
	format!("{record_id}_es")
}

pub fn target_node_id(record_id: &str) -> String {
	format!("{record_id}_ng")
}
