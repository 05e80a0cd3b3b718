pub mod force_graph;
pub mod legend;
pub mod search_box;
