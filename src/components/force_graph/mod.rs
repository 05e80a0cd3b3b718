mod builder;
mod component;
mod highlight;
mod palette;
mod render;
mod state;
mod types;

pub use builder::{LegendEntry, WordGraph, build_graph};
pub use component::ForceGraphCanvas;
pub use palette::CategoryPalette;
pub use types::{category_node_id, source_node_id, target_node_id};
