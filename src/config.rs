//! Tunables for loading, building and drawing the word graph.

use log::{info, warn};

#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
	/// Records beyond this count are left out of the graph.
	pub max_words: usize,
	pub data_url: String,
	/// Duration of highlight style changes.
	pub transition_ms: f64,
	pub initial_zoom: f64,
	pub zoom_min: f64,
	pub zoom_max: f64,
	/// Zoom level the view settles on when it centres the root node.
	pub focus_zoom: f64,
	pub focus_delay_ms: f64,
	pub focus_duration_ms: f64,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			max_words: 500,
			data_url: "diccionario.json".into(),
			transition_ms: 200.0,
			initial_zoom: 0.5,
			zoom_min: 0.1,
			zoom_max: 4.0,
			focus_zoom: 1.5,
			focus_delay_ms: 1000.0,
			focus_duration_ms: 750.0,
		}
	}
}

impl GraphConfig {
	/// Apply the `?max=N` query parameter, ignoring values that are not a count.
	pub fn with_max_words(mut self, raw: Option<&str>) -> Self {
		let Some(raw) = raw else {
			return self;
		};
		match raw.trim().parse::<usize>() {
			Ok(n) => {
				info!("max_words overridden to {}", n);
				self.max_words = n;
			}
			Err(err) => warn!("ignoring max={:?}: {}", raw, err),
		}
		self
	}

	pub fn clamp_zoom(&self, k: f64) -> f64 {
		k.clamp(self.zoom_min, self.zoom_max)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_widget() {
		let cfg = GraphConfig::default();
		assert_eq!(cfg.max_words, 500);
		assert_eq!(cfg.data_url, "diccionario.json");
		assert_eq!(cfg.transition_ms, 200.0);
	}

	#[test]
	fn max_override_parses_counts() {
		let cfg = GraphConfig::default().with_max_words(Some(" 40 "));
		assert_eq!(cfg.max_words, 40);
	}

	#[test]
	fn bad_or_missing_override_keeps_default() {
		assert_eq!(GraphConfig::default().with_max_words(None).max_words, 500);
		assert_eq!(GraphConfig::default().with_max_words(Some("lots")).max_words, 500);
		assert_eq!(GraphConfig::default().with_max_words(Some("-3")).max_words, 500);
	}

	#[test]
	fn zoom_is_clamped() {
		let cfg = GraphConfig::default();
		assert_eq!(cfg.clamp_zoom(0.01), 0.1);
		assert_eq!(cfg.clamp_zoom(9.0), 4.0);
		assert_eq!(cfg.clamp_zoom(1.2), 1.2);
	}
}
