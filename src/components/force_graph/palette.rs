use std::collections::HashMap;

/// Colors for the grammatical categories the dictionary is known to use.
const KNOWN: &[(&str, &str)] = &[
	("sustantivo", "#1f77b4"),
	("verbo", "#ff7f0e"),
	("adjetivo", "#2ca02c"),
	("pronombre", "#d62728"),
	("otro", "#9467bd"),
];

/// Category → color lookup. Unknown categories get a color hashed from their
/// name, cached on first use.
#[derive(Clone, Debug)]
pub struct CategoryPalette {
	colors: HashMap<String, String>,
}

impl Default for CategoryPalette {
	fn default() -> Self {
		Self {
			colors: KNOWN
				.iter()
				.map(|&(cat, color)| (cat.to_string(), color.to_string()))
				.collect(),
		}
	}
}

impl CategoryPalette {
	pub fn color_for(&mut self, category: &str) -> &str {
		self.colors
			.entry(category.to_string())
			.or_insert_with(|| hashed_color(category))
	}
}

// FNV-1a, low 24 bits as #rrggbb.
fn hashed_color(name: &str) -> String {
	let hash = name.bytes().fold(0x811c_9dc5_u32, |h, b| {
		(h ^ u32::from(b)).wrapping_mul(0x0100_0193)
	});
	format!("#{:06x}", hash & 0x00ff_ffff)
}
