//! The word list: records, the shared read-only handle and loading.

pub mod search;

use std::collections::HashSet;
use std::sync::Arc;

use gloo_net::http::Request;
use log::{debug, warn};
use serde::{Deserialize, Deserializer};

use crate::components::force_graph::{category_node_id, source_node_id, target_node_id};
use crate::error::LoadError;

/// One dictionary entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct WordRecord {
	#[serde(deserialize_with = "id_from_number_or_string")]
	pub id: String,
	/// Source-language term.
	pub es: String,
	/// Target-language term.
	pub ng: String,
	pub categoria: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
	Number(i64),
	Text(String),
}

fn id_from_number_or_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
	Ok(match RawId::deserialize(de)? {
		RawId::Number(n) => n.to_string(),
		RawId::Text(s) => s,
	})
}

/// Read-only handle to the loaded records, cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dictionary {
	records: Arc<[WordRecord]>,
}

impl Dictionary {
	/// Wrap records, skipping any whose graph node ids would not be unique:
	/// a repeated id (the first occurrence wins) or term ids that coincide with
	/// a category node id.
	pub fn new(records: Vec<WordRecord>) -> Self {
		let category_ids: HashSet<String> =
			records.iter().map(|r| category_node_id(&r.categoria)).collect();
		let mut seen = HashSet::with_capacity(records.len());

		let kept: Vec<WordRecord> = records
			.into_iter()
			.filter(|r| {
				if !seen.insert(r.id.clone()) {
					warn!("skipping {:?}: id {:?} already used", r.es, r.id);
					return false;
				}
				let clash = [source_node_id(&r.id), target_node_id(&r.id)]
					.into_iter()
					.find(|id| category_ids.contains(id));
				if let Some(id) = clash {
					warn!("skipping {:?}: node {:?} is also a category node", r.es, id);
					return false;
				}
				true
			})
			.collect();

		Self {
			records: kept.into(),
		}
	}

	pub fn from_json(text: &str) -> Result<Self, LoadError> {
		let records: Vec<WordRecord> = serde_json::from_str(text)?;
		Ok(Self::new(records))
	}

	pub fn records(&self) -> &[WordRecord] {
		&self.records
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}
}

/// Fetch and parse the dictionary served at `url`.
pub async fn fetch(url: &str) -> Result<Dictionary, LoadError> {
	let request_failed = |err: gloo_net::Error| LoadError::Request {
		url: url.to_string(),
		message: err.to_string(),
	};

	let response = Request::get(url).send().await.map_err(request_failed)?;
	if !response.ok() {
		return Err(LoadError::Status {
			url: url.to_string(),
			status: response.status(),
		});
	}
	let body = response.text().await.map_err(request_failed)?;
	debug!("fetched {} bytes from {}", body.len(), url);
	Dictionary::from_json(&body)
}

#[cfg(test)]
pub(crate) fn record(id: &str, es: &str, ng: &str, categoria: &str) -> WordRecord {
	WordRecord {
		id: id.to_string(),
		es: es.to_string(),
		ng: ng.to_string(),
		categoria: categoria.to_string(),
	}
}
