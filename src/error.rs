//! Errors raised while loading the dictionary.

use std::sync::Arc;

use thiserror::Error;

/// Why the dictionary could not be loaded.
///
/// Cloneable so the failure can sit in a reactive signal and be shown in the UI.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
	/// The request never produced a response.
	#[error("could not reach {url}: {message}")]
	Request { url: String, message: String },

	/// The server answered with a non-success status.
	#[error("{url} answered with HTTP {status}")]
	Status { url: String, status: u16 },

	/// The body is not a JSON array of word records.
	#[error("dictionary is not valid: {0}")]
	Parse(Arc<serde_json::Error>),
}

impl From<serde_json::Error> for LoadError {
	fn from(err: serde_json::Error) -> Self {
		Self::Parse(Arc::new(err))
	}
}
