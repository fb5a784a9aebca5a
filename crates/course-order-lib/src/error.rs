//! Library error type.

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
	#[error("parsing error: {0}")]
	Parse(String),
	#[error("validation error: {0}")]
	Validation(#[from] ValidationError),
	#[error("{0}")]
	Cycle(#[from] CycleError),
	#[error("course not found in catalog: {0}")]
	UnknownCourse(String),
}

/// A selection that can't be turned into a dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	/// Record at `position` has an empty identifier.
	#[error("course at position {position} (\"{title}\") has no identifier")]
	MissingIdentifier {
		position: usize,
		title: String,
	},
	/// Two records in the selection share an identifier.
	#[error("course `{identifier}` is selected twice (positions {first} and {second})")]
	DuplicateIdentifier {
		identifier: String,
		first: usize,
		second: usize,
	},
	#[error("{len} courses selected, at most {max} are allowed")]
	SelectionTooLarge {
		len: usize,
		max: usize,
	},
}

/// Courses whose prerequisites could never all be placed.
///
/// `unresolved` lists every course left out of the order, including courses that only
/// depend on a cycle without being part of one. `cycles` holds the groups actually
/// responsible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("prerequisite cycle prevents ordering of: {}", .unresolved.join(", "))]
pub struct CycleError {
	pub unresolved: Vec<String>,
	pub cycles: Vec<Vec<String>>,
}
