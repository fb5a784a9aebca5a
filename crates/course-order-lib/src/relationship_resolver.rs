//! Ordering a selection of courses so every course comes after the selected courses it requires.
//!
//! # Usage
//! 1. Create a [`ResolverBuilder`]
//! 1. Use the builder to choose a [`CyclePolicy`] or a selection limit.
//! 1. [`ResolverBuilder::build()`] to get a [`Resolver`]
//! 1. [`Resolver::resolve()`] with the selection to get a [`ResolvedOrder`].
//!
//! [`resolve()`] does all of the above with the default settings.
//!
//! Prerequisites are free text, they are matched against the *selection* only (see [`matcher`]).
//! A prerequisite that isn't selected doesn't constrain the order and is ignored.

use crate::catalog::CourseRecord;

pub mod matcher;
pub use matcher::{find_matching_course, match_prerequisite, MatchKind, PrerequisiteMatch};

mod dependency_graph;
pub use dependency_graph::*;

mod resolver_builder;
pub use resolver_builder::ResolverBuilder;
mod processing_resolver;
pub use processing_resolver::Resolver;
mod finalized_resolver;
pub use finalized_resolver::ResolvedOrder;

/// What to do with courses that can never be placed because of a prerequisite cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CyclePolicy {
	/// Fail the resolve with [`Error::Cycle`](crate::Error::Cycle).
	#[default]
	Error,
	/// Leave the courses out of the order. They can be found with [`ResolvedOrder::omitted()`].
	Omit,
}

/// Orders `selection` with the default [`Resolver`].
///
/// # Errors
/// - [`Validation`](crate::Error::Validation) if an identifier is missing or repeated.
/// - [`Cycle`](crate::Error::Cycle) if the selected courses require each other.
pub fn resolve(selection: &[CourseRecord]) -> crate::Result<Vec<&CourseRecord>> {
	Ok(ResolverBuilder::new().build().resolve(selection)?.into_courses())
}
