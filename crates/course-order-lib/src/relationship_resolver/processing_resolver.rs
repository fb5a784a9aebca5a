//! The ordering itself, a worklist topological sort over a [`DependencyGraph`].

use std::collections::VecDeque;

use petgraph::prelude::*;

use super::CyclePolicy;
use super::DependencyGraph;
use super::ResolvedOrder;
use crate::catalog::CourseRecord;
use crate::error::{CycleError, ValidationError};

/// Orders selections of courses.
///
/// A `Resolver` holds only settings, every call to [`resolve()`](Resolver::resolve())
/// builds its own graph so one resolver can be shared freely between threads.
#[derive(Debug, Default, Clone)]
pub struct Resolver {
	cycle_policy: CyclePolicy,
	max_selection: Option<usize>,
}

impl Resolver {
	pub(super) fn new(cycle_policy: CyclePolicy, max_selection: Option<usize>) -> Self {
		Self {
			cycle_policy,
			max_selection,
		}
	}

	pub fn from_options(options: &crate::CourseOrderOptions) -> Self {
		super::ResolverBuilder::from_options(options).build()
	}

	pub fn cycle_policy(&self) -> CyclePolicy {
		self.cycle_policy
	}

	pub fn max_selection(&self) -> Option<usize> {
		self.max_selection
	}

	/// Reorders `selection` so every course follows the selected courses it requires.
	///
	/// Courses that are free to go at the same time keep the order they became free in,
	/// starting from selection order. The same selection always gives the same order.
	///
	/// # Errors
	/// - [`Validation`](crate::Error::Validation) when an identifier is empty or repeated, or the selection is over the limit.
	/// - [`Cycle`](crate::Error::Cycle) when courses require each other and the policy is [`CyclePolicy::Error`].
	pub fn resolve<'a>(&self, selection: &'a [CourseRecord]) -> crate::Result<ResolvedOrder<'a>> {
		self.validate(selection)?;

		if selection.is_empty() {
			return Ok(ResolvedOrder::new(Vec::new(), Vec::new()));
		}

		let graph = DependencyGraph::build(selection);
		log::debug!("Ordering {} courses with {} prerequisite edges", graph.node_count(), graph.edge_count());

		let mut in_degree = graph.in_degrees().to_vec();
		let mut queue: VecDeque<NodeIndex> = graph.graph.node_indices()
			.filter(|i| in_degree[i.index()] == 0)
			.collect();
		let mut courses = Vec::<&CourseRecord>::with_capacity(selection.len());

		while let Some(i) = queue.pop_front() {
			courses.push(&selection[i.index()]);
			for dependent in graph.dependents(i) {
				let degree = &mut in_degree[dependent.index()];
				*degree -= 1;
				if *degree == 0 {
					queue.push_back(dependent);
				}
			}
		}

		if courses.len() == selection.len() {
			return Ok(ResolvedOrder::new(courses, Vec::new()));
		}

		/* Anything still waiting on a prerequisite is in, or behind, a cycle */
		let omitted: Vec<&CourseRecord> = graph.graph.node_indices()
			.filter(|i| in_degree[i.index()] > 0)
			.map(|i| &selection[i.index()])
			.collect();

		match self.cycle_policy {
			CyclePolicy::Error => Err(CycleError {
				unresolved: omitted.iter().map(|c| c.identifier.clone()).collect(),
				cycles: graph.cycles(),
			}.into()),
			CyclePolicy::Omit => {
				log::debug!("Omitting {} courses caught in prerequisite cycles", omitted.len());
				Ok(ResolvedOrder::new(courses, omitted))
			},
		}
	}

	fn validate(&self, selection: &[CourseRecord]) -> Result<(), ValidationError> {
		if let Some(max) = self.max_selection {
			if selection.len() > max {
				return Err(ValidationError::SelectionTooLarge { len: selection.len(), max });
			}
		}

		crate::catalog::check_identifiers(selection)
	}
}
