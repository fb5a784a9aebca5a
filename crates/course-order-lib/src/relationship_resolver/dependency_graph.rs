//! Module for only DependencyGraph functions not related to the ordering process.

use petgraph::prelude::*;
use serde::{Serialize, Deserialize};

use crate::catalog::CourseRecord;
use super::matcher::{match_prerequisite, MatchKind};

/// Prerequisite relationships within one selection.
///
/// There is one node per selected course and node indices equal positions in the selection.
/// Edges point from a prerequisite to the course requiring it. The graph is built fresh for
/// every resolve and never shared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyGraph {
	pub graph: DiGraph<NodeData, EdgeData>,
	/// Number of distinct selected prerequisites per node, indexed like the nodes.
	in_degree: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
	pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeData {
	/// The prerequisite text that produced this edge.
	pub reference: String,
	pub kind: MatchKind,
}

impl DependencyGraph {
	/// Matches every prerequisite of every course against `selection`.
	///
	/// - Courses and their prerequisites are visited in the order given.
	/// - A course matching its own prerequisite gets no edge.
	/// - A prerequisite matched a second time through another reference adds no edge.
	///
	/// `selection` is expected to have unique identifiers, see [`Resolver`](super::Resolver) for validation.
	pub fn build(selection: &[CourseRecord]) -> Self {
		let mut graph = DiGraph::<NodeData, EdgeData>::with_capacity(selection.len(), selection.len());
		for course in selection {
			graph.add_node(NodeData { identifier: course.identifier.clone() });
		}
		let mut in_degree = vec![0; selection.len()];

		for (position, course) in selection.iter().enumerate() {
			let dependent = NodeIndex::new(position);
			for reference in &course.prerequisites {
				let found = match match_prerequisite(reference, selection) {
					Some(m) => m,
					None => continue, /* Not selected, doesn't constrain the order */
				};

				if found.position == position {
					log::debug!("Ignoring prerequisite \"{}\" of {} as it refers to itself", reference, course.identifier);
					continue;
				}

				let prerequisite = NodeIndex::new(found.position);
				if graph.contains_edge(prerequisite, dependent) {
					continue;
				}

				log::trace!("{} -> {} (\"{}\" by {:?})", found.course.identifier, course.identifier, reference, found.kind);
				graph.add_edge(prerequisite, dependent, EdgeData { reference: reference.clone(), kind: found.kind });
				in_degree[position] += 1;
			}
		}

		Self { graph, in_degree }
	}

	pub fn node_count(&self) -> usize {
		self.graph.node_count()
	}

	pub fn edge_count(&self) -> usize {
		self.graph.edge_count()
	}

	pub fn identifier(&self, node: NodeIndex) -> Option<&str> {
		self.graph.node_weight(node).map(|n| n.identifier.as_str())
	}

	pub fn node_index(&self, identifier: &str) -> Option<NodeIndex> {
		self.graph.node_indices().find(|i| self.graph[*i].identifier == identifier)
	}

	/// Selected prerequisites of `node` at build time.
	pub fn in_degree(&self, node: NodeIndex) -> usize {
		self.in_degree.get(node.index()).copied().unwrap_or_default()
	}

	pub fn in_degrees(&self) -> &[usize] {
		&self.in_degree
	}

	/// Courses requiring `node`, in the order their edges were added.
	pub fn dependents(&self, node: NodeIndex) -> Vec<NodeIndex> {
		/* petgraph walks outgoing edges newest first */
		let mut edges: Vec<(EdgeIndex, NodeIndex)> = self.graph.edges_directed(node, Outgoing)
			.map(|e| (e.id(), e.target()))
			.collect();
		edges.sort_by_key(|(id, _)| *id);
		edges.into_iter().map(|(_, target)| target).collect()
	}

	/// Groups of courses that require each other, members and groups in selection order.
	pub fn cycles(&self) -> Vec<Vec<String>> {
		let mut cycles: Vec<Vec<NodeIndex>> = petgraph::algo::tarjan_scc(&self.graph)
			.into_iter()
			.filter(|component| component.len() > 1)
			.map(|mut component| {
				component.sort();
				component
			})
			.collect();
		cycles.sort();

		cycles.into_iter()
			.map(|component| component.into_iter().map(|i| self.graph[i].identifier.clone()).collect())
			.collect()
	}
}
