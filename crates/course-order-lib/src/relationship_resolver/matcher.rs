//! Resolving a prerequisite reference to one of the candidate courses.
//!
//! A reference matches a candidate when it equals the candidate's identifier or appears
//! anywhere in its title. Candidates are tried in order and the first one satisfying
//! either rule wins, so callers must pass them in a meaningful order.

use serde::{Serialize, Deserialize};

use crate::catalog::CourseRecord;

/// Which rule matched a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchKind {
	/// Reference is the course's identifier.
	Identifier,
	/// Reference is part of the course's title.
	Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrerequisiteMatch<'a> {
	pub course: &'a CourseRecord,
	/// Index of `course` within the candidates.
	pub position: usize,
	pub kind: MatchKind,
}

/// Finds the first candidate `reference` refers to.
///
/// No match is the common case for prerequisites outside the candidates and is not an error.
/// An empty reference never matches.
pub fn match_prerequisite<'a>(reference: &str, candidates: &'a [CourseRecord]) -> Option<PrerequisiteMatch<'a>> {
	/* An empty string is a substring of every title */
	if reference.is_empty() {
		return None;
	}

	candidates.iter()
		.enumerate()
		.find_map(|(position, course)| {
			let kind = if course.identifier == reference {
				MatchKind::Identifier
			} else if course.title.contains(reference) {
				MatchKind::Title
			} else {
				return None;
			};
			Some(PrerequisiteMatch { course, position, kind })
		})
}

pub fn find_matching_course<'a>(reference: &str, candidates: &'a [CourseRecord]) -> Option<&'a CourseRecord> {
	match_prerequisite(reference, candidates).map(|m| m.course)
}
