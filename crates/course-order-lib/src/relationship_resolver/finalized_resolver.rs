use crate::catalog::CourseRecord;

/// The outcome of [`Resolver::resolve()`](super::Resolver::resolve()).
///
/// Holds references to the records passed in, nothing is copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOrder<'a> {
	courses: Vec<&'a CourseRecord>,
	omitted: Vec<&'a CourseRecord>,
}

impl<'a> ResolvedOrder<'a> {
	pub(super) fn new(courses: Vec<&'a CourseRecord>, omitted: Vec<&'a CourseRecord>) -> Self {
		Self {
			courses,
			omitted,
		}
	}

	/// Courses with each one after its selected prerequisites.
	pub fn courses(&self) -> &[&'a CourseRecord] {
		&self.courses
	}

	pub fn identifiers(&self) -> Vec<&'a str> {
		self.courses.iter().map(|c| c.identifier.as_str()).collect()
	}

	/// Courses left out by [`CyclePolicy::Omit`](super::CyclePolicy::Omit), in selection order.
	///
	/// Always empty with the default policy since the resolve fails instead.
	pub fn omitted(&self) -> &[&'a CourseRecord] {
		&self.omitted
	}

	/// Every selected course was placed.
	pub fn is_complete(&self) -> bool {
		self.omitted.is_empty()
	}

	pub fn len(&self) -> usize {
		self.courses.len()
	}

	pub fn is_empty(&self) -> bool {
		self.courses.is_empty()
	}

	pub fn into_courses(self) -> Vec<&'a CourseRecord> {
		self.courses
	}
}

impl<'a> IntoIterator for ResolvedOrder<'a> {
	type Item = &'a CourseRecord;
	type IntoIter = std::vec::IntoIter<&'a CourseRecord>;

	fn into_iter(self) -> Self::IntoIter {
		self.courses.into_iter()
	}
}
