//! # Course catalog
//!
//! A read-only lookup table of every course that can be selected. The catalog is
//! produced elsewhere (usually scraped into a JSON document) and is handed to callers
//! as a plain value, nothing in this crate keeps one around between calls.

use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};

mod course;
pub use course::CourseRecord;

mod course_code;
pub use course_code::CourseCode;

/// Lowest course number offered for selection.
pub const GRADUATE_COURSE_NUMBER: u32 = 400;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
	courses: Vec<CourseRecord>,
}

/// Shapes a catalog file may take on disk.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
	/// Object keyed by course code, as written by the catalog scraper.
	Keyed(BTreeMap<String, CourseRecord>),
	List(Vec<CourseRecord>),
}

/// Identifiers must be present and unique, both in a catalog and in a selection.
pub(crate) fn check_identifiers(courses: &[CourseRecord]) -> Result<(), crate::error::ValidationError> {
	use crate::error::ValidationError;

	let mut seen = std::collections::HashMap::<&str, usize>::with_capacity(courses.len());
	for (position, course) in courses.iter().enumerate() {
		if course.identifier.trim().is_empty() {
			return Err(ValidationError::MissingIdentifier { position, title: course.title.clone() });
		}
		if let Some(first) = seen.insert(course.identifier.as_str(), position) {
			return Err(ValidationError::DuplicateIdentifier {
				identifier: course.identifier.clone(),
				first,
				second: position,
			});
		}
	}
	Ok(())
}

impl Catalog {
	/// # Errors
	/// - [`Validation`](crate::Error::Validation) when an identifier is empty or used twice.
	pub fn from_courses(courses: Vec<CourseRecord>) -> crate::Result<Self> {
		check_identifiers(&courses)?;
		Ok(Self { courses })
	}

	/// Reads a catalog from JSON.
	///
	/// Both the keyed document and a plain array of records are accepted.
	/// # Errors
	/// - [`SerdeJSON`](crate::Error::SerdeJSON) when the text isn't a catalog.
	/// - [`Parse`](crate::Error::Parse) when a key doesn't match the identifier of the course it holds.
	pub fn from_json_str(s: &str) -> crate::Result<Self> {
		match serde_json::from_str::<CatalogDocument>(s)? {
			CatalogDocument::Keyed(map) => {
				let mut courses = Vec::with_capacity(map.len());
				for (key, course) in map {
					if key != course.identifier {
						return Err(crate::Error::Parse(format!("catalog key \"{}\" holds course \"{}\"", key, course.identifier)));
					}
					courses.push(course);
				}
				Self::from_courses(courses)
			},
			CatalogDocument::List(courses) => Self::from_courses(courses),
		}
	}

	pub fn load_from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
		let path = path.as_ref();
		log::debug!("Reading catalog from {}", path.display());
		let s = std::fs::read_to_string(path)?;
		let catalog = Self::from_json_str(&s)?;
		log::debug!("Catalog contains {} courses", catalog.len());
		Ok(catalog)
	}

	pub fn courses(&self) -> &[CourseRecord] {
		&self.courses
	}

	pub fn len(&self) -> usize {
		self.courses.len()
	}

	pub fn is_empty(&self) -> bool {
		self.courses.is_empty()
	}

	/// Finds a course by identifier.
	///
	/// When there is no exact match `code` is compared as a [`CourseCode`] so spacing and case don't matter.
	pub fn get(&self, code: &str) -> Option<&CourseRecord> {
		if let Some(course) = self.courses.iter().find(|c| c.identifier == code) {
			return Some(course);
		}
		let code = code.parse::<CourseCode>().ok()?;
		self.courses.iter().find(|c| {
			c.identifier.parse::<CourseCode>().map_or(false, |other| other == code)
		})
	}

	/// Builds a selection in the order the codes are given.
	/// # Errors
	/// - [`UnknownCourse`](crate::Error::UnknownCourse) for the first code not in the catalog.
	pub fn select(&self, codes: impl IntoIterator<Item = impl AsRef<str>>) -> crate::Result<Vec<CourseRecord>> {
		codes.into_iter()
			.map(|code| {
				let code = code.as_ref();
				self.get(code).cloned().ok_or_else(|| crate::Error::UnknownCourse(code.to_string()))
			})
			.collect()
	}

	/// Courses numbered [`GRADUATE_COURSE_NUMBER`] or above, in catalog order.
	///
	/// Courses without a parsable code are left out.
	pub fn graduate_courses(&self) -> Vec<&CourseRecord> {
		self.courses.iter()
			.filter(|c| {
				c.identifier.parse::<CourseCode>().map_or(false, |code| code.number >= GRADUATE_COURSE_NUMBER)
			})
			.collect()
	}
}
