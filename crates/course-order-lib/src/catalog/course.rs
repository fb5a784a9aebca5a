use serde::{Serialize, Deserialize, Deserializer};

/// A single course as supplied by the catalog.
///
/// Field names are the external contract. The aliases accept the scraped catalog
/// document (`"Course Code Space"`, `"Course Title"`, `"Prerequisites"`) and the older
/// mock data (`id`, `name`, `prereqs`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseRecord {
	#[serde(alias = "Course Code Space", alias = "id")]
	pub identifier: String,
	#[serde(alias = "Course Title", alias = "name")]
	pub title: String,
	/// Free text references, either a course code or a fragment of a title.
	#[serde(alias = "Prerequisites", alias = "prereqs", default, deserialize_with = "null_as_empty")]
	pub prerequisites: Vec<String>,
}

impl CourseRecord {
	pub fn new(identifier: impl Into<String>, title: impl Into<String>, prerequisites: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self {
			identifier: identifier.into(),
			title: title.into(),
			prerequisites: prerequisites.into_iter().map(Into::into).collect(),
		}
	}
}

impl std::fmt::Display for CourseRecord {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {}", self.identifier, self.title)
	}
}

/* The scraper writes `null` for courses without a prerequisite section */
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
	Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserialize_scraped_entry() {
		let record: CourseRecord = serde_json::from_str(r#"{
			"Course Code": "CS428",
			"Course Code Space": "CS 428",
			"Course Title": "Software Engineering II",
			"Prerequisites": ["CS 427"]
		}"#).unwrap();
		assert_eq!(record, CourseRecord::new("CS 428", "Software Engineering II", ["CS 427"]));
	}

	#[test]
	fn deserialize_mock_entry() {
		let record: CourseRecord = serde_json::from_str(r#"{"id": "CS 411", "name": "Database Systems", "prereqs": ["CS 225"]}"#).unwrap();
		assert_eq!(record.identifier, "CS 411");
		assert_eq!(record.prerequisites, vec!["CS 225".to_string()]);
	}

	#[test]
	fn missing_or_null_prerequisites_are_empty() {
		let missing: CourseRecord = serde_json::from_str(r#"{"identifier": "CS 400", "title": "Accelerated Fundamentals of Computing I"}"#).unwrap();
		let null: CourseRecord = serde_json::from_str(r#"{"identifier": "CS 400", "title": "Accelerated Fundamentals of Computing I", "prerequisites": null}"#).unwrap();
		assert!(missing.prerequisites.is_empty());
		assert!(null.prerequisites.is_empty());
	}
}
