//! Various helper functions for testing
//!
//! The sample catalog in `test-data/catalog.json` is a cut down copy of the scraped CS catalog.
//! Selectable courses are related like this, an arrow pointing from prerequisite to dependent;
//! - `CS 401` -> `CS 403`
//! - `CS 374` -> `CS 421`, `CS 475`
//! - `CS 421` -> `CS 422`, `CS 426`
//! - `CS 422` -> `CS 524` and `CS 475` -> `CS 524`
//! - `CS 341` -> `CS 427` -> `CS 428`, `CS 429`
//! - `CS 465` -> `CS 565`
//! - `CS 446` -> `CS 582` and `CS 466` -> `CS 582`
//! - `CS 225` -> `CS 374`, `CS 410`, `CS 411`, `CS 446`, `CS 465`, `CS 466` by its title "Data Structures"
//!
//! `CS 400` and `CS 402` require nothing found in the catalog.

use std::io::Write;

use course_order::{Catalog, CourseRecord};

pub const SAMPLE_CATALOG_JSON: &str = include_str!("../test-data/catalog.json");

/// Gets the sample catalog.
pub fn get_catalog() -> Catalog {
	Catalog::from_json_str(SAMPLE_CATALOG_JSON).expect("sample catalog should parse")
}

/// Picks courses out of the sample catalog in the given order.
pub fn select(codes: &[&str]) -> Vec<CourseRecord> {
	get_catalog().select(codes).expect("course missing from sample catalog")
}

pub fn course(identifier: &str, title: &str, prerequisites: &[&str]) -> CourseRecord {
	CourseRecord::new(identifier, title, prerequisites.iter().copied())
}

pub fn identifiers<'a>(courses: impl IntoIterator<Item = &'a CourseRecord>) -> Vec<&'a str> {
	courses.into_iter().map(|c| c.identifier.as_str()).collect()
}

/// Writes `json` to a temporary file, the file is removed when dropped.
pub fn write_catalog_file(json: &str) -> std::io::Result<tempfile::NamedTempFile> {
	let mut f = tempfile::NamedTempFile::new()?;
	f.write_all(json.as_bytes())?;
	f.flush()?;
	Ok(f)
}
