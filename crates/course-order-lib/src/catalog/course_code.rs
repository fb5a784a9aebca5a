use std::sync::OnceLock;

use regex::Regex;

/// A department prefix and course number such as `CS 428`.
///
/// Used to look courses up regardless of spacing or case, `"cs428"` and `"CS 428"` parse to the same code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseCode {
	pub department: String,
	pub number: u32,
}

fn pattern() -> &'static Regex {
	static PATTERN: OnceLock<Regex> = OnceLock::new();
	PATTERN.get_or_init(|| Regex::new(r"^\s*([A-Za-z]+)\s*([0-9]+)\s*$").expect("course code pattern should compile"))
}

impl std::str::FromStr for CourseCode {
	type Err = crate::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let captures = pattern().captures(s)
			.ok_or_else(|| crate::Error::Parse(format!("\"{}\" is not a course code", s)))?;
		let number = captures[2].parse::<u32>()
			.map_err(|_| crate::Error::Parse(format!("course number in \"{}\" is out of range", s)))?;
		Ok(Self {
			department: captures[1].to_uppercase(),
			number,
		})
	}
}

impl std::fmt::Display for CourseCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {}", self.department, self.number)
	}
}
