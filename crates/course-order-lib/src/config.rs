use crate::relationship_resolver::CyclePolicy;

/// Largest selection the course picker allows.
pub const DEFAULT_MAX_SELECTION: usize = 8;

pub struct CourseOrderOptions {
	catalog_path: std::path::PathBuf,
	max_selection: Option<usize>,
	cycle_policy: CyclePolicy,
}

impl Default for CourseOrderOptions {
	fn default() -> Self {
		Self {
			catalog_path: {
				if let Ok(p) = std::env::var("COURSE_ORDER_CATALOG") {
					std::path::PathBuf::from(p)
				} else {
					let data_dir = if let Ok(e) = std::env::var("XDG_DATA_HOME") {
						Some(std::path::PathBuf::from(e))
					} else {
						std::env::var("HOME").ok().map(|home| std::path::PathBuf::from(home).join(".local/share"))
					};

					match data_dir {
						Some(dir) => dir.join("course-order").join("catalog.json"),
						None => std::path::PathBuf::from("catalog.json"),
					}
				}
			},
			max_selection: Some(DEFAULT_MAX_SELECTION),
			cycle_policy: CyclePolicy::default(),
		}
	}
}

impl CourseOrderOptions {
	pub fn catalog_path(&self) -> &std::path::PathBuf {
		&self.catalog_path
	}
	/// returns if the file exists or not.
	pub fn set_catalog_path(&mut self, catalog_path: std::path::PathBuf) -> bool {
		if catalog_path.is_file() {
			self.catalog_path = catalog_path;
			true
		} else {
			false
		}
	}

	pub fn max_selection(&self) -> Option<usize> {
		self.max_selection
	}
	/// `None` removes the limit.
	pub fn set_max_selection(&mut self, max_selection: Option<usize>) {
		self.max_selection = max_selection;
	}

	pub fn cycle_policy(&self) -> CyclePolicy {
		self.cycle_policy
	}
	pub fn set_cycle_policy(&mut self, cycle_policy: CyclePolicy) {
		self.cycle_policy = cycle_policy;
	}
}
