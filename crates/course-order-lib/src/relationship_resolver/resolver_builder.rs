use super::CyclePolicy;
use super::Resolver;

#[derive(Debug, Default, Clone)]
pub struct ResolverBuilder {
	cycle_policy: CyclePolicy,
	max_selection: Option<usize>,
}

impl ResolverBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts from the settings in `options`.
	pub fn from_options(options: &crate::CourseOrderOptions) -> Self {
		Self::new()
			.cycle_policy(options.cycle_policy())
			.max_selection(options.max_selection())
	}

	pub fn cycle_policy(mut self, cycle_policy: CyclePolicy) -> Self {
		self.cycle_policy = cycle_policy;
		self
	}

	/// Rejects selections with more than `max_selection` courses. `None` allows any size.
	pub fn max_selection(mut self, max_selection: Option<usize>) -> Self {
		self.max_selection = max_selection;
		self
	}

	pub fn build(self) -> Resolver {
		Resolver::new(self.cycle_policy, self.max_selection)
	}
}
