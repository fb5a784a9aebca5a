use course_order::relationship_resolver::{CyclePolicy, DependencyGraph, Resolver};
use course_order::{Catalog, CourseOrderOptions};

fn main() -> std::process::ExitCode {
	let mut opts;

	/* Parse console input */
	let parsed_options = {
		let args: Vec<String> = std::env::args().collect();

		opts = getopts::Options::new();
		opts.optflag( "h", "help",        "Show help");
		opts.optflag( "v", "verbose",     "Increased verbosity");
		opts.optopt(  "c", "catalog",     "Catalog JSON file", "PATH");
		opts.optflag( "l", "list",        "List the courses available for selection");
		opts.optopt(  "m", "max",         "Largest selection allowed (default 8)", "N");
		opts.optflag( "",  "no-limit",    "Allow selections of any size");
		opts.optflag( "",  "omit-cycles", "Leave out courses caught in prerequisite cycles instead of failing");
		opts.optflag( "",  "json",        "Print the ordered courses as JSON");
		opts.optflag( "",  "graph",       "Print the dependency graph as JSON");
		opts.parsing_style(getopts::ParsingStyle::FloatingFrees);

		let parsed_options = match opts.parse(&args[1..]) {
			Ok(m)  => { m }
			Err(e) => { eprintln!("Unable to parse options: {}", e); return std::process::ExitCode::FAILURE }
		};

		if parsed_options.opt_present("h") {
			eprintln!("{}", opts.usage("Usage: course-order-terminal [options] <COURSE>..."));
			return std::process::ExitCode::SUCCESS;
		}

		parsed_options
	};

	{
		let default_level = if parsed_options.opt_present("v") { "debug" } else { "warn" };
		env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
	}

	match run(&parsed_options) {
		Ok(_) => std::process::ExitCode::SUCCESS,
		Err(e) => {
			log::error!("{}", e);
			std::process::ExitCode::FAILURE
		},
	}
}

fn run(parsed_options: &getopts::Matches) -> Result<(), Error> {
	let mut options = CourseOrderOptions::default();

	if let Some(path) = parsed_options.opt_str("c") {
		let path = std::path::PathBuf::from(path);
		if !options.set_catalog_path(path.clone()) {
			return Err(Error::CatalogNotFound(path));
		}
	}
	if let Some(max) = parsed_options.opt_str("m") {
		let max = max.parse::<usize>().map_err(|_| Error::InvalidArgument(format!("max must be a number, got \"{}\"", max)))?;
		options.set_max_selection(Some(max));
	}
	if parsed_options.opt_present("no-limit") {
		options.set_max_selection(None);
	}
	if parsed_options.opt_present("omit-cycles") {
		options.set_cycle_policy(CyclePolicy::Omit);
	}

	let catalog = Catalog::load_from_file(options.catalog_path()).map_err(|e| {
		log::error!("Failed to read catalog {}", options.catalog_path().display());
		e
	})?;

	if parsed_options.opt_present("l") {
		for course in catalog.graduate_courses() {
			println!("{}", course);
		}
		return Ok(());
	}

	if parsed_options.free.is_empty() {
		return Err(Error::MissingArgument);
	}

	let selection = catalog.select(&parsed_options.free)?;

	if parsed_options.opt_present("graph") {
		let graph = DependencyGraph::build(&selection);
		println!("{}", serde_json::to_string_pretty(&graph)?);
		return Ok(());
	}

	let resolved = Resolver::from_options(&options).resolve(&selection)?;

	if parsed_options.opt_present("json") {
		println!("{}", serde_json::to_string_pretty(resolved.courses())?);
	} else {
		for (i, course) in resolved.courses().iter().enumerate() {
			println!("{}. {}", i + 1, course);
		}
	}

	if !resolved.is_complete() {
		log::warn!("Courses left out due to prerequisite cycles:");
		for course in resolved.omitted() {
			log::warn!("\t{}", course);
		}
	}

	Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("course-order error: {0}")]
	CourseOrder(#[from] course_order::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
	#[error("No courses given")]
	MissingArgument,
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
	#[error("Catalog file not found: {}", .0.display())]
	CatalogNotFound(std::path::PathBuf),
}
