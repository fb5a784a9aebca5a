pub mod error;
pub use error::Result;
pub use error::Error;

pub mod catalog;
pub use catalog::Catalog;
pub use catalog::CourseRecord;

pub mod config;
pub use config::CourseOrderOptions;

pub mod relationship_resolver;
pub use relationship_resolver::resolve;
