//! Document domain entities.

pub mod format;
pub mod header;
pub mod location;
pub mod model;
pub mod name;

pub use format::DocumentFormat;
pub use header::ParsedDocument;
pub use location::Location;
pub use model::DocumentSummary;
pub use name::DocumentName;
