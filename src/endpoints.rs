//! The endpoint URIs.

/// The landing page with the entry form and the latest records.
pub const ROOT: &str = "/";
/// The route that accepts the record entry form.
pub const SUBMIT: &str = "/submit";
/// The page for displaying every record.
pub const RECORDS_VIEW: &str = "/records";
/// The route for downloading every record as a CSV file.
pub const EXPORT: &str = "/export";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";
