pub mod check;
pub mod get;
pub mod models;
pub mod ordering;

pub use check::{check, list_versions};
pub use get::{build_metadata, get, write_metadata, Fetched};
pub use models::{MetadataPair, Version};
pub use ordering::{order_versions, Diagnostics, LogDiagnostics, OrderingWarning};
