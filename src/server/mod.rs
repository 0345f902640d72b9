mod exporter;
pub mod handler;

pub use exporter::Exporter;
pub use handler::{ExporterHandler, STATUS_PATH};
