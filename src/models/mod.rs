pub mod config;
pub mod options;
pub mod report;

pub use config::AppConfig;
pub use options::{ExtractOptions, DEFAULT_IGNORE, DEFAULT_SCALE};
pub use report::ColorReport;
