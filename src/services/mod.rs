pub mod batch;
pub mod extractor;

pub use batch::{BatchFailure, BatchReport, BatchRunner};
pub use extractor::{extract_colors, ColorExtractor};
