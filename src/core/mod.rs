pub mod cube;
pub mod engine;
pub mod lucas;
pub mod report;

pub use crate::domain::model::{CubeCheck, ReportEntry, SequenceEntry};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
