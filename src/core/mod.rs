pub mod engine;
pub mod export;
pub mod generator;
pub mod letters;
pub mod presentation;

pub use crate::domain::model::{BusinessInputs, BusinessModel, GeneratedReport};
pub use crate::domain::ports::{Pipeline, ReportSettings, Storage};
pub use crate::utils::error::Result;
