pub mod detection;
pub mod models;
pub mod config;
pub mod error;
pub mod calibration;
pub mod measurement;
pub mod annotation;

pub use config::MeasureConfig;
pub use detection::MeasurePipeline;
pub use detection::preprocessing::Preprocessed;
pub use error::{MeasureError, MeasureResult};
pub use models::{BoundingRect, Measurement, MeasureReport, ReferenceCircle, ScaleFactor};
