mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from solegauge for tests
pub use solegauge::{
    BoundingRect, MeasureConfig, MeasureError, MeasurePipeline, MeasureReport, Measurement,
    ReferenceCircle, ScaleFactor,
};
