pub mod annotate;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod result;
pub mod sequence;
pub mod verify;
// cmd and reports belong to the binary (main.rs).

pub use annotate::{annotate, AnnotatedStep, Parity};
pub use error::{CollatzError, CzResult};
pub use result::{compute, ChartSeries, SequenceResult};
pub use sequence::{generate, generate_with, Trajectory};
