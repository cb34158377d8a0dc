pub(crate) mod artifacts;
pub mod error;
pub mod fields;
pub mod formatter;
pub(crate) mod fragments;
pub mod metrics;
pub mod model;
pub mod naming;
pub mod options;
pub mod orchestrator;
pub(crate) mod source_unit;
pub mod synthesizer;
pub(crate) mod writer;

#[cfg(test)]
mod tests;

pub use error::GenerationError;
pub use fields::FieldDescriptor;
pub use formatter::{DEFAULT_FORMATTER_COMMAND, ExternalFormatter, SourceFormatter};
pub use metrics::{GenerationStats, GenerationWarning, naming_warnings};
pub use model::{CodeModel, TypeManifest};
pub use naming::{ConventionalNaming, NamingPolicy};
pub use options::{BuildStyle, GenerationOptions};
pub use orchestrator::{GeneratedOutput, Orchestrator};
pub use synthesizer::BuilderSynthesizer;
