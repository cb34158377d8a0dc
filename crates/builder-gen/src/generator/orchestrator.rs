//! Drives a builder generation from a code model to an edited compilation unit.
//!
//! ```no_run
//! # async fn example() -> anyhow::Result<()> {
//! let manifest = TypeManifest::from_json(&std::fs::read_to_string("point.json")?)?;
//! let naming = ConventionalNaming::default();
//! let orchestrator = Orchestrator::new(&manifest, &naming, GenerationOptions::default());
//!
//! let source = std::fs::read_to_string("Point.java")?;
//! let formatter = ExternalFormatter::parse("google-java-format -");
//! let output = orchestrator.generate_unit(&source, formatter.as_ref()).await?;
//! std::fs::write("Point.java", output.code)?;
//! # Ok(())
//! # }
//! ```

use super::{
  artifacts::ArtifactMatcher,
  error::GenerationError,
  fields::FieldDescriptor,
  formatter::SourceFormatter,
  metrics::{GenerationStats, GenerationWarning, naming_warnings},
  model::CodeModel,
  naming::NamingPolicy,
  options::GenerationOptions,
  source_unit::SourceUnit,
  synthesizer::BuilderSynthesizer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
  pub code: String,
  pub stats: GenerationStats,
}

pub struct Orchestrator<'a> {
  model: &'a dyn CodeModel,
  naming: &'a dyn NamingPolicy,
  options: GenerationOptions,
}

impl<'a> Orchestrator<'a> {
  pub fn new(model: &'a dyn CodeModel, naming: &'a dyn NamingPolicy, options: GenerationOptions) -> Self {
    Self { model, naming, options }
  }

  /// Synthesizes the builder members without touching any source text.
  pub fn generate_fragment(&self) -> Result<GeneratedOutput, GenerationError> {
    let (type_name, fields) = self.load_model()?;
    let code = BuilderSynthesizer::new(self.naming).synthesize(&type_name, &fields, &self.options);

    Ok(GeneratedOutput {
      code,
      stats: self.synthesis_stats(&fields),
    })
  }

  /// Replaces earlier generated members of the type in `source` with a fresh synthesis.
  ///
  /// Old members are removed and the new text inserted before the type's balancing closing brace in a
  /// single rebuild of the unit, so any error leaves `source` as the only result.
  pub fn splice(&self, source: &str) -> Result<GeneratedOutput, GenerationError> {
    let (type_name, fields) = self.load_model()?;
    let code = BuilderSynthesizer::new(self.naming).synthesize(&type_name, &fields, &self.options);

    let unit = SourceUnit::new(source);
    let span = unit.locate_type(&type_name)?;
    let matcher = self.artifact_matcher(&type_name, &fields)?;
    let removals = unit
      .block_members(span)?
      .into_iter()
      .filter(|member| matcher.matches(&member.header))
      .map(|member| member.span)
      .collect::<Vec<_>>();

    let spliced = unit.splice(span, &removals, &code)?;

    let mut stats = self.synthesis_stats(&fields);
    stats.record_artifacts_replaced(removals.len());

    Ok(GeneratedOutput { code: spliced, stats })
  }

  /// Splices, then runs `formatter` over the whole unit when `format_source` is set. A failed or missing
  /// formatter is reported as a warning and the unformatted splice is returned.
  pub async fn generate_unit<F: SourceFormatter>(
    &self,
    source: &str,
    formatter: Option<&F>,
  ) -> Result<GeneratedOutput, GenerationError> {
    let mut output = self.splice(source)?;
    if !self.options.format_source {
      return Ok(output);
    }

    match formatter {
      None => output.stats.record_warning(GenerationWarning::FormatterNotConfigured),
      Some(formatter) => match formatter.format(&output.code).await {
        Ok(formatted) => {
          output.code = formatted;
          output.stats.record_formatted();
        }
        Err(e) => output
          .stats
          .record_warning(GenerationWarning::FormatterFailed { error: format!("{e:#}") }),
      },
    }

    Ok(output)
  }

  fn load_model(&self) -> Result<(String, Vec<FieldDescriptor>), GenerationError> {
    let type_name = self.model.enclosing_type_name()?;
    let fields = self.model.fields()?;
    Ok((type_name, fields))
  }

  fn artifact_matcher(&self, type_name: &str, fields: &[FieldDescriptor]) -> Result<ArtifactMatcher, GenerationError> {
    let getters = if self.options.create_class_getters {
      fields
        .iter()
        .map(|field| self.naming.getter_name(&field.name, field.is_boolean()))
        .collect()
    } else {
      vec![]
    };
    let setters = if self.options.create_class_setters {
      fields
        .iter()
        .map(|field| self.naming.setter_name(&field.name, field.is_boolean()))
        .collect()
    } else {
      vec![]
    };

    ArtifactMatcher::new(
      type_name,
      &getters.iter().map(String::as_str).collect::<Vec<_>>(),
      &setters.iter().map(String::as_str).collect::<Vec<_>>(),
    )
    .map_err(|e| GenerationError::location(type_name, format!("generated members ({e})")))
  }

  fn synthesis_stats(&self, fields: &[FieldDescriptor]) -> GenerationStats {
    let mut stats = GenerationStats::default();
    stats.record_synthesis(fields.len(), &self.options);
    stats.record_warnings(naming_warnings(fields, self.naming));
    stats
  }
}
