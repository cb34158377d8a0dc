use std::{
  io::Write,
  path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use tokio::io::AsyncWriteExt;

use crate::{
  generator::{
    ConventionalNaming, ExternalFormatter, GeneratedOutput, GenerationOptions, GenerationStats, Orchestrator,
    TypeManifest,
  },
  ui::{Colors, GenerateCommand, OptionFlags},
  utils::ManifestLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
  Stdout,
  File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub manifest: PathBuf,
  pub source: Option<PathBuf>,
  pub output: OutputTarget,
  pub flags: OptionFlags,
  pub naming: ConventionalNaming,
  pub formatter: Option<ExternalFormatter>,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      manifest,
      source,
      output,
      options,
      naming,
      formatter,
      verbose,
      quiet,
    } = command;

    let output = match (output, &source) {
      (Some(path), _) => OutputTarget::File(path),
      (None, Some(source)) => OutputTarget::File(source.clone()),
      (None, None) => OutputTarget::Stdout,
    };
    let formatter = ExternalFormatter::parse(&formatter);
    if formatter.is_none() && !options.no_format && source.is_some() {
      anyhow::bail!("--formatter must name a program; pass --no-format to skip formatting");
    }

    Ok(Self {
      manifest,
      source,
      output,
      flags: options,
      naming: naming.into_policy(),
      formatter,
      verbose,
      quiet,
    })
  }

  /// Defaults, then the manifest's `options` object, then command-line switches.
  pub fn resolve_options(&self, manifest: &TypeManifest) -> GenerationOptions {
    self.flags.apply(manifest.options.unwrap_or_default())
  }

  async fn load_manifest(&self) -> anyhow::Result<TypeManifest> {
    ManifestLoader::open(&self.manifest).await?.parse()
  }

  async fn write_output(&self, code: &str) -> anyhow::Result<()> {
    match &self.output {
      OutputTarget::Stdout => {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(code.as_bytes()).await?;
        stdout.flush().await?;
      }
      OutputTarget::File(path) => {
        let dir = match path.parent() {
          Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
          _ => PathBuf::from("."),
        };
        tokio::fs::create_dir_all(&dir).await?;

        let context = format!("failed to write {}", path.display());
        let path = path.clone();
        let code = code.to_string();
        tokio::task::spawn_blocking(move || replace_file(&dir, &path, &code))
          .await?
          .context(context)?;
      }
    }
    Ok(())
  }
}

/// Console reporting for `generate`. Everything goes to stderr so generated code can be piped from stdout.
struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      eprintln!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      eprintln!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading type manifest from: {}", self.config.manifest.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self, type_name: &str, options: &GenerationOptions) {
    let message = match &self.config.source {
      Some(source) => format!("Generating builder for {type_name} into {}...", source.display()),
      None => format!("Generating builder members for {type_name}..."),
    };
    self.info(&message.with(self.colors.primary()).to_string());

    if self.config.verbose {
      self.stat("Build style:", format!("{:?}", options.build_style()));
      self.stat("Options:", format!("{options:?}"));
      if let Some(formatter) = &self.config.formatter
        && options.format_source
        && self.config.source.is_some()
      {
        self.stat("Formatter:", formatter.command_line());
      }
    }
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Fields:", stats.fields.to_string());
    self.stat("Builder methods:", stats.builder_methods.to_string());
    self.stat("Constructors:", stats.constructors.to_string());
    if stats.static_factories > 0 {
      self.stat("Static factories:", stats.static_factories.to_string());
    }
    if stats.class_accessors > 0 {
      self.stat("Class accessors:", stats.class_accessors.to_string());
    }
    if stats.builder_accessors > 0 {
      self.stat("Builder accessors:", stats.builder_accessors.to_string());
    }
    if self.config.source.is_some() {
      self.stat("Members replaced:", stats.artifacts_replaced.to_string());
      self.stat("Formatted:", if stats.formatted { "yes" } else { "no" }.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    let mut printed_header = false;
    for warning in &stats.warnings {
      // formatter notes are routine unless asked for
      if !warning.is_naming_conflict() && !self.config.verbose {
        continue;
      }

      if !printed_header {
        eprintln!();
        printed_header = true;
      }

      let label = if warning.is_naming_conflict() { "Conflict:" } else { "Warning:" };
      eprintln!(
        "{} {}",
        label.with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    let target = match &self.config.output {
      OutputTarget::Stdout => "stdout".to_string(),
      OutputTarget::File(path) => path.display().to_string(),
    };
    self.info(&format!("Writing to: {target}").with(self.colors.primary()).to_string());
  }

  fn log_success(&self) {
    if !self.config.quiet {
      eprintln!();
      eprintln!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated builder".with(self.colors.success())
      );
    }
  }
}

/// Writes `code` to a temporary file next to `path`, then renames it over `path`. An interrupted write leaves
/// the previous file untouched. Permissions of an existing file are kept.
fn replace_file(dir: &Path, path: &Path, code: &str) -> anyhow::Result<()> {
  let mut file = tempfile::NamedTempFile::new_in(dir)?;
  file.write_all(code.as_bytes())?;
  if let Ok(metadata) = std::fs::metadata(path) {
    file.as_file().set_permissions(metadata.permissions())?;
  }
  file.as_file().sync_all()?;
  file.persist(path)?;
  Ok(())
}

async fn read_source(path: &Path) -> anyhow::Result<String> {
  tokio::fs::read_to_string(path)
    .await
    .with_context(|| format!("failed to read source {}", path.display()))
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let manifest = config.load_manifest().await?;
  let options = config.resolve_options(&manifest);
  logger.log_generating(manifest.type_name.trim(), &options);

  let orchestrator = Orchestrator::new(&manifest, &config.naming, options);
  let GeneratedOutput { code, stats } = match &config.source {
    Some(source_path) => {
      let source = read_source(source_path).await?;
      orchestrator
        .generate_unit(&source, config.formatter.as_ref())
        .await
        .with_context(|| format!("builder generation for {} aborted", source_path.display()))?
    }
    None => orchestrator.generate_fragment()?,
  };

  logger.print_statistics(&stats);
  logger.log_writing();
  config.write_output(&code).await?;
  logger.log_success();

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ui::{NamingArgs, colors::Theme};

  fn command(manifest: &Path, source: Option<&Path>) -> GenerateCommand {
    GenerateCommand {
      manifest: manifest.to_path_buf(),
      source: source.map(Path::to_path_buf),
      output: None,
      options: OptionFlags {
        no_format: true,
        ..OptionFlags::default()
      },
      naming: NamingArgs::default(),
      formatter: "cat".to_string(),
      verbose: false,
      quiet: true,
    }
  }

  #[test]
  fn test_output_defaults_to_source_then_stdout() {
    let config = GenerateConfig::from_command(command(Path::new("p.json"), Some(Path::new("P.java")))).unwrap();
    assert_eq!(config.output, OutputTarget::File(PathBuf::from("P.java")));

    let config = GenerateConfig::from_command(command(Path::new("p.json"), None)).unwrap();
    assert_eq!(config.output, OutputTarget::Stdout);
  }

  #[test]
  fn test_blank_formatter_requires_no_format() {
    let mut cmd = command(Path::new("p.json"), Some(Path::new("P.java")));
    cmd.formatter = "  ".to_string();
    assert!(GenerateConfig::from_command(cmd.clone()).is_ok());

    cmd.options.no_format = false;
    let err = GenerateConfig::from_command(cmd).unwrap_err();
    assert!(err.to_string().contains("--no-format"));
  }

  #[test]
  fn test_resolve_options_layers_manifest_and_flags() {
    let manifest = TypeManifest::from_json(
      r#"{"type_name":"Point","options":{"create_class_getters":true,"create_copy_constructor":false}}"#,
    )
    .unwrap();
    let config = GenerateConfig::from_command(command(Path::new("p.json"), None)).unwrap();

    let options = config.resolve_options(&manifest);
    assert!(options.create_class_getters);
    assert!(!options.create_copy_constructor);
    assert!(!options.format_source);
  }

  #[tokio::test]
  async fn test_generate_rewrites_source_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let manifest_path = dir.path().join("point.json");
    let source_path = dir.path().join("Point.java");
    tokio::fs::write(
      &manifest_path,
      r#"{"type_name":"Point","fields":[{"name":"x","type":"int"},{"name":"y","type":"int"}]}"#,
    )
    .await
    .unwrap();
    tokio::fs::write(&source_path, "public class Point {\n    private int x;\n    private int y;\n}\n")
      .await
      .unwrap();

    let config = GenerateConfig::from_command(command(&manifest_path, Some(&source_path))).unwrap();
    generate_code(config, &Colors::new(false, Theme::Dark)).await.unwrap();

    let first = tokio::fs::read_to_string(&source_path).await.unwrap();
    assert!(first.contains("    private Point(final Builder builder) {"));
    assert!(first.contains("        public Builder y(int yParam) {"));

    let config = GenerateConfig::from_command(command(&manifest_path, Some(&source_path))).unwrap();
    generate_code(config, &Colors::new(false, Theme::Dark)).await.unwrap();
    let second = tokio::fs::read_to_string(&source_path).await.unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn test_replace_file_leaves_no_temporary_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Point.java");
    std::fs::write(&path, "class Point {}\n").unwrap();

    replace_file(dir.path(), &path, "class Point {\n}\n").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "class Point {\n}\n");
    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
  }

  #[cfg(unix)]
  #[test]
  fn test_replace_file_keeps_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Point.java");
    std::fs::write(&path, "class Point {}\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    replace_file(dir.path(), &path, "class Point {\n}\n").unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
  }

  #[test]
  fn test_replace_file_failure_keeps_original() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Point.java");
    std::fs::write(&path, "class Point {}\n").unwrap();

    let missing_dir = dir.path().join("missing");
    assert!(replace_file(&missing_dir, &path, "broken").is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "class Point {}\n");
  }

  #[tokio::test]
  async fn test_generate_fragment_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let manifest_path = dir.path().join("point.json");
    let output_path = dir.path().join("out").join("Point.fragment.java");
    tokio::fs::write(&manifest_path, r#"{"type_name":"Point","fields":[{"name":"x","type":"int"}]}"#)
      .await
      .unwrap();

    let mut cmd = command(&manifest_path, None);
    cmd.output = Some(output_path.clone());
    generate_code(GenerateConfig::from_command(cmd).unwrap(), &Colors::new(false, Theme::Dark))
      .await
      .unwrap();

    let fragment = tokio::fs::read_to_string(&output_path).await.unwrap();
    assert!(fragment.starts_with("\n    private Point(final Builder builder) {"));
    assert!(fragment.ends_with("    }\n"));
  }

  #[tokio::test]
  async fn test_generate_fails_without_touching_source_when_type_missing() {
    let dir = tempfile::tempdir().unwrap();
    let manifest_path = dir.path().join("circle.json");
    let source_path = dir.path().join("Point.java");
    let original = "public class Point {\n}\n";
    tokio::fs::write(&manifest_path, r#"{"type_name":"Circle"}"#).await.unwrap();
    tokio::fs::write(&source_path, original).await.unwrap();

    let config = GenerateConfig::from_command(command(&manifest_path, Some(&source_path))).unwrap();
    let err = generate_code(config, &Colors::new(false, Theme::Dark)).await.unwrap_err();

    assert!(format!("{err:#}").contains("cannot locate declaration of type 'Circle'"));
    assert_eq!(tokio::fs::read_to_string(&source_path).await.unwrap(), original);
  }
}
