use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};
use crate::generator::{ConventionalNaming, DEFAULT_FORMATTER_COMMAND, GenerationOptions};

#[derive(Parser, Debug)]
#[command(name = "builder-gen")]
#[command(author, version, about = "Builder-pattern generator for Java classes", styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Generate a builder for the type described by a manifest
  Generate(GenerateCommand),
  /// List information derived from a type manifest
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Path to the JSON type manifest (type name, fields, options)
  #[arg(short, long, value_name = "FILE")]
  pub manifest: PathBuf,

  /// Java source file to splice the builder into. Without it only the generated members are emitted
  #[arg(short, long, value_name = "FILE")]
  pub source: Option<PathBuf>,

  /// Where to write the result. Defaults to rewriting --source in place, or stdout without --source
  #[arg(short, long, value_name = "FILE")]
  pub output: Option<PathBuf>,

  #[command(flatten)]
  pub options: OptionFlags,

  #[command(flatten)]
  pub naming: NamingArgs,

  /// Formatter command; it receives the unit on stdin and prints the formatted unit
  #[arg(long, value_name = "COMMAND", default_value = DEFAULT_FORMATTER_COMMAND)]
  pub formatter: String,

  /// Enable verbose output with detailed warnings
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
  pub quiet: bool,
}

/// Switches that move generation options away from their defaults. They win over manifest options.
#[derive(Args, Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct OptionFlags {
  /// Let build() populate a new instance instead of generating a constructor that takes the builder
  #[arg(long, default_value_t = false)]
  pub builder_constructor: bool,

  /// Skip the static with() factories
  #[arg(long, default_value_t = false)]
  pub no_with_methods: bool,

  /// Skip the builder's no-arg and copy constructors
  #[arg(long, default_value_t = false)]
  pub no_copy_constructor: bool,

  /// Generate getters on the builder
  #[arg(long, default_value_t = false)]
  pub builder_getters: bool,

  /// Generate getters on the enclosing type
  #[arg(long, default_value_t = false)]
  pub class_getters: bool,

  /// Generate setters on the enclosing type
  #[arg(long, default_value_t = false)]
  pub class_setters: bool,

  /// Do not run the formatter after splicing
  #[arg(long, default_value_t = false)]
  pub no_format: bool,
}

impl OptionFlags {
  #[must_use]
  pub fn apply(&self, options: GenerationOptions) -> GenerationOptions {
    GenerationOptions {
      create_builder_constructor: options.create_builder_constructor || self.builder_constructor,
      create_static_with_methods: options.create_static_with_methods && !self.no_with_methods,
      create_copy_constructor: options.create_copy_constructor && !self.no_copy_constructor,
      create_builder_getters: options.create_builder_getters || self.builder_getters,
      create_class_getters: options.create_class_getters || self.class_getters,
      create_class_setters: options.create_class_setters || self.class_setters,
      format_source: options.format_source && !self.no_format,
    }
  }
}

#[derive(Args, Debug, Clone, Default)]
pub struct NamingArgs {
  /// Field name prefixes to strip when deriving base names (comma-separated)
  #[arg(long = "field-prefix", value_name = "PREFIXES", value_delimiter = ',')]
  pub prefixes: Vec<String>,

  /// Field name suffixes to strip when deriving base names (comma-separated)
  #[arg(long = "field-suffix", value_name = "SUFFIXES", value_delimiter = ',')]
  pub suffixes: Vec<String>,
}

impl NamingArgs {
  pub fn into_policy(self) -> ConventionalNaming {
    ConventionalNaming::with_affixes(self.prefixes, self.suffixes)
  }
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List the manifest's fields with the names generated for them
  Fields {
    /// Path to the JSON type manifest
    #[arg(short, long, value_name = "FILE")]
    manifest: PathBuf,

    #[command(flatten)]
    naming: NamingArgs,
  },
}
