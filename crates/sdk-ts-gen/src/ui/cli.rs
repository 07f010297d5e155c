use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};
use crate::{
  generator::orchestrator::{DEFAULT_CLASS_NAME, DEFAULT_SDK_VERSION},
  utils::spec::STDIN_ARG,
};

/// Running without a subcommand generates the client.
#[derive(Parser, Debug)]
#[command(name = "sdk-ts-gen")]
#[command(author, version, about = "OpenAPI 3.x to TypeScript client SDK generator")]
#[command(styles = Colors::clap_styles(), args_conflicts_with_subcommands = true)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Option<Commands>,

  #[command(flatten)]
  pub generate: GenerateCommand,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

impl Cli {
  /// The explicit subcommand, or `generate` with the top-level flags.
  pub fn into_command(self) -> Commands {
    self.command.unwrap_or(Commands::Generate(self.generate))
  }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from an OpenAPI document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate sdk.ts, types.ts and params.ts from an OpenAPI document
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Path to the OpenAPI JSON or YAML document, or '-' for stdin
  #[arg(short = 'd', long = "doc", value_name = "FILE", default_value = STDIN_ARG)]
  pub input: PathBuf,

  /// Directory where the generated TypeScript files will be written
  #[arg(short, long, value_name = "DIR", default_value = "./src")]
  pub output: PathBuf,

  /// Name of the generated client class
  #[arg(long, value_name = "NAME", default_value = DEFAULT_CLASS_NAME)]
  pub class_name: String,

  /// Default base URL of the client (first server of the document when omitted)
  #[arg(long, value_name = "URL")]
  pub base_url: Option<String>,

  /// Value sent in the SDK version header
  #[arg(long, value_name = "VERSION", default_value = DEFAULT_SDK_VERSION)]
  pub sdk_version: String,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all operations defined in the OpenAPI document
  Operations {
    /// Path to the OpenAPI JSON or YAML document, or '-' for stdin
    #[arg(short = 'd', long = "doc", value_name = "FILE", default_value = STDIN_ARG)]
    input: PathBuf,
  },
}
