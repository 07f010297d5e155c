use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    codegen::GeneratedFiles,
    metrics::GenerationStats,
    orchestrator::{GeneratedOutput, GeneratorConfig, Orchestrator},
  },
  naming::identifiers::is_valid_identifier,
  openapi::Document,
  ui::{Colors, GenerateCommand},
  utils::spec::{STDIN_ARG, SpecLoader},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub class_name: String,
  pub base_url: Option<String>,
  pub sdk_version: String,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      class_name,
      base_url,
      sdk_version,
      verbose,
      quiet,
    } = command;

    if !is_valid_identifier(&class_name) {
      anyhow::bail!("Class name '{class_name}' is not a valid TypeScript identifier");
    }

    Ok(Self {
      input,
      output,
      class_name,
      base_url: base_url.filter(|url| !url.trim().is_empty()),
      sdk_version,
      verbose,
      quiet,
    })
  }

  async fn load_spec(&self) -> anyhow::Result<Document> {
    let loader = SpecLoader::open(&self.input).await?;
    Ok(loader.load().await?)
  }

  fn create_orchestrator(&self, document: Document) -> Orchestrator {
    let config = GeneratorConfig::builder()
      .class_name(self.class_name.clone())
      .maybe_base_url(self.base_url.clone())
      .sdk_version(self.sdk_version.clone())
      .build();
    Orchestrator::new(document, config)
  }

  async fn write_output(&self, files: &GeneratedFiles) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(&self.output)
      .await
      .with_context(|| format!("creating output directory {}", self.output.display()))?;
    for (name, code) in files.entries() {
      let path = self.output.join(name);
      tokio::fs::write(&path, code)
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
  }
}

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
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    let source = if self.config.input.as_os_str() == STDIN_ARG {
      "stdin".to_string()
    } else {
      self.config.input.display().to_string()
    };
    self.info(
      &format!("Loading OpenAPI document from: {source}")
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(
      &format!("Generating TypeScript SDK '{}'...", self.config.class_name)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Types generated:", stats.types_generated.to_string());
    self.stat("", format!("{} interfaces", stats.interfaces_generated));
    self.stat("", format!("{} type aliases", stats.type_aliases_generated));
    self.stat("Params generated:", stats.param_interfaces_generated.to_string());
    if stats.option_types_generated > 0 {
      self.stat("", format!("{} option types", stats.option_types_generated));
    }
    self.stat("Methods generated:", stats.methods_generated.to_string());
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_cycles(stats);
    self.print_warnings(stats);
  }

  fn print_cycles(&self, stats: &GenerationStats) {
    if stats.cycles_detected == 0 {
      return;
    }

    self.stat("Cycles:", stats.cycles_detected.to_string());

    if self.config.verbose {
      for (i, cycle) in stats.cycle_details.iter().enumerate() {
        println!(
          "              {}: {}",
          format!("Cycle {}", i + 1).with(self.colors.accent()),
          cycle.join(" -> ").with(self.colors.info())
        );
      }
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    let mut printed_header = false;
    for warning in &stats.warnings {
      if !warning.is_skipped_item() && !self.config.verbose {
        continue;
      }

      if !printed_header {
        println!();
        printed_header = true;
      }

      let label = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
      eprintln!(
        "{} {}",
        label.with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated TypeScript SDK".with(self.colors.success())
      );
    }
  }
}

/// Loads the document, generates all three files and only then writes them, so a
/// failure never leaves partial output behind.
pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<GeneratedOutput> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let document = config.load_spec().await?;

  logger.log_generating();
  let output = config.create_orchestrator(document).generate()?;
  logger.print_statistics(&output.stats);

  logger.log_writing();
  config.write_output(&output.files).await?;

  logger.log_success();
  Ok(output)
}
