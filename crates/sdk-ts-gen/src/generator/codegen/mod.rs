use std::collections::BTreeSet;

pub(crate) mod client;
pub(crate) mod methods;
pub(crate) mod models;
pub(crate) mod params;
pub(crate) mod query;

#[cfg(test)]
mod tests;

pub(crate) const INDENT: &str = "  ";

pub(crate) const TYPES_MODULE: &str = "./types";
pub(crate) const PARAMS_MODULE: &str = "./params";

/// The three rendered artifacts of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
  pub sdk: String,
  pub types: String,
  pub params: String,
}

impl GeneratedFiles {
  pub const SDK_FILE: &'static str = "sdk.ts";
  pub const TYPES_FILE: &'static str = "types.ts";
  pub const PARAMS_FILE: &'static str = "params.ts";

  /// File names paired with their contents, in write order.
  pub fn entries(&self) -> [(&'static str, &str); 3] {
    [
      (Self::TYPES_FILE, &self.types),
      (Self::PARAMS_FILE, &self.params),
      (Self::SDK_FILE, &self.sdk),
    ]
  }
}

/// Line-oriented text buffer with two-space indentation.
#[derive(Debug, Default)]
pub(crate) struct CodeWriter {
  buffer: String,
  depth: usize,
}

impl CodeWriter {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn with_depth(depth: usize) -> Self {
    Self {
      buffer: String::new(),
      depth,
    }
  }

  pub(crate) fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
    let text = text.as_ref();
    if !text.is_empty() {
      for _ in 0..self.depth {
        self.buffer.push_str(INDENT);
      }
      self.buffer.push_str(text);
    }
    self.buffer.push('\n');
    self
  }

  pub(crate) fn blank(&mut self) -> &mut Self {
    self.buffer.push('\n');
    self
  }

  /// Writes `text` and indents the following lines.
  pub(crate) fn open(&mut self, text: impl AsRef<str>) -> &mut Self {
    self.line(text);
    self.depth += 1;
    self
  }

  /// Dedents and writes `text`.
  pub(crate) fn close(&mut self, text: impl AsRef<str>) -> &mut Self {
    self.depth = self.depth.saturating_sub(1);
    self.line(text)
  }

  pub(crate) fn raw(&mut self, text: &str) -> &mut Self {
    self.buffer.push_str(text);
    self
  }

  pub(crate) fn finish(self) -> String {
    self.buffer
  }
}

/// Names a generated module must import, grouped by source module and kept sorted.
#[derive(Debug, Default)]
pub(crate) struct ImportAccumulator {
  types: BTreeSet<String>,
  params: BTreeSet<String>,
}

impl ImportAccumulator {
  pub(crate) fn add_type(&mut self, name: impl Into<String>) {
    self.types.insert(name.into());
  }

  pub(crate) fn add_param(&mut self, name: impl Into<String>) {
    self.params.insert(name.into());
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.types.is_empty() && self.params.is_empty()
  }

  /// Renders one multi-line import statement per non-empty module.
  pub(crate) fn finish(self) -> String {
    let mut writer = CodeWriter::new();
    for (names, module) in [(&self.types, TYPES_MODULE), (&self.params, PARAMS_MODULE)] {
      if names.is_empty() {
        continue;
      }
      writer.open("import {");
      for name in names {
        writer.line(format!("{name},"));
      }
      writer.close(format!("}} from '{module}';"));
    }
    writer.finish()
  }
}
