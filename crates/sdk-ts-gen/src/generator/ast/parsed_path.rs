use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::naming::identifiers::to_camel_case;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^}]+)\}").unwrap());

/// A path template such as `/orders/{order_id}/items` and its placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
  raw: String,
  placeholders: Vec<String>,
}

impl PathTemplate {
  pub fn parse(path: &str) -> Self {
    let mut placeholders: Vec<String> = vec![];
    for captures in PLACEHOLDER_RE.captures_iter(path) {
      let name = captures[1].to_string();
      if !placeholders.contains(&name) {
        placeholders.push(name);
      }
    }

    Self {
      raw: path.to_string(),
      placeholders,
    }
  }

  pub fn raw(&self) -> &str {
    &self.raw
  }

  /// Placeholder names as client argument identifiers.
  pub fn argument_names(&self) -> Vec<String> {
    self.placeholders.iter().map(|name| to_camel_case(name)).collect()
  }

  /// Template literal body with every `{param}` replaced by `${param}` in camelCase.
  pub fn to_template_literal(&self) -> String {
    PLACEHOLDER_RE
      .replace_all(&self.raw, |captures: &Captures<'_>| format!("${{{}}}", to_camel_case(&captures[1])))
      .into_owned()
  }
}
