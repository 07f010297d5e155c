use std::sync::LazyLock;

use any_ascii::any_ascii;
use regex::Regex;

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());
static NON_ALPHANUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]").unwrap());

/// Transliterates to ASCII and replaces runs of characters that cannot appear in an
/// identifier with a single underscore. Underscores already present are kept.
pub(crate) fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }
  INVALID_CHARS_RE.replace_all(&any_ascii(input), "_").into_owned()
}

fn capitalize_first(part: &str) -> String {
  let mut chars = part.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

fn lowercase_first(part: &str) -> String {
  let mut chars = part.chars();
  match chars.next() {
    Some(first) => first.to_lowercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// All cased characters are uppercase. Digits and punctuation do not count against it.
fn is_all_upper(part: &str) -> bool {
  part.chars().all(|c| !c.is_alphabetic() || c.is_uppercase())
}

/// Converts a wire name such as `created_at` or `_embedded` into `createdAt` / `embedded`.
///
/// One leading underscore is dropped, the remainder is split on `_`, the first part
/// starts lowercase (fully lowercased when it is an acronym) and every following part
/// starts uppercase with the rest of its characters kept.
pub(crate) fn to_camel_case(input: &str) -> String {
  let sanitized = sanitize(input);
  let trimmed = sanitized.strip_prefix('_').unwrap_or(&sanitized);

  trimmed
    .split('_')
    .enumerate()
    .map(|(index, part)| match index {
      0 if is_all_upper(part) => part.to_lowercase(),
      0 => lowercase_first(part),
      _ => capitalize_first(part),
    })
    .collect()
}

/// Converts a name into `PascalCase`, keeping multi-letter acronym parts such as `UUID` intact.
pub(crate) fn to_pascal_case(input: &str) -> String {
  let ident: String = sanitize(input)
    .split('_')
    .map(|part| {
      if part.chars().count() > 1 && is_all_upper(part) {
        part.to_string()
      } else {
        capitalize_first(part)
      }
    })
    .collect();

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    format!("T{ident}")
  } else {
    ident
  }
}

/// Converts `camelCase` back into the wire's `snake_case`.
pub(crate) fn to_snake_case(input: &str) -> String {
  let trimmed = input.strip_prefix('_').unwrap_or(input);
  let mut output = String::with_capacity(trimmed.len() + 4);

  for (index, c) in trimmed.chars().enumerate() {
    if c.is_uppercase() {
      if index > 0 {
        output.push('_');
      }
      output.extend(c.to_lowercase());
    } else {
      output.push(c);
    }
  }

  output
}

/// Last `/` separated segment of a `$ref` path.
pub(crate) fn ref_name(ref_path: &str) -> &str {
  ref_path.rsplit('/').next().unwrap_or(ref_path)
}

pub(crate) fn is_valid_identifier(name: &str) -> bool {
  IDENTIFIER_RE.is_match(name)
}

/// Client method name for an operation id. Ids that are already identifiers are kept verbatim.
pub(crate) fn to_method_name(operation_id: &str) -> String {
  if is_valid_identifier(operation_id) {
    operation_id.to_string()
  } else {
    to_camel_case(operation_id)
  }
}

/// Name of the query-parameter interface of a GET operation.
///
/// Without an operation id the name falls back to the verb and the path with every
/// non-alphanumeric character replaced by `_`.
pub(crate) fn params_interface_name(method: &str, path: &str, operation_id: Option<&str>) -> String {
  if let Some(id) = operation_id.filter(|id| !id.is_empty()) {
    return format!("{}Params", to_pascal_case(id));
  }

  let clean_path = NON_ALPHANUMERIC_RE.replace_all(path, "_");
  format!("{}{}Params", to_pascal_case(method), to_pascal_case(&clean_path))
}

/// Name of the synthesized type for an inline request body.
pub(crate) fn request_type_name(operation_id: &str) -> String {
  format!("{}Request", to_pascal_case(operation_id))
}
