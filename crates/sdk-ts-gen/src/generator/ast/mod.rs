mod definitions;
pub mod parsed_path;
mod types;

#[cfg(test)]
mod tests;

pub use definitions::{
  ArgumentKind, GroupField, GroupKind, MethodArgument, MethodDefinition, OptionType, ParamDefinition,
  ParameterGroup, QueryParameter, RequestBodyDefinition, ResponseDefinition, TypeDefinition, TypeKind, TypeSource,
};
use mediatype::MediaType;
pub use parsed_path::PathTemplate;
use strum::{Display, EnumString};
pub use types::{TsLiteral, TsProperty, TsType, escape_single_quoted};

/// Coarse classification of a media type, used to pick encoders and decoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentCategory {
  #[default]
  Json,
  Multipart,
  FormUrlEncoded,
  Html,
  Binary,
  Text,
  Other,
}

impl ContentCategory {
  /// Classifies a content type. HTML is checked first, then the binary table, then JSON.
  #[must_use]
  pub fn from_content_type(content_type: &str) -> Self {
    let Ok(media) = MediaType::parse(content_type) else {
      return Self::Other;
    };

    let ty = media.ty.as_str().to_ascii_lowercase();
    let subty = media.subty.as_str().to_ascii_lowercase();
    let suffix = media.suffix.as_ref().map(|s| s.as_str().to_ascii_lowercase());

    match (ty.as_str(), subty.as_str(), suffix.as_deref()) {
      ("multipart", _, _) => Self::Multipart,
      ("text", "html", _) => Self::Html,
      ("image" | "video" | "audio" | "font", _, _) | ("text", "csv", _) => Self::Binary,
      ("application", subty, _) if is_binary_application_subtype(subty) => Self::Binary,
      ("application", "json", _) | (_, _, Some("json")) => Self::Json,
      ("application", "x-www-form-urlencoded", _) => Self::FormUrlEncoded,
      ("text", _, _) => Self::Text,
      _ => Self::Other,
    }
  }
}

fn is_binary_application_subtype(subty: &str) -> bool {
  matches!(
    subty,
    "pdf" | "octet-stream" | "zip" | "gzip" | "x-gzip" | "x-tar" | "msword" | "vnd.ms-excel" | "vnd.ms-powerpoint"
  ) || subty.starts_with("vnd.openxmlformats-")
}

/// How a method decodes a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ResponseKind {
  #[strum(to_string = "empty")]
  Empty,
  #[strum(to_string = "json")]
  Json,
  #[strum(to_string = "html")]
  Html,
  #[strum(to_string = "binary")]
  Binary,
  #[strum(to_string = "text")]
  Text,
}

/// How a method encodes its payload argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RequestBodyKind {
  #[strum(to_string = "json")]
  Json,
  #[strum(to_string = "multipart")]
  Multipart,
}

/// Client-side type declared on a query parameter through `x-gocart-sdk-type`.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
pub enum SdkTypeHint {
  DateRange,
  NumberRange,
  CurrencyRange,
  #[strum(default)]
  Scalar(String),
}

impl SdkTypeHint {
  pub fn parse(value: &str) -> Self {
    value.parse().unwrap_or_else(|_| Self::Scalar(value.to_string()))
  }

  /// The declared type. Scalar hints are taken verbatim, except that the boxed
  /// JavaScript names are spelled as their primitives.
  pub fn ts_type(&self) -> TsType {
    match self {
      Self::DateRange => TsType::named("DateRange"),
      Self::NumberRange => TsType::named("NumberRange"),
      Self::CurrencyRange => TsType::named("CurrencyRange"),
      Self::Scalar(name) => match name.as_str() {
        "String" | "string" => TsType::String,
        "Number" | "number" => TsType::Number,
        "Boolean" | "boolean" => TsType::Boolean,
        "Date" => TsType::Date,
        other => TsType::named(other),
      },
    }
  }
}
