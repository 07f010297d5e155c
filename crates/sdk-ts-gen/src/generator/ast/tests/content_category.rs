use crate::generator::ast::{ContentCategory, SdkTypeHint, TsType};

#[test]
fn test_json_content_types() {
  for content_type in [
    "application/json",
    "application/json; charset=utf-8",
    "application/vnd.api+json",
    "application/problem+json",
  ] {
    assert_eq!(
      ContentCategory::from_content_type(content_type),
      ContentCategory::Json,
      "{content_type}"
    );
  }
}

#[test]
fn test_html_is_not_text() {
  assert_eq!(ContentCategory::from_content_type("text/html"), ContentCategory::Html);
  assert_eq!(
    ContentCategory::from_content_type("text/html; charset=utf-8"),
    ContentCategory::Html
  );
  assert_eq!(ContentCategory::from_content_type("text/plain"), ContentCategory::Text);
}

#[test]
fn test_binary_table() {
  for content_type in [
    "application/pdf",
    "application/octet-stream",
    "application/zip",
    "application/gzip",
    "application/msword",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "image/png",
    "audio/mpeg",
    "video/mp4",
    "text/csv",
  ] {
    assert_eq!(
      ContentCategory::from_content_type(content_type),
      ContentCategory::Binary,
      "{content_type}"
    );
  }
}

#[test]
fn test_form_and_unknown_content_types() {
  assert_eq!(
    ContentCategory::from_content_type("multipart/form-data"),
    ContentCategory::Multipart
  );
  assert_eq!(
    ContentCategory::from_content_type("application/x-www-form-urlencoded"),
    ContentCategory::FormUrlEncoded
  );
  assert_eq!(ContentCategory::from_content_type("application/xml"), ContentCategory::Other);
  assert_eq!(ContentCategory::from_content_type("not a media type"), ContentCategory::Other);
}

#[test]
fn test_sdk_type_hints() {
  assert_eq!(SdkTypeHint::parse("DateRange"), SdkTypeHint::DateRange);
  assert_eq!(SdkTypeHint::parse("NumberRange"), SdkTypeHint::NumberRange);
  assert_eq!(SdkTypeHint::parse("CurrencyRange"), SdkTypeHint::CurrencyRange);

  assert_eq!(SdkTypeHint::parse("DateRange").ts_type(), TsType::named("DateRange"));
  assert_eq!(SdkTypeHint::parse("String").ts_type(), TsType::String);
  assert_eq!(SdkTypeHint::parse("boolean").ts_type(), TsType::Boolean);
  assert_eq!(SdkTypeHint::parse("Date").ts_type(), TsType::Date);
  assert_eq!(SdkTypeHint::parse("Money").ts_type(), TsType::named("Money"));
}
