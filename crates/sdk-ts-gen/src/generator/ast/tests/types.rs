use std::collections::BTreeSet;

use serde_json::json;

use crate::generator::ast::{ArgumentKind, MethodArgument, TsLiteral, TsProperty, TsType};

#[test]
fn test_union_flattens_and_dedupes() {
  let ty = TsType::union([TsType::String, TsType::union([TsType::String, TsType::Null])]);
  assert_eq!(ty.to_string(), "string | null");

  assert_eq!(TsType::union([]), TsType::Any);
  assert_eq!(TsType::union([TsType::Number]), TsType::Number);
}

#[test]
fn test_nullable_is_idempotent() {
  let ty = TsType::named("Pet").nullable().nullable();
  assert_eq!(ty.to_string(), "Pet | null");
}

#[test]
fn test_array_of_union_is_parenthesized() {
  let ty = TsType::array(TsType::union([TsType::String, TsType::Number]));
  assert_eq!(ty.to_string(), "(string | number)[]");
  assert_eq!(TsType::array(TsType::named("Pet")).to_string(), "Pet[]");
}

#[test]
fn test_intersection_wraps_union_members() {
  let ty = TsType::intersection(vec![
    TsType::named("Base"),
    TsType::union([TsType::named("Cat"), TsType::named("Dog")]),
  ]);
  assert_eq!(ty.to_string(), "Base & (Cat | Dog)");
  assert_eq!(TsType::intersection(vec![TsType::named("Base")]), TsType::named("Base"));
}

#[test]
fn test_inline_object_display() {
  assert_eq!(TsType::Object(vec![]).to_string(), "{}");

  let ty = TsType::Object(vec![
    TsProperty::new("id", TsType::String, false),
    TsProperty::new("count", TsType::Number, true),
  ]);
  assert_eq!(ty.to_string(), "{ id: string; count?: number; }");
}

#[test]
fn test_literals() {
  assert_eq!(TsType::Literal(TsLiteral::Str("it's".to_string())).to_string(), r"'it\'s'");
  assert_eq!(TsLiteral::from(&json!(3)).to_string(), "3");
  assert_eq!(TsLiteral::from(&json!(true)).to_string(), "true");
  assert_eq!(TsLiteral::from(&json!(null)).to_string(), "null");
}

#[test]
fn test_collect_named_walks_nested_types() {
  let ty = TsType::union([
    TsType::array(TsType::named("Item")),
    TsType::Object(vec![TsProperty::new(
      "owner",
      TsType::union([TsType::named("User"), TsType::Null]),
      true,
    )]),
    TsType::String,
  ]);

  let mut names = BTreeSet::new();
  ty.collect_named(&mut names);
  assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["Item", "User"]);
}

#[test]
fn test_params_argument_defaults_to_empty_object() {
  let argument = MethodArgument {
    name: "params".to_string(),
    ty: TsType::named("ListItemsParams"),
    kind: ArgumentKind::Params,
  };
  assert_eq!(argument.signature(), "params: ListItemsParams = {}");
  assert_eq!(MethodArgument::path("itemId".to_string()).signature(), "itemId: string");
}
