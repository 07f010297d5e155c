use crate::naming::identifiers::{
  params_interface_name, ref_name, request_type_name, sanitize, to_camel_case, to_method_name, to_pascal_case,
  to_snake_case,
};

#[test]
fn test_camel_case() {
  assert_eq!(to_camel_case("created_at"), "createdAt");
  assert_eq!(to_camel_case("client_registration_date"), "clientRegistrationDate");
  assert_eq!(to_camel_case("_embedded"), "embedded");
  assert_eq!(to_camel_case("name"), "name");
  assert_eq!(to_camel_case("ID"), "id");
  assert_eq!(to_camel_case("firstName"), "firstName");
  assert_eq!(to_camel_case("Status"), "status");
  assert_eq!(to_camel_case("is_email_verified"), "isEmailVerified");
  assert_eq!(to_camel_case(""), "");
}

#[test]
fn test_camel_case_sanitizes_separators() {
  assert_eq!(to_camel_case("x-rate-limit"), "xRateLimit");
  assert_eq!(to_camel_case("parent.name"), "parentName");
}

#[test]
fn test_pascal_case() {
  assert_eq!(to_pascal_case("user"), "User");
  assert_eq!(to_pascal_case("order_item"), "OrderItem");
  assert_eq!(to_pascal_case("listItems"), "ListItems");
  assert_eq!(to_pascal_case("user_UUID"), "UserUUID");
  assert_eq!(to_pascal_case("GET"), "GET");
  assert_eq!(to_pascal_case("pet-store.v1"), "PetStoreV1");
  assert_eq!(to_pascal_case("123_response"), "T123Response");
}

#[test]
fn test_snake_case() {
  assert_eq!(to_snake_case("createdAt"), "created_at");
  assert_eq!(to_snake_case("clientRegistrationDate"), "client_registration_date");
  assert_eq!(to_snake_case("_private"), "private");
  assert_eq!(to_snake_case("Name"), "name");
  assert_eq!(to_snake_case(""), "");
}

#[test]
fn test_camel_snake_round_trip_for_wire_names() {
  for wire in ["created_at", "order_amount", "is_blocked", "group_id"] {
    assert_eq!(to_snake_case(&to_camel_case(wire)), wire);
  }
}

#[test]
fn test_ref_name() {
  assert_eq!(ref_name("#/components/schemas/User"), "User");
  assert_eq!(ref_name("common.yaml#/components/schemas/Money"), "Money");
  assert_eq!(ref_name("User"), "User");
}

#[test]
fn test_params_interface_name() {
  assert_eq!(params_interface_name("GET", "/items", Some("listItems")), "ListItemsParams");
  assert_eq!(params_interface_name("GET", "/items/{id}", None), "GETItemsIdParams");
  assert_eq!(params_interface_name("GET", "/items", Some("")), "GETItemsParams");
}

#[test]
fn test_request_type_name() {
  assert_eq!(request_type_name("createItem"), "CreateItemRequest");
  assert_eq!(request_type_name("upload_file"), "UploadFileRequest");
}

#[test]
fn test_method_name() {
  assert_eq!(to_method_name("listItems"), "listItems");
  assert_eq!(to_method_name("previewCampaignHTML"), "previewCampaignHTML");
  assert_eq!(to_method_name("get-user"), "getUser");
}

#[test]
fn test_sanitize() {
  assert_eq!(sanitize("a-b c"), "a_b_c");
  assert_eq!(sanitize("café"), "cafe");
  assert_eq!(sanitize(""), "");
}
