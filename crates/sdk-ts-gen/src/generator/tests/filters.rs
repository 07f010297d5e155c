use super::support::{
  DATE_RANGE_API, FILTERS_API, assert_contains, assert_in_order, assert_not_contains, generate, method_source,
  yaml_document,
};

#[test]
fn test_filter_fields_are_typed_by_hint() {
  let params = generate(yaml_document(FILTERS_API)).files.params;

  assert_contains(
    &params,
    "  filter?: {
    createdAt?: DateRange;
    name?: string;
    orderCount?: NumberRange;
    orderAmount?: CurrencyRange;
    email?: string;
    isBlocked?: boolean;
  };
",
  );
  assert_contains(&params, "include?: ListCustomersParamsIncludeOption[];");
  assert_contains(
    &params,
    "export type ListCustomersParamsIncludeOption = 'parent' | 'parents' | 'children' | 'attributes';\n",
  );
}

#[test]
fn test_range_filters_serialize_each_bound() {
  let sdk = generate(yaml_document(FILTERS_API)).files.sdk;
  let method = method_source(&sdk, "listCustomers");

  assert!(method.starts_with("public async listCustomers(params: ListCustomersParams = {}): Promise<Customer[]> {"));
  assert_contains(&sdk, "constructor(baseUrl: string = 'https://shop.example.com/api') {");

  assert_in_order(
    method,
    &[
      "if (params.filter) {",
      "const dateRange = params.filter[\"createdAt\"];",
      "if (dateRange.eq) { queryString.append('filter[created_at]', `=${dateRange.eq.toISOString()}`); }",
      "if (dateRange.lt) { queryString.append('filter[created_at]', `<${dateRange.lt.toISOString()}`); }",
      "queryString.append('filter[name]', this.formatFilterValue(value));",
      "const numberRange = params.filter[\"orderCount\"];",
      "const valueStr = `>=${range.gte}`;",
      "queryString.append('filter[order_count]', valueStr);",
      "const currencyRange = params.filter[\"orderAmount\"];",
      "queryString.append('filter[order_amount]', `${range.currency}:${valueStr}`);",
      "queryString.append('filter[email]', this.formatFilterValue(value));",
      "queryString.append('filter[is_blocked]', this.formatFilterValue(value));",
    ],
  );
  assert_contains(method, "const valueStr = `${range.min ?? ''}..${range.max ?? ''}`;");
  assert_contains(method, "if (range.min !== undefined || range.max !== undefined) {");
}

#[test]
fn test_include_without_enum_still_converts_segments() {
  let sdk = generate(yaml_document(FILTERS_API)).files.sdk;
  let method = method_source(&sdk, "listCustomers");

  assert_in_order(
    method,
    &[
      "if (params.include) {",
      "queryString.append('include', params.include.map((v) => {",
      "return segment.replace(/([a-z])([A-Z])/g, '$1_$2').toLowerCase();",
      "}).join(','));",
    ],
  );
}

#[test]
fn test_date_range_filter() {
  let output = generate(yaml_document(DATE_RANGE_API));
  let files = &output.files;

  assert_contains(
    &files.params,
    "  filter?: {\n    /**\n     * Registration date bounds.\n     */\n    clientRegistrationDate?: DateRange;\n  };\n",
  );

  let method = method_source(&files.sdk, "listClients");
  assert_contains(method, "const dateRange = params.filter[\"clientRegistrationDate\"];");
  for operator in ["=", ">=", "<=", ">", "<"] {
    assert_contains(
      method,
      &format!("queryString.append('filter[client_registration_date]', `{operator}${{dateRange."),
    );
  }
  assert_not_contains(method, "formatFilterValue(value)");

  assert_contains(&files.sdk, "constructor(baseUrl: string = '') {");
  assert_contains(&files.sdk, "import { ApiError, ApiErrorResponse } from './error';");
  assert!(output.stats.warnings.is_empty(), "{:?}", output.stats.warnings);
}

const SEARCH_API: &str = r"
openapi: 3.0.3
info: { title: Search, version: '1' }
paths:
  /orders:
    get:
      operationId: searchOrders
      parameters:
        - { name: created, in: query, x-gocart-sdk-type: DateRange, schema: { type: string } }
        - { name: q, in: query, schema: { type: string } }
        - { name: 'q[status]', in: query, schema: { type: string } }
      responses:
        '200':
          description: ok
";

#[test]
fn test_range_hint_on_a_plain_parameter() {
  let files = generate(yaml_document(SEARCH_API)).files;

  assert_contains(&files.params, "created?: DateRange;");
  let method = method_source(&files.sdk, "searchOrders");
  assert_in_order(
    method,
    &[
      "if (params.created) {",
      "const dateRange = params.created;",
      "if (dateRange.gte) { queryString.append('created', `>=${dateRange.gte.toISOString()}`); }",
    ],
  );
  assert_not_contains(method, "String(params.created)");
}

#[test]
fn test_plain_parameter_next_to_its_bracket_family() {
  let files = generate(yaml_document(SEARCH_API)).files;

  assert_contains(&files.params, "  q?: {\n    q?: string;\n    status?: string;\n  };\n");
  let method = method_source(&files.sdk, "searchOrders");
  assert_contains(method, "queryString.append('q', String(params.q.q));");
  assert_contains(method, "queryString.append('q[status]', String(params.q.status));");
  assert_not_contains(method, "'q[q]'");
}
