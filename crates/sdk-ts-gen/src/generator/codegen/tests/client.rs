use std::collections::BTreeSet;

use serde_json::json;

use crate::generator::{
  codegen::client::{ClientOptions, render_client},
  tests::support::{api, assert_contains, assert_not_contains, graph},
};

#[test]
fn test_client_shell_without_methods() {
  let graph = graph(api(json!({}), json!({})));
  let sdk = render_client(
    &graph,
    &[],
    &BTreeSet::new(),
    &BTreeSet::new(),
    ClientOptions {
      class_name: "ShopClient",
      base_url: "https://example.com/it's",
      sdk_version: "1.2.3",
    },
  );

  assert!(sdk.starts_with(
    "// Auto-generated TypeScript SDK\n// Do not modify manually.\n\nimport { InMemoryContext } from './context';\n"
  ));
  assert_not_contains(&sdk, "from './types'");
  assert_contains(&sdk, "import { ApiError, ApiErrorResponse } from './error';\n\nconst SDK_VERSION = '1.2.3';\n");
  assert_contains(
    &sdk,
    "export class ShopClient {
  private baseUrl: string;

  public context: InMemoryContext;
  public interceptors: {
    request: InterceptorManager<RequestInterceptor>;
    response: InterceptorManager<ResponseInterceptor>;
  };

  constructor(baseUrl: string = 'https://example.com/it\\'s') {
    this.baseUrl = baseUrl;
    this.context = new InMemoryContext();
    this.interceptors = {
      request: new InterceptorManager<RequestInterceptor>(),
      response: new InterceptorManager<ResponseInterceptor>()
    };
  }

  private formatFilterValue(value: unknown): string {",
  );
  assert!(sdk.ends_with("    return String(value);\n  }\n}\n"));
}

#[test]
fn test_document_error_type_is_imported() {
  let graph = graph(api(json!({}), json!({})));
  let models = BTreeSet::from(["APIError".to_string()]);
  let sdk = render_client(
    &graph,
    &[],
    &models,
    &BTreeSet::new(),
    ClientOptions {
      class_name: "ShopClient",
      base_url: "",
      sdk_version: "unset",
    },
  );

  assert_contains(&sdk, "import {\n  APIError,\n} from './types';\n\nimport { InMemoryContext }");
  assert_contains(&sdk, "import { ApiError } from './error';");
  assert_not_contains(&sdk, "ApiErrorResponse");
}
