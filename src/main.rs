use lambda_runtime::{service_fn, Error, LambdaEvent};
use news_proxy_lambda::handlers;
use news_proxy_lambda::types::ApiResponse;
use serde_json::Value;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_ansi(false)
        .without_time()
        .compact()
        .init();

    lambda_runtime::run(service_fn(function_handler)).await
}

/// Answers every invocation with the uniform `{statusCode, headers, body}`
/// envelope: 200 + the adapter's JSON on success, 500 + `{"error": message}`
/// on any failure. Request-level failures never bubble up to the runtime.
async fn function_handler(event: LambdaEvent<Value>) -> Result<ApiResponse, Error> {
    let (event, _ctx) = event.into_parts();

    debug!("Event: {:?}", event);

    // pre-flights carry no usable body, answer before parsing
    if is_preflight(&event) {
        return Ok(ApiResponse::preflight());
    }

    let body = event.get("body").and_then(Value::as_str).unwrap_or_default();

    let response = match handlers::handle(body).await {
        Ok(result) => ApiResponse::success(&result),
        Err(e) => {
            error!("Request failed: {}", e);
            ApiResponse::failure(&e.to_string())
        }
    };

    Ok(response)
}

/// Checks for an OPTIONS pre-flight. The method field depends on how the
/// function is fronted: Function URLs put it under `requestContext.http`,
/// the direct invocation shape sends a top-level `requestMethod`.
fn is_preflight(event: &Value) -> bool {
    let via_http = event.pointer("/requestContext/http/method").and_then(Value::as_str);
    let via_direct = event.get("requestMethod").and_then(Value::as_str);

    via_http == Some("OPTIONS") || via_direct == Some("OPTIONS")
}
