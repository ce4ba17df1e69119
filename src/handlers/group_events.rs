use crate::config::GeminiConfig;
use crate::error::ProxyError;
use crate::gemini::{GeminiClient, DEFAULT_MODEL};
use crate::prompts;
use crate::types::GroupEventsParams;
use serde_json::Value;
use tracing::debug;

/// Asks Gemini to cluster the submitted articles into real-world events.
/// The model's array is returned as-is; the article_ids it names are not
/// checked against the input ids.
pub(crate) async fn handler(
    params: GroupEventsParams,
    config: &GeminiConfig,
) -> Result<Value, ProxyError> {
    let model = params.model_name.as_deref().unwrap_or(DEFAULT_MODEL);
    let prompt = prompts::group_events_prompt(&params.articles);

    let client = GeminiClient::new(config);
    let raw = client.generate_content(model, &prompt).await?;

    debug!("Raw model response: {}", raw);

    extract_json_array(&raw)
}

/// Slices the JSON payload out of the model's raw text: everything from the
/// first `[` to the last `]` inclusive. The model is instructed to answer
/// with nothing else, but this survives prose or markdown fences around the
/// array as long as they contain no stray brackets.
fn extract_json_array(raw: &str) -> Result<Value, ProxyError> {
    let start = raw.find('[').ok_or(ProxyError::Extraction)?;
    let end = raw.rfind(']').ok_or(ProxyError::Extraction)?;
    // get() rejects end < start, e.g. a lone `]` ahead of the first `[`
    let payload = raw.get(start..=end).ok_or(ProxyError::Extraction)?;

    serde_json::from_str(payload).map_err(|e| ProxyError::Parse(e.to_string()))
}
