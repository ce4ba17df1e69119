use crate::config::SupabaseConfig;
use crate::error::ProxyError;
use crate::supabase::SupabaseClient;
use crate::types::{EntityRow, FetchWordsParams, WordRecord};
use serde_json::Value;

/// Fetches entity-frequency rows, optionally narrowed to a category prefix,
/// most frequent first. Row order is the backend's.
pub(crate) async fn handler(
    params: FetchWordsParams,
    config: &SupabaseConfig,
) -> Result<Value, ProxyError> {
    let client = SupabaseClient::new(config);
    let filter = params.category.as_deref().map(category_filter);

    let rows: Vec<EntityRow> = client
        .select("entities", "entity,category,frequency", filter, "frequency.desc")
        .await?;

    let words: Vec<WordRecord> = rows.into_iter().map(WordRecord::from).collect();

    Ok(serde_json::to_value(words).expect("Word list serialization failed. It's a bug."))
}

/// Prefix match on the category column.
fn category_filter(category: &str) -> (&'static str, String) {
    ("category", format!("like.{}%", category))
}
