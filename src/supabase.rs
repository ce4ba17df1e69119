use crate::config::SupabaseConfig;
use crate::error::ProxyError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Thin client over the PostgREST endpoint of a Supabase project. One
/// round trip per invocation, no retries.
pub struct SupabaseClient {
    http: reqwest::Client,
    url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        }
    }

    /// Runs one SELECT against a table. `filter` is an optional column plus
    /// a predicate in PostgREST syntax, e.g. `("category", "like.Per%")`.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
        filter: Option<(&str, String)>,
        order: &str,
    ) -> Result<Vec<T>, ProxyError> {
        let url = format!("{}/rest/v1/{}", self.url, table);

        let mut query: Vec<(&str, String)> = vec![
            ("select", columns.to_string()),
            ("order", order.to_string()),
        ];
        if let Some((column, predicate)) = filter {
            query.push((column, predicate));
        }

        debug!("Supabase query: {} {:?}", table, query);

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Supabase error body: {}", body);
            return Err(ProxyError::Downstream(postgrest_error(status, &body)));
        }

        Ok(response.json().await?)
    }
}

/// PostgREST reports errors as a JSON object with a message field; fall back
/// to the bare status when the body is not in that shape.
fn postgrest_error(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| format!("Supabase request failed with status {}", status))
}
