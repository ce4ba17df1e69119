mod categories;
mod group_events;
mod titles;
mod words;

use crate::config::{GeminiConfig, SupabaseConfig};
use crate::error::ProxyError;
use crate::types::{FetchTitlesParams, FetchWordsParams, GroupEventsParams};
use serde_json::Value;
use tracing::info;

/// One variant per supported action, carrying only that action's parameters.
#[derive(Debug)]
pub enum Action {
    GroupEvents(GroupEventsParams),
    FetchWords(FetchWordsParams),
    FetchTitles(FetchTitlesParams),
    FetchCategories,
}

impl Action {
    /// The wire name of the action, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::GroupEvents(_) => "gemini-group-events",
            Action::FetchWords(_) => "supabase-fetch-words",
            Action::FetchTitles(_) => "supabase-fetch-titles",
            Action::FetchCategories => "supabase-fetch-categories",
        }
    }
}

/// Parses the request body and runs the selected adapter.
pub async fn handle(body: &str) -> Result<Value, ProxyError> {
    let action = parse_request(body)?;
    info!("Dispatching {}", action.name());
    dispatch(action).await
}

/// Parses the body into a typed action. The action name is matched before
/// the parameters are deserialized, so an unrecognized action is reported
/// by name rather than as a deserialization failure.
pub fn parse_request(body: &str) -> Result<Action, ProxyError> {
    let request: Value =
        serde_json::from_str(body).map_err(|e| ProxyError::Parse(e.to_string()))?;
    let name = request.get("action").and_then(Value::as_str).unwrap_or_default();

    let action = match name {
        "gemini-group-events" => Action::GroupEvents(params(&request)?),
        "supabase-fetch-words" => Action::FetchWords(params(&request)?),
        "supabase-fetch-titles" => Action::FetchTitles(params(&request)?),
        "supabase-fetch-categories" => Action::FetchCategories,
        other => return Err(ProxyError::UnknownAction(other.to_string())),
    };

    Ok(action)
}

/// Deserializes the request object into the adapter's parameter struct.
/// The action field and anything else the struct does not name are ignored.
fn params<T: serde::de::DeserializeOwned>(request: &Value) -> Result<T, ProxyError> {
    serde_json::from_value(request.clone()).map_err(|e| ProxyError::Parse(e.to_string()))
}

/// Routes the action to its adapter. Each arm reads the configuration it
/// needs fresh from the environment, so a missing credential fails only
/// the invocations that need it.
async fn dispatch(action: Action) -> Result<Value, ProxyError> {
    match action {
        Action::GroupEvents(params) => {
            let config = GeminiConfig::from_env()?;
            group_events::handler(params, &config).await
        }
        Action::FetchWords(params) => {
            let config = SupabaseConfig::from_env()?;
            words::handler(params, &config).await
        }
        Action::FetchTitles(params) => {
            let config = SupabaseConfig::from_env()?;
            titles::handler(params, &config).await
        }
        Action::FetchCategories => categories::handler(),
    }
}
