use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The HTTP-shaped result returned to the platform for every invocation,
/// pre-flight included.
#[derive(Serialize, Debug)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: ResponseHeaders,
    pub body: String,
}

impl ApiResponse {
    /// 200 with an empty body, for OPTIONS pre-flights.
    pub fn preflight() -> Self {
        Self {
            status_code: 200,
            headers: ResponseHeaders::default(),
            body: String::new(),
        }
    }

    /// 200 with the adapter's result serialized as the body.
    pub fn success(result: &Value) -> Self {
        Self {
            status_code: 200,
            headers: ResponseHeaders::default(),
            body: serde_json::to_string(result).expect("Value serialization failed. It's a bug."),
        }
    }

    /// 500 with a single-field error object as the body.
    pub fn failure(message: &str) -> Self {
        Self {
            status_code: 500,
            headers: ResponseHeaders::default(),
            body: serde_json::json!({ "error": message }).to_string(),
        }
    }
}

/// The fixed header set attached to every response: permissive CORS plus the
/// JSON content type.
#[derive(Serialize, Debug)]
pub struct ResponseHeaders {
    #[serde(rename = "Access-Control-Allow-Origin")]
    pub allow_origin: &'static str,
    #[serde(rename = "Access-Control-Allow-Headers")]
    pub allow_headers: &'static str,
    #[serde(rename = "Access-Control-Allow-Methods")]
    pub allow_methods: &'static str,
    #[serde(rename = "Content-Type")]
    pub content_type: &'static str,
}

impl Default for ResponseHeaders {
    fn default() -> Self {
        Self {
            allow_origin: "*",
            allow_headers: "Content-Type",
            allow_methods: "POST, OPTIONS",
            content_type: "application/json",
        }
    }
}

/// An article as sent by the frontend. Anything beyond id and title is
/// dropped at deserialization, so only these two fields ever reach the model.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ArticleRef {
    pub id: String,
    pub title: String,
}

#[derive(Deserialize, Debug)]
pub struct GroupEventsParams {
    pub articles: Vec<ArticleRef>,
    #[serde(rename = "modelName")]
    pub model_name: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct FetchWordsParams {
    pub category: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct FetchTitlesParams {
    pub word: Option<String>,
}

/// Row of the entities table as returned by PostgREST.
#[derive(Deserialize, Debug)]
pub struct EntityRow {
    pub entity: String,
    pub category: String,
    pub frequency: i64,
}

/// Row of the articles table as returned by PostgREST. The date is nullable.
#[derive(Deserialize, Debug)]
pub struct ArticleRow {
    pub title: String,
    pub domain: String,
    pub published_date: Option<String>,
}

/// One entity-frequency entry shaped for the word cloud.
#[derive(Serialize, Debug, PartialEq)]
pub struct WordRecord {
    pub text: String,
    pub category: String,
    pub frequency: i64,
}

impl From<EntityRow> for WordRecord {
    fn from(row: EntityRow) -> Self {
        Self {
            text: row.entity,
            category: row.category,
            frequency: row.frequency,
        }
    }
}

/// One article shaped for the title list view. relevanceScore, mentions and
/// excerpt are placeholders the frontend expects; nothing computes them.
#[derive(Serialize, Debug)]
pub struct TitleRecord {
    pub id: String,
    pub title: String,
    pub domain: String,
    #[serde(rename = "publishDate")]
    pub publish_date: String,
    #[serde(rename = "relevanceScore")]
    pub relevance_score: u32,
    pub mentions: u32,
    pub url: String,
    pub excerpt: String,
}
