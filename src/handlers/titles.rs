use crate::config::SupabaseConfig;
use crate::error::ProxyError;
use crate::supabase::SupabaseClient;
use crate::types::{ArticleRow, FetchTitlesParams, TitleRecord};
use chrono::Utc;
use serde_json::Value;

/// Fetches article titles matching a case-insensitive substring, newest
/// first, shaped for the article list view. No word means match everything.
pub(crate) async fn handler(
    params: FetchTitlesParams,
    config: &SupabaseConfig,
) -> Result<Value, ProxyError> {
    let word = params.word.unwrap_or_default();
    let client = SupabaseClient::new(config);

    let rows: Vec<ArticleRow> = client
        .select(
            "articles",
            "title,domain,published_date",
            Some(("title", format!("ilike.%{}%", word))),
            "published_date.desc",
        )
        .await?;

    let titles: Vec<TitleRecord> = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| title_record(row, index))
        .collect();

    Ok(serde_json::to_value(titles).expect("Title list serialization failed. It's a bug."))
}

/// Shapes one row for display. The id embeds a title prefix and the result
/// position, so it is unique within one response but not stable across
/// queries. A row without a date gets the current timestamp.
fn title_record(row: ArticleRow, index: usize) -> TitleRecord {
    let title_prefix: String = row.title.chars().take(10).collect();

    let id = format!("article_{}_{}", title_prefix, index);
    let url = format!("http://{}", row.domain);
    let publish_date = row
        .published_date
        .unwrap_or_else(|| Utc::now().to_rfc3339());

    TitleRecord {
        id,
        title: row.title,
        domain: row.domain,
        publish_date,
        relevance_score: 0,
        mentions: 0,
        url,
        excerpt: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, domain: &str, date: Option<&str>) -> ArticleRow {
        ArticleRow {
            title: title.to_string(),
            domain: domain.to_string(),
            published_date: date.map(str::to_string),
        }
    }

    #[test]
    fn id_embeds_title_prefix_and_index() {
        let record = title_record(
            row("Elecciones generales 2024", "example.com", Some("2024-05-01T10:00:00Z")),
            3,
        );

        assert_eq!(record.id, "article_Elecciones_3");
        assert_eq!(record.title, "Elecciones generales 2024");
    }

    #[test]
    fn id_prefix_is_character_safe_for_accented_titles() {
        // the first ten characters, not the first ten bytes
        let record = title_record(row("Óscar gana el premio", "n.example", None), 0);
        assert_eq!(record.id, "article_Óscar gana_0");
    }

    #[test]
    fn short_titles_use_the_whole_title_in_the_id() {
        let record = title_record(row("Gol", "d.example", None), 7);
        assert_eq!(record.id, "article_Gol_7");
    }

    #[test]
    fn ids_are_unique_per_position_even_for_equal_titles() {
        let a = title_record(row("Mismo título repetido", "a.example", None), 0);
        let b = title_record(row("Mismo título repetido", "a.example", None), 1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn url_is_http_plus_domain() {
        let record = title_record(row("t", "diario.example.com", None), 0);
        assert_eq!(record.url, "http://diario.example.com");
    }

    #[test]
    fn backend_date_is_passed_through() {
        let record = title_record(row("t", "d", Some("2024-05-01T10:00:00Z")), 0);
        assert_eq!(record.publish_date, "2024-05-01T10:00:00Z");
    }

    #[test]
    fn missing_date_falls_back_to_now() {
        let record = title_record(row("t", "d", None), 0);
        // RFC 3339, parseable back
        assert!(chrono::DateTime::parse_from_rfc3339(&record.publish_date).is_ok());
    }

    #[test]
    fn placeholder_fields_are_constant() {
        let record = title_record(row("t", "d", None), 0);
        assert_eq!(record.relevance_score, 0);
        assert_eq!(record.mentions, 0);
        assert_eq!(record.excerpt, "");
    }
}
