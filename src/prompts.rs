use crate::types::ArticleRef;

/// Instruction for clustering articles into real-world events. The model is
/// told to answer with nothing but a JSON array so the handler can slice the
/// payload back out of the raw text.
pub fn group_events_prompt(articles: &[ArticleRef]) -> String {
    let article_list = serde_json::to_string_pretty(articles)
        .expect("Article list serialization failed. It's a bug.");

    format!(
        r#"You are an expert event analysis AI. Your task is to organize the following list of news articles into distinct real-world events in Spanish.

Rules:
1.  Analyze the provided articles, which have an "id" and a "title".
2.  Group articles that refer to the same underlying event.
3.  Return your response as a valid JSON array of objects.
4.  Each object must have two keys: "eventName" (a concise string) and "article_ids" (an array of the original article 'id' strings that belong to that event).
5.  Do not include any text, markdown, or explanations outside of the final JSON array.

Here is the list of articles:
{article_list}"#
    )
}
