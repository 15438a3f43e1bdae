//! Canned articles served by the mock news API.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Number of fixture articles per topic.
const PER_TOPIC: u32 = 5;

/// Topic titles in fixture order. Each covers `PER_TOPIC` consecutive ids.
const TOPIC_TITLES: [&str; 2] = ["Health", "Sports"];

/// Publisher of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Source {
    /// Publisher id
    pub id: Option<String>,
    /// Publisher display name
    pub name: String,
    /// Publisher homepage
    pub url: Option<String>,
}

/// A single news article in the upstream API's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Article id
    pub id: String,
    /// Headline
    pub title: String,
    /// Short summary
    pub description: String,
    /// Article body
    pub content: String,
    /// Canonical article URL
    pub url: String,
    /// Lead image URL
    pub image: Option<String>,
    /// Publication time (UTC, RFC 3339)
    pub published_at: DateTime<Utc>,
    /// ISO 639-1 language code
    pub lang: String,
    /// Publisher
    pub source: Source,
}

/// Build the fixture set relative to `now`.
///
/// Article `n` (1-based) is published `n` days before `now`, so ids are in
/// descending publication order.
pub fn mock_articles(now: DateTime<Utc>) -> Vec<Article> {
    let now = now.trunc_subsecs(0);
    TOPIC_TITLES
        .iter()
        .enumerate()
        .flat_map(|(i, topic)| {
            let first = i as u32 * PER_TOPIC + 1;
            (first..first + PER_TOPIC).map(move |n| article(n, topic, now))
        })
        .collect()
}

fn article(n: u32, topic: &str, now: DateTime<Utc>) -> Article {
    let slug = topic.to_lowercase();
    Article {
        id: format!("mock{n}"),
        title: format!("{topic} статья {n}"),
        description: format!("Описание {topic} статьи {n}"),
        content: format!("Контент {topic} статьи {n}"),
        url: format!("https://example.com/{slug}/article{n}"),
        image: Some(format!("https://example.com/{slug}/image{n}.jpg")),
        published_at: now - Duration::days(i64::from(n)),
        lang: "ru".to_string(),
        source: Source {
            id: Some(n.to_string()),
            name: format!("MockNews{n}"),
            url: Some("https://example.com".to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 23, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_fixture_layout() {
        let articles = mock_articles(fixed_now());
        assert_eq!(articles.len(), 10);

        let ids: Vec<_> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids[0], "mock1");
        assert_eq!(ids[9], "mock10");

        assert!(articles[..5].iter().all(|a| a.title.starts_with("Health")));
        assert!(articles[5..].iter().all(|a| a.title.starts_with("Sports")));
        assert!(articles.iter().all(|a| a.lang == "ru"));
    }

    #[test]
    fn test_article_fields() {
        let articles = mock_articles(fixed_now());
        let sixth = &articles[5];
        assert_eq!(sixth.id, "mock6");
        assert_eq!(sixth.title, "Sports статья 6");
        assert_eq!(sixth.description, "Описание Sports статьи 6");
        assert_eq!(sixth.url, "https://example.com/sports/article6");
        assert_eq!(
            sixth.image.as_deref(),
            Some("https://example.com/sports/image6.jpg")
        );
        assert_eq!(sixth.source.id.as_deref(), Some("6"));
        assert_eq!(sixth.source.name, "MockNews6");
        assert_eq!(
            sixth.published_at,
            Utc.with_ymd_and_hms(2025, 12, 17, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_serialized_shape() {
        let articles = mock_articles(fixed_now());
        let json = serde_json::to_value(&articles[0]).unwrap();
        assert_eq!(json["publishedAt"], "2025-12-22T12:00:00Z");
        assert_eq!(json["source"]["url"], "https://example.com");
        assert!(json.get("published_at").is_none());
    }

    #[test]
    fn test_subsecond_precision_dropped() {
        let now = fixed_now() + Duration::milliseconds(750);
        let articles = mock_articles(now);
        let json = serde_json::to_value(&articles[0]).unwrap();
        assert_eq!(json["publishedAt"], "2025-12-22T12:00:00Z");
    }
}
