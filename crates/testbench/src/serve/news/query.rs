//! `top-headlines` query validation and article selection.

use super::error::ApiError;
use super::fixtures::Article;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::collections::HashSet;
use std::str::FromStr;

/// Default page size when `max` is omitted.
pub const DEFAULT_MAX: usize = 2;

/// Largest accepted `max`.
pub const MAX_PAGE_SIZE: usize = 100;

/// Query parameters as received, before validation.
///
/// Everything is a string so malformed values produce the API's own error body
/// instead of the extractor's rejection. Built from the raw key/value pairs by
/// [`RawHeadlinesQuery::from_pairs`]; the derive only documents the parameters.
#[derive(Debug, Default, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RawHeadlinesQuery {
    /// Topic to filter by: `health` or `sports` (default `health`)
    pub topic: Option<String>,
    /// Article language (default `ru`)
    pub lang: Option<String>,
    /// Maximum number of articles to return, 1-100 (default 2)
    pub max: Option<String>,
    /// API key
    pub apikey: Option<String>,
    /// Only articles published at or after this time (RFC 3339)
    pub from: Option<String>,
    /// Only articles published at or before this time (RFC 3339)
    pub to: Option<String>,
}

impl RawHeadlinesQuery {
    /// Collect known parameters from decoded query pairs.
    ///
    /// A repeated key keeps its last value; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "topic" => &mut raw.topic,
                "lang" => &mut raw.lang,
                "max" => &mut raw.max,
                "apikey" => &mut raw.apikey,
                "from" => &mut raw.from,
                "to" => &mut raw.to,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        raw
    }
}

/// Topics the endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Health,
    Sports,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Health => "health",
            Topic::Sports => "sports",
        }
    }
}

impl FromStr for Topic {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "health" => Ok(Topic::Health),
            "sports" => Ok(Topic::Sports),
            other => Err(ApiError::Validation(format!(
                "topic must be one of: health, sports (got {other:?})"
            ))),
        }
    }
}

/// Validated `top-headlines` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlinesQuery {
    pub topic: Topic,
    pub lang: String,
    pub max: usize,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl HeadlinesQuery {
    /// Validate a raw query against the key allow-list.
    ///
    /// The key is checked first: an unauthorized request never learns whether
    /// its other parameters were valid.
    pub fn validate(raw: RawHeadlinesQuery, api_keys: &HashSet<String>) -> Result<Self, ApiError> {
        match raw.apikey.as_deref() {
            Some(key) if !key.is_empty() && api_keys.contains(key) => {}
            _ => return Err(ApiError::MissingApiKey),
        }

        let topic = match raw.topic.as_deref() {
            Some(t) => t.parse()?,
            None => Topic::Health,
        };
        let max = match raw.max.as_deref() {
            Some(m) => parse_max(m)?,
            None => DEFAULT_MAX,
        };
        let from = raw
            .from
            .as_deref()
            .map(|v| parse_datetime("from", v))
            .transpose()?;
        let to = raw
            .to
            .as_deref()
            .map(|v| parse_datetime("to", v))
            .transpose()?;

        Ok(Self {
            topic,
            lang: raw.lang.unwrap_or_else(|| "ru".to_string()),
            max,
            from,
            to,
        })
    }

    fn matches(&self, article: &Article) -> bool {
        if !article.title.to_lowercase().contains(self.topic.as_str()) {
            return false;
        }
        if article.lang != self.lang {
            return false;
        }
        if self.from.is_some_and(|from| article.published_at < from) {
            return false;
        }
        if self.to.is_some_and(|to| article.published_at > to) {
            return false;
        }
        true
    }

    /// Filter `articles` in order.
    ///
    /// Returns the number of matches before truncation and the first `max`
    /// matches.
    pub fn select<'a>(&self, articles: &'a [Article]) -> (usize, Vec<&'a Article>) {
        let matched: Vec<&Article> = articles.iter().filter(|a| self.matches(a)).collect();
        let total = matched.len();
        let page = matched.into_iter().take(self.max).collect();
        (total, page)
    }
}

fn parse_max(value: &str) -> Result<usize, ApiError> {
    let max: i64 = value
        .trim()
        .parse()
        .map_err(|_| ApiError::Validation(format!("max must be an integer (got {value:?})")))?;
    if !(1..=MAX_PAGE_SIZE as i64).contains(&max) {
        return Err(ApiError::Validation(format!(
            "max must be between 1 and {MAX_PAGE_SIZE} (got {max})"
        )));
    }
    Ok(max as usize)
}

/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.f]` (read as UTC), or a bare
/// date (midnight UTC).
fn parse_datetime(name: &str, value: &str) -> Result<DateTime<Utc>, ApiError> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Some(naive) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(naive.and_utc());
    }
    Err(ApiError::Validation(format!(
        "{name} must be a valid datetime (got {value:?})"
    )))
}
