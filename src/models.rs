//! Wire types for the shortener API and the derived list entries

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One displayed short-code mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlEntry {
    pub short_code: String,
    pub original_url: String,
}

impl UrlEntry {
    pub fn new(short_code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            original_url: original_url.into(),
        }
    }
}

/// Body of `GET /api/urls`
///
/// `urls` keeps the pairs in the order they appear in the JSON document, one
/// per short code. Odd values are tolerated rather than failing the refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlListing {
    #[serde(default, deserialize_with = "ordered_pairs")]
    pub urls: Vec<(String, String)>,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_count: u64,
}

impl UrlListing {
    /// Newest-first entries, at most `limit` of them
    ///
    /// The server appends new mappings at the end, so reversing the document
    /// order puts the most recent first.
    pub fn newest_first(&self, limit: usize) -> Vec<UrlEntry> {
        self.urls
            .iter()
            .rev()
            .take(limit)
            .map(|(code, url)| UrlEntry::new(code.clone(), url.clone()))
            .collect()
    }
}

/// Body of `POST /api/shorten`
#[derive(Debug, Clone, Serialize)]
pub struct ShortenRequest<'a> {
    pub url: &'a str,
}

/// Failure payload `{ "error": "..." }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Extract the non-empty `error` field from a raw body, if it parses
    pub fn extract(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|msg| !msg.is_empty())
    }
}

fn ordered_pairs<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PairsVisitor;

    impl<'de> Visitor<'de> for PairsVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of short codes to URLs")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let capacity = map.size_hint().unwrap_or(0);
            let mut pairs: Vec<(String, String)> = Vec::with_capacity(capacity);
            let mut positions: HashMap<String, usize> = HashMap::with_capacity(capacity);

            while let Some((code, value)) = map.next_entry::<String, Value>()? {
                let url = url_text(value);
                // 重复的 key：保留首次出现的位置，值取最后一次
                match positions.get(&code) {
                    Some(&idx) => pairs[idx].1 = url,
                    None => {
                        positions.insert(code.clone(), pairs.len());
                        pairs.push((code, url));
                    }
                }
            }
            Ok(pairs)
        }

        // `"urls": null` 视为空
        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(PairsVisitor)
        }
    }

    deserializer.deserialize_option(PairsVisitor)
}

/// `null` -> empty, strings as-is, anything else as its JSON text
fn url_text(value: Value) -> String {
    match value {
        Value::String(url) => url,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Any non-negative number, truncated; everything else counts as 0
fn count_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64().unwrap_or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
                .unwrap_or(0)
        }),
        _ => 0,
    };
    Ok(count)
}
