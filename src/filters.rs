//! Query filters for list and count operations.
//!
//! Filters are plain serde structs flattened into query-string pairs with
//! [`to_query`]; unset fields are skipped, id lists become comma-separated
//! values, and timestamps serialize as RFC 3339.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Filter options shared by list operations.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ListFilter;
///
/// let filter = ListFilter {
///     limit: Some(50),
///     since_id: Some(1234),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Maximum number of results (default 50, maximum 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return only resources with an id greater than this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Restrict results to these ids.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub ids: Vec<u64>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Return resources created at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Return resources created at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Return resources updated at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Return resources updated at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

/// Filter options for count operations.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CountFilter {
    /// Count only resources created at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Count only resources created at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Count only resources updated at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Count only resources updated at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

/// Flattens a filter into query-string pairs.
///
/// Unset fields are skipped, arrays are joined with commas, and scalars
/// render with their JSON string form.
#[must_use]
pub fn to_query<T: Serialize>(filter: &T) -> Vec<(String, String)> {
    let Ok(serde_json::Value::Object(map)) = serde_json::to_value(filter) else {
        return Vec::new();
    };

    let mut query = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            serde_json::Value::Null => {}
            serde_json::Value::String(s) => query.push((key, s)),
            serde_json::Value::Number(n) => query.push((key, n.to_string())),
            serde_json::Value::Bool(b) => query.push((key, b.to_string())),
            serde_json::Value::Array(items) => {
                let joined: Vec<String> = items
                    .iter()
                    .filter_map(|v| match v {
                        serde_json::Value::String(s) => Some(s.clone()),
                        serde_json::Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect();
                if !joined.is_empty() {
                    query.push((key, joined.join(",")));
                }
            }
            serde_json::Value::Object(_) => query.push((key, value.to_string())),
        }
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_filter_produces_no_query() {
        assert!(to_query(&ListFilter::default()).is_empty());
        assert!(to_query(&CountFilter::default()).is_empty());
    }

    #[test]
    fn test_scalars_render_as_strings() {
        let filter = ListFilter {
            limit: Some(50),
            since_id: Some(1234),
            fields: Some("id,title".to_string()),
            ..Default::default()
        };

        let query = to_query(&filter);
        assert!(query.contains(&("limit".to_string(), "50".to_string())));
        assert!(query.contains(&("since_id".to_string(), "1234".to_string())));
        assert!(query.contains(&("fields".to_string(), "id,title".to_string())));
        assert_eq!(query.len(), 3);
    }

    #[test]
    fn test_id_list_joins_with_commas() {
        let filter = ListFilter {
            ids: vec![1, 2, 3],
            ..Default::default()
        };

        let query = to_query(&filter);
        assert_eq!(query, vec![("ids".to_string(), "1,2,3".to_string())]);
    }

    #[test]
    fn test_timestamps_render_rfc3339() {
        let filter = CountFilter {
            created_at_min: Some(Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap()),
            ..Default::default()
        };

        let query = to_query(&filter);
        assert_eq!(query.len(), 1);
        assert_eq!(query[0].0, "created_at_min");
        assert!(query[0].1.starts_with("2025-01-15T10:30:00"));
    }
}
