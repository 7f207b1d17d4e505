//! URL Binding
//!
//! The filter is mirrored in the `f` query parameter. `all` clears it.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

use crate::filter::Filter;

/// Query parameter carrying the filter
pub const FILTER_PARAM: &str = "f";

/// Read the filter from a `location.search` string (leading `?` optional)
pub fn filter_from_query(search: &str) -> Filter {
    let value = query_param(search, FILTER_PARAM);
    Filter::from_param(value.as_deref())
}

/// First value for `key` in a query string, percent-decoded
pub fn query_param(search: &str, key: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    search
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(k) == key).then(|| decode(v).into_owned())
        })
}

fn decode(raw: &str) -> Cow<'_, str> {
    if raw.contains('+') {
        let spaced = raw.replace('+', " ");
        Cow::Owned(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
    } else {
        percent_decode_str(raw).decode_utf8_lossy()
    }
}

impl Filter {
    /// Query string for this filter, `None` for `All`
    pub fn query(&self) -> Option<String> {
        match self {
            Filter::All => None,
            other => Some(format!(
                "{}={}",
                FILTER_PARAM,
                utf8_percent_encode(other.as_str(), NON_ALPHANUMERIC)
            )),
        }
    }

    /// Link target for this filter relative to `path`
    pub fn href(&self, path: &str) -> String {
        match self.query() {
            Some(query) => format!("{}?{}", path, query),
            None => path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_query() {
        assert_eq!(filter_from_query(""), Filter::All);
        assert_eq!(filter_from_query("?"), Filter::All);
        assert_eq!(filter_from_query("?f=active"), Filter::Active);
        assert_eq!(filter_from_query("f=completed"), Filter::Completed);
        assert_eq!(filter_from_query("?f="), Filter::All);
        assert_eq!(filter_from_query("?f=bogus"), Filter::All);
    }

    #[test]
    fn test_first_pair_wins_and_other_keys_ignored() {
        assert_eq!(filter_from_query("?x=1&f=completed&f=active"), Filter::Completed);
        assert_eq!(filter_from_query("?ff=active"), Filter::All);
    }

    #[test]
    fn test_query_param_decoding() {
        assert_eq!(query_param("?q=a%20b", "q").as_deref(), Some("a b"));
        assert_eq!(query_param("?q=a+b", "q").as_deref(), Some("a b"));
        assert_eq!(query_param("?%66=active", "f").as_deref(), Some("active"));
        assert_eq!(query_param("?flag", "flag").as_deref(), Some(""));
        assert_eq!(query_param("?a=1", "b"), None);
    }

    #[test]
    fn test_href() {
        assert_eq!(Filter::All.href("/"), "/");
        assert_eq!(Filter::Active.href("/"), "/?f=active");
        assert_eq!(Filter::Completed.href("/app/"), "/app/?f=completed");
    }

    #[test]
    fn test_href_round_trips_through_query() {
        for filter in Filter::ALL {
            let href = filter.href("/");
            let search = href.split_once('?').map(|(_, q)| q).unwrap_or("");
            assert_eq!(filter_from_query(search), filter);
        }
    }
}
