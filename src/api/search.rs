//! Search Endpoint

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{ApiClient, ApiError};
use crate::models::Entry;

/// Characters left alone by `encodeURIComponent`
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn search_path(query: &str) -> String {
    format!("/api/search?q={}", utf8_percent_encode(query, QUERY_COMPONENT))
}

impl ApiClient {
    pub async fn search_entries(&self, query: &str) -> Result<Vec<Entry>, ApiError> {
        self.get_json(&search_path(query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_path_encoding() {
        assert_eq!(search_path("gmail"), "/api/search?q=gmail");
        assert_eq!(search_path("a b&c=d"), "/api/search?q=a%20b%26c%3Dd");
        assert_eq!(search_path("my.site-(1)"), "/api/search?q=my.site-(1)");
        assert_eq!(search_path("é"), "/api/search?q=%C3%A9");
    }
}
