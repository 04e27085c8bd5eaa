//! Acting operator identification
//!
//! Write endpoints record who made a change by reading the `x-user-id`
//! header. The value is not authenticated; a missing or malformed header
//! means the change is recorded without an operator.

use axum::http::HeaderMap;
use uuid::Uuid;

pub const OPERATOR_HEADER: &str = "x-user-id";

pub fn acting_operator(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get(OPERATOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s.trim()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_valid_header() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(OPERATOR_HEADER, HeaderValue::from_str(&id.to_string()).unwrap());
        assert_eq!(acting_operator(&headers), Some(id));
    }

    #[test]
    fn test_missing_or_malformed_header() {
        assert_eq!(acting_operator(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(OPERATOR_HEADER, HeaderValue::from_static("admin"));
        assert_eq!(acting_operator(&headers), None);
    }
}
