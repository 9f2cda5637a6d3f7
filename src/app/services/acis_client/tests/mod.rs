//! Tests for archive requests and response parsing


use crate::app::services::acis_client::StnDataResponse;

/// Parse a response body the way the client does
pub fn parse_response(body: &str) -> StnDataResponse {
    serde_json::from_str(body).unwrap()
}

/// Daily series response for June 15 with a missing year
pub fn create_series_body() -> &'static str {
    r#"{
        "meta": {"name": "SAN FRANCISCO DWTN", "state": "CA", "sids": ["047772 2"]},
        "data": [
            ["1990-06-15", "80", "55", "0.00"],
            ["1995-06-15", "65", "55", "T"],
            ["1999-06-15", "M", "M", "M"],
            ["2000-06-15", "80", "50", "1.20"]
        ]
    }"#
}
