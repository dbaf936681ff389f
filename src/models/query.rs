//! Query response models.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A single materialized result row. The column set is determined at runtime
/// by whatever SQL the model generated, so rows are dynamic maps rather than
/// a fixed record type. `serde_json` is built with `preserve_order` so the
/// result set's column order survives serialization.
pub type ResultRow = serde_json::Map<String, JsonValue>;

/// Response payload for the `/query` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// The original natural-language question.
    pub question: String,
    /// The cleaned SQL produced by the completion API.
    pub generated_sql: String,
    /// Every row the engine returned, in engine order.
    pub results: Vec<ResultRow>,
}

/// Static payload for the root endpoint describing the API surface.
#[derive(Debug, Clone, Serialize)]
pub struct ApiInfo {
    pub message: &'static str,
    pub endpoints: JsonValue,
    pub example: JsonValue,
}

impl ApiInfo {
    pub fn new() -> Self {
        Self {
            message: "Welcome to Text-to-SQL Query API",
            endpoints: serde_json::json!({
                "/": "This help message",
                "/query": "Convert natural language to SQL and get results. Usage: /query?text=your_question",
                "/schema": "Get database schema information",
            }),
            example: serde_json::json!({
                "url": "http://localhost:8000/query?text=What%20are%20the%20top%205%20products%20by%20sales",
                "description": "Try this example in your browser or using curl",
            }),
        }
    }
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_response_round_trip() {
        let mut row = ResultRow::new();
        row.insert("name".to_string(), JsonValue::String("Laptop".to_string()));
        let response = QueryResponse {
            question: "top products".to_string(),
            generated_sql: "SELECT name FROM TELD_PRODUCTS".to_string(),
            results: vec![row],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["question"], "top products");
        assert_eq!(json["generated_sql"], "SELECT name FROM TELD_PRODUCTS");
        assert_eq!(json["results"][0]["name"], "Laptop");
    }

    #[test]
    fn test_api_info_lists_endpoints() {
        let info = ApiInfo::new();
        let json = serde_json::to_value(&info).unwrap();
        assert!(json["endpoints"]["/query"].is_string());
        assert!(json["endpoints"]["/schema"].is_string());
    }
}
