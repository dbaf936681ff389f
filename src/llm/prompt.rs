//! Prompt construction and completion-output cleanup.
//!
//! Rendering is pure: identical schema/question inputs always produce a
//! byte-identical prompt. That determinism is what makes the pipeline
//! testable at all, since the remote model's output is not.

use crate::models::TableSchema;

/// Fixed system instruction. Constrains the model to emit a bare query with
/// no explanation or markdown, which `clean_sql` then enforces anyway.
pub const SYSTEM_PROMPT: &str = "You are a SQL expert. Given a database schema and a natural \
     language question, generate the corresponding SQL query. Only return the SQL query without \
     any explanations or markdown formatting.";

/// Render the schema description as prompt context: one block per table
/// listing every column with its declared type.
pub fn render_schema(tables: &[TableSchema]) -> String {
    let mut context = String::from("Database Schema:\n");
    for table in tables {
        context.push_str(&format!("\nTable: {}\n", table.table));
        context.push_str("Columns:\n");
        for col in &table.columns {
            context.push_str(&format!("- {} ({})\n", col.name, col.column_type));
        }
    }
    context
}

/// Build the user-turn message: schema context followed by the literal
/// question.
pub fn build_user_prompt(tables: &[TableSchema], question: &str) -> String {
    format!(
        "{}\n\nQuestion: {}\n\nGenerate SQL query:",
        render_schema(tables),
        question
    )
}

/// Strip markdown code fences and collapse all whitespace runs into single
/// spaces. The model is free-text and may wrap its answer in fences; the
/// output of this function must never contain a fence marker. Idempotent on
/// already-clean input.
pub fn clean_sql(raw: &str) -> String {
    let without_fences = raw.replace("```sql", "").replace("```", "");
    without_fences.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColumnInfo;

    fn sample_schema() -> Vec<TableSchema> {
        vec![
            TableSchema::new(
                "TELD_PRODUCTS",
                vec![
                    ColumnInfo::new("product_id", "INTEGER"),
                    ColumnInfo::new("name", "TEXT"),
                    ColumnInfo::new("price", "REAL"),
                ],
            ),
            TableSchema::new(
                "TELD_CUSTOMER",
                vec![ColumnInfo::new("customer_id", "INTEGER")],
            ),
        ]
    }

    #[test]
    fn test_render_schema_lists_every_table_and_column() {
        let rendered = render_schema(&sample_schema());
        assert!(rendered.starts_with("Database Schema:\n"));
        assert!(rendered.contains("Table: TELD_PRODUCTS"));
        assert!(rendered.contains("- price (REAL)"));
        assert!(rendered.contains("Table: TELD_CUSTOMER"));
        assert!(rendered.contains("- customer_id (INTEGER)"));
    }

    #[test]
    fn test_build_user_prompt_contains_question() {
        let prompt = build_user_prompt(&sample_schema(), "top 5 products by price");
        assert!(prompt.contains("Question: top 5 products by price"));
        assert!(prompt.ends_with("Generate SQL query:"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let schema = sample_schema();
        let a = build_user_prompt(&schema, "how many orders?");
        let b = build_user_prompt(&schema, "how many orders?");
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_schema_still_renders_header() {
        let rendered = render_schema(&[]);
        assert_eq!(rendered, "Database Schema:\n");
    }

    #[test]
    fn test_clean_sql_strips_fences() {
        let cleaned = clean_sql("```sql\nSELECT * FROM t\n```");
        assert_eq!(cleaned, "SELECT * FROM t");
    }

    #[test]
    fn test_clean_sql_collapses_whitespace() {
        let cleaned = clean_sql("SELECT  name\n\nFROM   TELD_PRODUCTS\t WHERE price > 10 ");
        assert_eq!(cleaned, "SELECT name FROM TELD_PRODUCTS WHERE price > 10");
        assert!(!cleaned.contains("  "));
        assert_eq!(cleaned, cleaned.trim());
    }

    #[test]
    fn test_clean_sql_idempotent_on_clean_input() {
        let clean = "SELECT name FROM TELD_PRODUCTS ORDER BY price DESC LIMIT 5";
        assert_eq!(clean_sql(clean), clean);
    }

    #[test]
    fn test_clean_sql_single_line_fenced_completion() {
        let cleaned =
            clean_sql("```sql SELECT name FROM TELD_PRODUCTS ORDER BY price DESC LIMIT 5```");
        assert_eq!(
            cleaned,
            "SELECT name FROM TELD_PRODUCTS ORDER BY price DESC LIMIT 5"
        );
    }

    #[test]
    fn test_clean_sql_never_leaves_fence_markers() {
        for input in ["```sql\nSELECT 1\n```", "``` SELECT 1 ```", "SELECT 1"] {
            assert!(!clean_sql(input).contains("```"));
        }
    }
}
