use serde_json::Value;

/// Converts the raw `values` of a read into the grid of strings the red-list logic works on.
pub trait IntoStringGrid {
    fn into_string_grid(self) -> Vec<Vec<String>>;
}

impl IntoStringGrid for Vec<Vec<Value>> {
    fn into_string_grid(self) -> Vec<Vec<String>> {
        self.into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect()
    }
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_string_grid_keeps_ragged_rows() {
        let values = vec![
            vec![json!("Rep A"), json!("North"), json!(null), json!(12)],
            vec![],
            vec![json!("01/05/2024")],
        ];

        assert_eq!(
            values.into_string_grid(),
            vec![
                vec!["Rep A", "North", "", "12"],
                vec![],
                vec!["01/05/2024"],
            ]
        );
    }

    #[test]
    fn test_cell_text_does_not_quote_strings() {
        assert_eq!(cell_text(json!("say \"hi\"")), "say \"hi\"");
        assert_eq!(cell_text(json!(true)), "true");
        assert_eq!(cell_text(json!(2.5)), "2.5");
    }
}
