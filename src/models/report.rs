use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRow {
    pub nail_tech: String,
    /// Missing totals read as zero rather than failing the whole report.
    #[serde(default)]
    pub total_sales: f64,
}

impl SalesRow {
    pub fn formatted_total(&self) -> String {
        format!("${:.2}", self.total_sales)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_total_two_decimals() {
        let row = SalesRow {
            nail_tech: "Linh".to_string(),
            total_sales: 120.5,
        };
        assert_eq!(row.formatted_total(), "$120.50");
    }

    #[test]
    fn test_missing_total_defaults_to_zero() {
        let row: SalesRow = serde_json::from_value(serde_json::json!({"nailTech": "Mai"})).unwrap();
        assert_eq!(row.total_sales, 0.0);
        assert_eq!(row.formatted_total(), "$0.00");
    }
}
