//! Material stock rows shown by the demo.

use std::path::Path;

use serde::Deserialize;

use crate::error::DemoError;

/// One physical spool or bottle of material in stock.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StockEntry {
    /// Internal label identifying the material
    pub label: u32,
    pub name: String,
    pub production_method: String,
    pub material_type: String,
    pub color: String,
    #[serde(default)]
    pub optimal_temp: Option<f64>,
    #[serde(default)]
    pub consumed: bool,
}

impl StockEntry {
    fn new(
        label: u32,
        name: &str,
        production_method: &str,
        material_type: &str,
        color: &str,
        optimal_temp: Option<f64>,
    ) -> Self {
        Self {
            label,
            name: name.to_string(),
            production_method: production_method.to_string(),
            material_type: material_type.to_string(),
            color: color.to_string(),
            optimal_temp,
            consumed: false,
        }
    }
}

/// Read rows from a JSON array file.
pub fn load_rows(path: &Path) -> Result<Vec<StockEntry>, DemoError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

pub fn sample_rows() -> Vec<StockEntry> {
    vec![
        StockEntry::new(12, "Prusament PETG", "FDM", "PETG", "Orange", Some(240.0)),
        StockEntry::new(3, "Basic PLA", "FDM", "PLA", "White", Some(210.0)),
        StockEntry::new(27, "Tough Resin", "SLA", "RESIN", "Grey", None),
        StockEntry::new(8, "Silk PLA", "FDM", "PLA", "Gold", Some(205.0)),
        StockEntry::new(15, "ABS Pro", "FDM", "ABS", "Black", Some(250.0)),
        StockEntry::new(31, "Clear Resin", "SLA", "RESIN", "Clear", None),
        StockEntry::new(5, "Nylon PA12", "SLS", "NYLON", "White", Some(180.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_deserialize_with_defaults() {
        let rows: Vec<StockEntry> = serde_json::from_str(
            r#"[{"label": 1, "name": "PLA", "production_method": "FDM",
                 "material_type": "PLA", "color": "Red"}]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].optimal_temp, None);
        assert!(!rows[0].consumed);
    }
}
