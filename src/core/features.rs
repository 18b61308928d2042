//! Ordered feature metadata: each raster feature carries its unit and the
//! summary statistics its bands encode. Column renaming is a lookup here,
//! so feature names and units cannot drift out of alignment.
use serde::{Deserialize, Serialize};

/// One raster feature with its unit and summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub unit: String,
    pub stats: Vec<String>,
}

impl Feature {
    pub fn new(name: &str, unit: &str, stats: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.to_string(),
            stats: stats.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered set of features suitable for config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureTable {
    features: Vec<Feature>,
}

impl FeatureTable {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Feature table for the ERA5-derived weather stack used by the
    /// R. okamurae extraction runs.
    pub fn era5_weather() -> Self {
        let stats = ["mean", "min", "max"];
        Self::new(vec![
            Feature::new("sst", "celsius", &stats),
            Feature::new("t2m", "celsius", &stats),
            Feature::new("u10", "m_s", &stats),
            Feature::new("v10", "m_s", &stats),
            Feature::new("tp", "mm", &stats),
        ])
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn unit_for(&self, feature: &str) -> Option<&str> {
        self.features
            .iter()
            .find(|f| f.name == feature)
            .map(|f| f.unit.as_str())
    }

    /// Expected `<feature>_<stat>` column names, in feature-major order.
    pub fn column_names(&self) -> Vec<String> {
        self.features
            .iter()
            .flat_map(|f| f.stats.iter().map(move |s| format!("{}_{}", f.name, s)))
            .collect()
    }

    /// Suffix a `<feature>_<stat>` column name with its unit, yielding
    /// `<feature>_<stat>-<unit>`. Returns `None` when no feature matches.
    pub fn rename_column(&self, column: &str) -> Option<String> {
        self.features.iter().find_map(|f| {
            column
                .strip_prefix(f.name.as_str())
                .filter(|rest| rest.starts_with('_'))
                .map(|_| format!("{}-{}", column, f.unit))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_appends_unit_for_every_feature() {
        let table = FeatureTable::era5_weather();
        for column in table.column_names() {
            let renamed = table.rename_column(&column).unwrap();
            assert!(renamed.starts_with(&column));
            assert!(renamed.contains('-'));
        }
        assert_eq!(
            table.rename_column("sst_mean").as_deref(),
            Some("sst_mean-celsius")
        );
        assert_eq!(
            table.rename_column("tp_max").as_deref(),
            Some("tp_max-mm")
        );
    }

    #[test]
    fn rename_rejects_unknown_and_prefix_collisions() {
        let table = FeatureTable::new(vec![
            Feature::new("t2m", "celsius", &["mean"]),
            Feature::new("t2", "kelvin", &["mean"]),
        ]);
        assert_eq!(table.rename_column("ndvi_mean"), None);
        // "t2m_mean" must match "t2m", not the shorter "t2" prefix.
        assert_eq!(
            table.rename_column("t2m_mean").as_deref(),
            Some("t2m_mean-celsius")
        );
        assert_eq!(
            table.rename_column("t2_mean").as_deref(),
            Some("t2_mean-kelvin")
        );
    }

    #[test]
    fn column_names_follow_feature_order() {
        let table = FeatureTable::new(vec![
            Feature::new("sst", "celsius", &["mean", "max"]),
            Feature::new("tp", "mm", &["mean"]),
        ]);
        assert_eq!(table.column_names(), vec!["sst_mean", "sst_max", "tp_mean"]);
    }
}
