//! Dataset configuration
//!
//! A dataset file describes the two series to compare:
//!
//! ```json
//! {
//!   "independentName": "Year",
//!   "independentVariable": [1990, 1991, 1992],
//!   "seriesAName": "National_Leaders",
//!   "seriesA": [7.6, 8.1, 8.1],
//!   "seriesBName": "National_Failures",
//!   "seriesB": [5.9, 6.6, 6.4]
//! }
//! ```
//!
//! Only `seriesA` and `seriesB` are required. Without `independentVariable`
//! both series are keyed by their index. Files ending in `.toml` are read as
//! TOML with the same keys, anything else as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::{TimeSeries, TrendDataset};
use crate::error::{CoreError, Result};

/// Loadable description of a [`TrendDataset`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetConfig {
    /// Name of the independent variable
    #[serde(default)]
    pub independent_name: Option<String>,

    /// Shared predictor values; defaults to `0..n`
    #[serde(default)]
    pub independent_variable: Option<Vec<f64>>,

    /// Name of the first series
    #[serde(default = "default_series_a_name")]
    pub series_a_name: String,

    /// Observations of the first series
    pub series_a: Vec<f64>,

    /// Name of the second series
    #[serde(default = "default_series_b_name")]
    pub series_b_name: String,

    /// Observations of the second series
    pub series_b: Vec<f64>,
}

fn default_series_a_name() -> String {
    "A".to_string()
}

fn default_series_b_name() -> String {
    "B".to_string()
}

impl DatasetConfig {
    /// Load a dataset description from a JSON or TOML file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        debug!(path = %path.display(), toml = is_toml, "loading dataset file");

        if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    /// Parse a JSON dataset description
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a TOML dataset description
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build the validated dataset
    pub fn into_dataset(self) -> Result<TrendDataset> {
        let dataset = match self.independent_variable {
            Some(x) => {
                let predictor = self.independent_name.unwrap_or_else(|| "Year".to_string());
                let a = TimeSeries::new(self.series_a_name, x.clone(), self.series_a)?;
                let b = TimeSeries::new(self.series_b_name, x, self.series_b)?;
                TrendDataset::new(predictor, a, b)?
            }
            None => {
                let predictor = self.independent_name.unwrap_or_else(|| "Index".to_string());
                let a = TimeSeries::indexed(self.series_a_name, self.series_a)?;
                let b = TimeSeries::indexed(self.series_b_name, self.series_b)?;
                TrendDataset::new(predictor, a, b)?
            }
        };

        Ok(dataset)
    }
}

impl From<&TrendDataset> for DatasetConfig {
    fn from(dataset: &TrendDataset) -> Self {
        Self {
            independent_name: Some(dataset.predictor().to_string()),
            independent_variable: Some(dataset.series_a().x().to_vec()),
            series_a_name: dataset.series_a().name().to_string(),
            series_a: dataset.series_a().y().to_vec(),
            series_b_name: dataset.series_b().name().to_string(),
            series_b: dataset.series_b().y().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::DataError;

    #[test]
    fn test_json_config_with_predictor() {
        let config = DatasetConfig::from_json_str(
            r#"{
                "independentVariable": [2000, 2001, 2002, 2003],
                "seriesAName": "north",
                "seriesA": [1.0, 2.0, 3.5, 4.0],
                "seriesBName": "south",
                "seriesB": [4.0, 3.0, 2.5, 1.0]
            }"#,
        )
        .unwrap();

        let dataset = config.into_dataset().unwrap();
        assert_eq!(dataset.predictor(), "Year");
        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.series_a().name(), "north");
        assert_eq!(dataset.series_b().name(), "south");
        assert_eq!(dataset.series_b().x()[3], 2003.0);
    }

    #[test]
    fn test_json_config_defaults_to_index() {
        let config =
            DatasetConfig::from_json_str(r#"{ "seriesA": [1, 2, 3], "seriesB": [3, 2, 1] }"#)
                .unwrap();
        assert_eq!(config.series_a_name, "A");
        assert_eq!(config.series_b_name, "B");

        let dataset = config.into_dataset().unwrap();
        assert_eq!(dataset.predictor(), "Index");
        assert_eq!(dataset.series_a().x().to_vec(), vec![0.0, 1.0, 2.0]);
        assert!(dataset.series_a().shares_predictor(dataset.series_b()));
    }

    #[test]
    fn test_toml_config() {
        let config = DatasetConfig::from_toml_str(
            r#"
            independentName = "Season"
            independentVariable = [1.0, 2.0, 3.0]
            seriesA = [0.5, 0.7, 0.9]
            seriesB = [0.1, 0.1, 0.2]
            "#,
        )
        .unwrap();

        let dataset = config.into_dataset().unwrap();
        assert_eq!(dataset.predictor(), "Season");
        assert_eq!(dataset.series_a().y().to_vec(), vec![0.5, 0.7, 0.9]);
    }

    #[test]
    fn test_missing_series_is_rejected() {
        let err = DatasetConfig::from_json_str(r#"{ "seriesA": [1, 2, 3] }"#).unwrap_err();
        assert!(matches!(err, CoreError::Json(_)));
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let config = DatasetConfig::from_json_str(
            r#"{ "independentVariable": [1, 2, 3], "seriesA": [1, 2, 3], "seriesB": [1, 2] }"#,
        )
        .unwrap();

        match config.into_dataset().unwrap_err() {
            CoreError::Data(DataError::LengthMismatch {
                name,
                expected,
                actual,
            }) => {
                assert_eq!(name, "B");
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_indexed_series_of_different_lengths() {
        let config =
            DatasetConfig::from_json_str(r#"{ "seriesA": [1, 2, 3, 4], "seriesB": [1, 2, 3] }"#)
                .unwrap();

        let err = config.into_dataset().unwrap_err();
        assert!(matches!(
            err,
            CoreError::Data(DataError::PredictorMismatch { index: None, .. })
        ));
    }

    #[test]
    fn test_load_from_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("dataset.json");
        let mut file = std::fs::File::create(&json_path).unwrap();
        writeln!(file, r#"{{ "seriesA": [1, 2, 4], "seriesB": [2, 2, 2] }}"#).unwrap();
        let json = DatasetConfig::load_from(&json_path).unwrap();
        assert_eq!(json.series_a, vec![1.0, 2.0, 4.0]);

        let toml_path = dir.path().join("dataset.toml");
        std::fs::write(&toml_path, "seriesA = [1.0, 2.0, 4.0]\nseriesB = [2.0, 2.0, 2.0]\n")
            .unwrap();
        let toml = DatasetConfig::load_from(&toml_path).unwrap();
        assert_eq!(toml, json);
    }

    #[test]
    fn test_missing_file() {
        let err = DatasetConfig::load_from("/nonexistent/dataset.json").unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }

    #[test]
    fn test_embedded_dataset_round_trips_through_config() {
        let dataset = TrendDataset::embedded().unwrap();
        let config = DatasetConfig::from(&dataset);
        let json = serde_json::to_string(&config).unwrap();

        let restored = DatasetConfig::from_json_str(&json)
            .unwrap()
            .into_dataset()
            .unwrap();
        assert_eq!(restored, dataset);
    }

    #[test]
    fn test_bundled_dataset_file_matches_embedded() {
        let config = DatasetConfig::from_json_str(include_str!("../../../datasets/national.json"))
            .unwrap();
        assert_eq!(config.into_dataset().unwrap(), TrendDataset::embedded().unwrap());
    }
}
