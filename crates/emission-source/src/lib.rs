//! Emission Data Source
//!
//! Paged fetching of vehicle CO2 records from the EEA's public tabular
//! SQL endpoint. One query per registration-year table; pages are
//! accumulated until the endpoint returns an empty result set.

use emission_record::RawRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

/// Source error types
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error for table {table}, page {page}: status {status}")]
    Api {
        table: String,
        page: usize,
        status: u16,
    },
}

/// Source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// SQL endpoint URL
    pub base_url: String,
    /// Registration-year tables to fetch
    pub tables: Vec<String>,
    /// Rows requested per page
    pub page_size: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://discodata.eea.europa.eu/sql".to_string(),
            tables: vec![
                "co2cars_2021Pv23".to_string(),
                "co2cars_2022Pv25".to_string(),
                "co2cars_2023Pv27".to_string(),
            ],
            page_size: 100_000,
        }
    }
}

/// One page of the endpoint's JSON response.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<RawRecord>,
}

/// Paged client for the emission data API.
pub struct EmissionSource {
    config: SourceConfig,
    client: reqwest::Client,
}

impl EmissionSource {
    pub fn new(config: SourceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Fetch every configured table and accumulate the rows.
    pub async fn fetch_all(&self) -> Result<Vec<RawRecord>, SourceError> {
        let mut records = Vec::new();
        for table in &self.config.tables {
            info!("Fetching table {}", table);
            let rows = self.fetch_table(table).await?;
            info!("{} rows accumulated after table {}", records.len() + rows.len(), table);
            records.extend(rows);
        }
        Ok(records)
    }

    /// Fetch one table page by page until an empty page comes back.
    pub async fn fetch_table(&self, table: &str) -> Result<Vec<RawRecord>, SourceError> {
        let query = build_query(table);
        let mut records = Vec::new();
        let mut page = 1;

        loop {
            let page_param = page.to_string();
            let hits_param = self.config.page_size.to_string();
            let response = self
                .client
                .get(&self.config.base_url)
                .query(&[
                    ("query", query.as_str()),
                    ("p", page_param.as_str()),
                    ("nrOfHits", hits_param.as_str()),
                ])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                error!("API error for table {}, page {}: {}", table, page, status);
                return Err(SourceError::Api {
                    table: table.to_string(),
                    page,
                    status: status.as_u16(),
                });
            }

            let body: QueryResponse = response.json().await?;
            if body.results.is_empty() {
                break;
            }
            records.extend(body.results);
            page += 1;
        }

        info!("{} rows fetched from table {}", records.len(), table);
        Ok(records)
    }
}

/// SELECT DISTINCT over the ten canonical columns, excluding rows with
/// any NULL. Mirrors the upstream dataset's layout.
fn build_query(table: &str) -> String {
    format!(
        "SELECT DISTINCT [Year], Mk, Cn, [M (kg)], [Ewltp (g/km)], Ft, [Ec (cm3)], \
         [Ep (KW)], [Erwltp (g/km)], Fc \
         FROM [CO2Emission].[latest].[{table}] \
         WHERE Mk IS NOT NULL AND Cn IS NOT NULL AND [M (kg)] IS NOT NULL \
         AND [Ewltp (g/km)] IS NOT NULL AND Ft IS NOT NULL AND [Ec (cm3)] IS NOT NULL \
         AND [Ep (KW)] IS NOT NULL AND [Erwltp (g/km)] IS NOT NULL \
         AND [Year] IS NOT NULL AND Fc IS NOT NULL"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_names_table_and_columns() {
        let query = build_query("co2cars_2021Pv23");
        assert!(query.contains("[CO2Emission].[latest].[co2cars_2021Pv23]"));
        assert!(query.contains("[Ewltp (g/km)]"));
        assert!(query.contains("Fc IS NOT NULL"));
        assert!(query.starts_with("SELECT DISTINCT"));
    }

    #[test]
    fn test_response_page_decodes() {
        let json = r#"{
            "results": [
                {"Mk": "FIAT", "Cn": "PANDA", "M (kg)": 980.0, "Ewltp (g/km)": 110.0,
                 "Ft": "petrol", "Ec (cm3)": 999.0, "Ep (KW)": 51.0,
                 "Erwltp (g/km)": 0.8, "Year": 2021, "Fc": 4.9}
            ]
        }"#;
        let page: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].manufacturer.as_deref(), Some("FIAT"));
    }

    #[test]
    fn test_empty_page_decodes() {
        let page: QueryResponse = serde_json::from_str("{}").unwrap();
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_default_config_covers_three_years() {
        let config = SourceConfig::default();
        assert_eq!(config.tables.len(), 3);
        assert!(config.base_url.starts_with("https://"));
    }
}
