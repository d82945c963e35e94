use serde::Deserialize;

/// Tunable parameters for a run. Defaults mirror the values baked into the
/// one-off script this replaces; a config loader can deserialize its own.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub url: String,
    pub output_path: String,
    pub min_delay_secs: f64,
    pub max_delay_secs: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: "https://www.amazon.com/dp/B075CYMYK6".to_string(),
            output_path: "product_details.txt".to_string(),
            min_delay_secs: 2.0,
            max_delay_secs: 5.0,
        }
    }
}
