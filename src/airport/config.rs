use serde::{Deserialize, Serialize};
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "airport_lookup.json";

/// Everything the airport lookup needs to talk to the service. Built once at startup
/// and handed to [`AirportLookupService`](super::lookup_service::AirportLookupService).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LookupConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    #[serde(default = "default_country")]
    pub country: String,

    #[serde(default = "default_timeout", with = "millis")]
    pub timeout: Duration,
}

fn default_endpoint() -> String {
    "https://airports-by-api-ninjas.p.rapidapi.com/v1/airports".to_string()
}

fn default_host() -> String {
    "airports-by-api-ninjas.p.rapidapi.com".to_string()
}

fn default_country() -> String {
    "US".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_millis(5000)
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            host: default_host(),
            api_key: None,
            country: default_country(),
            timeout: default_timeout(),
        }
    }
}

impl LookupConfig {
    /// Reads the config file if it exists, falling back to defaults when it doesn't.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !fs::exists(path)? {
            return Ok(Self::default());
        }
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Duration::from_millis(u64::deserialize(deserializer)?))
    }
}
