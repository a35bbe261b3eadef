use anyhow::Error;
use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "testgen.json";
const ENV_PREFIX: &str = "TESTGEN_";
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/generate_tests";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    pub endpoint: String,
    pub framework: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub strip_code_fences: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            framework: None,
            request_timeout_secs: None,
            strip_code_fences: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Defaults, then `testgen.json` if present, then `TESTGEN_*` variables.
    pub fn load() -> Result<Config, Error> {
        Self::figment(CONFIG_FILE).extract().map_err(Error::from)
    }

    fn figment(file: &str) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Json::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}
