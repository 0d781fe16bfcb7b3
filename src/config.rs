use std::env;

/// Endpoint produksi API pendaftaran bootcamp.
pub const DEFAULT_ENDPOINT: &str =
    "https://masterofweb-be-api.masterof.website/api/bootcamp-participants";

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
}

impl Config {
    /// `BOOTCAMP_API_URL` menimpa endpoint bawaan, mis. untuk staging.
    pub fn from_env() -> Self {
        let endpoint = env::var("BOOTCAMP_API_URL")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string())
            .trim()
            .to_string();
        Config { endpoint }
    }
}
