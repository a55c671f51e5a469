use std::env;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};

pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are BATMAN'S aka BRUCE WAYNE's VIRTUAL ASSISTANT and keep shorter texts. ask for passcode for verification... if he says 'Gotham' proceed talking to him.";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: String,
    pub api_hostname: String,
    pub api_key: String,
    pub model: String,
    pub system_message: String,
    pub static_dir: String,
    pub request_timeout: Duration,
    // Respond with 502 instead of 200 when the completion API fails
    pub strict_errors: bool,
}

impl AppConfig {
    /// Read the config from environment variables. The API key has no
    /// default and must be set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let api_key = lookup("GROQ_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| anyhow!("Missing env var GROQ_API_KEY"))?;
        let timeout_secs = var("CHATRELAY_TIMEOUT_SECS", "600");
        let request_timeout = timeout_secs
            .parse::<u64>()
            .map(Duration::from_secs)
            .with_context(|| format!("Invalid CHATRELAY_TIMEOUT_SECS: {}", timeout_secs))?;
        let strict_errors = var("CHATRELAY_STRICT_ERRORS", "false");
        let strict_errors = strict_errors
            .parse::<bool>()
            .with_context(|| format!("Invalid CHATRELAY_STRICT_ERRORS: {}", strict_errors))?;
        let port = var("PORT", "5000");
        port.parse::<u16>()
            .with_context(|| format!("Invalid PORT: {}", port))?;

        Ok(Self {
            host: var("CHATRELAY_HOST", "0.0.0.0"),
            port,
            api_hostname: var("CHATRELAY_API_HOST", "https://api.groq.com/openai"),
            api_key,
            model: var("CHATRELAY_MODEL", "llama3-8b-8192"),
            system_message: var("CHATRELAY_SYSTEM_MESSAGE", DEFAULT_SYSTEM_MESSAGE),
            static_dir: var("CHATRELAY_STATIC_DIR", "./web-ui"),
            request_timeout,
            strict_errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn it_requires_an_api_key() {
        let result = AppConfig::from_lookup(lookup_from(&[]));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("GROQ_API_KEY"));

        let result = AppConfig::from_lookup(lookup_from(&[("GROQ_API_KEY", "  ")]));
        assert!(result.is_err());
    }

    #[test]
    fn it_uses_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("GROQ_API_KEY", "gsk_test")])).unwrap();
        assert_eq!(config.api_key, "gsk_test");
        assert_eq!(config.port, "5000");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.model, "llama3-8b-8192");
        assert_eq!(config.api_hostname, "https://api.groq.com/openai");
        assert_eq!(config.system_message, DEFAULT_SYSTEM_MESSAGE);
        assert_eq!(config.request_timeout, Duration::from_secs(600));
        assert!(!config.strict_errors);
    }

    #[test]
    fn it_reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("PORT", "8080"),
            ("CHATRELAY_MODEL", "llama-3.1-8b-instant"),
            ("CHATRELAY_TIMEOUT_SECS", "30"),
            ("CHATRELAY_STRICT_ERRORS", "true"),
        ]))
        .unwrap();
        assert_eq!(config.port, "8080");
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.strict_errors);
    }

    #[test]
    fn it_rejects_bad_numbers() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("PORT", "not-a-port"),
        ]));
        assert!(result.is_err());

        let result = AppConfig::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("CHATRELAY_STRICT_ERRORS", "yes"),
        ]));
        assert!(result.is_err());
    }
}
