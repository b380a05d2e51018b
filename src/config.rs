//! Runtime configuration for the repodoc CLI.
//!
//! The API base URL is resolved once at startup and never mutated:
//! CLI flag, then the `REPODOC_API_URL` environment variable, then the
//! local development default.

/// Default API endpoint when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the default API endpoint.
pub const API_URL_ENV: &str = "REPODOC_API_URL";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the documentation API, without a trailing slash.
    pub api_url: String,
    pub verbose: bool,
}

impl Config {
    /// Resolve configuration from the CLI flag and the process environment.
    pub fn resolve(cli_api_url: Option<&str>, verbose: bool) -> Self {
        Self::resolve_from(cli_api_url, std::env::var(API_URL_ENV).ok(), verbose)
    }

    fn resolve_from(cli_api_url: Option<&str>, env_api_url: Option<String>, verbose: bool) -> Self {
        let api_url = cli_api_url
            .map(str::to_string)
            .or(env_api_url.filter(|v| !v.is_empty()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_takes_precedence_over_env() {
        let config = Config::resolve_from(
            Some("http://cli.example:9000"),
            Some("http://env.example:9001".to_string()),
            false,
        );
        assert_eq!(config.api_url, "http://cli.example:9000");
    }

    #[test]
    fn env_var_used_when_no_cli_flag() {
        let config = Config::resolve_from(None, Some("http://env.example:9001".to_string()), false);
        assert_eq!(config.api_url, "http://env.example:9001");
    }

    #[test]
    fn falls_back_to_local_default() {
        let config = Config::resolve_from(None, None, false);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn empty_env_value_is_ignored() {
        let config = Config::resolve_from(None, Some(String::new()), false);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = Config::resolve_from(Some("http://api.example/"), None, true);
        assert_eq!(config.api_url, "http://api.example");
        assert!(config.verbose);
    }
}
