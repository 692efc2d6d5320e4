//! Configuration management for the tether client.
//!
//! Configuration is loaded from environment variables, with validation to
//! ensure all values required by the selected API are present.

use std::env;
use std::time::Duration;

use crate::error::TetherError;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of transport-level retries for transient failures.
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default Manage codebase segment.
const DEFAULT_CODEBASE: &str = "v4_6_release";

/// Which ConnectWise product the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKind {
    /// ConnectWise Manage (PSA), REST API 3.0.
    Manage,
    /// ConnectWise Automate (RMM), REST API v1.
    Automate,
}

impl ApiKind {
    fn parse(value: &str) -> Result<Self, TetherError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "manage" => Ok(ApiKind::Manage),
            "automate" => Ok(ApiKind::Automate),
            other => Err(TetherError::invalid_config(format!(
                "CW_API must be 'manage' or 'automate', got {:?}",
                other
            ))),
        }
    }
}

/// Credentials for one of the two APIs.
///
/// None of these values may ever be logged.
#[derive(Clone)]
pub enum Credentials {
    /// Manage API member keys.
    Manage {
        /// Company identifier used at login.
        company_id: String,
        /// Public half of the API member key.
        public_key: String,
        /// Private half of the API member key.
        private_key: String,
        /// Codebase path segment, e.g. `v4_6_release`.
        codebase: String,
    },
    /// A pre-issued Automate bearer token.
    AutomateToken {
        /// The bearer token.
        token: String,
    },
    /// Automate user credentials exchanged for a token at startup.
    AutomatePassword {
        /// Automate user name.
        username: String,
        /// Automate password.
        password: String,
        /// Optional two-factor passcode.
        two_factor: Option<String>,
    },
}

impl Credentials {
    /// Returns the API these credentials belong to.
    pub fn kind(&self) -> ApiKind {
        match self {
            Credentials::Manage { .. } => ApiKind::Manage,
            Credentials::AutomateToken { .. } | Credentials::AutomatePassword { .. } => {
                ApiKind::Automate
            }
        }
    }

    /// Secret values that must be redacted from any surfaced message.
    pub(crate) fn secrets(&self) -> Vec<&str> {
        match self {
            Credentials::Manage {
                public_key,
                private_key,
                ..
            } => vec![public_key.as_str(), private_key.as_str()],
            Credentials::AutomateToken { token } => vec![token.as_str()],
            Credentials::AutomatePassword {
                password,
                two_factor,
                ..
            } => {
                let mut secrets = vec![password.as_str()];
                if let Some(code) = two_factor {
                    secrets.push(code.as_str());
                }
                secrets
            }
        }
    }
}

/// Configuration for connecting to a ConnectWise instance.
#[derive(Clone)]
pub struct Config {
    /// Site URL of the instance (e.g., `https://na.myconnectwise.net`).
    pub base_url: String,

    /// ConnectWise developer client id, sent with every request.
    pub client_id: String,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Maximum transport-level attempts for transient failures; `0` disables retries.
    pub max_retries: u32,

    credentials: Credentials,
}

impl Config {
    /// Builds a Manage configuration without touching the environment.
    pub fn manage(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        company_id: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Result<Self, TetherError> {
        Self::new(
            base_url.into(),
            client_id.into(),
            Credentials::Manage {
                company_id: company_id.into(),
                public_key: public_key.into(),
                private_key: private_key.into(),
                codebase: DEFAULT_CODEBASE.to_string(),
            },
        )
    }

    /// Builds an Automate configuration from a pre-issued token.
    pub fn automate(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, TetherError> {
        Self::new(
            base_url.into(),
            client_id.into(),
            Credentials::AutomateToken {
                token: token.into(),
            },
        )
    }

    /// Builds an Automate configuration that exchanges user credentials for
    /// a token when the transport connects.
    pub fn automate_with_password(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        two_factor: Option<String>,
    ) -> Result<Self, TetherError> {
        Self::new(
            base_url.into(),
            client_id.into(),
            Credentials::AutomatePassword {
                username: username.into(),
                password: password.into(),
                two_factor,
            },
        )
    }

    fn new(
        base_url: String,
        client_id: String,
        credentials: Credentials,
    ) -> Result<Self, TetherError> {
        let base_url = Self::validate_base_url(base_url)?;
        for secret in credentials.secrets() {
            Self::validate_secret(secret)?;
        }
        Ok(Config {
            base_url,
            client_id,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            credentials,
        })
    }

    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CW_API`: `manage` (default) or `automate`
    /// - `CW_BASE_URL`, `CW_CLIENT_ID`: always required
    /// - Manage: `CW_COMPANY_ID`, `CW_PUBLIC_KEY`, `CW_PRIVATE_KEY`, optional `CW_CODEBASE`
    /// - Automate: `CW_AUTOMATE_TOKEN`, or `CW_AUTOMATE_USERNAME` and
    ///   `CW_AUTOMATE_PASSWORD` with optional `CW_AUTOMATE_2FA`
    /// - Optional: `CW_TIMEOUT_SECS`, `CW_MAX_RETRIES`
    ///
    /// # Errors
    ///
    /// Returns `TetherError::Config` if any required variable is missing
    /// or if values fail validation.
    pub fn from_env() -> Result<Self, TetherError> {
        let kind = match Self::get_optional_env("CW_API") {
            Some(value) => ApiKind::parse(&value)?,
            None => ApiKind::Manage,
        };
        let base_url = Self::get_required_env("CW_BASE_URL")?;
        let client_id = Self::get_required_env("CW_CLIENT_ID")?;

        let credentials = match kind {
            ApiKind::Manage => Credentials::Manage {
                company_id: Self::get_required_env("CW_COMPANY_ID")?,
                public_key: Self::get_required_env("CW_PUBLIC_KEY")?,
                private_key: Self::get_required_env("CW_PRIVATE_KEY")?,
                codebase: Self::get_optional_env("CW_CODEBASE")
                    .unwrap_or_else(|| DEFAULT_CODEBASE.to_string()),
            },
            ApiKind::Automate => match Self::get_optional_env("CW_AUTOMATE_TOKEN") {
                Some(token) => Credentials::AutomateToken { token },
                None => Credentials::AutomatePassword {
                    username: Self::get_required_env("CW_AUTOMATE_USERNAME")?,
                    password: Self::get_required_env("CW_AUTOMATE_PASSWORD")?,
                    two_factor: Self::get_optional_env("CW_AUTOMATE_2FA"),
                },
            },
        };

        let mut config = Self::new(base_url, client_id, credentials)?;

        if let Some(value) = Self::get_optional_env("CW_TIMEOUT_SECS") {
            let secs = Self::parse_number::<u64>("CW_TIMEOUT_SECS", &value)?;
            if secs == 0 {
                return Err(TetherError::invalid_config(
                    "CW_TIMEOUT_SECS must be greater than zero",
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(value) = Self::get_optional_env("CW_MAX_RETRIES") {
            config.max_retries = Self::parse_number::<u32>("CW_MAX_RETRIES", &value)?;
        }

        Ok(config)
    }

    /// Returns the API selected by the configured credentials.
    pub fn kind(&self) -> ApiKind {
        self.credentials.kind()
    }

    /// Returns the configured credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the number of transport-level retries.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, TetherError> {
        Self::get_optional_env(name).ok_or_else(|| TetherError::missing_env(name))
    }

    fn get_optional_env(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }

    fn parse_number<N: std::str::FromStr>(name: &str, value: &str) -> Result<N, TetherError> {
        value.trim().parse::<N>().map_err(|_| {
            TetherError::invalid_config(format!("{} must be a non-negative integer", name))
        })
    }

    /// Validates and normalizes the base URL.
    fn validate_base_url(url: String) -> Result<String, TetherError> {
        let url = url.trim().trim_end_matches('/').to_string();

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(TetherError::invalid_config(
                "CW_BASE_URL must start with http:// or https://",
            ));
        }
        url::Url::parse(&url)
            .map_err(|e| TetherError::invalid_config(format!("CW_BASE_URL is invalid: {}", e)))?;

        Ok(url)
    }

    /// Rejects obvious placeholder secrets copied from sample `.env` files.
    fn validate_secret(secret: &str) -> Result<(), TetherError> {
        let lower = secret.to_lowercase();
        let placeholder_patterns = [
            "your_private_key",
            "your_public_key",
            "your_key",
            "your_token",
            "placeholder",
            "changeme",
        ];

        if placeholder_patterns
            .iter()
            .any(|pattern| lower.contains(pattern))
        {
            return Err(TetherError::invalid_config(
                "a configured ConnectWise credential appears to be a placeholder value",
            ));
        }

        Ok(())
    }
}
