//! Slack transport configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Slack credentials
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Bot user OAuth token (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub bot_token: Option<SecretString>,
}

impl SlackConfig {
    /// Whether a non-empty token is configured
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.bot_token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().trim().is_empty())
    }
}

impl std::fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackConfig")
            .field(
                "bot_token",
                &if self.bot_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .finish()
    }
}
