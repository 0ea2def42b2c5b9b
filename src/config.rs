//! Client configuration.

use std::fmt;

use crate::error::DiscordError;

/// Versioned base URL of the Discord REST API.
pub const DEFAULT_API_URL: &str = "https://discord.com/api/v10";

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("discord-rest/", env!("DISCORD_REST_VERSION"));

/// Immutable settings a [`crate::Discord`] client is built from.
///
/// The token is sent as the `authorization` header exactly as given, so bot
/// tokens must already carry their `Bot ` prefix.
#[derive(Clone)]
pub struct ClientConfig {
    token: String,
    api_url: String,
    user_agent: String,
    log_errors: bool,
}

impl ClientConfig {
    /// Creates a configuration for the given token.
    ///
    /// Fails with [`DiscordError::MissingToken`] when the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, DiscordError> {
        let token = token.into();
        if token.is_empty() {
            return Err(DiscordError::MissingToken);
        }

        Ok(Self {
            token,
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_errors: true,
        })
    }

    /// Like [`ClientConfig::new`], treating `None` as a missing token.
    pub fn from_token(token: Option<String>) -> Result<Self, DiscordError> {
        Self::new(token.ok_or(DiscordError::MissingToken)?)
    }

    /// Overrides the API base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Overrides the `user-agent` header sent with every request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Controls whether failed operations are reported through `log` before
    /// being returned.
    pub fn with_log_errors(mut self, log_errors: bool) -> Self {
        self.log_errors = log_errors;
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn log_errors(&self) -> bool {
        self.log_errors
    }

    /// Token with everything but its first and last four characters hidden.
    pub fn masked_token(&self) -> String {
        mask_token(&self.token)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &self.masked_token())
            .field("api_url", &self.api_url)
            .field("user_agent", &self.user_agent)
            .field("log_errors", &self.log_errors)
            .finish()
    }
}

fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*********".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_token() {
        let result = ClientConfig::new("");
        assert!(matches!(result, Err(DiscordError::MissingToken)));
    }

    #[test]
    fn test_from_token_none_is_missing() {
        let result = ClientConfig::from_token(None);
        assert!(matches!(result, Err(DiscordError::MissingToken)));
    }

    #[test]
    fn test_new_defaults() {
        let config = ClientConfig::new("Bot abc").unwrap();
        assert_eq!(config.token(), "Bot abc");
        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert!(config.user_agent().starts_with("discord-rest/"));
        assert!(config.log_errors());
    }

    #[test]
    fn test_with_api_url() {
        let config = ClientConfig::new("t")
            .unwrap()
            .with_api_url("http://localhost:1234");
        assert_eq!(config.api_url(), "http://localhost:1234");
    }

    #[test]
    fn test_with_user_agent() {
        let config = ClientConfig::new("t").unwrap().with_user_agent("my-bot/1.0");
        assert_eq!(config.user_agent(), "my-bot/1.0");
    }

    #[test]
    fn test_with_log_errors() {
        let config = ClientConfig::new("t").unwrap().with_log_errors(false);
        assert!(!config.log_errors());
    }

    #[test]
    fn test_masked_token() {
        let config = ClientConfig::new("Bot abcdefghijklmnop").unwrap();
        assert_eq!(config.masked_token(), "Bot *********mnop");

        let short = ClientConfig::new("short").unwrap();
        assert_eq!(short.masked_token(), "*********");
    }

    #[test]
    fn test_debug_hides_token() {
        let config = ClientConfig::new("Bot supersecretvalue123").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("supersecretvalue"));
        assert!(debug.contains("*********"));
    }
}
