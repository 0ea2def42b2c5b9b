use anyhow::Result;
use clap::Parser;
use discord_rest::{ClientConfig, Discord, commands::Command};

/// discord-rest - call Discord REST API endpoints from the command line
///
/// The token is sent as the authorization header exactly as given, so bot
/// tokens need their "Bot " prefix.
///
/// Examples:
///   discord-rest send 123456789 "hello"     # Post a message to a channel
///   discord-rest react 123 456 👍           # React to a message
#[derive(Parser, Debug)]
#[command(author, version = env!("DISCORD_REST_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Authorization token (also via DISCORD_TOKEN)
    #[arg(
        long,
        env = "DISCORD_TOKEN",
        hide_env_values = true,
        value_name = "TOKEN",
        global = true
    )]
    token: Option<String>,

    /// API base URL (defaults to https://discord.com/api/v10)
    #[arg(long = "api-url", env = "DISCORD_API_URL", value_name = "URL", global = true)]
    api_url: Option<String>,

    /// Do not log failed requests before exiting
    #[arg(long = "no-error-log", global = true)]
    no_error_log: bool,
}

impl Cli {
    fn client_config(&self) -> Result<ClientConfig> {
        let mut config =
            ClientConfig::from_token(self.token.clone())?.with_log_errors(!self.no_error_log);
        if let Some(api_url) = &self.api_url {
            config = config.with_api_url(api_url);
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let discord = Discord::with_config(cli.client_config()?)?;
    let body = discord_rest::commands::execute(&discord, cli.command).await?;

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_user_parsing() {
        let cli = Cli::try_parse_from(["discord-rest", "--token", "Bot t", "user"]).unwrap();
        assert_eq!(cli.command, Command::User);
        assert_eq!(cli.token.as_deref(), Some("Bot t"));
        assert!(!cli.no_error_log);
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "discord-rest",
            "leave",
            "42",
            "--api-url",
            "http://localhost:9",
            "--no-error-log",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::Leave {
                guild_id: "42".to_string()
            }
        );
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9"));
        assert!(cli.no_error_log);
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        let result = Cli::try_parse_from(["discord-rest", "--token", "t"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_client_config_from_cli() {
        let cli = Cli::try_parse_from([
            "discord-rest",
            "--token",
            "Bot t",
            "--api-url",
            "http://localhost:9/",
            "--no-error-log",
            "user",
        ])
        .unwrap();
        let config = cli.client_config().unwrap();
        assert_eq!(config.token(), "Bot t");
        assert_eq!(config.api_url(), "http://localhost:9/");
        assert!(!config.log_errors());
    }

    #[test]
    fn test_client_config_requires_token() {
        let cli = Cli {
            command: Command::User,
            token: None,
            api_url: None,
            no_error_log: false,
        };
        let err = cli.client_config().unwrap_err();
        assert!(err.to_string().contains("Please provide a Discord token"));
    }
}
