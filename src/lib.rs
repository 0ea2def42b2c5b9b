//! Thin client for a fixed set of Discord REST API endpoints.
//!
//! Every operation issues a single request (two for direct messages) with the
//! configured `authorization` header and returns the decoded JSON body as-is.
//!
//! ```no_run
//! # async fn demo() -> anyhow::Result<()> {
//! let discord = discord_rest::Discord::new("Bot my-token")?;
//! let message = discord.send_message_to_channel("123", "hi").await?;
//! println!("{}", message["id"]);
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod discord;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use discord::Discord;
pub use error::DiscordError;
