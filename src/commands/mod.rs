//! Subcommands of the `discord-rest` binary, one per client operation.

mod payload;

use anyhow::Result;
use log::debug;
use serde_json::Value;

use crate::discord::Discord;
use crate::http::Transport;

pub use payload::PayloadArgs;

#[derive(clap::Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the current user
    User,

    /// List messages in a channel
    Messages {
        channel_id: String,
        /// Maximum number of messages to return (API default when omitted)
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Send a message to a channel
    Send { channel_id: String, content: String },

    /// Delete a message from a channel
    DeleteMessage {
        channel_id: String,
        message_id: String,
    },

    /// Join a guild with an invite code
    Join { invite_code: String },

    /// Leave a guild
    Leave { guild_id: String },

    /// List the roles of a guild
    Roles { guild_id: String },

    /// Grant a role to a guild member
    AddMemberRole {
        guild_id: String,
        member_id: String,
        role_id: String,
    },

    /// Revoke a role from a guild member
    RemoveMemberRole {
        guild_id: String,
        member_id: String,
        role_id: String,
    },

    /// Create a guild role
    CreateRole {
        guild_id: String,
        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Update a guild role
    UpdateRole {
        guild_id: String,
        role_id: String,
        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Delete a guild role
    DeleteRole { guild_id: String, role_id: String },

    /// Server-mute a member in voice
    Mute {
        guild_id: String,
        member_id: String,
        /// Lift the mute instead
        #[arg(long)]
        unmute: bool,
    },

    /// Create a channel in a guild
    CreateChannel {
        guild_id: String,
        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Update a channel
    UpdateChannel {
        channel_id: String,
        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Delete a channel
    DeleteChannel { channel_id: String },

    /// React to a message (unicode emoji or name:id)
    React {
        channel_id: String,
        message_id: String,
        emoji: String,
    },

    /// Remove your reaction from a message
    Unreact {
        channel_id: String,
        message_id: String,
        emoji: String,
    },

    /// Create a webhook in a channel
    CreateWebhook {
        channel_id: String,
        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Update a webhook
    UpdateWebhook {
        webhook_id: String,
        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Delete a webhook
    DeleteWebhook { webhook_id: String },

    /// List the custom emojis of a guild
    Emojis { guild_id: String },

    /// Create a guild emoji
    CreateEmoji {
        guild_id: String,
        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Update a guild emoji
    UpdateEmoji {
        guild_id: String,
        emoji_id: String,
        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Delete a guild emoji
    DeleteEmoji { guild_id: String, emoji_id: String },

    /// Update the current user's presence settings
    Presence {
        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Send a direct message to a user
    Dm { user_id: String, content: String },

    /// Show the audit log of a guild
    AuditLogs { guild_id: String },
}

/// Runs one subcommand against the API and returns the decoded response.
pub async fn execute<T: Transport>(discord: &Discord<T>, command: Command) -> Result<Value> {
    debug!("Executing {:?}", command);

    match command {
        Command::User => discord.get_user_information().await,
        Command::Messages { channel_id, limit } => {
            discord.get_messages_in_channel(&channel_id, limit).await
        }
        Command::Send {
            channel_id,
            content,
        } => discord.send_message_to_channel(&channel_id, &content).await,
        Command::DeleteMessage {
            channel_id,
            message_id,
        } => {
            discord
                .delete_message_in_channel(&channel_id, &message_id)
                .await
        }
        Command::Join { invite_code } => discord.join_guild_by_invite(&invite_code).await,
        Command::Leave { guild_id } => discord.leave_guild(&guild_id).await,
        Command::Roles { guild_id } => discord.get_guild_roles(&guild_id).await,
        Command::AddMemberRole {
            guild_id,
            member_id,
            role_id,
        } => {
            discord
                .add_role_to_member(&guild_id, &member_id, &role_id)
                .await
        }
        Command::RemoveMemberRole {
            guild_id,
            member_id,
            role_id,
        } => {
            discord
                .remove_role_from_member(&guild_id, &member_id, &role_id)
                .await
        }
        Command::CreateRole { guild_id, payload } => {
            discord.create_guild_role(&guild_id, payload.load()?).await
        }
        Command::UpdateRole {
            guild_id,
            role_id,
            payload,
        } => {
            discord
                .update_guild_role(&guild_id, &role_id, payload.load()?)
                .await
        }
        Command::DeleteRole { guild_id, role_id } => {
            discord.delete_guild_role(&guild_id, &role_id).await
        }
        Command::Mute {
            guild_id,
            member_id,
            unmute,
        } => {
            let mute = if unmute { Some(false) } else { None };
            discord
                .mute_member_in_voice_channel(&guild_id, &member_id, mute)
                .await
        }
        Command::CreateChannel { guild_id, payload } => {
            discord.create_channel(&guild_id, payload.load()?).await
        }
        Command::UpdateChannel {
            channel_id,
            payload,
        } => discord.update_channel(&channel_id, payload.load()?).await,
        Command::DeleteChannel { channel_id } => discord.delete_channel(&channel_id).await,
        Command::React {
            channel_id,
            message_id,
            emoji,
        } => discord.add_reaction(&channel_id, &message_id, &emoji).await,
        Command::Unreact {
            channel_id,
            message_id,
            emoji,
        } => {
            discord
                .remove_reaction(&channel_id, &message_id, &emoji)
                .await
        }
        Command::CreateWebhook {
            channel_id,
            payload,
        } => discord.create_webhook(&channel_id, payload.load()?).await,
        Command::UpdateWebhook {
            webhook_id,
            payload,
        } => discord.update_webhook(&webhook_id, payload.load()?).await,
        Command::DeleteWebhook { webhook_id } => discord.delete_webhook(&webhook_id).await,
        Command::Emojis { guild_id } => discord.list_guild_emojis(&guild_id).await,
        Command::CreateEmoji { guild_id, payload } => {
            discord.create_guild_emoji(&guild_id, payload.load()?).await
        }
        Command::UpdateEmoji {
            guild_id,
            emoji_id,
            payload,
        } => {
            discord
                .update_guild_emoji(&guild_id, &emoji_id, payload.load()?)
                .await
        }
        Command::DeleteEmoji { guild_id, emoji_id } => {
            discord.delete_guild_emoji(&guild_id, &emoji_id).await
        }
        Command::Presence { payload } => discord.set_bot_presence(payload.load()?).await,
        Command::Dm { user_id, content } => discord.send_direct_message(&user_id, &content).await,
        Command::AuditLogs { guild_id } => discord.get_audit_logs(&guild_id).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{ApiRequest, MockTransport};
    use clap::Parser;
    use serde_json::json;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    fn parse(args: &[&str]) -> Command {
        let mut argv = vec!["discord-rest"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().command
    }

    fn expecting(expected: ApiRequest) -> Discord<MockTransport> {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(move |request| *request == expected)
            .times(1)
            .returning(|_| Ok(json!({"ok": true})));
        Discord::from_transport(transport, false)
    }

    #[test]
    fn test_parse_messages_with_limit() {
        assert_eq!(
            parse(&["messages", "123", "--limit", "10"]),
            Command::Messages {
                channel_id: "123".to_string(),
                limit: Some(10),
            }
        );
    }

    #[test]
    fn test_parse_payload_requires_data() {
        let result = TestCli::try_parse_from(["discord-rest", "create-role", "g1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_payload_rejects_both_sources() {
        let result = TestCli::try_parse_from([
            "discord-rest",
            "presence",
            "--data",
            "{}",
            "--data-file",
            "p.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_mute_flags() {
        assert_eq!(
            parse(&["mute", "g1", "u1"]),
            Command::Mute {
                guild_id: "g1".to_string(),
                member_id: "u1".to_string(),
                unmute: false,
            }
        );
        assert!(matches!(
            parse(&["mute", "g1", "u1", "--unmute"]),
            Command::Mute { unmute: true, .. }
        ));
    }

    #[tokio::test]
    async fn test_execute_send() {
        let discord =
            expecting(ApiRequest::post("/channels/123/messages").json(json!({"content": "hi"})));
        let body = execute(&discord, parse(&["send", "123", "hi"]))
            .await
            .unwrap();
        assert_eq!(body, json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_execute_mute_default_and_unmute() {
        let discord =
            expecting(ApiRequest::patch("/guilds/g1/members/u1").json(json!({"mute": true})));
        execute(&discord, parse(&["mute", "g1", "u1"])).await.unwrap();

        let discord =
            expecting(ApiRequest::patch("/guilds/g1/members/u1").json(json!({"mute": false})));
        execute(&discord, parse(&["mute", "g1", "u1", "--unmute"]))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_execute_update_role_with_inline_payload() {
        let discord =
            expecting(ApiRequest::patch("/guilds/g1/roles/r1").json(json!({"name": "admins"})));
        let command = parse(&["update-role", "g1", "r1", "--data", r#"{"name": "admins"}"#]);
        execute(&discord, command).await.unwrap();
    }

    #[tokio::test]
    async fn test_execute_react() {
        let discord = expecting(
            ApiRequest::put("/channels/c1/messages/m1/reactions/%F0%9F%94%A5/@me").json(json!({})),
        );
        execute(&discord, parse(&["react", "c1", "m1", "🔥"]))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_execute_invalid_payload_sends_nothing() {
        let mut transport = MockTransport::new();
        transport.expect_send().never();
        let discord = Discord::from_transport(transport, false);

        let command = parse(&["create-channel", "g1", "--data", "not json"]);
        let err = execute(&discord, command).await.unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }
}
