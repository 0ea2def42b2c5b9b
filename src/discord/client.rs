use anyhow::Result;
use log::{debug, error};
use serde_json::{Value, json};

use super::routes;
use super::types::{CreateDirectMessage, CreateMessage, DirectMessageChannel, MuteMember};
use crate::config::ClientConfig;
use crate::error::DiscordError;
use crate::http::{ApiRequest, HttpTransport, Transport};

/// Discord REST client: one method per endpoint, each returning the decoded
/// response body untouched.
///
/// The client holds no mutable state and can be shared across tasks.
pub struct Discord<T: Transport = HttpTransport> {
    transport: T,
    log_errors: bool,
}

impl Discord<HttpTransport> {
    /// Creates a client against the public API with default settings.
    ///
    /// Fails with [`DiscordError::MissingToken`] for an empty token and with
    /// [`DiscordError::InvalidToken`] when the token is not a valid HTTP header
    /// value (e.g. contains a newline or other control character).
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(token)?)
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::from_transport(transport, config.log_errors()))
    }
}

impl<T: Transport> Discord<T> {
    pub fn from_transport(transport: T, log_errors: bool) -> Self {
        Self {
            transport,
            log_errors,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends one request on behalf of `operation`.
    async fn execute(&self, operation: &str, request: ApiRequest) -> Result<Value> {
        debug!("{}: {} {}", operation, request.method, request.path);
        let result = self.transport.send(request).await;
        self.report(operation, result)
    }

    /// Logs a failed result under the operation's name and hands it back as is.
    fn report<V>(&self, operation: &str, result: Result<V>) -> Result<V> {
        if let Err(e) = &result {
            if self.log_errors {
                error!("{} failed: {:#}", operation, e);
            }
        }
        result
    }

    /// Fetches the user the token belongs to.
    #[tracing::instrument(skip(self))]
    pub async fn get_user_information(&self) -> Result<Value> {
        self.execute(
            "get_user_information",
            ApiRequest::get(routes::current_user()),
        )
        .await
    }

    /// Lists messages in a channel; `None` leaves the page size to the API.
    #[tracing::instrument(skip(self))]
    pub async fn get_messages_in_channel(
        &self,
        channel_id: &str,
        limit: Option<u32>,
    ) -> Result<Value> {
        let mut request = ApiRequest::get(routes::channel_messages(channel_id));
        if let Some(limit) = limit {
            request = request.query("limit", limit);
        }
        self.execute("get_messages_in_channel", request).await
    }

    /// Posts a plain text message to a channel.
    #[tracing::instrument(skip(self, content))]
    pub async fn send_message_to_channel(&self, channel_id: &str, content: &str) -> Result<Value> {
        let body = serde_json::to_value(CreateMessage { content })?;
        self.execute(
            "send_message_to_channel",
            ApiRequest::post(routes::channel_messages(channel_id)).json(body),
        )
        .await
    }

    /// Deletes a message from a channel.
    #[tracing::instrument(skip(self))]
    pub async fn delete_message_in_channel(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> Result<Value> {
        self.execute(
            "delete_message_in_channel",
            ApiRequest::delete(routes::channel_message(channel_id, message_id)),
        )
        .await
    }

    /// Accepts an invite, joining its guild.
    #[tracing::instrument(skip(self))]
    pub async fn join_guild_by_invite(&self, invite_code: &str) -> Result<Value> {
        self.execute(
            "join_guild_by_invite",
            ApiRequest::post(routes::invite(invite_code)).json(json!({})),
        )
        .await
    }

    /// Leaves a guild as the current user.
    #[tracing::instrument(skip(self))]
    pub async fn leave_guild(&self, guild_id: &str) -> Result<Value> {
        self.execute(
            "leave_guild",
            ApiRequest::delete(routes::current_user_guild(guild_id)),
        )
        .await
    }

    /// Lists the roles of a guild.
    #[tracing::instrument(skip(self))]
    pub async fn get_guild_roles(&self, guild_id: &str) -> Result<Value> {
        self.execute(
            "get_guild_roles",
            ApiRequest::get(routes::guild_roles(guild_id)),
        )
        .await
    }

    /// Grants a role to a guild member.
    #[tracing::instrument(skip(self))]
    pub async fn add_role_to_member(
        &self,
        guild_id: &str,
        member_id: &str,
        role_id: &str,
    ) -> Result<Value> {
        self.execute(
            "add_role_to_member",
            ApiRequest::put(routes::guild_member_role(guild_id, member_id, role_id))
                .json(json!({})),
        )
        .await
    }

    /// Revokes a role from a guild member.
    #[tracing::instrument(skip(self))]
    pub async fn remove_role_from_member(
        &self,
        guild_id: &str,
        member_id: &str,
        role_id: &str,
    ) -> Result<Value> {
        self.execute(
            "remove_role_from_member",
            ApiRequest::delete(routes::guild_member_role(guild_id, member_id, role_id)),
        )
        .await
    }

    /// Creates a role from a role definition.
    #[tracing::instrument(skip(self, role_data))]
    pub async fn create_guild_role(&self, guild_id: &str, role_data: Value) -> Result<Value> {
        self.execute(
            "create_guild_role",
            ApiRequest::post(routes::guild_roles(guild_id)).json(role_data),
        )
        .await
    }

    /// Applies a partial update to a role.
    #[tracing::instrument(skip(self, role_data))]
    pub async fn update_guild_role(
        &self,
        guild_id: &str,
        role_id: &str,
        role_data: Value,
    ) -> Result<Value> {
        self.execute(
            "update_guild_role",
            ApiRequest::patch(routes::guild_role(guild_id, role_id)).json(role_data),
        )
        .await
    }

    /// Deletes a role from a guild.
    #[tracing::instrument(skip(self))]
    pub async fn delete_guild_role(&self, guild_id: &str, role_id: &str) -> Result<Value> {
        self.execute(
            "delete_guild_role",
            ApiRequest::delete(routes::guild_role(guild_id, role_id)),
        )
        .await
    }

    /// Server-mutes (or with `Some(false)` unmutes) a member in voice.
    /// `None` mutes.
    #[tracing::instrument(skip(self))]
    pub async fn mute_member_in_voice_channel(
        &self,
        guild_id: &str,
        member_id: &str,
        mute: Option<bool>,
    ) -> Result<Value> {
        let body = serde_json::to_value(MuteMember {
            mute: mute.unwrap_or(true),
        })?;
        self.execute(
            "mute_member_in_voice_channel",
            ApiRequest::patch(routes::guild_member(guild_id, member_id)).json(body),
        )
        .await
    }

    /// Creates a channel in a guild.
    #[tracing::instrument(skip(self, channel_data))]
    pub async fn create_channel(&self, guild_id: &str, channel_data: Value) -> Result<Value> {
        self.execute(
            "create_channel",
            ApiRequest::post(routes::guild_channels(guild_id)).json(channel_data),
        )
        .await
    }

    /// Applies a partial update to a channel.
    #[tracing::instrument(skip(self, channel_data))]
    pub async fn update_channel(&self, channel_id: &str, channel_data: Value) -> Result<Value> {
        self.execute(
            "update_channel",
            ApiRequest::patch(routes::channel(channel_id)).json(channel_data),
        )
        .await
    }

    /// Deletes a channel, or closes a DM.
    #[tracing::instrument(skip(self))]
    pub async fn delete_channel(&self, channel_id: &str) -> Result<Value> {
        self.execute("delete_channel", ApiRequest::delete(routes::channel(channel_id)))
            .await
    }

    /// Reacts as the current user. `emoji` is a unicode emoji or `name:id`.
    #[tracing::instrument(skip(self))]
    pub async fn add_reaction(
        &self,
        channel_id: &str,
        message_id: &str,
        emoji: &str,
    ) -> Result<Value> {
        self.execute(
            "add_reaction",
            ApiRequest::put(routes::own_reaction(channel_id, message_id, emoji)).json(json!({})),
        )
        .await
    }

    /// Removes the current user's reaction from a message.
    #[tracing::instrument(skip(self))]
    pub async fn remove_reaction(
        &self,
        channel_id: &str,
        message_id: &str,
        emoji: &str,
    ) -> Result<Value> {
        self.execute(
            "remove_reaction",
            ApiRequest::delete(routes::own_reaction(channel_id, message_id, emoji)),
        )
        .await
    }

    /// Creates a webhook for a channel.
    #[tracing::instrument(skip(self, webhook_data))]
    pub async fn create_webhook(&self, channel_id: &str, webhook_data: Value) -> Result<Value> {
        self.execute(
            "create_webhook",
            ApiRequest::post(routes::channel_webhooks(channel_id)).json(webhook_data),
        )
        .await
    }

    /// Applies a partial update to a webhook.
    #[tracing::instrument(skip(self, webhook_data))]
    pub async fn update_webhook(&self, webhook_id: &str, webhook_data: Value) -> Result<Value> {
        self.execute(
            "update_webhook",
            ApiRequest::patch(routes::webhook(webhook_id)).json(webhook_data),
        )
        .await
    }

    /// Deletes a webhook.
    #[tracing::instrument(skip(self))]
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<Value> {
        self.execute("delete_webhook", ApiRequest::delete(routes::webhook(webhook_id)))
            .await
    }

    /// Lists the custom emojis of a guild.
    #[tracing::instrument(skip(self))]
    pub async fn list_guild_emojis(&self, guild_id: &str) -> Result<Value> {
        self.execute(
            "list_guild_emojis",
            ApiRequest::get(routes::guild_emojis(guild_id)),
        )
        .await
    }

    /// Uploads a custom emoji to a guild.
    #[tracing::instrument(skip(self, emoji_data))]
    pub async fn create_guild_emoji(&self, guild_id: &str, emoji_data: Value) -> Result<Value> {
        self.execute(
            "create_guild_emoji",
            ApiRequest::post(routes::guild_emojis(guild_id)).json(emoji_data),
        )
        .await
    }

    /// Renames or restricts a guild emoji.
    #[tracing::instrument(skip(self, emoji_data))]
    pub async fn update_guild_emoji(
        &self,
        guild_id: &str,
        emoji_id: &str,
        emoji_data: Value,
    ) -> Result<Value> {
        self.execute(
            "update_guild_emoji",
            ApiRequest::patch(routes::guild_emoji(guild_id, emoji_id)).json(emoji_data),
        )
        .await
    }

    /// Deletes a guild emoji.
    #[tracing::instrument(skip(self))]
    pub async fn delete_guild_emoji(&self, guild_id: &str, emoji_id: &str) -> Result<Value> {
        self.execute(
            "delete_guild_emoji",
            ApiRequest::delete(routes::guild_emoji(guild_id, emoji_id)),
        )
        .await
    }

    /// Updates the current user's settings, including presence.
    #[tracing::instrument(skip(self, presence_data))]
    pub async fn set_bot_presence(&self, presence_data: Value) -> Result<Value> {
        self.execute(
            "set_bot_presence",
            ApiRequest::patch(routes::current_user_settings()).json(presence_data),
        )
        .await
    }

    /// Opens (or reuses) the DM channel with `user_id` and posts `content`
    /// into it. Returns the created message.
    #[tracing::instrument(skip(self, content))]
    pub async fn send_direct_message(&self, user_id: &str, content: &str) -> Result<Value> {
        const OPERATION: &str = "send_direct_message";

        let body = serde_json::to_value(CreateDirectMessage {
            recipient_id: user_id,
        })?;
        let channel = self
            .execute(
                OPERATION,
                ApiRequest::post(routes::current_user_channels()).json(body),
            )
            .await?;

        let channel: DirectMessageChannel = self.report(
            OPERATION,
            serde_json::from_value(channel).map_err(|e| {
                DiscordError::UnexpectedResponse {
                    operation: OPERATION.to_string(),
                    reason: format!("DM channel without an id ({})", e),
                }
                .into()
            }),
        )?;
        debug!("Resolved DM channel {} for user {}", channel.id, user_id);

        self.send_message_to_channel(&channel.id, content).await
    }

    /// Fetches the audit log of a guild.
    #[tracing::instrument(skip(self))]
    pub async fn get_audit_logs(&self, guild_id: &str) -> Result<Value> {
        self.execute(
            "get_audit_logs",
            ApiRequest::get(routes::guild_audit_logs(guild_id)),
        )
        .await
    }
}
