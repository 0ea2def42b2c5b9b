//! Path templates of the supported endpoints.
//!
//! Identifiers are inserted verbatim; only reaction emoji are percent-encoded.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except the characters `encodeURIComponent` leaves alone:
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const EMOJI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes an emoji (unicode or `name:id`) for use as a path segment.
pub fn encode_emoji(emoji: &str) -> String {
    utf8_percent_encode(emoji, EMOJI_ENCODE_SET).to_string()
}

pub fn current_user() -> String {
    "/users/@me".to_string()
}

pub fn current_user_guild(guild_id: &str) -> String {
    format!("/users/@me/guilds/{}", guild_id)
}

pub fn current_user_channels() -> String {
    "/users/@me/channels".to_string()
}

pub fn current_user_settings() -> String {
    "/users/@me/settings".to_string()
}

pub fn channel(channel_id: &str) -> String {
    format!("/channels/{}", channel_id)
}

pub fn channel_messages(channel_id: &str) -> String {
    format!("/channels/{}/messages", channel_id)
}

pub fn channel_message(channel_id: &str, message_id: &str) -> String {
    format!("/channels/{}/messages/{}", channel_id, message_id)
}

pub fn own_reaction(channel_id: &str, message_id: &str, emoji: &str) -> String {
    format!(
        "/channels/{}/messages/{}/reactions/{}/@me",
        channel_id,
        message_id,
        encode_emoji(emoji)
    )
}

pub fn channel_webhooks(channel_id: &str) -> String {
    format!("/channels/{}/webhooks", channel_id)
}

pub fn webhook(webhook_id: &str) -> String {
    format!("/webhooks/{}", webhook_id)
}

pub fn invite(invite_code: &str) -> String {
    format!("/invites/{}", invite_code)
}

pub fn guild_roles(guild_id: &str) -> String {
    format!("/guilds/{}/roles", guild_id)
}

pub fn guild_role(guild_id: &str, role_id: &str) -> String {
    format!("/guilds/{}/roles/{}", guild_id, role_id)
}

pub fn guild_member(guild_id: &str, member_id: &str) -> String {
    format!("/guilds/{}/members/{}", guild_id, member_id)
}

pub fn guild_member_role(guild_id: &str, member_id: &str, role_id: &str) -> String {
    format!("/guilds/{}/members/{}/roles/{}", guild_id, member_id, role_id)
}

pub fn guild_channels(guild_id: &str) -> String {
    format!("/guilds/{}/channels", guild_id)
}

pub fn guild_emojis(guild_id: &str) -> String {
    format!("/guilds/{}/emojis", guild_id)
}

pub fn guild_emoji(guild_id: &str, emoji_id: &str) -> String {
    format!("/guilds/{}/emojis/{}", guild_id, emoji_id)
}

pub fn guild_audit_logs(guild_id: &str) -> String {
    format!("/guilds/{}/audit-logs", guild_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_emoji_unicode() {
        assert_eq!(encode_emoji("👍"), "%F0%9F%91%8D");
    }

    #[test]
    fn test_encode_emoji_custom() {
        assert_eq!(encode_emoji("party:123456"), "party%3A123456");
    }

    #[test]
    fn test_encode_emoji_keeps_uri_component_marks() {
        assert_eq!(encode_emoji("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
        assert_eq!(encode_emoji("a b/c?d#e&f"), "a%20b%2Fc%3Fd%23e%26f");
    }

    #[test]
    fn test_identifiers_are_verbatim() {
        assert_eq!(channel_message("123", "456"), "/channels/123/messages/456");
        assert_eq!(
            guild_member_role("g", "m", "r"),
            "/guilds/g/members/m/roles/r"
        );
        assert_eq!(current_user_guild("99"), "/users/@me/guilds/99");
        assert_eq!(guild_audit_logs("7"), "/guilds/7/audit-logs");
    }

    #[test]
    fn test_own_reaction_encodes_only_emoji() {
        assert_eq!(
            own_reaction("1", "2", "👍"),
            "/channels/1/messages/2/reactions/%F0%9F%91%8D/@me"
        );
    }
}
