use serde::{Deserialize, Serialize};

/// Body of `POST /channels/{channel}/messages`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateMessage<'a> {
    pub content: &'a str,
}

/// Body of the member voice-mute update.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MuteMember {
    pub mute: bool,
}

/// Body of `POST /users/@me/channels`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateDirectMessage<'a> {
    pub recipient_id: &'a str,
}

/// The only part of a DM channel the client reads back.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DirectMessageChannel {
    pub id: String,
}
