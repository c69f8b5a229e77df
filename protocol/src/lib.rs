//! Wire types crossing the webhook boundary.
//!
//! The messenger itself is an external collaborator; these are the subset of
//! its payloads the bot consumes, and the outbound messages it hands back in
//! the webhook response.

use serde::{Deserialize, Serialize};

/// Callback data for the button that starts (or restarts) a prediction.
pub const CALLBACK_START: &str = "start";
/// Callback data for the usage-help button.
pub const CALLBACK_HOW_TO_USE: &str = "how_to_use";

/// One incoming webhook delivery.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub update_id: u64,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub callback: Option<Callback>,
}

/// Free-text message typed by the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub chat_id: i64,
    pub text: String,
}

/// Button press relayed by the messenger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Callback {
    pub chat_id: i64,
    pub data: String,
}

/// Outbound message carried back to the messenger in the webhook response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub chat_id: i64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    pub fn text(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(chat_id: i64, text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            chat_id,
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}

/// Keyboard attachment offered with a reply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Keyboard {
    /// Buttons rendered under the message, each carrying callback data.
    Inline(Vec<Vec<Button>>),
    /// One-tap rows replacing the user's keyboard with canned answers.
    Tap(Vec<Vec<String>>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub data: String,
}

impl Button {
    pub fn new(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: data.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_tolerates_missing_optional_fields() {
        let update: Update =
            serde_json::from_str(r#"{"message": {"chat_id": 7, "text": "hi"}}"#).unwrap();

        assert_eq!(update.update_id, 0);
        assert_eq!(
            update.message,
            Some(Message {
                chat_id: 7,
                text: "hi".to_string(),
            })
        );
        assert_eq!(update.callback, None);
    }

    #[test]
    fn reply_without_keyboard_omits_the_field() {
        let reply = Reply::text(7, "hello");

        assert_eq!(
            serde_json::to_string(&reply).unwrap(),
            r#"{"chat_id":7,"text":"hello"}"#
        );
    }
}
