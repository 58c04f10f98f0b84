use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One entry in the session transcript.
/// `speaker` and `debug` are only ever set on model turns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

impl Message {
    pub fn user(text: String) -> Self {
        Self {
            role: Role::User,
            text,
            speaker: None,
            debug: None,
        }
    }

    pub fn model(text: String, speaker: Option<String>, debug: Option<String>) -> Self {
        Self {
            role: Role::Model,
            text,
            speaker,
            debug,
        }
    }

    /// Synthetic notice appended when the text service cannot be reached.
    pub fn system_notice(text: &str) -> Self {
        Self {
            role: Role::Model,
            text: text.to_string(),
            speaker: Some("SYSTEM".to_string()),
            debug: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        let msg = Message::user("hello".into());
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"user\""));

        let msg = Message::model("hi".into(), Some("BUDDHI".into()), None);
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"model\""));
        assert!(json.contains("\"speaker\":\"BUDDHI\""));
        assert!(!json.contains("debug"));
    }

    #[test]
    fn message_round_trips() {
        let msg = Message::model(
            "You lie.".into(),
            Some("MĀYĀ".into()),
            Some("Active Level: 2".into()),
        );
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, back);
    }

    #[test]
    fn user_messages_carry_no_speaker_or_debug() {
        let msg = Message::user("I was born in Kāśī.".into());
        assert_eq!(msg.speaker, None);
        assert_eq!(msg.debug, None);
    }
}
