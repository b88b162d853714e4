use crate::usecases::u001_generate_model::GenerateReply;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// File name offered for downloads when the reply does not suggest one
pub const DEFAULT_MODEL_FILENAME: &str = "model.stl";

/// (model url, download file name)
pub type ModelRef = (String, String);

/// Author of a chat entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Bot,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Bot => "bot",
        }
    }
}

/// Single chat entry. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    id: Uuid,
    role: ChatRole,
    text: String,
    image: Option<String>,
    model_url: Option<String>,
    model_filename: Option<String>,
    timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: ChatRole, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text,
            image: None,
            model_url: None,
            model_filename: None,
            timestamp: Utc::now(),
        }
    }

    /// Message typed by the user
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text.into())
    }

    /// Bot message with optional image and model references
    pub fn bot(text: impl Into<String>, image: Option<String>, model_url: Option<String>) -> Self {
        Self {
            image,
            model_url,
            ..Self::new(ChatRole::Bot, text.into())
        }
    }

    /// Bot message built from a service reply
    pub fn bot_reply(reply: &GenerateReply) -> Self {
        Self {
            model_filename: reply.filename.clone(),
            ..Self::bot(reply.text.clone(), reply.image.clone(), reply.stl_url.clone())
        }
    }

    /// Bot message reporting a failed generation; never carries references
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Bot, text.into())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn role(&self) -> ChatRole {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn model_url(&self) -> Option<&str> {
        self.model_url.as_deref()
    }

    /// What the Preview and Download actions of this message point at
    pub fn model_ref(&self) -> Option<ModelRef> {
        self.model_url
            .as_ref()
            .map(|url| (url.clone(), self.download_filename().to_string()))
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Name used when saving the model file
    pub fn download_filename(&self) -> &str {
        self.model_filename
            .as_deref()
            .unwrap_or(DEFAULT_MODEL_FILENAME)
    }
}
