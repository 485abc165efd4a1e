use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unsupported language '{value}' in {field}")]
    UnsupportedLanguage { field: String, value: String },

    #[error("Duplicate member '{member}' in room '{room}'")]
    DuplicateMember { room: String, member: String },

    #[error("Duplicate message id '{message_id}' in room '{room}'")]
    DuplicateMessageId { room: String, message_id: String },

    #[error("Message '{message_id}' sent by '{user_id}' who is not a member of room '{room}'")]
    UnknownMember {
        room: String,
        message_id: String,
        user_id: String,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 資料違反契約 (語言目錄、唯一性、必填欄位)
    Contract,
    Configuration,
    System,
}

impl ChatError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ChatError::UnsupportedLanguage { .. }
            | ChatError::DuplicateMember { .. }
            | ChatError::DuplicateMessageId { .. }
            | ChatError::UnknownMember { .. }
            | ChatError::InvalidValue { .. }
            | ChatError::MissingField { .. } => ErrorCategory::Contract,
            ChatError::ConfigError { .. } => ErrorCategory::Configuration,
            ChatError::IoError(_) | ChatError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ChatError::UnsupportedLanguage { value, .. } => format!(
                "'{}' is not a supported language code, run `seamless-chat languages` to list them",
                value
            ),
            ChatError::DuplicateMember { member, .. } => {
                format!("'{}' is listed more than once in the room", member)
            }
            ChatError::SerializationError(e) => format!("Could not read the JSON input: {}", e),
            ChatError::IoError(e) => format!("Could not access the file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let err = ChatError::UnsupportedLanguage {
            field: "lang".to_string(),
            value: "zzz".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Contract);
        assert!(err.user_friendly_message().contains("zzz"));

        let err = ChatError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
