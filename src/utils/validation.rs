use crate::domain::api::{ChatHandshake, JoinRoomRequest, TranslateTextQuery};
use crate::domain::language;
use crate::domain::model::{Message, Room, User};
use crate::utils::error::{ChatError, Result};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ChatError::InvalidValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ChatError::InvalidValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ChatError::InvalidValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ChatError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 必填的識別欄位 (如 messageId、userId)，空白視為缺少
pub fn validate_required_field(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ChatError::MissingField {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

/// 目錄完全比對，不轉換大小寫也不去除空白
pub fn validate_language_code(field_name: &str, code: &str) -> Result<()> {
    if !language::is_supported_code(code) {
        tracing::debug!("rejecting {} = {:?}: not a catalog code", field_name, code);
        return Err(ChatError::UnsupportedLanguage {
            field: field_name.to_string(),
            value: code.to_string(),
        });
    }
    Ok(())
}

/// 回傳重複出現的 id，每個只回報一次，依第一次重複的順序
pub fn duplicate_members(members: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    members
        .iter()
        .filter(|m| !seen.insert(m.as_str()) && reported.insert(m.as_str()))
        .map(String::as_str)
        .collect()
}

pub fn validate_unique_members(room_name: &str, members: &[String]) -> Result<()> {
    match duplicate_members(members).first() {
        Some(member) => Err(ChatError::DuplicateMember {
            room: room_name.to_string(),
            member: member.to_string(),
        }),
        None => Ok(()),
    }
}

impl Validate for Message {
    fn validate(&self) -> Result<()> {
        validate_required_field("messageId", &self.message_id)?;
        validate_required_field("userId", &self.user_id)?;
        validate_language_code("lang", &self.lang)
    }
}

impl Validate for User {
    fn validate(&self) -> Result<()> {
        validate_language_code("lang", &self.lang)
    }
}

impl Validate for Room {
    fn validate(&self) -> Result<()> {
        validate_unique_members(&self.name, &self.members)
    }
}

impl Validate for JoinRoomRequest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("user_name", &self.user_name)?;
        validate_required_field("room_id", &self.room_id)?;
        validate_language_code("lang", &self.lang)
    }
}

impl Validate for ChatHandshake {
    fn validate(&self) -> Result<()> {
        validate_required_field("user_id", &self.user_id)?;
        validate_required_field("room_id", &self.room_id)?;
        validate_language_code("lang", &self.lang)
    }
}

impl Validate for TranslateTextQuery {
    fn validate(&self) -> Result<()> {
        validate_language_code("src_lang", &self.src_lang)?;
        validate_language_code("tgt_lang", &self.tgt_lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("backend.base_url", "https://example.com").is_ok());
        assert!(validate_url("backend.base_url", "http://localhost:8000").is_ok());
        assert!(validate_url("backend.base_url", "").is_err());
        assert!(validate_url("backend.base_url", "invalid-url").is_err());
        assert!(validate_url("backend.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_language_code() {
        assert!(validate_language_code("lang", "eng").is_ok());
        assert!(validate_language_code("lang", "xxx").is_err());
        assert!(validate_language_code("lang", "Eng").is_err());
        assert!(validate_language_code("lang", "eng ").is_err());
        assert!(validate_language_code("lang", "").is_err());
    }

    #[test]
    fn test_duplicate_members() {
        let members: Vec<String> = ["a", "b", "a", "c", "a", "b"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(duplicate_members(&members), vec!["a", "b"]);
        assert!(validate_unique_members("lobby", &members[..2]).is_ok());

        match validate_unique_members("lobby", &members) {
            Err(ChatError::DuplicateMember { room, member }) => {
                assert_eq!(room, "lobby");
                assert_eq!(member, "a");
            }
            other => panic!("expected duplicate member error, got {:?}", other),
        }
    }

    #[test]
    fn test_translate_query_checks_both_langs() {
        let query = TranslateTextQuery {
            text: "hola".to_string(),
            src_lang: "spa".to_string(),
            tgt_lang: "xx".to_string(),
        };
        assert!(matches!(
            query.validate(),
            Err(ChatError::UnsupportedLanguage { ref field, .. }) if field == "tgt_lang"
        ));
    }
}
