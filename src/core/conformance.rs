//! 完整檢查：收集所有違規，而不像 [`Validate`](crate::utils::validation::Validate)
//! 遇到第一個錯誤就停止。

use crate::domain::model::{Message, Room, User};
use crate::utils::error::ChatError;
use crate::utils::validation::{duplicate_members, validate_language_code, validate_required_field};
use std::collections::HashSet;

// 與 `Validate` 共用同一組檢查，兩條路徑回報相同的錯誤種類
fn unsupported(field: &str, value: &str) -> Option<ChatError> {
    validate_language_code(field, value).err()
}

fn empty(field: &str, value: &str) -> Option<ChatError> {
    validate_required_field(field, value).err()
}

pub fn check_message(message: &Message) -> Vec<ChatError> {
    [
        empty("messageId", &message.message_id),
        empty("userId", &message.user_id),
        unsupported("lang", &message.lang),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn check_user(user: &User) -> Vec<ChatError> {
    unsupported("lang", &user.lang).into_iter().collect()
}

pub fn check_room(room: &Room) -> Vec<ChatError> {
    duplicate_members(&room.members)
        .into_iter()
        .map(|member| ChatError::DuplicateMember {
            room: room.name.clone(),
            member: member.to_string(),
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct ConformanceReport {
    pub violations: Vec<ChatError>,
    pub messages_checked: usize,
}

impl ConformanceReport {
    /// 檢查房間以及房間內交換的所有訊息
    pub fn for_room(room: &Room, messages: &[Message]) -> Self {
        let mut violations = check_room(room);

        let members: HashSet<&str> = room.members.iter().map(String::as_str).collect();
        let mut seen_ids = HashSet::new();

        for message in messages {
            violations.extend(check_message(message));

            if !seen_ids.insert(message.message_id.as_str()) {
                violations.push(ChatError::DuplicateMessageId {
                    room: room.name.clone(),
                    message_id: message.message_id.clone(),
                });
            }

            if !members.contains(message.user_id.as_str()) {
                violations.push(ChatError::UnknownMember {
                    room: room.name.clone(),
                    message_id: message.message_id.clone(),
                    user_id: message.user_id.clone(),
                });
            }
        }

        if !violations.is_empty() {
            tracing::debug!(
                "room {:?}: {} violation(s) across {} message(s)",
                room.name,
                violations.len(),
                messages.len()
            );
        }

        Self {
            violations,
            messages_checked: messages.len(),
        }
    }

    pub fn is_conformant(&self) -> bool {
        self.violations.is_empty()
    }
}
