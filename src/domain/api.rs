// 聊天後端的請求/回應格式。僅定義資料，傳輸由呼叫端負責。

use crate::domain::model::{Room, User};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod endpoints {
    pub const CREATE_ROOM: &str = "/create-room";
    pub const JOIN_ROOM: &str = "/join-room";
    pub const ROOMS: &str = "/rooms";
    pub const ROOM_INFO: &str = "/room-info";
    pub const CHAT: &str = "/chat";
    pub const TRANSLATE_TEXT: &str = "/translate-text";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponse {
    pub room_id: String,
}

/// `POST /join-room` 的表單內容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRoomRequest {
    pub user_name: String,
    pub lang: String,
    pub room_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomResponse {
    pub user_id: String,
}

/// `GET /room-info`：成員以使用者 id 為鍵
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfo {
    pub name: String,
    pub members: BTreeMap<String, User>,
}

impl RoomInfo {
    pub fn to_room(&self) -> Room {
        Room {
            name: self.name.clone(),
            members: self.members.keys().cloned().collect(),
        }
    }

    pub fn member(&self, user_id: &str) -> Option<&User> {
        self.members.get(user_id)
    }
}

/// `GET /rooms`，以房間 id 為鍵
pub type RoomDirectory = BTreeMap<String, RoomInfo>;

/// 開啟聊天 WebSocket 後客戶端送出的第一個訊框
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatHandshake {
    pub user_id: String,
    pub room_id: String,
    pub lang: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMessageType {
    Text,
}

/// 客戶端 -> 伺服器的聊天訊框；伺服器回傳的是 `Message`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatInbound {
    pub message_type: ChatMessageType,
    pub content: String,
}

impl ChatInbound {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            message_type: ChatMessageType::Text,
            content: content.into(),
        }
    }
}

/// `GET /translate-text` 的查詢參數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateTextQuery {
    pub text: String,
    pub src_lang: String,
    pub tgt_lang: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateTextResponse {
    pub output: String,
}
