use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 訊息附帶的語音樣本。格式、取樣率與聲道由後端決定，數值原樣保留
/// (整數維持整數，不轉成浮點)。
pub type AudioSamples = Vec<serde_json::Number>;

/// 房間內的一則發言，建立後不可變更
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub message_id: String,
    pub user_id: String,
    /// 僅供顯示，不作為身分識別
    pub user_name: String,
    pub lang: String,
    pub text: String,
    pub audio: AudioSamples,
}

impl Message {
    /// 以新產生、依時間排序的 id 建立訊息
    pub fn new(
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        lang: impl Into<String>,
        text: impl Into<String>,
        audio: AudioSamples,
    ) -> Self {
        Self {
            message_id: Uuid::now_v7().to_string(),
            user_id: user_id.into(),
            user_name: user_name.into(),
            lang: lang.into(),
            text: text.into(),
            audio,
        }
    }

    pub fn has_audio(&self) -> bool {
        !self.audio.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    /// 偏好語言，收到的訊息會翻譯成此語言
    pub lang: String,
}

/// 聊天室。`members` 存放參與者 id，而非完整的使用者資料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub members: Vec<String>,
}
