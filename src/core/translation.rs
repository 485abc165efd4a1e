use crate::domain::api::TranslateTextQuery;
use crate::domain::model::{Message, User};
use crate::utils::error::Result;
use crate::utils::validation::validate_language_code;

/// 以指定語言建立一個收件者，語言不在目錄內時回傳錯誤
pub fn recipient_for(field_name: &str, lang: String) -> Result<User> {
    validate_language_code(field_name, &lang)?;
    Ok(User {
        name: "recipient".to_string(),
        lang,
    })
}

/// 收件者看到的訊息應為自己的語言
pub fn needs_translation(message: &Message, recipient: &User) -> bool {
    message.lang != recipient.lang
}

/// 產生將 `message` 翻譯給 `recipient` 的 `/translate-text` 查詢；
/// 兩者語言相同時回傳 `None`
pub fn plan_translation(message: &Message, recipient: &User) -> Result<Option<TranslateTextQuery>> {
    validate_language_code("message.lang", &message.lang)?;
    validate_language_code("recipient.lang", &recipient.lang)?;

    if !needs_translation(message, recipient) {
        return Ok(None);
    }

    tracing::debug!(
        "translating {} from {} to {} for {}",
        message.message_id,
        message.lang,
        recipient.lang,
        recipient.name
    );

    Ok(Some(TranslateTextQuery {
        text: message.text.clone(),
        src_lang: message.lang.clone(),
        tgt_lang: recipient.lang.clone(),
    }))
}
