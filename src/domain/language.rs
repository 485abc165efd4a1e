//! 可作為 `lang` 值的語言目錄 (封閉集合)。
//!
//! [`LANGUAGES`] 的順序即語言選單的顯示順序，不可更動。

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Language {
    /// 小寫顯示名稱，例如 `"welsh"`
    pub name: &'static str,
    /// 三字母語言代碼，例如 `"cym"`
    pub code: &'static str,
}

/// 目錄項目的擁有權版本，用於 JSON 匯出/匯入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    pub name: String,
    pub code: String,
}

impl From<&Language> for LanguageOption {
    fn from(language: &Language) -> Self {
        Self {
            name: language.name.to_string(),
            code: language.code.to_string(),
        }
    }
}

const fn lang(name: &'static str, code: &'static str) -> Language {
    Language { name, code }
}

/// 全程式共用的唯一一份目錄表，唯讀
pub static LANGUAGES: [Language; 31] = [
    lang("modern standard arabic", "arb"),
    lang("bengali", "ben"),
    lang("catalan", "cat"),
    lang("czech", "ces"),
    lang("mandarin chinese", "cmn"),
    lang("welsh", "cym"),
    lang("danish", "dan"),
    lang("german", "deu"),
    lang("english", "eng"),
    lang("estonian", "est"),
    lang("french", "fra"),
    lang("hindi", "hin"),
    lang("indonesian", "ind"),
    lang("italian", "ita"),
    lang("japanese", "jpn"),
    lang("korean", "kor"),
    lang("dutch", "nld"),
    lang("polish", "pol"),
    lang("portuguese", "por"),
    lang("romanian", "ron"),
    lang("russian", "rus"),
    lang("slovak", "slk"),
    lang("spanish", "spa"),
    lang("swedish", "swe"),
    lang("telugu", "tel"),
    lang("thai", "tha"),
    lang("turkish", "tur"),
    lang("ukrainian", "ukr"),
    lang("urdu", "urd"),
    lang("uzbek", "uzn"),
    lang("vietnamese", "vie"),
];

static BY_CODE: Lazy<HashMap<&'static str, &'static Language>> =
    Lazy::new(|| LANGUAGES.iter().map(|l| (l.code, l)).collect());

static BY_NAME: Lazy<HashMap<&'static str, &'static Language>> =
    Lazy::new(|| LANGUAGES.iter().map(|l| (l.name, l)).collect());

pub fn languages() -> &'static [Language] {
    &LANGUAGES
}

/// 完全比對；`"ENG"` 或 `" eng"` 都不是目錄代碼
pub fn find_by_code(code: &str) -> Option<&'static Language> {
    BY_CODE.get(code).copied()
}

pub fn find_by_name(name: &str) -> Option<&'static Language> {
    BY_NAME.get(name).copied()
}

pub fn code_for_name(name: &str) -> Option<&'static str> {
    find_by_name(name).map(|l| l.code)
}

pub fn name_for_code(code: &str) -> Option<&'static str> {
    find_by_code(code).map(|l| l.name)
}

pub fn is_supported_code(code: &str) -> bool {
    BY_CODE.contains_key(code)
}

/// 依序輸出整份目錄為 `{ "name", "code" }` JSON 陣列
pub fn catalog_json() -> serde_json::Result<String> {
    serde_json::to_string(&LANGUAGES[..])
}
