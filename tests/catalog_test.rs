use seamless_chat::domain::language::{
    self, catalog_json, code_for_name, find_by_code, name_for_code, LanguageOption,
};
use seamless_chat::LANGUAGES;
use std::collections::HashSet;

const EXPECTED: [(&str, &str); 31] = [
    ("modern standard arabic", "arb"),
    ("bengali", "ben"),
    ("catalan", "cat"),
    ("czech", "ces"),
    ("mandarin chinese", "cmn"),
    ("welsh", "cym"),
    ("danish", "dan"),
    ("german", "deu"),
    ("english", "eng"),
    ("estonian", "est"),
    ("french", "fra"),
    ("hindi", "hin"),
    ("indonesian", "ind"),
    ("italian", "ita"),
    ("japanese", "jpn"),
    ("korean", "kor"),
    ("dutch", "nld"),
    ("polish", "pol"),
    ("portuguese", "por"),
    ("romanian", "ron"),
    ("russian", "rus"),
    ("slovak", "slk"),
    ("spanish", "spa"),
    ("swedish", "swe"),
    ("telugu", "tel"),
    ("thai", "tha"),
    ("turkish", "tur"),
    ("ukrainian", "ukr"),
    ("urdu", "urd"),
    ("uzbek", "uzn"),
    ("vietnamese", "vie"),
];

#[test]
fn test_catalog_matches_published_order() {
    let actual: Vec<(&str, &str)> = language::languages()
        .iter()
        .map(|l| (l.name, l.code))
        .collect();
    assert_eq!(actual, EXPECTED.to_vec());
}

#[test]
fn test_codes_and_names_are_unique() {
    let codes: HashSet<&str> = LANGUAGES.iter().map(|l| l.code).collect();
    let names: HashSet<&str> = LANGUAGES.iter().map(|l| l.name).collect();
    assert_eq!(codes.len(), LANGUAGES.len());
    assert_eq!(names.len(), LANGUAGES.len());
}

#[test]
fn test_every_entry_is_reachable_both_ways() {
    for (name, code) in EXPECTED {
        assert_eq!(code_for_name(name), Some(code), "name {}", name);
        assert_eq!(name_for_code(code), Some(name), "code {}", code);
    }
    assert_eq!(code_for_name("welsh"), Some("cym"));
    assert_eq!(name_for_code("cym"), Some("welsh"));
    assert!(find_by_code("xxx").is_none());
}

#[test]
fn test_catalog_json_round_trip_is_exact() {
    let json = catalog_json().unwrap();
    let options: Vec<LanguageOption> = serde_json::from_str(&json).unwrap();

    let expected: Vec<LanguageOption> = LANGUAGES.iter().map(LanguageOption::from).collect();
    assert_eq!(options, expected);
    assert_eq!(options[4].name, "mandarin chinese");
    assert_eq!(options[4].code, "cmn");
}
