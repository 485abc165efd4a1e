use anyhow::Context;
use clap::Parser;
use seamless_chat::config::toml_config::LogFormat;
use seamless_chat::config::{Command, RecordKind};
use seamless_chat::core::conformance::{check_message, check_room, check_user};
use seamless_chat::core::translation::recipient_for;
use seamless_chat::core::ConfigProvider;
use seamless_chat::domain::language;
use seamless_chat::utils::logger;
use seamless_chat::utils::validation::Validate;
use seamless_chat::{plan_translation, ChatError, CliConfig, Message, ProxyRule, Room, TomlConfig, User};
use serde::de::DeserializeOwned;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 未指定設定檔時使用預設後端與代理規則
    let config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };

    match config.log_format() {
        LogFormat::Json => logger::init_json_logger(if cli.verbose { "debug" } else { config.log_level() }),
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
    }
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {} (category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let ok = match cli.command {
        Command::Languages { json } => {
            print_languages(json)?;
            true
        }
        Command::Validate { kind, file } => validate_file(kind, &file)?,
        Command::Rewrite { path } => rewrite(&config, &path)?,
        Command::Plan {
            message_file,
            target_lang,
        } => plan(&message_file, target_lang)?,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn print_languages(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", language::catalog_json()?);
    } else {
        for l in language::languages() {
            println!("{}  {}", l.code, l.name);
        }
    }
    Ok(())
}

/// 讀取 JSON 檔案，可為單一物件或物件陣列
fn read_records<T: DeserializeOwned>(file: &Path) -> anyhow::Result<Vec<T>> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content).map_err(ChatError::from)?;

    let records = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>(),
        single => serde_json::from_value(single).map(|r| vec![r]),
    };
    Ok(records.map_err(ChatError::from)?)
}

fn report(index: usize, violations: Vec<ChatError>) -> bool {
    for v in &violations {
        println!("❌ record {}: {}", index, v);
    }
    violations.is_empty()
}

fn validate_file(kind: RecordKind, file: &Path) -> anyhow::Result<bool> {
    let results: Vec<bool> = match kind {
        RecordKind::Message => read_records::<Message>(file)?
            .iter()
            .enumerate()
            .map(|(i, m)| report(i, check_message(m)))
            .collect(),
        RecordKind::User => read_records::<User>(file)?
            .iter()
            .enumerate()
            .map(|(i, u)| report(i, check_user(u)))
            .collect(),
        RecordKind::Room => read_records::<Room>(file)?
            .iter()
            .enumerate()
            .map(|(i, r)| report(i, check_room(r)))
            .collect(),
    };

    let failed = results.iter().filter(|ok| !**ok).count();
    tracing::info!("checked {} record(s), {} invalid", results.len(), failed);
    if failed == 0 {
        println!("✅ {} record(s) valid", results.len());
    }
    Ok(failed == 0)
}

fn rewrite(config: &dyn ConfigProvider, path: &str) -> anyhow::Result<bool> {
    let default_rule = ProxyRule::default();
    let rule = config.proxy_rule().unwrap_or(&default_rule);

    if !rule.matches(path) {
        println!("{} is not proxied (prefix {})", path, rule.prefix);
        return Ok(false);
    }

    if let Some(url) = rule.forward_url(path)? {
        println!("{}", url);
    }
    if let Some(origin) = rule.origin_header()? {
        println!("Origin: {}", origin);
    }
    Ok(true)
}

fn plan(message_file: &Path, target_lang: String) -> anyhow::Result<bool> {
    // 目標語言只需檢查一次，不合法時直接回報，不逐筆失敗
    let recipient = match recipient_for("--to", target_lang) {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("Invalid target language: {} (category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            return Ok(false);
        }
    };

    let mut all_ok = true;
    for message in read_records::<Message>(message_file)? {
        if let Err(e) = message.validate() {
            println!("❌ {}: {}", message.message_id, e.user_friendly_message());
            all_ok = false;
            continue;
        }
        match plan_translation(&message, &recipient)? {
            Some(query) => println!("{}", serde_json::to_string(&query)?),
            None => println!("{}: already in {}", message.message_id, recipient.lang),
        }
    }
    Ok(all_ok)
}
