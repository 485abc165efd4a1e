// Domain layer：與後端共用的資料契約。驗證邏輯放在 utils::validation。

pub mod api;
pub mod language;
pub mod model;
pub mod ports;
