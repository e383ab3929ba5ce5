// インフラストラクチャ層モジュール
pub mod config;
pub mod logging;

// 再エクスポート
pub use config::{ConfirmationConfig, ConfirmationConfigError};
pub use logging::init_logging;
