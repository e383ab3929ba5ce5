// アプリケーション層モジュール
pub mod pre_signup_handler;

// 再エクスポート
pub use pre_signup_handler::{PreSignUpHandler, PreSignUpHandlerError};
