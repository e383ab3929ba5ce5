/// 自動確認設定
///
/// サインアップ前トリガーの動作をデプロイ時に切り替えるための設定を管理する。
/// 環境変数からフラグを読み込む。
use thiserror::Error;

/// 自動確認設定のエラー型
#[derive(Debug, Error)]
pub enum ConfirmationConfigError {
    #[error("環境変数の値が不正です: {name}={value}")]
    InvalidEnvVar { name: String, value: String },
}

/// 自動確認設定
///
/// 以下の環境変数から読み込む:
/// - AUTO_VERIFY_EMAIL: メールアドレスも自動検証するか（省略可、デフォルトfalse）
#[derive(Debug, Clone)]
pub struct ConfirmationConfig {
    /// autoVerifyEmailをtrueに設定するかどうか
    auto_verify_email: bool,
}

impl ConfirmationConfig {
    /// 環境変数から設定を読み込む
    ///
    /// 環境変数が未設定の場合はデフォルト値を使用する。
    ///
    /// # エラー
    /// 環境変数の値がブール値として解釈できない場合はエラーを返す
    pub fn from_env() -> Result<Self, ConfirmationConfigError> {
        let auto_verify_email = match std::env::var("AUTO_VERIFY_EMAIL") {
            Ok(value) => parse_bool_flag("AUTO_VERIFY_EMAIL", &value)?,
            Err(_) => false,
        };

        Ok(Self { auto_verify_email })
    }

    /// 明示的な値で設定を作成（テスト用）
    pub fn new(auto_verify_email: bool) -> Self {
        Self { auto_verify_email }
    }

    /// autoVerifyEmailをtrueに設定するかどうかを取得
    pub fn auto_verify_email(&self) -> bool {
        self.auto_verify_email
    }
}

/// 環境変数の値をブール値として解釈する
///
/// true/1/yes を真、false/0/no/空文字列を偽として扱う（大文字小文字は無視）。
fn parse_bool_flag(name: &str, value: &str) -> Result<bool, ConfirmationConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(ConfirmationConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
