/// サインアップ前ハンドラー
///
/// Cognitoユーザープールのサインアップ前トリガーで呼び出された際の処理を実行する。
/// responseオブジェクトのautoConfirmUserをtrueに設定し、手動確認ステップをスキップさせる。
use serde_json::Value;
use thiserror::Error;

use crate::infrastructure::ConfirmationConfig;

/// サインアップ前ハンドラーのエラー型
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreSignUpHandlerError {
    /// イベントにresponseオブジェクトが存在しない、またはオブジェクトではない
    #[error("Missing response object in event")]
    MissingResponse,
}

/// サインアップ前イベントを処理するハンドラー
///
/// イベントペイロードはValueのまま扱い、変更対象以外のフィールドには一切触れない。
/// ユーザープールやバージョンによってイベントの形が変わっても、
/// 未知のフィールドをそのままCognitoに返却できる。
pub struct PreSignUpHandler {
    /// 自動確認の動作設定
    config: ConfirmationConfig,
}

impl PreSignUpHandler {
    /// 新しいPreSignUpHandlerを作成
    pub fn new(config: ConfirmationConfig) -> Self {
        Self { config }
    }

    /// サインアップ前イベントを処理
    ///
    /// # 処理フロー
    /// 1. イベントからresponseオブジェクトを取得
    /// 2. autoConfirmUserをtrueに設定
    /// 3. 設定で有効な場合はautoVerifyEmailもtrueに設定
    /// 4. その他のフィールドは変更せずイベントを返却
    ///
    /// # 引数
    /// * `event` - Cognitoサインアップ前トリガーイベント
    ///
    /// # 戻り値
    /// * 成功時は変更済みイベント
    /// * responseオブジェクトが欠落している場合は`Err(PreSignUpHandlerError)`
    pub fn handle(&self, mut event: Value) -> Result<Value, PreSignUpHandlerError> {
        // responseオブジェクトを取得
        let response = event
            .get_mut("response")
            .and_then(Value::as_object_mut)
            .ok_or(PreSignUpHandlerError::MissingResponse)?;

        // ユーザーを自動確認
        response.insert("autoConfirmUser".to_string(), Value::Bool(true));

        // 設定に応じてメールアドレスも自動検証
        if self.config.auto_verify_email() {
            response.insert("autoVerifyEmail".to_string(), Value::Bool(true));
        }

        Ok(event)
    }
}
