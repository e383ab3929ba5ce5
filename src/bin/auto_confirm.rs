/// サインアップ前トリガーLambda関数
///
/// Cognitoユーザープールのサインアップ前トリガーから呼び出され、
/// サインアップしたユーザーを自動確認する。
/// responseオブジェクトのautoConfirmUserをtrueに設定してイベントを返却し、
/// Cognitoに手動確認ステップをスキップさせる。
use cognito_triggers::application::PreSignUpHandler;
use cognito_triggers::infrastructure::{init_logging, ConfirmationConfig};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // Lambda関数を初期化して実行
    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// # 処理フロー
/// 1. 受信イベントの情報をログ出力（観測用、検証はしない）
/// 2. 環境変数からConfirmationConfigを読み込み
/// 3. PreSignUpHandlerでautoConfirmUserを設定
/// 4. 変更済みイベントをCognitoに返却
///
/// # 引数
/// * `event` - Cognitoサインアップ前トリガーイベント（コンテキストは未使用）
///
/// # 戻り値
/// * 成功時は変更済みイベント
/// * 失敗時はエラーを返却し、Cognito側でサインアップ失敗として扱われる
async fn handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let payload = event.payload;

    // 受信イベントの情報をログ出力
    let trigger_source = payload
        .get("triggerSource")
        .and_then(|v| v.as_str())
        .unwrap_or("(unknown)");
    let user_pool_id = payload
        .get("userPoolId")
        .and_then(|v| v.as_str())
        .unwrap_or("(unknown)");
    let user_name = payload
        .get("userName")
        .and_then(|v| v.as_str())
        .unwrap_or("(unknown)")
        .to_string();

    info!(
        trigger_source = trigger_source,
        user_pool_id = user_pool_id,
        user_name = user_name,
        "サインアップ前イベントを受信"
    );

    // 設定を環境変数から読み込み
    let config = match ConfirmationConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "自動確認設定読み込み失敗");
            return Err(format!("自動確認設定読み込み失敗: {}", err).into());
        }
    };

    // PreSignUpHandlerを作成してイベントを処理
    let pre_signup_handler = PreSignUpHandler::new(config.clone());

    match pre_signup_handler.handle(payload) {
        Ok(confirmed_event) => {
            info!(
                user_name = user_name,
                auto_verify_email = config.auto_verify_email(),
                "ユーザーを自動確認"
            );
            Ok(confirmed_event)
        }
        Err(err) => {
            // エラー時はログ出力してCognitoにエラーを返却
            error!(error = %err, user_name = user_name, "サインアップ前イベント処理失敗");
            Err(Box::new(err))
        }
    }
}
