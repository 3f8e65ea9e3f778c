use clap::{error::ErrorKind, Parser};
use sin_series::cli::{classify_cli_error, execute_evaluate, Cli};
use sin_series::SeriesError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// 分類できないエラーの終了コード
const FALLBACK_EXIT_CODE: u8 = 1;

#[tokio::main]
async fn main() -> ExitCode {
    // RUST_LOG=debug でワーカー単位の部分和を出力
    // 標準出力は結果レポート専用のため、ログは標準エラー出力へ
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            if error.print().is_err() {
                eprintln!("{error}");
            }
            if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                return ExitCode::SUCCESS;
            }

            let classified = classify_cli_error(&error);
            tracing::debug!(severity = %classified.severity(), "{classified}");
            return ExitCode::from(classified.exit_code());
        }
    };

    match execute_evaluate(cli.into()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("❌ エラー: {error:#}");
            let code = error
                .downcast_ref::<SeriesError>()
                .map(SeriesError::exit_code)
                .unwrap_or(FALLBACK_EXIT_CODE);
            ExitCode::from(code)
        }
    }
}
