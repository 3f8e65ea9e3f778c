use crate::core::{max_thread_count, ConfigPreset, SeriesError, TermStrategy};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sin_series")]
#[command(about = "Approximate sin(x) with a Taylor series summed across worker threads")]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Point at which to evaluate sin(x)
    #[arg(value_parser = parse_x)]
    pub x: f64,

    /// Number of worker threads
    #[arg(value_parser = parse_threads)]
    pub threads: usize,

    /// Number of series terms to sum
    #[arg(value_parser = parse_iterations)]
    pub iterations: usize,

    /// Term computation strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<TermStrategy>,

    /// Clamp the thread count to the number of logical CPUs
    #[arg(long)]
    pub clamp_threads: bool,

    /// Also write the outcome as a JSON report
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Force overwrite existing output file without warning
    #[arg(short, long)]
    pub force: bool,

    /// Suppress progress lines (the result report is always printed)
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration preset (default, fast, testing)
    #[arg(short = 'p', long)]
    pub preset: Option<ConfigPreset>,
}

/// x は有限の実数のみ受け付ける
pub fn parse_x(value: &str) -> Result<f64, SeriesError> {
    let x: f64 = value
        .trim()
        .parse()
        .map_err(|e| SeriesError::parse("x", value, format!("実数ではありません ({e})")))?;

    if !x.is_finite() {
        return Err(SeriesError::parse("x", value, "有限の実数である必要があります"));
    }
    Ok(x)
}

pub fn parse_threads(value: &str) -> Result<usize, SeriesError> {
    let threads = parse_positive_count("threads", value)?;

    if threads > max_thread_count() {
        return Err(SeriesError::parse(
            "threads",
            value,
            format!("{}以下である必要があります", max_thread_count()),
        ));
    }
    Ok(threads)
}

/// clap のエラーを分類する
///
/// 値パーサーが返した `ParseError` はそのまま残し、それ以外は使用方法エラーとする。
pub fn classify_cli_error(error: &clap::Error) -> SeriesError {
    let parse_failure = std::error::Error::source(error)
        .and_then(|source| source.downcast_ref::<SeriesError>());

    match parse_failure {
        Some(SeriesError::ParseError {
            field,
            value,
            reason,
        }) => SeriesError::parse(field.as_str(), value.as_str(), reason.as_str()),
        _ => SeriesError::usage(error.kind().as_str().unwrap_or("invalid arguments")),
    }
}

pub fn parse_iterations(value: &str) -> Result<usize, SeriesError> {
    parse_positive_count("iterations", value)
}

/// 1以上の整数。0や負数は黙って通さない
fn parse_positive_count(field: &str, value: &str) -> Result<usize, SeriesError> {
    let count: usize = value
        .trim()
        .parse()
        .map_err(|e| SeriesError::parse(field, value, format!("正の整数ではありません ({e})")))?;

    if count == 0 {
        return Err(SeriesError::parse(field, value, "1以上である必要があります"));
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_positional_arguments() {
        let cli = Cli::try_parse_from(["sin_series", "1.0", "4", "10"]).unwrap();

        assert_eq!(cli.x, 1.0);
        assert_eq!(cli.threads, 4);
        assert_eq!(cli.iterations, 10);
        assert!(cli.strategy.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_negative_x_is_accepted() {
        let cli = Cli::try_parse_from(["sin_series", "-0.5", "2", "8"]).unwrap();
        assert_eq!(cli.x, -0.5);
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "sin_series",
            "3.14159265358979",
            "4",
            "20",
            "--strategy",
            "chunked",
            "--clamp-threads",
            "-o",
            "report.json",
            "--force",
            "-q",
            "-p",
            "fast",
        ])
        .unwrap();

        assert_eq!(cli.strategy, Some(TermStrategy::Chunked));
        assert!(cli.clamp_threads);
        assert_eq!(cli.output, Some(PathBuf::from("report.json")));
        assert!(cli.force);
        assert!(cli.quiet);
        assert_eq!(cli.preset, Some(ConfigPreset::Fast));
    }

    #[test]
    fn test_wrong_argument_count() {
        let error = Cli::try_parse_from(["sin_series", "1.0", "4"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);

        let error = Cli::try_parse_from(["sin_series", "1.0", "4", "10", "11"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnknownArgument);

        let error = Cli::try_parse_from(["sin_series"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        for args in [
            ["sin_series", "abc", "4", "10"],
            ["sin_series", "1.0", "0", "10"],
            ["sin_series", "1.0", "-2", "10"],
            ["sin_series", "1.0", "4", "0"],
            ["sin_series", "1.0", "four", "10"],
            ["sin_series", "1.0", "4", "2.5"],
            ["sin_series", "inf", "4", "10"],
            ["sin_series", "NaN", "4", "10"],
        ] {
            let error = Cli::try_parse_from(args).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::ValueValidation, "{args:?}");
        }
    }

    #[test]
    fn test_unknown_preset_is_rejected() {
        let error =
            Cli::try_parse_from(["sin_series", "1.0", "4", "10", "-p", "turbo"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_x(" 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_x("1e-3").unwrap(), 0.001);
        assert!(matches!(parse_x("x"), Err(SeriesError::ParseError { .. })));

        assert_eq!(parse_threads("8").unwrap(), 8);
        let limit = max_thread_count();
        assert_eq!(parse_threads(&limit.to_string()).unwrap(), limit);
        let error = parse_iterations("0").unwrap_err();
        assert!(error.to_string().contains("iterations"));
    }

    #[test]
    fn test_threads_above_pool_limit_are_rejected() {
        let too_many = (max_thread_count() + 1).to_string();
        assert!(matches!(
            parse_threads(&too_many),
            Err(SeriesError::ParseError { .. })
        ));

        let error =
            Cli::try_parse_from(["sin_series", "1.0", "18446744073709551615", "2"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_classify_cli_error_keeps_parse_errors() {
        let error = Cli::try_parse_from(["sin_series", "abc", "4", "10"]).unwrap_err();
        let classified = classify_cli_error(&error);
        match classified {
            SeriesError::ParseError { field, value, .. } => {
                assert_eq!(field, "x");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected classification: {other:?}"),
        }

        let error = Cli::try_parse_from(["sin_series", "1.0", "4", "0"]).unwrap_err();
        assert!(matches!(
            classify_cli_error(&error),
            SeriesError::ParseError { .. }
        ));
    }

    #[test]
    fn test_classify_cli_error_falls_back_to_usage() {
        let error = Cli::try_parse_from(["sin_series", "1.0"]).unwrap_err();
        let classified = classify_cli_error(&error);

        assert!(matches!(classified, SeriesError::UsageError { .. }));
        assert_eq!(classified.exit_code(), 1);

        let error = Cli::try_parse_from(["sin_series", "1.0", "4", "10", "11"]).unwrap_err();
        assert!(matches!(
            classify_cli_error(&error),
            SeriesError::UsageError { .. }
        ));
    }
}
