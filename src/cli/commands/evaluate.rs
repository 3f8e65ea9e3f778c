use crate::cli::Cli;
use crate::core::{
    ConfigPreset, ReportPersistence, SeriesOutcome, SeriesRequest, TermStrategy, ThreadPolicy,
};
use crate::engine::SeriesEngine;
use crate::services::{
    ConsoleProgressReporter, DefaultEvaluationConfig, JsonReportPersistence,
    NoOpReportPersistence,
};
use anyhow::Result;
use std::path::PathBuf;

/// Configuration struct for the evaluate command
#[derive(Debug, Clone)]
pub struct EvaluateConfig {
    pub x: f64,
    pub threads: usize,
    pub iterations: usize,
    pub strategy: Option<TermStrategy>,
    pub clamp_threads: bool,
    pub output: Option<PathBuf>,
    pub force: bool,
    pub quiet: bool,
    pub preset: Option<ConfigPreset>,
}

impl From<Cli> for EvaluateConfig {
    fn from(cli: Cli) -> Self {
        Self {
            x: cli.x,
            threads: cli.threads,
            iterations: cli.iterations,
            strategy: cli.strategy,
            clamp_threads: cli.clamp_threads,
            output: cli.output,
            force: cli.force,
            quiet: cli.quiet,
            preset: cli.preset,
        }
    }
}

impl EvaluateConfig {
    /// プリセットに明示フラグを上書きして評価設定を作る
    pub fn evaluation_config(&self) -> DefaultEvaluationConfig {
        let mut config = DefaultEvaluationConfig::from_preset(self.preset.unwrap_or_default());

        if let Some(strategy) = self.strategy {
            config = config.with_strategy(strategy);
        }
        if self.clamp_threads {
            config = config.with_thread_policy(ThreadPolicy::ClampToHardware);
        }
        if self.quiet {
            config = config.with_progress_reporting(false);
        }
        config
    }
}

/// Execute the evaluate command and print the report to stdout
pub async fn execute_evaluate(config: EvaluateConfig) -> Result<SeriesOutcome> {
    let request = SeriesRequest::new(config.x, config.threads, config.iterations)?;

    let outcome = match &config.output {
        Some(output) => {
            if output.exists() && !config.force {
                anyhow::bail!(
                    "Output file already exists: {}. Use --force to overwrite.",
                    output.display()
                );
            }
            run_with_persistence(&config, request, JsonReportPersistence::new(output)).await?
        }
        None => run_with_persistence(&config, request, NoOpReportPersistence::new()).await?,
    };

    print!("{}", format_report(&outcome));

    if let Some(output) = &config.output {
        if !config.quiet {
            eprintln!("📄 結果は {} に保存されました", output.display());
        }
    }

    Ok(outcome)
}

async fn run_with_persistence<P>(
    config: &EvaluateConfig,
    request: SeriesRequest,
    persistence: P,
) -> Result<SeriesOutcome>
where
    P: ReportPersistence,
{
    let reporter = if config.quiet {
        ConsoleProgressReporter::quiet()
    } else {
        ConsoleProgressReporter::new()
    };

    let engine = SeriesEngine::new(config.evaluation_config(), reporter, persistence);
    Ok(engine.evaluate(request).await?)
}

/// 結果レポートの整形
///
/// 出力順: イプシロン、参照値、級数近似値、項数、絶対誤差
pub fn format_report(outcome: &SeriesOutcome) -> String {
    format!(
        "f64::EPSILON = {:.6e}\n\
         Reference sin(x) = {:15.14}\n\
         Series sin(x)    = {:15.14}, iterations={}, error={:.6e}\n",
        outcome.epsilon,
        outcome.reference,
        outcome.approximation,
        outcome.term_count,
        outcome.absolute_error,
    )
}
