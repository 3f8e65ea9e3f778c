//! Fork-join 並列級数評価器
//!
//! 固定サイズの rayon スレッドプール上で、各ワーカーが互いに素な
//! インデックス範囲の部分和をローカルに計算し、join 後に逐次結合する。
//! 共有される可変状態は存在しない。
//!
//! 浮動小数点の加算順序はスレッド数によって変わるため、
//! 異なるスレッド数間の比較は許容誤差で行うこと。

use super::partition::partition;
use super::terms::chunk_sum;
use crate::core::{max_thread_count, PartialSum, SeriesError, SeriesResult, TermStrategy};
use rayon::prelude::*;

/// 部分和の結合結果
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub sum: f64,
    pub term_count: usize,
    pub partials: Vec<PartialSum>,
}

/// 並列級数評価器
pub struct ParallelSeriesEvaluator {
    pool: rayon::ThreadPool,
    threads: usize,
    strategy: TermStrategy,
}

impl ParallelSeriesEvaluator {
    /// 指定スレッド数ちょうどのプールを持つ評価器を作成
    pub fn new(threads: usize, strategy: TermStrategy) -> SeriesResult<Self> {
        if threads == 0 {
            return Err(SeriesError::configuration("スレッド数は1以上である必要があります"));
        }
        // rayon は上限を超える指定を黙って切り詰めるため、プール作成前に拒否する
        if threads > max_thread_count() {
            return Err(SeriesError::configuration(format!(
                "スレッド数は{}以下である必要があります: {threads}",
                max_thread_count()
            )));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("sin-series-worker-{i}"))
            .build()
            .map_err(|e| SeriesError::thread_pool(format!("スレッドプール作成失敗: {e}")))?;

        Ok(Self {
            pool,
            threads,
            strategy,
        })
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn strategy(&self) -> TermStrategy {
        self.strategy
    }

    /// iterations 個の項を並列に合計
    ///
    /// 空範囲のワーカーは部分和に含めない。
    pub fn evaluate(&self, x: f64, iterations: usize) -> Reduction {
        let strategy = self.strategy;
        let chunks = partition(iterations, self.threads);

        let partials: Vec<PartialSum> = self.pool.install(|| {
            chunks
                .into_par_iter()
                .enumerate()
                .filter(|(_, range)| !range.is_empty())
                .map(|(worker, range)| {
                    let (sum, terms) = chunk_sum(x, range.clone(), strategy);
                    tracing::debug!(
                        worker,
                        thread = ?rayon::current_thread_index(),
                        start = range.start,
                        end = range.end,
                        sum,
                        "部分和を計算"
                    );
                    PartialSum {
                        worker,
                        start: range.start,
                        end: range.end,
                        sum,
                        terms,
                    }
                })
                .collect()
        });

        // join 完了後の逐次結合
        let sum = partials.iter().fold(0.0, |acc, partial| acc + partial.sum);
        let term_count = partials.iter().map(|partial| partial.terms).sum();

        Reduction {
            sum,
            term_count,
            partials,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::terms::sequential_sum;

    #[test]
    fn test_evaluator_creation() {
        let evaluator = ParallelSeriesEvaluator::new(3, TermStrategy::Chunked).unwrap();
        assert_eq!(evaluator.threads(), 3);
        assert_eq!(evaluator.strategy(), TermStrategy::Chunked);
    }

    #[test]
    fn test_evaluator_rejects_zero_threads() {
        let result = ParallelSeriesEvaluator::new(0, TermStrategy::Direct);
        assert!(matches!(result, Err(SeriesError::ConfigurationError { .. })));
    }

    #[test]
    fn test_evaluator_rejects_threads_above_pool_limit() {
        // 上限超過はプール作成前に拒否されるため、スレッドは生成されない
        for threads in [max_thread_count() + 1, usize::MAX] {
            let result = ParallelSeriesEvaluator::new(threads, TermStrategy::Direct);
            assert!(matches!(result, Err(SeriesError::ConfigurationError { .. })));
        }
    }

    #[test]
    fn test_single_thread_sin_one() {
        let evaluator = ParallelSeriesEvaluator::new(1, TermStrategy::Direct).unwrap();
        let reduction = evaluator.evaluate(1.0, 10);

        assert_eq!(reduction.term_count, 10);
        assert_eq!(reduction.partials.len(), 1);
        assert!((reduction.sum - 0.8414709848).abs() < 1e-9);
        assert!((reduction.sum - 1.0_f64.sin()).abs() < 1e-9);
    }

    #[test]
    fn test_partials_cover_all_terms() {
        let evaluator = ParallelSeriesEvaluator::new(4, TermStrategy::Direct).unwrap();
        let reduction = evaluator.evaluate(0.3, 10);

        assert_eq!(reduction.partials.len(), 4);
        let mut next_start = 0;
        for partial in &reduction.partials {
            assert_eq!(partial.start, next_start);
            assert_eq!(partial.terms, partial.end - partial.start);
            next_start = partial.end;
        }
        assert_eq!(next_start, 10);
    }

    #[test]
    fn test_more_threads_than_terms() {
        let evaluator = ParallelSeriesEvaluator::new(8, TermStrategy::Chunked).unwrap();
        let reduction = evaluator.evaluate(0.5, 3);

        assert_eq!(reduction.term_count, 3);
        assert_eq!(reduction.partials.len(), 3);
        assert!((reduction.sum - sequential_sum(0.5, 3)).abs() < 1e-15);
    }

    #[test]
    fn test_parallel_matches_sequential_reference() {
        for strategy in [TermStrategy::Direct, TermStrategy::Chunked] {
            for threads in [1, 2, 3, 4, 8] {
                let evaluator = ParallelSeriesEvaluator::new(threads, strategy).unwrap();
                let reduction = evaluator.evaluate(2.5, 25);
                let reference = sequential_sum(2.5, 25);

                assert!(
                    (reduction.sum - reference).abs() < 1e-13,
                    "strategy={strategy}, threads={threads}"
                );
            }
        }
    }

    #[test]
    fn test_zero_is_exact() {
        for threads in [1, 2, 5] {
            let evaluator = ParallelSeriesEvaluator::new(threads, TermStrategy::Direct).unwrap();
            assert_eq!(evaluator.evaluate(0.0, 17).sum, 0.0);
        }
    }
}
