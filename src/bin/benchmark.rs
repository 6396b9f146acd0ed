use baseball_elimination::utils::random_league::{generate_league, LeagueParameters};
use baseball_elimination::{Division, EliminationConfig, EliminationReason, SearchStrategy, Verdict};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

struct BenchmarkResult {
    teams: usize,
    strategy: SearchStrategy,
    parallel: bool,
    samples: u32,
    total_time: Duration,
    eliminated: usize,
    trivial: usize,
    augmentations: usize,
}

impl BenchmarkResult {
    fn mean_ms(&self) -> f64 {
        self.total_time.as_secs_f64() * 1000.0 / self.samples.max(1) as f64
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Benchmark runner for division elimination on random leagues"
)]
struct BenchmarkCli {
    /// Comma-separated list of division sizes (e.g. 8,16,32)
    #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(usize))]
    teams: Option<Vec<usize>>,
    /// Comma-separated list of path searches (bfs,dfs)
    #[arg(long, value_delimiter = ',')]
    strategies: Option<Vec<SearchStrategy>>,
    /// Random divisions per configuration
    #[arg(long, default_value_t = 5)]
    samples: u32,
    /// Seed of the first generated division
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Also run every configuration with parallel evaluation
    #[arg(long)]
    parallel: bool,
}

fn main() {
    let cli = BenchmarkCli::parse();
    println!("=== Division Elimination Benchmark ===\n");

    let sizes = cli.teams.clone().unwrap_or_else(|| vec![5, 10, 20, 30]);
    let strategies = cli
        .strategies
        .clone()
        .unwrap_or_else(|| vec![SearchStrategy::BreadthFirst, SearchStrategy::DepthFirst]);
    let modes: Vec<bool> = if cli.parallel { vec![false, true] } else { vec![false] };

    let total = (sizes.len() * strategies.len() * modes.len()) as u64;
    let progress = ProgressBar::new(total);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut results = Vec::new();
    for &teams in &sizes {
        for &strategy in &strategies {
            for &parallel in &modes {
                progress.set_message(format!("n={teams} {strategy} parallel={parallel}"));
                match run_benchmark(teams, strategy, parallel, cli.samples, cli.seed) {
                    Ok(result) => results.push(result),
                    Err(e) => progress.println(format!("  ✗ Benchmark failed: {e}")),
                }
                progress.inc(1);
            }
        }
    }
    progress.finish_and_clear();

    print_summary_table(&results);
}

fn run_benchmark(
    teams: usize,
    strategy: SearchStrategy,
    parallel: bool,
    samples: u32,
    seed: u64,
) -> Result<BenchmarkResult, Box<dyn std::error::Error>> {
    if samples == 0 {
        return Err("samples must be greater than zero".into());
    }
    let config = EliminationConfig {
        search: strategy,
        parallel,
        ..EliminationConfig::default()
    };

    let mut result = BenchmarkResult {
        teams,
        strategy,
        parallel,
        samples,
        total_time: Duration::ZERO,
        eliminated: 0,
        trivial: 0,
        augmentations: 0,
    };

    for sample in 0..samples {
        let league = generate_league(&LeagueParameters::new(teams, seed + sample as u64))?;
        let division = Division::new(league, config.clone());
        let start = Instant::now();
        let verdicts = division.evaluate_all()?;
        result.total_time += start.elapsed();
        record(&mut result, &verdicts);
    }

    Ok(result)
}

fn record(result: &mut BenchmarkResult, verdicts: &[Verdict]) {
    for verdict in verdicts {
        if verdict.is_eliminated() {
            result.eliminated += 1;
            if verdict.reason() == Some(EliminationReason::Trivial) {
                result.trivial += 1;
            }
        }
        if let Some(flow) = verdict.flow {
            result.augmentations += flow.augmentations;
        }
    }
}

fn print_summary_table(results: &[BenchmarkResult]) {
    println!(
        "{:>6} {:>14} {:>9} {:>12} {:>11} {:>8} {:>14}",
        "teams", "search", "parallel", "mean (ms)", "eliminated", "trivial", "augmentations"
    );
    println!("{}", "-".repeat(80));
    for result in results {
        println!(
            "{:>6} {:>14} {:>9} {:>12.3} {:>11} {:>8} {:>14}",
            result.teams,
            result.strategy.to_string(),
            result.parallel,
            result.mean_ms(),
            result.eliminated,
            result.trivial,
            result.augmentations
        );
    }
}
