use baseball_elimination::utils::random_league::{generate_league, LeagueParameters};
use baseball_elimination::utils::serialization::{
    load_league, load_league_snapshot, save_league, save_league_snapshot, DivisionReport,
};
use baseball_elimination::{Division, EliminationConfig, League, SearchStrategy};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

const LOG_ENV: &str = "BASEBALL_LOG";

#[derive(Parser)]
#[command(author, version, about = "Mathematical elimination for division standings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report, for every team, whether it can still finish first
    Evaluate {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
        #[arg(long, help = "Path search used by max-flow (bfs or dfs)")]
        search: Option<SearchStrategy>,
        #[arg(long, help = "Evaluate teams in parallel")]
        parallel: bool,
        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },
    /// Print the certificate of elimination for one team
    Certificate {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
        #[arg(short, long)]
        team: String,
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Generate a random division and write it in the text format
    Generate {
        #[arg(long, default_value_t = 8)]
        teams: usize,
        #[arg(long, default_value_t = 7)]
        seed: u64,
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Convert a text division into a binary snapshot
    Snapshot {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Evaluate {
            input,
            config,
            search,
            parallel,
            json,
        } => run_evaluate(input, config, search, parallel, json)?,
        Commands::Certificate {
            input,
            team,
            config,
        } => run_certificate(input, team, config)?,
        Commands::Generate {
            teams,
            seed,
            output,
        } => run_generate(teams, seed, output)?,
        Commands::Snapshot { input, output } => run_snapshot(input, output)?,
    }
    Ok(())
}

fn run_evaluate(
    input: PathBuf,
    config_path: Option<PathBuf>,
    search: Option<SearchStrategy>,
    parallel: bool,
    json: bool,
) -> CliResult<()> {
    let mut config = load_config(config_path.as_deref())?;
    if let Some(search) = search {
        config.search = search;
    }
    config.parallel |= parallel;

    let division = Division::new(load_input(&input)?, config);
    let verdicts = division.evaluate_all()?;
    let report = DivisionReport::from_verdicts(division.league(), &verdicts);
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn run_certificate(input: PathBuf, team: String, config_path: Option<PathBuf>) -> CliResult<()> {
    let config = load_config(config_path.as_deref())?;
    let division = Division::new(load_input(&input)?, config);
    match division.certificate_of_elimination(&team)? {
        Some(certificate) => println!("{team} is eliminated by {{ {} }}", certificate.join(", ")),
        None => println!("{team} is not eliminated"),
    }
    Ok(())
}

fn run_generate(teams: usize, seed: u64, output: PathBuf) -> CliResult<()> {
    if teams == 0 {
        return Err("teams must be greater than zero".into());
    }
    let league = generate_league(&LeagueParameters::new(teams, seed))?;
    save_league(&output, &league)?;
    println!(
        "Division with {} teams (seed {}) saved to {}",
        league.number_of_teams(),
        seed,
        output.display()
    );
    Ok(())
}

fn run_snapshot(input: PathBuf, output: PathBuf) -> CliResult<()> {
    let league = load_league(&input)?;
    save_league_snapshot(&output, &league)?;
    println!("Snapshot of {} saved to {}", input.display(), output.display());
    Ok(())
}

fn load_config(path: Option<&Path>) -> CliResult<EliminationConfig> {
    Ok(match path {
        Some(path) => EliminationConfig::load(path)?,
        None => EliminationConfig::default(),
    })
}

fn load_input(path: &Path) -> CliResult<League> {
    let league = match path.extension().and_then(|ext| ext.to_str()) {
        Some("bin") => load_league_snapshot(path)?,
        _ => load_league(path)?,
    };
    Ok(league)
}
