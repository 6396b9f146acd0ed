use crate::error::Result;
use crate::league::{League, TeamRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_GAMES_PER_PAIR: u32 = 6;
pub const DEFAULT_MAX_WINS: u32 = 90;
pub const DEFAULT_WIN_SPREAD: u32 = 12;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueParameters {
    pub teams: usize,
    pub seed: u64,
    pub max_games_per_pair: u32,
    pub max_wins: u32,
    pub win_spread: u32,
}

impl LeagueParameters {
    pub fn new(teams: usize, seed: u64) -> Self {
        LeagueParameters {
            teams,
            seed,
            max_games_per_pair: DEFAULT_MAX_GAMES_PER_PAIR,
            max_wins: DEFAULT_MAX_WINS,
            win_spread: DEFAULT_WIN_SPREAD,
        }
    }
}

/// Builds a reproducible division whose `remaining` column equals each row
/// sum of the schedule, as in a real standings table.
pub fn generate_league(params: &LeagueParameters) -> Result<League> {
    let n = params.teams;
    let mut rng = StdRng::seed_from_u64(params.seed);
    let min_wins = params.max_wins.saturating_sub(params.win_spread);
    let mut schedule = vec![vec![0i64; n]; n];

    for i in 0..n {
        for j in (i + 1)..n {
            let games = rng.random_range(0..=params.max_games_per_pair) as i64;
            schedule[i][j] = games;
            schedule[j][i] = games;
        }
    }

    let records = schedule
        .into_iter()
        .enumerate()
        .map(|(i, against)| {
            let remaining: i64 = against.iter().sum();
            let wins = rng.random_range(min_wins..=params.max_wins) as i64;
            let losses = rng.random_range(min_wins..=params.max_wins) as i64;
            TeamRecord::new(team_name(i), wins, losses, remaining, against)
        })
        .collect();

    League::from_records(records)
}

pub fn random_league(teams: usize, seed: u64) -> Result<League> {
    generate_league(&LeagueParameters::new(teams, seed))
}

fn team_name(index: usize) -> String {
    format!("Team_{index:02}")
}
