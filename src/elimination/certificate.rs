use crate::elimination::network::EliminationNetwork;
use crate::graph::MaxFlow;
use crate::league::{League, TeamId};
use serde::{Deserialize, Serialize};

/// Teams whose vertices ended up on the source side of the minimum cut, in
/// index order. Empty exactly when every remaining game could be absorbed.
pub fn extract_certificate(layout: &EliminationNetwork, flow: &MaxFlow) -> Vec<TeamId> {
    let sink = layout.sink();
    let certificate: Vec<TeamId> = (layout.game_count() + 1..sink)
        .filter(|&vertex| flow.in_cut(vertex))
        .filter_map(|vertex| layout.team_at(vertex))
        .collect();
    debug_assert_eq!(
        certificate.is_empty(),
        flow.value() == layout.total_games(),
        "cut side disagrees with flow saturation"
    );
    certificate
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateCheck {
    pub total_games: i64,
    pub total_capacity: i64,
}

impl CertificateCheck {
    pub fn is_valid(&self) -> bool {
        self.total_games > self.total_capacity
    }
}

/// Counting check, independent of any flow computation: the teams in
/// `certificate` have more games left among themselves than the wins they
/// could collectively add while staying at or below `target`'s ceiling.
pub fn validate_certificate(league: &League, target: TeamId, certificate: &[TeamId]) -> CertificateCheck {
    let ceiling = league.max_wins_of(target) as i64;
    let total_capacity = certificate
        .iter()
        .map(|&team| ceiling - league.wins_of(team) as i64)
        .sum();

    let mut total_games = 0i64;
    for (position, &a) in certificate.iter().enumerate() {
        for &b in &certificate[position + 1..] {
            total_games += league.games_between(a, b) as i64;
        }
    }

    CertificateCheck {
        total_games,
        total_capacity,
    }
}
