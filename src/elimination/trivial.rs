use crate::league::{League, TeamId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrivialOutcome {
    Eliminated(TeamId),
    NotDetermined,
}

/// Looks for a team whose current wins already exceed everything `target`
/// can still reach. The first such team in index order is returned.
pub fn trivial_elimination(league: &League, target: TeamId) -> TrivialOutcome {
    let ceiling = league.max_wins_of(target);
    league
        .team_ids()
        .find(|&other| other != target && league.wins_of(other) as u64 > ceiling)
        .map_or(TrivialOutcome::NotDetermined, TrivialOutcome::Eliminated)
}
