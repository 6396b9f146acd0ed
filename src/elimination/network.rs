use crate::elimination::trivial::{trivial_elimination, TrivialOutcome};
use crate::error::{EliminationError, Result};
use crate::graph::{max_flow, FlowNetwork, MaxFlow, PathSearch, VertexId};
use crate::league::{League, TeamId};
use tracing::debug;

/// Flow network asking whether the games left among the other teams can be
/// played out without any of them passing `target`'s best possible total.
///
/// Layout: source `0`, one game vertex per unordered pair of non-target teams
/// in lexical order, one team vertex per non-target team in index order, sink
/// last.
#[derive(Debug, Clone)]
pub struct EliminationNetwork {
    target: TeamId,
    team_count: usize,
    game_count: usize,
    total_games: u64,
    network: FlowNetwork,
}

impl EliminationNetwork {
    /// Returns `Ok(None)` for a one-team league, where there is nothing to build.
    pub fn build(league: &League, target: TeamId) -> Result<Option<Self>> {
        let team_count = league.number_of_teams();
        if team_count <= 1 {
            return Ok(None);
        }
        if let TrivialOutcome::Eliminated(by) = trivial_elimination(league, target) {
            return Err(EliminationError::DominatedTarget {
                team: league.name(target).to_string(),
                by: league.name(by).to_string(),
            });
        }

        let others = team_count - 1;
        let game_count = others * (others - 1) / 2;
        let vertex_count = game_count + others + 2;
        let mut layout = EliminationNetwork {
            target,
            team_count,
            game_count,
            total_games: 0,
            network: FlowNetwork::with_capacity(vertex_count, game_count * 3 + others),
        };

        let ceiling = league.max_wins_of(target);
        let mut game_vertex = 1;
        for a in league.team_ids().filter(|&id| id != target) {
            for b in league.team_ids().filter(|&id| id > a && id != target) {
                let games = league.games_between(a, b) as u64;
                let first = layout.team_vertex_unchecked(a);
                let second = layout.team_vertex_unchecked(b);
                layout.network.add_edge(0, game_vertex, games)?;
                layout.network.add_unbounded_edge(game_vertex, first)?;
                layout.network.add_unbounded_edge(game_vertex, second)?;
                layout.total_games += games;
                game_vertex += 1;
            }
        }
        debug_assert_eq!(game_vertex, game_count + 1);

        let sink = layout.sink();
        for team in league.team_ids().filter(|&id| id != target) {
            let slack = ceiling.saturating_sub(league.wins_of(team) as u64);
            let vertex = layout.team_vertex_unchecked(team);
            layout.network.add_edge(vertex, sink, slack)?;
        }

        debug!(
            team = league.name(target),
            vertices = vertex_count,
            edges = layout.network.edge_count(),
            total_games = layout.total_games,
            "built elimination network"
        );
        Ok(Some(layout))
    }

    pub fn source(&self) -> VertexId {
        0
    }

    pub fn sink(&self) -> VertexId {
        self.game_count + self.team_count
    }

    pub fn game_count(&self) -> usize {
        self.game_count
    }

    /// Sum of the source edge capacities: every game the other teams still play among themselves.
    pub fn total_games(&self) -> u64 {
        self.total_games
    }

    pub fn network(&self) -> &FlowNetwork {
        &self.network
    }

    pub fn game_vertex(&self, a: TeamId, b: TeamId) -> Option<VertexId> {
        if a == b || a == self.target || b == self.target {
            return None;
        }
        if a.0 >= self.team_count || b.0 >= self.team_count {
            return None;
        }
        let (low, high) = if a < b {
            (self.compress(a), self.compress(b))
        } else {
            (self.compress(b), self.compress(a))
        };
        let others = self.team_count - 1;
        Some(1 + low * others - low * (low + 1) / 2 + (high - low - 1))
    }

    pub fn team_vertex(&self, team: TeamId) -> Option<VertexId> {
        if team == self.target || team.0 >= self.team_count {
            return None;
        }
        Some(self.team_vertex_unchecked(team))
    }

    /// Inverse of [`team_vertex`](Self::team_vertex).
    pub fn team_at(&self, vertex: VertexId) -> Option<TeamId> {
        let first = self.game_count + 1;
        if vertex < first || vertex >= self.sink() {
            return None;
        }
        let offset = vertex - first;
        let index = if offset < self.target.0 { offset } else { offset + 1 };
        Some(TeamId(index))
    }

    pub fn solve(&mut self, search: &dyn PathSearch) -> Result<MaxFlow> {
        let (source, sink) = (self.source(), self.sink());
        max_flow(&mut self.network, source, sink, search)
    }

    fn team_vertex_unchecked(&self, team: TeamId) -> VertexId {
        self.game_count + 1 + self.compress(team)
    }

    fn compress(&self, team: TeamId) -> usize {
        if team.0 > self.target.0 {
            team.0 - 1
        } else {
            team.0
        }
    }
}
