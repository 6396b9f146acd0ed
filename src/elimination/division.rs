use crate::config::EliminationConfig;
use crate::elimination::certificate::{extract_certificate, validate_certificate};
use crate::elimination::network::EliminationNetwork;
use crate::elimination::trivial::{trivial_elimination, TrivialOutcome};
use crate::error::{EliminationError, Result};
use crate::graph::PathSearch;
use crate::league::{League, TeamId};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EliminationReason {
    Trivial,
    Flow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    NotEliminated,
    Eliminated {
        reason: EliminationReason,
        certificate: Vec<TeamId>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSummary {
    pub max_flow: u64,
    pub total_games: u64,
    pub augmentations: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub team: TeamId,
    pub status: Status,
    pub flow: Option<FlowSummary>,
}

impl Verdict {
    pub fn is_eliminated(&self) -> bool {
        matches!(self.status, Status::Eliminated { .. })
    }

    pub fn certificate(&self) -> Option<&[TeamId]> {
        match &self.status {
            Status::Eliminated { certificate, .. } => Some(certificate),
            Status::NotEliminated => None,
        }
    }

    pub fn reason(&self) -> Option<EliminationReason> {
        match &self.status {
            Status::Eliminated { reason, .. } => Some(*reason),
            Status::NotEliminated => None,
        }
    }
}

/// Per-team memo of finished verdicts. Safe to fill from several threads.
#[derive(Debug, Default)]
pub struct EliminationCache {
    slots: Vec<OnceLock<Verdict>>,
}

impl EliminationCache {
    pub fn new(team_count: usize) -> Self {
        EliminationCache {
            slots: (0..team_count).map(|_| OnceLock::new()).collect(),
        }
    }

    pub fn get(&self, team: TeamId) -> Option<&Verdict> {
        self.slots.get(team.0).and_then(OnceLock::get)
    }

    pub fn insert(&self, verdict: Verdict) -> Option<&Verdict> {
        let slot = self.slots.get(verdict.team.0)?;
        // A concurrent insert for the same team computed the same verdict.
        let _ = slot.set(verdict);
        slot.get()
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }
}

/// Elimination queries over one immutable league.
pub struct Division {
    league: League,
    config: EliminationConfig,
    search: Box<dyn PathSearch>,
    cache: EliminationCache,
}

impl Division {
    pub fn new(league: League, config: EliminationConfig) -> Self {
        let cache = EliminationCache::new(league.number_of_teams());
        Division {
            search: config.search.searcher(),
            league,
            config,
            cache,
        }
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    pub fn config(&self) -> &EliminationConfig {
        &self.config
    }

    pub fn cache(&self) -> &EliminationCache {
        &self.cache
    }

    pub fn is_eliminated(&self, team: &str) -> Result<bool> {
        Ok(self.verdict(team)?.is_eliminated())
    }

    pub fn certificate_of_elimination(&self, team: &str) -> Result<Option<Vec<String>>> {
        let verdict = self.verdict(team)?;
        Ok(verdict.certificate().map(|teams| {
            teams
                .iter()
                .map(|&id| self.league.name(id).to_string())
                .collect()
        }))
    }

    pub fn verdict(&self, team: &str) -> Result<Verdict> {
        let id = self.league.team_id(team)?;
        self.verdict_of(id)
    }

    pub fn verdict_of(&self, team: TeamId) -> Result<Verdict> {
        if team.0 >= self.league.number_of_teams() {
            return Err(EliminationError::UnknownTeam(team.to_string()));
        }
        if let Some(verdict) = self.cache.get(team) {
            return Ok(verdict.clone());
        }

        let verdict = self.evaluate(team)?;
        if self.config.cache_verdicts {
            self.cache.insert(verdict.clone());
        }
        Ok(verdict)
    }

    /// Verdicts for every team in index order.
    pub fn evaluate_all(&self) -> Result<Vec<Verdict>> {
        let teams: Vec<TeamId> = self.league.team_ids().collect();
        if self.config.parallel {
            teams.into_par_iter().map(|team| self.verdict_of(team)).collect()
        } else {
            teams.into_iter().map(|team| self.verdict_of(team)).collect()
        }
    }

    fn evaluate(&self, team: TeamId) -> Result<Verdict> {
        if let TrivialOutcome::Eliminated(by) = trivial_elimination(&self.league, team) {
            debug!(
                team = self.league.name(team),
                by = self.league.name(by),
                "trivially eliminated"
            );
            return Ok(Verdict {
                team,
                status: Status::Eliminated {
                    reason: EliminationReason::Trivial,
                    certificate: vec![by],
                },
                flow: None,
            });
        }
        self.flow_verdict(team)
    }

    /// Answers through the flow network alone, skipping the cache.
    ///
    /// Fails with [`EliminationError::DominatedTarget`] when the trivial check
    /// would already eliminate `team`.
    pub fn flow_verdict(&self, team: TeamId) -> Result<Verdict> {
        let Some(mut layout) = EliminationNetwork::build(&self.league, team)? else {
            return Ok(Verdict {
                team,
                status: Status::NotEliminated,
                flow: None,
            });
        };

        let flow = layout.solve(self.search.as_ref())?;
        let certificate = extract_certificate(&layout, &flow);
        let summary = FlowSummary {
            max_flow: flow.value(),
            total_games: layout.total_games(),
            augmentations: flow.augmentations(),
        };
        debug!(
            team = self.league.name(team),
            max_flow = summary.max_flow,
            total_games = summary.total_games,
            certificate = certificate.len(),
            "flow query finished"
        );

        if certificate.is_empty() {
            return Ok(Verdict {
                team,
                status: Status::NotEliminated,
                flow: Some(summary),
            });
        }

        if self.config.validate_certificates {
            let check = validate_certificate(&self.league, team, &certificate);
            if !check.is_valid() {
                error!(
                    team = self.league.name(team),
                    games = check.total_games,
                    capacity = check.total_capacity,
                    "certificate failed the counting check"
                );
                return Err(EliminationError::CertificateRejected {
                    team: self.league.name(team).to_string(),
                    games: check.total_games,
                    capacity: check.total_capacity,
                });
            }
        }

        Ok(Verdict {
            team,
            status: Status::Eliminated {
                reason: EliminationReason::Flow,
                certificate,
            },
            flow: Some(summary),
        })
    }
}
