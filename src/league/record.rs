use crate::error::{EliminationError, Result};
use crate::league::team::{Team, TeamId, TeamRecord};
use fxhash::FxHashMap;

/// Immutable snapshot of a division: standings plus the remaining schedule.
///
/// Teams are identified internally by their index in the input order and
/// externally by name. The schedule is stored row-major, `n * n` entries.
#[derive(Debug, Clone)]
pub struct League {
    teams: Vec<Team>,
    schedule: Vec<u32>,
    index: FxHashMap<String, TeamId>,
}

impl League {
    pub fn from_records(records: Vec<TeamRecord>) -> Result<Self> {
        let n = records.len();
        if n == 0 {
            return Err(EliminationError::invalid("a division needs at least one team"));
        }

        if let Some(record) = records.iter().find(|record| record.against.len() != n) {
            return Err(EliminationError::invalid(format!(
                "schedule row for '{}' has {} entries, expected {}",
                record.name,
                record.against.len(),
                n
            )));
        }

        let mut teams = Vec::with_capacity(n);
        let mut schedule = vec![0u32; n * n];
        let mut index = FxHashMap::default();

        for (i, record) in records.into_iter().enumerate() {
            for (j, &games) in record.against.iter().enumerate() {
                schedule[i * n + j] = to_count(&record.name, "games against another team", games)?;
            }
            let team = Team {
                wins: to_count(&record.name, "wins", record.wins)?,
                losses: to_count(&record.name, "losses", record.losses)?,
                remaining: to_count(&record.name, "remaining", record.remaining)?,
                name: record.name,
            };
            if index.insert(team.name.clone(), TeamId(i)).is_some() {
                return Err(EliminationError::invalid(format!(
                    "duplicate team name '{}'",
                    team.name
                )));
            }
            teams.push(team);
        }

        for i in 0..n {
            if schedule[i * n + i] != 0 {
                return Err(EliminationError::invalid(format!(
                    "'{}' has {} games scheduled against itself",
                    teams[i].name,
                    schedule[i * n + i]
                )));
            }
            for j in (i + 1)..n {
                if schedule[i * n + j] != schedule[j * n + i] {
                    return Err(EliminationError::invalid(format!(
                        "schedule is not symmetric: {} vs {} has {} games, reverse has {}",
                        teams[i].name,
                        teams[j].name,
                        schedule[i * n + j],
                        schedule[j * n + i]
                    )));
                }
            }
        }

        Ok(League {
            teams,
            schedule,
            index,
        })
    }

    pub fn to_records(&self) -> Vec<TeamRecord> {
        self.team_ids()
            .map(|id| {
                let team = &self.teams[id.0];
                TeamRecord::new(
                    team.name.clone(),
                    team.wins as i64,
                    team.losses as i64,
                    team.remaining as i64,
                    self.team_ids().map(|other| self.games_between(id, other) as i64).collect(),
                )
            })
            .collect()
    }

    pub fn number_of_teams(&self) -> usize {
        self.teams.len()
    }

    pub fn teams(&self) -> impl Iterator<Item = &str> + '_ {
        self.teams.iter().map(|team| team.name.as_str())
    }

    pub fn team_ids(&self) -> impl Iterator<Item = TeamId> {
        (0..self.teams.len()).map(TeamId)
    }

    pub fn team_id(&self, name: &str) -> Result<TeamId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| EliminationError::UnknownTeam(name.to_string()))
    }

    pub fn team(&self, id: TeamId) -> &Team {
        &self.teams[id.0]
    }

    pub fn name(&self, id: TeamId) -> &str {
        &self.teams[id.0].name
    }

    pub fn wins(&self, name: &str) -> Result<u32> {
        Ok(self.team(self.team_id(name)?).wins)
    }

    pub fn losses(&self, name: &str) -> Result<u32> {
        Ok(self.team(self.team_id(name)?).losses)
    }

    pub fn remaining(&self, name: &str) -> Result<u32> {
        Ok(self.team(self.team_id(name)?).remaining)
    }

    pub fn against(&self, first: &str, second: &str) -> Result<u32> {
        let a = self.team_id(first)?;
        let b = self.team_id(second)?;
        Ok(self.games_between(a, b))
    }

    pub fn wins_of(&self, id: TeamId) -> u32 {
        self.teams[id.0].wins
    }

    pub fn max_wins_of(&self, id: TeamId) -> u64 {
        self.teams[id.0].max_wins()
    }

    pub fn games_between(&self, a: TeamId, b: TeamId) -> u32 {
        self.schedule[a.0 * self.teams.len() + b.0]
    }
}

fn to_count(team: &str, field: &str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        EliminationError::invalid(format!("'{team}' has an invalid {field} count: {value}"))
    })
}
