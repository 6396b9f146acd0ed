use crate::elimination::{EliminationReason, FlowSummary, Verdict};
use crate::error::LoadError;
use crate::league::{League, TeamRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Parses the plain-text division format:
///
/// ```text
/// 4
/// Atlanta       83 71  8  0 1 6 1
/// Philadelphia  80 79  3  1 0 0 2
/// New_York      78 78  6  6 0 0 0
/// Montreal      77 82  3  1 2 0 0
/// ```
///
/// The first line holds the team count; each team line holds the name, wins,
/// losses, remaining games and one column per team of games left against it.
pub fn parse_league(source: &str) -> Result<League, LoadError> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines.next().ok_or(LoadError::Parse {
        line: 1,
        message: "missing team count".to_string(),
    })?;
    let count_token = header.split_whitespace().next().unwrap_or_default();
    let team_count: usize = count_token.parse().map_err(|_| LoadError::Parse {
        line: header_line,
        message: format!("team count '{count_token}' is not a number"),
    })?;

    // The header is untrusted; records grow with the lines actually present.
    let mut records = Vec::new();
    for (line, text) in lines.by_ref().take(team_count) {
        records.push(parse_team_line(line, text, team_count)?);
    }
    if records.len() != team_count {
        return Err(LoadError::Parse {
            line: header_line,
            message: format!("expected {team_count} teams, found {}", records.len()),
        });
    }
    if let Some((line, _)) = lines.next() {
        return Err(LoadError::Parse {
            line,
            message: "unexpected data after the last team".to_string(),
        });
    }

    Ok(League::from_records(records)?)
}

fn parse_team_line(line: usize, text: &str, team_count: usize) -> Result<TeamRecord, LoadError> {
    let mut tokens = text.split_whitespace();
    let name = tokens.next().unwrap_or_default().to_string();
    let numbers = tokens
        .map(|token| {
            token.parse::<i64>().map_err(|_| LoadError::Parse {
                line,
                message: format!("'{token}' is not an integer"),
            })
        })
        .collect::<Result<Vec<i64>, LoadError>>()?;

    let expected = team_count.saturating_add(3);
    if numbers.len() != expected {
        return Err(LoadError::Parse {
            line,
            message: format!(
                "team '{name}' has {} numbers, expected {}",
                numbers.len(),
                expected
            ),
        });
    }

    Ok(TeamRecord::new(
        name,
        numbers[0],
        numbers[1],
        numbers[2],
        numbers[3..].to_vec(),
    ))
}

pub fn format_league(league: &League) -> String {
    let records = league.to_records();
    let width = records.iter().map(|record| record.name.len()).max().unwrap_or(0);
    let mut out = format!("{}\n", records.len());
    for record in &records {
        let against: Vec<String> = record.against.iter().map(|games| games.to_string()).collect();
        out.push_str(&format!(
            "{:<width$}  {:>3} {:>3} {:>3}  {}\n",
            record.name,
            record.wins,
            record.losses,
            record.remaining,
            against.join(" "),
        ));
    }
    out
}

pub fn load_league<P: AsRef<Path>>(path: P) -> Result<League, LoadError> {
    let source = fs::read_to_string(path)?;
    parse_league(&source)
}

pub fn save_league<P: AsRef<Path>>(path: P, league: &League) -> io::Result<()> {
    fs::write(path, format_league(league))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    pub teams: Vec<TeamRecord>,
}

impl LeagueSnapshot {
    pub fn from_league(league: &League) -> Self {
        LeagueSnapshot {
            teams: league.to_records(),
        }
    }

    pub fn into_league(self) -> Result<League, LoadError> {
        Ok(League::from_records(self.teams)?)
    }
}

pub fn save_league_snapshot<P: AsRef<Path>>(path: P, league: &League) -> Result<(), LoadError> {
    let bytes = bincode::serialize(&LeagueSnapshot::from_league(league))?;
    let mut file = fs::File::create(path)?;
    file.write_all(&bytes)?;
    Ok(())
}

pub fn load_league_snapshot<P: AsRef<Path>>(path: P) -> Result<League, LoadError> {
    let bytes = fs::read(path)?;
    let snapshot: LeagueSnapshot = bincode::deserialize(&bytes)?;
    snapshot.into_league()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamReport {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub remaining: u32,
    pub eliminated: bool,
    pub reason: Option<EliminationReason>,
    pub certificate: Vec<String>,
    pub flow: Option<FlowSummary>,
}

impl fmt::Display for TeamReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.eliminated {
            write!(f, "{} is eliminated by the subset R = {{ ", self.name)?;
            for team in &self.certificate {
                write!(f, "{team} ")?;
            }
            write!(f, "}}")
        } else {
            write!(f, "{} is not eliminated", self.name)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionReport {
    pub teams: Vec<TeamReport>,
}

impl DivisionReport {
    pub fn from_verdicts(league: &League, verdicts: &[Verdict]) -> Self {
        let teams = verdicts
            .iter()
            .map(|verdict| {
                let team = league.team(verdict.team);
                TeamReport {
                    name: team.name.clone(),
                    wins: team.wins,
                    losses: team.losses,
                    remaining: team.remaining,
                    eliminated: verdict.is_eliminated(),
                    reason: verdict.reason(),
                    certificate: verdict
                        .certificate()
                        .unwrap_or_default()
                        .iter()
                        .map(|&id| league.name(id).to_string())
                        .collect(),
                    flow: verdict.flow,
                }
            })
            .collect();
        DivisionReport { teams }
    }

    pub fn eliminated_count(&self) -> usize {
        self.teams.iter().filter(|team| team.eliminated).count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for DivisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for team in &self.teams {
            writeln!(f, "{team}")?;
        }
        Ok(())
    }
}
