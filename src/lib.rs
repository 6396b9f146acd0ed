//! Decides which teams in a division can no longer finish strictly first,
//! and proves it with a certificate: a subset of teams whose remaining games
//! among themselves cannot all be absorbed without one of them passing the
//! target's best possible win total.
//!
//! Simple cases are settled by comparing win totals; everything else goes
//! through a max-flow computation whose minimum cut yields the certificate.

pub mod config;
pub mod elimination;
pub mod error;
pub mod graph;
pub mod league;
pub mod utils;

pub use config::EliminationConfig;
pub use elimination::{
    extract_certificate, trivial_elimination, validate_certificate, CertificateCheck, Division,
    EliminationCache, EliminationNetwork, EliminationReason, FlowSummary, Status, TrivialOutcome,
    Verdict,
};
pub use error::{EliminationError, LoadError};
pub use graph::{max_flow, Capacity, FlowNetwork, MaxFlow, PathSearch, SearchStrategy};
pub use league::{League, Team, TeamId, TeamRecord};
pub use utils::serialization::{load_league, parse_league, DivisionReport};
