pub mod record;
pub mod team;

pub use record::League;
pub use team::{Team, TeamId, TeamRecord};
