pub mod random_league;
pub mod serialization;
