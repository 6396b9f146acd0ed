pub mod certificate;
pub mod division;
pub mod network;
pub mod trivial;

pub use certificate::{extract_certificate, validate_certificate, CertificateCheck};
pub use division::{Division, EliminationCache, EliminationReason, FlowSummary, Status, Verdict};
pub use network::EliminationNetwork;
pub use trivial::{trivial_elimination, TrivialOutcome};
