//! Entity structs for the records exchanged with the RUBLI analytics API.
//!
//! Field names match the backend's JSON exactly; nothing is renamed on the way
//! in. All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the
//! response shapes can be validated at the client boundary.

mod category;
mod contract;
mod dossier;
mod feedback;
mod flow;
mod hypothesis;
mod institution;
mod investigation;
mod network;
mod sector;
mod vendor;
mod watchlist;

pub use category::CategoryStat;
pub use contract::{ContractDetail, ContractListItem};
pub use dossier::{Dossier, DossierCreate, DossierItem, DossierItemCreate, DossierUpdate};
pub use feedback::{FeedbackReceipt, RiskFeedback};
pub use flow::MoneyFlowEdge;
pub use hypothesis::{HypothesisEvidence, PriceHypothesis, ReviewRequest};
pub use institution::{InstitutionDetail, InstitutionListItem, InstitutionVendor};
pub use investigation::InvestigationCase;
pub use network::{NetworkGraph, NetworkLink, NetworkNode};
pub use sector::{RiskBucket, Sector, SectorRiskDistribution};
pub use vendor::{VendorDetail, VendorListItem};
pub use watchlist::{WatchlistCreate, WatchlistItem, WatchlistUpdate};
