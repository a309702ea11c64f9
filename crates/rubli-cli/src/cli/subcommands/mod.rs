mod cases;
mod categories;
mod contracts;
mod dossiers;
mod flows;
mod hypotheses;
mod institutions;
mod sectors;
mod shared;
mod stats;
mod vendors;
mod watchlist;

pub use cases::{CaseCommands, CaseReviewArgs};
pub use categories::CategoryCommands;
pub use contracts::{ContractCommands, ContractFilterArgs, ContractListArgs, ContractSort};
pub use dossiers::DossierCommands;
pub use flows::{FlowCommands, FlowSideArg};
pub use hypotheses::{HypothesisCommands, HypothesisReviewArgs};
pub use institutions::{InstitutionCommands, InstitutionListArgs};
pub use sectors::SectorCommands;
pub use shared::{JudgmentArgs, PageArgs, ScopeArgs};
pub use stats::StatsCommands;
pub use vendors::{TopMetricArg, VendorCommands, VendorListArgs};
pub use watchlist::WatchlistCommands;
