pub mod cases;
pub mod categories;
pub mod contracts;
pub mod dispatch;
pub mod dossiers;
pub mod feedback;
pub mod flows;
pub mod hypotheses;
pub mod institutions;
pub mod network;
pub mod sectors;
pub mod shared;
pub mod stats;
pub mod vendors;
pub mod watchlist;
