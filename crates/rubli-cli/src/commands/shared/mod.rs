pub mod export;
pub mod fetch;
pub mod limit;
pub mod parse;
pub mod review;
