pub mod announcer;
pub mod content;
pub mod filter;
pub mod notify;
pub mod presenter;
pub mod search;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{DestinationCard, FilterState, Partition, ResultSummary};
pub use crate::domain::ports::{ContentSource, SearchPage, SharedPage};
pub use crate::utils::error::Result;
