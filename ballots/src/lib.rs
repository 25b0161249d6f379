mod ballot_item;
mod listener;
mod registry;
mod timeline;

pub use ballot_item::{BallotItem, BallotItemState, VotePanel};
pub use listener::ListenerHandle;
pub use registry::{max_page_index, BallotsRegistry, Pagination, RegistryState};
pub use timeline::{BallotTimeline, RemainingTime};
