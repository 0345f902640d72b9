mod board;
mod poller;

pub use board::{CheckSnapshot, StatusBoard};
pub use poller::Monitor;
