//! File-watching adapters.

mod poll;

pub use poll::PollingWatcher;
