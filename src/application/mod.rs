//! Application layer: the polling cycle and its building blocks.

pub mod catalog;
pub mod dispatch;
pub mod fanout;
pub mod poll;
pub mod render;
pub mod wave;

pub use catalog::CatalogFetcher;
pub use dispatch::Dispatcher;
pub use fanout::{Fanout, Resolved};
pub use poll::PollLoop;
pub use wave::{CycleKind, CycleOutcome, CycleStats, WaveEngine};
