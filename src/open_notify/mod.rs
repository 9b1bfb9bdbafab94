//! Open Notify API integration (astronauts, current position, passover times).

pub mod fetcher;
pub mod types;

pub use fetcher::OpenNotifyClient;
pub use types::{Astronauts, PassReport, PositionReport};
