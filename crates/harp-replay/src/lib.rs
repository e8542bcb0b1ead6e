// Replay of recorded HAR requests

pub mod client;
pub mod error;
pub mod replayer;
pub mod response;

pub use client::{ReplayConfig, build_client};
pub use error::{Error, Result, TransportErrorKind};
pub use replayer::{Replayer, header_map, http_method};
pub use response::ReplayResponse;
