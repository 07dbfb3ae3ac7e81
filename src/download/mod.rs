//! Whitepaper downloads

pub mod catalog;
pub mod simulated;
pub mod sink;


pub use catalog::{WHITEPAPERS, Whitepaper};
pub use simulated::{DownloadStatus, ProgressTimings, SimulatedDownload};
pub use sink::{DownloadSink, FileDownloadSink, MemorySink};
