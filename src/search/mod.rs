//! Search input handling

pub mod debounced;


pub use debounced::{DebouncedSearch, SearchCallback, SearchTimings};
