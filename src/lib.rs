pub mod config;
pub mod countdown;
pub mod document;
pub mod download;
pub mod error;
pub mod format;
pub mod i18n;
pub mod interactive;
pub mod logging;
pub mod search;
pub mod storage;
pub mod timer;

pub use config::{Settings, SettingsManager};
pub use countdown::{Countdown, CountdownParts};
pub use document::{DocumentAttributes, DocumentHooks, MemoryDocument, TracingDocument};
pub use download::{DownloadSink, DownloadStatus, ProgressTimings, SimulatedDownload, Whitepaper};
pub use error::{ErrorContext, ProviderContext, SiteError, SiteResult};
pub use i18n::{Direction, Language, LanguageStore, SiteContext, use_language, use_language_mut};
pub use search::{DebouncedSearch, SearchTimings};
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage};
pub use timer::{Clock, ManualClock, SystemClock, TimerSet};
