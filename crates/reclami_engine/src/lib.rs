//! Reclami engine: the complaints search client and the background runtime that executes it.
mod decode;
mod engine;
mod search;
mod types;

pub use decode::decode_records;
pub use engine::EngineHandle;
pub use search::{ReqwestSearcher, SearchSettings, Searcher, DEFAULT_BASE_URL, SEARCH_PATH};
pub use types::{EngineEvent, FailureKind, RequestId, SearchError, REQUEST_FAILED_MESSAGE};
