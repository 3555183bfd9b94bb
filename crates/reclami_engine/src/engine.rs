use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use reclami_logging::{reclami_info, reclami_warn};

use crate::search::{ReqwestSearcher, SearchSettings, Searcher};
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Search { request_id: RequestId, query: String },
}

/// Runs searches on a background tokio runtime and reports back over a channel.
///
/// Requests are never cancelled: every submitted search produces exactly one
/// `SearchCompleted`, in whatever order the responses arrive.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: SearchSettings) -> io::Result<Self> {
        Self::with_searcher(Arc::new(ReqwestSearcher::new(settings)))
    }

    pub fn with_searcher(searcher: Arc<dyn Searcher>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let searcher = searcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(searcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn search(&self, request_id: RequestId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            request_id,
            query: query.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    searcher: &dyn Searcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search { request_id, query } => {
            let result = searcher.search(&query).await;
            match &result {
                Ok(records) => {
                    reclami_info!("Search {} returned {} records", request_id, records.len())
                }
                Err(err) => reclami_warn!("Search {} failed ({}): {}", request_id, err.kind, err),
            }
            let _ = event_tx.send(EngineEvent::SearchCompleted { request_id, result });
        }
    }
}
