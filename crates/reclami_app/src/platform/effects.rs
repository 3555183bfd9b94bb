use std::io;
use std::iter;

use reclami_core::{Effect, Msg};
use reclami_engine::{EngineEvent, EngineHandle, SearchSettings};
use reclami_logging::{reclami_info, reclami_warn};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: SearchSettings) -> io::Result<Self> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SearchRequested { request_id, query } => {
                    reclami_info!(
                        "SearchRequested request_id={} query_len={}",
                        request_id,
                        query.len()
                    );
                    self.engine.search(request_id, query);
                }
            }
        }
    }

    /// Drains every engine event that has arrived so far, in arrival order.
    pub fn poll_messages(&self) -> Vec<Msg> {
        iter::from_fn(|| self.engine.try_recv())
            .map(map_engine_event)
            .collect()
    }
}

fn map_engine_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { request_id, result } => Msg::SearchCompleted {
            request_id,
            result: result.map_err(|err| {
                reclami_warn!("Search {} failed: {}", request_id, err.kind);
                err.message
            }),
        },
    }
}
