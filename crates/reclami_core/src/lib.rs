//! Reclami core: pure state machine, record flattening and view-model helpers.
mod effect;
mod msg;
mod pagination;
mod record;
mod row;
mod sort;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use pagination::{PageSize, Pagination};
pub use record::{ComplaintRecord, LegalEntity, NaturalPerson, Scalar};
pub use row::{map_records, Column, DisplayRow, PLACEHOLDER};
pub use sort::{SortDirection, SortModel};
pub use state::{AppState, Focus, RequestId, SearchStatus};
pub use update::update;
pub use view_model::AppViewModel;
