use crate::{AppState, Column, DisplayRow, Focus, PageSize, SearchStatus, SortDirection};

/// Everything the screen needs for one frame, derived from [`AppState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub focus: Focus,
    pub status: SearchStatus,
    pub loading: bool,
    pub error: Option<String>,
    /// Rows of the current page, already sorted.
    pub rows: Vec<DisplayRow>,
    pub selected: Option<usize>,
    pub total_rows: usize,
    pub page: usize,
    pub page_count: usize,
    pub page_size: PageSize,
    /// One-based index of the first visible row, 0 when the table is empty.
    pub first_row: usize,
    /// One-based index of the last visible row.
    pub last_row: usize,
    pub sort: Option<(Column, SortDirection)>,
}

impl AppViewModel {
    pub(crate) fn from_state(state: &AppState) -> Self {
        let all_rows = state.rows();
        let total_rows = all_rows.len();
        let pagination = state.pagination();
        let range = pagination.range(total_rows);
        let sort = state.sort();

        let rows: Vec<DisplayRow> = sort
            .apply(all_rows)
            .into_iter()
            .skip(range.start)
            .take(range.len())
            .cloned()
            .collect();

        let first_row = if range.is_empty() { 0 } else { range.start + 1 };

        Self {
            query: state.query().to_owned(),
            focus: state.focus(),
            status: state.status(),
            loading: state.is_loading(),
            error: state.error().map(ToOwned::to_owned),
            rows,
            selected: state.selected(),
            total_rows,
            page: pagination.page(),
            page_count: pagination.page_count(total_rows),
            page_size: pagination.page_size(),
            first_row,
            last_row: range.end,
            sort: sort.active(),
        }
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page + 1 < self.page_count
    }
}
