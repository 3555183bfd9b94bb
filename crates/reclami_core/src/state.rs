use crate::view_model::AppViewModel;
use crate::{Column, DisplayRow, PageSize, Pagination, SortModel};

pub type RequestId = u64;

/// Outcome of the most recent search activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// Which control receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    SearchButton,
    Table,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Input => Focus::SearchButton,
            Focus::SearchButton => Focus::Table,
            Focus::Table => Focus::Input,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Input => Focus::Table,
            Focus::SearchButton => Focus::Input,
            Focus::Table => Focus::SearchButton,
        }
    }
}

/// Complete state behind the search screen. Only [`crate::update`] mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query: String,
    rows: Vec<DisplayRow>,
    status: SearchStatus,
    error: Option<String>,
    pagination: Pagination,
    sort: SortModel,
    focus: Focus,
    /// Index into the visible page.
    selected: Option<usize>,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(self)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn sort(&self) -> SortModel {
        self.sort
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns whether a re-render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.dirty = true;
        }
    }

    /// Enters `Loading`, clears any previous error and hands out a fresh request id.
    pub(crate) fn begin_search(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.status = SearchStatus::Loading;
        self.error = None;
        self.dirty = true;
        self.next_request_id
    }

    pub(crate) fn apply_results(&mut self, rows: Vec<DisplayRow>) {
        self.rows = rows;
        self.status = SearchStatus::Success;
        self.error = None;
        self.pagination.reset();
        self.after_page_change();
    }

    /// Records a failure. Rows from the previous success stay on screen.
    pub(crate) fn apply_failure(&mut self, message: String) {
        self.status = SearchStatus::Failed;
        self.error = Some(message);
        self.dirty = true;
    }

    pub(crate) fn next_page(&mut self) {
        if self.pagination.next_page(self.rows.len()) {
            self.after_page_change();
        }
    }

    pub(crate) fn prev_page(&mut self) {
        if self.pagination.prev_page() {
            self.after_page_change();
        }
    }

    pub(crate) fn set_page_size(&mut self, page_size: PageSize) {
        if self.pagination.set_page_size(page_size, self.rows.len()) {
            self.after_page_change();
        }
    }

    pub(crate) fn toggle_sort(&mut self, column: Column) {
        self.sort.toggle(column);
        self.dirty = true;
    }

    pub(crate) fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        self.focus = focus;
        if focus == Focus::Table && self.selected.is_none() && self.visible_len() > 0 {
            self.selected = Some(0);
        }
        self.dirty = true;
    }

    pub(crate) fn select_next_row(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let next = match self.selected {
            Some(index) => (index + 1).min(len - 1),
            None => 0,
        };
        self.select(Some(next));
    }

    pub(crate) fn select_prev_row(&mut self) {
        if self.visible_len() == 0 {
            return;
        }
        let prev = self.selected.map_or(0, |index| index.saturating_sub(1));
        self.select(Some(prev));
    }

    fn select(&mut self, selected: Option<usize>) {
        if self.selected != selected {
            self.selected = selected;
            self.dirty = true;
        }
    }

    fn after_page_change(&mut self) {
        self.selected = (self.focus == Focus::Table && self.visible_len() > 0).then_some(0);
        self.dirty = true;
    }

    fn visible_len(&self) -> usize {
        self.pagination.range(self.rows.len()).len()
    }
}
