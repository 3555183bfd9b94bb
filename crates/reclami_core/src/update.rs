use crate::{map_records, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Completions are applied in arrival order, whatever their request id: when
/// two searches overlap, the response that lands last decides the table.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(query) => {
            state.set_query(query);
            Vec::new()
        }
        Msg::SearchSubmitted => {
            if state.query().trim().is_empty() {
                return (state, Vec::new());
            }
            let request_id = state.begin_search();
            vec![Effect::SearchRequested {
                request_id,
                query: state.query().to_owned(),
            }]
        }
        Msg::SearchCompleted { result, .. } => {
            match result {
                Ok(records) => state.apply_results(map_records(&records)),
                Err(message) => state.apply_failure(message),
            }
            Vec::new()
        }
        Msg::NextPage => {
            state.next_page();
            Vec::new()
        }
        Msg::PrevPage => {
            state.prev_page();
            Vec::new()
        }
        Msg::PageSizeChanged(page_size) => {
            state.set_page_size(page_size);
            Vec::new()
        }
        Msg::CyclePageSize => {
            let next = state.pagination().page_size().next();
            state.set_page_size(next);
            Vec::new()
        }
        Msg::SortToggled(column) => {
            state.toggle_sort(column);
            Vec::new()
        }
        Msg::FocusChanged(focus) => {
            state.set_focus(focus);
            Vec::new()
        }
        Msg::FocusNext => {
            let next = state.focus().next();
            state.set_focus(next);
            Vec::new()
        }
        Msg::FocusPrev => {
            let prev = state.focus().prev();
            state.set_focus(prev);
            Vec::new()
        }
        Msg::SelectNextRow => {
            state.select_next_row();
            Vec::new()
        }
        Msg::SelectPrevRow => {
            state.select_prev_row();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
