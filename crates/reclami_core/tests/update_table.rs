use reclami_core::{
    update, AppState, Column, ComplaintRecord, Focus, Msg, PageSize, Scalar, SortDirection,
};

fn numbered_records(count: i64) -> Vec<ComplaintRecord> {
    (1..=count)
        .map(|n| ComplaintRecord {
            id: Some(Scalar::from(n.to_string().as_str())),
            complaint_number: Some(Scalar::from(n)),
            ..ComplaintRecord::default()
        })
        .collect()
}

fn loaded(count: i64) -> AppState {
    let (state, _) = update(AppState::new(), Msg::QueryChanged("reclamo".into()));
    let (state, _) = update(state, Msg::SearchSubmitted);
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            result: Ok(numbered_records(count)),
        },
    );
    state
}

fn apply(state: AppState, msgs: &[Msg]) -> AppState {
    msgs.iter()
        .cloned()
        .fold(state, |state, msg| update(state, msg).0)
}

fn visible_numbers(state: &AppState) -> Vec<String> {
    state
        .view()
        .rows
        .into_iter()
        .map(|row| row.complaint_number)
        .collect()
}

#[test]
fn twenty_three_rows_default_to_three_pages_of_ten() {
    let state = loaded(23);
    let view = state.view();

    assert_eq!(view.page_size, PageSize::Ten);
    assert_eq!(view.page_count, 3);
    assert_eq!(view.rows.len(), 10);
    assert_eq!((view.first_row, view.last_row, view.total_rows), (1, 10, 23));
    assert!(!view.has_prev_page());
    assert!(view.has_next_page());
}

#[test]
fn last_page_holds_the_remainder() {
    let state = apply(loaded(23), &[Msg::NextPage, Msg::NextPage, Msg::NextPage]);
    let view = state.view();

    assert_eq!(view.page, 2);
    assert_eq!(view.rows.len(), 3);
    assert_eq!((view.first_row, view.last_row), (21, 23));
    assert!(!view.has_next_page());

    let state = apply(state, &[Msg::PrevPage]);
    assert_eq!(state.view().page, 1);
}

#[test]
fn page_size_twenty_five_shows_everything_on_page_one() {
    let state = apply(loaded(23), &[Msg::PageSizeChanged(PageSize::TwentyFive)]);
    let view = state.view();

    assert_eq!(view.page_count, 1);
    assert_eq!(view.page, 0);
    assert_eq!(view.rows.len(), 23);
}

#[test]
fn cycle_page_size_walks_the_selector() {
    let state = apply(loaded(60), &[Msg::CyclePageSize]);
    assert_eq!(state.view().page_size, PageSize::TwentyFive);
    let state = apply(state, &[Msg::CyclePageSize]);
    assert_eq!(state.view().page_size, PageSize::Fifty);
    let state = apply(state, &[Msg::CyclePageSize]);
    assert_eq!(state.view().page_size, PageSize::Ten);
}

#[test]
fn new_results_return_to_first_page() {
    let state = apply(loaded(23), &[Msg::NextPage, Msg::NextPage]);
    let state = apply(
        state,
        &[
            Msg::SearchSubmitted,
            Msg::SearchCompleted {
                request_id: 2,
                result: Ok(numbered_records(15)),
            },
        ],
    );

    let view = state.view();
    assert_eq!(view.page, 0);
    assert_eq!(view.page_count, 2);
}

#[test]
fn failure_keeps_current_page() {
    let state = apply(loaded(23), &[Msg::NextPage]);
    let state = apply(
        state,
        &[
            Msg::SearchSubmitted,
            Msg::SearchCompleted {
                request_id: 2,
                result: Err("offline".into()),
            },
        ],
    );

    assert_eq!(state.view().page, 1);
    assert_eq!(state.view().total_rows, 23);
}

#[test]
fn sorting_spans_pages_and_keeps_stored_order() {
    let state = apply(
        loaded(23),
        &[
            Msg::SortToggled(Column::ComplaintNumber),
            Msg::SortToggled(Column::ComplaintNumber),
        ],
    );

    let view = state.view();
    assert_eq!(
        view.sort,
        Some((Column::ComplaintNumber, SortDirection::Descending))
    );
    assert_eq!(visible_numbers(&state)[0], "23");
    assert_eq!(visible_numbers(&state)[9], "14");
    assert_eq!(state.rows()[0].complaint_number, "1");

    let state = apply(state, &[Msg::SortToggled(Column::ComplaintNumber)]);
    assert_eq!(state.view().sort, None);
    assert_eq!(visible_numbers(&state)[0], "1");
}

#[test]
fn focus_cycles_and_table_focus_selects_first_row() {
    let state = loaded(12);
    assert_eq!(state.focus(), Focus::Input);

    let state = apply(state, &[Msg::FocusNext]);
    assert_eq!(state.focus(), Focus::SearchButton);
    assert_eq!(state.selected(), None);

    let state = apply(state, &[Msg::FocusNext]);
    assert_eq!(state.focus(), Focus::Table);
    assert_eq!(state.selected(), Some(0));

    let state = apply(state, &[Msg::FocusNext]);
    assert_eq!(state.focus(), Focus::Input);

    let state = apply(state, &[Msg::FocusPrev]);
    assert_eq!(state.focus(), Focus::Table);
}

#[test]
fn row_selection_stays_within_page() {
    let state = apply(loaded(12), &[Msg::FocusPrev]);
    assert_eq!(state.selected(), Some(0));

    let state = apply(state, &[Msg::SelectPrevRow]);
    assert_eq!(state.selected(), Some(0));

    let moves = vec![Msg::SelectNextRow; 15];
    let state = apply(state, &moves);
    assert_eq!(state.selected(), Some(9));

    let state = apply(state, &[Msg::NextPage]);
    assert_eq!(state.selected(), Some(0));
    let state = apply(state, &[Msg::SelectNextRow, Msg::SelectNextRow]);
    assert_eq!(state.selected(), Some(1));
}

#[test]
fn paging_an_empty_table_is_a_noop() {
    let state = AppState::new();
    let (mut next, effects) = update(state.clone(), Msg::NextPage);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());

    let (mut next, _) = update(next, Msg::SelectNextRow);
    assert!(!next.consume_dirty());
    assert_eq!(next.view().page_count, 0);
    assert_eq!((next.view().first_row, next.view().last_row), (0, 0));
}
