use crate::{Column, ComplaintRecord, Focus, PageSize, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the search input.
    QueryChanged(String),
    /// User pressed the search button or Enter in the input.
    SearchSubmitted,
    /// A search finished. The error carries the text to show verbatim.
    SearchCompleted {
        request_id: RequestId,
        result: Result<Vec<ComplaintRecord>, String>,
    },
    NextPage,
    PrevPage,
    PageSizeChanged(PageSize),
    /// Rows-per-page selector advanced to its next value.
    CyclePageSize,
    /// User activated a column header.
    SortToggled(Column),
    /// User clicked a control.
    FocusChanged(Focus),
    FocusNext,
    FocusPrev,
    SelectNextRow,
    SelectPrevRow,
    /// Fallback for unmapped input.
    NoOp,
}
