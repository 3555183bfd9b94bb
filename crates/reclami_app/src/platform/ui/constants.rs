use reclami_core::Column;

pub const TITLE: &str = "Ricerca Reclami";
pub const INPUT_LABEL: &str = "Testo di ricerca";
pub const BUTTON_LABEL: &str = "Cerca";
pub const LOADING_TEXT: &str = "Caricamento…";
pub const NO_ROWS_TEXT: &str = "No rows";
pub const ROWS_PER_PAGE_LABEL: &str = "Rows per page:";
pub const SCROLL_HINT: &str = "Tab to table, ↓ to scroll";
pub const KEY_HINTS: &str =
    "Enter search · Tab focus · ←/→ page · s rows per page · 1-6 sort · Esc quit";

pub const BUTTON_WIDTH: u16 = 11;

const COLUMN_TITLES: [&str; 6] = [
    "Num Reclamo",
    "Nome",
    "Cognome",
    "Codice Fiscale",
    "Ragione Sociale",
    "P. IVA",
];

// Relative widths of the six columns.
pub const COLUMN_WEIGHTS: [u16; 6] = [15, 15, 15, 16, 20, 13];

pub fn column_title(column: Column) -> &'static str {
    COLUMN_TITLES[column.index()]
}
