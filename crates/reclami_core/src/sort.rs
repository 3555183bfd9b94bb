use std::cmp::Ordering;

use crate::row::{Column, DisplayRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Single-column sort applied when building the view; stored rows keep API order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortModel {
    active: Option<(Column, SortDirection)>,
}

impl SortModel {
    pub fn active(&self) -> Option<(Column, SortDirection)> {
        self.active
    }

    /// Cycles `column` through ascending, descending and unsorted.
    pub fn toggle(&mut self, column: Column) {
        self.active = match self.active {
            Some((current, SortDirection::Ascending)) if current == column => {
                Some((column, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    pub fn apply<'a>(&self, rows: &'a [DisplayRow]) -> Vec<&'a DisplayRow> {
        let Some((column, direction)) = self.active else {
            return rows.iter().collect();
        };
        let keys: Vec<CellKey> = rows.iter().map(|row| CellKey::of(row.cell(column))).collect();
        let mut order: Vec<usize> = (0..rows.len()).collect();
        order.sort_by(|&a, &b| {
            let ordering = keys[a].compare(&keys[b]);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        order.into_iter().map(|index| &rows[index]).collect()
    }
}

/// Sort key of a cell. Numbers order before text so the comparison stays total
/// on columns that mix both.
#[derive(Debug, PartialEq)]
enum CellKey {
    Number(f64),
    Text(String),
}

impl CellKey {
    fn of(cell: &str) -> Self {
        match cell.parse::<f64>() {
            Ok(number) => CellKey::Number(number),
            Err(_) => CellKey::Text(cell.to_lowercase()),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellKey::Number(a), CellKey::Number(b)) => a.total_cmp(b),
            (CellKey::Number(_), CellKey::Text(_)) => Ordering::Less,
            (CellKey::Text(_), CellKey::Number(_)) => Ordering::Greater,
            (CellKey::Text(a), CellKey::Text(b)) => a.cmp(b),
        }
    }
}
