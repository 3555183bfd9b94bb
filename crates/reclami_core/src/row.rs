use crate::record::{ComplaintRecord, Scalar};

/// Shown in a cell whose source field is missing.
pub const PLACEHOLDER: &str = "-";

/// The six table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    ComplaintNumber,
    Name,
    Surname,
    FiscalCode,
    CompanyName,
    VatNumber,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::ComplaintNumber,
        Column::Name,
        Column::Surname,
        Column::FiscalCode,
        Column::CompanyName,
        Column::VatNumber,
    ];

    /// Zero-based position in [`Column::ALL`].
    pub fn index(self) -> usize {
        match self {
            Column::ComplaintNumber => 0,
            Column::Name => 1,
            Column::Surname => 2,
            Column::FiscalCode => 3,
            Column::CompanyName => 4,
            Column::VatNumber => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Column> {
        Column::ALL.get(index).copied()
    }
}

/// Flat, table-ready projection of a [`ComplaintRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayRow {
    /// Row key. Empty when the record carried no `_id`.
    pub id: String,
    pub complaint_number: String,
    pub name: String,
    pub surname: String,
    pub fiscal_code: String,
    pub company_name: String,
    pub vat_number: String,
}

impl DisplayRow {
    /// Flattens a record, taking filer details from the first element of each list.
    pub fn from_record(record: &ComplaintRecord) -> Self {
        let person = record.natural_persons.as_deref().and_then(<[_]>::first);
        let entity = record.legal_entities.as_deref().and_then(<[_]>::first);

        Self {
            id: record
                .id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            complaint_number: cell_text(record.complaint_number.as_ref()),
            name: filer_text(person.and_then(|p| p.name.as_ref())),
            surname: filer_text(person.and_then(|p| p.surname.as_ref())),
            fiscal_code: filer_text(person.and_then(|p| p.fiscal_code.as_ref())),
            company_name: filer_text(entity.and_then(|e| e.company_name.as_ref())),
            vat_number: filer_text(entity.and_then(|e| e.vat_number.as_ref())),
        }
    }

    pub fn cell(&self, column: Column) -> &str {
        match column {
            Column::ComplaintNumber => &self.complaint_number,
            Column::Name => &self.name,
            Column::Surname => &self.surname,
            Column::FiscalCode => &self.fiscal_code,
            Column::CompanyName => &self.company_name,
            Column::VatNumber => &self.vat_number,
        }
    }
}

/// Maps every record in order; the result replaces the previous row set wholesale.
pub fn map_records(records: &[ComplaintRecord]) -> Vec<DisplayRow> {
    records.iter().map(DisplayRow::from_record).collect()
}

fn cell_text(value: Option<&Scalar>) -> String {
    match value {
        Some(value) if !value.is_empty_text() => value.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

// Filer fields fall back on any falsy value, not just a missing one.
fn filer_text(value: Option<&Scalar>) -> String {
    match value {
        Some(value) if !value.is_falsy() => value.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_index_round_trips() {
        for column in Column::ALL {
            assert_eq!(Column::from_index(column.index()), Some(column));
        }
        assert_eq!(Column::from_index(6), None);
    }

    #[test]
    fn empty_record_is_all_placeholders() {
        let row = DisplayRow::from_record(&ComplaintRecord::default());
        assert_eq!(row.id, "");
        for column in Column::ALL {
            assert_eq!(row.cell(column), PLACEHOLDER);
        }
    }
}
