use std::fmt;

use serde::Deserialize;

/// A JSON scalar as delivered by the complaints API.
///
/// Identifiers and complaint numbers arrive as strings or numbers depending on
/// the record, so they are kept as-is and rendered through [`fmt::Display`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl Scalar {
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Scalar::Text(text) if text.is_empty())
    }

    /// `""`, `0`, `0.0`, `NaN` and `false`: values a filer field treats as absent.
    pub fn is_falsy(&self) -> bool {
        match self {
            Scalar::Integer(value) => *value == 0,
            Scalar::Float(value) => *value == 0.0 || value.is_nan(),
            Scalar::Text(text) => text.is_empty(),
            Scalar::Bool(value) => !value,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(value) => write!(f, "{value}"),
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::Text(value) => f.write_str(value),
            Scalar::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_owned())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

/// One complaint as returned by `GET /api/reclami/search`.
///
/// Unknown fields are ignored; both filer lists may be missing or `null`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ComplaintRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<Scalar>,
    #[serde(rename = "NumReclamo", default)]
    pub complaint_number: Option<Scalar>,
    #[serde(rename = "personaFisica", default)]
    pub natural_persons: Option<Vec<NaturalPerson>>,
    #[serde(rename = "personaGiuridica", default)]
    pub legal_entities: Option<Vec<LegalEntity>>,
}

/// Individual filer attached to a complaint.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NaturalPerson {
    #[serde(rename = "nome", default)]
    pub name: Option<Scalar>,
    #[serde(rename = "cognome", default)]
    pub surname: Option<Scalar>,
    #[serde(rename = "codFiscale", default)]
    pub fiscal_code: Option<Scalar>,
}

/// Company filer attached to a complaint.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LegalEntity {
    #[serde(rename = "ragioneSociale", default)]
    pub company_name: Option<Scalar>,
    #[serde(rename = "pIVA", default)]
    pub vat_number: Option<Scalar>,
}
