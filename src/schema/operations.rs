use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::fakers;

/// The backend reports amounts either as a number or a formatted string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

/// Server-assigned identifier, numeric or string depending on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperationId {
    Number(i64),
    Text(String),
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationId::Number(n) => write!(f, "{n}"),
            OperationId::Text(s) => f.write_str(s),
        }
    }
}

/// One transaction record as returned by the backend. The wire field
/// `transactionDate` maps to `transaction_date` in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub id: OperationId,
    pub debit: Option<Amount>,
    pub credit: Option<Amount>,
    pub category: String,
    pub description: String,
    #[serde(rename = "transactionDate")]
    pub transaction_date: NaiveDate,
}

/// Create payload. `Default` randomizes every field so tests need not
/// hardcode data; serialization keeps explicit nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOperationRequest {
    pub debit: Option<Amount>,
    pub credit: Option<Amount>,
    pub category: String,
    pub description: String,
    #[serde(rename = "transactionDate")]
    pub transaction_date: NaiveDate,
}

impl Default for CreateOperationRequest {
    fn default() -> Self {
        Self {
            debit: Some(Amount::Number(fakers::money())),
            credit: Some(Amount::Number(fakers::money())),
            category: fakers::category(),
            description: fakers::sentence(),
            transaction_date: fakers::date(),
        }
    }
}

/// Update payload. Any subset of fields may be supplied; unset fields are
/// omitted from the outgoing JSON rather than sent as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOperationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debit: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "transactionDate", skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<NaiveDate>,
}

impl Default for UpdateOperationRequest {
    fn default() -> Self {
        Self {
            debit: Some(Amount::Number(fakers::money())),
            credit: Some(Amount::Number(fakers::money())),
            category: Some(fakers::category()),
            description: Some(fakers::sentence()),
            transaction_date: Some(fakers::date()),
        }
    }
}

impl UpdateOperationRequest {
    /// All fields unset; start here when building a partial update.
    pub fn empty() -> Self {
        Self {
            debit: None,
            credit: None,
            category: None,
            description: None,
            transaction_date: None,
        }
    }
}

/// Draft 2020-12 schema for a single operation. `id` is required on top of
/// every create field; `transactionDate` must be a date string.
pub fn operation_json_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "properties": {
            "id": {"type": ["integer", "string"]},
            "debit": {"type": ["number", "string", "null"]},
            "credit": {"type": ["number", "string", "null"]},
            "category": {"type": "string"},
            "description": {"type": "string"},
            "transactionDate": {"type": "string", "format": "date"}
        },
        "required": ["id", "debit", "credit", "category", "description", "transactionDate"]
    })
}

/// Schema for the operations collection endpoint.
pub fn operations_json_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "array",
        "items": operation_json_schema()
    })
}
