// soapdump - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
//
// The SCHEMA table is the single description of which output column comes
// from which tag or attribute; extraction, raw output, CSV headers, and help
// text all read from it.

use serde::Serialize;
use std::borrow::Cow;

// =============================================================================
// Fields and schema
// =============================================================================

/// Every column of a transaction record, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TransNum,
    Amount,
    Currency,
    FirstName,
    LastName,
    Street,
    City,
    State,
    Zip,
    CardType,
    CardLast4,
    ExpMonth,
    ExpYear,
    Cvv,
    TransactionId,
    Status,
    CorrelationId,
    ProcessedAmount,
}

/// Where the value of a column comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// 1-based position of the request in the log.
    Sequence,
    /// Text content of a tag in the request fragment.
    RequestTag(&'static str),
    /// Value of a quoted attribute anywhere in the request fragment.
    RequestAttribute(&'static str),
    /// Text content of a tag in the paired response fragment.
    ResponseTag(&'static str),
}

/// One row of the schema table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    /// Column name used in headers and documentation.
    pub column: &'static str,
    pub source: FieldSource,
    pub description: &'static str,
}

const fn spec(
    field: Field,
    column: &'static str,
    source: FieldSource,
    description: &'static str,
) -> FieldSpec {
    FieldSpec {
        field,
        column,
        source,
        description,
    }
}

/// Output columns in order, with their source tag or attribute names.
///
/// Tag names include their namespace prefix literally (`ebl:`); prefixes are
/// never resolved.
#[rustfmt::skip]
pub const SCHEMA: &[FieldSpec] = &[
    spec(Field::TransNum, "TRANS_NUM", FieldSource::Sequence, "Transaction sequence number"),
    spec(Field::Amount, "AMOUNT", FieldSource::RequestTag("ebl:OrderTotal"), "Order total amount"),
    spec(Field::Currency, "CURRENCY", FieldSource::RequestAttribute("currencyID"), "Currency code (USD, etc)"),
    spec(Field::FirstName, "FIRSTNAME", FieldSource::RequestTag("ebl:FirstName"), "Customer first name"),
    spec(Field::LastName, "LASTNAME", FieldSource::RequestTag("ebl:LastName"), "Customer last name"),
    spec(Field::Street, "STREET", FieldSource::RequestTag("ebl:Street1"), "Street address"),
    spec(Field::City, "CITY", FieldSource::RequestTag("ebl:CityName"), "City name"),
    spec(Field::State, "STATE", FieldSource::RequestTag("ebl:StateOrProvince"), "State/Province code"),
    spec(Field::Zip, "ZIP", FieldSource::RequestTag("ebl:PostalCode"), "Postal code"),
    spec(Field::CardType, "CCTYPE", FieldSource::RequestTag("ebl:CreditCardType"), "Credit card type (Visa, MasterCard, etc)"),
    spec(Field::CardLast4, "CCLAST4", FieldSource::RequestTag("ebl:CreditCardLastFourDigits"), "Last 4 digits of credit card"),
    spec(Field::ExpMonth, "EXPMONTH", FieldSource::RequestTag("ebl:ExpMonth"), "Card expiration month"),
    spec(Field::ExpYear, "EXPYEAR", FieldSource::RequestTag("ebl:ExpYear"), "Card expiration year"),
    spec(Field::Cvv, "CVV", FieldSource::RequestTag("ebl:CVV2"), "CVV code"),
    spec(Field::TransactionId, "TRANSID", FieldSource::ResponseTag("TransactionID"), "PayPal transaction ID"),
    spec(Field::Status, "STATUS", FieldSource::ResponseTag("Ack"), "Transaction status (Success/Failure)"),
    spec(Field::CorrelationId, "CORRID", FieldSource::ResponseTag("CorrelationID"), "Correlation ID"),
    spec(Field::ProcessedAmount, "PROC_AMOUNT", FieldSource::ResponseTag("Amount"), "Actually processed amount"),
];

/// Column names in output order (the raw-mode header).
pub fn column_names() -> impl Iterator<Item = &'static str> {
    SCHEMA.iter().map(|s| s.column)
}

// =============================================================================
// Records
// =============================================================================

/// Fields taken from one response fragment.
///
/// Every field is an empty string when the corresponding tag is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResponseRecord {
    pub transaction_id: String,
    pub status: String,
    pub correlation_id: String,
    pub processed_amount: String,
}

impl ResponseRecord {
    /// Value of a response-sourced field. Other fields read as empty.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::TransactionId => &self.transaction_id,
            Field::Status => &self.status,
            Field::CorrelationId => &self.correlation_id,
            Field::ProcessedAmount => &self.processed_amount,
            _ => "",
        }
    }

    /// Mutable slot for a response-sourced field.
    pub fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::TransactionId => Some(&mut self.transaction_id),
            Field::Status => Some(&mut self.status),
            Field::CorrelationId => Some(&mut self.correlation_id),
            Field::ProcessedAmount => Some(&mut self.processed_amount),
            _ => None,
        }
    }
}

/// One request joined with the response at the same position.
///
/// `sequence_number` is 1-based and dense in request order. Missing values
/// are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    pub sequence_number: u64,
    pub amount: String,
    pub currency: String,
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub card_type: String,
    pub card_last4: String,
    pub exp_month: String,
    pub exp_year: String,
    pub cvv: String,
    pub transaction_id: String,
    pub status: String,
    pub correlation_id: String,
    pub processed_amount: String,
}

impl TransactionRecord {
    /// Create an empty record with the given sequence number.
    pub fn new(sequence_number: u64) -> Self {
        Self {
            sequence_number,
            ..Default::default()
        }
    }

    /// Text value of a column, as it appears in output.
    pub fn field(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::TransNum => Cow::Owned(self.sequence_number.to_string()),
            other => Cow::Borrowed(self.text_field(other).unwrap_or_default()),
        }
    }

    /// Mutable slot for a text column. `None` for the sequence number.
    pub fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        let slot = match field {
            Field::TransNum => return None,
            Field::Amount => &mut self.amount,
            Field::Currency => &mut self.currency,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Street => &mut self.street,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::Zip => &mut self.zip,
            Field::CardType => &mut self.card_type,
            Field::CardLast4 => &mut self.card_last4,
            Field::ExpMonth => &mut self.exp_month,
            Field::ExpYear => &mut self.exp_year,
            Field::Cvv => &mut self.cvv,
            Field::TransactionId => &mut self.transaction_id,
            Field::Status => &mut self.status,
            Field::CorrelationId => &mut self.correlation_id,
            Field::ProcessedAmount => &mut self.processed_amount,
        };
        Some(slot)
    }

    fn text_field(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::TransNum => return None,
            Field::Amount => &self.amount,
            Field::Currency => &self.currency,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Street => &self.street,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::Zip => &self.zip,
            Field::CardType => &self.card_type,
            Field::CardLast4 => &self.card_last4,
            Field::ExpMonth => &self.exp_month,
            Field::ExpYear => &self.exp_year,
            Field::Cvv => &self.cvv,
            Field::TransactionId => &self.transaction_id,
            Field::Status => &self.status,
            Field::CorrelationId => &self.correlation_id,
            Field::ProcessedAmount => &self.processed_amount,
        };
        Some(value.as_str())
    }

    /// All column values in schema order.
    pub fn values(&self) -> Vec<Cow<'_, str>> {
        SCHEMA.iter().map(|s| self.field(s.field)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_schema_has_eighteen_unique_columns() {
        assert_eq!(SCHEMA.len(), 18);
        let fields: HashSet<_> = SCHEMA.iter().map(|s| s.field).collect();
        assert_eq!(fields.len(), 18);
        let header = column_names().collect::<Vec<_>>().join("|");
        assert_eq!(
            header,
            "TRANS_NUM|AMOUNT|CURRENCY|FIRSTNAME|LASTNAME|STREET|CITY|STATE|ZIP|\
             CCTYPE|CCLAST4|EXPMONTH|EXPYEAR|CVV|TRANSID|STATUS|CORRID|PROC_AMOUNT"
        );
    }

    #[test]
    fn test_every_text_field_has_a_slot() {
        let mut record = TransactionRecord::new(7);
        for spec in SCHEMA {
            match spec.field {
                Field::TransNum => assert!(record.field_mut(spec.field).is_none()),
                f => {
                    *record.field_mut(f).unwrap() = spec.column.to_string();
                    assert_eq!(record.field(f), spec.column);
                }
            }
        }
        assert_eq!(record.field(Field::TransNum), "7");
    }

    #[test]
    fn test_response_record_ignores_request_fields() {
        let mut response = ResponseRecord::default();
        assert!(response.field_mut(Field::State).is_none());
        *response.field_mut(Field::Status).unwrap() = "Success".to_string();
        assert_eq!(response.field(Field::Status), "Success");
        assert_eq!(response.field(Field::City), "");
    }
}
