// soapdump - core/correlate.rs
//
// Response parsing and positional request/response correlation.
//
// Pairing is by ordinal position only: request i is joined with response i.
// If a response is missing from the log (or an extra one was captured),
// every later pairing shifts. Request payloads carry no identifier shared
// with the response, so there is nothing better to join on.

use crate::core::extract::{FieldExtractor, PatternExtractor};
use crate::core::model::{FieldSource, ResponseRecord, TransactionRecord, SCHEMA};

/// Build one `ResponseRecord` per response fragment, in the same order.
pub fn parse_responses<S: AsRef<str>>(fragments: &[S]) -> Vec<ResponseRecord> {
    parse_responses_with(&PatternExtractor::new(), fragments)
}

/// `parse_responses` with a caller-supplied extractor.
pub fn parse_responses_with<E, S>(extractor: &E, fragments: &[S]) -> Vec<ResponseRecord>
where
    E: FieldExtractor + ?Sized,
    S: AsRef<str>,
{
    fragments
        .iter()
        .map(|fragment| {
            let fragment = fragment.as_ref();
            let mut record = ResponseRecord::default();
            for spec in SCHEMA {
                if let FieldSource::ResponseTag(tag) = spec.source {
                    if let Some(slot) = record.field_mut(spec.field) {
                        *slot = extractor.tag_text(fragment, tag);
                    }
                }
            }
            record
        })
        .collect()
}

/// Join each request fragment with the response at the same index.
///
/// Sequence numbers run 1..=N in request order. Requests past the end of
/// `responses` keep empty response fields; surplus responses are ignored.
pub fn parse_transactions<S: AsRef<str>>(
    request_fragments: &[S],
    responses: &[ResponseRecord],
) -> Vec<TransactionRecord> {
    parse_transactions_with(&PatternExtractor::new(), request_fragments, responses)
}

/// `parse_transactions` with a caller-supplied extractor.
pub fn parse_transactions_with<E, S>(
    extractor: &E,
    request_fragments: &[S],
    responses: &[ResponseRecord],
) -> Vec<TransactionRecord>
where
    E: FieldExtractor + ?Sized,
    S: AsRef<str>,
{
    if request_fragments.len() != responses.len() {
        tracing::warn!(
            requests = request_fragments.len(),
            responses = responses.len(),
            "Request and response counts differ; positional pairing may be misaligned"
        );
    }

    request_fragments
        .iter()
        .enumerate()
        .map(|(index, fragment)| {
            let fragment = fragment.as_ref();
            let mut record = TransactionRecord::new(index as u64 + 1);
            let response = responses.get(index);

            for spec in SCHEMA {
                let value = match spec.source {
                    FieldSource::Sequence => continue,
                    FieldSource::RequestTag(tag) => extractor.tag_text(fragment, tag),
                    FieldSource::RequestAttribute(attr) => {
                        extractor.attribute_value(fragment, attr)
                    }
                    FieldSource::ResponseTag(_) => match response {
                        Some(r) => r.field(spec.field).to_string(),
                        None => continue,
                    },
                };
                if let Some(slot) = record.field_mut(spec.field) {
                    *slot = value;
                }
            }
            record
        })
        .collect()
}
