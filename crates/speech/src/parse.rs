//! Decoding of the recognition response envelope.

use serde_json::Value;

use crate::error::SpeechError;
use crate::model::SpeechResponse;

/// Fields read from every NBest hypothesis, in output order.
const NBEST_FIELDS: [&str; 7] = [
    "Hypothesis",
    "LanguageId",
    "Confidence",
    "Grade",
    "ResultText",
    "Words",
    "WordScores",
];

/// Parse a successful server response into a [`SpeechResponse`].
///
/// The body must be a JSON object carrying a `Recognition` envelope. The
/// envelope's `ResponseId` and `Status` always map to the `ResponseID` and
/// `Status` attributes. When `Status` is exactly `"OK"`, every hypothesis
/// in `NBest` contributes its seven fields in fixed order, appended as new
/// entries (earlier hypotheses are never overwritten). Any other status
/// yields just the two attributes and `NBest` is not read at all.
///
/// Malformed JSON or a missing/non-string required field is an error; no
/// partial result is returned.
pub fn parse_success(body: &str) -> Result<SpeechResponse, SpeechError> {
    let document: Value = serde_json::from_str(body)?;
    let recognition = document
        .get("Recognition")
        .and_then(Value::as_object)
        .ok_or(SpeechError::MissingField("Recognition"))?;

    let mut response = SpeechResponse::new();

    let response_id = recognition
        .get("ResponseId")
        .and_then(Value::as_str)
        .ok_or(SpeechError::MissingField("ResponseId"))?;
    response.add_attribute("ResponseID", response_id);

    let status = recognition
        .get("Status")
        .and_then(Value::as_str)
        .ok_or(SpeechError::MissingField("Status"))?;
    response.add_attribute("Status", status);

    if status == "OK" {
        let n_best = recognition
            .get("NBest")
            .and_then(Value::as_array)
            .ok_or(SpeechError::MissingField("NBest"))?;

        for hypothesis in n_best {
            let hypothesis = hypothesis
                .as_object()
                .ok_or(SpeechError::MissingField("NBest"))?;
            for name in NBEST_FIELDS {
                let value = hypothesis
                    .get(name)
                    .and_then(Value::as_str)
                    .ok_or(SpeechError::MissingField(name))?;
                response.add_attribute(name, value);
            }
        }
    }

    Ok(response)
}
