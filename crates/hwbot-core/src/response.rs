//! Shallow validation of the homework-status payload.
//!
//! Validation is key-presence-based by design: the API surface is tiny and
//! documented, so we check the container shape here and leave per-record
//! fields to [`parse_status`].

use serde_json::Value;

use crate::{domain::ReviewStatus, Error, Result};

/// Check the payload against the documented contract and return the homework
/// list unchanged.
pub fn check_response(payload: &Value) -> Result<&Vec<Value>> {
    let Some(obj) = payload.as_object() else {
        return Err(Error::MalformedResponse(format!(
            "top-level value is not an object: {payload}"
        )));
    };

    if !obj.contains_key("homeworks") {
        return Err(Error::MalformedResponse(
            "missing key 'homeworks'".to_string(),
        ));
    }
    if !obj.contains_key("current_date") {
        return Err(Error::MalformedResponse(
            "missing key 'current_date'".to_string(),
        ));
    }

    let Some(homeworks) = obj["homeworks"].as_array() else {
        return Err(Error::MalformedResponse(format!(
            "'homeworks' is not a list: {}",
            obj["homeworks"]
        )));
    };

    Ok(homeworks)
}

/// Extract the human-readable status line from one homework record.
pub fn parse_status(record: &Value) -> Result<String> {
    let name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(Error::MissingField("homework_name"))?;
    let status = record.get("status").ok_or(Error::MissingField("status"))?;

    let code = status.as_str().unwrap_or_default();
    let verdict = ReviewStatus::from_code(code)
        .ok_or_else(|| Error::UnknownStatus(status.to_string()))?
        .verdict();

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn check_response_rejects_non_object_payloads() {
        for payload in [json!([]), json!("text"), json!(42), json!(null)] {
            let err = check_response(&payload).unwrap_err();
            assert!(matches!(err, Error::MalformedResponse(_)), "{payload}");
        }
    }

    #[test]
    fn check_response_requires_both_keys() {
        let err = check_response(&json!({ "current_date": 1 })).unwrap_err();
        assert!(err.to_string().contains("homeworks"));

        let err = check_response(&json!({ "homeworks": [] })).unwrap_err();
        assert!(err.to_string().contains("current_date"));
    }

    #[test]
    fn check_response_rejects_non_list_homeworks() {
        let payload = json!({ "homeworks": {}, "current_date": 1 });
        let err = check_response(&payload).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn check_response_returns_records_unchanged() {
        let payload = json!({
            "homeworks": [{ "homework_name": "hw1", "status": "approved", "extra": true }],
            "current_date": 1_700_000_000,
        });
        let homeworks = check_response(&payload).unwrap();
        assert_eq!(homeworks.len(), 1);
        assert_eq!(homeworks[0]["extra"], json!(true));
    }

    #[test]
    fn parse_status_requires_name_and_status() {
        let err = parse_status(&json!({ "status": "approved" })).unwrap_err();
        assert!(matches!(err, Error::MissingField("homework_name")));

        let err = parse_status(&json!({ "homework_name": "hw" })).unwrap_err();
        assert!(matches!(err, Error::MissingField("status")));
    }

    #[test]
    fn parse_status_rejects_unknown_codes() {
        let record = json!({ "homework_name": "hw", "status": "resubmitted" });
        let err = parse_status(&record).unwrap_err();
        assert!(matches!(err, Error::UnknownStatus(_)));
        assert!(err.to_string().contains("resubmitted"));
    }

    #[test]
    fn parse_status_formats_the_verdict_line() {
        let record = json!({ "homework_name": "X", "status": "approved" });
        let line = parse_status(&record).unwrap();
        assert!(line.contains("\"X\""));
        assert!(line.contains(ReviewStatus::Approved.verdict()));
    }
}
