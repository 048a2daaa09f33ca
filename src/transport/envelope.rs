use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::ApiError;

#[derive(Debug, Clone)]
/// Raw status/body pair produced by the response classifier.
///
/// The body bytes are preserved exactly as received from the transport;
/// resource operations decode them into their typed results. Errors that
/// carry remote diagnostics keep the envelope attached so callers can
/// inspect the status and body themselves.
pub struct Envelope {
    status: u16,
    body: Vec<u8>,
}

impl Envelope {
    pub(crate) fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// HTTP status code of the exchange.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Borrow the raw response body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consume the envelope and take the raw response body.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ClassifyError {
    #[error("API error: {error}")]
    Api { error: ApiError, response: Envelope },

    #[error("invalid error response: {source}")]
    Decode {
        source: serde_json::Error,
        response: Envelope,
    },
}

/// Classify a raw HTTP exchange into a success envelope or a remote failure.
///
/// Statuses in `[200, 300)` are success. `404` is success-shaped as well:
/// Postmark uses it for legitimate "record absent" queries, so absence is
/// reported through the body rather than as an error at this layer. Every
/// other status carries a structured [`ApiError`] payload; a body that
/// fails to parse as one becomes [`ClassifyError::Decode`] with the raw
/// envelope preserved.
pub(crate) fn classify_response(status: u16, body: Vec<u8>) -> Result<Envelope, ClassifyError> {
    if (200..300).contains(&status) || status == 404 {
        return Ok(Envelope::new(status, body));
    }

    match serde_json::from_slice::<ApiError>(&body) {
        Ok(error) => Err(ClassifyError::Api {
            error,
            response: Envelope::new(status, body),
        }),
        Err(source) => Err(ClassifyError::Decode {
            source,
            response: Envelope::new(status, body),
        }),
    }
}

pub(crate) fn encode_json_body<T: Serialize>(body: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(body)
}

pub(crate) fn decode_json_body<T: DeserializeOwned>(
    response: &Envelope,
) -> Result<T, serde_json::Error> {
    serde_json::from_slice(response.body())
}

#[cfg(test)]
mod tests {
    use crate::domain::ErrorCode;

    use super::*;

    #[test]
    fn classify_success_passes_body_through_unchanged() {
        let body = br#"{"ID":123,"Name":"Test"}"#.to_vec();

        let envelope = classify_response(200, body.clone()).unwrap();
        assert_eq!(envelope.status(), 200);
        assert_eq!(envelope.body(), body.as_slice());

        let envelope = classify_response(299, b"[]".to_vec()).unwrap();
        assert_eq!(envelope.status(), 299);
    }

    #[test]
    fn classify_not_found_is_success_shaped() {
        let body = br#"{"ErrorCode":0,"Message":"not found"}"#.to_vec();

        let envelope = classify_response(404, body.clone()).unwrap();
        assert_eq!(envelope.status(), 404);
        assert_eq!(envelope.body(), body.as_slice());
    }

    #[test]
    fn classify_decodes_application_error() {
        let body = br#"{"ErrorCode":300,"Message":"Invalid email"}"#.to_vec();

        let err = classify_response(422, body.clone()).unwrap_err();
        match err {
            ClassifyError::Api { error, response } => {
                assert_eq!(error.error_code, ErrorCode::new(300));
                assert_eq!(error.message, "Invalid email");
                assert_eq!(response.status(), 422);
                assert_eq!(response.body(), body.as_slice());
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn classify_preserves_undecodable_error_body() {
        let err = classify_response(500, b"upstream blew up".to_vec()).unwrap_err();
        match err {
            ClassifyError::Decode { response, .. } => {
                assert_eq!(response.status(), 500);
                assert_eq!(response.body(), b"upstream blew up");
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn classify_treats_redirect_statuses_as_errors() {
        let err = classify_response(301, br#"{"ErrorCode":0,"Message":""}"#.to_vec()).unwrap_err();
        assert!(matches!(err, ClassifyError::Api { .. }));
    }

    #[test]
    fn classify_accepts_partial_error_payloads() {
        // Postmark error bodies with missing fields decode to defaults
        // rather than failing classification.
        let err = classify_response(422, b"{}".to_vec()).unwrap_err();
        match err {
            ClassifyError::Api { error, .. } => {
                assert!(error.error_code.is_ok());
                assert_eq!(error.message, "");
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }
}
