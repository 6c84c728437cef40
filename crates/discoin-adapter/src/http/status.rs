/*
[INPUT]:  HTTP status code and response body of a finished request
[OUTPUT]: Success or the typed error the operation documents
[POS]:    HTTP layer - per-operation status code tables
[UPDATE]: When an endpoint starts returning a new status code
*/

use reqwest::StatusCode;
use tracing::warn;

use crate::http::DiscoinError;
use crate::types::Status;

/// Error category a status code maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Failure {
    Unauthorized,
    NotFound,
    Rejected,
    Domain,
}

/// Fixed mapping from status code to outcome for one operation
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatusTable {
    pub success: StatusCode,
    pub failures: &'static [(u16, Failure)],
}

impl StatusTable {
    /// `None` when `status` is the success code
    pub(crate) fn classify(&self, status: StatusCode, body: &str) -> Option<DiscoinError> {
        if status == self.success {
            return None;
        }

        let failure = self
            .failures
            .iter()
            .find(|(code, _)| *code == status.as_u16())
            .map(|(_, failure)| *failure);

        let err = match failure {
            Some(Failure::Unauthorized) => DiscoinError::Unauthorized,
            Some(Failure::NotFound) => DiscoinError::NotFound,
            Some(Failure::Rejected) => DiscoinError::Rejected(parse_status(status, body)),
            Some(Failure::Domain) => DiscoinError::DomainError(parse_status(status, body)),
            None => {
                warn!(code = status.as_u16(), "unmapped status code from Discoin API");
                let message = match status.canonical_reason() {
                    Some(reason) => reason.to_string(),
                    None => body.to_string(),
                };
                DiscoinError::unknown(status, message)
            }
        };
        Some(err)
    }
}

fn parse_status(status: StatusCode, body: &str) -> Status {
    match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) if body.trim().is_empty() => {
            Status::from_raw(status.canonical_reason().unwrap_or_default())
        }
        Err(_) => Status::from_raw(body.trim()),
    }
}

const CREATE: &[(u16, Failure)] = &[
    (400, Failure::Domain),
    (401, Failure::Unauthorized),
    (403, Failure::Rejected),
];

/// `POST transactions` (V3)
pub(crate) const CREATE_V3: StatusTable = StatusTable {
    success: StatusCode::CREATED,
    failures: CREATE,
};

/// `POST transaction` (V2)
pub(crate) const CREATE_V2: StatusTable = StatusTable {
    success: StatusCode::OK,
    failures: CREATE,
};

/// `POST transaction/reverse` (V2)
pub(crate) const REVERSE: StatusTable = StatusTable {
    success: StatusCode::OK,
    failures: &[
        (400, Failure::Domain),
        (401, Failure::Unauthorized),
        (403, Failure::Rejected),
        (404, Failure::NotFound),
    ],
};

/// Single transaction or receipt lookup
pub(crate) const LOOKUP: StatusTable = StatusTable {
    success: StatusCode::OK,
    failures: &[(401, Failure::Unauthorized), (404, Failure::NotFound)],
};

/// Listings and the handled update
pub(crate) const AUTHORIZED: StatusTable = StatusTable {
    success: StatusCode::OK,
    failures: &[(401, Failure::Unauthorized)],
};
