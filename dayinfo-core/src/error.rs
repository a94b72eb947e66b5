use thiserror::Error;

/// User-facing message for validation failures, local or server-confirmed.
pub const MSG_VALIDATION: &str =
    "Перевір дату та місто — такий запит не пройшов перевірку.";

/// User-facing message for every non-validation failure. Raw detail stays in
/// the logs.
pub const MSG_RETRY: &str = "Не вдалося завантажити дані, спробуй ще раз.";

/// Shown when a submission is attempted while another request is in flight.
pub const MSG_BUSY: &str = "Зачекай — попередній запит ще виконується.";

/// Input rejected before any network call is made.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("birth date is required")]
    EmptyDate,

    #[error("'{0}' is not a calendar date (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("unknown city '{0}'")]
    UnknownCity(String),
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        MSG_VALIDATION
    }
}

/// Classified failure of a single day-info fetch.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The server answered 400: it agrees the date/city was malformed.
    #[error("server rejected the query as invalid")]
    ValidationRejected,

    /// Any other non-2xx status.
    #[error("day-info API returned status {0}")]
    Api(u16),

    /// 2xx with a body that does not parse as a day-info record.
    #[error("day-info response body could not be parsed")]
    Parse(#[source] serde_json::Error),

    /// Transport failure: no usable response received.
    #[error("network failure while fetching day info")]
    Network(#[source] reqwest::Error),
}

impl ErrorKind {
    /// The single user-facing message for this failure category.
    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorKind::ValidationRejected => MSG_VALIDATION,
            ErrorKind::Api(_) | ErrorKind::Parse(_) | ErrorKind::Network(_) => MSG_RETRY,
        }
    }
}

/// Why a submission was rejected without starting a request.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a day-info request is already in flight")]
    Busy,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl SubmitError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Busy => MSG_BUSY,
            SubmitError::Invalid(err) => err.user_message(),
        }
    }
}
