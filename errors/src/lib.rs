use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Common error for expanding URI templates
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum UriTemplateError {
    #[error("ExpandError: {0}")]
    ExpandError(ExpandError),
}

#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum ExpandError {
    #[error("Expansion is malformed: expected `op|arg|vars`, found {fields} fields")]
    MalformedExpansion { fields: usize },
}

/// Error returned when an operator name is not in the fixed set
///
/// Never fatal during substitution: an unrecognized operator expands to
/// the empty string, matching the draft's treatment of future operators.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
#[error("Unknown operator: {0}")]
pub struct UnknownOperatorError(pub String);

macro_rules! impl_from_error {
    ($($error:tt),+) => {$(
        impl From<$error> for UriTemplateError {
            fn from(e: $error) -> Self {
                UriTemplateError::$error(e)
            }
        }
    )+};
}

impl_from_error!(ExpandError);
