use thiserror::Error;

use crate::booking::validation::FieldId;

/// Everything that can stop the booking flow. The `Display` text doubles as
/// the message shown to the user.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Please select a service to continue.")]
    NoServiceSelected,

    #[error("Please fill in all required fields.")]
    MissingRequiredFields(Vec<FieldId>),

    #[error("unknown service id `{0}`")]
    UnknownServiceId(String),

    #[error("failed to parse service catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}
