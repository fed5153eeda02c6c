use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecorateError {
    /// The record's storage is a closed native shape and cannot host the
    /// metadata slot. Remedy: project the record into an open field-map
    /// form, then decorate the projection.
    #[error(
        "cannot attach presentation metadata to a fixed {shape} record: \
         project it into an open field-map record first, then decorate the projection"
    )]
    FixedType { shape: &'static str },

    /// Any other failure from the underlying attachment mechanism,
    /// propagated verbatim.
    #[error("metadata attachment failed: {0}")]
    Attachment(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DecorateError>;
