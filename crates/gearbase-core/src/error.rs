use thiserror::Error as ThisError;

///
/// ModelError
///
/// Failure surface of the model lifecycle contract. Field assignment itself
/// never fails (falsy input coerces to the declared default); only applying
/// a payload that is not shaped like the entity can.
///

#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("payload is not a JSON object")]
    NotAnObject,

    #[error("decode error: {0}")]
    Decode(String),
}
