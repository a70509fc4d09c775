/// The outcome of a successful create, update or delete.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation<T> {
    /// Human-readable confirmation
    pub message: String,
    /// The affected record
    pub record: T,
}

impl<T> Mutation<T> {
    pub fn new(message: impl Into<String>, record: T) -> Self {
        Self {
            message: message.into(),
            record,
        }
    }
}
