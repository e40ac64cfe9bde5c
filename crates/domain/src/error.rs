use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("entry id {0} appears more than once in the catalog")]
    DuplicateEntryId(u64),
}
