use calc_study_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("host environment error: {0}")]
    Host(String),
    #[error("catalog load error: {0}")]
    CatalogLoad(String),
}
