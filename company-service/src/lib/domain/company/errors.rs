use thiserror::Error;

use super::models::CompanyId;

/// Error type for CompanyId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompanyIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error type for CompanyName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompanyNameError {
    #[error("Company name is empty")]
    Empty,

    #[error("Company name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescriptionError {
    #[error("Description too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmployeesAmountError {
    #[error("Company employees amount must be positive, got {0}")]
    NotPositive(i32),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompanyTypeError {
    #[error("Company type is empty")]
    Empty,

    #[error("Unknown company type: {0}")]
    Unknown(String),
}

/// Top-level error type for all company-related operations
#[derive(Debug, Clone, Error)]
pub enum CompanyError {
    #[error("Invalid company ID: {0}")]
    InvalidCompanyId(#[from] CompanyIdError),

    #[error("Invalid company name: {0}")]
    InvalidName(#[from] CompanyNameError),

    #[error("Invalid description: {0}")]
    InvalidDescription(#[from] DescriptionError),

    #[error("Invalid employees amount: {0}")]
    InvalidEmployeesAmount(#[from] EmployeesAmountError),

    #[error("Invalid company type: {0}")]
    InvalidType(#[from] CompanyTypeError),

    #[error("Company not found: {0}")]
    NotFound(CompanyId),

    /// Missing, or owned by someone else. Rendered exactly like `NotFound`.
    #[error("Company not found: {0}")]
    NotFoundOrForbidden(CompanyId),

    #[error("Company name already exists: {0}")]
    NameAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
