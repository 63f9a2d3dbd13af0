use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use super::errors::CompanyIdError;
use super::errors::CompanyNameError;
use super::errors::CompanyTypeError;
use super::errors::DescriptionError;
use super::errors::EmployeesAmountError;
use crate::domain::user::models::UserId;

/// Company aggregate entity.
///
/// `owner_id` is the ownership relation: only that identity may delete the
/// company.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: CompanyId,
    pub name: CompanyName,
    pub description: Description,
    pub employees_amount: EmployeesAmount,
    pub registered: bool,
    pub company_type: CompanyType,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Company unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompanyId(pub Uuid);

impl CompanyId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a company ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, CompanyIdError> {
        Uuid::parse_str(s)
            .map(CompanyId)
            .map_err(|e| CompanyIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for CompanyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Company name value type
///
/// Non-blank, at most 15 characters. Names are unique across all companies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyName(String);

impl CompanyName {
    const MAX_LENGTH: usize = 15;

    pub fn new(name: String) -> Result<Self, CompanyNameError> {
        if name.trim().is_empty() {
            return Err(CompanyNameError::Empty);
        }

        let length = name.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(CompanyNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Free-text description, at most 3000 characters. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Description(String);

impl Description {
    const MAX_LENGTH: usize = 3000;

    pub fn new(description: String) -> Result<Self, DescriptionError> {
        let length = description.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(DescriptionError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(description))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeesAmount(i32);

impl EmployeesAmount {
    pub fn new(amount: i32) -> Result<Self, EmployeesAmountError> {
        if amount <= 0 {
            return Err(EmployeesAmountError::NotPositive(amount));
        }
        Ok(Self(amount))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Legal form of a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyType {
    Corporations,
    NonProfit,
    Cooperative,
    SoleProprietorship,
}

impl CompanyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyType::Corporations => "Corporations",
            CompanyType::NonProfit => "NonProfit",
            CompanyType::Cooperative => "Cooperative",
            CompanyType::SoleProprietorship => "Sole Proprietorship",
        }
    }
}

impl FromStr for CompanyType {
    type Err = CompanyTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(CompanyTypeError::Empty),
            "Corporations" => Ok(CompanyType::Corporations),
            "NonProfit" => Ok(CompanyType::NonProfit),
            "Cooperative" => Ok(CompanyType::Cooperative),
            "Sole Proprietorship" => Ok(CompanyType::SoleProprietorship),
            other => Err(CompanyTypeError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to create a company. The owner is supplied separately by the caller's identity.
#[derive(Debug, Clone)]
pub struct CreateCompanyCommand {
    pub name: CompanyName,
    pub description: Description,
    pub employees_amount: EmployeesAmount,
    pub registered: bool,
    pub company_type: CompanyType,
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateCompanyCommand {
    pub name: Option<CompanyName>,
    pub description: Option<Description>,
    pub employees_amount: Option<EmployeesAmount>,
    pub registered: Option<bool>,
    pub company_type: Option<CompanyType>,
}

impl UpdateCompanyCommand {
    /// Apply the supplied fields to `company`.
    pub fn apply_to(self, company: &mut Company) {
        if let Some(name) = self.name {
            company.name = name;
        }

        if let Some(description) = self.description {
            company.description = description;
        }

        if let Some(employees_amount) = self.employees_amount {
            company.employees_amount = employees_amount;
        }

        if let Some(registered) = self.registered {
            company.registered = registered;
        }

        if let Some(company_type) = self.company_type {
            company.company_type = company_type;
        }
    }
}
