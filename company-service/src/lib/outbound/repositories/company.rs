use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::Company;
use crate::domain::company::models::CompanyId;
use crate::domain::company::models::CompanyName;
use crate::domain::company::models::CompanyType;
use crate::domain::company::models::Description;
use crate::domain::company::models::EmployeesAmount;
use crate::domain::company::ports::CompanyRepository;
use crate::domain::user::models::UserId;

const SELECT_COMPANY: &str = r#"
    SELECT id, name, description, employees_amount, registered, company_type,
           owner_id, created_at, updated_at
    FROM companies
"#;

pub struct PostgresCompanyRepository {
    pool: PgPool,
}

impl PostgresCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CompanyRow {
    id: Uuid,
    name: String,
    description: String,
    employees_amount: i32,
    registered: bool,
    company_type: String,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CompanyRow> for Company {
    type Error = CompanyError;

    fn try_from(row: CompanyRow) -> Result<Self, Self::Error> {
        Ok(Company {
            id: CompanyId(row.id),
            name: CompanyName::new(row.name)?,
            description: Description::new(row.description)?,
            employees_amount: EmployeesAmount::new(row.employees_amount)?,
            registered: row.registered,
            company_type: row.company_type.parse::<CompanyType>()?,
            owner_id: UserId(row.owner_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn map_write_error(e: sqlx::Error, company: &Company) -> CompanyError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return CompanyError::NameAlreadyExists(company.name.as_str().to_string());
        }
    }
    CompanyError::DatabaseError(e.to_string())
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn create(&self, company: Company) -> Result<Company, CompanyError> {
        sqlx::query(
            r#"
            INSERT INTO companies (id, name, description, employees_amount, registered,
                                   company_type, owner_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(company.id.0)
        .bind(company.name.as_str())
        .bind(company.description.as_str())
        .bind(company.employees_amount.value())
        .bind(company.registered)
        .bind(company.company_type.as_str())
        .bind(company.owner_id.0)
        .bind(company.created_at)
        .bind(company.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &company))?;

        Ok(company)
    }

    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, CompanyError> {
        let sql = format!("{SELECT_COMPANY} WHERE id = $1");

        sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CompanyError::DatabaseError(e.to_string()))?
            .map(Company::try_from)
            .transpose()
    }

    async fn find_by_id_and_owner(
        &self,
        id: CompanyId,
        owner_id: UserId,
    ) -> Result<Option<Company>, CompanyError> {
        // Ownership is part of the lookup itself, not a check on the fetched row.
        let sql = format!("{SELECT_COMPANY} WHERE id = $1 AND owner_id = $2");

        sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(id.0)
            .bind(owner_id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CompanyError::DatabaseError(e.to_string()))?
            .map(Company::try_from)
            .transpose()
    }

    async fn update(&self, company: Company) -> Result<Company, CompanyError> {
        let result = sqlx::query(
            r#"
            UPDATE companies
            SET name = $2, description = $3, employees_amount = $4, registered = $5,
                company_type = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(company.id.0)
        .bind(company.name.as_str())
        .bind(company.description.as_str())
        .bind(company.employees_amount.value())
        .bind(company.registered)
        .bind(company.company_type.as_str())
        .bind(company.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &company))?;

        if result.rows_affected() == 0 {
            return Err(CompanyError::NotFound(company.id));
        }

        Ok(company)
    }

    async fn delete(&self, id: CompanyId) -> Result<(), CompanyError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| CompanyError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CompanyError::NotFound(id));
        }

        Ok(())
    }
}
