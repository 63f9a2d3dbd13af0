pub mod company;
pub mod user;

pub use company::PostgresCompanyRepository;
pub use user::PostgresUserRepository;
