use std::collections::HashMap;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use auth::PasswordHasher;
use auth::TokenCodec;
use company_service::domain::company::errors::CompanyError;
use company_service::domain::company::events::CompanyCreatedEvent;
use company_service::domain::company::events::CompanyDeletedEvent;
use company_service::domain::company::events::CompanyUpdatedEvent;
use company_service::domain::company::models::Company;
use company_service::domain::company::models::CompanyId;
use company_service::domain::company::ports::CompanyRepository;
use company_service::domain::company::ports::EventPublisher;
use company_service::domain::company::service::CompanyService;
use company_service::domain::errors::EventPublisherError;
use company_service::domain::user::errors::UserError;
use company_service::domain::user::models::CreateUserCommand;
use company_service::domain::user::models::User;
use company_service::domain::user::models::UserId;
use company_service::domain::user::models::Username;
use company_service::domain::user::ports::UserRepository;
use company_service::domain::user::ports::UserServicePort;
use company_service::domain::user::service::UserService;
use company_service::inbound::http::router::create_router;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns the real router over in-memory storage.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
    pub users: Arc<InMemoryUserRepository>,
    pub companies: Arc<InMemoryCompanyRepository>,
    pub events: Arc<RecordingEventPublisher>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let jwt_handler = JwtHandler::with_default_ttl(TEST_SECRET).unwrap();
        let authenticator = Arc::new(Authenticator::new(
            PasswordHasher::new(),
            jwt_handler.clone(),
        ));
        let token_codec: Arc<dyn TokenCodec> = Arc::new(jwt_handler.clone());

        let users = Arc::new(InMemoryUserRepository::default());
        let companies = Arc::new(InMemoryCompanyRepository::default());
        let events = Arc::new(RecordingEventPublisher::default());

        let user_service = Arc::new(UserService::new(users.clone(), authenticator));
        let company_service = Arc::new(CompanyService::new(companies.clone(), events.clone()));

        let router = create_router(user_service.clone(), company_service, token_codec);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler,
            user_service,
            users,
            companies,
            events,
        }
    }

    /// Store a user whose password is hashed the same way the service does.
    pub async fn seed_user(&self, username: &str, password: &str) -> User {
        self.user_service
            .create_user(CreateUserCommand::new(
                format!("{} name", username),
                Username::new(username.to_string()).unwrap(),
                password.to_string(),
            ))
            .await
            .expect("Failed to seed user")
    }

    /// Log in over HTTP and return the issued token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/v1/auth/login")
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"].as_str().unwrap().to_string()
    }

    /// Create a company over HTTP as the token's subject and return its id.
    pub async fn create_company(&self, token: &str, name: &str) -> String {
        let response = self
            .post_authenticated("/v1/companies", token)
            .json(&serde_json::json!({
                "name": name,
                "description": "Test company",
                "employees_amount": 10,
                "registered": true,
                "type": "Corporations"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["id"].as_str().unwrap().to_string()
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .patch(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
    calls: AtomicUsize,
}

impl InMemoryUserRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        self.record_call();
        let mut users = self.users.lock().unwrap();

        if users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        self.record_call();
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        self.record_call();
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| &u.username == username)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryCompanyRepository {
    companies: Mutex<HashMap<CompanyId, Company>>,
    calls: AtomicUsize,
}

impl InMemoryCompanyRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn contains(&self, id: &str) -> bool {
        let id = CompanyId::from_string(id).unwrap();
        self.companies.lock().unwrap().contains_key(&id)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn name_taken(companies: &HashMap<CompanyId, Company>, company: &Company) -> bool {
        companies
            .values()
            .any(|c| c.id != company.id && c.name == company.name)
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn create(&self, company: Company) -> Result<Company, CompanyError> {
        self.record_call();
        let mut companies = self.companies.lock().unwrap();

        if Self::name_taken(&companies, &company) {
            return Err(CompanyError::NameAlreadyExists(
                company.name.as_str().to_string(),
            ));
        }

        companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, CompanyError> {
        self.record_call();
        Ok(self.companies.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_id_and_owner(
        &self,
        id: CompanyId,
        owner_id: UserId,
    ) -> Result<Option<Company>, CompanyError> {
        self.record_call();
        Ok(self
            .companies
            .lock()
            .unwrap()
            .get(&id)
            .filter(|c| c.owner_id == owner_id)
            .cloned())
    }

    async fn update(&self, company: Company) -> Result<Company, CompanyError> {
        self.record_call();
        let mut companies = self.companies.lock().unwrap();

        if !companies.contains_key(&company.id) {
            return Err(CompanyError::NotFound(company.id));
        }
        if Self::name_taken(&companies, &company) {
            return Err(CompanyError::NameAlreadyExists(
                company.name.as_str().to_string(),
            ));
        }

        companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn delete(&self, id: CompanyId) -> Result<(), CompanyError> {
        self.record_call();
        self.companies
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(CompanyError::NotFound(id))
    }
}

/// Keeps the `event_type` of every published event.
#[derive(Default)]
pub struct RecordingEventPublisher {
    published: Mutex<Vec<String>>,
}

impl RecordingEventPublisher {
    pub fn published(&self) -> Vec<String> {
        self.published.lock().unwrap().clone()
    }

    fn record(&self, event_type: &str) {
        self.published.lock().unwrap().push(event_type.to_string());
    }
}

#[async_trait]
impl EventPublisher for RecordingEventPublisher {
    async fn publish_company_created(
        &self,
        _event: &CompanyCreatedEvent,
    ) -> Result<(), EventPublisherError> {
        self.record("company_created");
        Ok(())
    }

    async fn publish_company_updated(
        &self,
        _event: &CompanyUpdatedEvent,
    ) -> Result<(), EventPublisherError> {
        self.record("company_updated");
        Ok(())
    }

    async fn publish_company_deleted(
        &self,
        _event: &CompanyDeletedEvent,
    ) -> Result<(), EventPublisherError> {
        self.record("company_deleted");
        Ok(())
    }
}
