use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use board_service::domain::offer::errors::OfferError;
use board_service::domain::offer::models::Offer;
use board_service::domain::offer::ports::OfferRepository;
use board_service::domain::offer::ports::OfferServicePort;
use board_service::domain::offer::service::OfferService;
use board_service::domain::principal::errors::PrincipalError;
use board_service::domain::principal::models::Principal;
use board_service::domain::principal::models::PrincipalKind;
use board_service::domain::principal::ports::PrincipalRepository;
use board_service::domain::principal::ports::PrincipalServicePort;
use board_service::domain::principal::service::PrincipalService;
use board_service::inbound::http::router::create_router;
use serde_json::json;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TEST_JWT_EXPIRATION_HOURS: i64 = 168;

/// Test application that spawns a real server over in-memory stores
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
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

        let principal_repository = Arc::new(InMemoryPrincipalRepository::default());
        let offer_repository = Arc::new(InMemoryOfferRepository::default());

        let principal_service: Arc<dyn PrincipalServicePort> =
            Arc::new(PrincipalService::new(principal_repository));
        let offer_service: Arc<dyn OfferServicePort> =
            Arc::new(OfferService::new(offer_repository));

        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET));

        let router = create_router(
            principal_service,
            offer_service,
            authenticator,
            TEST_JWT_EXPIRATION_HOURS,
        );

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_JWT_SECRET),
        }
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

    /// Register an account of the given kind, panicking on failure
    pub async fn register(&self, kind: PrincipalKind, email: &str, password: &str) {
        let path = match kind {
            PrincipalKind::Postulant => "/postulants",
            PrincipalKind::Company => "/companies",
        };
        let username: String = email
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect();

        let response = self
            .post(path)
            .json(&json!({
                "name": "Test Account",
                "username": username,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    }

    /// Log in and return the raw response
    pub async fn login(
        &self,
        kind: PrincipalKind,
        email: &str,
        password: &str,
    ) -> reqwest::Response {
        self.post("/login")
            .json(&json!({
                "type": kind.as_str(),
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// In-memory principal store, uniqueness rules matching the real schema
#[derive(Default)]
pub struct InMemoryPrincipalRepository {
    principals: Mutex<Vec<Principal>>,
}

#[async_trait]
impl PrincipalRepository for InMemoryPrincipalRepository {
    async fn create(&self, principal: Principal) -> Result<Principal, PrincipalError> {
        let mut principals = self.principals.lock().unwrap();

        if principals
            .iter()
            .any(|p| p.kind == principal.kind && p.email.as_str() == principal.email.as_str())
        {
            return Err(PrincipalError::EmailAlreadyExists(
                principal.email.as_str().to_string(),
            ));
        }
        if principals.iter().any(|p| {
            p.kind == principal.kind && p.username.as_str() == principal.username.as_str()
        }) {
            return Err(PrincipalError::UsernameAlreadyExists(
                principal.username.as_str().to_string(),
            ));
        }

        principals.push(principal.clone());
        Ok(principal)
    }

    async fn find_by_kind_and_email(
        &self,
        kind: PrincipalKind,
        email: &str,
    ) -> Result<Option<Principal>, PrincipalError> {
        let principals = self.principals.lock().unwrap();
        Ok(principals
            .iter()
            .find(|p| p.kind == kind && p.email.as_str() == email)
            .cloned())
    }

    async fn list_by_kind(&self, kind: PrincipalKind) -> Result<Vec<Principal>, PrincipalError> {
        let principals = self.principals.lock().unwrap();
        Ok(principals.iter().filter(|p| p.kind == kind).cloned().collect())
    }
}

/// In-memory offer store
#[derive(Default)]
pub struct InMemoryOfferRepository {
    offers: Mutex<Vec<Offer>>,
}

#[async_trait]
impl OfferRepository for InMemoryOfferRepository {
    async fn create(&self, offer: Offer) -> Result<Offer, OfferError> {
        let mut offers = self.offers.lock().unwrap();
        offers.push(offer.clone());
        Ok(offer)
    }

    async fn list_all(&self) -> Result<Vec<Offer>, OfferError> {
        let offers = self.offers.lock().unwrap();
        Ok(offers.clone())
    }
}
