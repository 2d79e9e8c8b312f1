use crate::{
    abstract_trait::{DynHashing, DynJwtService, DynTokenRepository, DynUserRepository},
    config::REFRESH_TOKEN_DAYS,
    domain::{
        requests::{CreateToken, LoginRequest, NewUser, RegisterRequest},
        responses::{TokenPair, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use chrono::{Duration, Utc};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AuthService {
    users: DynUserRepository,
    tokens: DynTokenRepository,
    hash: DynHashing,
    jwt: DynJwtService,
}

impl AuthService {
    pub fn new(
        users: DynUserRepository,
        tokens: DynTokenRepository,
        hash: DynHashing,
        jwt: DynJwtService,
    ) -> Self {
        Self {
            users,
            tokens,
            hash,
            jwt,
        }
    }

    pub async fn signup(&self, req: &RegisterRequest) -> Result<TokenPair, ServiceError> {
        info!("🔐 Signup attempt for email: {}", req.email);

        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(ServiceError::Conflict("Email already registered".into()));
        }

        let password = self.hash.hash_password(&req.password).await?;

        let new_user = NewUser {
            username: req.username.clone(),
            email: req.email.clone(),
            password,
        };

        // A racing signup can still slip past the probe above; the unique
        // index reports it and we answer the same way.
        let user = self.users.create(&new_user).await.map_err(|err| match err {
            RepositoryError::UniqueViolation(_) => {
                ServiceError::Conflict("Email already registered".into())
            }
            other => ServiceError::Repo(other),
        })?;

        info!("✅ Signup successful for user {}", user.id);

        self.issue(user.id).await
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<TokenPair, ServiceError> {
        info!("🔐 Login attempt for email: {}", req.email);

        let user = self
            .users
            .find_by_email(&req.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hash
            .compare_password(&user.password, &req.password)
            .await?;

        info!("✅ Login successful for user {}", user.id);

        self.issue(user.id).await
    }

    /// Mint a fresh access/refresh pair and persist the refresh credential.
    /// Previously issued rows for the same user are left untouched.
    async fn issue(&self, user_id: Uuid) -> Result<TokenPair, ServiceError> {
        let access_token = self.jwt.generate_token(user_id, "access")?;
        let refresh_token = self.jwt.generate_token(user_id, "refresh")?;

        let expires_at = (Utc::now() + Duration::days(REFRESH_TOKEN_DAYS)).naive_utc();

        let record = CreateToken {
            user_id,
            refresh_token: refresh_token.clone(),
            expires_at,
        };

        if let Err(err) = self.tokens.create(&record).await {
            error!("❌ Failed to persist refresh token for {user_id}: {err}");
            return Err(ServiceError::Repo(err));
        }

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Exchange a stored refresh token for a new pair. The presented row is
    /// NOT removed; it stays redeemable until its own expiry.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ServiceError> {
        let token = self
            .tokens
            .find_by_refresh_token(refresh_token)
            .await?
            .ok_or(ServiceError::InvalidToken)?;

        if token.expires_at <= Utc::now().naive_utc() {
            return Err(ServiceError::TokenExpired);
        }

        info!("🔄 Refreshing tokens for user {}", token.user_id);

        self.issue(token.user_id).await
    }

    pub async fn logout(&self, refresh_token: &str) -> Result<(), ServiceError> {
        let deleted = self.tokens.delete_by_refresh_token(refresh_token).await?;

        if deleted == 0 {
            return Err(ServiceError::InvalidToken);
        }

        info!("👋 Session closed");

        Ok(())
    }

    pub async fn profile(&self, user_id: Uuid) -> Result<UserResponse, ServiceError> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or(ServiceError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{TokenRepositoryTrait, UserRepositoryTrait},
        config::{Hashing, JwtConfig},
        model::{Token, User},
    };
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryUserRepository {
        users: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserRepositoryTrait for InMemoryUserRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == id)
                .cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
            let mut users = self.users.lock().unwrap();
            if users.iter().any(|u| u.email == user.email) {
                return Err(RepositoryError::UniqueViolation("users_email_key".into()));
            }
            let created = User {
                id: Uuid::new_v4(),
                username: user.username.clone(),
                email: user.email.clone(),
                password: user.password.clone(),
                created_at: Some(Utc::now().naive_utc()),
                updated_at: Some(Utc::now().naive_utc()),
            };
            users.push(created.clone());
            Ok(created)
        }
    }

    #[derive(Default)]
    struct InMemoryTokenRepository {
        tokens: Mutex<Vec<Token>>,
    }

    #[async_trait]
    impl TokenRepositoryTrait for InMemoryTokenRepository {
        async fn create(&self, token: &CreateToken) -> Result<Token, RepositoryError> {
            let created = Token {
                id: Uuid::new_v4(),
                refresh_token: token.refresh_token.clone(),
                user_id: token.user_id,
                expires_at: token.expires_at,
                created_at: Some(Utc::now().naive_utc()),
            };
            self.tokens.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn find_by_refresh_token(
            &self,
            token: &str,
        ) -> Result<Option<Token>, RepositoryError> {
            Ok(self
                .tokens
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.refresh_token == token)
                .cloned())
        }

        async fn delete_by_refresh_token(&self, token: &str) -> Result<u64, RepositoryError> {
            let mut tokens = self.tokens.lock().unwrap();
            let before = tokens.len();
            tokens.retain(|t| t.refresh_token != token);
            Ok((before - tokens.len()) as u64)
        }
    }

    fn service() -> (AuthService, Arc<InMemoryTokenRepository>) {
        let tokens = Arc::new(InMemoryTokenRepository::default());
        let service = AuthService::new(
            Arc::new(InMemoryUserRepository::default()),
            tokens.clone(),
            Arc::new(Hashing::new()),
            Arc::new(JwtConfig::new("test-secret")),
        );
        (service, tokens)
    }

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            username: "fern".into(),
            email: "fern@example.com".into(),
            password: "hunter42".into(),
        }
    }

    #[tokio::test]
    async fn test_signup_issues_pair_and_stores_token() {
        let (service, tokens) = service();

        let pair = service.signup(&register_request()).await.unwrap();

        assert!(!pair.access_token.is_empty());
        assert!(!pair.refresh_token.is_empty());
        assert_eq!(tokens.tokens.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_signup_duplicate_email_conflicts() {
        let (service, tokens) = service();
        service.signup(&register_request()).await.unwrap();

        let err = service.signup(&register_request()).await.unwrap_err();

        assert!(matches!(err, ServiceError::Conflict(_)));
        // no second token row was minted for the rejected signup
        assert_eq!(tokens.tokens.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let (service, _) = service();
        service.signup(&register_request()).await.unwrap();

        let err = service
            .login(&LoginRequest {
                email: "fern@example.com".into(),
                password: "wrong-password".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_unauthorized() {
        let (service, _) = service();

        let err = service
            .login(&LoginRequest {
                email: "nobody@example.com".into(),
                password: "hunter42".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_issues_fresh_pair_each_time() {
        let (service, tokens) = service();
        let first = service.signup(&register_request()).await.unwrap();

        let second = service
            .login(&LoginRequest {
                email: "fern@example.com".into(),
                password: "hunter42".into(),
            })
            .await
            .unwrap();

        assert_ne!(first.refresh_token, second.refresh_token);
        // both sessions stay live; nothing is revoked on login
        assert_eq!(tokens.tokens.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_unknown_token_is_unauthorized() {
        let (service, _) = service();

        let err = service.refresh("no-such-token").await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidToken));
    }

    #[tokio::test]
    async fn test_refresh_expired_token_fails() {
        let (service, tokens) = service();
        let user_id = Uuid::new_v4();

        tokens
            .create(&CreateToken {
                user_id,
                refresh_token: "stale".into(),
                expires_at: (Utc::now() - Duration::seconds(1)).naive_utc(),
            })
            .await
            .unwrap();

        let err = service.refresh("stale").await.unwrap_err();

        assert!(matches!(err, ServiceError::TokenExpired));
    }

    #[tokio::test]
    async fn test_refresh_leaves_old_token_redeemable() {
        let (service, tokens) = service();
        let pair = service.signup(&register_request()).await.unwrap();

        let refreshed = service.refresh(&pair.refresh_token).await.unwrap();

        assert_ne!(pair.refresh_token, refreshed.refresh_token);
        // the used token row is still present and still redeemable
        assert_eq!(tokens.tokens.lock().unwrap().len(), 2);
        assert!(service.refresh(&pair.refresh_token).await.is_ok());
    }

    #[tokio::test]
    async fn test_logout_unknown_token_is_unauthorized() {
        let (service, tokens) = service();
        service.signup(&register_request()).await.unwrap();

        let err = service.logout("no-such-token").await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidToken));
        assert_eq!(tokens.tokens.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_logout_removes_exactly_one_session() {
        let (service, tokens) = service();
        let first = service.signup(&register_request()).await.unwrap();
        let second = service
            .login(&LoginRequest {
                email: "fern@example.com".into(),
                password: "hunter42".into(),
            })
            .await
            .unwrap();

        service.logout(&first.refresh_token).await.unwrap();

        let remaining = tokens.tokens.lock().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].refresh_token, second.refresh_token);
    }

    #[tokio::test]
    async fn test_profile_round_trip() {
        let (service, _) = service();
        let pair = service.signup(&register_request()).await.unwrap();

        let jwt = JwtConfig::new("test-secret");
        let user_id = {
            use crate::abstract_trait::JwtServiceTrait;
            jwt.verify_token(&pair.access_token, "access").unwrap()
        };

        let profile = service.profile(user_id).await.unwrap();

        assert_eq!(profile.username, "fern");
        assert_eq!(profile.email, "fern@example.com");
    }

    #[tokio::test]
    async fn test_profile_unknown_user_is_unauthorized() {
        let (service, _) = service();

        let err = service.profile(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidToken));
    }
}
