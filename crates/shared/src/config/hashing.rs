use crate::{abstract_trait::HashingTrait, errors::ServiceError};
use async_trait::async_trait;
use bcrypt::{hash, verify};

const BCRYPT_COST: u32 = 10;

#[derive(Clone)]
pub struct Hashing;

impl Hashing {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Hashing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let hashed = hash(password, BCRYPT_COST).map_err(ServiceError::Bcrypt)?;
        Ok(hashed)
    }

    async fn compare_password(
        &self,
        hashed_password: &str,
        password: &str,
    ) -> Result<(), ServiceError> {
        let is_valid = verify(password, hashed_password).map_err(ServiceError::Bcrypt)?;

        if is_valid {
            Ok(())
        } else {
            Err(ServiceError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_then_verify_round_trip() {
        let hashing = Hashing::new();
        let hashed = hashing.hash_password("hunter42").await.unwrap();

        assert_ne!(hashed, "hunter42");
        assert!(hashing.compare_password(&hashed, "hunter42").await.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected() {
        let hashing = Hashing::new();
        let hashed = hashing.hash_password("hunter42").await.unwrap();

        let err = hashing
            .compare_password(&hashed, "hunter43")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidCredentials));
    }
}
