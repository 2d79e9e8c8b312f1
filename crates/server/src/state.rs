use shared::{
    abstract_trait::{DynHashing, DynJwtService, DynMediaHost},
    config::{Config, ConnectionPool, Hashing, JwtConfig},
    di::{DependenciesInject, DependenciesInjectDeps},
    media::MediaHostClient,
};
use std::sync::Arc;

/// Attributes every auth cookie is written (and cleared) with. Secure is
/// production-only so plain-HTTP local development keeps working.
#[derive(Debug, Clone, Copy)]
pub struct CookiePolicy {
    pub secure: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub di_container: DependenciesInject,
    pub cookie_policy: CookiePolicy,
}

impl AppState {
    pub fn new(config: &Config, pool: ConnectionPool) -> Self {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hash = Arc::new(Hashing::new()) as DynHashing;
        let media = Arc::new(MediaHostClient::new(&config.media)) as DynMediaHost;

        let di_container = DependenciesInject::new(DependenciesInjectDeps {
            pool,
            hash,
            jwt: jwt_config.clone(),
            media,
        });

        Self {
            jwt_config,
            di_container,
            cookie_policy: CookiePolicy {
                secure: config.is_production,
            },
        }
    }
}
