use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub api_url: String,
    pub api_key: String,
}

impl MediaConfig {
    pub fn init() -> Result<Self> {
        let api_url = std::env::var("MEDIA_API_URL")
            .context("Missing environment variable: MEDIA_API_URL")?;

        let api_key = std::env::var("MEDIA_API_KEY")
            .context("Missing environment variable: MEDIA_API_KEY")?;

        Ok(Self { api_url, api_key })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub cors_origin: String,
    pub is_production: bool,
    pub run_migrations: bool,
    pub media: MediaConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;

        let port = std::env::var("PORT")
            .context("Missing environment variable: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let cors_origin =
            std::env::var("CORS_ORIGIN").context("Missing environment variable: CORS_ORIGIN")?;

        // The Secure cookie flag keys off this; plain-HTTP dev setups must
        // stay non-production or the browser will drop the auth cookies.
        let is_production = std::env::var("APP_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        let run_migrations = match std::env::var("RUN_MIGRATIONS")
            .unwrap_or_else(|_| "false".to_string())
            .as_str()
        {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let media = MediaConfig::init().context("failed media host config")?;

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            cors_origin,
            is_production,
            run_migrations,
            media,
        })
    }
}
