use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    // Absence is detected per request, not at startup: a server running
    // without a secret must answer protected routes with a 500, not refuse
    // to boot.
    pub jwt_secret: Option<String>,
    pub jwt_expiry: i64,
    pub admin_email: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL")?,
            jwt_secret: env::var("JWT_SECRET").ok(),
            jwt_expiry: env::var("JWT_EXPIRY")
                .unwrap_or_else(|_| "86400".to_string())
                .parse()
                .unwrap_or(86400),
            admin_email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@admin.com".to_string()),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
