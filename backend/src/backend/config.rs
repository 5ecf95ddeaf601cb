use std::env;

/// Runtime configuration, resolved once at startup from the environment.
///
/// The relay endpoint is injected into the dispatcher at construction;
/// nothing reads these values ambiently after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the REST API binds to
    pub bind_addr: String,
    /// SQLite database URL
    pub database_url: String,
    /// Endpoint of the WhatsApp relay accepting `{phone, message}`
    pub relay_url: String,
    /// Default log filter when RUST_LOG is not set
    pub log_level: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:reminders.db".to_string()),
            relay_url: env::var("RELAY_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000/send".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
