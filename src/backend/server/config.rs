/**
 * Server Configuration
 *
 * This module builds the `ServerConfig` from environment variables and
 * opens the MongoDB connection.
 *
 * # Environment
 *
 * | Variable | Default |
 * |---|---|
 * | `SERVER_PORT` | `5003` |
 * | `MONGO_INITDB_ROOT_USERNAME` | unset |
 * | `MONGO_INITDB_ROOT_PASSWORD` | unset |
 * | `MONGO_HOST` | `mongodb` |
 * | `MONGO_PORT` | `27017` |
 * | `MONGO_DB_NAME` | `appdb` |
 * | `ADMIN_TOKEN` | `changeme` |
 * | `ALLOW_INSECURE_ADMIN_TOKEN` | unset |
 * | `ENTRYBOX_STORE` | `mongo` |
 *
 * Empty values count as unset.
 *
 * # Error Handling
 *
 * Bad values (unparseable ports, unknown store kinds) and the default admin
 * token are configuration errors and stop startup. Database connection
 * problems are only logged: the server still starts and individual requests
 * fail.
 */

use bson::doc;
use mongodb::options::{ClientOptions, Credential, ServerAddress};
use mongodb::{Client, Database};
use crate::shared::ConfigError;

/// Port the HTTP server binds when `SERVER_PORT` is unset
pub const DEFAULT_PORT: u16 = 5003;

/// Fallback admin token; refused at startup unless explicitly allowed
pub const DEFAULT_ADMIN_TOKEN: &str = "changeme";

pub const DEFAULT_MONGO_HOST: &str = "mongodb";

pub const DEFAULT_MONGO_PORT: u16 = 27017;

pub const DEFAULT_DATABASE_NAME: &str = "appdb";

/// Which entry store the server runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Mongo,
    Memory,
}

/// MongoDB connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct MongoSettings {
    pub username: Option<String>,
    pub password: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl std::fmt::Debug for MongoSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoSettings")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .finish()
    }
}

impl MongoSettings {
    /// Driver options for these settings
    ///
    /// Credentials are only attached when both username and password are set,
    /// and always authenticate against the `admin` database.
    pub fn client_options(&self) -> ClientOptions {
        let credential = match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some(
                Credential::builder()
                    .username(username.clone())
                    .password(password.clone())
                    .source("admin".to_string())
                    .build(),
            ),
            _ => None,
        };

        ClientOptions::builder()
            .hosts(vec![ServerAddress::Tcp {
                host: self.host.clone(),
                port: Some(self.port),
            }])
            .credential(credential)
            .app_name("entrybox".to_string())
            .build()
    }

    /// Connection string with the password masked, for logs
    pub fn redacted_uri(&self) -> String {
        let auth = match (&self.username, &self.password) {
            (Some(username), Some(_)) => format!("{}:****@", username),
            _ => String::new(),
        };
        format!(
            "mongodb://{}{}:{}/{}?authSource=admin",
            auth, self.host, self.port, self.database
        )
    }
}

/// Everything the server needs at startup
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub mongo: MongoSettings,
    pub admin_token: String,
    pub allow_insecure_admin_token: bool,
    pub store: StoreKind,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("mongo", &self.mongo)
            .field("admin_token", &"<redacted>")
            .field("allow_insecure_admin_token", &self.allow_insecure_admin_token)
            .field("store", &self.store)
            .finish()
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let port = parse_port(get("SERVER_PORT"), "SERVER_PORT", DEFAULT_PORT)?;
        let mongo_port = parse_port(get("MONGO_PORT"), "MONGO_PORT", DEFAULT_MONGO_PORT)?;

        let store = match get("ENTRYBOX_STORE").as_deref() {
            None | Some("mongo") => StoreKind::Mongo,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "ENTRYBOX_STORE",
                    value: other.to_string(),
                })
            }
        };

        let allow_insecure_admin_token = get("ALLOW_INSECURE_ADMIN_TOKEN")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            port,
            mongo: MongoSettings {
                username: get("MONGO_INITDB_ROOT_USERNAME"),
                password: get("MONGO_INITDB_ROOT_PASSWORD"),
                host: get("MONGO_HOST").unwrap_or_else(|| DEFAULT_MONGO_HOST.to_string()),
                port: mongo_port,
                database: get("MONGO_DB_NAME").unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
            },
            admin_token: get("ADMIN_TOKEN").unwrap_or_else(|| DEFAULT_ADMIN_TOKEN.to_string()),
            allow_insecure_admin_token,
            store,
        })
    }

    pub fn uses_default_admin_token(&self) -> bool {
        self.admin_token == DEFAULT_ADMIN_TOKEN
    }

    /// Refuse the fallback admin token unless explicitly allowed
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.uses_default_admin_token() {
            if !self.allow_insecure_admin_token {
                return Err(ConfigError::InsecureAdminToken);
            }
            tracing::warn!(
                "ADMIN_TOKEN is the default {:?}; anyone who knows it can read every entry",
                DEFAULT_ADMIN_TOKEN
            );
        }
        Ok(())
    }
}

fn parse_port(value: Option<String>, key: &'static str, default: u16) -> Result<u16, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

/// Create the MongoDB client and return the configured database
///
/// Returns without waiting for the server. A background `ping` reports
/// whether MongoDB is reachable; a failed ping is only logged and the driver
/// reconnects on later operations. Must be called from inside a tokio
/// runtime.
///
/// # Returns
///
/// - `Some(Database)` once a client could be created
/// - `None` if the driver rejected the options
pub fn load_database(settings: &MongoSettings) -> Option<Database> {
    tracing::info!("Connecting to MongoDB at {}", settings.redacted_uri());

    let client = match Client::with_options(settings.client_options()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create MongoDB client: {}", e);
            tracing::warn!("Entry storage will be unavailable");
            return None;
        }
    };

    let database = client.database(&settings.database);

    let pinged = database.clone();
    tokio::spawn(async move {
        match pinged.run_command(doc! { "ping": 1 }, None).await {
            Ok(_) => tracing::info!("Connected to MongoDB"),
            Err(e) => tracing::error!("MongoDB connection error: {}", e),
        }
    });

    Some(database)
}
