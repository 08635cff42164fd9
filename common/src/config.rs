use std::fmt::{Display, Formatter};

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
#[command(next_help_heading = "Database")]
#[group(id = "database")]
pub struct Database {
    /// A full connection URL, taking precedence over the individual settings.
    ///
    /// Any URL supported by sea-orm works, e.g. `sqlite://heroes.db?mode=rwc`.
    #[arg(id = "db-url", long, env = "DB_URL")]
    pub url: Option<String>,
    #[arg(id = "db-user", long, env = "DB_USER", default_value = "heroes")]
    pub username: String,
    #[arg(id = "db-password", long, env = "DB_PASSWORD", default_value = "heroes")]
    pub password: String,
    #[arg(id = "db-host", long, env = "DB_HOST", default_value = "localhost")]
    pub host: String,
    #[arg(id = "db-port", long, env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,
    #[arg(id = "db-name", long, env = "DB_NAME", default_value = "heroes")]
    pub name: String,
    #[arg(id = "db-max-conn", long, env = "DB_MAX_CONN", default_value_t = 75)]
    pub max_conn: u32,
    #[arg(id = "db-min-conn", long, env = "DB_MIN_CONN", default_value_t = 25)]
    pub min_conn: u32,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: None,
            username: "heroes".into(),
            password: "heroes".into(),
            host: "localhost".into(),
            port: 5432,
            name: "heroes".into(),
            max_conn: 75,
            min_conn: 25,
        }
    }
}

impl Database {
    /// The connection URL, either as provided or assembled for PostgreSQL.
    pub fn to_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.username, self.password, self.host, self.port, self.name
            ),
        }
    }

    /// Check if the configuration points to an in-memory SQLite database.
    ///
    /// Every connection to such a database opens a fresh, empty one. So the pool must hold on
    /// to exactly one connection.
    pub fn is_in_memory(&self) -> bool {
        self.url
            .as_deref()
            .is_some_and(|url| {
                url.starts_with("sqlite::memory:")
                    || url.starts_with("sqlite://:memory:")
                    || url.contains("mode=memory")
            })
    }
}

impl Display for Database {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.url {
            Some(_) => write!(f, "{}", crate::db::strip_password(self.to_url())),
            None => write!(
                f,
                "postgres://{}@{}:{}/{}",
                self.username, self.host, self.port, self.name
            ),
        }
    }
}
