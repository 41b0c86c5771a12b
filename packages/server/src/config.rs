use std::env;
use std::path::PathBuf;

/// Port the service listens on unless `PORT` overrides it.
const DEFAULT_PORT: u16 = 5000;

/// Template rendered when a request names none.
pub const DEFAULT_TEMPLATE: &str = "info";

#[derive(Clone)]
pub struct AppConfig {
    pub port: u16,
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = match env::var("PORT") {
            Ok(raw) => match raw.parse() {
                Ok(port) => port,
                Err(_) => {
                    tracing::warn!(
                        value = %raw,
                        "PORT is not a valid port number, falling back to {DEFAULT_PORT}"
                    );
                    DEFAULT_PORT
                }
            },
            Err(_) => DEFAULT_PORT,
        };

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Self { port, static_dir }
    }
}
