use std::env;

use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Listen address for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read `HOST` and `PORT` from the environment, falling back to
    /// `0.0.0.0:3000`. A `PORT` that is not a valid port number is an error.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }
}

fn parse_port(raw: &str) -> Result<u16, AppError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| AppError::config(format!("PORT must be a valid port number, got: '{raw}'")))
}
