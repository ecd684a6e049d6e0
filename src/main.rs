//! application entry point

use crate::server::model::config::ServerConfig;
use log::{info, warn};
use std::env;
use std::net::SocketAddrV4;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use derive_more::Display;

mod server;

const DOTENV_LOADING_FAILED_MSG: &str = "failed to load envs from dotenv files, aborting";
const HOST_PARSING_FAILED_MSG: &str = "failed to parse HOST, aborting";
const DEFAULT_HOST_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_ORDER_PROCESSING_MILLIS: u64 = 2000;
const DEFAULT_CART_IDLE_MINUTES: u64 = 30;

#[actix_web::main()]
async fn main() -> std::io::Result<()> {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    match env {
        Env::Prod | Env::Stg => {} // load in CI
        Env::Dev => dotenvy::from_path(Path::new(".env.dev"))
            .expect(DOTENV_LOADING_FAILED_MSG),
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // c. run app
    let config = ServerConfig::new(
        SocketAddrV4::from_str(
            env::var("HOST")
                .unwrap_or(DEFAULT_HOST_ADDR.to_string())
                .as_str(),
        )
        .expect(HOST_PARSING_FAILED_MSG),
        env_number("CATALOG_SEED"),
        Duration::from_millis(
            env_number("ORDER_PROCESSING_MILLIS").unwrap_or(DEFAULT_ORDER_PROCESSING_MILLIS),
        ),
        Duration::from_secs(
            60 * env_number("CART_IDLE_MINUTES").unwrap_or(DEFAULT_CART_IDLE_MINUTES),
        ),
    );

    info!("App is starting in env={}", env);

    server::run(config).await
}

/// reads a numeric env var, ignoring it (with a warning) when malformed
fn env_number(key: &str) -> Option<u64> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(n) => Some(n),
        Err(e) => {
            warn!("ignoring {}={:?}, {}", key, raw, e);
            None
        }
    }
}

#[derive(Debug, Display)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}
