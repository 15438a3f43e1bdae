//! Mock servers for integration testing.
//!
//! Each service stands in for a third-party API the application under test
//! talks to.

use clap::{Args, Subcommand};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

use testbench_derive::Merge;

use crate::config::TestbenchConfig;

pub mod news;

/// API key accepted when none are configured.
pub const DEFAULT_API_KEY: &str = "test-key";

/// Serve configuration from config.toml.
///
/// ```toml
/// [serve]
/// host = "0.0.0.0"
/// port = 8000
/// api_keys = ["test-key", "ci-key"]
/// ```
#[derive(Debug, Clone, Deserialize, Default, Merge)]
#[serde(default)]
pub struct ServeConfig {
    /// Host to bind to (overridden by --host).
    pub host: Option<String>,
    /// Port to listen on (overridden by --port).
    pub port: Option<u16>,
    /// API keys the mock accepts.
    pub api_keys: Option<Vec<String>>,
}

impl ServeConfig {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or("127.0.0.1")
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(8000)
    }

    pub fn api_keys(&self) -> Vec<String> {
        self.api_keys
            .clone()
            .unwrap_or_else(|| vec![DEFAULT_API_KEY.to_string()])
    }
}

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error")]
    Serve(#[source] std::io::Error),
}

/// Serve command arguments
#[derive(Args)]
pub struct ServeArgs {
    #[command(subcommand)]
    pub service: ServeService,
}

#[derive(Subcommand)]
pub enum ServeService {
    /// Mock GNews top-headlines API backed by fixture articles
    News {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (0 picks a free port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Output OpenAPI spec and exit (don't start server)
        #[arg(long)]
        openapi: bool,
    },
}

/// Run the serve command
pub fn run(args: ServeArgs, config: &TestbenchConfig) -> i32 {
    match args.service {
        ServeService::News {
            host,
            port,
            openapi,
        } => {
            if openapi {
                use utoipa::OpenApi;
                return match serde_json::to_string_pretty(&news::ApiDoc::openapi()) {
                    Ok(spec) => {
                        println!("{spec}");
                        0
                    }
                    Err(e) => {
                        eprintln!("Error: failed to serialize OpenAPI spec: {e}");
                        1
                    }
                };
            }

            // CLI flags override config
            let host = host.unwrap_or_else(|| config.serve.host().to_string());
            let port = port.unwrap_or_else(|| config.serve.port());
            let state = Arc::new(news::NewsState::with_fixtures(config.serve.api_keys()));

            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    eprintln!("Error: failed to start async runtime: {e}");
                    return 1;
                }
            };
            match rt.block_on(news::run_news_server(&host, port, state)) {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("Error: {}", crate::output::error_chain(&e));
                    1
                }
            }
        }
    }
}
