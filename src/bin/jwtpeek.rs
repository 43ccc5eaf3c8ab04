//! jwtpeek binary.
//!
//! Decodes a JWT given as an argument, through `JWTPEEK_TOKEN`, or on stdin,
//! and prints its header, payload, signature and time-based status. Nothing is
//! verified.

use std::io::{self, Read};
use std::process::ExitCode;

use chrono::{Local, Utc};
use clap::{Parser, ValueEnum};
use jwtpeek::{DecodedJwt, TokenStatus, current_timestamp, decode};
use serde_json::{Map, Value, json};
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Decode and inspect JSON Web Tokens", long_about = None)]
struct Cli {
    /// Token to decode; read from stdin when omitted
    #[arg(env = "JWTPEEK_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Unix timestamp to evaluate exp/nbf against (defaults to the system clock)
    #[arg(long, env = "JWTPEEK_NOW", allow_hyphen_values = true)]
    now: Option<i64>,

    /// Render timestamps in UTC instead of the local timezone
    #[arg(long)]
    utc: bool,

    /// Output format
    #[arg(long, value_enum, env = "JWTPEEK_FORMAT", default_value = "text")]
    format: OutputFormat,

    /// Log filter directives (overrides RUST_LOG)
    #[arg(long)]
    log_filter: Option<String>,
}

fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| "jwtpeek=warn".into()),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_token(cli_token: Option<String>) -> io::Result<String> {
    match cli_token {
        Some(token) => Ok(token),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn pretty(map: &Map<String, Value>) -> String {
    serde_json::to_string_pretty(map).unwrap_or_else(|_| format!("{map:?}"))
}

fn render_text(decoded: &DecodedJwt, status: &TokenStatus) -> String {
    format!(
        "Header:\n{}\n\nPayload:\n{}\n\nSignature:\n{}\n\nStatus: {} ({})\n",
        pretty(decoded.header()),
        pretty(decoded.payload()),
        decoded.signature(),
        status.message(),
        status.kind(),
    )
}

fn render_json(decoded: &DecodedJwt, status: &TokenStatus) -> String {
    let document = json!({
        "header": decoded.header(),
        "payload": decoded.payload(),
        "signature": decoded.signature(),
        "raw": decoded.raw(),
        "status": status,
    });
    serde_json::to_string_pretty(&document).unwrap_or_else(|_| document.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_filter.as_deref());

    let token = match read_token(cli.token) {
        Ok(token) => token,
        Err(err) => {
            error!(error = %err, "failed to read token from stdin");
            eprintln!("Error: failed to read token: {err}");
            return ExitCode::FAILURE;
        }
    };

    let decoded = match decode(&token) {
        Ok(decoded) => decoded,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let now = cli.now.unwrap_or_else(current_timestamp);
    debug!(now, utc = cli.utc, "evaluating token status");
    let status = if cli.utc {
        decoded.status_in(now, &Utc)
    } else {
        decoded.status_in(now, &Local)
    };

    let output = match cli.format {
        OutputFormat::Text => render_text(&decoded, &status),
        OutputFormat::Json => render_json(&decoded, &status),
    };
    print!("{output}");
    if cli.format == OutputFormat::Json {
        println!();
    }

    ExitCode::SUCCESS
}
