use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use reqwest::Method;
use serde_json::Value;
use webapi_client::attributes::{HeaderAttribute, JsonContentAttribute};
use webapi_client::config::{load_settings, ClientSettings};
use webapi_client::observability::logging::init_logging;
use webapi_client::{ApiActionDescriptor, HttpApiClient, HttpApiConfig};

#[derive(Parser)]
#[command(name = "webapi-cli")]
#[command(about = "Compose and send one HTTP API request", long_about = None)]
struct Cli {
    /// Settings file (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host URI, overriding the settings file.
    #[arg(long)]
    host: Option<String>,

    /// HTTP method.
    #[arg(value_parser = parse_method)]
    method: Method,

    /// Path template, e.g. "/users/{id}".
    path: String,

    /// Path placeholder or query parameter (key=value), in order.
    #[arg(short, long = "param", value_parser = parse_key_value)]
    params: Vec<(String, String)>,

    /// Request header (name=value).
    #[arg(short = 'H', long = "header", value_parser = parse_key_value)]
    headers: Vec<(String, String)>,

    /// JSON request body.
    #[arg(long)]
    json: Option<String>,
}

fn parse_method(s: &str) -> Result<Method, String> {
    Method::from_bytes(s.to_ascii_uppercase().as_bytes()).map_err(|e| e.to_string())
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", s))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => load_settings(path)?,
        None => ClientSettings::default(),
    };
    if let Some(host) = cli.host.clone() {
        settings.http_host = Some(host);
    }
    init_logging(&settings.observability.log_level);

    let mut action = ApiActionDescriptor::new("cli", cli.method.clone(), cli.path.clone());
    let mut arguments = Vec::new();
    for (key, value) in &cli.params {
        action = action.parameter::<str>(key.clone());
        arguments.push(Value::String(value.clone()));
    }
    for (name, value) in &cli.headers {
        action = action.parameter_with::<str>(name.clone(), HeaderAttribute::named(name.clone()));
        arguments.push(Value::String(value.clone()));
    }
    if let Some(body) = &cli.json {
        action = action.parameter_with::<Value>("body", JsonContentAttribute);
        arguments.push(serde_json::from_str(body)?);
    }

    let config = Arc::new(HttpApiConfig::from_settings(&settings)?);
    let client =
        HttpApiClient::new(config.clone()).with_metrics(settings.observability.metrics_enabled);

    let result = client.execute(&Arc::new(action), arguments).await;
    config.dispose();
    let response = result?;

    let status = response.status;
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
    }
    match serde_json::from_slice::<Value>(&response.body) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", response.text()),
    }
    Ok(())
}
