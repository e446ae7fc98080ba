//! Respond CLI command
//!
//! Calls the mock response service once and prints the payload as JSON.

use clap::Args;

use crate::config::Settings;
use crate::error::SavrResult;
use crate::services::{Endpoint, MockResponseService, ResponseService};

/// Arguments for `savr respond`
#[derive(Args, Debug)]
pub struct RespondArgs {
    /// Endpoint name (profile, connection, recommendation, goal or any other)
    pub endpoint: String,

    /// Request body as JSON
    #[arg(short, long)]
    pub input: Option<String>,

    /// Override the simulated response delay (milliseconds)
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

/// Handle the respond command
pub async fn handle_respond_command(settings: &Settings, args: RespondArgs) -> SavrResult<()> {
    let mut settings = settings.clone();
    if let Some(ms) = args.delay_ms {
        settings.response_delay_ms = ms;
    }
    let service = MockResponseService::from_settings(&settings);

    let input = match args.input.as_deref() {
        Some(raw) => serde_json::from_str(raw)?,
        None => serde_json::Value::Null,
    };

    let endpoint = Endpoint::parse(&args.endpoint);
    let payload = service.respond(&endpoint, input).await?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
