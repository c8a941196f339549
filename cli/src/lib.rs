//! Host side of the StorNext client: argument parsing, the pinned-certificate
//! transport and the one-shot request/print cycle.

pub mod args;
pub mod logging;
pub mod transport;

use std::io::Write;

use anyhow::{Context, Result};
use stornext_core::{write_response, Action, ClientConfig, StorNextClient};

use crate::transport::Transport;

/// Run one invocation: print usage for anything that is not a known action,
/// otherwise perform the call and print the URL and body to `out`.
pub fn run<I, T, W>(args: I, config: ClientConfig, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    W: Write,
{
    match args::parse_action(args) {
        Some(action) => execute(&action, config, out),
        None => {
            writeln!(out, "{}", args::USAGE)?;
            Ok(())
        }
    }
}

fn execute<W: Write>(action: &Action, config: ClientConfig, out: &mut W) -> Result<()> {
    let transport = Transport::with_pinned_certificate(&config.cert_path)?;
    let client = StorNextClient::new(config);
    let request = client.build_request(action);

    tracing::info!(action = action.name(), host = client.config().host(), "sending request");
    let response = transport.fetch(&request)?;
    tracing::info!(
        status = response.status,
        success = response.is_success(),
        bytes = response.body.len(),
        "received response"
    );

    write_response(out, &request, &response).context("failed to write response")?;
    Ok(())
}
