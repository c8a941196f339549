//! Synchronous request core for the StorNext Web Services v2 API.
//!
//! # Overview
//! Turns one of six fixed actions into the GET URL the metadata controller
//! expects, and renders the raw response for the terminal. No I/O happens
//! here (host-does-IO pattern): the `stornext` binary loads the pinned
//! certificate and performs the request.
//!
//! # Design
//! - `StorNextClient` is stateless; it holds only a `ClientConfig`.
//! - Every call is a GET whose inputs, credentials included, live in the
//!   query string, so `HttpRequest` is just a URL.
//! - Responses are printed, never parsed: `HttpResponse` keeps raw bytes.

pub mod action;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod output;

pub use action::Action;
pub use client::StorNextClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::{HttpRequest, HttpResponse};
pub use output::write_response;
