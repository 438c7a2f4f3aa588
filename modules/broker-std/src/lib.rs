#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(dropping_copy_types)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]

//! Tokio binding of the pollq broker.
//!
//! Wires the runtime-agnostic queues of `pollq_broker_core_rs` to a DashMap-backed registry,
//! Tokio deadlines and a hyper HTTP/1.1 listener. Producers `PUT /{queue}?v=...`, consumers
//! `GET /{queue}?timeout=<seconds>` and long-poll until a payload arrives or the timeout elapses.

/// Command-line configuration of the server process.
pub mod config;
/// HTTP/1.1 listener exposing the broker service.
pub mod http;
/// Tracing subscriber setup.
pub mod logging;
/// Name to queue mapping shared by every request.
pub mod registry;
/// Request model, validation and dispatch onto the registry.
pub mod service;
/// Tokio deadlines for long-poll reads.
pub mod timing;

pub use config::{BrokerConfig, ConfigError};
pub use http::{BrokerServer, ServerError};
pub use pollq_broker_core_rs::{ArcShared, MessageQueue};
pub use registry::QueueRegistry;
pub use service::{BadRequestReason, BrokerError, BrokerReply, BrokerRequest, BrokerService, Payload};
