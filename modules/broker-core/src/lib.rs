#![no_std]
#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
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

//! Core of the pollq broker.
//!
//! Provides the per-name [`MessageQueue`] together with the waiter hand-off coordinator that lets
//! consumers suspend on an empty queue and resume exactly once when a payload arrives or their
//! deadline elapses. The crate is `no_std` and runtime-agnostic: deadlines are supplied by the
//! caller as plain futures, so the Tokio binding lives in `pollq-broker-std-rs`.

extern crate alloc;

/// Payload buffer and the dequeue future built on top of the wait primitives.
pub mod queue;
/// Shared ownership helpers.
pub mod sync;
/// FIFO waiter registration and single-fire notification.
pub mod wait;

pub use queue::{Dequeue, MessageQueue};
pub use sync::ArcShared;
pub use wait::{WaitHandle, WaitQueue};
