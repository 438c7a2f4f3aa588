use std::{borrow::Cow, time::Duration};

use hyper::Method;
use percent_encoding::percent_decode_str;

use super::{BadRequestReason, BrokerError, Payload};

const VALUE_PARAM: &str = "v";
const TIMEOUT_PARAM: &str = "timeout";

/// A validated broker operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrokerRequest {
  /// Append `value` to `queue`, creating the queue if needed.
  Enqueue {
    /// Target queue name.
    queue: String,
    /// Payload to append.
    value: Payload,
  },
  /// Take the head of `queue`, waiting up to `timeout` for one to arrive.
  Dequeue {
    /// Source queue name.
    queue:   String,
    /// How long to wait on an empty queue; zero fails fast.
    timeout: Duration,
  },
}

impl BrokerRequest {
  /// Parses a request from its method, path and raw query string.
  ///
  /// `PUT` enqueues, `GET` dequeues. The queue name is the percent-decoded path without its
  /// leading `/`.
  ///
  /// # Errors
  ///
  /// Returns [`BrokerError::Unimplemented`] for any other method and
  /// [`BrokerError::BadRequest`] when the queue name, `v` or `timeout` is invalid.
  pub fn parse(method: &Method, path: &str, query: Option<&str>) -> Result<Self, BrokerError> {
    if *method == Method::PUT {
      Self::parse_enqueue(path, query)
    } else if *method == Method::GET {
      Self::parse_dequeue(path, query)
    } else {
      Err(BrokerError::Unimplemented)
    }
  }

  fn parse_enqueue(path: &str, query: Option<&str>) -> Result<Self, BrokerError> {
    let queue = queue_name(path)?;
    let value = query_param(query, VALUE_PARAM)
      .filter(|value| !value.is_empty())
      .ok_or(BadRequestReason::MissingValue)?;
    Ok(Self::Enqueue { queue, value })
  }

  fn parse_dequeue(path: &str, query: Option<&str>) -> Result<Self, BrokerError> {
    let queue = queue_name(path)?;
    let timeout = match query_param(query, TIMEOUT_PARAM) {
      | Some(raw) => parse_timeout(&raw)?,
      | None => Duration::ZERO,
    };
    Ok(Self::Dequeue { queue, timeout })
  }
}

fn queue_name(path: &str) -> Result<String, BadRequestReason> {
  let raw = path.strip_prefix('/').unwrap_or(path);
  let name = percent_decode_str(raw).decode_utf8().map_err(|_| BadRequestReason::InvalidQueueName)?;
  if name.is_empty() {
    return Err(BadRequestReason::MissingQueueName);
  }
  Ok(name.into_owned())
}

fn query_param(query: Option<&str>, key: &str) -> Option<String> {
  form_urlencoded::parse(query?.as_bytes()).find(|(name, _)| name == key).map(|(_, value)| Cow::into_owned(value))
}

fn parse_timeout(raw: &str) -> Result<Duration, BadRequestReason> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Ok(Duration::ZERO);
  }
  trimmed.parse::<u64>().map(Duration::from_secs).map_err(|_| BadRequestReason::InvalidTimeout)
}
