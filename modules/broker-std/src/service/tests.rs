use std::time::Duration;

use hyper::{Method, StatusCode};
use tokio::{task::JoinSet, time::Instant};

use super::{BadRequestReason, BrokerError, BrokerReply, BrokerRequest, BrokerService};

type TestResult<T = ()> = Result<T, String>;

#[test]
fn put_parses_into_enqueue() {
  let request = BrokerRequest::parse(&Method::PUT, "/pets", Some("v=cat"));

  assert_eq!(request, Ok(BrokerRequest::Enqueue { queue: "pets".to_owned(), value: "cat".to_owned() }));
}

#[test]
fn query_values_and_path_are_decoded() {
  let request = BrokerRequest::parse(&Method::PUT, "/my%20queue", Some("v=hello+big%20world&v=second"));

  assert_eq!(
    request,
    Ok(BrokerRequest::Enqueue { queue: "my queue".to_owned(), value: "hello big world".to_owned() })
  );
}

#[test]
fn undecodable_queue_names_are_rejected_not_merged() {
  for path in ["/%FF", "/%FE", "/ok%C3"] {
    let request = BrokerRequest::parse(&Method::PUT, path, Some("v=one"));
    assert_eq!(request, Err(BrokerError::BadRequest(BadRequestReason::InvalidQueueName)), "path {path}");
  }

  let request = BrokerRequest::parse(&Method::GET, "/caf%C3%A9", None);
  assert_eq!(request, Ok(BrokerRequest::Dequeue { queue: "café".to_owned(), timeout: Duration::ZERO }));
}

#[tokio::test]
async fn undecodable_names_never_share_a_queue() {
  let service = BrokerService::new();

  let put = service.dispatch(&Method::PUT, "/%FF", Some("v=one")).await;
  assert_eq!(put, Err(BrokerError::BadRequest(BadRequestReason::InvalidQueueName)));
  assert!(service.registry().is_empty());

  let get = service.dispatch(&Method::GET, "/%FE", None).await;
  assert_eq!(get, Err(BrokerError::BadRequest(BadRequestReason::InvalidQueueName)));
}

#[test]
fn put_without_value_is_rejected() {
  for query in [None, Some(""), Some("v="), Some("value=x")] {
    let request = BrokerRequest::parse(&Method::PUT, "/pets", query);
    assert_eq!(request, Err(BrokerError::BadRequest(BadRequestReason::MissingValue)), "query {query:?}");
  }
}

#[test]
fn empty_queue_name_is_rejected() {
  for method in [Method::PUT, Method::GET] {
    let request = BrokerRequest::parse(&method, "/", Some("v=x"));
    assert_eq!(request, Err(BrokerError::BadRequest(BadRequestReason::MissingQueueName)));
  }
}

#[test]
fn get_timeout_defaults_to_zero() {
  let request = BrokerRequest::parse(&Method::GET, "/pets", None);

  assert_eq!(request, Ok(BrokerRequest::Dequeue { queue: "pets".to_owned(), timeout: Duration::ZERO }));
}

#[test]
fn get_timeout_is_trimmed_and_parsed_as_seconds() {
  let request = BrokerRequest::parse(&Method::GET, "/pets", Some("timeout=%203%20"));

  assert_eq!(request, Ok(BrokerRequest::Dequeue { queue: "pets".to_owned(), timeout: Duration::from_secs(3) }));
}

#[test]
fn invalid_timeout_is_rejected() {
  for raw in ["-1", "abc", "1.5", "9999999999999999999999"] {
    let query = format!("timeout={raw}");
    let request = BrokerRequest::parse(&Method::GET, "/pets", Some(query.as_str()));
    assert_eq!(request, Err(BrokerError::BadRequest(BadRequestReason::InvalidTimeout)), "timeout {raw}");
  }
}

#[test]
fn other_methods_are_unimplemented() {
  for method in [Method::POST, Method::DELETE, Method::PATCH, Method::HEAD] {
    let request = BrokerRequest::parse(&method, "/pets", Some("v=x"));
    assert_eq!(request, Err(BrokerError::Unimplemented));
  }
}

#[test]
fn errors_map_to_http_statuses() {
  assert_eq!(BrokerError::BadRequest(BadRequestReason::InvalidTimeout).status(), StatusCode::BAD_REQUEST);
  assert_eq!(BrokerError::NotFound.status(), StatusCode::NOT_FOUND);
  assert_eq!(BrokerError::Unimplemented.status(), StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn payloads_are_delivered_in_fifo_order() -> TestResult {
  let service = BrokerService::new();
  for value in ["A", "B", "C"] {
    service.dispatch(&Method::PUT, "/letters", Some(format!("v={value}").as_str())).await.map_err(|e| e.to_string())?;
  }

  for expected in ["A", "B", "C"] {
    let reply = service.dispatch(&Method::GET, "/letters", None).await.map_err(|e| e.to_string())?;
    assert_eq!(reply, BrokerReply::Delivered(expected.to_owned()));
  }
  assert_eq!(service.dispatch(&Method::GET, "/letters", None).await, Err(BrokerError::NotFound));
  Ok(())
}

#[tokio::test]
async fn zero_timeout_on_empty_queue_fails_fast() {
  let service = BrokerService::new();
  service.enqueue("drained", "only".to_owned());
  assert_eq!(service.dequeue("drained", Duration::ZERO).await, Ok("only".to_owned()));

  let started = Instant::now();
  let outcome = service.dispatch(&Method::GET, "/drained", Some("timeout=0")).await;

  assert_eq!(outcome, Err(BrokerError::NotFound));
  assert!(started.elapsed() < Duration::from_millis(100));
}

#[tokio::test]
async fn unknown_queue_is_not_found_without_waiting() {
  let service = BrokerService::new();
  let started = Instant::now();

  let outcome = service.dispatch(&Method::GET, "/ghost", Some("timeout=5")).await;

  assert_eq!(outcome, Err(BrokerError::NotFound));
  assert!(started.elapsed() < Duration::from_secs(1));
  assert!(!service.registry().contains("ghost"));
}

#[tokio::test]
async fn rejected_enqueue_does_not_create_the_queue() {
  let service = BrokerService::new();

  let outcome = service.dispatch(&Method::PUT, "/never", None).await;

  assert_eq!(outcome, Err(BrokerError::BadRequest(BadRequestReason::MissingValue)));
  assert!(service.registry().is_empty());
  assert_eq!(service.dispatch(&Method::GET, "/never", None).await, Err(BrokerError::NotFound));
}

async fn run_blocking_dequeue_receives_late_payload() -> TestResult {
  let service = BrokerService::new();
  service.registry().resolve_or_create("late");

  let consumer = {
    let service = service.clone();
    tokio::spawn(async move { service.dispatch(&Method::GET, "/late", Some("timeout=5")).await })
  };

  tokio::time::sleep(Duration::from_millis(200)).await;
  let started = Instant::now();
  service.enqueue("late", "arrived".to_owned());

  let reply = consumer.await.map_err(|e| e.to_string())?.map_err(|e| e.to_string())?;
  assert_eq!(reply, BrokerReply::Delivered("arrived".to_owned()));
  assert!(started.elapsed() < Duration::from_secs(1));
  Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn blocking_dequeue_receives_late_payload() -> TestResult {
  run_blocking_dequeue_receives_late_payload().await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_dequeue_receives_late_payload_multi_thread() -> TestResult {
  run_blocking_dequeue_receives_late_payload().await
}

async fn run_each_payload_reaches_exactly_one_consumer() -> TestResult {
  const PAYLOADS: usize = 3;
  const CONSUMERS: usize = 6;

  let service = BrokerService::new();
  service.registry().resolve_or_create("shared");

  let mut consumers = JoinSet::new();
  for _ in 0..CONSUMERS {
    let service = service.clone();
    consumers.spawn(async move { service.dequeue("shared", Duration::from_secs(1)).await });
  }

  tokio::time::sleep(Duration::from_millis(50)).await;
  for index in 0..PAYLOADS {
    service.enqueue("shared", format!("payload-{index}"));
  }

  let mut delivered = Vec::new();
  let mut not_found = 0;
  while let Some(joined) = consumers.join_next().await {
    match joined.map_err(|e| e.to_string())? {
      | Ok(payload) => delivered.push(payload),
      | Err(BrokerError::NotFound) => not_found += 1,
      | Err(other) => return Err(format!("unexpected error: {other}")),
    }
  }
  delivered.sort();

  assert_eq!(delivered, ["payload-0", "payload-1", "payload-2"]);
  assert_eq!(not_found, CONSUMERS - PAYLOADS);
  Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn each_payload_reaches_exactly_one_consumer() -> TestResult {
  run_each_payload_reaches_exactly_one_consumer().await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn each_payload_reaches_exactly_one_consumer_multi_thread() -> TestResult {
  run_each_payload_reaches_exactly_one_consumer().await
}
