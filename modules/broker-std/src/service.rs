mod bad_request_reason;
mod broker_error;
mod broker_reply;
mod broker_request;
mod broker_service;

#[cfg(test)]
mod tests;

pub use bad_request_reason::BadRequestReason;
pub use broker_error::BrokerError;
pub use broker_reply::BrokerReply;
pub use broker_request::BrokerRequest;
pub use broker_service::BrokerService;

/// Payload type carried by the broker's queues.
pub type Payload = String;
