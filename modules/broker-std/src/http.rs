mod broker_server;
mod server_error;
mod tokio_io;


pub use broker_server::BrokerServer;
pub use server_error::ServerError;
pub use tokio_io::TokioIo;
