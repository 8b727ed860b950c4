//! Backend access: the raw transport and the token-aware gateway on top of it.

pub mod gateway;
pub mod transport;

pub use gateway::AuthenticatedFetch;
pub use transport::{ApiRequest, HttpTransport, ReqwestTransport};

#[cfg(test)]
mod gateway_test;
