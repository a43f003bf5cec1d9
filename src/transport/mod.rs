//! HTTP transport to the speech provider.

mod http;

pub use http::{HttpTransport, TransportConfig, TransportError};
