use std::net::SocketAddrV4;
use std::time::Duration;

/// Server configs
#[derive(Debug, Clone)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    /// seed for the mock catalog, random when absent
    pub catalog_seed: Option<u64>,
    /// simulated order processing delay
    pub processing_delay: Duration,
    /// carts untouched for longer than this are dropped
    pub cart_idle_timeout: Duration,
}

impl ServerConfig {
    pub fn new(
        addr: SocketAddrV4,
        catalog_seed: Option<u64>,
        processing_delay: Duration,
        cart_idle_timeout: Duration,
    ) -> Self {
        Self {
            addr,
            catalog_seed,
            processing_delay,
            cart_idle_timeout,
        }
    }
}
