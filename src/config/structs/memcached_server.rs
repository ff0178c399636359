use serde::{Deserialize, Serialize};

/// One Memcached server address, the (host, port) tuple the drop-in consumes.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MemcachedServer {
    pub host: String,
    pub port: u16,
}
