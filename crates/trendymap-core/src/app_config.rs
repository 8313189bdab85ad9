use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub kakao_rest_key: String,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub static_dir: PathBuf,
    pub detail_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("kakao_rest_key", &"[redacted]")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("static_dir", &self.static_dir)
            .field("detail_timeout_secs", &self.detail_timeout_secs)
            .finish()
    }
}
