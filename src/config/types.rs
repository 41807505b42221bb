//! Configuration constants and default value functions.

/// Save methods the result-persistence layer understands.
///
/// `save-method` is kept as a plain string in the schema so a newer binary
/// can hand an unknown method to an external persistence plugin, but the
/// validator rejects values outside this set to catch typos early.
pub const SAVE_METHODS: &[&str] = &["local", "webdav", "gist", "worker", "s3"];

/// Default media check platforms.
pub fn default_platforms() -> Vec<String> {
    vec![
        "openai".to_string(),
        "youtube".to_string(),
        "netflix".to_string(),
        "disney".to_string(),
        "gemini".to_string(),
        "iprisk".to_string(),
    ]
}

// Default value functions for serde
pub(crate) fn default_listen_port() -> String {
    ":8199".to_string()
}
pub(crate) fn default_notify_title() -> String {
    "🔔 Node status update".to_string()
}
pub(crate) fn default_mihomo_overwrite_url() -> String {
    "http://127.0.0.1:8199/sub/ACL4SSR_Online_Full.yaml".to_string()
}
pub(crate) fn default_download_mb() -> u32 {
    20
}
pub(crate) fn default_alive_test_url() -> String {
    "http://gstatic.com/generate_204".to_string()
}
pub(crate) fn default_sub_urls_get_ua() -> String {
    "clash.meta".to_string()
}
