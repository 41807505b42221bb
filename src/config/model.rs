//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for the subscription checker.
///
/// This struct represents the contents of `config.yaml`. Field names use the
/// kebab-case spelling of the YAML document. Unknown fields in the YAML are
/// ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    // =========================================================================
    // Probe settings
    // =========================================================================
    /// Print per-node progress while checking.
    pub print_progress: bool,

    /// Number of nodes probed in parallel.
    pub concurrent: u32,

    /// Minutes between check rounds (ignored when a cron expression is set).
    pub check_interval: u32,

    /// Cron expression for scheduled check rounds (empty disables).
    pub cron_expression: String,

    /// URL probed to decide whether a node is alive.
    #[serde(default = "default_alive_test_url")]
    pub alive_test_url: String,

    /// URL downloaded to measure node bandwidth (empty disables speed test).
    pub speed_test_url: String,

    /// Seconds allowed for the speed-test download.
    pub download_timeout: u32,

    /// Megabytes fetched per speed test.
    #[serde(default = "default_download_mb")]
    pub download_mb: u32,

    /// Total download bandwidth cap across all probes, in Mbps (0 = no cap).
    pub total_speed_limit: u32,

    /// Minimum speed in KB/s for a node to count as usable.
    pub min_speed: u32,

    /// Seconds allowed for a single alive probe.
    pub timeout: u32,

    /// Regex applied to node names; non-matching nodes are dropped.
    pub filter_regex: String,

    // =========================================================================
    // Subscription sources
    // =========================================================================
    /// Retry count for fetching a subscription URL.
    pub sub_urls_retry: u32,

    /// Seconds between subscription fetch retries.
    pub sub_urls_retry_interval: u32,

    /// Seconds allowed for fetching one subscription URL.
    pub sub_urls_timeout: u32,

    /// User-Agent sent when fetching subscription URLs.
    #[serde(default = "default_sub_urls_get_ua")]
    pub sub_urls_get_ua: String,

    /// Additional subscription lists fetched from remote indexes.
    pub sub_urls_remote: Vec<String>,

    /// Subscription URLs to check. This is the list section the `remove`
    /// command edits in place.
    pub sub_urls: Vec<String>,

    /// Fraction of passing nodes a subscription must yield to stay listed.
    pub success_rate: f32,

    /// Drop subscription URLs from the config file once they fail.
    pub remove_failed_sub: bool,

    // =========================================================================
    // Save targets
    // =========================================================================
    /// Where results are persisted: local, webdav, gist, worker, or s3.
    pub save_method: String,

    /// Directory for local saves (empty = default output directory).
    pub output_dir: String,

    /// WebDAV endpoint and credentials.
    pub webdav_url: String,
    pub webdav_username: String,
    pub webdav_password: String,

    /// GitHub gist upload settings.
    pub github_token: String,
    pub github_gist_id: String,
    pub github_api_mirror: String,

    /// Worker upload endpoint and token.
    pub worker_url: String,
    pub worker_token: String,

    /// S3-compatible storage settings.
    pub s3_endpoint: String,
    pub s3_access_id: String,
    pub s3_secret_key: String,
    pub s3_bucket: String,
    pub s3_use_ssl: bool,
    pub s3_bucket_lookup: String,

    // =========================================================================
    // Service endpoints
    // =========================================================================
    /// Address the built-in subscription server listens on.
    #[serde(default = "default_listen_port")]
    pub listen_port: String,

    /// Mihomo API endpoint used to apply checked results.
    pub mihomo_api_url: String,
    pub mihomo_api_secret: String,

    /// Overwrite template URL handed to mihomo.
    #[serde(default = "default_mihomo_overwrite_url")]
    pub mihomo_overwrite_url: String,

    // =========================================================================
    // Notifications
    // =========================================================================
    /// Apprise API server for notification delivery (empty disables).
    pub apprise_api_server: String,

    /// Notification recipient URLs in apprise syntax.
    pub recipient_url: Vec<String>,

    /// Title line of status notifications.
    #[serde(default = "default_notify_title")]
    pub notify_title: String,

    // =========================================================================
    // Sub-store integration
    // =========================================================================
    pub sub_store_port: String,
    pub sub_store_path: String,
    pub sub_store_sync_cron: String,
    pub sub_store_push_service: String,
    pub sub_store_produce_cron: String,

    // =========================================================================
    // Node handling
    // =========================================================================
    /// Rename nodes to a normalized `{prefix}{region}{index}` form.
    pub rename_node: bool,

    /// Keep nodes that passed the previous round in the next round's input.
    pub keep_success_proxies: bool,

    /// Run media unlock checks against `platforms`.
    pub media_check: bool,

    /// Platforms probed by the media check.
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,

    /// Stop collecting once this many nodes pass (0 = unlimited).
    pub success_limit: u32,

    /// Prefix for renamed nodes.
    pub node_prefix: String,

    /// Node protocol types to include (empty = all).
    pub node_type: Vec<String>,

    // =========================================================================
    // Web UI and hooks
    // =========================================================================
    /// Serve the embedded web UI.
    pub enable_web_ui: bool,

    /// API key guarding the web UI and HTTP API.
    pub api_key: String,

    /// Proxy prefix for GitHub downloads.
    pub github_proxy: String,

    /// Outbound proxy used by the checker itself.
    pub proxy: String,

    /// Script executed after each check round (shell-words parsed; no shell).
    pub callback_script: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            print_progress: false,
            concurrent: 0,
            check_interval: 0,
            cron_expression: String::new(),
            alive_test_url: default_alive_test_url(),
            speed_test_url: String::new(),
            download_timeout: 0,
            download_mb: default_download_mb(),
            total_speed_limit: 0,
            min_speed: 0,
            timeout: 0,
            filter_regex: String::new(),
            sub_urls_retry: 0,
            sub_urls_retry_interval: 0,
            sub_urls_timeout: 0,
            sub_urls_get_ua: default_sub_urls_get_ua(),
            sub_urls_remote: Vec::new(),
            sub_urls: Vec::new(),
            success_rate: 0.0,
            remove_failed_sub: false,
            save_method: String::new(),
            output_dir: String::new(),
            webdav_url: String::new(),
            webdav_username: String::new(),
            webdav_password: String::new(),
            github_token: String::new(),
            github_gist_id: String::new(),
            github_api_mirror: String::new(),
            worker_url: String::new(),
            worker_token: String::new(),
            s3_endpoint: String::new(),
            s3_access_id: String::new(),
            s3_secret_key: String::new(),
            s3_bucket: String::new(),
            s3_use_ssl: false,
            s3_bucket_lookup: String::new(),
            listen_port: default_listen_port(),
            mihomo_api_url: String::new(),
            mihomo_api_secret: String::new(),
            mihomo_overwrite_url: default_mihomo_overwrite_url(),
            apprise_api_server: String::new(),
            recipient_url: Vec::new(),
            notify_title: default_notify_title(),
            sub_store_port: String::new(),
            sub_store_path: String::new(),
            sub_store_sync_cron: String::new(),
            sub_store_push_service: String::new(),
            sub_store_produce_cron: String::new(),
            rename_node: false,
            keep_success_proxies: false,
            media_check: false,
            platforms: default_platforms(),
            success_limit: 0,
            node_prefix: String::new(),
            node_type: Vec::new(),
            enable_web_ui: false,
            api_key: String::new(),
            github_proxy: String::new(),
            proxy: String::new(),
            callback_script: String::new(),
        }
    }
}
