/// Application-level constants
pub const APP_NAME: &str = "Careplan";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default base address of the treatment-planning service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout for plan generation, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_base_url_is_local() {
        assert!(DEFAULT_BASE_URL.starts_with("http://localhost"));
        assert!(!DEFAULT_BASE_URL.ends_with('/'));
    }

    #[test]
    fn default_filter_targets_this_crate() {
        assert_eq!(default_log_filter(), "careplan=info");
    }
}
