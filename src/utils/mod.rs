//! Utility modules for the seeder
//!
//! - **error**: crate-wide error type and `Result` alias
//! - **logging**: tracing subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging

pub use logging::{LogFormat, init_logging};

/// Truncate string to specified length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Check if a string is a valid http(s) URL
pub fn is_valid_url(url: &str) -> bool {
    url::Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}
