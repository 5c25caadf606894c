use parking_lot::RwLock;
use tracing::{info, trace};

use crate::common::APP_CONFIG;

/// The API base URL every fresh configuration starts out with.
pub const DEFAULT_API_URL: &str = "https://api.example.com";

/// The process-wide application configuration.
///
/// There is exactly one of these per process, reached through [`AppConfig::get_instance`].
/// It is never cloned: every holder shares the same record, and writes through one reference
/// are seen through all the others.
#[derive(Debug)]
pub struct AppConfig {
    api_url: RwLock<String>,
}

impl AppConfig {
    pub(crate) fn new() -> Self {
        Self {
            api_url: RwLock::new(DEFAULT_API_URL.to_string()),
        }
    }

    /// Get the shared instance, creating it with the default API URL on first use.
    pub fn get_instance() -> &'static Self {
        &APP_CONFIG
    }

    /// The current API base URL, exactly as it was last stored
    pub fn api_url(&self) -> String {
        let api_url = self.api_url.read();
        trace!("Read api url {}", *api_url);
        api_url.clone()
    }

    /// Replace the API base URL. Any string is accepted as-is, including an empty one.
    pub fn set_api_url(&self, new_url: impl Into<String>) {
        let new_url = new_url.into();
        let mut api_url = self.api_url.write();
        info!("Updating api url from {} to {}", *api_url, new_url);
        *api_url = new_url;
    }

    /// Whether `self` and `other` are the same record in memory
    pub fn is_same_instance(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DEFAULT_API_URL};
    use crate::test::make_config;

    #[test]
    fn test_new_config_has_default_url() {
        let config = AppConfig::new();
        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert_eq!(config.api_url(), "https://api.example.com");
    }

    #[test]
    fn test_set_api_url_is_visible_through_other_references() {
        let config = make_config();
        let first = config;
        let second = config;

        first.set_api_url("https://api.new-example.com");

        assert_eq!(second.api_url(), "https://api.new-example.com");
    }

    #[test]
    fn test_identity_survives_mutation() {
        let config = make_config();
        let before = config;
        config.set_api_url("https://mutated.example.com");
        let after = config;

        assert!(before.is_same_instance(after));
    }

    #[test]
    fn test_distinct_records_are_not_the_same_instance() {
        let a = make_config();
        let b = make_config();

        assert!(!a.is_same_instance(b));
        a.set_api_url("only-a");
        assert_eq!(b.api_url(), DEFAULT_API_URL);
    }

    macro_rules! set_api_url_tests {
        ($($name:ident: $value:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let config = make_config();
                    let value: &str = $value;
                    config.set_api_url(value);
                    assert_eq!(value, config.api_url());
                }
            )*
        }
    }

    set_api_url_tests! {
        set_api_url_empty: "",
        set_api_url_whitespace_kept: "  https://api.example.com/  ",
        set_api_url_not_a_url: "definitely not a url",
        set_api_url_unicode: "https://例え.テスト/パス",
    }

    #[test]
    fn test_set_api_url_accepts_owned_strings() {
        let config = make_config();
        config.set_api_url(String::from("https://owned.example.com"));
        assert_eq!(config.api_url(), "https://owned.example.com");
    }
}
