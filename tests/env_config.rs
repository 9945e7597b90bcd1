//! Environment fallbacks for connection settings. The tests mutate the
//! process environment, so they share a lock.

use std::sync::Mutex;
use std::time::Duration;

use kaizen::config::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, TIMEOUT_ENV};
use kaizen::{HttpConfig, KaizenClient};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_env() {
    for var in [API_KEY_ENV, BASE_URL_ENV, TIMEOUT_ENV] {
        std::env::remove_var(var);
    }
}

#[test]
fn api_key_falls_back_to_environment() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    std::env::set_var(API_KEY_ENV, "sk-env");

    let implicit = KaizenClient::builder().build().unwrap();
    assert_eq!(implicit.http().config().api_key, "sk-env");

    let empty = KaizenClient::builder().api_key("").build().unwrap();
    assert_eq!(empty.http().config().api_key, "sk-env");

    let explicit = KaizenClient::builder().api_key("sk-explicit").build().unwrap();
    assert_eq!(explicit.http().config().api_key, "sk-explicit");

    clear_env();
}

#[test]
fn base_url_and_timeout_fall_back_to_environment() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    std::env::set_var(BASE_URL_ENV, "https://staging.kaizen.local/");
    std::env::set_var(TIMEOUT_ENV, "12");

    let config = HttpConfig::from_env().unwrap();
    assert_eq!(config.base_url, "https://staging.kaizen.local");
    assert_eq!(config.timeout, Duration::from_secs(12));
    assert!(!config.has_api_key());

    let client = KaizenClient::builder()
        .base_url("http://localhost:9000")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let config = client.http().config();
    assert_eq!(config.base_url, "http://localhost:9000");
    assert_eq!(config.timeout, Duration::from_secs(2));

    clear_env();
}

#[test]
fn unusable_environment_values_use_defaults_or_fail() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let config = HttpConfig::from_env().unwrap();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.api_key, "");

    std::env::set_var(TIMEOUT_ENV, "soon");
    assert_eq!(HttpConfig::from_env().unwrap().timeout, Duration::from_secs(30));

    std::env::set_var(BASE_URL_ENV, "ftp://kaizen.local");
    let err = KaizenClient::builder().build().unwrap_err();
    assert_eq!(err.field(), Some("base_url"));

    clear_env();
}
