//! Tests for graphknow-core: env-derived configuration

use graphknow_core::{Error, OpenAiConfig, StoreConfig};

// Each test owns a distinct set of env vars so parallel runs don't race.

#[test]
fn store_config_reads_env() {
    std::env::set_var("DB_URL", "bolt://localhost:7687");
    std::env::set_var("DB_USERNAME", "neo4j");
    std::env::set_var("DB_PASSWORD", "secret");

    let config = StoreConfig::from_env().unwrap();
    assert_eq!(config.url, "bolt://localhost:7687");
    assert_eq!(config.username, "neo4j");
    assert_eq!(config.password, "secret");

    std::env::remove_var("DB_PASSWORD");
    let err = StoreConfig::from_env().unwrap_err();
    assert!(matches!(err, Error::MissingEnv("DB_PASSWORD")));

    std::env::remove_var("DB_URL");
    std::env::remove_var("DB_USERNAME");
}

#[test]
fn openai_config_reads_env() {
    std::env::set_var("OPENAI_API_KEY", "sk-test");
    let config = OpenAiConfig::from_env().unwrap();
    assert_eq!(config.api_key, "sk-test");

    std::env::set_var("OPENAI_BASE_URL", "http://localhost:8080/v1");
    let config = OpenAiConfig::from_env().unwrap();
    assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080/v1"));

    std::env::remove_var("OPENAI_API_KEY");
    std::env::remove_var("OPENAI_BASE_URL");
    let err = OpenAiConfig::from_env().unwrap_err();
    assert!(matches!(err, Error::MissingEnv("OPENAI_API_KEY")));
}

#[test]
fn missing_env_display_names_the_variable() {
    let err = Error::MissingEnv("DB_URL");
    assert_eq!(err.to_string(), "missing environment variable: DB_URL");
}
