//! Tests for repository factory and configuration parsing.

use std::sync::Mutex;

use resbook::db::{
    FullRepository, RepositoryConfig, RepositoryFactory, RepositoryType, ResourceRepository,
};

// Process-global env vars need serialized access when tests run in parallel.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn with_repository_type_env<R>(value: Option<&str>, f: impl FnOnce() -> R) -> R {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let previous = std::env::var("REPOSITORY_TYPE").ok();
    match value {
        Some(v) => std::env::set_var("REPOSITORY_TYPE", v),
        None => std::env::remove_var("REPOSITORY_TYPE"),
    }
    let result = f();
    match previous {
        Some(v) => std::env::set_var("REPOSITORY_TYPE", v),
        None => std::env::remove_var("REPOSITORY_TYPE"),
    }
    result
}

#[test]
fn test_repository_type_from_env_default() {
    with_repository_type_env(None, || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
}

#[test]
fn test_repository_type_from_env_explicit() {
    with_repository_type_env(Some("local"), || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
    // Unknown values fall back to the default rather than aborting startup.
    with_repository_type_env(Some("cassandra"), || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
}

#[tokio::test]
async fn test_factory_creates_working_repository() {
    let repo = RepositoryFactory::create(RepositoryType::Local).unwrap();
    assert!(repo.health_check().await.unwrap());
    assert!(repo.list_resources(None).await.unwrap().is_empty());
}

#[test]
fn test_config_round_trip() {
    let config: RepositoryConfig = toml::from_str(
        r#"
        [repository]
        type = "memory"
        "#,
    )
    .unwrap();
    assert_eq!(config.repository_type(), Ok(RepositoryType::Local));

    let rendered = toml::to_string(&config).unwrap();
    assert!(rendered.contains("type = \"memory\""));
}
