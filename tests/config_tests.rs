//! Static config loading tests

use std::io::Write;

use tempfile::NamedTempFile;

use shortlink_redirector::backend::{LinkBackend, create_backend};
use shortlink_redirector::config::{BackendKind, StaticConfig};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(content.as_bytes()).unwrap();
    file
}

const MEMORY_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 9090

[backend]
kind = "memory"

[[backend.links]]
short_name = "gh"
target_url = "https://github.com"

[[backend.links]]
short_name = "docs"
target_url = "https://docs.example.com"
"#;

#[tokio::test]
async fn test_load_memory_backend_from_file() {
    let file = write_config(MEMORY_CONFIG);
    let config = StaticConfig::load_from(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.backend.kind, BackendKind::Memory);
    assert_eq!(config.backend.links.len(), 2);

    let backend = create_backend(&config.backend).unwrap();
    let records = backend.get_link("docs").await.unwrap().unwrap();
    assert_eq!(records[0].target_url, "https://docs.example.com");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = StaticConfig::load("/definitely/not/here.toml");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.backend.kind, BackendKind::Http);
    assert!(config.backend.links.is_empty());
}

#[test]
fn test_invalid_backend_kind_is_an_error() {
    let file = write_config("[backend]\nkind = \"redis\"\n");
    assert!(StaticConfig::load_from(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_env_overrides_file() {
    let file = write_config(MEMORY_CONFIG);
    // SAFETY: 本文件中只有这个测试读写该环境变量
    unsafe {
        std::env::set_var("REDIRECTOR__LOGGING__LEVEL", "debug");
    }

    let config = StaticConfig::load_from(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.logging.level, "debug");

    unsafe {
        std::env::remove_var("REDIRECTOR__LOGGING__LEVEL");
    }
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("generated.toml");

    StaticConfig::default().save_to_file(&path).unwrap();
    let config = StaticConfig::load_from(path.to_str().unwrap()).unwrap();
    assert_eq!(config.backend.timeout_secs, 5);
    assert_eq!(config.logging.format, "text");
}
