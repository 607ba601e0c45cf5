// emosafe-core/tests/pool_config_tests.rs
use anyhow::Result;
use tempfile::NamedTempFile;
use std::io::Write;

use emosafe_core::pool::{EmojiPool, PoolConfig, DEFAULT_GROUPS};
use emosafe_core::{build_emoji_map, EmosafeError};

fn write_pool_file(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test]
fn test_builtin_groups() {
    assert_eq!(DEFAULT_GROUPS.len(), 5);
    for (name, group) in DEFAULT_GROUPS {
        assert_eq!(group.len(), 20, "group {} should hold 20 emoji", name);
    }
    assert_eq!(EmojiPool::default().len(), 100);
}

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
groups:
  - name: animals
    emojis: ["🦊", "🐼"]
  - name: fruit
    emojis:
      - "🍓"
"#;
    let file = write_pool_file(yaml_content)?;
    let config = PoolConfig::load_from_file(file.path())?;
    assert_eq!(config.groups.len(), 2);
    assert_eq!(config.groups[0].name, "animals");

    let pool = config.into_pool()?;
    let entries: Vec<&str> = pool.iter().collect();
    assert_eq!(entries, vec!["🦊", "🐼", "🍓"]);
    Ok(())
}

#[test]
fn test_custom_pool_drives_mapping() -> Result<()> {
    let file = write_pool_file("groups:\n  - name: one\n    emojis: [\"🦊\", \"🍓\"]\n")?;
    let pool = EmojiPool::load_from_file(file.path())?;
    let map = build_emoji_map(&["🐶", "🍎", "🚀"], &pool);
    let pairs: Vec<(&str, &str)> = map.iter().collect();
    assert_eq!(pairs, vec![("🐶", "🦊"), ("🍎", "🍓"), ("🚀", "🦊")]);
    Ok(())
}

#[test]
fn test_duplicates_across_groups_are_rejected() -> Result<()> {
    let yaml_content = r#"
groups:
  - name: a
    emojis: ["🦊"]
  - name: b
    emojis: ["🦊"]
"#;
    let file = write_pool_file(yaml_content)?;
    let err = EmojiPool::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, EmosafeError::InvalidPool(_)));
    assert!(err.to_string().contains("duplicate entry '🦊'"));
    Ok(())
}

#[test]
fn test_empty_pool_file_is_rejected() -> Result<()> {
    let file = write_pool_file("groups: []\n")?;
    let err = EmojiPool::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, EmosafeError::InvalidPool(_)));
    Ok(())
}

#[test]
fn test_unparsable_pool_file() -> Result<()> {
    let file = write_pool_file("groups: [ this is: not valid")?;
    let err = PoolConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, EmosafeError::PoolConfig(_, _)));
    Ok(())
}

#[test]
fn test_missing_pool_file() {
    let err = PoolConfig::load_from_file("/definitely/not/here/pool.yaml").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here/pool.yaml"));
}
