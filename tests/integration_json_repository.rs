mod common;

use common::*;
use podash::persistence::{JsonFileRepository, PermissionRepository};
use podash::PermissionSession;
use podash_config::{EngineConfig, StorageConfig};
use podash_core::ErrorKind;
use podash_models::ModuleStatus;
use std::collections::HashMap;
use tempfile::TempDir;

async fn seeded_repo(dir: &TempDir, roles: &[podash_models::Role]) -> JsonFileRepository {
    let vars = HashMap::from([(
        "PODASH_DATA_DIR".to_string(),
        dir.path().display().to_string(),
    )]);
    let storage = StorageConfig::from_vars(|key| vars.get(key).cloned());
    let repo = JsonFileRepository::from_config(&storage);

    repo.write_catalog(&test_catalog()).await.unwrap();
    repo.write_roles(roles).await.unwrap();
    repo
}

#[tokio::test]
async fn test_commit_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let repo = seeded_repo(&dir, &[test_role("r", &[READ_USERS])]).await;

    let mut session = PermissionSession::open(repo.clone(), EngineConfig::default())
        .await
        .unwrap();
    session.toggle_module_permissions("r", ORDERS, true).unwrap();
    session.commit().await.unwrap();

    let reopened = PermissionSession::open(repo, EngineConfig::default())
        .await
        .unwrap();
    assert_eq!(
        reopened.module_status("r", ORDERS).unwrap(),
        ModuleStatus::All
    );
    assert!(reopened.has_permission("r", READ_USERS).unwrap());
    assert!(!reopened.is_dirty());
}

#[tokio::test]
async fn test_commit_writes_only_dirty_roles() {
    let dir = TempDir::new().unwrap();
    let repo = seeded_repo(&dir, &[test_role("a", &[]), test_role("b", &[READ_ORDERS])]).await;

    let mut first = PermissionSession::open(repo.clone(), EngineConfig::default())
        .await
        .unwrap();
    let mut second = PermissionSession::open(repo.clone(), EngineConfig::default())
        .await
        .unwrap();

    first.toggle_permission("a", READ_USERS).unwrap();
    second.toggle_permission("b", READ_ORDERS).unwrap();
    first.commit().await.unwrap();
    second.commit().await.unwrap();

    let stored = repo.load_roles().await.unwrap();
    let a = stored.iter().find(|r| r.id.as_str() == "a").unwrap();
    let b = stored.iter().find(|r| r.id.as_str() == "b").unwrap();
    assert_eq!(permission_ids(a), vec![READ_USERS]);
    assert!(b.permissions.is_empty());
}

#[tokio::test]
async fn test_open_rejects_duplicate_catalog_ids() {
    let dir = TempDir::new().unwrap();
    let repo = seeded_repo(&dir, &[]).await;
    let mut catalog = test_catalog();
    catalog.push(catalog[0].clone());
    repo.write_catalog(&catalog).await.unwrap();

    let err = PermissionSession::open(repo, EngineConfig::default())
        .await
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::Unprocessable);
}

#[tokio::test]
async fn test_open_rejects_duplicate_role_ids() {
    let dir = TempDir::new().unwrap();
    let repo = seeded_repo(&dir, &[test_role("r", &[]), test_role("r", &[READ_ORDERS])]).await;

    let err = PermissionSession::open(repo, EngineConfig::default())
        .await
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn test_open_rejects_blank_role_name() {
    let dir = TempDir::new().unwrap();
    let mut role = test_role("r", &[]);
    role.name = "  ".to_string();
    let repo = seeded_repo(&dir, &[role]).await;

    let err = PermissionSession::open(repo, EngineConfig::default())
        .await
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::Unprocessable);
}

#[tokio::test]
async fn test_missing_data_dir_fails_with_storage_error() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(
        dir.path().join("absent").join("catalog.json"),
        dir.path().join("absent").join("roles.json"),
    );

    let err = PermissionSession::open(repo, EngineConfig::default())
        .await
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::Storage);
}

#[tokio::test]
async fn test_roles_file_round_trips_metadata() {
    let dir = TempDir::new().unwrap();
    let mut role = test_role("r", &[READ_PRODUCTS]);
    role.description = Some("Catalog team".to_string());
    role.color = Some("teal".to_string());
    let repo = seeded_repo(&dir, std::slice::from_ref(&role)).await;

    let loaded = repo.load_roles().await.unwrap();

    assert_eq!(loaded, vec![role]);
}
