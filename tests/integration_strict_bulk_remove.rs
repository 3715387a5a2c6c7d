mod common;

use common::*;
use podash_config::BulkRemoveMode;
use podash_models::ModuleStatus;

#[tokio::test]
async fn test_strict_uncheck_keeps_prior_grants() {
    let mut session =
        open_session_with(vec![test_role("r", &[READ_ORDERS])], BulkRemoveMode::Strict).await;

    session.toggle_module_permissions("r", ORDERS, true).unwrap();
    let role = session.toggle_module_permissions("r", ORDERS, false).unwrap();

    assert_eq!(permission_ids(role), vec![READ_ORDERS]);
    assert_eq!(
        session.module_status("r", ORDERS).unwrap(),
        ModuleStatus::Partial
    );
}

#[tokio::test]
async fn test_strict_uncheck_keeps_individual_toggles() {
    let mut session = open_session_with(vec![test_role("r", &[])], BulkRemoveMode::Strict).await;

    session.toggle_module_permissions("r", ORDERS, true).unwrap();
    // off and on again: now an individual grant
    session.toggle_permission("r", WRITE_ORDERS).unwrap();
    session.toggle_permission("r", WRITE_ORDERS).unwrap();
    let role = session.toggle_module_permissions("r", ORDERS, false).unwrap();

    assert_eq!(permission_ids(role), vec![WRITE_ORDERS]);
}

#[tokio::test]
async fn test_strict_uncheck_without_bulk_check_is_noop_but_dirty() {
    let mut session = open_session_with(
        vec![test_role("r", &[READ_ORDERS, WRITE_ORDERS])],
        BulkRemoveMode::Strict,
    )
    .await;

    let role = session.toggle_module_permissions("r", ORDERS, false).unwrap();

    assert_eq!(permission_ids(role), vec![READ_ORDERS, WRITE_ORDERS]);
    assert!(session.is_dirty());
}

#[tokio::test]
async fn test_strict_bulk_check_still_grants_whole_module() {
    let mut session =
        open_session_with(vec![test_role("r", &[READ_USERS])], BulkRemoveMode::Strict).await;

    session.toggle_module_permissions("r", ORDERS, true).unwrap();

    assert_eq!(session.module_status("r", ORDERS).unwrap(), ModuleStatus::All);
    assert!(session.has_permission("r", READ_USERS).unwrap());
}

#[tokio::test]
async fn test_discard_forgets_bulk_grants() {
    let mut session =
        open_session_with(vec![test_role("r", &[READ_ORDERS])], BulkRemoveMode::Strict).await;
    session.toggle_module_permissions("r", ORDERS, true).unwrap();
    session.discard();

    // write-orders was never granted after the discard, read-orders predates the session
    let role = session.toggle_module_permissions("r", ORDERS, false).unwrap();

    assert_eq!(permission_ids(role), vec![READ_ORDERS]);
}

#[tokio::test]
async fn test_strict_uncheck_refreshes_updated_at() {
    let mut session = open_session_with(
        vec![stale_role("bulk", &[]), stale_role("held", &[READ_ORDERS])],
        BulkRemoveMode::Strict,
    )
    .await;
    let stale = session.role("bulk").unwrap().updated_at;

    session.toggle_module_permissions("bulk", ORDERS, true).unwrap();
    let role = session.toggle_module_permissions("bulk", ORDERS, false).unwrap();
    assert!(role.permissions.is_empty());
    assert!(role.updated_at > stale);

    // nothing bulk-granted to revoke
    let role = session.toggle_module_permissions("held", ORDERS, false).unwrap();
    assert_eq!(permission_ids(role), vec![READ_ORDERS]);
    assert!(role.updated_at > stale);
}
