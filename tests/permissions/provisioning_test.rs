/*!
 * Provisioning Integration Tests
 * Auth config loading feeding principal authorization
 */

use rbac_scopes::{AuthConfig, AuthzError, ConfigError, Principal, ScopeError, ScopeHolder, Scopes};
use std::io::Write;
use tempfile::NamedTempFile;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("rbac_scopes=debug")
        .with_test_writer()
        .try_init();
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_provision_from_config_file() {
    init_tracing();
    let file = write_config(
        r#"{"new_user_default_scopes": ["devices:read", "devices:read-update", "updates:read"]}"#,
    );

    let config = AuthConfig::from_path(file.path()).unwrap();
    let user = Principal::provision("noauth-fake-user", &config);

    assert_eq!(user.username, "noauth-fake-user");
    assert_eq!(user.allowed_scopes.to_string(), "devices:read-update,updates:read");
    assert!(user.authorize(Scopes::DEVICES_READ).is_ok());
    assert!(user.has_scope(Scopes::UPDATES_READ));
}

#[test]
fn test_invalid_default_scope_fails_load() {
    let file = write_config(r#"{"new_user_default_scopes": ["devices:read", "updates:delete"]}"#);

    match AuthConfig::from_path(file.path()) {
        Err(ConfigError::Scope(ScopeError::InvalidScope(token))) => {
            assert_eq!(token, "updates:delete")
        }
        other => panic!("expected invalid scope, got {other:?}"),
    }
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = AuthConfig::from_path(dir.path().join("auth.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_denial_names_missing_scopes() {
    init_tracing();
    let config = AuthConfig::from_json_str(r#"{"new_user_default_scopes": ["users:read"]}"#).unwrap();
    let mut user = Principal::provision("operator", &config);

    let required = Scopes::USERS_READ | Scopes::USERS_DELETE | Scopes::DEVICES_DELETE;
    let err = user.authorize(required).unwrap_err();
    assert_eq!(
        err,
        AuthzError::MissingScopes {
            principal: "operator".into(),
            missing: "devices:delete,users:delete".into(),
        }
    );

    user.grant(Scopes::USERS_DELETE | Scopes::DEVICES_DELETE);
    assert!(user.authorize(required).is_ok());
}

#[test]
fn test_merge_sources_of_authority() {
    let base = Principal::new("svc", Scopes::UPDATES_READ);
    let session = Principal::new("svc", Scopes::UPDATES_READ_UPDATE | Scopes::DEVICES_READ);

    let merged = base.merged(&session);
    assert_eq!(merged.scopes(), Scopes::UPDATES_READ_UPDATE | Scopes::DEVICES_READ);
    assert_eq!(merged.scopes().to_string(), "devices:read,updates:read-update");
}
