/*!
 * Scope Codec Integration Tests
 * Parsing, canonical listing and membership through the public API
 */

use pretty_assertions::assert_eq;
use rbac_scopes::permissions::{self, Scopes};
use rbac_scopes::ScopeError;

#[test]
fn test_parse_rejects_invalid_tokens() {
    let cases = [
        ("device:read,users:read-update", "device:read"),
        ("devices:read,users:read-updat", "users:read-updat"),
        ("devices:read,updates:delete", "updates:delete"),
    ];

    for (input, bad) in cases {
        let err = permissions::parse_str(input).unwrap_err();
        assert_eq!(err, ScopeError::InvalidScope(bad.to_string()), "input: {input}");
    }
}

#[test]
fn test_parse_handles_white_space() {
    let scopes = permissions::parse_str("devices:read, users:read-update").unwrap();
    assert_eq!(scopes, Scopes::DEVICES_READ | Scopes::USERS_READ_UPDATE);
    assert!(scopes.has(Scopes::DEVICES_READ));
    assert!(scopes.has(Scopes::USERS_READ));
    assert!(!scopes.has(Scopes::DEVICES_DELETE));
}

#[test]
fn test_parse_normalizes_supersets() {
    let scopes = permissions::parse_str("devices:read, devices:read-update,updates:read").unwrap();
    assert_eq!(scopes, Scopes::DEVICES_READ_UPDATE | Scopes::UPDATES_READ);
    assert!(scopes.has(Scopes::DEVICES_READ));
    assert!(scopes.has(Scopes::DEVICES_READ_UPDATE));
    assert!(scopes.has(Scopes::UPDATES_READ));
    assert!(!scopes.has(Scopes::DEVICES_DELETE));
    assert_eq!(
        permissions::to_names(scopes),
        vec!["devices:read-update", "updates:read"]
    );
}

#[test]
fn test_to_names_then_parse() {
    let cases = [
        (
            Scopes::DEVICES_READ | Scopes::USERS_READ_UPDATE,
            vec!["devices:read", "users:read-update"],
        ),
        (
            Scopes::DEVICES_READ | Scopes::USERS_READ | Scopes::USERS_DELETE,
            vec!["devices:read", "users:delete", "users:read"],
        ),
        (
            Scopes::USERS_READ_UPDATE | Scopes::USERS_CREATE | Scopes::UPDATES_READ_UPDATE,
            vec!["updates:read-update", "users:create", "users:read-update"],
        ),
    ];

    for (scopes, want) in cases {
        let names = permissions::to_names(scopes);
        assert_eq!(names, want);
        assert_eq!(permissions::parse_tokens(&names).unwrap(), scopes);
    }
}

#[test]
fn test_serialize_joins_without_spaces() {
    let scopes = Scopes::DEVICES_DELETE | Scopes::DEVICES_READ | Scopes::UPDATES_READ_UPDATE;
    assert_eq!(
        permissions::serialize(scopes),
        "devices:delete,devices:read,updates:read-update"
    );
    assert_eq!(permissions::serialize(Scopes::EMPTY), "");
}

#[test]
fn test_empty_input_is_rejected() {
    assert_eq!(
        permissions::parse_str("").unwrap_err(),
        ScopeError::InvalidScope(String::new())
    );
    assert_eq!(permissions::parse_tokens(Vec::<String>::new()).unwrap(), Scopes::EMPTY);
}

#[test]
fn test_has_zero_requirement() {
    assert!(permissions::has(Scopes::EMPTY, Scopes::EMPTY));
    assert!(permissions::has(Scopes::USERS_CREATE, Scopes::EMPTY));
    assert!(!permissions::has(Scopes::EMPTY, Scopes::USERS_CREATE));
}

#[test]
fn test_available_names() {
    let names = permissions::available_names();
    assert_eq!(names.len(), 9);
    assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
    for name in names {
        assert!(permissions::parse_str(name).is_ok());
    }
}

#[test]
fn test_catalog_is_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let scopes = permissions::parse_str("users:read-update,devices:delete").unwrap();
                permissions::serialize(scopes)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "devices:delete,users:read-update");
    }
}
