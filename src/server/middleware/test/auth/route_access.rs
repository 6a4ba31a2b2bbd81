use super::*;

/// Tests path classification for the auth middleware.
///
/// Expected: auth endpoints public, other API paths and deck pages protected
#[test]
fn classifies_paths() {
    let cases = [
        ("/api/auth/login", RouteAccess::Public),
        ("/api/auth/user", RouteAccess::Public),
        ("/api/decks", RouteAccess::Protected),
        ("/api/cards/1/status", RouteAccess::Protected),
        ("/api/authors", RouteAccess::Protected),
        ("/decks", RouteAccess::Protected),
        ("/decks/abc/study", RouteAccess::Protected),
        ("/login", RouteAccess::Public),
        ("/", RouteAccess::Public),
        ("/apiary", RouteAccess::Public),
    ];

    for (path, expected) in cases {
        assert_eq!(route_access(path), expected, "{}", path);
    }
}

/// Tests JSON detection on the Accept header.
///
/// Expected: true only when application/json is listed
#[test]
fn detects_json_clients() {
    let mut headers = HeaderMap::new();
    assert!(!accepts_json(&headers));

    headers.insert(ACCEPT, HeaderValue::from_static("text/html"));
    assert!(!accepts_json(&headers));

    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    assert!(accepts_json(&headers));
}
