use crate::server::{
    middleware::session::{SessionCookies, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE},
    model::auth::SessionTokens,
};
use axum_extra::extract::cookie::{CookieJar, SameSite};

fn tokens() -> SessionTokens {
    SessionTokens {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
    }
}

/// Tests that set cookies are read back with the expected attributes.
///
/// Expected: both tokens present, httpOnly, Lax, root path, one week
#[test]
fn sets_cookies_with_session_attributes() {
    let cookies = SessionCookies::new(true);
    let jar = cookies.set(CookieJar::new(), &tokens());

    assert_eq!(
        cookies.tokens(&jar),
        (Some("access".to_string()), Some("refresh".to_string()))
    );

    for name in [ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE] {
        let cookie = jar.get(name).unwrap();
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::weeks(1)));
    }
}

/// Tests that clearing removes both cookies.
///
/// Expected: no tokens readable afterwards
#[test]
fn clear_removes_both_cookies() {
    let cookies = SessionCookies::new(false);
    let jar = cookies.clear(cookies.set(CookieJar::new(), &tokens()));

    assert_eq!(cookies.tokens(&jar), (None, None));
}
