//! Session cookie reading and writing on top of [`CookieJar`].

use std::time::Duration;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::config::AppConfig;

/// Token carried by the session cookie `name`, ignoring empty values.
pub fn session_token(jar: &CookieJar, name: &str) -> Option<String> {
    jar.get(name)
        .map(|cookie| cookie.value_trimmed().to_owned())
        .filter(|token| !token.is_empty())
}

/// Add the session cookie handing `token` to the browser for the session lifetime.
pub fn issue(jar: CookieJar, config: &AppConfig, token: String) -> CookieJar {
    jar.add(session_cookie(config, token, config.session_ttl))
}

/// Overwrite the session cookie with an empty, already expired one.
pub fn clear(jar: CookieJar, config: &AppConfig) -> CookieJar {
    jar.add(session_cookie(config, String::new(), Duration::ZERO))
}

fn session_cookie(config: &AppConfig, value: String, max_age: Duration) -> Cookie<'static> {
    let max_age = time::Duration::try_from(max_age).unwrap_or(time::Duration::MAX);
    Cookie::build((config.session_cookie_name.clone(), value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(max_age)
        .secure(config.cookie_secure)
        .build()
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, header::COOKIE};

    use super::*;

    fn jar(values: &[&str]) -> CookieJar {
        let mut headers = HeaderMap::new();
        for value in values {
            headers.append(COOKIE, HeaderValue::from_str(value).unwrap());
        }
        CookieJar::from_headers(&headers)
    }

    #[test]
    fn token_is_found_among_other_cookies() {
        let jar = jar(&["theme=dark; sid=abc123; lang=en"]);
        assert_eq!(session_token(&jar, "sid"), Some("abc123".into()));
    }

    #[test]
    fn token_is_found_across_multiple_headers() {
        let jar = jar(&["theme=dark", "sid=feed"]);
        assert_eq!(session_token(&jar, "sid"), Some("feed".into()));
    }

    #[test]
    fn quoted_token_is_unwrapped() {
        let jar = jar(&["sid=\"feed\""]);
        assert_eq!(session_token(&jar, "sid"), Some("feed".into()));
    }

    #[test]
    fn missing_or_empty_cookie_yields_none() {
        assert_eq!(session_token(&jar(&[]), "sid"), None);
        assert_eq!(session_token(&jar(&["sid="]), "sid"), None);
        assert_eq!(session_token(&jar(&["sidx=1"]), "sid"), None);
    }

    #[test]
    fn issued_cookie_carries_ttl_and_no_secure_flag_by_default() {
        let config = AppConfig::default();
        let jar = issue(CookieJar::new(), &config, "tok".into());
        let cookie = jar.get("sid").unwrap();

        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(time::Duration::hours(1)));
        assert_ne!(cookie.secure(), Some(true));
        assert!(!cookie.to_string().contains("Secure"));
    }

    #[test]
    fn cleared_cookie_is_empty_expired_and_secure_when_configured() {
        let config = AppConfig {
            cookie_secure: true,
            ..AppConfig::default()
        };
        let jar = clear(jar(&["sid=abc123"]), &config);
        let cookie = jar.get("sid").unwrap();

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(session_token(&jar, "sid"), None);
    }
}
