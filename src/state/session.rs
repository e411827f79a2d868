//! Token-keyed registry of logged-in browsers.

use std::time::Duration;

use dashmap::DashMap;
use time::OffsetDateTime;
use uuid::Uuid;

/// Identity attached to an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    /// Login name the session was opened for.
    pub username: String,
}

/// Server-side record of a browser session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque token stored in the client cookie.
    pub id: String,
    /// Bound user, absent for sessions that never logged in.
    pub user: Option<SessionUser>,
    /// Moment after which the record is no longer honoured.
    pub expires_at: OffsetDateTime,
}

impl Session {
    fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        self.expires_at <= now
    }
}

/// Session registry with a fixed time-to-live per record.
pub struct SessionStore {
    sessions: DashMap<String, Session>,
    ttl: Duration,
}

impl SessionStore {
    /// Create an empty store issuing sessions that live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Open a fresh session for `user` under a newly drawn token.
    pub fn create(&self, user: SessionUser) -> Session {
        let session = Session {
            id: Uuid::new_v4().simple().to_string(),
            user: Some(user),
            expires_at: OffsetDateTime::now_utc() + self.ttl,
        };
        self.sessions.insert(session.id.clone(), session.clone());
        session
    }

    /// Resolve the user bound to `token`, evicting the record if it has expired.
    pub fn authenticated_user(&self, token: &str) -> Option<SessionUser> {
        let now = OffsetDateTime::now_utc();
        {
            let entry = self.sessions.get(token)?;
            if !entry.is_expired_at(now) {
                return entry.user.clone();
            }
        }

        self.sessions
            .remove_if(token, |_, session| session.is_expired_at(now));
        None
    }

    /// Drop the session behind `token`, returning whether one existed.
    pub fn destroy(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Remove every expired session and report how many were dropped.
    pub fn sweep_expired(&self) -> usize {
        let now = OffsetDateTime::now_utc();
        let mut removed = 0;
        self.sessions.retain(|_, session| {
            let keep = !session.is_expired_at(now);
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    /// Number of sessions held, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session is held.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
