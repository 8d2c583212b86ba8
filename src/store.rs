//! Session store: applies session transitions, writes them through to
//! storage and notifies subscribers.

use crate::session::{Language, Session, User};
use crate::storage::SessionStorage;

pub type SubscriptionId = usize;

type Listener = Box<dyn FnMut(&Session)>;

pub struct SessionStore<S: SessionStorage> {
    session: Session,
    storage: S,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: SubscriptionId,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Rehydrate from storage. A missing blob yields a fresh session in
    /// `default_language`; an unreadable one is logged and discarded.
    pub fn open(storage: S, default_language: Language) -> Self {
        let session = match storage.load() {
            Ok(Some(session)) => {
                tracing::debug!(
                    authenticated = session.is_authenticated(),
                    language = %session.language(),
                    "restored session"
                );
                session
            }
            Ok(None) => Session::with_language(default_language),
            Err(e) => {
                tracing::warn!("Ignoring stored session: {:#}", e);
                Session::with_language(default_language)
            }
        };

        Self {
            session,
            storage,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Live in-memory token, the one requests must carry
    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn set_language(&mut self, language: Language) {
        self.session.set_language(language);
        self.commit();
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.session.set_user(user);
        self.commit();
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.session.set_token(token);
        self.commit();
    }

    pub fn login(&mut self, user: User, token: String) {
        self.session.login(user, token);
        self.commit();
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.commit();
    }

    /// Register a listener called with the session after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&Session) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    // Storage failures are not the caller's concern: the in-memory session
    // stays authoritative for this process.
    fn commit(&mut self) {
        if let Err(e) = self.storage.save(&self.session) {
            tracing::warn!("Failed to persist session: {:#}", e);
        }
        for (_, listener) in &mut self.listeners {
            listener(&self.session);
        }
    }
}
