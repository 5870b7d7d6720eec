use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use gloo::storage::{LocalStorage, Storage};
use yew::Callback;

/// Local storage key the bearer token lives under
pub const TOKEN_KEY: &str = "token";

/// Where the bearer token survives page reloads
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Browser local storage.
///
/// The token is stored as the raw string rather than JSON so other tabs and
/// older builds reading `localStorage.token` see the same value.
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        match LocalStorage::raw().get_item(TOKEN_KEY) {
            Ok(token) => token.filter(|token| !token.is_empty()),
            Err(err) => {
                log::warn!("could not read session token: {:?}", err);
                None
            }
        }
    }

    fn save(&self, token: &str) {
        if let Err(err) = LocalStorage::raw().set_item(TOKEN_KEY, token) {
            log::error!("could not persist session token: {:?}", err);
        }
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
    }
}

/// Lifecycle notifications the app shell reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    /// The user logged out
    Ended,
    /// The backend rejected the token
    Expired,
    ProfileUpdated,
}

struct SessionInner {
    store: Box<dyn TokenStore>,
    token: RefCell<Option<String>>,
    profile_image: RefCell<Option<String>>,
    listener: RefCell<Option<Callback<SessionEvent>>>,
}

/// The signed-in user's token and client-side profile bits.
///
/// Cloning is cheap and every clone sees the same state, so the API gateway
/// and the app shell can share one session.
#[derive(Clone)]
pub struct Session {
    inner: Rc<SessionInner>,
}

impl Session {
    /// Pick up whatever token `store` kept from a previous visit
    pub fn restore(store: impl TokenStore + 'static) -> Self {
        let token = store.load();
        log::debug!("session restored (authenticated: {})", token.is_some());
        Self {
            inner: Rc::new(SessionInner {
                store: Box::new(store),
                token: RefCell::new(token),
                profile_image: RefCell::new(None),
                listener: RefCell::new(None),
            }),
        }
    }

    pub fn browser() -> Self {
        Self::restore(LocalTokenStore)
    }

    /// Register the single listener for lifecycle events; replaces any earlier one
    pub fn subscribe(&self, listener: Callback<SessionEvent>) {
        *self.inner.listener.borrow_mut() = Some(listener);
    }

    pub fn token(&self) -> Option<String> {
        self.inner.token.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.token.borrow().is_some()
    }

    pub fn begin(&self, token: String) {
        self.inner.store.save(&token);
        *self.inner.token.borrow_mut() = Some(token);
        log::info!("session started");
        self.notify(SessionEvent::Started);
    }

    pub fn end(&self) {
        self.clear();
        log::info!("session ended by user");
        self.notify(SessionEvent::Ended);
    }

    /// Drop the token after the backend refused it.
    ///
    /// Safe to call from several in-flight requests; only the first one
    /// notifies.
    pub fn expire(&self) {
        let had_token = self.inner.token.borrow().is_some();
        self.clear();
        if had_token {
            log::warn!("session expired, returning to login");
            self.notify(SessionEvent::Expired);
        }
    }

    pub fn profile_image(&self) -> Option<String> {
        self.inner.profile_image.borrow().clone()
    }

    pub fn set_profile_image(&self, url: Option<String>) {
        let url = url.map(|url| url.trim().to_string()).filter(|url| !url.is_empty());
        *self.inner.profile_image.borrow_mut() = url;
        self.notify(SessionEvent::ProfileUpdated);
    }

    fn clear(&self) {
        self.inner.store.clear();
        self.inner.token.borrow_mut().take();
        self.inner.profile_image.borrow_mut().take();
    }

    fn notify(&self, event: SessionEvent) {
        let listener = self.inner.listener.borrow().clone();
        if let Some(listener) = listener {
            listener.emit(event);
        }
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Token store backed by a shared cell so tests can inspect what was persisted
    #[derive(Clone, Default)]
    pub struct MemoryTokenStore {
        pub saved: Rc<RefCell<Option<String>>>,
    }

    impl MemoryTokenStore {
        pub fn with_token(token: &str) -> Self {
            Self { saved: Rc::new(RefCell::new(Some(token.to_string()))) }
        }
    }

    impl TokenStore for MemoryTokenStore {
        fn load(&self) -> Option<String> {
            self.saved.borrow().clone()
        }

        fn save(&self, token: &str) {
            *self.saved.borrow_mut() = Some(token.to_string());
        }

        fn clear(&self) {
            self.saved.borrow_mut().take();
        }
    }

    /// Collects every event a session emits
    pub fn record_events(session: &Session) -> Rc<RefCell<Vec<SessionEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        session.subscribe(Callback::from(move |event| sink.borrow_mut().push(event)));
        events
    }
}
