use std::fmt;

use crate::session::SessionStore;

/// The three screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Create,
    Chat,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Login => "login",
            Route::Create => "create",
            Route::Chat => "chat",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The route actually reachable with the current session.
///
/// Screens past login need a user; the chat screen also needs a chat.
pub fn guard(route: Route, session: &SessionStore) -> Route {
    match route {
        Route::Login => Route::Login,
        _ if !session.has_user() => Route::Login,
        Route::Chat if !session.has_chat() => Route::Create,
        other => other,
    }
}

/// Current route plus the transitions taken to reach it
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self { current: start, history: Vec::new() }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Routes left behind, oldest first
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn navigate(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        log::debug!("navigate {} -> {}", self.current, route);
        self.history.push(self.current);
        self.current = route;
    }

    /// Navigate to whatever [`guard`] allows and return it
    pub fn navigate_guarded(&mut self, route: Route, session: &SessionStore) -> Route {
        let allowed = guard(route, session);
        self.navigate(allowed);
        allowed
    }
}
