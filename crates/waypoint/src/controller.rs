//! The navigation controller: keeps the displayed view, the navigation state and the host history in sync.
use log::{debug, warn};

use crate::errors::NavigationError;
use crate::history::{History, HistoryEntry};
use crate::options::NotFoundPolicy;
use crate::route::{Route, RouteTable};
use crate::routing::{Location, join_base, strip_base};
use crate::view::{Outlet, View, ViewContext};

/// The currently active location and the route it resolved to.
///
/// `route` is `None` only when a fallback view is displayed for an unmatched location.
#[derive(Debug, Clone)]
pub struct NavigationState<'a> {
    pub location: Location,
    pub route: Option<Route<'a>>,
}

impl NavigationState<'_> {
    pub fn path(&self) -> &str {
        &self.location.path
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Transition {
    Initial,
    Push,
    Replace,
    Pop,
}

type AfterEachListener<'a> = Box<dyn FnMut(&NavigationState<'a>, Option<&NavigationState<'a>>) + 'a>;

/// Produced by [`build_router()`](crate::build_router). Owns the route table, the history and the outlet.
///
/// Every operation is synchronous: by the time it returns, the view is displayed and the history is written.
pub struct NavigationController<'a, H: History, O: Outlet> {
    table: RouteTable<'a>,
    history: H,
    outlet: O,
    base: String,
    not_found: NotFoundPolicy<'a>,
    state: Option<NavigationState<'a>>,
    after_each: Vec<AfterEachListener<'a>>,
}

impl<'a, H: History, O: Outlet> NavigationController<'a, H, O> {
    pub(crate) fn new(
        table: RouteTable<'a>,
        history: H,
        outlet: O,
        base: String,
        not_found: NotFoundPolicy<'a>,
    ) -> Self {
        Self {
            table,
            history,
            outlet,
            base,
            not_found,
            state: None,
            after_each: Vec::new(),
        }
    }

    /// Displays the view for the host's current address and replaces its history entry.
    ///
    /// Addresses outside of the configured base are always reported as not found.
    pub fn start(&mut self) -> Result<(), NavigationError> {
        let address = self.history.location();
        let target = self.strip_base(&address)?;
        self.transition(&target, Transition::Initial)
    }

    /// Exact lookup of `path`. Any query or fragment is ignored.
    ///
    /// Stays strict whatever the [`NotFoundPolicy`] is.
    pub fn resolve(&self, path: &str) -> Result<&Route<'a>, NavigationError> {
        let location = Location::parse(path);
        self.table
            .get(&location.path)
            .ok_or_else(|| NavigationError::NotFound {
                path: path.to_string(),
            })
    }

    /// Navigates to `path` and pushes a new history entry.
    ///
    /// Navigating to the current location is a no-op.
    pub fn navigate(&mut self, path: &str) -> Result<(), NavigationError> {
        self.transition(path, Transition::Push)
    }

    /// Navigates to `path`, replacing the current history entry instead of pushing one.
    pub fn replace(&mut self, path: &str) -> Result<(), NavigationError> {
        self.transition(path, Transition::Replace)
    }

    /// Called by the host when the user went back or forward to `address` (base included).
    ///
    /// On error the state and the displayed view are unchanged, but the host address already moved. The host must
    /// undo the move (`history.go(-delta)`) to keep the address in sync, as [`Self::go`] does.
    pub fn on_pop_state(&mut self, address: &str) -> Result<(), NavigationError> {
        if self.state.is_none() {
            return Err(NavigationError::NotStarted);
        }

        let target = self.strip_base(address)?;
        self.transition(&target, Transition::Pop)
    }

    pub fn back(&mut self) -> Result<bool, NavigationError> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Result<bool, NavigationError> {
        self.go(1)
    }

    /// Moves through the history by `delta` entries.
    ///
    /// Returns `Ok(true)` when the history moved synchronously and the new location was applied, `Ok(false)` when
    /// nothing happened yet (out of range, or a history that reports back through [`Self::on_pop_state`]).
    /// When the new address cannot be displayed, the history is moved back and the error is returned.
    pub fn go(&mut self, delta: isize) -> Result<bool, NavigationError> {
        if self.state.is_none() {
            return Err(NavigationError::NotStarted);
        }

        let Some(address) = self.history.go(delta) else {
            return Ok(false);
        };

        if let Err(err) = self.on_pop_state(&address) {
            // The address moved but the view did not, move the address back.
            self.history.go(-delta);
            return Err(err);
        }

        Ok(true)
    }

    /// Registers a listener called with `(to, from)` after every successful navigation.
    pub fn after_each(
        &mut self,
        listener: impl FnMut(&NavigationState<'a>, Option<&NavigationState<'a>>) + 'a,
    ) {
        self.after_each.push(Box::new(listener));
    }

    pub fn state(&self) -> Option<&NavigationState<'a>> {
        self.state.as_ref()
    }

    pub fn current_path(&self) -> Option<&str> {
        self.state.as_ref().map(NavigationState::path)
    }

    pub fn current_location(&self) -> Option<&Location> {
        self.state.as_ref().map(|state| &state.location)
    }

    pub fn active_route(&self) -> Option<&Route<'a>> {
        self.state.as_ref()?.route.as_ref()
    }

    /// The view currently displayed, which is the fallback view for unmatched locations.
    pub fn active_view(&self) -> Option<&'a dyn View> {
        let state = self.state.as_ref()?;
        match (state.route, self.not_found) {
            (Some(route), _) => Some(route.view()),
            (None, NotFoundPolicy::Fallback(view)) => Some(view),
            (None, NotFoundPolicy::Error) => None,
        }
    }

    /// The full address for `path`, with the base prepended.
    pub fn href(&self, path: &str) -> String {
        join_base(&self.base, path)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn routes(&self) -> &RouteTable<'a> {
        &self.table
    }

    pub fn has_route(&self, path: &str) -> bool {
        self.resolve(path).is_ok()
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn outlet(&self) -> &O {
        &self.outlet
    }

    fn strip_base(&self, address: &str) -> Result<String, NavigationError> {
        strip_base(address, &self.base)
            .map(|target| target.into_owned())
            .ok_or_else(|| {
                warn!(target: "router", "`{}` is outside of the base `{}`", address, self.base);
                NavigationError::NotFound {
                    path: address.to_string(),
                }
            })
    }

    fn transition(&mut self, target: &str, transition: Transition) -> Result<(), NavigationError> {
        let location = Location::parse(target);

        let (route, view) = match self.table.get(&location.path) {
            Some(route) => (Some(*route), route.view()),
            None => match self.not_found {
                NotFoundPolicy::Fallback(view) => (None, view),
                NotFoundPolicy::Error => {
                    warn!(target: "router", "No route matches `{}`", target);
                    return Err(NavigationError::NotFound {
                        path: target.to_string(),
                    });
                }
            },
        };

        if self
            .state
            .as_ref()
            .is_some_and(|current| current.location == location)
        {
            debug!(target: "router", "Already at `{}`", target);
            return Ok(());
        }

        let next = NavigationState { location, route };

        self.outlet.display(
            view,
            &ViewContext {
                current_path: &next.location.path,
                query: next.location.query.as_deref(),
                hash: next.location.hash.as_deref(),
                base: &self.base,
            },
        );

        let from = self.state.take();
        self.write_history(&next, from.as_ref(), transition);

        debug!(
            target: "router",
            from = from.as_ref().map(NavigationState::path).unwrap_or_default(),
            to = next.path(),
            view = view.name();
            "{}",
            match transition {
                Transition::Initial => "start",
                Transition::Push => "push",
                Transition::Replace => "replace",
                Transition::Pop => "pop",
            }
        );

        for listener in &mut self.after_each {
            listener(&next, from.as_ref());
        }

        self.state = Some(next);
        Ok(())
    }

    fn write_history(
        &mut self,
        next: &NavigationState<'a>,
        from: Option<&NavigationState<'a>>,
        transition: Transition,
    ) {
        let current = join_base(&self.base, &next.location.href());
        let back = from.map(|state| join_base(&self.base, &state.location.href()));

        match transition {
            Transition::Push => {
                let entry = HistoryEntry {
                    current,
                    back,
                    position: self.history.position() + 1,
                    replaced: false,
                };
                self.history.push_state(entry);
            }
            Transition::Initial | Transition::Replace | Transition::Pop => {
                let entry = HistoryEntry {
                    current,
                    back,
                    position: self.history.position(),
                    replaced: true,
                };
                self.history.replace_state(entry);
            }
        }
    }
}
