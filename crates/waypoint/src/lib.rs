#![cfg_attr(docsrs, feature(doc_cfg))]
//! Static route tables and history-driven navigation for single-page applications.
//!
//! A fixed list of `(path, view)` pairs is validated once at startup by [`build_router()`], which returns a
//! [`NavigationController`]. The controller maps a requested path to exactly one view, displays it in an
//! [`Outlet`](view::Outlet), and keeps the host [`History`](history::History) in sync so back and forward work
//! without reloading the page.
//!
//! ## Example
//! ```rust
//! use waypoint::history::MemoryHistory;
//! use waypoint::view::{BufferOutlet, View, ViewContext};
//! use waypoint::{RouterOptions, build_router, routes};
//!
//! struct Home;
//!
//! impl View for Home {
//!     fn name(&self) -> &str {
//!         "Home"
//!     }
//!
//!     fn render(&self, _ctx: &ViewContext) -> String {
//!         "<h1>Home</h1>".to_string()
//!     }
//! }
//!
//! let mut router = build_router(
//!     routes!["/" => Home],
//!     MemoryHistory::default(),
//!     BufferOutlet::new(),
//!     RouterOptions::default(),
//! )?;
//!
//! router.start()?;
//! assert_eq!(router.outlet().content(), Some("<h1>Home</h1>"));
//! # Ok::<(), waypoint::errors::WaypointError>(())
//! ```

// Modules the end-user will interact directly or indirectly with
pub mod errors;
pub mod history;
pub mod route;
pub mod view;

mod controller;
mod logging;
mod options;
mod routing;

pub use controller::{NavigationController, NavigationState};
pub use logging::init_logging;
pub use options::{NotFoundPolicy, RouterOptions};
pub use routing::Location;

use errors::RouteTableError;
use history::History;
use route::{Route, RouteTable};
use routing::normalize_base;
use view::Outlet;

#[macro_export]
/// Declares the routes passed to [`build_router()`].
///
/// ## Example
/// ```rust
/// # use waypoint::view::{View, ViewContext};
/// # struct LandingPage;
/// # impl View for LandingPage {
/// #     fn name(&self) -> &str { "LandingPage" }
/// #     fn render(&self, _ctx: &ViewContext) -> String { String::new() }
/// # }
/// # struct SettingsPage;
/// # impl View for SettingsPage {
/// #     fn name(&self) -> &str { "SettingsPage" }
/// #     fn render(&self, _ctx: &ViewContext) -> String { String::new() }
/// # }
/// use waypoint::routes;
///
/// let routes = routes![
///     "/" => LandingPage,
///     "/settings" => SettingsPage
/// ];
/// assert_eq!(routes.len(), 2);
/// ```
macro_rules! routes {
    [$($path:expr => $view:expr),* $(,)?] => {
        vec![$($crate::route::Route::new($path, &$view)),*]
    };
}

/// Validates `routes` and returns a controller bound to `history` and `outlet`.
///
/// Nothing is displayed and nothing is written to the history until [`NavigationController::start()`] or a
/// navigation method is called.
///
/// Fails with [`RouteTableError`] when `routes` is empty, contains a malformed path, or contains two routes that
/// would match the same address under `options`.
pub fn build_router<'a, H: History, O: Outlet>(
    routes: Vec<Route<'a>>,
    history: H,
    outlet: O,
    options: RouterOptions<'a>,
) -> Result<NavigationController<'a, H, O>, RouteTableError> {
    let table = RouteTable::new(routes, options.strict, options.sensitive)?;
    let base = normalize_base(options.base.as_deref());

    log::debug!(
        target: "router",
        "Registered {} routes under `{}`",
        table.len(),
        if base.is_empty() { "/" } else { base.as_str() }
    );

    Ok(NavigationController::new(
        table,
        history,
        outlet,
        base,
        options.not_found,
    ))
}
