//! Error types for Waypoint.
use std::fmt::{self, Debug, Formatter};
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from main are printed with Debug, thiserror only gives us Display.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

/// Raised by [`build_router()`](crate::build_router) when the route table cannot be used.
///
/// These are fatal: an application with an ambiguous or malformed table should not start.
#[derive(Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("The route table is empty, at least one route must be registered")]
    Empty,

    #[error("`{path}` is not a valid route path: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error(
        "`{path}` is registered more than once. Every path in the route table must map to exactly one view."
    )]
    DuplicateRoute { path: String },
}

/// Raised while navigating. The controller's state is left untouched when one of these is returned.
#[derive(Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No route matches `{path}`")]
    NotFound { path: String },

    #[error("The router has not been started yet, call `start()` first")]
    NotStarted,
}

#[derive(Error, Debug)]
pub enum WaypointError {
    #[error(transparent)]
    RouteTable(#[from] RouteTableError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

impl_debug_for_error!(RouteTableError, NavigationError);
