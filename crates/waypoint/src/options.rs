use crate::view::View;

/// Router options. Should be passed to [`build_router()`](crate::build_router()).
///
/// ## Examples
/// Default values, exact and case-sensitive matching at the root of the host:
/// ```rust
/// use waypoint::RouterOptions;
///
/// let options = RouterOptions::default();
/// assert!(options.strict && options.sensitive);
/// ```
/// Custom values:
/// ```rust
/// use waypoint::{NotFoundPolicy, RouterOptions};
/// use waypoint::view::{View, ViewContext};
///
/// struct NotFoundPage;
///
/// impl View for NotFoundPage {
///     fn name(&self) -> &str {
///         "NotFoundPage"
///     }
///
///     fn render(&self, ctx: &ViewContext) -> String {
///         format!("Nothing at {}", ctx.current_path)
///     }
/// }
///
/// let options = RouterOptions {
///     base: Some("/app".into()),
///     strict: false,
///     not_found: NotFoundPolicy::Fallback(&NotFoundPage),
///     ..Default::default()
/// };
/// ```
pub struct RouterOptions<'a> {
    /// Path prefix the application is served under, e.g. `/app`.
    ///
    /// It is removed from host addresses before matching and added back to every address written to the history.
    /// A missing leading slash is added and a trailing slash is removed.
    pub base: Option<String>,

    /// When `false`, a single trailing slash is ignored so `/settings/` matches `/settings`.
    pub strict: bool,

    /// When `false`, paths are matched case-insensitively. Paths differing only by case then count as duplicates.
    pub sensitive: bool,

    /// What happens when navigating to a path no route matches.
    pub not_found: NotFoundPolicy<'a>,
}

impl Default for RouterOptions<'_> {
    fn default() -> Self {
        Self {
            base: None,
            strict: true,
            sensitive: true,
            not_found: NotFoundPolicy::Error,
        }
    }
}

#[derive(Clone, Copy, Default)]
pub enum NotFoundPolicy<'a> {
    /// Return [`NavigationError::NotFound`](crate::errors::NavigationError::NotFound) and leave the state untouched.
    #[default]
    Error,
    /// Display this view, record the location without a matched route, and succeed.
    Fallback(&'a dyn View),
}

impl std::fmt::Debug for NotFoundPolicy<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotFoundPolicy::Error => write!(f, "Error"),
            NotFoundPolicy::Fallback(view) => write!(f, "Fallback({})", view.name()),
        }
    }
}
