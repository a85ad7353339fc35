//! The seams between the router and the view layer.
//!
//! Views are owned by the application. The router only keeps references to them and hands the active one to an
//! [`Outlet`], the host surface the page is displayed in.

/// A page-level renderable unit.
///
/// ## Example
/// ```rust
/// use waypoint::view::{View, ViewContext};
///
/// pub struct LandingPage;
///
/// impl View for LandingPage {
///     fn name(&self) -> &str {
///         "LandingPage"
///     }
///
///     fn render(&self, ctx: &ViewContext) -> String {
///         format!("<h1>Welcome</h1><p>{}</p>", ctx.current_path)
///     }
/// }
/// ```
pub trait View {
    fn name(&self) -> &str;
    fn render(&self, ctx: &ViewContext) -> String;
}

/// What a view knows about the navigation that displayed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewContext<'a> {
    /// The path being displayed, without base, query or fragment, e.g. `/settings`.
    pub current_path: &'a str,
    pub query: Option<&'a str>,
    pub hash: Option<&'a str>,
    /// The normalized base the application is served under, empty at the root.
    pub base: &'a str,
}

impl ViewContext<'_> {
    /// Looks up a single `key=value` pair in the query string.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query?
            .split('&')
            .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

/// Where the active view ends up. In a browser this is the mount point of the application.
pub trait Outlet {
    fn display(&mut self, view: &dyn View, ctx: &ViewContext);
}

/// An [`Outlet`] that keeps the last rendered output in memory.
#[derive(Debug, Default)]
pub struct BufferOutlet {
    content: Option<String>,
    view_name: Option<String>,
    renders: usize,
}

impl BufferOutlet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn view_name(&self) -> Option<&str> {
        self.view_name.as_deref()
    }

    /// How many times a view was displayed.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl Outlet for BufferOutlet {
    fn display(&mut self, view: &dyn View, ctx: &ViewContext) {
        self.content = Some(view.render(ctx));
        self.view_name = Some(view.name().to_string());
        self.renders += 1;
    }
}
