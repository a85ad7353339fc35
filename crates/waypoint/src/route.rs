//! Routes and the validated table they live in.
//!
//! Routes are usually declared through the [`routes!`](crate::routes) macro and handed to
//! [`build_router()`](crate::build_router), which validates them into a [`RouteTable`].
use crate::errors::RouteTableError;
use crate::routing::{match_key, validate_route_path};
use crate::view::View;
use rustc_hash::FxHashMap;

/// Maps one literal path to the view displayed for it.
#[derive(Clone, Copy)]
pub struct Route<'a> {
    path: &'a str,
    view: &'a dyn View,
}

impl<'a> Route<'a> {
    pub fn new(path: &'a str, view: &'a dyn View) -> Self {
        Self { path, view }
    }

    pub fn path(&self) -> &'a str {
        self.path
    }

    pub fn view(&self) -> &'a dyn View {
        self.view
    }
}

impl std::fmt::Debug for Route<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("view", &self.view.name())
            .finish()
    }
}

/// An immutable, validated sequence of routes with an index for exact lookups.
#[derive(Debug)]
pub struct RouteTable<'a> {
    routes: Vec<Route<'a>>,
    index: FxHashMap<String, usize>,
    strict: bool,
    sensitive: bool,
}

impl<'a> RouteTable<'a> {
    /// Validates `routes` and indexes them by path.
    ///
    /// Fails if the table is empty, if a path is malformed, or if two paths would match the same address.
    pub fn new(
        routes: Vec<Route<'a>>,
        strict: bool,
        sensitive: bool,
    ) -> Result<Self, RouteTableError> {
        if routes.is_empty() {
            return Err(RouteTableError::Empty);
        }

        let mut index = FxHashMap::default();
        index.reserve(routes.len());

        for (position, route) in routes.iter().enumerate() {
            validate_route_path(route.path).map_err(|reason| RouteTableError::InvalidPath {
                path: route.path.to_string(),
                reason,
            })?;

            let key = match_key(route.path, strict, sensitive).into_owned();
            if index.insert(key, position).is_some() {
                return Err(RouteTableError::DuplicateRoute {
                    path: route.path.to_string(),
                });
            }
        }

        Ok(Self {
            routes,
            index,
            strict,
            sensitive,
        })
    }

    /// Exact lookup of a bare path (no base, query or fragment).
    pub fn get(&self, path: &str) -> Option<&Route<'a>> {
        self.position(path).map(|position| &self.routes[position])
    }

    pub(crate) fn position(&self, path: &str) -> Option<usize> {
        self.index
            .get(match_key(path, self.strict, self.sensitive).as_ref())
            .copied()
    }

    pub(crate) fn at(&self, position: usize) -> &Route<'a> {
        &self.routes[position]
    }

    pub fn contains(&self, path: &str) -> bool {
        self.position(path).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route<'a>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewContext;

    struct Page(&'static str);

    impl View for Page {
        fn name(&self) -> &str {
            self.0
        }

        fn render(&self, _ctx: &ViewContext) -> String {
            self.0.to_string()
        }
    }

    static HOME: Page = Page("Home");
    static ABOUT: Page = Page("About");

    #[test]
    fn test_table_lookup() {
        let table =
            RouteTable::new(vec![Route::new("/", &HOME), Route::new("/about", &ABOUT)], true, true)
                .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("/").unwrap().view().name(), "Home");
        assert_eq!(table.get("/about").unwrap().view().name(), "About");
        assert!(table.get("/about/").is_none());
        assert!(table.get("/About").is_none());
        assert!(table.get("").is_none());
    }

    #[test]
    fn test_table_keeps_declaration_order() {
        let table =
            RouteTable::new(vec![Route::new("/about", &ABOUT), Route::new("/", &HOME)], true, true)
                .unwrap();

        let paths: Vec<_> = table.iter().map(|route| route.path()).collect();
        assert_eq!(paths, vec!["/about", "/"]);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            RouteTable::new(vec![], true, true).unwrap_err(),
            RouteTableError::Empty
        );
    }

    #[test]
    fn test_duplicate_route() {
        let err = RouteTable::new(
            vec![Route::new("/about", &HOME), Route::new("/about", &ABOUT)],
            true,
            true,
        )
        .unwrap_err();

        assert_eq!(
            err,
            RouteTableError::DuplicateRoute {
                path: "/about".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_route_case_insensitive() {
        let routes = vec![Route::new("/about", &HOME), Route::new("/About", &ABOUT)];

        assert!(RouteTable::new(routes.clone(), true, true).is_ok());
        assert!(matches!(
            RouteTable::new(routes, true, false),
            Err(RouteTableError::DuplicateRoute { .. })
        ));
    }

    #[test]
    fn test_duplicate_route_trailing_slash_when_not_strict() {
        let routes = vec![Route::new("/about", &HOME), Route::new("/about/", &ABOUT)];

        assert!(RouteTable::new(routes.clone(), true, true).is_ok());
        assert!(matches!(
            RouteTable::new(routes, false, true),
            Err(RouteTableError::DuplicateRoute { .. })
        ));
    }

    #[test]
    fn test_invalid_path() {
        let err = RouteTable::new(vec![Route::new("about", &ABOUT)], true, true).unwrap_err();

        assert!(matches!(err, RouteTableError::InvalidPath { path, .. } if path == "about"));
    }

    #[test]
    fn test_loose_lookup() {
        let table = RouteTable::new(vec![Route::new("/about", &ABOUT)], false, false).unwrap();

        assert!(table.contains("/about/"));
        assert!(table.contains("/ABOUT"));
        assert!(!table.contains("/about//"));
    }
}
