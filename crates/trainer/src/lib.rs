//! The trainer application: its pages and the route table that wires them to paths.
use waypoint::history::History;
use waypoint::route::Route;
use waypoint::view::Outlet;
use waypoint::{NavigationController, RouterOptions, build_router, errors::RouteTableError, routes};

pub mod pages {
    use waypoint::view::{View, ViewContext};

    pub struct LandingPage;

    impl View for LandingPage {
        fn name(&self) -> &str {
            "LandingPage"
        }

        fn render(&self, ctx: &ViewContext) -> String {
            format!(
                "<main><h1>Trainer</h1><nav><a href=\"{base}/training\">Start training</a> <a href=\"{base}/statistics\">Statistics</a> <a href=\"{base}/settings\">Settings</a></nav></main>",
                base = ctx.base
            )
        }
    }

    pub struct SettingsPage;

    impl View for SettingsPage {
        fn name(&self) -> &str {
            "SettingsPage"
        }

        fn render(&self, ctx: &ViewContext) -> String {
            match ctx.hash {
                Some(section) => format!("<main><h1>Settings</h1><section id=\"{}\"></section></main>", section),
                None => "<main><h1>Settings</h1></main>".to_string(),
            }
        }
    }

    pub struct TrainingPage;

    impl View for TrainingPage {
        fn name(&self) -> &str {
            "TrainingPage"
        }

        fn render(&self, ctx: &ViewContext) -> String {
            let mode = ctx.query_param("mode").unwrap_or("free");
            format!("<main><h1>Training</h1><p>Mode: {}</p></main>", mode)
        }
    }

    pub struct StatisticsPage;

    impl View for StatisticsPage {
        fn name(&self) -> &str {
            "StatisticsPage"
        }

        fn render(&self, ctx: &ViewContext) -> String {
            let range = ctx.query_param("range").unwrap_or("all");
            format!("<main><h1>Statistics</h1><p>Range: {}</p></main>", range)
        }
    }

    /// Displayed for unmatched paths when the router runs with a fallback.
    pub struct NotFoundPage;

    impl View for NotFoundPage {
        fn name(&self) -> &str {
            "NotFoundPage"
        }

        fn render(&self, ctx: &ViewContext) -> String {
            format!(
                "<main><h1>Not found</h1><p>Nothing lives at {}.</p><a href=\"{}/\">Home</a></main>",
                ctx.current_path, ctx.base
            )
        }
    }
}

use pages::{LandingPage, SettingsPage, StatisticsPage, TrainingPage};

/// The application's route table.
pub fn app_routes() -> Vec<Route<'static>> {
    routes![
        "/" => LandingPage,
        "/settings" => SettingsPage,
        "/training" => TrainingPage,
        "/statistics" => StatisticsPage,
    ]
}

/// Builds the application's router. Meant to be called once, at startup.
pub fn app_router<'a, H: History, O: Outlet>(
    history: H,
    outlet: O,
    options: RouterOptions<'a>,
) -> Result<NavigationController<'a, H, O>, RouteTableError> {
    build_router(app_routes(), history, outlet, options)
}
