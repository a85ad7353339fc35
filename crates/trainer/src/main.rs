use clap::Parser;
use colored::Colorize;
use log::{info, warn};
use trainer::{app_router, pages::NotFoundPage};
use waypoint::history::{History, MemoryHistory};
use waypoint::view::BufferOutlet;
use waypoint::{NavigationController, NotFoundPolicy, RouterOptions, init_logging};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
/// Replays navigation steps against the trainer route table.
struct Cli {
    /// Path prefix the application is served under
    #[arg(long)]
    base: Option<String>,

    /// Address the session starts at, base included
    #[arg(long, default_value = "/")]
    start: String,

    /// Display a not-found page instead of failing on unmatched paths
    #[arg(long)]
    fallback: bool,

    /// Print the history stack as YAML once every step ran
    #[arg(long)]
    dump_history: bool,

    /// Silence logging
    #[arg(long)]
    quiet: bool,

    /// Steps to run: a path, `back`, `forward`, or `replace:<path>`
    steps: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum Step<'a> {
    Navigate(&'a str),
    Replace(&'a str),
    Back,
    Forward,
}

impl<'a> Step<'a> {
    fn parse(raw: &'a str) -> Self {
        match raw {
            "back" => Step::Back,
            "forward" => Step::Forward,
            _ => match raw.strip_prefix("replace:") {
                Some(path) => Step::Replace(path),
                None => Step::Navigate(raw),
            },
        }
    }
}

fn run_step(
    router: &mut NavigationController<'_, MemoryHistory, BufferOutlet>,
    step: &Step,
) -> Result<bool, waypoint::errors::NavigationError> {
    match step {
        Step::Navigate(path) => router.navigate(path).map(|_| true),
        Step::Replace(path) => router.replace(path).map(|_| true),
        Step::Back => router.back(),
        Step::Forward => router.forward(),
    }
}

fn print_display(router: &NavigationController<'_, MemoryHistory, BufferOutlet>) {
    let outlet = router.outlet();
    println!(
        "{} {}",
        router.history().location().bold(),
        outlet.view_name().unwrap_or_default().dimmed()
    );
    println!("{}", outlet.content().unwrap_or_default());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging();
    }

    let options = RouterOptions {
        base: cli.base.clone(),
        not_found: if cli.fallback {
            NotFoundPolicy::Fallback(&NotFoundPage)
        } else {
            NotFoundPolicy::Error
        },
        ..Default::default()
    };

    let mut router = app_router(MemoryHistory::new(cli.start.as_str()), BufferOutlet::new(), options)?;
    router.start()?;
    print_display(&router);

    for raw in &cli.steps {
        let step = Step::parse(raw);
        match run_step(&mut router, &step) {
            Ok(true) => print_display(&router),
            Ok(false) => info!(target: "trainer", "`{}` did not move the history", raw),
            Err(err) => warn!(target: "trainer", "`{}` failed: {}", raw, err),
        }
    }

    if cli.dump_history {
        print!("{}", serde_yaml::to_string(router.history().entries())?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        assert_eq!(Step::parse("/training"), Step::Navigate("/training"));
        assert_eq!(Step::parse("back"), Step::Back);
        assert_eq!(Step::parse("forward"), Step::Forward);
        assert_eq!(Step::parse("replace:/settings"), Step::Replace("/settings"));
    }

    #[test]
    fn test_cli_parses_flags_and_steps() {
        let cli = Cli::parse_from([
            "trainer",
            "--base",
            "/app",
            "--fallback",
            "/training",
            "back",
        ]);

        assert_eq!(cli.base.as_deref(), Some("/app"));
        assert_eq!(cli.start, "/");
        assert!(cli.fallback);
        assert!(!cli.dump_history);
        assert_eq!(cli.steps, vec!["/training", "back"]);
    }

    #[test]
    fn test_run_steps() {
        let mut router =
            app_router(MemoryHistory::default(), BufferOutlet::new(), RouterOptions::default()).unwrap();
        router.start().unwrap();

        assert_eq!(run_step(&mut router, &Step::parse("/training")), Ok(true));
        assert_eq!(run_step(&mut router, &Step::parse("back")), Ok(true));
        assert_eq!(router.current_path(), Some("/"));
        assert_eq!(run_step(&mut router, &Step::parse("back")), Ok(false));
        assert!(run_step(&mut router, &Step::parse("/nowhere")).is_err());
    }
}
