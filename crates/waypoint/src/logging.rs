use colored::Colorize;
use env_logger::{Builder, Env};
use log::Level;
use log::kv::{self, Key, Value, VisitSource};
use std::io::Write;

/// Collects a record's key-values as ` key=value` pairs.
#[derive(Default)]
struct Fields(String);

impl<'kvs> VisitSource<'kvs> for Fields {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        self.0.push_str(&format!(" {}={}", key.as_str().dimmed(), value));
        Ok(())
    }
}

/// Installs the `env_logger` backend used by Waypoint binaries.
///
/// `RUST_LOG` filters records and defaults to `info`. `--quiet` on the command line drops every record. Structured
/// fields (`from`, `to`, `view` on navigation records) are printed after the message. Only the first call installs
/// the logger.
pub fn init_logging() {
    let quiet = std::env::args().any(|arg| arg == "--quiet");

    let _ = Builder::from_env(Env::default().filter_or("RUST_LOG", "info"))
        .format(move |buf, record| {
            if quiet {
                return Ok(());
            }

            let mut fields = Fields::default();
            let _ = record.key_values().visit(&mut fields);

            let level = match record.level() {
                Level::Error => "error".red().bold(),
                Level::Warn => "warn".yellow().bold(),
                Level::Info => "info".green(),
                Level::Debug | Level::Trace => "debug".dimmed(),
            };

            writeln!(
                buf,
                "{} {} {} {}{}",
                chrono::Local::now().format("%H:%M:%S%.3f").to_string().dimmed(),
                level,
                record.target().bright_yellow(),
                record.args(),
                fields.0
            )
        })
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::kv::Source;

    #[test]
    fn test_fields_render_key_values() {
        let pairs: &[(&str, &str)] = &[("from", "/"), ("to", "/training")];

        colored::control::set_override(false);
        let mut fields = Fields::default();
        pairs.visit(&mut fields).unwrap();

        assert_eq!(fields.0, " from=/ to=/training");
    }
}
