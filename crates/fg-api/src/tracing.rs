//! Log output for the server process.
//!
//! Development prints pretty, multi-line events; production prints one
//! flattened JSON object per event with the request span attached. Either
//! way `RUST_LOG` replaces the default filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

/// Targets emitted by this workspace: the server binary and its crates.
const WORKSPACE_TARGETS: [&str; 4] = ["serv", "fg_api", "fg_db", "fg_gen"];

/// Install the global subscriber. Call once, before anything logs.
pub fn init_tracing(env: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    let pretty = env.is_development().then(|| {
        fmt::layer()
            .pretty()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
    });
    let json = env.is_production().then(|| {
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .with_target(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();

    tracing::info!(environment = ?env, "Tracing initialized");
}

/// Quiet third-party crates, show the workspace's own events plus the
/// per-request spans from `tower_http`.
fn default_directives(env: Environment) -> String {
    let level = if env.is_development() { "debug" } else { "info" };

    let mut directives = vec!["warn".to_string(), format!("tower_http={level}")];
    directives.extend(
        WORKSPACE_TARGETS
            .iter()
            .map(|target| format!("{target}={level}")),
    );
    directives.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(
            default_directives(Environment::Development),
            "warn,tower_http=debug,serv=debug,fg_api=debug,fg_db=debug,fg_gen=debug"
        );
        assert_eq!(
            default_directives(Environment::Production),
            "warn,tower_http=info,serv=info,fg_api=info,fg_db=info,fg_gen=info"
        );
    }

    #[test]
    fn test_default_directives_parse() {
        for env in [Environment::Development, Environment::Production] {
            assert!(EnvFilter::try_new(default_directives(env)).is_ok());
        }
    }
}
