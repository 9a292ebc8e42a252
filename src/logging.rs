use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

const DEFAULT_FILTER: &str = "info";

/// Keeps the startup line visible whatever `RUST_LOG` asks for.
const STARTUP_DIRECTIVE: &str = "clock_status::server=info";

/// Builds the log filter from a `RUST_LOG` style directive string, falling back to `info`
/// when it is missing or malformed.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    let filter = directives
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    match STARTUP_DIRECTIVE.parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Installs the global `fmt` subscriber. Call once, from `main`.
pub fn init() {
    let directives = std::env::var("RUST_LOG").ok();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_target(false)
        .init();
}
