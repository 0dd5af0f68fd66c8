use add_plugin::core;
use add_plugin::status::ExitStatus;

/// Entry point - sets up logging and runs the single registry edit.
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    // Diagnostics go to stderr; stdout is reserved for the outcome line
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    core::run()
}
