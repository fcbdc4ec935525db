// setup_tracing installs a JSON formatter for the `tracing` events the library emits.
// Calling it again after a subscriber is installed leaves the existing one in place.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .json()
        .try_init();
}
