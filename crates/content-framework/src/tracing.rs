//! # Observability & Tracing
//!
//! [`setup_tracing`] installs structured logging for a console process.
//!
//! Log levels come from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per fetch, save and delete
//! RUST_LOG=debug cargo run     # every request and filter change
//! RUST_LOG=content_framework=debug,content_console=info cargo run
//! ```
//!
//! Controllers log with a `resource` field, and client methods open a span per
//! call, so a save followed by its refetch reads as:
//!
//! ```text
//! INFO submit{resource="events"}: Saved action="create" message="Created"
//! DEBUG Refresh requested resource="events"
//! INFO Fetched resource="events" count=1 total=1 page=1
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Call once at process start; a second call panics.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
