//! Profiling utilities based on the `puffin` crate.

use std::sync::OnceLock;

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

/// Address the puffin HTTP server binds to.
pub const DEFAULT_PROFILER_ADDR: &str = "127.0.0.1:8585";

static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

/// Turn on puffin scopes and start the HTTP server for `puffin_viewer`.
///
/// A bind failure is logged and leaves scopes enabled, so in-process
/// consumers of [`GlobalProfiler`] still receive data.
///
/// # Example
/// ```no_run
/// gridwork_core::profiling::init_profiling();
/// ```
pub fn init_profiling() {
    puffin::set_scopes_on(true);

    match puffin_http::Server::new(DEFAULT_PROFILER_ADDR) {
        Ok(server) => {
            tracing::info!("Puffin profiler server started on http://{}", DEFAULT_PROFILER_ADDR);
            let _ = PROFILING_SERVER.set(server);
        }
        Err(e) => {
            tracing::error!("Failed to start puffin server: {}", e);
        }
    }
}

/// Mark the start of a new profiling frame.
///
/// Hosts call this once per rendered frame so drag work is grouped per frame.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
