extern crate env_logger;

/// Installs the global logger, filtered by the `RUST_LOG` environment
/// variable.
///
/// Only the first call has an effect.
pub fn init() {
    let _ = env_logger::init();
}
