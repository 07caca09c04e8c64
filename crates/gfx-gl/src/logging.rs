//! `tracing` subscriber setup.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call repeatedly; does nothing if the host application already
/// installed a global subscriber.
pub fn init() {
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt().with_env_filter(filter()).try_init();
    });
}

/// Like [`init`] but writes through the test harness's captured output.
pub fn init_test() {
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_test_writer()
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_test();
        init();
        init();
        tracing::info!("subscriber installed once");
        assert!(INIT.get().is_some());
    }
}
