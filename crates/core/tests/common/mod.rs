use once_cell::sync::OnceCell;
use threez_core::{Card, Color, Fill, Shape, Value};
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Installs a test subscriber once. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

#[allow(dead_code)]
pub fn card(value: Value, color: Color, shape: Shape, fill: Fill) -> Card {
    Card::universe()
        .into_iter()
        .find(|c| c.value == value && c.color == color && c.shape == shape && c.fill == fill)
        .expect("every combination is in the universe")
}
