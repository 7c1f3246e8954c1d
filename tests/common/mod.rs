pub mod fixtures;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Installs a test logger so `RUST_LOG=trace` shows each resolution step.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
