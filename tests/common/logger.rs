use std::sync::Once;
use freqdict::common::logger as core_logger;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        // RUST_LOG still overrides the filters set by the crate logger
        core_logger::initialize_logger();
    });
}
