#![allow(dead_code)]

use lazy_static::lazy_static;
use pathnav_core::PathValue;

lazy_static! {
    pub static ref P1: PathValue = PathValue::new("/files/client1/files/woot", '/');
    pub static ref P2: PathValue = PathValue::new("/files/client2/files/woot", '/');
}

/// Route an `RUST_LOG`-filtered subscriber to the test output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Assert that an invariant holds
#[macro_export]
macro_rules! assert_invariant {
    ($cond:expr, $invariant_name:expr) => {
        if !$cond {
            panic!(
                "Invariant violated: {}\nCondition: {}",
                $invariant_name,
                stringify!($cond)
            );
        }
    };
}
