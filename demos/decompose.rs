//! Factor the canonical 3x3 example and print `L`.
//!
//! ```text
//! cargo run --example decompose
//! RUST_LOG=cholesky=trace cargo run --example decompose
//! ```

use std::process::ExitCode;

use cholesky::decompose;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let n = 3;
    let a = [
        25.0, 15.0, -5.0, //
        15.0, 18.0, 0.0, //
        -5.0, 0.0, 11.0,
    ];

    match decompose(&a, n) {
        Ok(l) => {
            println!("{:.5}", l);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "cholesky factorization failed");
            ExitCode::FAILURE
        }
    }
}
