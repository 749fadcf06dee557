// Exclude entire file from coverage - binary entry point cannot be unit tested
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match gastovoz::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gastovoz: {e}");
            ExitCode::FAILURE
        }
    }
}
