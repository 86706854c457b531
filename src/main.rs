//! Process entry point: run the four scenarios and fold their outcomes
//! into the exit status.

use modexp_harness::scenario;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut rng = match ChaCha20Rng::try_from_os_rng() {
        Ok(rng) => rng,
        Err(err) => {
            eprintln!("failed to seed random source: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;

    failed |= scenario::zero_degeneracy(&mut rng);

    match scenario::single_exponent(&mut rng) {
        Ok(f) => failed |= f,
        Err(err) => {
            eprintln!("single-exponent scenario aborted: {err}");
            return ExitCode::FAILURE;
        }
    }

    match scenario::two_term(&mut rng) {
        Ok(f) => failed |= f,
        Err(err) => {
            eprintln!("two-term scenario aborted: {err}");
            return ExitCode::FAILURE;
        }
    }

    failed |= scenario::crash_regression();

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
