//! Key derivation versions for secrets stored at rest
//!
//! Every encrypted secret records the version it was written with, so the
//! iteration count can be raised without breaking existing rows.
//! - Version 1: PBKDF2-HMAC-SHA256, 100,000 iterations
//! - Version 2: PBKDF2-HMAC-SHA256, 600,000 iterations (OWASP 2023 Recommended)

/// Version 1: PBKDF2-HMAC-SHA256, 100,000 iterations
const VERSION_1_ITERATIONS: u32 = 100_000;

/// Version 2: PBKDF2-HMAC-SHA256, 600,000 iterations
const VERSION_2_ITERATIONS: u32 = 600_000;

/// Version written by `encrypt`
pub const CURRENT_SECRET_VERSION: u32 = 2;

/// Iteration count of `CURRENT_SECRET_VERSION`, resolved at compile time.
///
/// # Panics
/// Fails the build if `CURRENT_SECRET_VERSION` has no iteration count.
#[allow(clippy::panic)]
pub const fn current_iterations() -> u32 {
    match pbkdf2_iterations(CURRENT_SECRET_VERSION) {
        Some(iterations) => iterations,
        None => panic!("Invalid CURRENT_SECRET_VERSION"),
    }
}

/// PBKDF2 iteration count for a stored secret version, `None` if unknown.
pub const fn pbkdf2_iterations(version: u32) -> Option<u32> {
    match version {
        1 => Some(VERSION_1_ITERATIONS),
        2 => Some(VERSION_2_ITERATIONS),
        _ => None,
    }
}
