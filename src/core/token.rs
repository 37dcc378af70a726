//! Application signing secret generation.

use rand::rngs::OsRng;
use rand::RngCore;

/// Bytes of entropy behind a generated secret.
const SECRET_BYTES: usize = 32;

/// Generate a hex-encoded application signing secret.
///
/// Draws 32 bytes from the OS CSPRNG; the output is 64 lowercase hex
/// characters. A failing random source aborts the process, which is the
/// right call for a secret generator.
pub fn generate_auth_secret() -> String {
    let mut bytes = [0u8; SECRET_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
