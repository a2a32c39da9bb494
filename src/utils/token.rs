//! Session token generation.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{rngs::OsRng, RngCore};

/// Random bytes behind each token (256 bits).
const TOKEN_BYTES: usize = 32;

/// Returns a fresh bearer token: OS CSPRNG bytes, URL-safe base64 without
/// padding. Tokens carry no embedded structure: neither the owning user
/// nor the issue time can be recovered or predicted from one.
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
