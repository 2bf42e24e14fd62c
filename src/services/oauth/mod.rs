pub mod github;

use base64::Engine;
use rand_core::{OsRng, RngCore};

/// Fresh opaque value for the OAuth `state` parameter.
pub fn generate_state() -> String {
    let mut state_bytes = [0u8; 32];
    OsRng.fill_bytes(&mut state_bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(state_bytes)
}
