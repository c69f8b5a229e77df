use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::*;

// Keyed digest in the provably-fair construction:
// server_seed (secret) keys HMAC-SHA256 over "{nonce}:{mine_count}".

pub type HmacSha256 = Hmac<Sha256>;

/// Computes the 64-character lowercase hex digest the board is derived from.
pub fn keyed_digest_hex(server_seed: &str, nonce: &str, mine_count: u8) -> Result<String> {
    if server_seed.is_empty() {
        return Err(PredictError::EmptyServerSeed);
    }

    let mut mac = HmacSha256::new_from_slice(server_seed.as_bytes())
        .map_err(|_| PredictError::KeyRejected)?;
    mac.update(format!("{nonce}:{mine_count}").as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Walks the digest in non-overlapping 4-hex-digit chunks, mapping each chunk
/// value mod 25 to a board position and collecting distinct positions in order.
///
/// Chunks are never reused and the walk never wraps, so a 64-character digest
/// offers at most 16 candidates and may come up short of `safe_count` when
/// residues collide. Callers accept the shorter selection.
pub fn select_safe_indexes(digest_hex: &str, safe_count: usize) -> Vec<CellIndex> {
    let mut selected = Vec::with_capacity(safe_count);

    for chunk in digest_hex.as_bytes().chunks_exact(CHUNK_LEN) {
        if selected.len() >= safe_count {
            break;
        }
        let Some(value) = parse_hex_chunk(chunk) else {
            log::warn!("Skipping non-hex digest chunk {chunk:?}");
            continue;
        };
        let index = usize::from(value) % TOTAL_CELLS;
        if !selected.contains(&index) {
            selected.push(index);
        }
    }

    selected
}

fn parse_hex_chunk(chunk: &[u8]) -> Option<u16> {
    let text = core::str::from_utf8(chunk).ok()?;
    u16::from_str_radix(text, 16).ok()
}
