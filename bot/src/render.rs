use gridseer_core::{CellMark, GRID_SIDE, Prediction, PredictionRequest};

pub const SAFE_GLYPH: &str = "💎";
pub const UNSAFE_GLYPH: &str = "🚫";

/// Renders the grid plus an echo of the inputs it was derived from.
pub fn prediction_text(request: &PredictionRequest, prediction: &Prediction) -> String {
    let mut out = String::from("Prediction result:\n\n");

    for row in 0..GRID_SIDE {
        for col in 0..GRID_SIDE {
            if col > 0 {
                out.push(' ');
            }
            out.push_str(glyph(prediction.grid[(row, col)]));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "\nServer seed: {}\nNonce: {}\nMine count: {}\nDigest: {}",
        request.server_seed, request.nonce, request.mine_count, prediction.digest_hex
    ));
    out
}

fn glyph(mark: CellMark) -> &'static str {
    if mark.is_safe() { SAFE_GLYPH } else { UNSAFE_GLYPH }
}
