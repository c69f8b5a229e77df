use alloc::string::String;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Smallest mine count the conversational layer accepts.
pub const MIN_MINE_COUNT: u8 = 1;
/// Largest mine count the conversational layer accepts.
pub const MAX_MINE_COUNT: u8 = 7;

/// One fully collected set of prediction inputs.
///
/// The mine-count range is enforced upstream by [`SessionState`]; the engine
/// only folds the value into the hashed message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub server_seed: String,
    pub nonce: String,
    pub mine_count: u8,
}

impl PredictionRequest {
    pub fn new(server_seed: impl Into<String>, nonce: impl Into<String>, mine_count: u8) -> Self {
        Self {
            server_seed: server_seed.into(),
            nonce: nonce.into(),
            mine_count,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub grid: PredictionGrid,
    /// Digest the grid was derived from, kept for display and verification.
    pub digest_hex: String,
    /// Safe count the draw asked for; the grid holds fewer when the digest
    /// runs out of distinct positions.
    pub safe_count: u8,
}

/// Draws how many safe cells to reveal: 4 or 5 with weight 0.45 each, 6 with 0.10.
///
/// This draw is not derived from the digest and is the one non-reproducible
/// step of the pipeline.
pub fn draw_safe_count(rng: &mut impl Rng) -> u8 {
    match rng.random_range(0..100u32) {
        0..=44 => 4,
        45..=89 => 5,
        _ => 6,
    }
}

/// Full prediction: random safe-count draw, then the reproducible pipeline.
pub fn generate_prediction(request: &PredictionRequest, rng: &mut impl Rng) -> Result<Prediction> {
    predict_with_safe_count(request, draw_safe_count(rng))
}

/// Reproducible part of the pipeline: digest, index selection, grid.
///
/// Two calls with an identical request and safe count yield identical grids.
pub fn predict_with_safe_count(request: &PredictionRequest, safe_count: u8) -> Result<Prediction> {
    let digest_hex = keyed_digest_hex(&request.server_seed, &request.nonce, request.mine_count)?;
    let indexes = select_safe_indexes(&digest_hex, usize::from(safe_count));

    if indexes.len() < usize::from(safe_count) {
        log::warn!(
            "Digest exhausted, requested {} safe cells but derived {}",
            safe_count,
            indexes.len()
        );
    }

    let grid = PredictionGrid::from_safe_indexes(&indexes)?;
    Ok(Prediction {
        grid,
        digest_hex,
        safe_count,
    })
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn fixed_safe_count_is_deterministic() {
        let request = PredictionRequest::new("server", "client", 5);

        let first = predict_with_safe_count(&request, 5).unwrap();
        let second = predict_with_safe_count(&request, 5).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn reference_vector_selects_known_cells() {
        let request = PredictionRequest::new("abc", "1", 3);

        let prediction = predict_with_safe_count(&request, 4).unwrap();

        assert_eq!(
            prediction.digest_hex,
            "c4c54b01b17add8b3f3d597230148fdb2d9e9ae8324e96f217c95b35de955255"
        );
        assert_eq!(prediction.grid.safe_indexes(), vec![1, 9, 15, 23]);
        assert_eq!(prediction.grid.safe_count(), 4);
    }

    #[test]
    fn mine_count_changes_the_selection() {
        let three = predict_with_safe_count(&PredictionRequest::new("abc", "1", 3), 4).unwrap();
        let four = predict_with_safe_count(&PredictionRequest::new("abc", "1", 4), 4).unwrap();

        assert_ne!(three.digest_hex, four.digest_hex);
        assert_eq!(four.grid.safe_indexes(), vec![6, 11, 16, 24]);
    }

    #[test]
    fn server_seed_changes_the_selection() {
        let abc = predict_with_safe_count(&PredictionRequest::new("abc", "1", 3), 4).unwrap();
        let abcd = predict_with_safe_count(&PredictionRequest::new("abcd", "1", 3), 4).unwrap();

        assert_ne!(abc.digest_hex, abcd.digest_hex);
        assert_eq!(abcd.grid.safe_indexes(), vec![2, 16, 17, 22]);
    }

    #[test]
    fn boundary_mine_counts_only_differ_in_message_bytes() {
        let request = PredictionRequest::new("correct horse battery staple", "777", 1);
        let low = predict_with_safe_count(&request, 6).unwrap();
        let high = predict_with_safe_count(
            &PredictionRequest::new("correct horse battery staple", "777", 7),
            6,
        )
        .unwrap();

        assert_eq!(low.grid.safe_count(), 6);
        assert_eq!(high.grid.safe_count(), 6);
        assert_ne!(low.digest_hex, high.digest_hex);
    }

    #[test]
    fn draw_stays_in_supported_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = [false; 3];

        for _ in 0..1000 {
            let count = draw_safe_count(&mut rng);
            assert!((4..=6).contains(&count));
            seen[usize::from(count) - 4] = true;
        }

        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn generated_grid_respects_the_draw() {
        let request = PredictionRequest::new("server-seed", "12345", 5);
        let mut rng = SmallRng::seed_from_u64(42);

        let prediction = generate_prediction(&request, &mut rng).unwrap();

        assert!((4..=6).contains(&prediction.safe_count));
        assert!(prediction.grid.safe_count() <= usize::from(prediction.safe_count));
    }

    #[test]
    fn empty_seed_surfaces_to_the_caller() {
        let request = PredictionRequest::new("", "1", 3);

        assert_eq!(
            predict_with_safe_count(&request, 4),
            Err(PredictError::EmptyServerSeed)
        );
    }
}
