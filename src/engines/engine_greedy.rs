//! Medium-tier engine: random capture when one exists, otherwise any move.
//!
//! With mandatory capture the legal set is capture-only whenever a capture
//! exists, so this mostly matters for generators that do not enforce it.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{parse_seed, Engine, EngineOutput, SearchParams};
use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_types::Position;
use crate::move_generation::legal_move_generator::SpanishMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_description::Move;

pub struct GreedyEngine {
    move_generator: SpanishMoveGenerator,
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            move_generator: SpanishMoveGenerator,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: SpanishMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "PlumDraughts Greedy"
    }

    fn set_option(&mut self, name: &str, value: &str) -> DraughtsResult<()> {
        if name.eq_ignore_ascii_case("seed") {
            self.rng = StdRng::seed_from_u64(parse_seed(name, value)?);
            return Ok(());
        }
        Err(DraughtsError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        })
    }

    fn choose_move(
        &mut self,
        position: &Position,
        _params: &SearchParams,
    ) -> DraughtsResult<EngineOutput> {
        let legal_moves = self.move_generator.generate_legal_moves(position);
        let captures: Vec<&Move> = legal_moves.iter().filter(|mv| mv.is_capture()).collect();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {} captures {}",
            legal_moves.len(),
            captures.len()
        ));

        out.best_move = if captures.is_empty() {
            legal_moves.as_slice().choose(&mut self.rng).cloned()
        } else {
            captures.as_slice().choose(&mut self.rng).map(|mv| (*mv).clone())
        };
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyEngine;
    use crate::engines::engine_trait::{Engine, SearchParams};
    use crate::game_state::draughts_types::Position;

    #[test]
    fn greedy_engine_always_takes_an_available_capture() {
        let game = Position::from_layout("8/8/8/8/3d4/2l3l1/8/8 l").expect("layout should parse");
        let mut engine = GreedyEngine::with_seed(3);
        for _ in 0..10 {
            let out = engine
                .choose_move(&game, &SearchParams::default())
                .expect("greedy engine should not fail");
            assert!(out.best_move.expect("a capture exists").is_capture());
        }
    }

    #[test]
    fn greedy_engine_falls_back_to_simple_moves() {
        let game = Position::new_game();
        let out = GreedyEngine::with_seed(3)
            .choose_move(&game, &SearchParams::default())
            .expect("greedy engine should not fail");
        assert!(!out.best_move.expect("start position has moves").is_capture());
    }
}
