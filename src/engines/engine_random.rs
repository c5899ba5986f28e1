//! Easy-tier engine: uniform random choice over the legal move set.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{parse_seed, Engine, EngineOutput, SearchParams};
use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_types::Position;
use crate::move_generation::legal_move_generator::SpanishMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: SpanishMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
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

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumDraughts Random"
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
        params: &SearchParams,
    ) -> DraughtsResult<EngineOutput> {
        let legal_moves = self.move_generator.generate_legal_moves(position);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));
        if let Some(depth) = params.depth {
            out.info_lines.push(format!(
                "info string random_engine ignores requested_depth {depth}"
            ));
        }

        out.best_move = legal_moves.as_slice().choose(&mut self.rng).cloned();
        Ok(out)
    }
}
