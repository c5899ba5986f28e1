//! Hard-tier engine: fixed-depth material minimax.

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_types::Position;
use crate::move_generation::legal_move_generator::SpanishMoveGenerator;
use crate::search::board_scoring::MaterialScorer;
use crate::search::minimax::{search_best_move, SearchConfig};

pub struct MinimaxEngine {
    move_generator: SpanishMoveGenerator,
    scorer: MaterialScorer,
    config: SearchConfig,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            move_generator: SpanishMoveGenerator,
            scorer: MaterialScorer,
            config: SearchConfig {
                depth: depth.max(1),
                ..SearchConfig::default()
            },
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default().depth)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "PlumDraughts Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> DraughtsResult<()> {
        let invalid = || DraughtsError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };

        match name.to_ascii_lowercase().as_str() {
            "depth" => {
                // Depth 0 is clamped to 1, the same as `new` and search requests.
                let depth = value.trim().parse::<u8>().map_err(|_| invalid())?;
                self.config.depth = depth.max(1);
            }
            "alphabeta" => {
                self.config.alpha_beta = match value.trim() {
                    "true" | "on" | "1" => true,
                    "false" | "off" | "0" => false,
                    _ => return Err(invalid()),
                };
            }
            _ => return Err(invalid()),
        }
        Ok(())
    }

    fn choose_move(
        &mut self,
        position: &Position,
        params: &SearchParams,
    ) -> DraughtsResult<EngineOutput> {
        let config = SearchConfig {
            depth: params.depth.unwrap_or(self.config.depth).max(1),
            ..self.config
        };

        let result = search_best_move(position, &self.move_generator, &self.scorer, config)?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info depth {} score {} nodes {}",
            result.depth, result.best_score, result.nodes
        ));
        out.best_move = result.best_move;
        Ok(out)
    }
}
