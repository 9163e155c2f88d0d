//! Playing a scenario and formatting the outcome.

use ntoe::driver;
use ntoe::{Game, HaltPolicy, Scenario, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Output format for a [`Report`].
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// One status per line, optionally followed by the board grid.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Outcome of playing one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Status code of each processed move, in order.
    pub statuses: Vec<StatusCode>,
    /// Final board as rows of printable square values.
    pub board: Vec<Vec<i32>>,
    /// Final board rendered by the engine, for text output.
    #[serde(skip)]
    grid: String,
}

impl Report {
    /// Captures the statuses and the final board of `game`.
    pub fn new(game: &Game, statuses: Vec<StatusCode>) -> Self {
        let board = game
            .board()
            .rows()
            .map(|row| row.iter().map(|s| s.value()).collect())
            .collect();
        Self {
            statuses,
            board,
            grid: game.render(),
        }
    }

    /// Formats the report.
    ///
    /// In text mode the board, if requested, follows the statuses as one
    /// space-separated row per line. In JSON mode the board is omitted
    /// unless requested.
    pub fn render(&self, format: OutputFormat, print_board: bool) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => {
                let mut out = String::new();
                for status in &self.statuses {
                    out.push_str(&status.to_string());
                    out.push('\n');
                }
                if print_board {
                    out.push_str(&self.grid);
                }
                Ok(out)
            }
            OutputFormat::Json => {
                let value = if print_board {
                    serde_json::to_value(self)?
                } else {
                    serde_json::json!({ "statuses": self.statuses })
                };
                Ok(format!("{}\n", serde_json::to_string(&value)?))
            }
        }
    }
}

/// Plays every move of `scenario` on a fresh game under `policy`.
#[instrument(skip(scenario), fields(board_size = scenario.board_size, num_players = scenario.num_players))]
pub fn run(scenario: &Scenario, policy: HaltPolicy) -> Report {
    let mut game = scenario.new_game();
    let statuses = driver::play(&mut game, &scenario.moves, policy);
    Report::new(&game, statuses)
}
