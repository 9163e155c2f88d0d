//! Batch input parsing.
//!
//! A batch is four header lines (board size, player count, move count,
//! fields per move) followed by one line per move holding
//! `player row col`, separated by spaces.

use derive_more::{Display, Error};
use ntoe::{Move, Scenario};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Fields every move line must carry: player, row, column.
const MIN_MOVE_FIELDS: usize = 3;

/// Largest board side accepted: coordinates are `i32`.
const MAX_BOARD_SIZE: usize = i32::MAX as usize;

/// Batch parsing error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Batch error: {} at {}:{}", message, file, line)]
pub struct BatchError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BatchError {
    /// Creates a new batch error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Reads and parses a batch file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_batch(path: impl AsRef<Path>) -> Result<Scenario, BatchError> {
    debug!("Loading batch from file");
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| BatchError::new(format!("Failed to read batch file: {}", e)))?;
    parse_batch(&content)
}

/// Reads a batch from any reader, such as stdin.
#[instrument(skip(reader))]
pub fn read_batch_from(mut reader: impl Read) -> Result<Scenario, BatchError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| BatchError::new(format!("Failed to read batch input: {}", e)))?;
    parse_batch(&content)
}

/// Parses batch text into a [`Scenario`].
///
/// Board size and player count must be positive, and small enough that
/// `size * size` and the cat's-game status `num_players + 1` fit. Player ids
/// on move lines must be negatable. Fields beyond the first three on a move
/// line are accepted but ignored.
#[instrument(skip(content), fields(bytes = content.len()))]
pub fn parse_batch(content: &str) -> Result<Scenario, BatchError> {
    let mut lines = content.lines().map(str::trim).enumerate();
    let mut header = |name: &str| -> Result<i64, BatchError> {
        let (_, line) = lines
            .next()
            .ok_or_else(|| BatchError::new(format!("Missing header line: {}", name)))?;
        line.parse::<i64>()
            .map_err(|_| BatchError::new(format!("Header {} is not an integer: {:?}", name, line)))
    };

    let board_size = header("board size")?;
    let num_players = header("player count")?;
    let move_count = header("move count")?;
    let field_count = header("fields per move")?;

    let board_size = usize::try_from(board_size)
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| BatchError::new(format!("Board size must be positive, got {}", board_size)))?;
    if board_size > MAX_BOARD_SIZE || board_size.checked_mul(board_size).is_none() {
        return Err(BatchError::new(format!(
            "Board size {} is too large",
            board_size
        )));
    }
    let num_players = i32::try_from(num_players)
        .ok()
        .filter(|n| *n > 0 && *n < i32::MAX)
        .ok_or_else(|| {
            BatchError::new(format!(
                "Player count must be between 1 and {}, got {}",
                i32::MAX - 1,
                num_players
            ))
        })?;
    let move_count = usize::try_from(move_count)
        .map_err(|_| BatchError::new(format!("Move count must not be negative, got {}", move_count)))?;
    let field_count = usize::try_from(field_count)
        .ok()
        .filter(|n| *n >= MIN_MOVE_FIELDS)
        .ok_or_else(|| {
            BatchError::new(format!(
                "Moves need at least {} fields, got {}",
                MIN_MOVE_FIELDS, field_count
            ))
        })?;

    let mut moves = Vec::with_capacity(move_count);
    for _ in 0..move_count {
        let (idx, line) = lines.next().ok_or_else(|| {
            BatchError::new(format!(
                "Expected {} moves, found only {}",
                move_count,
                moves.len()
            ))
        })?;
        moves.push(parse_move(line, idx + 1, field_count)?);
    }

    info!(board_size, num_players, moves = moves.len(), "Batch parsed");
    Ok(Scenario {
        board_size,
        num_players,
        moves,
    })
}

fn parse_move(line: &str, line_no: usize, field_count: usize) -> Result<Move, BatchError> {
    let fields = line
        .split(' ')
        .filter(|f| !f.is_empty())
        .map(|f| {
            f.parse::<i32>().map_err(|_| {
                BatchError::new(format!("Line {}: {:?} is not an integer", line_no, f))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    match fields.as_slice() {
        [i32::MIN, ..] => Err(BatchError::new(format!(
            "Line {}: player id {} is out of range",
            line_no,
            i32::MIN
        ))),
        [player, row, col, ..] if fields.len() == field_count => {
            Ok(Move::from_triple(*player, *row, *col))
        }
        _ => Err(BatchError::new(format!(
            "Line {}: expected {} fields, found {}",
            line_no,
            field_count,
            fields.len()
        ))),
    }
}
