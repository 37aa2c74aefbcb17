//! Shared types - data structures and constants used by every blockfall crate
//!
//! All types here are plain data with no external dependencies, so they can be
//! used by the engine, the terminal renderer and the input mapping alike.
//!
//! # Board Geometry
//!
//! The playfield is 11 columns by 20 rows, addressed 1-indexed with `y` growing
//! downward:
//!
//! - **Playable cells**: `1..=BOARD_WIDTH` × `1..=BOARD_HEIGHT`
//! - **Rim**: column `0`, column `BOARD_WIDTH + 1` and row `BOARD_HEIGHT + 1`
//!   are always [`CellValue::Border`]
//! - **Spawn anchor**: `(4, 0)`; a piece's local cells are 1-indexed, so the
//!   topmost occupied row of a fresh piece is row 1
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 16 | Sleep between logical ticks |
//! | `DEFAULT_FALL_MS` | 1000 | Fall interval at level 1 |
//! | `LEVEL_SPEEDUP` | 0.8 | Fall interval factor per level-up |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines per level |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{CellValue, GameAction, Rotation, ShapeId, BOARD_WIDTH};
//!
//! let bar = ShapeId::new(4).unwrap();
//! assert_eq!(bar.name(), "I");
//!
//! assert_eq!(Rotation::FIRST.next().index(), 2);
//! assert_eq!(Rotation::new(4).unwrap().next(), Rotation::FIRST);
//!
//! assert_eq!(CellValue::from_raw(-1), Some(CellValue::Border));
//! assert_eq!(CellValue::Locked(bar).raw(), 4);
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!(BOARD_WIDTH, 11);
//! ```

/// Board width in playable cells (11 columns)
pub const BOARD_WIDTH: i16 = 11;

/// Board height in playable cells (20 rows)
pub const BOARD_HEIGHT: i16 = 20;

/// Anchor column of a freshly spawned piece
pub const SPAWN_X: i16 = 4;

/// Anchor row of a freshly spawned piece
pub const SPAWN_Y: i16 = 0;

/// Number of distinct shapes
pub const SHAPE_COUNT: u8 = 7;

/// Number of rotation variants per shape
pub const ROTATION_COUNT: u8 = 4;

/// Default sleep between ticks in milliseconds
pub const DEFAULT_TICK_MS: u64 = 16;

/// Default fall interval at level 1 in milliseconds
pub const DEFAULT_FALL_MS: u64 = 1000;

/// Fall interval multiplier applied on every level-up
pub const LEVEL_SPEEDUP: f64 = 0.8;

/// Cumulative cleared lines per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level at the start of a game
pub const START_LEVEL: u32 = 1;

/// Terminal columns used to draw one board cell
pub const CELL_COLUMNS: u16 = 2;

/// Raw encoding of an empty cell
pub const RAW_EMPTY: i8 = 0;

/// Raw encoding of a border cell
pub const RAW_BORDER: i8 = -1;


/// Identifier of one of the seven shapes, always in `1..=7`
///
/// | id | name |
/// |----|------|
/// | 1 | O |
/// | 2 | T |
/// | 3 | S |
/// | 4 | I |
/// | 5 | Z |
/// | 6 | L |
/// | 7 | J |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u8);

impl ShapeId {
    /// Every shape id in ascending order
    pub const ALL: [ShapeId; SHAPE_COUNT as usize] = [
        ShapeId(1),
        ShapeId(2),
        ShapeId(3),
        ShapeId(4),
        ShapeId(5),
        ShapeId(6),
        ShapeId(7),
    ];

    /// The four-long bar
    pub const BAR: ShapeId = ShapeId(4);

    /// Build a shape id, rejecting values outside `1..=7`
    pub const fn new(id: u8) -> Option<Self> {
        if id >= 1 && id <= SHAPE_COUNT {
            Some(ShapeId(id))
        } else {
            None
        }
    }

    /// Numeric id in `1..=7`
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index into per-shape tables
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Conventional letter name of the shape
    pub fn name(self) -> &'static str {
        match self.0 {
            1 => "O",
            2 => "T",
            3 => "S",
            4 => "I",
            5 => "Z",
            6 => "L",
            _ => "J",
        }
    }
}

/// Rotation index in `1..=4`, cycling 1→2→3→4→1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation(u8);

impl Rotation {
    /// Spawn orientation
    pub const FIRST: Rotation = Rotation(1);

    pub const fn new(index: u8) -> Option<Self> {
        if index >= 1 && index <= ROTATION_COUNT {
            Some(Rotation(index))
        } else {
            None
        }
    }

    /// Rotation index in `1..=4`
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Zero-based slot in a rotation table
    pub const fn slot(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The following rotation index, wrapping 4 back to 1
    pub const fn next(self) -> Self {
        Rotation(self.0 % ROTATION_COUNT + 1)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::FIRST
    }
}

/// Contents of one board cell
///
/// The integer encoding used in snapshots and tests is `0` for empty, `-1` for
/// border and the shape id for locked cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Border,
    Locked(ShapeId),
}

impl CellValue {
    pub fn raw(self) -> i8 {
        match self {
            CellValue::Empty => RAW_EMPTY,
            CellValue::Border => RAW_BORDER,
            CellValue::Locked(id) => id.get() as i8,
        }
    }

    pub fn from_raw(raw: i8) -> Option<Self> {
        match raw {
            RAW_EMPTY => Some(CellValue::Empty),
            RAW_BORDER => Some(CellValue::Border),
            n if n > 0 => ShapeId::new(n as u8).map(CellValue::Locked),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// Discrete player commands produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Advance to the next rotation index
    Rotate,
    /// Drop to the lowest valid row and lock immediately
    HardDrop,
    /// Toggle between playing and paused
    Pause,
    /// Leave the game
    Quit,
}

impl GameAction {
    /// Parse an action name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            "pause" => Some(GameAction::Pause),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::Quit => "quit",
        }
    }
}

/// Session-wide game status
///
/// `Over` is terminal: nothing leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Paused,
    Over,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::Over => "over",
        }
    }
}

/// Summary of one lock event, consumed by the tick driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub shape: ShapeId,
    pub lines_cleared: u32,
    pub score_gained: u32,
    pub level_up: bool,
    pub game_over: bool,
}
