//! Compass directions for passages and arrow flights

/// One of the four passage directions out of a cavern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Order used when wiring a freshly generated map
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The direction leading back the way you came
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "Left",
            Direction::Up => "Up",
            Direction::Right => "Right",
            Direction::Down => "Down",
        }
    }

    /// Parse a full direction name, ignoring case
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "up" => Some(Direction::Up),
            "right" => Some(Direction::Right),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
