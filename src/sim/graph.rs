//! Cavern connectivity graph
//!
//! Connections are one-way. A two-way passage is two connections, one in
//! each direction. Lookups walk connections in insertion order, so when two
//! connections share a source and direction the older one wins.

use std::borrow::Borrow;
use std::fmt;

use super::direction::Direction;

/// Opaque name of a cavern
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CavernId(String);

impl CavernId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CavernId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CavernId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CavernId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CavernId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for CavernId {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for CavernId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&CavernId> for CavernId {
    fn from(id: &CavernId) -> Self {
        id.clone()
    }
}

/// A one-way passage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub from: CavernId,
    pub to: CavernId,
    pub direction: Direction,
}

/// Directed, labeled graph of caverns
#[derive(Debug, Clone, Default)]
pub struct CavernGraph {
    connections: Vec<Connection>,
    /// Every endpoint ever connected, in first-seen order
    caverns: Vec<CavernId>,
}

impl CavernGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a connection and register both endpoints as known caverns
    pub fn connect(&mut self, from: impl Into<CavernId>, to: impl Into<CavernId>, direction: Direction) {
        let from = from.into();
        let to = to.into();
        self.register(&from);
        self.register(&to);
        self.connections.push(Connection { from, to, direction });
    }

    fn register(&mut self, cavern: &CavernId) {
        if !self.caverns.contains(cavern) {
            self.caverns.push(cavern.clone());
        }
    }

    /// Destination of the first connection leaving `cavern` in `direction`
    pub fn find_destination(&self, cavern: &str, direction: Direction) -> Option<&CavernId> {
        self.connections
            .iter()
            .find(|c| c.from == cavern && c.direction == direction)
            .map(|c| &c.to)
    }

    /// Outgoing connections of `cavern`, in insertion order
    pub fn connections_from<'a>(&'a self, cavern: &'a str) -> impl Iterator<Item = &'a Connection> + 'a {
        self.connections.iter().filter(move |c| c.from == cavern)
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn caverns(&self) -> &[CavernId] {
        &self.caverns
    }

    pub fn contains(&self, cavern: &str) -> bool {
        self.caverns.iter().any(|c| c == cavern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_find_destination() {
        let mut graph = CavernGraph::new();
        graph.connect("A", "B", Direction::Up);
        graph.connect("B", "A", Direction::Down);

        assert_eq!(graph.find_destination("A", Direction::Up), Some(&CavernId::from("B")));
        assert_eq!(graph.find_destination("B", Direction::Down), Some(&CavernId::from("A")));
        assert_eq!(graph.find_destination("A", Direction::Down), None);
        assert_eq!(graph.find_destination("C", Direction::Up), None);
    }

    #[test]
    fn test_connections_are_one_way() {
        let mut graph = CavernGraph::new();
        graph.connect("A", "B", Direction::Left);
        assert_eq!(graph.find_destination("B", Direction::Right), None);
    }

    #[test]
    fn test_duplicate_slot_first_match_wins() {
        let mut graph = CavernGraph::new();
        graph.connect("A", "B", Direction::Up);
        graph.connect("A", "C", Direction::Up);
        assert_eq!(graph.find_destination("A", Direction::Up), Some(&CavernId::from("B")));
        assert_eq!(graph.connections().len(), 2);
    }

    #[test]
    fn test_known_caverns_in_first_seen_order() {
        let mut graph = CavernGraph::new();
        graph.connect("B", "A", Direction::Up);
        graph.connect("A", "C", Direction::Up);
        graph.connect("C", "B", Direction::Left);

        let names: Vec<&str> = graph.caverns().iter().map(CavernId::as_str).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        assert!(graph.contains("C"));
        assert!(!graph.contains("D"));
    }

    #[test]
    fn test_connections_from_keeps_order() {
        let mut graph = CavernGraph::new();
        graph.connect("A", "B", Direction::Right);
        graph.connect("C", "A", Direction::Up);
        graph.connect("A", "C", Direction::Down);

        let dirs: Vec<Direction> = graph.connections_from("A").map(|c| c.direction).collect();
        assert_eq!(dirs, vec![Direction::Right, Direction::Down]);
    }

    fn any_connection() -> impl Strategy<Value = (u8, u8, Direction)> {
        (0u8..6, 0u8..6, prop::sample::select(Direction::ALL.to_vec()))
    }

    proptest! {
        #[test]
        fn find_destination_returns_first_inserted(edges in prop::collection::vec(any_connection(), 1..40)) {
            let mut graph = CavernGraph::new();
            for (from, to, dir) in &edges {
                graph.connect(format!("c{from}"), format!("c{to}"), *dir);
            }
            for (from, _, dir) in &edges {
                let first = edges
                    .iter()
                    .find(|(f, _, d)| f == from && d == dir)
                    .map(|(_, t, _)| format!("c{t}"));
                let found = graph
                    .find_destination(&format!("c{from}"), *dir)
                    .map(|c| c.as_str().to_owned());
                prop_assert_eq!(found, first);
            }
            for (from, to, _) in &edges {
                let from = format!("c{from}");
                let to = format!("c{to}");
                prop_assert!(graph.contains(&from));
                prop_assert!(graph.contains(&to));
            }
        }
    }
}
