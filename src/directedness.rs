use std::fmt;

/// Whether an edge (or a whole graph) is directed.
///
/// A [`Graph`](crate::Graph) carries a global directedness that describes how
/// the analyses interpret it, but every individual edge is inserted with its
/// own directedness, so a single graph may mix both kinds.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Directedness {
    Directed,
    #[default]
    Undirected,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        matches!(self, Directedness::Directed)
    }

    pub fn from_directed(directed: bool) -> Self {
        if directed {
            Directedness::Directed
        } else {
            Directedness::Undirected
        }
    }
}

impl fmt::Display for Directedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directedness::Directed => f.write_str("directed"),
            Directedness::Undirected => f.write_str("undirected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_directed() {
        assert_eq!(Directedness::from_directed(true), Directedness::Directed);
        assert_eq!(Directedness::from_directed(false), Directedness::Undirected);
        assert!(Directedness::Directed.is_directed());
        assert!(!Directedness::default().is_directed());
    }
}
