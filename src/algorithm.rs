use std::{fmt, str::FromStr};

/// The algorithms a caller can choose between.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Algorithm {
    EulerPath,
    HamiltonianCycle,
    HamiltonianPath,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::EulerPath,
        Algorithm::HamiltonianCycle,
        Algorithm::HamiltonianPath,
    ];

    /// The kebab-case name accepted by [`FromStr`].
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::EulerPath => "euler-path",
            Algorithm::HamiltonianCycle => "hamiltonian-cycle",
            Algorithm::HamiltonianPath => "hamiltonian-path",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::EulerPath => f.write_str("Euler path"),
            Algorithm::HamiltonianCycle => f.write_str("Hamiltonian cycle"),
            Algorithm::HamiltonianPath => f.write_str("Hamiltonian path"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?}; expected one of euler-path, hamiltonian-cycle, hamiltonian-path")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.key().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}
