//! Named seed patterns

/// A named set of live-cell offsets, relative to the top-left corner of the grid
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Smallest square grid that holds every cell of the pattern
    pub fn extent(&self) -> usize {
        self.cells
            .iter()
            .map(|&(r, c)| r.max(c) + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Registry in listing order. The pulsar is offset by 2 on both axes, so it
/// needs a 17x17 grid to oscillate without touching itself across the wrap.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "toad",
        cells: &[(1, 0), (1, 1), (1, 2), (2, 1), (2, 2), (2, 3)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "pulsar",
        cells: &[
            (2, 4), (2, 5), (2, 6), (2, 10), (2, 11), (2, 12),
            (4, 2), (4, 7), (4, 9), (4, 14),
            (5, 2), (5, 7), (5, 9), (5, 14),
            (6, 2), (6, 7), (6, 9), (6, 14),
            (7, 4), (7, 5), (7, 6), (7, 10), (7, 11), (7, 12),
            (9, 4), (9, 5), (9, 6), (9, 10), (9, 11), (9, 12),
            (10, 2), (10, 7), (10, 9), (10, 14),
            (11, 2), (11, 7), (11, 9), (11, 14),
            (12, 2), (12, 7), (12, 9), (12, 14),
            (14, 4), (14, 5), (14, 6), (14, 10), (14, 11), (14, 12),
        ],
    },
    Pattern {
        name: "lwss",
        cells: &[(0, 1), (0, 4), (1, 0), (2, 0), (2, 4), (3, 0), (3, 1), (3, 2), (3, 3)],
    },
];

/// Look up a pattern by name
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name == name)
}

/// Names of all registered patterns, in registry order
pub fn pattern_names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|p| p.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_registry_contains_canonical_patterns() {
        for name in ["glider", "blinker", "toad", "beacon", "pulsar", "lwss"] {
            assert!(find_pattern(name).is_some(), "missing {}", name);
        }
        assert!(find_pattern("gosper").is_none());
        assert!(find_pattern("Glider").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        assert!(pattern_names().all_unique());
    }

    #[test]
    fn test_cells_are_distinct() {
        for pattern in PATTERNS {
            assert!(pattern.cells.iter().all_unique(), "{} repeats a cell", pattern.name);
        }
    }

    #[test]
    fn test_pattern_sizes() {
        assert_eq!(find_pattern("glider").unwrap().cells.len(), 5);
        assert_eq!(find_pattern("pulsar").unwrap().cells.len(), 48);
        assert_eq!(find_pattern("lwss").unwrap().cells.len(), 9);
        assert_eq!(find_pattern("glider").unwrap().extent(), 3);
        assert_eq!(find_pattern("pulsar").unwrap().extent(), 15);
    }
}
