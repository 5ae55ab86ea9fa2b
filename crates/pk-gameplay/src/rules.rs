use super::*;
use pk_core::Phase;

/// Session-wide scoring configuration.
///
/// - `sign` — how round points move totals
/// - `default_phases` — size of the starting selection, taken from the front
///   of the catalog; `None` selects the whole catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rules {
    pub sign: Sign,
    pub default_phases: Option<usize>,
}

impl Rules {
    /// The starting selection for a catalog, never empty.
    pub fn defaults(&self, catalog: &Catalog) -> Vec<Phase> {
        let n = self
            .default_phases
            .unwrap_or(catalog.len())
            .clamp(1, catalog.len().max(1));
        catalog.iter().take(n).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        r#"["A", "B", "C"]"#.parse().unwrap()
    }

    #[test]
    fn whole_catalog_by_default() {
        assert_eq!(Rules::default().defaults(&catalog()), vec!["A", "B", "C"]);
    }

    #[test]
    fn first_n() {
        let rules = Rules {
            default_phases: Some(2),
            ..Rules::default()
        };
        assert_eq!(rules.defaults(&catalog()), vec!["A", "B"]);
    }

    #[test]
    fn clamped() {
        let none = Rules {
            default_phases: Some(0),
            ..Rules::default()
        };
        let many = Rules {
            default_phases: Some(99),
            ..Rules::default()
        };
        assert_eq!(none.defaults(&catalog()), vec!["A"]);
        assert_eq!(many.defaults(&catalog()).len(), 3);
    }
}
