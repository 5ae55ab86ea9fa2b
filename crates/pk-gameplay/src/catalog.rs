use pk_core::Phase;
use std::path::Path;

/// The ordered list of phases a session may choose from.
///
/// Never empty, never holds a blank or repeated entry. Loaded once at
/// startup from a JSON file, falling back to the built-in list of
/// [`pk_core::PHASES`] when the file is missing or malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog(Vec<Phase>);

/// Accepted on-disk shapes: a bare array or an object with a `phases` key.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Source {
    List(Vec<Phase>),
    Keyed { phases: Vec<Phase> },
}

impl From<Source> for Vec<Phase> {
    fn from(source: Source) -> Self {
        match source {
            Source::List(phases) => phases,
            Source::Keyed { phases } => phases,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self(pk_core::PHASES.iter().map(|p| p.to_string()).collect())
    }
}

impl TryFrom<Vec<Phase>> for Catalog {
    type Error = anyhow::Error;
    fn try_from(phases: Vec<Phase>) -> Result<Self, Self::Error> {
        if phases.is_empty() {
            return Err(anyhow::anyhow!("phase catalog is empty"));
        }
        for (i, phase) in phases.iter().enumerate() {
            if phase.trim().is_empty() {
                return Err(anyhow::anyhow!("phase #{} is blank", i + 1));
            }
            if phases[..i].contains(phase) {
                return Err(anyhow::anyhow!("phase {:?} is listed twice", phase));
            }
        }
        Ok(Self(phases))
    }
}

impl std::str::FromStr for Catalog {
    type Err = anyhow::Error;
    fn from_str(json: &str) -> Result<Self, Self::Err> {
        let source = serde_json::from_str::<Source>(json)?;
        Self::try_from(Vec::from(source))
    }
}

impl Catalog {
    /// Reads a catalog from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read {}: {}", path.display(), e))?;
        let catalog = json
            .parse::<Self>()
            .map_err(|e| anyhow::anyhow!("parse {}: {}", path.display(), e))?;
        log::info!("loaded {} phases from {}", catalog.len(), path.display());
        Ok(catalog)
    }
    /// Reads a catalog from a JSON file, or falls back to the built-in list.
    ///
    /// The load failure, if any, is handed back so the caller can surface it.
    pub fn load_or_default(path: &Path) -> (Self, Option<anyhow::Error>) {
        match Self::load(path) {
            Ok(catalog) => (catalog, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
    /// Maps 1-based catalog numbers to phases, keeping the order given.
    pub fn resolve(&self, numbers: &[usize]) -> anyhow::Result<Vec<Phase>> {
        numbers
            .iter()
            .map(|&n| {
                n.checked_sub(1)
                    .and_then(|i| self.0.get(i))
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("no phase #{} (1-{})", n, self.len()))
            })
            .collect()
    }
    pub fn contains(&self, phase: &str) -> bool {
        self.0.iter().any(|p| p == phase)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn phases(&self) -> &[Phase] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &Phase> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_is_builtin() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), pk_core::PHASES.len());
        assert_eq!(catalog.phases()[0], "2 sets of 3");
    }

    #[test]
    fn parses_list() {
        let catalog = r#"["A", "B", "C"]"#.parse::<Catalog>().unwrap();
        assert_eq!(catalog.phases(), &["A", "B", "C"]);
    }

    #[test]
    fn parses_keyed() {
        let catalog = r#"{"phases": ["A", "B"]}"#.parse::<Catalog>().unwrap();
        assert_eq!(catalog.phases(), &["A", "B"]);
    }

    #[test]
    fn rejects_malformed() {
        assert!("[]".parse::<Catalog>().is_err());
        assert!(r#"["A", "  "]"#.parse::<Catalog>().is_err());
        assert!(r#"["A", "B", "A"]"#.parse::<Catalog>().is_err());
        assert!(r#"{"stages": ["A"]}"#.parse::<Catalog>().is_err());
        assert!("not json".parse::<Catalog>().is_err());
    }

    #[test]
    fn loads_from_file() {
        let file = file(r#"["Two pairs", "Run of five"]"#);
        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("Run of five"));
    }

    #[test]
    fn falls_back_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let (catalog, warning) = Catalog::load_or_default(&dir.path().join("missing.json"));
        assert_eq!(catalog, Catalog::default());
        assert!(warning.is_some());
    }

    #[test]
    fn falls_back_when_corrupt() {
        let file = file("{ nope");
        let (catalog, warning) = Catalog::load_or_default(file.path());
        assert!(!catalog.is_empty());
        assert_eq!(catalog, Catalog::default());
        assert!(warning.unwrap().to_string().contains("parse"));
    }

    #[test]
    fn no_warning_when_valid() {
        let file = file(r#"["A"]"#);
        let (catalog, warning) = Catalog::load_or_default(file.path());
        assert_eq!(catalog.phases(), &["A"]);
        assert!(warning.is_none());
    }

    #[test]
    fn resolves_numbers_in_given_order() {
        let catalog = r#"["A", "B", "C"]"#.parse::<Catalog>().unwrap();
        assert_eq!(catalog.resolve(&[3, 1]).unwrap(), vec!["C", "A"]);
        assert!(catalog.resolve(&[0]).is_err());
        assert!(catalog.resolve(&[4]).is_err());
        assert!(catalog.resolve(&[]).unwrap().is_empty());
    }
}
