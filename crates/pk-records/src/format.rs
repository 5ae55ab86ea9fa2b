use std::path::Path;

/// Output encoding for exported history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    #[default]
    Csv,
    Json,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
    /// Guesses the format from a file extension, defaulting to CSV.
    pub fn infer(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| Self::try_from(ext).ok())
            .unwrap_or_default()
    }
}

impl TryFrom<&str> for Format {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(anyhow::anyhow!("invalid format {:?}, expected csv or json", s)),
        }
    }
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("CSV".parse::<Format>().unwrap(), Format::Csv);
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert!("xml".parse::<Format>().is_err());
    }

    #[test]
    fn infer_from_extension() {
        assert_eq!(Format::infer(Path::new("out/history.json")), Format::Json);
        assert_eq!(Format::infer(Path::new("history.CSV")), Format::Csv);
        assert_eq!(Format::infer(Path::new("history")), Format::Csv);
        assert_eq!(Format::infer(Path::new("history.txt")), Format::Csv);
    }
}
