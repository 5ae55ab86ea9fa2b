use super::*;
use pk_gameplay::Row;
use std::io::Write;
use std::path::Path;

/// Column order of the CSV encoding.
pub const HEADER: [&str; 4] = ["snapshot", "player", "score", "phase"];

/// A borrowed view over exported history rows, ready to be written out.
#[derive(Debug, Clone, Copy)]
pub struct Export<'a>(&'a [Row]);

impl<'a> From<&'a [Row]> for Export<'a> {
    fn from(rows: &'a [Row]) -> Self {
        Self(rows)
    }
}

impl<'a> From<&'a Vec<Row>> for Export<'a> {
    fn from(rows: &'a Vec<Row>) -> Self {
        Self(rows.as_slice())
    }
}

impl Export<'_> {
    pub fn rows(&self) -> &[Row] {
        self.0
    }
    /// Encodes every row into `writer`.
    /// CSV always carries the header line, even with no rows.
    pub fn write<W: Write>(&self, format: Format, mut writer: W) -> anyhow::Result<()> {
        match format {
            Format::Csv => {
                let mut csv = csv::WriterBuilder::new()
                    .has_headers(false)
                    .from_writer(writer);
                csv.write_record(HEADER)?;
                for row in self.0 {
                    csv.serialize(row)?;
                }
                csv.flush()?;
            }
            Format::Json => {
                serde_json::to_writer_pretty(&mut writer, self.0)?;
                writeln!(writer)?;
                writer.flush()?;
            }
        }
        Ok(())
    }
    /// Encodes every row into a fresh file at `path`.
    pub fn save(&self, format: Format, path: &Path) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)
            .map_err(|e| anyhow::anyhow!("create {}: {}", path.display(), e))?;
        self.write(format, std::io::BufWriter::new(file))?;
        log::info!("exported {} rows to {}", self.0.len(), path.display());
        Ok(())
    }
    /// Encodes every row into a string.
    pub fn render(&self, format: Format) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        self.write(format, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
