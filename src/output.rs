//! Output formatting and persistence for processed sessions.
//!
//! Supports the ShotPattern CSV format plus pretty and JSON club summaries.

use csv::{Writer, WriterBuilder};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

use crate::analyzers::types::ClubSummary;
use crate::error::{Result, ShotError};
use crate::shot::ProcessedShot;

/// Header row of the ShotPattern CSV format.
pub const SHOT_PATTERN_HEADER: [&str; 5] = ["Club", "Type", "Target", "Total", "Side"];

/// Suffix that replaces the input extension when deriving the output path.
pub const OUTPUT_SUFFIX: &str = "_processed.csv";

/// A destination format for processed shots.
pub trait ShotWriter {
    /// Writes `shots` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`ShotError::EmptyOutput`] when `shots` is empty.
    fn write(&self, path: &Path, shots: &[ProcessedShot]) -> Result<()>;
}

/// Writes `Club,Type,Target,Total,Side` rows with two-decimal numbers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShotPatternWriter;

impl ShotWriter for ShotPatternWriter {
    #[tracing::instrument(
        skip(self, path, shots),
        fields(path = %path.display(), shots = shots.len())
    )]
    fn write(&self, path: &Path, shots: &[ProcessedShot]) -> Result<()> {
        if shots.is_empty() {
            return Err(ShotError::EmptyOutput);
        }

        // Rows are staged next to the destination and renamed into place once
        // complete, so a failed write never leaves a partial file behind.
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut staged = staging_file(dir, path)?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(staged.as_file_mut());
        write_records(&mut writer, shots).map_err(|source| ShotError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        writer
            .flush()
            .map_err(|e| ShotError::io("write", path, e))?;
        drop(writer);

        staged
            .persist(path)
            .map_err(|e| ShotError::io("replace", path, e.error))?;

        debug!("ShotPattern file written");
        Ok(())
    }
}

/// Creates the staging file with the mode a plain create would give the
/// destination: the existing file's mode, else 0666 less the umask.
fn staging_file(dir: &Path, path: &Path) -> Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let staged = builder
        .tempfile_in(dir)
        .map_err(|e| ShotError::io("create", dir, e))?;

    if let Ok(existing) = fs::metadata(path) {
        staged
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| ShotError::io("set permissions on", path, e))?;
    }
    Ok(staged)
}

fn write_records<W: Write>(writer: &mut Writer<W>, shots: &[ProcessedShot]) -> csv::Result<()> {
    writer.write_record(SHOT_PATTERN_HEADER)?;
    for shot in shots {
        let target = format!("{:.2}", shot.target);
        let total = format!("{:.2}", shot.total);
        let side = format!("{:.2}", shot.side);
        writer.write_record([
            shot.club.as_str(),
            shot.shot_type.as_str(),
            target.as_str(),
            total.as_str(),
            side.as_str(),
        ])?;
    }
    Ok(())
}

/// Derives the output path by swapping the input's extension for [`OUTPUT_SUFFIX`].
///
/// `rounds/mlm2pro.csv` becomes `rounds/mlm2pro_processed.csv`.
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut name = input.with_extension("").into_os_string();
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Logs one line per club.
pub fn print_pretty(summaries: &[ClubSummary]) {
    for s in summaries {
        info!(
            club = %s.club,
            shot_type = %s.shot_type,
            shots = s.shots,
            target = %format!("{:.2}", s.target),
            "Club target"
        );
    }
}

/// Logs the club summaries as pretty-printed JSON.
pub fn print_json(summaries: &[ClubSummary]) -> serde_json::Result<()> {
    info!("{}", serde_json::to_string_pretty(summaries)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shot::ShotType;
    use tempfile::TempDir;

    fn sample_shots() -> Vec<ProcessedShot> {
        let mut dr = ProcessedShot::new("Dr", ShotType::Tee, 260.0, 5.0);
        dr.target = 250.0;
        let mut iron = ProcessedShot::new("7i", ShotType::Approach, 155.0, -2.0);
        iron.target = 150.0;
        vec![dr, iron]
    }

    #[test]
    fn test_write_shot_pattern() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session_processed.csv");

        ShotPatternWriter.write(&path, &sample_shots()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Club,Type,Target,Total,Side\n\
             Dr,Tee,250.00,260.00,5.00\n\
             7i,Approach,150.00,155.00,-2.00\n"
        );
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale contents\n").unwrap();

        ShotPatternWriter.write(&path, &sample_shots()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Club,Type,Target,Total,Side\n"));
        assert!(!content.contains("stale"));
    }

    #[cfg(unix)]
    #[test]
    fn test_written_file_mode_matches_plain_create() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let plain = dir.path().join("plain.csv");
        fs::write(&plain, "x\n").unwrap();
        let path = dir.path().join("session_processed.csv");

        ShotPatternWriter.write(&path, &sample_shots()).unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&plain));
    }

    #[cfg(unix)]
    #[test]
    fn test_replacing_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale contents\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        ShotPatternWriter.write(&path, &sample_shots()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[test]
    fn test_two_decimal_formatting() {
        let mut shot = ProcessedShot::new("Pw", ShotType::Approach, 5.0, 0.123456);
        shot.target = 122.5;

        let mut buf = Vec::new();
        {
            let mut writer = WriterBuilder::new().has_headers(false).from_writer(&mut buf);
            write_records(&mut writer, &[shot]).unwrap();
            writer.flush().unwrap();
        }

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        let row = rdr.records().next().unwrap().unwrap();
        assert_eq!(
            row.iter().collect::<Vec<_>>(),
            vec!["Pw", "Approach", "122.50", "5.00", "0.12"]
        );
    }

    #[test]
    fn test_write_empty_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");

        let result = ShotPatternWriter.write(&path, &[]);
        assert!(matches!(result, Err(ShotError::EmptyOutput)));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let path = Path::new("/invalid/path/file.csv");
        let result = ShotPatternWriter.write(path, &sample_shots());
        assert!(matches!(result, Err(ShotError::Io { .. })));
    }

    #[test]
    fn test_output_path_for() {
        let cases = [
            ("mlm2pro.csv", "mlm2pro_processed.csv"),
            ("datafile", "datafile_processed.csv"),
            ("data.backup.csv", "data.backup_processed.csv"),
            ("rounds/range.csv", "rounds/range_processed.csv"),
        ];
        for (input, expected) in cases {
            assert_eq!(output_path_for(Path::new(input)), PathBuf::from(expected));
        }
    }

    #[test]
    fn test_print_summaries_do_not_panic() {
        let summaries = vec![ClubSummary {
            club: "Dr".to_string(),
            shot_type: ShotType::Tee,
            shots: 2,
            target: 255.0,
        }];
        print_pretty(&summaries);
        print_json(&summaries).unwrap();
    }
}
