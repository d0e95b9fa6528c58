//! Report presentation and export
//!
//! Aligned-table rendering for the terminal and a timestamped CSV export.
//! Both consume the assembled report as-is; ordering is whatever the
//! resolver emitted.

use crate::error::Result;
use crate::report::{ServiceKind, SizedEntry};
use chrono::Local;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const CSV_HEADER: &str = "Server,Volume Name,Size,Bucket,Folder (UUID)";

/// Render the report as an aligned table
pub fn render_table(out: &mut impl Write, service: ServiceKind, rows: &[SizedEntry]) -> io::Result<()> {
    let size_width = rows
        .iter()
        .map(|r| r.size.len())
        .chain(std::iter::once("Size".len()))
        .max()
        .unwrap_or(4);
    let name_width = rows
        .iter()
        .map(|r| r.volume_name.len())
        .chain(std::iter::once("Volume Name".len()))
        .max()
        .unwrap_or(11);

    writeln!(out, "\nCloud storage size for {service}:\n")?;
    writeln!(
        out,
        "    {:<size_width$}  {:<name_width$}  UUID",
        "Size", "Volume Name"
    )?;
    writeln!(
        out,
        "    {:<size_width$}  {:<name_width$}  ----",
        "-".repeat(size_width),
        "-".repeat(name_width)
    )?;
    for (i, row) in rows.iter().enumerate() {
        writeln!(
            out,
            "{:>3} {:<size_width$}  {:<name_width$}  {}",
            i + 1,
            row.size,
            row.volume_name,
            row.cloud_object_id
        )?;
    }
    writeln!(out)?;
    Ok(())
}

/// Print the report table to stdout
pub fn print_table(service: ServiceKind, rows: &[SizedEntry]) -> io::Result<()> {
    let stdout = io::stdout();
    render_table(&mut stdout.lock(), service, rows)
}

/// Write the report to `{cluster}-{service}-{timestamp}.csv` under `dir`
/// and return the path
pub fn write_csv(
    dir: &Path,
    cluster: &str,
    service: ServiceKind,
    rows: &[SizedEntry],
) -> Result<PathBuf> {
    let timestamp = Local::now().format("%m-%d-%Y-%H%M%S");
    let path = dir.join(format!("{cluster}-{service}-{timestamp}.csv"));

    let mut file = File::create(&path)?;
    writeln!(file, "{CSV_HEADER}")?;
    for row in rows {
        writeln!(
            file,
            "{},{},{},{},{}",
            row.server, row.volume_name, row.size, row.container, row.cloud_object_id
        )?;
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<SizedEntry> {
        vec![
            SizedEntry {
                server: "svm_east1".into(),
                volume_name: "vol_a".into(),
                size: "1.5KiB".into(),
                size_bytes: 1536,
                container: "netapp-backup-east".into(),
                cloud_object_id: "d1".into(),
            },
            SizedEntry {
                server: "svm_east1".into(),
                volume_name: "vol_longer_name".into(),
                size: "12.0GiB".into(),
                size_bytes: 12 * 1024_u64.pow(3),
                container: "netapp-backup-east".into(),
                cloud_object_id: "d2".into(),
            },
        ]
    }

    #[test]
    fn test_render_table_lists_every_row() {
        let mut buf = Vec::new();
        render_table(&mut buf, ServiceKind::Backup, &sample_rows()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Cloud storage size for backup:"));
        assert!(text.contains("1.5KiB"));
        assert!(text.contains("vol_longer_name"));
        assert!(text.contains("d2"));
    }

    #[test]
    fn test_write_csv_schema_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "cluster1", ServiceKind::Tiering, &sample_rows()).unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("cluster1-tiering-"));
        assert!(name.ends_with(".csv"));

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(
            lines.next(),
            Some("svm_east1,vol_a,1.5KiB,netapp-backup-east,d1")
        );
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_empty_report_renders() {
        let mut buf = Vec::new();
        render_table(&mut buf, ServiceKind::Tiering, &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Cloud storage size for tiering:"));
    }
}
