// src/csv.rs
//
// CSV/TSV for JobRecord lists. Header row is always written, even for an
// empty list; quoting is the standard "quote when needed" policy.

use std::io::{self, Read, Write};

use ::csv::{ReaderBuilder, WriterBuilder};

use crate::config::consts::HEADERS;
use crate::config::options::ExportFormat;
use crate::data::JobRecord;
use crate::error::Result;

/* ---------------- Writing ---------------- */

/// Write header + one row per record to any writer.
pub fn write_records<W: Write>(w: W, records: &[JobRecord], format: ExportFormat) -> Result<()> {
    let mut out = WriterBuilder::new()
        .delimiter(format.delim())
        .has_headers(false) // header is written explicitly so empty lists still get one
        .from_writer(w);

    out.write_record(HEADERS)?;
    for rec in records {
        out.serialize(rec)?;
    }
    out.flush()?;
    Ok(())
}

/// Full export text (Copy / stdout).
pub fn to_export_string(records: &[JobRecord], format: ExportFormat) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_records(&mut buf, records, format)?;
    Ok(String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?)
}

/* ---------------- Parsing ---------------- */

/// Read an export back. Columns are matched by header name.
pub fn read_records<R: Read>(r: R, format: ExportFormat) -> Result<Vec<JobRecord>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(format.delim())
        .has_headers(true)
        .from_reader(r);

    let mut out = Vec::new();
    for rec in rdr.deserialize::<JobRecord>() {
        out.push(rec?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<JobRecord> {
        vec![
            JobRecord::new("Engineer, Backend", "Acme \"Rockets\" Inc", "Pune", "Python\nand SQL")
                .with_skills(crate::config::consts::SKILLS),
            JobRecord::new("Designer", "", "Remote", "Figma")
                .with_skills(crate::config::consts::SKILLS),
        ]
    }

    #[test]
    fn header_row_always_present() {
        let s = to_export_string(&[], ExportFormat::Csv).unwrap();
        assert_eq!(s, "title,company,location,description,skills\n");

        let s = to_export_string(&[], ExportFormat::Tsv).unwrap();
        assert_eq!(s, "title\tcompany\tlocation\tdescription\tskills\n");
    }

    #[test]
    fn quotes_embedded_delimiters() {
        let s = to_export_string(&sample(), ExportFormat::Csv).unwrap();
        let mut lines = s.lines();
        assert_eq!(lines.next(), Some("title,company,location,description,skills"));
        assert!(s.contains(r#""Engineer, Backend","Acme ""Rockets"" Inc",Pune,"Python"#));
        assert!(s.contains(r#""python, sql""#));
        assert!(s.contains("Designer,,Remote,Figma,Not Mentioned\n"));
    }

    #[test]
    fn export_reads_back_unchanged() {
        let records = sample();
        for format in ExportFormat::ALL {
            let s = to_export_string(&records, format).unwrap();
            let back = read_records(s.as_bytes(), format).unwrap();
            assert_eq!(back, records);
        }
    }

    #[test]
    fn unmatched_records_read_back_without_skills() {
        let records = vec![JobRecord::new("T", "C", "L", "D")];
        let s = to_export_string(&records, ExportFormat::Csv).unwrap();
        assert_eq!(s, "title,company,location,description,skills\nT,C,L,D,\n");
        assert_eq!(read_records(s.as_bytes(), ExportFormat::Csv).unwrap(), records);
    }

    #[test]
    fn export_string_keeps_non_ascii_text() {
        let records = vec![JobRecord::new("Ingénieur", "Société Générale", "São Paulo", "日本語 OK")];
        let s = to_export_string(&records, ExportFormat::Csv).unwrap();
        assert_eq!(s, "title,company,location,description,skills\nIngénieur,Société Générale,São Paulo,日本語 OK,\n");
    }
}
