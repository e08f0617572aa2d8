use std::collections::HashSet;
use std::io::Read;

use serde::Deserialize;
use tracing::warn;

/// A certificate row accepted from the CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateImport {
    pub title: String,
    pub issuer: String,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Issuing Organization")]
    issuer: Option<String>,
    #[serde(rename = "Credential URL")]
    url: Option<String>,
}

/// Parses the uploaded CSV. Rows missing a name or issuer are skipped, as are
/// rows whose title already appeared earlier in the same file (first
/// occurrence wins). Dedup against the database happens at insert time.
pub fn parse_csv<R: Read>(reader: R) -> anyhow::Result<Vec<CertificateImport>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for record in csv_reader.deserialize::<CsvRow>() {
        let row = match record {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "skipping malformed csv row");
                continue;
            }
        };
        let title = row.name.map(|s| s.trim().to_string()).unwrap_or_default();
        let issuer = row.issuer.map(|s| s.trim().to_string()).unwrap_or_default();
        if title.is_empty() || issuer.is_empty() {
            continue;
        }
        if !seen.insert(title.clone()) {
            continue;
        }
        out.push(CertificateImport {
            title,
            issuer,
            url: row.url.filter(|u| !u.trim().is_empty()),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_complete_rows() {
        let csv = "Name,Issuing Organization,Credential URL\n\
                   Rust Basics,Acme,https://acme.test/1\n\
                   SQL Deep Dive,Initech,\n";
        let rows = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Rust Basics");
        assert_eq!(rows[0].url.as_deref(), Some("https://acme.test/1"));
        assert_eq!(rows[1].url, None);
    }

    #[test]
    fn skips_rows_missing_name_or_issuer() {
        let csv = "Name,Issuing Organization,Credential URL\n\
                   ,Acme,https://acme.test/1\n\
                   Rust Basics,,\n\
                   Kept,Acme,\n";
        let rows = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Kept");
    }

    #[test]
    fn dedups_by_title_within_file_keeping_first() {
        let csv = "Name,Issuing Organization,Credential URL\n\
                   Rust Basics,Acme,first\n\
                   Rust Basics,Initech,second\n";
        let rows = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].issuer, "Acme");
        assert_eq!(rows[0].url.as_deref(), Some("first"));
    }

    #[test]
    fn empty_file_yields_no_rows() {
        let rows = parse_csv("Name,Issuing Organization,Credential URL\n".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }
}
