//! Textual exchange format reader (spec §6): the format collaborators and
//! remote adapters emit into the core, grounded on
//! `original_source/cgr/src/csv.c`'s `load_contacts_csv` — trim, skip
//! comments/blank lines, skip malformed lines silently.

use std::fs;
use std::path::Path;

use crate::contact::{Contact, ContactSet};
use crate::error::LoadError;

/// Parses a single trimmed, non-comment line into a [`Contact`].
///
/// Nine comma-separated fields in order:
/// `id,from,to,t_start,t_end,owlt,rate_bps,setup_s,residual_bytes`.
/// Returns `None` if the line does not split into exactly nine fields or
/// any field fails to parse — callers skip such lines silently (spec §6).
fn parse_line(line: &str) -> Option<Contact> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 9 {
        return None;
    }

    Some(Contact {
        id: fields[0].parse().ok()?,
        from: fields[1].parse().ok()?,
        to: fields[2].parse().ok()?,
        t_start: fields[3].parse().ok()?,
        t_end: fields[4].parse().ok()?,
        owlt: fields[5].parse().ok()?,
        rate_bps: fields[6].parse().ok()?,
        setup_s: fields[7].parse().ok()?,
        residual_bytes: fields[8].parse().ok()?,
    })
}

/// Loads a contact set from the textual exchange format at `path`.
///
/// Blank lines and lines starting with `#` (after trimming) are skipped.
/// Lines that fail to parse all nine fields are skipped silently, matching
/// `load_contacts_csv`'s `ok != 9` policy — a corrupt line is never a
/// reason to abort the whole load.
pub fn load_contacts<P: AsRef<Path>>(path: P) -> Result<ContactSet, LoadError> {
    let text = fs::read_to_string(path)?;
    let mut contacts = Vec::new();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(contact) = parse_line(line) {
            contacts.push(contact);
        }
    }

    Ok(ContactSet::new(contacts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_line() {
        let c = parse_line("1, 10, 20, 0.0, 100.0, 1.5, 1e6, 0.0, 1e8").unwrap();
        assert_eq!(c.id, 1);
        assert_eq!(c.from, 10);
        assert_eq!(c.to, 20);
        assert_eq!(c.owlt, 1.5);
        assert_eq!(c.rate_bps, 1e6);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(parse_line("1,10,20,0.0,100.0").is_none());
    }

    #[test]
    fn rejects_unparsable_field() {
        assert!(parse_line("1,10,20,0.0,100.0,1.0,1e6,0.0,notanumber").is_none());
    }

    #[test]
    fn load_skips_comments_blanks_and_garbage() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("cgr_loader_test_{}.csv", std::process::id()));
        fs::write(
            &path,
            "# comment\n\n1,10,20,0.0,100.0,1.0,1e6,0.0,1e8\ngarbage,line\n2,20,30,0.0,100.0,1.0,1e6,0.0,1e8\n",
        )
        .unwrap();

        let set = load_contacts(&path).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[0].id, 1);
        assert_eq!(set.as_slice()[1].id, 2);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_contacts("/nonexistent/path/does/not/exist.csv");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
