//! Working directories and inbox discovery

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// Extension of input files, compared case-insensitively
pub const EDI_EXTENSION: &str = "edi";

/// The four directories a batch run works with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directories {
    /// Where input files are picked up
    pub inbox: PathBuf,
    /// Where generated XML is written
    pub outbox: PathBuf,
    /// Where converted inputs are moved
    pub archive: PathBuf,
    /// Where failed inputs are moved
    pub error: PathBuf,
}

impl Directories {
    pub fn new(
        inbox: impl Into<PathBuf>,
        outbox: impl Into<PathBuf>,
        archive: impl Into<PathBuf>,
        error: impl Into<PathBuf>,
    ) -> Self {
        Self {
            inbox: inbox.into(),
            outbox: outbox.into(),
            archive: archive.into(),
            error: error.into(),
        }
    }

    /// Check that the inbox is an existing directory
    pub fn validate(&self) -> Result<()> {
        if self.inbox.is_dir() {
            Ok(())
        } else {
            Err(Error::directory(&self.inbox, "inbox is not a directory"))
        }
    }

    /// Create outbox, archive and error directories when missing
    pub fn ensure_output_dirs(&self) -> Result<()> {
        for dir in [&self.outbox, &self.archive, &self.error] {
            fs::create_dir_all(dir).map_err(|e| Error::directory(dir, e.to_string()))?;
        }
        Ok(())
    }
}

/// Whether a path carries the `.edi` extension in any letter case
pub fn is_edi_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(EDI_EXTENSION))
}

/// List EDI files directly inside `inbox`, sorted by file name.
///
/// Directories are skipped; anything else with a matching name is listed,
/// so an entry that vanishes before it is read surfaces as a read failure.
pub fn discover_inputs(inbox: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(inbox).map_err(|e| Error::directory(inbox, e.to_string()))?;

    let mut inputs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::directory(inbox, e.to_string()))?;
        let path = entry.path();
        if !path.is_dir() && is_edi_file(&path) {
            inputs.push(path);
        }
    }
    inputs.sort();

    debug!(inbox = %inbox.display(), count = inputs.len(), "Discovered EDI inputs");
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_match_ignores_case() {
        assert!(is_edi_file(Path::new("/in/order.edi")));
        assert!(is_edi_file(Path::new("/in/order.EDI")));
        assert!(is_edi_file(Path::new("/in/order.Edi")));
        assert!(!is_edi_file(Path::new("/in/order.edifact")));
        assert!(!is_edi_file(Path::new("/in/order.xml")));
        assert!(!is_edi_file(Path::new("/in/edi")));
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.EDI", "a.edi", "c.txt", "d.xml"] {
            fs::write(dir.path().join(name), "BGM+220+X'").unwrap();
        }
        fs::create_dir(dir.path().join("nested.edi")).unwrap();

        let inputs = discover_inputs(dir.path()).unwrap();
        let names: Vec<_> = inputs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.edi", "b.EDI"]);
    }

    #[test]
    fn test_discover_missing_inbox() {
        let dir = tempfile::tempdir().unwrap();
        let result = discover_inputs(&dir.path().join("missing"));
        assert!(matches!(result, Err(Error::Directory { .. })));
    }

    #[test]
    fn test_validate_and_create_dirs() {
        let root = tempfile::tempdir().unwrap();
        let dirs = Directories::new(
            root.path().join("inbox"),
            root.path().join("outbox"),
            root.path().join("archive"),
            root.path().join("error"),
        );
        assert!(dirs.validate().is_err());

        fs::create_dir(&dirs.inbox).unwrap();
        dirs.validate().unwrap();

        dirs.ensure_output_dirs().unwrap();
        assert!(dirs.outbox.is_dir());
        assert!(dirs.archive.is_dir());
        assert!(dirs.error.is_dir());
    }
}
