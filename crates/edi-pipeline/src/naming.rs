//! Output file naming
//!
//! Files are named `outXML_<unix seconds>.xml`, or
//! `outXML_<unix seconds>_<suffix>.xml` when several files may be written
//! within the same second. The suffix is 13 hex digits: 8 for the
//! seconds and 5 for the microseconds of the clock reading.

use std::path::{Path, PathBuf};

use chrono::Utc;

const PREFIX: &str = "outXML_";
const MICROS_PER_SECOND: u32 = 1_000_000;

/// How output names are built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingMode {
    /// Timestamp plus a unique suffix
    #[default]
    Unique,
    /// Timestamp only
    Timestamp,
}

/// Produces output paths that do not collide within a run
#[derive(Debug, Clone, Default)]
pub struct OutputNamer {
    mode: NamingMode,
    last: Option<(i64, u32)>,
}

impl OutputNamer {
    pub fn new(mode: NamingMode) -> Self {
        Self { mode, last: None }
    }

    /// Next output path in `outbox` for the current time
    pub fn next_path(&mut self, outbox: &Path) -> PathBuf {
        let now = Utc::now();
        self.path_at(outbox, now.timestamp(), now.timestamp_subsec_micros())
    }

    /// Next output path for an explicit clock reading.
    ///
    /// In unique mode the suffix never repeats within this namer and never
    /// names a file that already exists; the microsecond part is bumped
    /// until both hold.
    pub fn path_at(&mut self, outbox: &Path, secs: i64, micros: u32) -> PathBuf {
        match self.mode {
            NamingMode::Timestamp => outbox.join(format!("{PREFIX}{secs}.xml")),
            NamingMode::Unique => {
                let mut stamp = (secs, micros.min(MICROS_PER_SECOND - 1));
                if let Some(last) = self.last {
                    if stamp <= last {
                        stamp = bump(last);
                    }
                }

                let mut path = outbox.join(unique_name(secs, stamp));
                while path.exists() {
                    stamp = bump(stamp);
                    path = outbox.join(unique_name(secs, stamp));
                }

                self.last = Some(stamp);
                path
            }
        }
    }
}

fn unique_name(secs: i64, (suffix_secs, suffix_micros): (i64, u32)) -> String {
    format!("{PREFIX}{secs}_{suffix_secs:08x}{suffix_micros:05x}.xml")
}

fn bump((secs, micros): (i64, u32)) -> (i64, u32) {
    if micros + 1 >= MICROS_PER_SECOND {
        (secs + 1, 0)
    } else {
        (secs, micros + 1)
    }
}
