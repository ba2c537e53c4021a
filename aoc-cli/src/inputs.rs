//! File registry for locally stored puzzle inputs
//!
//! Input files live flat in one directory and are named `NN-<suffix>`, where
//! `NN` is the two-digit day. A name of the form `..-input` is the day's
//! canonical input; every other `NN-*` file is a test input.

use crate::error::InputError;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

/// `NN-anything`, capturing the day
static DAY_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d\d)-").unwrap());

/// Any two characters, a dash, then `input`; anchored at the start only
static CANONICAL_INPUT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^..-input").unwrap());

/// Input files of a single day
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFiles {
    /// The canonical input file name, if any
    pub input: Option<String>,
    /// Test input file names
    pub tests: BTreeSet<String>,
}

fn day_of(name: &str) -> Option<u8> {
    DAY_PREFIX.captures(name)?.get(1)?.as_str().parse().ok()
}

fn is_canonical(name: &str) -> bool {
    CANONICAL_INPUT.is_match(name)
}

/// Mapping from day to its input files, built by scanning one directory
///
/// Days without any matching file have no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRegistry {
    dir: PathBuf,
    days: BTreeMap<u8, InputFiles>,
}

impl FileRegistry {
    /// Scan `dir` (non-recursively) for input files
    ///
    /// # Returns
    /// * `Ok(FileRegistry)` - Every matching regular file recorded
    /// * `Err(InputError::ReadDir)` - The directory could not be listed
    /// * `Err(InputError::DuplicateInput)` - A day has two canonical inputs
    pub fn scan(dir: impl Into<PathBuf>) -> Result<Self, InputError> {
        let dir = dir.into();
        let read_dir_err = |source| InputError::ReadDir {
            path: dir.clone(),
            source,
        };

        // Sorted so duplicate reports and logs are stable
        let mut names = fs::read_dir(&dir)
            .map_err(read_dir_err)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_dir_err)?
            .into_iter()
            .filter(|path| path.is_file())
            .filter_map(|path| match path.file_name()?.to_str() {
                Some(name) => Some(name.to_string()),
                None => {
                    debug!(path = %path.display(), "skipping non UTF-8 file name");
                    None
                }
            })
            .collect::<Vec<_>>();
        names.sort();

        let mut days: BTreeMap<u8, InputFiles> = BTreeMap::new();

        for name in names {
            let Some(day) = day_of(&name) else {
                debug!(file = %name, "ignoring file without a day prefix");
                continue;
            };
            let files = days.entry(day).or_default();

            if is_canonical(&name) {
                if let Some(first) = files.input.take() {
                    return Err(InputError::DuplicateInput {
                        day,
                        first,
                        second: name,
                    });
                }
                files.input = Some(name);
            } else {
                files.tests.insert(name);
            }
        }

        debug!(dir = %dir.display(), days = days.len(), "scanned input files");
        Ok(Self { dir, days })
    }

    /// Input files for a day, or None if the day has no files at all
    pub fn get(&self, day: u8) -> Option<&InputFiles> {
        self.days.get(&day)
    }

    /// Days with at least one input file, ascending
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.days.keys().copied()
    }

    /// The scanned directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of a file in this registry's directory
    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }
}
