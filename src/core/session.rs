use std::collections::HashMap;
use std::path::Path;

use crate::core::diff::first_diff;
use crate::core::rounder::round_floats;
use crate::domain::model::SnapshotOutcome;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{Result, SnapError};
use crate::utils::validation::{validate_extension, validate_positive_number};

/// Write-or-compare primitive shared by the session and the CLI check
/// mode. Rounding, naming and counter bookkeeping happen in the caller.
pub fn compare_or_create<S: Storage>(
    storage: &S,
    path: &str,
    content: &str,
    update: bool,
) -> Result<SnapshotOutcome> {
    // 若快照不存在（或處於更新模式）則直接寫入
    if update || !storage.exists(path) {
        let outcome = if storage.exists(path) {
            SnapshotOutcome::Updated
        } else {
            SnapshotOutcome::Created
        };
        tracing::debug!("Writing snapshot: {}", path);
        storage.write_file(path, content.as_bytes())?;
        return Ok(outcome);
    }

    let stored = storage.read_file(path)?;
    let expected = String::from_utf8(stored).map_err(|_| SnapError::ProcessingError {
        message: format!("Snapshot {} is not valid UTF-8", path),
    })?;

    if expected == content {
        tracing::debug!("Snapshot matches: {}", path);
        Ok(SnapshotOutcome::Matched)
    } else {
        let name = Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(path)
            .to_string();
        Err(SnapError::SnapshotMismatch {
            name,
            path: path.to_string(),
            diff: first_diff(&expected, content),
        })
    }
}

/// Snapshot state for one test run.
///
/// Each run owns its session; there is no process-wide state, so parallel
/// test executions with independent sessions never interfere.
pub struct SnapshotSession<S: Storage> {
    storage: S,
    update_snapshots: bool,
    digits: Option<usize>,
    snapshot_counters: HashMap<String, usize>,
}

impl<S: Storage> SnapshotSession<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            update_snapshots: false,
            digits: None,
            snapshot_counters: HashMap::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(storage: S, config: &C) -> Self {
        Self {
            storage,
            update_snapshots: config.update_snapshots(),
            digits: config.digits(),
            snapshot_counters: HashMap::new(),
        }
    }

    /// When set, snapshots are rewritten instead of compared.
    pub fn with_update(mut self, update: bool) -> Self {
        self.update_snapshots = update;
        self
    }

    /// Default significant-digit precision applied to every check.
    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = Some(digits);
        self
    }

    /// Enter a test's snapshot scope. Resets that test's counter, so the
    /// first snapshot taken through the handle is number 0 again.
    pub fn test(&mut self, test_file: &str, test_name: &str) -> TestSnapshots<'_, S> {
        let key = test_key(test_file, test_name);
        let dir = snapshot_dir(test_file);
        // 重置此測試的快照計數器
        self.snapshot_counters.insert(key.clone(), 0);
        TestSnapshots {
            session: self,
            key,
            dir,
        }
    }
}

/// Per-test handle produced by [`SnapshotSession::test`]. Snapshot files
/// are named `{test_file_stem}__{test_name}_{counter}{extension}` and
/// live in a `__snapshots__` directory next to the test file.
pub struct TestSnapshots<'a, S: Storage> {
    session: &'a mut SnapshotSession<S>,
    key: String,
    dir: String,
}

impl<S: Storage> TestSnapshots<'_, S> {
    /// Create or compare the next snapshot for this test, applying the
    /// session's default precision if one was configured.
    pub fn check(&mut self, extension: &str, content: &str) -> Result<SnapshotOutcome> {
        let digits = self.session.digits;
        self.check_impl(extension, content, digits)
    }

    /// Like [`check`](Self::check) with an explicit precision for this
    /// snapshot only.
    pub fn check_rounded(
        &mut self,
        extension: &str,
        content: &str,
        digits: usize,
    ) -> Result<SnapshotOutcome> {
        self.check_impl(extension, content, Some(digits))
    }

    /// Pretty-print a JSON value and snapshot it with a `.json` extension.
    pub fn check_json(&mut self, value: &serde_json::Value) -> Result<SnapshotOutcome> {
        let content = serde_json::to_string_pretty(value)?;
        let digits = self.session.digits;
        self.check_impl(".json", &content, digits)
    }

    fn check_impl(
        &mut self,
        extension: &str,
        content: &str,
        digits: Option<usize>,
    ) -> Result<SnapshotOutcome> {
        validate_extension("extension", extension)?;

        // 先套用捨入，再寫入或比較
        let content = match digits {
            Some(digits) => {
                validate_positive_number("digits", digits, 1)?;
                round_floats(content, digits)
            }
            None => content.to_string(),
        };

        let counter = self
            .session
            .snapshot_counters
            .entry(self.key.clone())
            .or_insert(0);
        let file_name = format!("{}_{}{}", self.key, counter, extension);
        *counter += 1;

        let path = format!("{}/{}", self.dir, file_name);
        compare_or_create(
            &self.session.storage,
            &path,
            &content,
            self.session.update_snapshots,
        )
    }
}

fn test_key(test_file: &str, test_name: &str) -> String {
    let stem = Path::new(test_file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");
    format!("{}__{}", stem, test_name)
}

fn snapshot_dir(test_file: &str) -> String {
    let parent = Path::new(test_file)
        .parent()
        .and_then(|p| p.to_str())
        .unwrap_or("");
    if parent.is_empty() {
        "__snapshots__".to_string()
    } else {
        format!("{}/__snapshots__", parent)
    }
}
