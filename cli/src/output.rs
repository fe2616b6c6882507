//! All-or-nothing artifact writes.
//!
//! Every artifact is first written in full to a temporary file in its
//! target directory. Only once all of them are staged are they renamed
//! into place. If a rename fails part way, the artifacts already
//! committed in this run are put back as they were (restored, or removed
//! if they did not exist) so the build never sees a header from one run
//! next to a table from another.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, error, warn};
use tempfile::NamedTempFile;

/// One file to write.
#[derive(Clone, Copy, Debug)]
pub struct Artifact<'a> {
    pub path: &'a Path,
    pub contents: &'a str,
}

/// Returns the number of files actually replaced. Files whose contents
/// already match are left untouched so their timestamps don't trigger
/// rebuilds.
pub fn write_all_or_nothing(artifacts: &[Artifact<'_>]) -> Result<usize> {
    let mut staged = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let previous = fs::read(artifact.path).ok();
        if previous.as_deref() == Some(artifact.contents.as_bytes()) {
            debug!("{} is up to date", artifact.path.display());
            continue;
        }
        let tmp = stage(artifact.path, artifact.contents.as_bytes())
            .with_context(|| format!("cannot write {}", artifact.path.display()))?;
        staged.push((tmp, artifact.path, previous));
    }

    let mut committed: Vec<(&Path, Option<Vec<u8>>)> = Vec::with_capacity(staged.len());
    for (tmp, path, previous) in staged {
        if let Err(e) = tmp.persist(path) {
            roll_back(&committed);
            return Err(e.error).with_context(|| format!("cannot replace {}", path.display()));
        }
        debug!("wrote {}", path.display());
        committed.push((path, previous));
    }
    Ok(committed.len())
}

/// Put every committed path back to its state before this run.
fn roll_back(committed: &[(&Path, Option<Vec<u8>>)]) {
    for (path, previous) in committed {
        let restored = match previous {
            Some(bytes) => stage(path, bytes)
                .and_then(|tmp| tmp.persist(path).map(drop).map_err(|e| e.error.into())),
            None => fs::remove_file(path).map_err(Into::into),
        };
        match restored {
            Ok(()) => warn!("rolled back {}", path.display()),
            Err(e) => error!("cannot roll back {} after failed write: {e:#}", path.display()),
        }
    }
}

fn stage(path: &Path, contents: &[u8]) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    Ok(tmp)
}
