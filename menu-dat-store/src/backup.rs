use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Copy `path` into `backup_dir` as `<stem>_<YYYYMMDD-HHMMSS>.<ext>`.
///
/// The directory is created if needed. An existing backup with the same
/// timestamp is never overwritten; a numeric suffix is added instead.
pub fn backup_file(path: &Path, backup_dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(backup_dir)?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("container");
    let ext = path.extension().and_then(|e| e.to_str());
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();

    let file_name = |suffix: &str| match ext {
        Some(ext) => format!("{stem}_{timestamp}{suffix}.{ext}"),
        None => format!("{stem}_{timestamp}{suffix}"),
    };

    let mut dest = backup_dir.join(file_name(""));
    let mut n = 1;
    while dest.exists() {
        dest = backup_dir.join(file_name(&format!("-{n}")));
        n += 1;
    }

    fs::copy(path, &dest)?;
    Ok(dest)
}
