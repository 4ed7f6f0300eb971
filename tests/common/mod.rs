//! Calendar tree builders shared by the integration tests.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Build a calendar root from `(directory, subdirectories)` pairs.
pub fn calendar_root(puzzles: &[(&str, &[&str])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (dirname, subdirs) in puzzles {
        fs::create_dir_all(tmp.path().join(dirname)).unwrap();
        for sub in *subdirs {
            fs::create_dir_all(tmp.path().join(dirname).join(sub)).unwrap();
        }
    }
    tmp
}

/// Copy `fixtures/calendar/` to a temp directory and return it.
pub fn fixture_calendar() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/calendar");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}
