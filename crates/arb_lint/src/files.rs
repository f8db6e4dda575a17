use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

pub fn is_arb_file(path: &Path) -> bool {
    path.extension().is_some_and(|extension| extension == "arb")
}

/// Expand `paths` into the list of files to check. Files are used as given, while directories are
/// searched recursively for `.arb` files, respecting ignore files. The result is sorted and free of
/// duplicates.
pub fn find_arb_files<P: AsRef<Path>>(paths: &[P]) -> Vec<PathBuf> {
    let mut files = vec![];
    for path in paths {
        let path = path.as_ref();
        if !path.is_dir() {
            files.push(path.to_path_buf());
            continue;
        }

        for item in WalkBuilder::new(path).build() {
            let item = match item {
                Ok(item) => item,
                Err(error) => {
                    tracing::warn!("Skipping unreadable entry: {error}");
                    continue;
                }
            };
            if item.file_type().is_some_and(|file_type| file_type.is_file())
                && is_arb_file(item.path())
            {
                files.push(item.into_path());
            }
        }
    }
    files.sort();
    files.dedup();
    files
}
