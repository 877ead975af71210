// src/scan.rs
// =============================================================================
// Turns the paths given on the command line into a list of PDF files.
//
// - Directory: walked recursively, every file ending in `.pdf` is collected
//   (case-sensitive, so `REPORT.PDF` is not picked up)
// - File ending in `.pdf`: taken as-is, even if it doesn't exist yet; opening
//   it later reports a proper parse error
// - Anything else: skipped with a notice
// =============================================================================

use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

pub fn collect_pdf_paths(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut pdf_paths = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut found = collect_pdfs_in_dir(input);
            debug!("{} PDF(s) below {}", found.len(), input.display());
            pdf_paths.append(&mut found);
        } else if is_pdf(input) {
            pdf_paths.push(input.clone());
        } else {
            warn!("Ignoring non-PDF input {}", input.display());
            eprintln!("Specified file {} is not a PDF. Skipping.", input.display());
        }
    }

    pdf_paths
}

// Sorted so runs over the same tree always print in the same order.
// An entry we can't read (permissions, a file vanishing mid-walk) is logged
// and skipped; the rest of the tree is still collected.
fn collect_pdfs_in_dir(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry below {}: {}", dir.display(), e);
                continue;
            }
        };
        if is_pdf_file(&entry) {
            found.push(entry.into_path());
        }
    }
    found.sort();
    found
}

// Symlinked directories are not descended into, but a symlink that
// resolves to a regular file counts like the file itself
fn is_pdf_file(entry: &DirEntry) -> bool {
    let is_file = entry.file_type().is_file()
        || (entry.path_is_symlink() && entry.path().is_file());
    is_file && is_pdf(entry.path())
}

fn is_pdf(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_directory_is_walked_recursively() {
        let temp_dir = TempDir::new().unwrap();
        let subdir = temp_dir.path().join("chapters");
        fs::create_dir(&subdir).unwrap();

        let top = temp_dir.path().join("manual.pdf");
        let nested = subdir.join("intro.pdf");
        File::create(&top).unwrap();
        File::create(&nested).unwrap();
        File::create(temp_dir.path().join("notes.txt")).unwrap();

        let mut expected = vec![top, nested];
        expected.sort();
        assert_eq!(
            collect_pdf_paths(&[temp_dir.path().to_path_buf()]),
            expected
        );
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("LOUD.PDF")).unwrap();

        assert!(collect_pdf_paths(&[temp_dir.path().to_path_buf()]).is_empty());
    }

    #[test]
    fn test_files_are_kept_in_argument_order() {
        let inputs = vec![
            PathBuf::from("b.pdf"),
            PathBuf::from("readme.md"),
            PathBuf::from("a.pdf"),
        ];
        assert_eq!(
            collect_pdf_paths(&inputs),
            vec![PathBuf::from("b.pdf"), PathBuf::from("a.pdf")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_pdf_is_collected() {
        let target_dir = TempDir::new().unwrap();
        let real = target_dir.path().join("real.pdf");
        File::create(&real).unwrap();

        let temp_dir = TempDir::new().unwrap();
        let link = temp_dir.path().join("link.pdf");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        assert_eq!(collect_pdf_paths(&[temp_dir.path().to_path_buf()]), vec![link]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("missing.pdf"),
            temp_dir.path().join("dangling.pdf"),
        )
        .unwrap();

        assert!(collect_pdf_paths(&[temp_dir.path().to_path_buf()]).is_empty());
    }

    #[test]
    fn test_walk_error_does_not_abort_collection() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone");

        // The walk root itself fails to read; we get an empty list, not an error
        assert!(collect_pdfs_in_dir(&missing).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.pdf");
        File::create(&good).unwrap();
        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        File::create(locked.join("hidden.pdf")).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let found = collect_pdf_paths(&[temp_dir.path().to_path_buf()]);

        // Restore so TempDir can clean up
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        // hidden.pdf shows up only when running with permission-bypassing privileges
        assert!(found.contains(&good));
    }
}
