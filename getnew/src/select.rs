//! Selector: list a source directory and pick the candidate a query asks for.

use tracing::{debug, instrument};

use crate::core::selector::select_candidate;
use crate::core::types::{FileCandidate, SelectionQuery};
use crate::error::GetnewError;
use crate::io::listing::list_candidates;

/// Select the `query.rank`-th newest regular file in `query.source_dir`.
#[instrument(skip_all, fields(source_dir = %query.source_dir.display(), filter = ?query.filter, rank = query.rank.get()))]
pub fn select_from_dir(query: &SelectionQuery) -> Result<FileCandidate, GetnewError> {
    let candidates = list_candidates(&query.source_dir)?;
    let selected = select_candidate(candidates, query)?;
    debug!(file = %selected.name_lossy(), "selected candidate");
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::num::NonZeroUsize;

    use super::*;
    use crate::test_support::{mixed_downloads, mtime_at, write_file_at};

    fn query(dir: &std::path::Path, filter: Option<&str>, rank: usize) -> SelectionQuery {
        SelectionQuery::new(
            dir,
            filter.map(str::to_string),
            NonZeroUsize::new(rank).expect("rank"),
        )
    }

    #[test]
    fn nth_two_picks_middle_file() {
        let dir = mixed_downloads().expect("fixture");
        let selected = select_from_dir(&query(dir.path(), None, 2)).expect("select");
        assert_eq!(selected.name_lossy(), "c.txt");
        assert_eq!(selected.modified, mtime_at(20));
    }

    #[test]
    fn filter_skips_newer_non_matching_file() {
        let dir = mixed_downloads().expect("fixture");
        let selected = select_from_dir(&query(dir.path(), Some("TXT"), 1)).expect("select");
        assert_eq!(selected.name_lossy(), "c.txt");
    }

    #[test]
    fn newer_directory_is_never_selected() {
        let dir = mixed_downloads().expect("fixture");
        fs::create_dir(dir.path().join("fresh-folder")).expect("mkdir");
        write_file_at(&dir.path().join("fresh-folder"), "inner.txt", b"x", 99).expect("write");

        let selected = select_from_dir(&query(dir.path(), None, 1)).expect("select");
        assert_eq!(selected.name_lossy(), "b.log");
    }

    #[cfg(unix)]
    #[test]
    fn broken_symlink_does_not_block_selection() {
        let dir = mixed_downloads().expect("fixture");
        std::os::unix::fs::symlink(dir.path().join("missing-target"), dir.path().join("broken.lnk"))
            .expect("symlink");

        let selected = select_from_dir(&query(dir.path(), None, 1)).expect("select");
        assert_eq!(selected.name_lossy(), "b.log");
    }

    #[test]
    fn rank_beyond_listing_is_out_of_range() {
        let dir = mixed_downloads().expect("fixture");
        let err = select_from_dir(&query(dir.path(), None, 4)).unwrap_err();
        assert_eq!(err.to_string(), "requested rank 4 but only 3 files available");
    }

    #[test]
    fn empty_directory_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = select_from_dir(&query(dir.path(), None, 1)).unwrap_err();
        assert!(matches!(err, GetnewError::NotFound { filter: None }));
    }
}
