//! Shared test utilities for the simple-landing test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let page = load_page(tmp.path()).unwrap();
//!
//! let features = find_section(&page, "section--1");
//! assert_eq!(features.images.len(), 3);
//!
//! let mut session = sample_session();
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::content::{Page, Section, parse_page};
use crate::session::Session;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// The fixture page, parsed straight from the source tree.
pub fn sample_page() -> Page {
    parse_page(include_str!("../fixtures/content/page.toml")).unwrap()
}

/// A fresh session over the fixture page with stock config.
pub fn sample_session() -> Session {
    Session::new(&sample_page(), &SiteConfig::default()).unwrap()
}

// =========================================================================
// Page lookups (panic with a clear message on miss)
// =========================================================================

/// Find a section by id. Panics if not found.
pub fn find_section<'a>(page: &'a Page, id: &str) -> &'a Section {
    page.sections.iter().find(|s| s.id == id).unwrap_or_else(|| {
        let ids: Vec<&str> = page.sections.iter().map(|s| s.id.as_str()).collect();
        panic!("section '{id}' not found. Available: {ids:?}")
    })
}
