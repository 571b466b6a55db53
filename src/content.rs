//! Page content loading.
//!
//! The landing page is described by a single `page.toml` in the content root.
//! Markdown is accepted in section bodies, tab bodies and slide quotes.
//!
//! ```toml
//! title = "Lumen | Banking, simplified"
//! logo = "img/logo.png"
//! hero_title = "When banking meets minimalist"
//! hero_subtitle = "A simpler banking experience for a simpler life."
//!
//! [[nav]]
//! label = "Features"
//! href = "#section--1"
//!
//! [[sections]]
//! id = "section--1"
//! description = "Features"
//! header = "Everything you need in a modern bank and more."
//! body = "..."
//!
//! [[sections.images]]
//! src = "img/digital-lazy.png"
//! data_src = "img/digital.jpg"
//! alt = "Computer"
//!
//! [[tabs]]
//! id = "1"
//! label = "Instant Transfers"
//! title = "Transfers are instant!"
//! body = "..."
//!
//! [[slides]]
//! heading = "Best financial decision ever!"
//! quote = "..."
//! author = "Aarav Lynn"
//! place = "San Francisco, USA"
//!
//! [modal]
//! title = "Open your bank account in just 5 minutes"
//! ```
//!
//! ## Validation
//!
//! - At least one slide (the slider cannot run empty)
//! - Section ids, tab ids and lazy image `data_src` values are unique
//! - Every `#fragment` nav link points at a known section

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Page has no slides")]
    NoSlides,
    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),
    #[error("Duplicate tab id: {0}")]
    DuplicateTab(String),
    #[error("Duplicate lazy image data_src: {0}")]
    DuplicateImage(String),
    #[error("Nav link {label:?} points at unknown section {href}")]
    DanglingNavLink { label: String, href: String },
}

/// Everything rendered on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Page {
    pub title: String,
    #[serde(default)]
    pub logo: Option<String>,
    pub hero_title: String,
    #[serde(default)]
    pub hero_subtitle: Option<String>,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub tabs: Vec<Tab>,
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub modal: ModalCopy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    /// `#section-id` for in-page links, anything else for external ones.
    pub href: String,
}

impl NavLink {
    pub fn is_fragment(&self) -> bool {
        self.href.starts_with('#')
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    pub id: String,
    /// Small caps label above the header.
    pub description: String,
    pub header: String,
    /// Markdown
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub images: Vec<LazyImageSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LazyImageSpec {
    /// Low-resolution placeholder shown first.
    pub src: String,
    /// Full-resolution image swapped in near the viewport.
    pub data_src: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tab {
    pub id: String,
    pub label: String,
    pub title: String,
    /// Markdown
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Slide {
    pub heading: String,
    /// Markdown
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub place: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModalCopy {
    pub title: String,
    pub button: String,
}

impl Default for ModalCopy {
    fn default() -> Self {
        Self {
            title: "Open your account".to_string(),
            button: "Next step →".to_string(),
        }
    }
}

impl Page {
    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    pub fn tab_ids(&self) -> Vec<String> {
        self.tabs.iter().map(|t| t.id.clone()).collect()
    }

    /// All lazy images across sections, as `(src, data_src)` pairs.
    pub fn lazy_images(&self) -> Vec<(String, String)> {
        self.sections
            .iter()
            .flat_map(|s| s.images.iter())
            .map(|i| (i.src.clone(), i.data_src.clone()))
            .collect()
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.slides.is_empty() {
            return Err(ContentError::NoSlides);
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(ContentError::DuplicateSection(section.id.clone()));
            }
        }
        let mut tabs = HashSet::new();
        for tab in &self.tabs {
            if !tabs.insert(tab.id.as_str()) {
                return Err(ContentError::DuplicateTab(tab.id.clone()));
            }
        }
        let mut images = HashSet::new();
        for image in self.sections.iter().flat_map(|s| s.images.iter()) {
            if !images.insert(image.data_src.as_str()) {
                return Err(ContentError::DuplicateImage(image.data_src.clone()));
            }
        }
        for link in self.nav.iter().filter(|l| l.is_fragment()) {
            if !seen.contains(&link.href[1..]) {
                return Err(ContentError::DanglingNavLink {
                    label: link.label.clone(),
                    href: link.href.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Parse and validate page content from a TOML string.
pub fn parse_page(content: &str) -> Result<Page, ContentError> {
    let page: Page = toml::from_str(content)?;
    page.validate()?;
    Ok(page)
}

/// Load `page.toml` from the content root.
pub fn load_page(root: &Path) -> Result<Page, ContentError> {
    let path = root.join("page.toml");
    let content = fs::read_to_string(&path).map_err(|source| ContentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_page(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    const MINIMAL: &str = r#"
title = "Test"
hero_title = "Hello"

[[slides]]
heading = "One"
quote = "Quote"
author = "Someone"
"#;

    #[test]
    fn minimal_page_parses() {
        let page = parse_page(MINIMAL).unwrap();
        assert_eq!(page.slides.len(), 1);
        assert!(page.sections.is_empty());
        assert_eq!(page.modal.title, "Open your account");
    }

    #[test]
    fn no_slides_rejected() {
        let toml = r#"
title = "Test"
hero_title = "Hello"
slides = []
"#;
        assert!(matches!(parse_page(toml), Err(ContentError::NoSlides)));
    }

    #[test]
    fn duplicate_section_rejected() {
        let toml = format!(
            "{MINIMAL}\n{}\n{}",
            r#"[[sections]]
id = "a"
description = "A"
header = "A"
"#,
            r#"[[sections]]
id = "a"
description = "B"
header = "B"
"#
        );
        assert!(matches!(
            parse_page(&toml),
            Err(ContentError::DuplicateSection(id)) if id == "a"
        ));
    }

    #[test]
    fn duplicate_tab_rejected() {
        let toml = format!(
            "{MINIMAL}\n{}",
            r#"[[tabs]]
id = "1"
label = "A"
title = "A"

[[tabs]]
id = "1"
label = "B"
title = "B"
"#
        );
        assert!(matches!(parse_page(&toml), Err(ContentError::DuplicateTab(_))));
    }

    #[test]
    fn duplicate_lazy_image_rejected() {
        let toml = format!(
            "{MINIMAL}\n{}",
            r#"[[sections]]
id = "a"
description = "A"
header = "A"

[[sections.images]]
src = "img/a-lazy.png"
data_src = "img/a.jpg"

[[sections]]
id = "b"
description = "B"
header = "B"

[[sections.images]]
src = "img/b-lazy.png"
data_src = "img/a.jpg"
"#
        );
        assert!(matches!(
            parse_page(&toml),
            Err(ContentError::DuplicateImage(src)) if src == "img/a.jpg"
        ));
    }

    #[test]
    fn dangling_nav_link_rejected() {
        let toml = format!(
            "{MINIMAL}\n{}",
            r##"[[nav]]
label = "Nowhere"
href = "#section--9"
"##
        );
        assert!(matches!(
            parse_page(&toml),
            Err(ContentError::DanglingNavLink { .. })
        ));
    }

    #[test]
    fn external_nav_link_allowed() {
        let toml = format!(
            "{MINIMAL}\n{}",
            r##"[[nav]]
label = "Blog"
href = "https://example.com/blog"
"##
        );
        let page = parse_page(&toml).unwrap();
        assert!(!page.nav[0].is_fragment());
    }

    #[test]
    fn unknown_key_rejected() {
        let toml = format!("{MINIMAL}\nsubtitle = \"typo\"\n");
        assert!(matches!(parse_page(&toml), Err(ContentError::Toml(_))));
    }

    #[test]
    fn missing_page_file_is_io_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(matches!(load_page(tmp.path()), Err(ContentError::Io { .. })));
    }

    #[test]
    fn fixture_page_loads() {
        let tmp = setup_fixtures();
        let page = load_page(tmp.path()).unwrap();
        assert_eq!(page.slides.len(), 4);
        assert_eq!(page.tab_ids(), vec!["1", "2", "3"]);
        let section = find_section(&page, "section--1");
        assert_eq!(section.images.len(), 3);
        assert_eq!(page.lazy_images().len(), 3);
    }
}
