//! Index page sources and the order they are probed in

use std::path::{Path, PathBuf};

/// Markup dialect of an index page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Markdown,
    Xml,
}

impl Format {
    /// File extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            Format::Markdown => "md",
            Format::Xml => "xml",
        }
    }

    /// `generation` value recorded for the page in the guide definition
    pub fn generation(self) -> &'static str {
        match self {
            Format::Markdown => "markdown",
            Format::Xml => "html",
        }
    }
}

/// Folder under `input/` that holds page sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    PageContent,
    Pages,
}

impl Location {
    pub fn dir_name(self) -> &'static str {
        match self {
            Location::PageContent => "pagecontent",
            Location::Pages => "pages",
        }
    }

    /// `input/<dir>`
    pub fn relative_dir(self) -> PathBuf {
        Path::new("input").join(self.dir_name())
    }
}

/// One possible index page file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub format: Format,
    pub location: Location,
}

impl Candidate {
    pub const fn new(format: Format, location: Location) -> Self {
        Self { format, location }
    }

    /// `index.md` or `index.xml`
    pub fn file_name(&self) -> String {
        format!("index.{}", self.format.extension())
    }

    /// Path relative to an ig-data or output root, e.g. `input/pages/index.xml`
    pub fn relative_path(&self) -> PathBuf {
        self.location.relative_dir().join(self.file_name())
    }
}

/// Candidates in precedence order. The first one present on disk is used.
pub const CANDIDATES: [Candidate; 4] = [
    Candidate::new(Format::Markdown, Location::PageContent),
    Candidate::new(Format::Xml, Location::PageContent),
    Candidate::new(Format::Markdown, Location::Pages),
    Candidate::new(Format::Xml, Location::Pages),
];

/// Where inline configured content is written
pub const INLINE_CANDIDATE: Candidate = Candidate::new(Format::Markdown, Location::PageContent);

/// An index page file found in the user's ig-data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundFile {
    pub path: PathBuf,
    pub candidate: Candidate,
}

/// Find the highest-precedence index file under `ig_data_dir`
pub fn discover(ig_data_dir: Option<&Path>) -> Option<FoundFile> {
    let base = ig_data_dir?;
    CANDIDATES.iter().find_map(|candidate| {
        let path = base.join(candidate.relative_path());
        path.is_file().then(|| FoundFile {
            path,
            candidate: *candidate,
        })
    })
}

/// The content chosen for the index page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// `indexPageContent` from the configuration file
    Inline(String),
    /// A file from the ig-data directory
    File(FoundFile),
}

impl ContentSource {
    pub fn candidate(&self) -> Candidate {
        match self {
            ContentSource::Inline(_) => INLINE_CANDIDATE,
            ContentSource::File(found) => found.candidate,
        }
    }

    pub fn format(&self) -> Format {
        self.candidate().format
    }
}

/// Outcome of applying the precedence policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub source: ContentSource,
    /// On-disk file ignored because inline content was configured
    pub superseded: Option<FoundFile>,
}

/// Pick between inline content and a discovered file. Inline always wins.
pub fn resolve(inline: Option<&str>, on_disk: Option<FoundFile>) -> Option<Resolved> {
    match (inline, on_disk) {
        (Some(text), superseded) => Some(Resolved {
            source: ContentSource::Inline(text.to_string()),
            superseded,
        }),
        (None, Some(found)) => Some(Resolved {
            source: ContentSource::File(found),
            superseded: None,
        }),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(base: &Path, candidate: Candidate) -> PathBuf {
        let path = base.join(candidate.relative_path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "content").unwrap();
        path
    }

    #[test]
    fn test_format_mappings() {
        assert_eq!(Format::Markdown.extension(), "md");
        assert_eq!(Format::Xml.extension(), "xml");
        assert_eq!(Format::Markdown.generation(), "markdown");
        assert_eq!(Format::Xml.generation(), "html");
    }

    #[test]
    fn test_relative_paths() {
        assert_eq!(
            CANDIDATES[0].relative_path(),
            Path::new("input").join("pagecontent").join("index.md")
        );
        assert_eq!(
            CANDIDATES[3].relative_path(),
            Path::new("input").join("pages").join("index.xml")
        );
    }

    #[test]
    fn test_discover_without_base() {
        assert_eq!(discover(None), None);
    }

    #[test]
    fn test_discover_empty_base() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(discover(Some(dir.path())), None);
    }

    #[test]
    fn test_discover_each_candidate_alone() {
        for candidate in CANDIDATES {
            let dir = tempfile::tempdir().unwrap();
            let path = touch(dir.path(), candidate);
            let found = discover(Some(dir.path())).unwrap();
            assert_eq!(found.candidate, candidate);
            assert_eq!(found.path, path);
        }
    }

    #[test]
    fn test_discover_precedence() {
        let dir = tempfile::tempdir().unwrap();
        // Add in reverse order so the result never depends on creation order
        for candidate in CANDIDATES.iter().rev() {
            touch(dir.path(), *candidate);
            let found = discover(Some(dir.path())).unwrap();
            assert_eq!(found.candidate, *candidate);
        }
    }

    #[test]
    fn test_pagecontent_beats_pages_for_same_format() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), Candidate::new(Format::Xml, Location::Pages));
        touch(dir.path(), Candidate::new(Format::Xml, Location::PageContent));
        let found = discover(Some(dir.path())).unwrap();
        assert_eq!(found.candidate.location, Location::PageContent);
    }

    #[test]
    fn test_directory_named_like_candidate_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(CANDIDATES[0].relative_path())).unwrap();
        assert_eq!(discover(Some(dir.path())), None);
    }

    #[test]
    fn test_resolve_policy() {
        let found = FoundFile {
            path: PathBuf::from("ig-data/input/pages/index.xml"),
            candidate: CANDIDATES[3],
        };

        assert_eq!(resolve(None, None), None);

        let file_only = resolve(None, Some(found.clone())).unwrap();
        assert_eq!(file_only.source, ContentSource::File(found.clone()));
        assert_eq!(file_only.source.format(), Format::Xml);
        assert!(file_only.superseded.is_none());

        let inline_only = resolve(Some("Home"), None).unwrap();
        assert_eq!(inline_only.source.candidate(), INLINE_CANDIDATE);
        assert!(inline_only.superseded.is_none());

        let both = resolve(Some("Home"), Some(found.clone())).unwrap();
        assert_eq!(both.source, ContentSource::Inline("Home".to_string()));
        assert_eq!(both.superseded, Some(found));
    }
}
