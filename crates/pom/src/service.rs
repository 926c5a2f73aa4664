use std::fs;
use std::path::{Path, PathBuf};

use crate::document::PomDocument;
use crate::error::PomError;
use crate::locator::locate_java_version;
use crate::mutator::apply_java_version;
use crate::resolver::resolve_property;
use crate::version::normalize_java_version;

/// Facade over one build descriptor. The parsed tree is cached for the
/// lifetime of the instance; build a fresh service after every checkout.
#[derive(Debug)]
pub struct PomService {
    doc: PomDocument,
    path: Option<PathBuf>,
}

impl PomService {
    /// Build a service from either raw descriptor content or a file path.
    ///
    /// The argument is tried as content first and only treated as a path
    /// when the content parse fails structurally, so a string that is both
    /// well-formed markup and a valid path reads as content.
    ///
    /// # Errors
    /// [`PomError`] when the input is neither parseable content nor a
    /// readable, parseable file.
    pub fn load(source: &str) -> Result<Self, PomError> {
        match PomDocument::parse(source) {
            Ok(doc) => Ok(Self { doc, path: None }),
            Err(err) if err.is_structural() => Self::from_path(source),
            Err(err) => Err(err),
        }
    }

    /// Build a service from raw content. Persistence will be a no-op.
    pub fn from_content(content: &str) -> Result<Self, PomError> {
        Ok(Self {
            doc: PomDocument::parse(content)?,
            path: None,
        })
    }

    /// Build a service from a descriptor file; the path doubles as the
    /// persistence target.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PomError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PomError::Io {
            context: format!("failed to read {}", path.display()),
            source,
        })?;
        Ok(Self {
            doc: PomDocument::parse(&content)?,
            path: Some(path.to_path_buf()),
        })
    }

    /// Origin path, when the service was constructed from a file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn document(&self) -> &PomDocument {
        &self.doc
    }

    /// The declared Java language level, normalized, if any site declares
    /// one.
    pub fn java_version(&self) -> Option<String> {
        locate_java_version(&self.doc).map(|version| normalize_java_version(&version))
    }

    /// Normalize and write `new_version` into every existing declaration
    /// site, then persist if requested.
    ///
    /// Persisting a document constructed from raw content has no target
    /// and is silently skipped.
    ///
    /// # Errors
    /// Only serialization/write failures during persistence.
    pub fn set_java_version(&mut self, new_version: &str, persist: bool) -> Result<(), PomError> {
        apply_java_version(&mut self.doc, new_version);
        if persist {
            self.persist()?;
        }
        Ok(())
    }

    /// Expected artifact file name: `build/finalName` (property-resolved)
    /// with a `.jar` suffix, else `<artifactId>-<version>.jar`, else an
    /// empty string when neither is derivable.
    pub fn jar_name(&self) -> String {
        let root = self.doc.root();
        let properties = root.find_child("properties");

        let final_name = root
            .find_child("build")
            .and_then(|build| build.find_child("finalName"))
            .and_then(|element| resolve_property(element.text().as_deref(), properties));
        if let Some(final_name) = final_name {
            if !final_name.is_empty() {
                return format!("{final_name}.jar");
            }
        }

        let artifact_id = root
            .find_child("artifactId")
            .and_then(|element| resolve_property(element.text().as_deref(), properties));
        let version = root
            .find_child("version")
            .and_then(|element| resolve_property(element.text().as_deref(), properties));
        match (artifact_id, version) {
            (Some(artifact_id), Some(version)) => format!("{artifact_id}-{version}.jar"),
            _ => String::new(),
        }
    }

    fn persist(&self) -> Result<(), PomError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let xml = self.doc.to_xml()?;
        fs::write(path, xml).map_err(|source| PomError::Io {
            context: format!("failed to write {}", path.display()),
            source,
        })
    }
}
