//! Configuration bundle describing how to reach the extension host for a file.

use super::DiffSide;
use crate::traits::{ExtensionHost, Hoverifier, ViewerIdObserver};
use std::fmt;
use std::sync::Arc;

/// Repository coordinates of one side of the diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideInfo {
    pub repo_name: String,
    pub commit_id: String,
    /// Revision as the user spelled it (branch, tag or commit).
    pub revision: String,
    /// `None` when the file does not exist on this side.
    pub file_path: Option<String>,
}

impl SideInfo {
    /// Create side info whose revision is the commit itself.
    pub fn new(repo_name: &str, commit_id: &str, file_path: Option<&str>) -> Self {
        Self {
            repo_name: repo_name.to_string(),
            commit_id: commit_id.to_string(),
            revision: commit_id.to_string(),
            file_path: file_path.map(str::to_string),
        }
    }

    /// Set the user-facing revision.
    pub fn with_revision(mut self, revision: &str) -> Self {
        self.revision = revision.to_string();
        self
    }
}

/// Everything needed to decorate and hoverify one file diff.
///
/// Two values are equal when their side info is equal and they share the same
/// collaborator instances. Equal values are treated as no change.
#[derive(Clone)]
pub struct ExtensionInfo {
    pub base: SideInfo,
    pub head: SideInfo,
    /// Resolves documents to viewer ids; without it no decorations are fetched.
    pub viewer_ids: Option<Arc<dyn ViewerIdObserver>>,
    pub hoverifier: Arc<dyn Hoverifier>,
    pub extension_host: Arc<dyn ExtensionHost>,
}

impl ExtensionInfo {
    pub fn side(&self, side: DiffSide) -> &SideInfo {
        match side {
            DiffSide::Base => &self.base,
            DiffSide::Head => &self.head,
        }
    }
}

impl PartialEq for ExtensionInfo {
    fn eq(&self, other: &Self) -> bool {
        let same_viewer_ids = match (&self.viewer_ids, &other.viewer_ids) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.base == other.base
            && self.head == other.head
            && same_viewer_ids
            && Arc::ptr_eq(&self.hoverifier, &other.hoverifier)
            && Arc::ptr_eq(&self.extension_host, &other.extension_host)
    }
}

impl fmt::Debug for ExtensionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionInfo")
            .field("base", &self.base)
            .field("head", &self.head)
            .field("viewer_ids", &self.viewer_ids.is_some())
            .finish_non_exhaustive()
    }
}
