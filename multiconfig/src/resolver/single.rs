//! Resolution of a lone candidate path.

use std::path::PathBuf;

use super::{ConfigResolver, Resolution, ResolutionKind};

impl ConfigResolver<'_> {
    /// Use `candidate` if it exists, otherwise fall back to `default_path`.
    ///
    /// The candidate is neither read nor validated here.
    pub(super) fn resolve_single(&self, candidate: PathBuf, default_path: PathBuf) -> Resolution {
        if !self.fs.exists(&candidate) {
            self.logger.warn(&format!(
                "Config file {} not found, using default.",
                candidate.display()
            ));
            return Resolution::default_config(default_path);
        }

        Resolution {
            path: candidate,
            kind: ResolutionKind::Found,
            sources: 1,
        }
    }
}
