//! Where finished downloads are saved

use super::catalog::Whitepaper;
use crate::error::{ErrorContext, SiteResult};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

/// Terminal side effect of a finished download
pub trait DownloadSink {
    /// Save the artifact and return where it ended up
    fn deliver(&mut self, artifact: &Whitepaper) -> SiteResult<PathBuf>;
}

/// Writes the rendered whitepaper into a directory
#[derive(Clone, Debug)]
pub struct FileDownloadSink {
    output_dir: PathBuf,
}

impl FileDownloadSink {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// The user's download directory, falling back to the current directory
    pub fn default_dir() -> PathBuf {
        dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
    }
}

impl DownloadSink for FileDownloadSink {
    fn deliver(&mut self, artifact: &Whitepaper) -> SiteResult<PathBuf> {
        fs::create_dir_all(&self.output_dir).context_delivery(artifact.file_name)?;
        let path = self.output_dir.join(artifact.file_name);
        fs::write(&path, artifact.render()).context_delivery(artifact.file_name)?;
        Ok(path)
    }
}

/// Records deliveries in memory. Clones share the record.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    delivered: Rc<RefCell<Vec<&'static str>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivered(&self) -> Vec<&'static str> {
        self.delivered.borrow().clone()
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&mut self, artifact: &Whitepaper) -> SiteResult<PathBuf> {
        self.delivered.borrow_mut().push(artifact.slug);
        Ok(PathBuf::from(artifact.file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::catalog::WHITEPAPERS;
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_writes_rendered_paper() {
        let dir = TempDir::new().unwrap();
        let mut sink = FileDownloadSink::new(dir.path().join("papers"));
        let paper = &WHITEPAPERS[0];

        let path = sink.deliver(paper).unwrap();

        assert_eq!(path, dir.path().join("papers").join(paper.file_name));
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("# Chainsite Protocol (v2.1)"));
    }

    #[test]
    fn test_file_sink_reports_delivery_errors() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let mut sink = FileDownloadSink::new(blocker);

        let err = sink.deliver(&WHITEPAPERS[1]).unwrap_err();
        assert!(err.to_string().contains(WHITEPAPERS[1].file_name));
    }
}
