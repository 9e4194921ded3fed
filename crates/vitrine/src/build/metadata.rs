use std::path::PathBuf;
use std::process::{ExitCode, Termination};
use std::time::Instant;

/// Metadata returned by [`unveil()`](crate::unveil) for a single page after a successful build.
#[derive(Debug)]
pub struct PageOutput {
    pub route: String,
    pub file_path: PathBuf,
}

/// Metadata returned by [`unveil()`](crate::unveil) for a single static asset after a successful build.
///
/// A static asset is a file that is copied to the output directory without any processing.
#[derive(Debug)]
pub struct StaticAssetOutput {
    pub file_path: PathBuf,
    pub original_path: PathBuf,
}

/// Metadata returned by [`unveil()`](crate::unveil) after a successful build.
#[derive(Debug)]
pub struct BuildOutput {
    pub start_time: Instant,
    pub pages: Vec<PageOutput>,
    pub static_files: Vec<StaticAssetOutput>,
}

impl BuildOutput {
    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            pages: Vec::new(),
            static_files: Vec::new(),
        }
    }

    pub(crate) fn add_page(&mut self, route: String, file_path: PathBuf) {
        self.pages.push(PageOutput { route, file_path });
    }

    pub(crate) fn add_static_file(&mut self, file_path: PathBuf, original_path: PathBuf) {
        self.static_files.push(StaticAssetOutput {
            file_path,
            original_path,
        });
    }
}

// Lets the binary crate return the build metadata directly from main.
impl Termination for BuildOutput {
    fn report(self) -> ExitCode {
        ExitCode::SUCCESS
    }
}
