use std::path::Path;

/// Answers whether a name refers to an existing directory.
///
/// This is the only point where interpretation touches the outside world.
pub trait DirectoryProbe {
    fn is_dir(&self, name: &str) -> bool;
}

/// Resolves names against the real filesystem, relative to the process
/// working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryProbe;

impl DirectoryProbe for FsDirectoryProbe {
    fn is_dir(&self, name: &str) -> bool {
        Path::new(name).is_dir()
    }
}

impl<F> DirectoryProbe for F
where
    F: Fn(&str) -> bool,
{
    fn is_dir(&self, name: &str) -> bool {
        self(name)
    }
}
