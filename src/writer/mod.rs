//! Rendering and writing of the generated project.
//!
//! `render` is pure; `emit` is the only place that touches the disk.

pub mod c;
pub mod cmake;

use crate::model::ProjectSpec;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One file of the generated project, relative to the project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedProject {
    pub identifier: String,
    pub artifacts: Vec<Artifact>,
}

pub fn render(spec: &ProjectSpec) -> RenderedProject {
    let ext = spec.language.source_extension();
    RenderedProject {
        identifier: spec.identifier(),
        artifacts: vec![
            Artifact {
                path: PathBuf::from(cmake::FILE_NAME),
                content: cmake::render(spec),
            },
            Artifact {
                path: Path::new("src").join(format!("config.{ext}")),
                content: c::render_config(spec),
            },
            Artifact {
                path: Path::new("src").join(format!("threads.{ext}")),
                content: c::render_threads(),
            },
        ],
    }
}

#[derive(Debug)]
pub enum WriteError {
    /// The project directory is already there; nothing was written.
    ProjectExists(PathBuf),
    /// The project name has no alphanumeric characters left after sanitizing.
    EmptyIdentifier,
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::ProjectExists(path) => {
                write!(f, "project directory {} already exists", path.display())
            }
            WriteError::EmptyIdentifier => {
                f.write_str("project name has no alphanumeric characters to build a directory from")
            }
            WriteError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WriteError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> WriteError + '_ {
    move |source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Removes the project directory on drop unless `commit` was called.
struct DirGuard {
    path: PathBuf,
    committed: bool,
}

impl DirGuard {
    fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_dir_all(&self.path);
        }
    }
}

/// Creates `project_dir` and writes every artifact into it.
///
/// Fails with `ProjectExists` without touching the directory when it is
/// already present. If a later step fails the new project directory is
/// removed again; its parent is left alone.
pub fn emit(project: &RenderedProject, project_dir: &Path) -> Result<Vec<PathBuf>, WriteError> {
    if project.identifier.is_empty() {
        return Err(WriteError::EmptyIdentifier);
    }

    let project_dir = project_dir.to_path_buf();
    match fs::create_dir(&project_dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(WriteError::ProjectExists(project_dir));
        }
        Err(e) => return Err(io_err(&project_dir)(e)),
    }
    let guard = DirGuard {
        path: project_dir.clone(),
        committed: false,
    };

    let mut written = Vec::with_capacity(project.artifacts.len());
    for artifact in &project.artifacts {
        let path = project_dir.join(&artifact.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err(parent))?;
        }
        fs::write(&path, &artifact.content).map_err(io_err(&path))?;
        println!("Wrote {}", path.display());
        written.push(path);
    }

    guard.commit();
    Ok(written)
}
