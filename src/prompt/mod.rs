//! Collects the project answers, interactively or from a JSON answers file.

use crate::model::{Language, ProjectSpec};
use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub const DIRECTORY: &str = "Directory: ";
pub const PROJECT_NAME: &str = "Project name: ";
pub const SYSTEM_NAME: &str = "Emulated system (follow names specified in guide): ";
pub const AUTHOR_NAME: &str = "Author name: ";
pub const ROM_EXTENSION: &str = "ROM's extension (ex: '*.gb'): ";
pub const LANGUAGE: &str = "Programming Language (Supported: C, C++): ";
pub const LIBRARY_PATH: &str = "Access to Retro library path (library file): ";
pub const LIBRARY_INCLUDE_PATH: &str = "Access to Retro library include path (include folder): ";

const INVALID_LANGUAGE: &str = "Invalid/unsupported programming language (Supported: C, C++).";

#[derive(Debug)]
pub enum PromptError {
    /// Input ended before the question was answered.
    UnexpectedEof { prompt: &'static str },
    Io(io::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::UnexpectedEof { prompt } => {
                write!(f, "input ended while waiting for `{}`", prompt.trim_end())
            }
            PromptError::Io(e) => write!(f, "prompt I/O failed: {e}"),
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PromptError::Io(e) => Some(e),
            PromptError::UnexpectedEof { .. } => None,
        }
    }
}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

/// Line-based question/answer loop over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `prompt`, reads one line and returns it without the line ending.
    pub fn ask(&mut self, prompt: &'static str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::UnexpectedEof { prompt });
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Re-asks until the answer is exactly `C` or `C++`.
    pub fn ask_language(&mut self) -> Result<Language, PromptError> {
        loop {
            let answer = self.ask(LANGUAGE)?;
            match answer.parse::<Language>() {
                Ok(language) => return Ok(language),
                Err(_) => writeln!(self.output, "{INVALID_LANGUAGE}")?,
            }
        }
    }

    /// Runs the full question sequence.
    ///
    /// The target directory is created as soon as it is answered, before the
    /// remaining questions.
    pub fn collect(&mut self) -> Result<ProjectSpec> {
        let target_directory = PathBuf::from(self.ask(DIRECTORY)?);
        ensure_target_directory(&target_directory, &mut self.output)?;

        let project_name = self.ask(PROJECT_NAME)?;
        let system_name = self.ask(SYSTEM_NAME)?;
        let author_name = self.ask(AUTHOR_NAME)?;
        let rom_extension = self.ask(ROM_EXTENSION)?;
        let language = self.ask_language()?;
        let library_path = self.ask(LIBRARY_PATH)?;
        let library_include_path = self.ask(LIBRARY_INCLUDE_PATH)?;

        Ok(ProjectSpec {
            target_directory,
            project_name,
            system_name,
            author_name,
            rom_extension,
            language,
            library_path,
            library_include_path,
        })
    }
}

/// Creates the target directory (and parents) if it is missing.
pub fn ensure_target_directory(dir: &Path, out: &mut impl Write) -> Result<()> {
    if !dir.exists() {
        writeln!(
            out,
            "Directory: '{}' does not exist, it will now be created.",
            dir.display()
        )?;
        fs::create_dir_all(dir).with_context(|| format!("Creating {}", dir.display()))?;
    }
    Ok(())
}

/// Answers file for non-interactive runs; same fields as the prompts.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Answers {
    directory: PathBuf,
    project_name: String,
    system_name: String,
    author_name: String,
    rom_extension: String,
    language: String,
    library_path: String,
    library_include_path: String,
}

/// Parses a JSON answers document into a `ProjectSpec`.
///
/// Does not touch the filesystem; see `ensure_target_directory`.
pub fn load_answers(json: &str) -> Result<ProjectSpec> {
    let answers: Answers = serde_json::from_str(json)?;
    let language = answers
        .language
        .parse::<Language>()
        .map_err(|e| anyhow!("answers file: {e}"))?;

    Ok(ProjectSpec {
        target_directory: answers.directory,
        project_name: answers.project_name,
        system_name: answers.system_name,
        author_name: answers.author_name,
        rom_extension: answers.rom_extension,
        language,
        library_path: answers.library_path,
        library_include_path: answers.library_include_path,
    })
}
