use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Language of the generated virtual console. One per project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    C,
    Cpp,
}

impl Language {
    pub fn is_cpp(self) -> bool {
        self == Language::Cpp
    }

    /// Extension of the generated source stubs, without the dot.
    pub fn source_extension(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "cpp",
        }
    }

    /// The one CMake line that pins the language standard.
    pub fn standard_line(self) -> &'static str {
        match self {
            Language::C => "set(CMAKE_C_STANDARD 11)",
            Language::Cpp => "set(CMAKE_CXX_STANDARD 17)",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::C => f.write_str("C"),
            Language::Cpp => f.write_str("C++"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLanguage(pub String);

impl fmt::Display for UnsupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid/unsupported programming language `{}` (supported: C, C++)",
            self.0
        )
    }
}

impl std::error::Error for UnsupportedLanguage {}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "C" => Ok(Language::C),
            "C++" => Ok(Language::Cpp),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Everything needed to render and write one project.
///
/// Built once by the prompt stage and consumed by the writers; nothing here
/// outlives the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    pub target_directory: PathBuf,
    /// Display name, embedded verbatim in `config`.
    pub project_name: String,
    pub system_name: String,
    pub author_name: String,
    pub rom_extension: String,
    pub language: Language,
    /// Access to Retro library file handed to `target_link_libraries`.
    pub library_path: String,
    /// Access to Retro include folder.
    pub library_include_path: String,
}

impl ProjectSpec {
    /// Directory and CMake target name.
    pub fn identifier(&self) -> String {
        sanitize_identifier(&self.project_name)
    }

    pub fn project_dir(&self) -> PathBuf {
        self.target_directory.join(self.identifier())
    }
}

/// Spaces become hyphens, anything else that is not alphanumeric is dropped.
pub fn sanitize_identifier(name: &str) -> String {
    name.replace(' ', "-")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_spaces() {
        assert_eq!(sanitize_identifier("My Game"), "My-Game");
        assert_eq!(sanitize_identifier("Demo Console"), "Demo-Console");
    }

    #[test]
    fn test_sanitize_strips_symbols() {
        assert_eq!(sanitize_identifier("Sp@ce!!"), "Space");
        assert_eq!(sanitize_identifier("a_b.c-d"), "abc-d");
        assert_eq!(sanitize_identifier("@@@"), "");
    }

    #[test]
    fn test_sanitize_only_safe_chars() {
        let inputs = ["J. Doe's  emu", "tab\there", "über konsole", "--x--", "12 34"];
        for input in inputs {
            let id = sanitize_identifier(input);
            assert!(
                id.chars().all(|c| c.is_alphanumeric() || c == '-'),
                "{input:?} -> {id:?}"
            );
            assert_eq!(
                id.matches('-').count(),
                input.matches(' ').count() + input.matches('-').count()
            );
        }
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("C".parse::<Language>(), Ok(Language::C));
        assert_eq!("C++".parse::<Language>(), Ok(Language::Cpp));
        assert_eq!(" C++ \n".parse::<Language>(), Ok(Language::Cpp));
        assert!("c".parse::<Language>().is_err());
        assert!("Rust".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_details() {
        assert!(Language::Cpp.is_cpp());
        assert!(!Language::C.is_cpp());
        assert_eq!(Language::C.source_extension(), "c");
        assert_eq!(Language::Cpp.source_extension(), "cpp");
        assert_eq!(Language::C.standard_line(), "set(CMAKE_C_STANDARD 11)");
        assert_eq!(Language::Cpp.standard_line(), "set(CMAKE_CXX_STANDARD 17)");
        assert_eq!(Language::Cpp.to_string(), "C++");
    }

    #[test]
    fn test_project_dir_uses_identifier() {
        let spec = ProjectSpec {
            target_directory: PathBuf::from("/tmp/out"),
            project_name: "Demo Console".into(),
            system_name: "SuperFake".into(),
            author_name: "J. Doe".into(),
            rom_extension: "*.fk".into(),
            language: Language::Cpp,
            library_path: String::new(),
            library_include_path: String::new(),
        };
        assert_eq!(spec.identifier(), "Demo-Console");
        assert_eq!(spec.project_dir(), PathBuf::from("/tmp/out/Demo-Console"));
    }
}
