//! C/C++ source stubs for the Access to Retro developer library.
//!
//! The same text serves both languages; only the file extension differs.

use crate::model::ProjectSpec;
use std::fmt;

pub const LIBRARY_HEADER: &str = "access-to-retro-dev/access-to-retro-dev.h";
pub const REQUIRED_FN_MACRO: &str = "AR_DEFINE_REQUIRED_FN";

pub const FRAME_RATE: u32 = 60;
pub const DEFAULT_WINDOW_WIDTH: u32 = 640;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 320;
pub const DEFAULT_VERSION: (u32, u32, u32) = (1, 0, 0);

/// The three loop slots, in file order.
pub const THREAD_SLOTS: [&str; 3] = [
    "AR_THREAD_MAIN_FN",
    "AR_THREAD_RENDER_FN",
    "AR_THREAD_INPUT_FN",
];

const LOOP_NOTE: &str = "// Note that code below will run in an infinite loop, sleep function recommended, please see the guide for more information";

/// One generated function definition.
///
/// ```text
/// [annotation ]return_type name(arg, arg)
/// {
///     body
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CFunction {
    /// Leading qualifier such as `static` or `extern "C"`.
    pub annotation: Option<String>,
    /// Empty for macro-declared functions.
    pub return_type: String,
    pub name: String,
    pub arguments: Vec<String>,
    pub body: Vec<String>,
}

impl CFunction {
    pub fn new(return_type: &str, name: &str) -> Self {
        Self {
            annotation: None,
            return_type: return_type.to_string(),
            name: name.to_string(),
            arguments: Vec::new(),
            body: Vec::new(),
        }
    }

    /// `AR_DEFINE_REQUIRED_FN(<slot>)` with the given body lines.
    pub fn required(slot: &str, body: &[&str]) -> Self {
        Self::new("", REQUIRED_FN_MACRO)
            .argument(slot)
            .body(body)
    }

    pub fn annotation(mut self, annotation: &str) -> Self {
        self.annotation = Some(annotation.to_string());
        self
    }

    pub fn argument(mut self, argument: &str) -> Self {
        self.arguments.push(argument.to_string());
        self
    }

    pub fn body(mut self, lines: &[&str]) -> Self {
        self.body.extend(lines.iter().map(|l| l.to_string()));
        self
    }
}

impl fmt::Display for CFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        if let Some(annotation) = self.annotation.as_deref().filter(|a| !a.is_empty()) {
            write!(f, "{annotation} ")?;
        }
        if !self.return_type.is_empty() {
            write!(f, "{} ", self.return_type)?;
        }
        writeln!(f, "{}({})", self.name, self.arguments.join(", "))?;
        writeln!(f, "{{")?;
        for line in &self.body {
            if line.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(f, "    {line}")?;
            }
        }
        writeln!(f, "}}")
    }
}

fn include_line() -> String {
    format!("\n#include <{LIBRARY_HEADER}>\n")
}

/// `threads.c` / `threads.cpp`: the three loop slots, empty.
pub fn render_threads() -> String {
    let mut out = include_line();
    for slot in THREAD_SLOTS {
        out.push_str(&CFunction::required(slot, &[LOOP_NOTE]).to_string());
    }
    out
}

/// `config.c` / `config.cpp`: emulator metadata plus define/startup/quit.
pub fn render_config(spec: &ProjectSpec) -> String {
    let (major, minor, patch) = DEFAULT_VERSION;
    let mut out = include_line();

    out.push_str(&format!(
        r#"
// Define basic information about the emulator for the Access to Retro library (recommended to add 'constexpr' for modern C++)
const char* NAME    = "{name}";
const char* SYSTEM  = "{system}"; // Please use standard name if possible, check the guide for more information
const char* AUTHOR  = "{author}";
const char* ROM_EXT = "{rom_ext}";

unsigned FRAME_RATE = {FRAME_RATE};

// Recomended to be internal system resolution multiplied by an integer
unsigned DEFAULT_WINDOW_WIDTH  = {DEFAULT_WINDOW_WIDTH};
unsigned DEFAULT_WINDOW_HEIGHT = {DEFAULT_WINDOW_HEIGHT};

// Your virtual console version
struct ar_version VERSION = {{ .major = {major}, .minor = {minor}, .patch = {patch} }};
"#,
        name = spec.project_name,
        system = spec.system_name,
        author = spec.author_name,
        rom_ext = spec.rom_extension,
    ));

    let define = CFunction::required(
        "AR_DEFINE_FN",
        &[
            "ar_define(NAME, SYSTEM, AUTHOR, ROM_EXT, VERSION, FRAME_RATE, DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT);",
            "",
            "// Set your desired graphics method here",
            "ar_graphics_set_method(ar_graphics_method_sdl);",
            "",
            "return 0;",
        ],
    );
    let startup = CFunction::required(
        "AR_STARTUP_FN",
        &[
            "ar_init();",
            "",
            "// Executable file to set in your emulator",
            "struct ar_executable* executable = ar_get_executable();",
            "",
            "return 0;",
        ],
    );
    let quit = CFunction::required(
        "AR_QUIT_FN",
        &[
            "// You can add stuff here but DO NOT remove ar_quit()",
            "ar_quit();",
        ],
    );

    for function in [define, startup, quit] {
        out.push_str(&function.to_string());
    }
    out.push('\n');
    out
}
