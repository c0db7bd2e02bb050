//! CMakeLists.txt for the generated virtual console.

use crate::model::{Language, ProjectSpec};

pub const FILE_NAME: &str = "CMakeLists.txt";
pub const CMAKE_MINIMUM_VERSION: &str = "3.10";

/// Output suffix per platform, resolved by CMake at configure time.
pub const OS_SUFFIXES: [(&str, &str); 3] = [
    ("APPLE", ".darwin.vc"),
    ("WIN32", ".windows.vc"),
    ("", ".linux.vc"),
];

fn project_language(language: Language) -> &'static str {
    if language.is_cpp() { "" } else { "C" }
}

fn source_glob(language: Language) -> String {
    format!("src/*.{}", language.source_extension())
}

fn os_suffix_block() -> String {
    let mut block = String::new();
    for (i, (condition, suffix)) in OS_SUFFIXES.iter().enumerate() {
        let head = match (i, condition.is_empty()) {
            (0, _) => format!("if ({condition})"),
            (_, false) => format!("elseif ({condition})"),
            (_, true) => "else ()".to_string(),
        };
        block.push_str(&format!("{head}\n    set(OS_SUFFIX \"{suffix}\")\n"));
    }
    block.push_str("endif ()");
    block
}

pub fn render(spec: &ProjectSpec) -> String {
    let id = spec.identifier();
    format!(
        r#"
# Autogenerated by create-virtual-console-app
cmake_minimum_required(VERSION {CMAKE_MINIMUM_VERSION})
project({id} {lang})

# Set C standard
{standard}

# Find SDL2 and make it required
find_package(SDL2 REQUIRED)

# '#include' paths
include_directories(src)
include_directories({include})


# Get source files, remember to remove unwanted ones
file(GLOB_RECURSE SOURCES LIST_DIRECTORIES true
{glob}
        )

# Compile as shared (dynamic) library
add_library({id} SHARED ${{SOURCES}})

# Rename output library to match frontend format
set_target_properties({id}
        PROPERTIES
        PREFIX ""
        OUTPUT_NAME "${{PROJECT_NAME}}"
        )

# Deployment
{suffixes}

set_target_properties({id} PROPERTIES SUFFIX ${{OS_SUFFIX}})

# Link with Access to Retro developer library
target_link_libraries({id} {library})

# Link with SDL2
target_link_libraries({id} ${{SDL2_LIBRARIES}})
"#,
        lang = project_language(spec.language),
        standard = spec.language.standard_line(),
        include = spec.library_include_path,
        glob = source_glob(spec.language),
        suffixes = os_suffix_block(),
        library = spec.library_path,
    )
}
