//! Module templates
//!
//! Both flavours carry the same content: a do-not-edit header, an export
//! list, one constant per record field, build date and time, and the build
//! status expression (`release` iff post <= 0 and the tree is clean).

use crate::version::VersionRecord;

const HEADER: [&str; 3] = [
    "AUTOMATICALLY GENERATED BY 'RELIC':",
    "* DO NOT EDIT THIS MODULE MANUALLY.",
    "* DO NOT COMMIT THIS MODULE TO YOUR GIT REPOSITORY",
];

/// Constant names exported by the Rust flavour
pub const RUST_EXPORTS: [&str; 10] = [
    "VERSION",
    "VERSION_SHORT",
    "VERSION_LONG",
    "VERSION_POST",
    "VERSION_COMMIT",
    "VERSION_DATE",
    "VERSION_DIRTY",
    "BUILD_DATE",
    "BUILD_TIME",
    "BUILD_STATUS",
];

/// Names exported by the Python flavour
pub const PYTHON_EXPORTS: [&str; 10] = [
    "__version__",
    "__version_short__",
    "__version_long__",
    "__version_post__",
    "__version_commit__",
    "__version_date__",
    "__version_dirty__",
    "__build_date__",
    "__build_time__",
    "__build_status__",
];

/// Build date and time strings as they appear in the module
#[derive(Debug, Clone)]
pub struct BuildStamp {
    pub date: String,
    pub time: String,
}

pub fn render_rust(record: &VersionRecord, stamp: &BuildStamp) -> String {
    let mut out = String::new();

    for line in HEADER {
        out.push_str(&format!("// {line}\n"));
    }
    out.push('\n');

    out.push_str(&format!("pub const ALL: [&str; {}] = [\n", RUST_EXPORTS.len()));
    for name in RUST_EXPORTS {
        out.push_str(&format!("    {name:?},\n"));
    }
    out.push_str("];\n\n");

    let strings = [
        ("VERSION", record.pep386()),
        ("VERSION_SHORT", record.short()),
        ("VERSION_LONG", record.long()),
        ("VERSION_POST", record.post()),
        ("VERSION_COMMIT", record.commit()),
        ("VERSION_DATE", record.date()),
    ];
    for (name, value) in strings {
        out.push_str(&format!("pub const {name}: &str = {value:?};\n"));
    }
    out.push_str(&format!("pub const VERSION_DIRTY: bool = {};\n", record.dirty()));
    out.push_str(&format!("pub const BUILD_DATE: &str = {:?};\n", stamp.date));
    out.push_str(&format!("pub const BUILD_TIME: &str = {:?};\n", stamp.time));
    out.push('\n');

    out.push_str(&format!("const VERSION_POST_NUMBER: i64 = {};\n", record.distance()));
    out.push_str(
        "pub const BUILD_STATUS: &str = if VERSION_POST_NUMBER <= 0 && !VERSION_DIRTY {\n    \"release\"\n} else {\n    \"development\"\n};\n",
    );

    out
}

pub fn render_python(record: &VersionRecord, stamp: &BuildStamp) -> String {
    let mut out = String::new();

    for line in HEADER {
        out.push_str(&format!("# {line}\n"));
    }
    out.push('\n');

    out.push_str("__all__ = [\n");
    let names: Vec<String> = PYTHON_EXPORTS
        .iter()
        .map(|name| format!("    '{name}'"))
        .collect();
    out.push_str(&names.join(",\n"));
    out.push_str("\n]\n\n");

    let strings = [
        ("__version__", record.pep386()),
        ("__version_short__", record.short()),
        ("__version_long__", record.long()),
        ("__version_post__", record.post()),
        ("__version_commit__", record.commit()),
        ("__version_date__", record.date()),
    ];
    for (name, value) in strings {
        out.push_str(&format!("{name} = '{}'\n", python_escape(value)));
    }
    let dirty = if record.dirty() { "True" } else { "False" };
    out.push_str(&format!("__version_dirty__ = {dirty}\n"));
    out.push_str(&format!("__build_date__ = '{}'\n", python_escape(&stamp.date)));
    out.push_str(&format!("__build_time__ = '{}'\n", python_escape(&stamp.time)));
    out.push_str(
        "__build_status__ = 'release' if not int(__version_post__) > 0 \\\n    and not __version_dirty__ \\\n    else 'development'\n",
    );

    out
}

/// Escape a value for a single-quoted Python string literal
fn python_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}
