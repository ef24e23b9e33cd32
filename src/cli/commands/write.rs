//! Write command - generate the version module

use crate::cli::args::WriteArgs;
use crate::cli::Project;
use crate::config::schema::ModuleConfig;
use crate::error::RelicResult;
use crate::module::{ModuleFormat, ModuleWriter};
use crate::ui::{self, UiContext};
use tracing::debug;

/// Execute the write command
pub fn execute(args: WriteArgs, project: &Project) -> RelicResult<()> {
    let ctx = UiContext::detect();
    let module = &project.config().module;

    let record = project.resolve(args.prefix.as_deref())?;

    let (format, filename) = module_target(args.format, args.filename, module);
    let dir = match args.dir.or_else(|| module.dir.clone()) {
        Some(dir) => project.dir().join(dir),
        None => project.dir().to_path_buf(),
    };
    debug!("Writing {} module into {}", format, dir.display());

    let path = ModuleWriter::new(format).write(&record, &dir, filename.as_deref())?;

    ui::step_ok_detail(
        &ctx,
        &format!("Wrote version {}", record.pep386()),
        &path.display().to_string(),
    );

    Ok(())
}

/// Pick the module format and file name from flags and config.
///
/// The configured file name belongs to the configured format; a different
/// `--format` falls back to that format's default name.
fn module_target(
    format: Option<ModuleFormat>,
    filename: Option<String>,
    config: &ModuleConfig,
) -> (ModuleFormat, Option<String>) {
    let format = format.unwrap_or(config.format);
    let filename = filename.or_else(|| {
        if format == config.format {
            config.filename.clone()
        } else {
            None
        }
    });
    (format, filename)
}
