//! `ddd eject-templates`: copy the bundled library to disk so it can be
//! customised and used with `--templates`.

use tracing::instrument;

use ddd_adapters::{EmbeddedStore, LocalFilesystem};

use crate::{cli::EjectArgs, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(dir = %args.dir.display(), force = args.force))]
pub fn execute(args: EjectArgs, output: &OutputManager) -> CliResult<()> {
    let written = EmbeddedStore::new().export(&LocalFilesystem::new(), &args.dir, args.force)?;

    if output.is_json() {
        output.json(&written)?;
        return Ok(());
    }

    if written.is_empty() {
        output.warning(&format!(
            "Every template already exists in {} (use --force to overwrite)",
            args.dir.display()
        ))?;
        return Ok(());
    }

    for path in &written {
        output.print(&format!("  + {}", path.display()))?;
    }
    output.success(&format!(
        "Exported {} templates to {}",
        written.len(),
        args.dir.display()
    ))?;
    output.info(&format!(
        "Render from them with: ddd --templates {} <command>",
        args.dir.display()
    ))?;

    Ok(())
}
