use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WorkspaceError};
use crate::store::{ProjectStore, StorageBackend};
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Bundle the current file set into a gzipped tar archive, preserving
/// relative paths under a `workspace/` prefix.
pub fn run<B: StorageBackend>(
    store: &ProjectStore<B>,
    output: Option<PathBuf>,
) -> Result<CmdResult> {
    let entries = store.list_files()?;

    if entries.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No files to export."));
        return Ok(result);
    }

    let output = output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "atelier-{}.tar.gz",
            Utc::now().format("%Y-%m-%d_%H%M%S")
        ))
    });

    let file = File::create(&output).map_err(WorkspaceError::Io)?;
    write_archive(file, &entries)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} files to {}",
        entries.len(),
        output.display()
    )));
    result.export_path = Some(output);
    Ok(result)
}

fn write_archive<W: Write>(writer: W, entries: &[crate::model::FileEntry]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for entry in entries {
        let entry_name = format!("workspace/{}", entry.path);

        let mut header = tar::Header::new_gnu();
        header.set_size(entry.content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, entry_name, entry.content.as_bytes())
            .map_err(WorkspaceError::Io)?;
    }

    tar.finish().map_err(WorkspaceError::Io)?;
    Ok(())
}
