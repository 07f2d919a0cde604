// ============================================================
// Layer 6 — Record Writer
// ============================================================
// The on-disk RecordSink. Every accepted record becomes two
// files in its category's partition directory:
//
//   <out>/<category id>/q<id>_<n>.txt   one tab-separated line
//   <out>/<category id>/q<id>_<n>.png   the board (optional)
//
// The partition directory is wiped and recreated before a
// category runs, so a partition never mixes two runs.
//
// Reference: Rust Book §12 (I/O and File Handling)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::category::Category;
use crate::domain::qa_record::QaRecord;
use crate::domain::traits::RecordSink;
use crate::infra::renderer::BoardRenderer;

pub struct RecordWriter {
    dir:      PathBuf,
    category: Category,
    renderer: Option<BoardRenderer>,
    written:  usize,
}

impl RecordWriter {
    /// Remove and recreate `<root>/<category id>` and write into it.
    pub fn recreate(root: impl AsRef<Path>, category: Category, render_images: bool) -> Result<Self> {
        let dir = partition_dir(root.as_ref(), category);

        if dir.exists() {
            fs::remove_dir_all(&dir)
                .with_context(|| format!("Cannot clear output directory '{}'", dir.display()))?;
        }
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;

        tracing::debug!("Writing category {} to '{}'", category.id(), dir.display());

        Ok(Self {
            dir,
            category,
            renderer: render_images.then(BoardRenderer::new),
            written: 0,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn written(&self) -> usize {
        self.written
    }

    fn file_stem(&self, record: &QaRecord) -> String {
        format!("q{}_{}", self.category.id(), record.id)
    }
}

impl RecordSink for RecordWriter {
    fn emit(&mut self, record: &QaRecord) -> Result<()> {
        let stem = self.file_stem(record);

        if let Some(renderer) = &self.renderer {
            renderer.render_to(&record.fen, &self.dir.join(format!("{stem}.png")))?;
        }

        let path = self.dir.join(format!("{stem}.txt"));
        fs::write(&path, format!("{}\n", record.to_tsv_line()))
            .with_context(|| format!("Cannot write record '{}'", path.display()))?;

        self.written += 1;
        Ok(())
    }
}

/// Partition directory of a category under the output root
pub fn partition_dir(root: &Path, category: Category) -> PathBuf {
    root.join(category.id().to_string())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> QaRecord {
        QaRecord::new(
            3,
            "is this a checkmate",
            vec!["e4".into(), "e5".into()],
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
            "no",
        )
    }

    #[test]
    fn test_writes_text_and_image() {
        let root       = tempfile::tempdir().unwrap();
        let mut writer = RecordWriter::recreate(root.path(), Category::Checkmate, true).unwrap();
        writer.emit(&record()).unwrap();

        let dir  = root.path().join("0");
        let text = fs::read_to_string(dir.join("q0_3.txt")).unwrap();
        assert_eq!(
            text,
            "is this a checkmate\te4 e5\trnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2\tno\n"
        );
        assert!(dir.join("q0_3.png").exists());
        assert_eq!(writer.written(), 1);
    }

    #[test]
    fn test_images_can_be_skipped() {
        let root       = tempfile::tempdir().unwrap();
        let mut writer = RecordWriter::recreate(root.path(), Category::LegalMove, false).unwrap();
        writer.emit(&record()).unwrap();

        assert!(root.path().join("13/q13_3.txt").exists());
        assert!(!root.path().join("13/q13_3.png").exists());
    }

    #[test]
    fn test_partition_is_recreated() {
        let root  = tempfile::tempdir().unwrap();
        let stale = root.path().join("7/q7_99.txt");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "old").unwrap();

        let writer = RecordWriter::recreate(root.path(), Category::Attack, false).unwrap();
        assert!(writer.dir().exists());
        assert!(!stale.exists());
    }
}
