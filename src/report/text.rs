//! # 纯文本报告导出
//!
//! ## 依赖关系
//! - 被 `commands/report.rs`, `commands/shell.rs` 调用
//! - 使用 `report/document.rs`

use super::document::ReportDocument;
use super::ExportSummary;
use crate::error::{NanocalcError, Result};
use std::fs;
use std::path::Path;

/// 导出为 UTF-8 文本文件
pub fn export_text(document: &ReportDocument, output_path: &Path) -> Result<ExportSummary> {
    fs::write(output_path, document.to_text()).map_err(|e| NanocalcError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(ExportSummary {
        path: output_path.to_path_buf(),
        pages: 1,
        warnings: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Category, ReportIdentity, ResultStore};
    use tempfile::TempDir;

    #[test]
    fn test_export_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");

        let mut store = ResultStore::new();
        store.record(Category::Gap, "Energy gap (eV): 0.5000");
        let doc = ReportDocument::assemble(&store, &ReportIdentity::default());

        let summary = export_text(&doc, &path).unwrap();
        assert_eq!(summary.path, path);
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Energy gap (eV): 0.5000"));
    }

    #[test]
    fn test_export_text_bad_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("report.txt");
        let doc = ReportDocument::assemble(&ResultStore::new(), &ReportIdentity::default());
        let err = export_text(&doc, &path).unwrap_err();
        assert!(matches!(err, NanocalcError::FileWriteError { .. }));
    }
}
