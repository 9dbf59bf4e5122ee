//! # 失败说明文本
//!
//! 把核心计算的失败类别翻译为面向用户的说明，
//! 展示层只显示这些文本，不显示哨兵数值。
//! 文本不带 "Error:" 前缀，由调用方决定如何标注。
//!
//! ## 依赖关系
//! - 被 `report/store.rs`, `commands/` 使用

use crate::error::{AnalysisError, FailureKind};
use std::path::Path;

/// 只显示文件名，与路径无关
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// 层间距失败说明
pub fn layers_failure(err: &AnalysisError, path: &Path) -> String {
    match err.kind() {
        FailureKind::InsufficientData => {
            "Insufficient number of atoms in the file to compute the interlayer distance \
             (minimum of 4)."
                .to_string()
        }
        _ => format!(
            "Could not open or process the file '{}'.",
            file_name(path)
        ),
    }
}

/// 原子对间距失败说明
pub fn distances_failure(err: &AnalysisError, path: &Path) -> String {
    match err {
        AnalysisError::FileNotFound { .. } => {
            format!("Could not open the file '{}'.", file_name(path))
        }
        AnalysisError::FileReadError { source, .. } => {
            format!("Failed to read the file '{}': {}", file_name(path), source)
        }
        AnalysisError::HeaderParseError { .. } => format!(
            "Could not read the number of atoms from the file '{}'.",
            file_name(path)
        ),
        AnalysisError::InsufficientData { .. } => {
            "Insufficient number of atoms to compute distances (minimum of 2).".to_string()
        }
        AnalysisError::CountMismatch { .. } | AnalysisError::NoValidData { .. } => {
            format!("{}.", err)
        }
    }
}

/// 带隙失败说明
pub fn gap_failure(err: &AnalysisError, path: &Path) -> String {
    match err.kind() {
        FailureKind::FileNotFound | FailureKind::ReadError => {
            format!("Could not open the file '{}'.", file_name(path))
        }
        FailureKind::HeaderParseError | FailureKind::InsufficientData => {
            "Could not read the Fermi level from the first line, or the file is empty."
                .to_string()
        }
        FailureKind::NoValidData => {
            "Could not read valid energy data from the file.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_messages() {
        let path = Path::new("/tmp/run/bilayer.xyz");
        let missing = AnalysisError::FileNotFound {
            path: path.display().to_string(),
        };
        assert_eq!(
            layers_failure(&missing, path),
            "Could not open or process the file 'bilayer.xyz'."
        );

        let few = AnalysisError::InsufficientData {
            quantity: "the interlayer distance",
            found: 2,
            required: 4,
        };
        assert!(layers_failure(&few, path).contains("minimum of 4"));
    }

    #[test]
    fn test_distances_mismatch_message() {
        let err = AnalysisError::CountMismatch {
            declared: 5,
            parsed: 3,
        };
        let msg = distances_failure(&err, Path::new("a.xyz"));
        assert!(msg.contains("(3)") && msg.contains("(5)"));
    }

    #[test]
    fn test_gap_messages() {
        let path = Path::new("si.bands");
        let none = AnalysisError::NoValidData { format: "bands" };
        assert!(gap_failure(&none, path).contains("valid energy data"));

        let header = AnalysisError::HeaderParseError {
            format: "bands",
            expected: "Fermi level",
        };
        assert!(gap_failure(&header, path).contains("Fermi level"));
    }
}
