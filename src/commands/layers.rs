//! # layers 命令实现
//!
//! 从 .xyz 文件计算层间距。
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的参数
//! - 使用 `parsers/xyz.rs`, `analysis/layers.rs`, `analysis/sentinel.rs`
//! - 使用 `report/messages.rs`, `utils/output.rs`

use crate::analysis::{layer_distance, sentinel};
use crate::cli::analyze::LayersArgs;
use crate::error::{AnalysisResult, NanocalcError, Result};
use crate::models::LayerDistance;
use crate::parsers::xyz;
use crate::report::messages;
use crate::utils::output;

use std::path::Path;

/// 执行 layers 命令
pub fn execute(args: LayersArgs) -> Result<()> {
    if args.raw {
        let (angstrom, bohr) = sentinel::layer_distance_values(&args.input);
        println!("{:.4} {:.4}", angstrom, bohr);
        return Ok(());
    }

    output::print_header("Interlayer Distance");
    output::print_info(&format!("Input: '{}'", args.input.display()));

    let distance = checked(&args.input, args.verbose)?;
    output::print_block(&distance.to_string());
    Ok(())
}

/// 计算层间距，失败时附带面向用户的说明
fn checked(path: &Path, verbose: bool) -> Result<LayerDistance> {
    compute(path, verbose).map_err(|e| NanocalcError::Computation {
        message: messages::layers_failure(&e, path),
        source: e,
    })
}

/// 解析并计算，`verbose` 时列出被跳过的行
pub fn compute(path: &Path, verbose: bool) -> AnalysisResult<LayerDistance> {
    let file = xyz::parse_xyz_file(path, xyz::z_coordinate)?;
    if verbose {
        output::print_skipped_lines(&file.skipped_lines, "no numeric Z coordinate");
    }
    layer_distance(&file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_raw_and_message() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.xyz");

        assert_eq!(
            sentinel::layer_distance_values(&missing),
            (sentinel::READ_FAILURE, sentinel::READ_FAILURE)
        );

        match checked(&missing, false) {
            Err(NanocalcError::Computation { message, source }) => {
                assert_eq!(message, "Could not open or process the file 'missing.xyz'.");
                assert_eq!(source.kind(), FailureKind::FileNotFound);
            }
            other => panic!("expected a computation error, got {:?}", other),
        }
    }

    #[test]
    fn test_raw_mode_exits_cleanly_on_failure() {
        let dir = TempDir::new().unwrap();
        let args = LayersArgs {
            input: dir.path().join("missing.xyz"),
            raw: true,
            verbose: false,
        };
        assert!(execute(args).is_ok());
    }

    #[test]
    fn test_checked_success_and_insufficient() {
        let dir = TempDir::new().unwrap();
        let ok = dir.path().join("ok.xyz");
        fs::write(&ok, "4\n\nC 0 0 1.0\nC 0 0 1.0\nC 0 0 4.5\nC 0 0 4.5\n").unwrap();
        let distance = checked(&ok, true).unwrap();
        assert!((distance.angstrom - 3.5).abs() < 1e-12);

        let few = dir.path().join("few.xyz");
        fs::write(&few, "2\n\nC 0 0 0\nC 0 0 1\n").unwrap();
        let err = checked(&few, false).unwrap_err();
        assert!(err.to_string().contains("minimum of 4"));
    }
}
