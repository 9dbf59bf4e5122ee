//! # gap 命令实现
//!
//! 从 .bands 文件计算带隙。
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的参数
//! - 使用 `parsers/bands.rs`, `analysis/gap.rs`, `analysis/sentinel.rs`
//! - 使用 `report/messages.rs`, `utils/output.rs`

use crate::analysis::{band_gap, sentinel};
use crate::cli::analyze::GapArgs;
use crate::error::{AnalysisResult, NanocalcError, Result};
use crate::models::BandGap;
use crate::parsers::bands;
use crate::report::messages;
use crate::utils::output;

use std::path::Path;

/// 执行 gap 命令
pub fn execute(args: GapArgs) -> Result<()> {
    if args.raw {
        let (value, metallic) = sentinel::band_gap_values(&args.input);
        println!("{:.4} {}", value, metallic);
        return Ok(());
    }

    output::print_header("Energy Gap");
    output::print_info(&format!("Input: '{}'", args.input.display()));

    let gap = checked(&args.input, args.verbose)?;
    if !gap.is_metallic() {
        output::print_info(&format!("Fermi level: {:.4} eV", gap.fermi_level()));
    }
    output::print_block(&gap.to_string());
    Ok(())
}

/// 计算带隙，失败时附带面向用户的说明
fn checked(path: &Path, verbose: bool) -> Result<BandGap> {
    compute(path, verbose).map_err(|e| NanocalcError::Computation {
        message: messages::gap_failure(&e, path),
        source: e,
    })
}

/// 解析并计算，`verbose` 时列出被丢弃的行
pub fn compute(path: &Path, verbose: bool) -> AnalysisResult<BandGap> {
    let file = bands::parse_bands_file(path)?;
    if verbose {
        output::print_skipped_lines(&file.skipped_lines, "contains a non-numeric token");
    }
    band_gap(&file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_no_energies_raw_and_message() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("header_only.bands");
        fs::write(&path, "-1.25\n\nfoo bar\n").unwrap();

        assert_eq!(
            sentinel::band_gap_values(&path),
            (sentinel::NO_VALID_DATA, false)
        );

        match checked(&path, true) {
            Err(NanocalcError::Computation { message, source }) => {
                assert_eq!(message, "Could not read valid energy data from the file.");
                assert_eq!(source.kind(), FailureKind::NoValidData);
            }
            other => panic!("expected a computation error, got {:?}", other),
        }
    }

    #[test]
    fn test_raw_mode_exits_cleanly_on_failure() {
        let dir = TempDir::new().unwrap();
        let args = GapArgs {
            input: dir.path().join("missing.bands"),
            raw: true,
            verbose: false,
        };
        assert!(execute(args).is_ok());
    }

    #[test]
    fn test_checked_success() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("si.bands");
        fs::write(&path, "0.0\n-2.0 -1.0\n1.0 2.0\n").unwrap();
        let gap = checked(&path, false).unwrap();
        assert!((gap.value() - 2.0).abs() < 1e-12);
    }
}
