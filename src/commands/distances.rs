//! # distances 命令实现
//!
//! 从 .xyz 文件计算全部原子对间距。
//!
//! ## 功能
//! - 终端表格（默认）或纯文本列表（`--plain`）
//! - 可选 CSV 输出
//! - 最短原子对摘要
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的参数
//! - 使用 `parsers/xyz.rs`, `analysis/pairwise.rs`
//! - 使用 `report/messages.rs`, `utils/output.rs`

use crate::analysis::pairwise_distances;
use crate::cli::analyze::DistancesArgs;
use crate::error::{AnalysisResult, NanocalcError, Result};
use crate::models::{AtomRecord, PairwiseDistances};
use crate::parsers::xyz;
use crate::report::messages;
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 表格行
#[derive(Debug, Clone, Tabled)]
struct PairRow {
    #[tabled(rename = "i")]
    first: usize,
    #[tabled(rename = "Atom i")]
    first_symbol: String,
    #[tabled(rename = "j")]
    second: usize,
    #[tabled(rename = "Atom j")]
    second_symbol: String,
    #[tabled(rename = "Distance (Å)")]
    angstrom: String,
    #[tabled(rename = "Distance (bohr)")]
    bohr: String,
}

/// 执行 distances 命令
pub fn execute(args: DistancesArgs) -> Result<()> {
    output::print_header("Interatomic Pair Distances");
    output::print_info(&format!("Input: '{}'", args.input.display()));

    let distances = compute(&args.input, args.verbose).map_err(|e| NanocalcError::Computation {
        message: messages::distances_failure(&e, &args.input),
        source: e,
    })?;

    if args.plain {
        println!("{}", distances);
    } else {
        let rows: Vec<PairRow> = distances
            .pairs
            .iter()
            .map(|p| PairRow {
                first: p.first,
                first_symbol: p.first_symbol.clone(),
                second: p.second,
                second_symbol: p.second_symbol.clone(),
                angstrom: format!("{:.4}", p.angstrom),
                bohr: format!("{:.4}", p.bohr),
            })
            .collect();
        println!("{}", Table::new(&rows));
    }

    output::print_separator();
    output::print_info(&format!("{} pairs", distances.pairs.len()));
    if let Some(shortest) = distances.shortest() {
        output::print_info(&format!(
            "Shortest pair: {} {} - {} {} ({:.4} Å)",
            shortest.first,
            shortest.first_symbol,
            shortest.second,
            shortest.second_symbol,
            shortest.angstrom
        ));
    }

    if let Some(ref csv_path) = args.csv {
        save_pairs_csv(&distances, csv_path)?;
        output::print_success(&format!("Pair distances saved to '{}'", csv_path.display()));
    }

    Ok(())
}

/// 解析并计算，`verbose` 时列出被跳过的行
pub fn compute(path: &Path, verbose: bool) -> AnalysisResult<PairwiseDistances> {
    let file = xyz::parse_xyz_file(path, AtomRecord::from_fields)?;
    if verbose {
        output::print_skipped_lines(&file.skipped_lines, "not a `symbol x y z` record");
    }
    pairwise_distances(&file)
}

/// 保存原子对间距到 CSV
fn save_pairs_csv(distances: &PairwiseDistances, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record([
        "atom_i",
        "symbol_i",
        "atom_j",
        "symbol_j",
        "distance_angstrom",
        "distance_bohr",
    ])?;

    for p in &distances.pairs {
        wtr.write_record(&[
            p.first.to_string(),
            p.first_symbol.clone(),
            p.second.to_string(),
            p.second_symbol.clone(),
            format!("{:.4}", p.angstrom),
            format!("{:.4}", p.bohr),
        ])?;
    }

    wtr.flush().map_err(|e| NanocalcError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
