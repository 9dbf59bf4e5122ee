//! # report 命令实现
//!
//! 运行所选计算，把结果（或错误说明）写入结果存储，然后导出报告。
//!
//! ## 依赖关系
//! - 使用 `cli/report.rs` 定义的参数
//! - 使用 `analysis/`, `report/`
//! - 使用 `utils/output.rs`
//! - `export` 也被 `commands/shell.rs` 使用

use crate::analysis::{band_gap_from_file, layer_distance_from_file, pairwise_distances_from_file};
use crate::cli::report::{ReportArgs, ReportFormat};
use crate::error::Result;
use crate::report::{pdf, text, ExportSummary, ReportAssets, ReportDocument, ResultStore};
use crate::utils::output;

use std::path::Path;

/// 执行 report 命令
pub fn execute(args: ReportArgs) -> Result<()> {
    output::print_header("Generating Report");

    let mut store = ResultStore::new();

    if let Some(ref path) = args.layers {
        output::print_info(&format!("Interlayer distance from '{}'", path.display()));
        store.record_layers(path, &layer_distance_from_file(path));
    }
    if let Some(ref path) = args.distances {
        output::print_info(&format!("Pair distances from '{}'", path.display()));
        store.record_distances(path, &pairwise_distances_from_file(path));
    }
    if let Some(ref path) = args.gap {
        output::print_info(&format!("Energy gap from '{}'", path.display()));
        store.record_gap(path, &band_gap_from_file(path));
    }

    if store.is_empty() {
        output::print_warning(
            "No input files given; every section will contain its placeholder text.",
        );
    }

    let document = ReportDocument::assemble(&store, &args.identity.to_identity());
    let format = args
        .format
        .unwrap_or_else(|| ReportFormat::from_path(&args.output));

    let summary = export(&document, &args.logos.to_assets(), &args.output, format)?;
    print_summary(&summary);

    Ok(())
}

/// 按格式导出报告
pub fn export(
    document: &ReportDocument,
    assets: &ReportAssets,
    path: &Path,
    format: ReportFormat,
) -> Result<ExportSummary> {
    match format {
        ReportFormat::Pdf => pdf::export_pdf(document, assets, path),
        ReportFormat::Text => text::export_text(document, path),
    }
}

/// 打印导出警告与结果
pub fn print_summary(summary: &ExportSummary) {
    for warning in &summary.warnings {
        output::print_warning(warning);
    }
    output::print_success(&format!(
        "Report saved to '{}' ({} page{})",
        summary.path.display(),
        summary.pages,
        if summary.pages == 1 { "" } else { "s" }
    ));
}
