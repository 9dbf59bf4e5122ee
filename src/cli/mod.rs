//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `layers`: 层间距
//! - `distances`: 原子对间距
//! - `gap`: 带隙
//! - `report`: 运行所选计算并导出报告
//! - `shell`: 交互式会话
//! - `about`: 程序信息
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: analyze, report

pub mod analyze;
pub mod report;

use clap::{Parser, Subcommand};

/// nanocalc - 层间距、原子间距与带隙计算工具
#[derive(Parser)]
#[command(name = "nanocalc")]
#[command(author)]
#[command(version)]
#[command(
    about = "Extract interlayer distance, pair distances and band gap from DFT output files",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the interlayer distance from an .xyz file
    Layers(analyze::LayersArgs),

    /// Compute all interatomic pair distances from an .xyz file
    Distances(analyze::DistancesArgs),

    /// Compute the energy gap from a .bands file
    Gap(analyze::GapArgs),

    /// Run the selected calculations and export a PDF or text report
    Report(report::ReportArgs),

    /// Start an interactive session that keeps the latest result per calculation
    Shell(report::ShellArgs),

    /// Show information about this program
    About,
}
