//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `analysis/`, `parsers/`, `report/`, `utils/`
//! - 子模块: layers, distances, gap, report, shell, about

pub mod about;
pub mod distances;
pub mod gap;
pub mod layers;
pub mod report;
pub mod shell;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Layers(args) => layers::execute(args),
        Commands::Distances(args) => distances::execute(args),
        Commands::Gap(args) => gap::execute(args),
        Commands::Report(args) => report::execute(args),
        Commands::Shell(args) => shell::execute(args),
        Commands::About => about::execute(),
    }
}
