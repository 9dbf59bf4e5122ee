//! # nanocalc - 层状材料结构与能带分析工具
//!
//! 从 DFT 输出文件中提取层间距、原子对间距与带隙，并导出报告。
//!
//! ## 子命令
//! - `layers`    - .xyz 文件的层间距
//! - `distances` - .xyz 文件的全部原子对间距
//! - `gap`       - .bands 文件的带隙
//! - `report`    - 运行所选计算并导出 PDF / 文本报告
//! - `shell`     - 交互式会话（保留每类最近一次结果）
//! - `about`     - 程序信息
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── analysis/ (层间距、原子对间距、带隙)
//!   │     ├── parsers/  (.xyz / .bands 解析器)
//!   │     ├── models/   (数据模型)
//!   │     └── report/   (结果存储与报告导出)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod analysis;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod report;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
