//! # shell 命令实现
//!
//! 交互式会话：逐行读取标准输入中的命令，每次计算覆盖结果存储中
//! 对应类别的槽位，随时可以导出报告。任何计算失败都不会结束会话。
//!
//! ## 会话命令
//! - `layers <file>` / `distances <file>` / `gap <file>`
//! - `show`: 显示当前三个槽位
//! - `identity <name>|<role>|<advisor>`
//! - `export <path>`: 按扩展名选择 PDF 或文本
//! - `clear`, `help`, `quit` / `exit`
//!
//! ## 依赖关系
//! - 使用 `cli/report.rs` 定义的参数
//! - 使用 `analysis/`, `report/`, `commands/report.rs`
//! - 使用 `utils/output.rs`

use super::report::{export, print_summary};
use crate::analysis::{band_gap_from_file, layer_distance_from_file, pairwise_distances_from_file};
use crate::cli::report::{ReportFormat, ShellArgs};
use crate::error::{NanocalcError, Result};
use crate::report::{messages, Category, ReportAssets, ReportDocument, ReportIdentity, ResultStore};
use crate::utils::output;

use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

const PROMPT: &str = "nanocalc> ";

const HELP: &str = "\
Commands:
  layers <file.xyz>                  compute the interlayer distance
  distances <file.xyz>               compute all interatomic pair distances
  gap <file.bands>                   compute the energy gap
  show                               show the latest result of each calculation
  identity <name>|<role>|<advisor>   set the report cover information
  export <path>                      export the report (.txt for text, otherwise PDF)
  clear                              forget all stored results
  help                               show this help
  quit, exit                         leave the session";

/// 会话命令
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Layers(PathBuf),
    Distances(PathBuf),
    Gap(PathBuf),
    Show,
    Identity(ReportIdentity),
    Export(PathBuf),
    Clear,
    Help,
    Quit,
}

/// 解析一行输入，空行返回 `None`
pub fn parse_command(line: &str) -> std::result::Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    let path_arg = |name: &str| {
        if rest.is_empty() {
            Err(format!("Usage: {} <file>", name))
        } else {
            Ok(PathBuf::from(rest))
        }
    };

    let cmd = match word.to_lowercase().as_str() {
        "layers" => ShellCommand::Layers(path_arg("layers")?),
        "distances" => ShellCommand::Distances(path_arg("distances")?),
        "gap" => ShellCommand::Gap(path_arg("gap")?),
        "export" => ShellCommand::Export(path_arg("export")?),
        "show" => ShellCommand::Show,
        "identity" => {
            let mut fields = rest.splitn(3, '|');
            let name = fields.next().unwrap_or("");
            let role = fields.next().unwrap_or("");
            let advisor = fields.next().unwrap_or("");
            ShellCommand::Identity(ReportIdentity::new(name, role, advisor))
        }
        "clear" => ShellCommand::Clear,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => {
            return Err(format!(
                "Unknown command '{}'. Type 'help' for the list of commands.",
                other
            ))
        }
    };

    Ok(Some(cmd))
}

/// 交互会话状态
#[derive(Debug, Default)]
pub struct Session {
    pub store: ResultStore,
    pub identity: ReportIdentity,
    pub assets: ReportAssets,
}

impl Session {
    pub fn new(identity: ReportIdentity, assets: ReportAssets) -> Self {
        Session {
            store: ResultStore::new(),
            identity,
            assets,
        }
    }

    /// 执行一条命令，`Break` 表示结束会话
    pub fn handle(&mut self, cmd: ShellCommand) -> ControlFlow<()> {
        match cmd {
            ShellCommand::Layers(path) => {
                let result = layer_distance_from_file(&path);
                self.store.record_layers(&path, &result);
                match result {
                    Ok(d) => output::print_block(&d.to_string()),
                    Err(e) => output::print_error(&messages::layers_failure(&e, &path)),
                }
            }
            ShellCommand::Distances(path) => {
                let result = pairwise_distances_from_file(&path);
                self.store.record_distances(&path, &result);
                match result {
                    Ok(d) => {
                        println!("{}", d);
                        output::print_info(&format!("{} pairs", d.pairs.len()));
                    }
                    Err(e) => output::print_error(&messages::distances_failure(&e, &path)),
                }
            }
            ShellCommand::Gap(path) => {
                let result = band_gap_from_file(&path);
                self.store.record_gap(&path, &result);
                match result {
                    Ok(g) => output::print_block(&g.to_string()),
                    Err(e) => output::print_error(&messages::gap_failure(&e, &path)),
                }
            }
            ShellCommand::Show => self.show(),
            ShellCommand::Identity(identity) => {
                self.identity = identity;
                for line in self.identity.lines() {
                    output::print_info(&line);
                }
            }
            ShellCommand::Export(path) => {
                if let Err(e) = self.export_report(&path) {
                    output::print_error(&e.to_string());
                }
            }
            ShellCommand::Clear => {
                self.store.clear();
                output::print_success("Stored results cleared");
            }
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    fn show(&self) {
        for category in Category::ALL {
            println!("{}", category.title().bold());
            output::print_block(self.store.text_or_placeholder(category));
            println!();
        }
    }

    fn export_report(&self, path: &Path) -> Result<()> {
        if self.store.is_empty() {
            output::print_warning("No calculation has been run yet; exporting placeholders only.");
        }
        let document = ReportDocument::assemble(&self.store, &self.identity);
        let summary = export(&document, &self.assets, path, ReportFormat::from_path(path))?;
        print_summary(&summary);
        Ok(())
    }
}

/// 执行 shell 命令
pub fn execute(args: ShellArgs) -> Result<()> {
    output::print_header("nanocalc interactive session");
    output::print_info("Type 'help' for the list of commands.");

    let mut session = Session::new(args.identity.to_identity(), args.logos.to_assets());
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{}", PROMPT);
        io::stdout().flush().ok();

        line.clear();
        let read = input
            .read_line(&mut line)
            .map_err(|e| NanocalcError::Other(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            println!();
            break;
        }

        match parse_command(&line) {
            Ok(Some(cmd)) => {
                if session.handle(cmd).is_break() {
                    break;
                }
            }
            Ok(None) => {}
            Err(msg) => output::print_error(&msg),
        }
    }

    Ok(())
}
