//! # about 命令实现
//!
//! 打印程序信息、支持的输入格式与作者信息。
//!
//! ## 依赖关系
//! - 使用 `analysis/` 的常量
//! - 使用 `utils/output.rs`

use crate::analysis::{sentinel, ANGSTROM_TO_BOHR};
use crate::error::Result;
use crate::utils::output;

use colored::Colorize;

const CREDITS: [&str; 3] = [
    "Henrique Lago, Universidade Federal do Piauí (UFPI), advised by Prof. Dr. Ramon Sampaio Ferreira",
    "Grupo de Nanofísica Computacional (GNC), UFPI",
    "Contact: henrique.liberato@ufpi.edu.br",
];

/// 执行 about 命令
pub fn execute() -> Result<()> {
    output::print_header(&format!("nanocalc {}", env!("CARGO_PKG_VERSION")));

    println!("  {}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!("  {}", "Calculations".bold());
    println!("    layers     interlayer distance of a bilayer (.xyz)");
    println!("    distances  every interatomic pair distance (.xyz)");
    println!("    gap        energy gap around the Fermi level (.bands)");
    println!();
    println!("  {}", "Input formats".bold());
    println!("    .xyz    line 1: atom count; line 2: comment; then `symbol x y z`");
    println!("    .bands  line 1: Fermi level (eV); then energies separated by whitespace");
    println!();
    println!("  {}", "Conventions".bold());
    println!("    1 Å = {} bohr", ANGSTROM_TO_BOHR);
    println!(
        "    --raw failure codes: {:.2} read failure, {:.2} insufficient data, {:.2} no valid data",
        sentinel::READ_FAILURE,
        sentinel::INSUFFICIENT,
        sentinel::NO_VALID_DATA
    );

    println!();
    println!("  {}", "Credits".bold());
    for line in CREDITS {
        println!("    {}", line);
    }

    output::print_separator();
    output::print_info("Reports: `nanocalc report` (one shot) or `nanocalc shell` (interactive)");

    Ok(())
}
