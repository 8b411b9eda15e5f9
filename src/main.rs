use anyhow::Result;
use clap::Parser;
use colored::*;
use std::env;
use std::path::PathBuf;

use create_njs::{init_project, stdio_prompter, InitOptions, TemplateSource};

/// Create a new njs project
///
/// 询问项目名和包名，然后把内嵌模板复制到目标目录
#[derive(Parser)]
#[command(name = "create-njs")]
#[command(author, version = env!("APP_VERSION"), about)]
// 未知参数直接忽略，已解析到的目标目录保留
#[command(ignore_errors = true)]
struct Cli {
    /// 目标目录（省略时会询问）
    target_dir: Option<String>,

    /// 多余的位置参数被忽略
    #[arg(hide = true)]
    _extra: Vec<String>,

    /// 使用磁盘上的模板目录代替内嵌模板
    #[arg(long, env = "CREATE_NJS_TEMPLATE", hide = true)]
    template: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<()> {
    let options = InitOptions {
        cwd: env::current_dir()?,
        target_dir: cli.target_dir,
        template: TemplateSource::from_option(cli.template),
    };

    let mut prompter = stdio_prompter();
    init_project(&options, prompter.as_mut())?;
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════
// Main
// ═══════════════════════════════════════════════════════════════════

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{}", err.to_string().red());
        for cause in err.chain().skip(1) {
            eprintln!("  {}", format!("caused by: {}", cause).red());
        }
        std::process::exit(1);
    }
}
