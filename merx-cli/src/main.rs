//! MerX CLI - 命令行接口
//!
//! 对 MerX 源码做词法切分、语法检查和高亮。配置来自可选的
//! `merx.json` 和全局参数。

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};

mod config;
mod logging;
mod platform;

use crate::config::{load_config, LogConfig};
use crate::logging::LogFormat;
use merx_api::{
    analyze, apply_highlight_config, current_theme, find_theme, get_config, init_config,
    theme_names, Document, LogLevel, MerxError, RunConfig,
};

#[derive(Parser)]
#[command(name = "merx", about = "MerX syntax checker and highlighter", version)]
struct Cli {
    /// 配置文件（默认 ./merx.json，不存在则跳过）
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// 日志级别: "off"（或 "silent"）, "error", "warn", "info", "debug", "trace"
    #[arg(long, global = true, value_name = "LEVEL", value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// 日志输出格式
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// 同时把日志追加写入该文件
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 打印 token 序列
    Tokens {
        /// 源文件，`-` 表示 stdin
        file: PathBuf,
        /// 输出 JSON 而不是表格
        #[arg(long)]
        json: bool,
    },
    /// 语法检查；源码不合法时退出码为 1
    Check {
        /// 源文件，`-` 表示 stdin
        file: PathBuf,
    },
    /// 用 ANSI 颜色打印源码
    Highlight {
        /// 源文件，`-` 表示 stdin
        file: PathBuf,
        /// 主题名（默认使用配置中的主题）
        #[arg(long)]
        theme: Option<String>,
        /// 每行前加行号
        #[arg(long)]
        line_numbers: bool,
    },
    /// 列出可用主题
    Themes,
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{s}'"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut merx_config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };
    if let Some(level) = cli.log_level {
        merx_config.logging.level = level;
    }

    let log_config = LogConfig::from(&merx_config.logging);
    if let Err(e) = logging::init_with_file(&log_config, cli.log_format, cli.log_file.as_deref()) {
        eprintln!("Error: cannot open log file: {e}");
        return ExitCode::from(2);
    }

    let run_config = RunConfig::from(merx_config);
    let setup = init_config(run_config)
        .and_then(|()| apply_highlight_config(&get_config().highlight).map(|_| ()));
    if let Err(e) = setup {
        error!(target: "merx::cli", phase = e.phase(), "{e}");
        eprintln!("Error: {e}");
        return ExitCode::from(2);
    }

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            error!(target: "merx::cli", phase = e.phase(), "{e}");
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(command: Command) -> Result<ExitCode, MerxError> {
    match command {
        Command::Tokens { file, json } => {
            let source = read_source(&file)?;
            let analysis = analyze(&source, get_config());
            if json {
                let out = serde_json::to_string_pretty(&analysis.tokens).map_err(io::Error::from)?;
                println!("{out}");
            } else {
                platform::print_tokens(&analysis.tokens);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { file } => {
            let source = read_source(&file)?;
            let analysis = analyze(&source, get_config());
            debug!(target: "merx::cli", file = %file.display(), valid = analysis.valid, "Checked");
            if analysis.valid {
                println!("{}: ok", file.display());
                Ok(ExitCode::SUCCESS)
            } else {
                println!("{}: syntax error", file.display());
                Ok(ExitCode::from(1))
            }
        }
        Command::Highlight {
            file,
            theme,
            line_numbers,
        } => {
            let theme = match theme {
                Some(name) => find_theme(&name)?,
                None => current_theme(),
            };
            let mut doc = Document::with_config(get_config().clone());
            doc.update(read_source(&file)?);
            for line in platform::render_document(&doc, &theme, line_numbers) {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Themes => {
            let active = current_theme();
            let themes = theme_names()
                .iter()
                .map(|name| find_theme(name))
                .collect::<Result<Vec<_>, _>>()?;
            platform::print_themes(&themes, &active.name);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// 读取源文件；`-` 读取 stdin
fn read_source(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}
