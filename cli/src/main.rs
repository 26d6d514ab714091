use std::io;

use anyhow::Context;
use clap::Parser;
use nlsh_cli::cli::Color;
use nlsh_cli::cli::InterpretArgs;
use nlsh_cli::cli::ServeArgs;
use nlsh_cli::config::NlshConfig;
use nlsh_cli::http;
use nlsh_cli::interpret_report;
use nlsh_cli::logging;
use nlsh_cli::repl::Console;
use nlsh_commands::Shell;
use nlsh_interpreter::Interpreter;
use nlsh_utils_home_dir::find_nlsh_home;

/// nlsh: a small shell that also understands plain English
///
/// If no subcommand is specified, an interactive console is started.
#[derive(Debug, Parser)]
#[clap(author, version, bin_name = "nlsh")]
struct Cli {
    /// When to use ANSI colors.
    #[arg(long, value_enum, default_value_t = Color::Auto, global = true)]
    color: Color,

    /// Only accept literal commands; skip the natural-language interpreter.
    #[arg(long = "no-nl", default_value_t = false, global = true)]
    no_nl: bool,

    #[clap(subcommand)]
    subcommand: Option<Subcommand>,
}

#[derive(Debug, clap::Subcommand)]
enum Subcommand {
    /// Start the interactive console (default).
    Repl,

    /// Serve the browser terminal over HTTP.
    Serve(ServeArgs),

    /// Print what a request would be interpreted as, as JSON.
    Interpret(InterpretArgs),
}

fn main() -> anyhow::Result<()> {
    let Cli {
        color,
        no_nl,
        subcommand,
    } = Cli::parse();

    let default_level = match subcommand {
        Some(Subcommand::Serve(_)) => "info",
        _ => "warn",
    };
    logging::init(default_level, color.stderr_enabled());

    match subcommand.unwrap_or(Subcommand::Repl) {
        Subcommand::Repl => {
            let config = load_config()?;
            let shell = Shell::new(config.shell_settings(!no_nl));
            Console::new(shell, io::stdin().lock(), io::stdout(), color.stdout_enabled())
                .run()
                .context("console I/O failed")?;
        }
        Subcommand::Serve(ServeArgs { host, port }) => {
            let config = load_config()?;
            let port_env = std::env::var("PORT").ok();
            let (host, port) = config.http_address(host.as_deref(), port, port_env.as_deref())?;
            let server = http::bind(&host, port)?;
            if let Some(url) = http::local_url(&server) {
                println!("nlsh listening on {url}");
            }
            http::serve(&server, Shell::new(config.shell_settings(!no_nl)));
        }
        Subcommand::Interpret(InterpretArgs { text, pretty }) => {
            let report = interpret_report(&Interpreter::new(), &text.join(" "));
            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{json}");
        }
    }
    Ok(())
}

fn load_config() -> anyhow::Result<NlshConfig> {
    let home = find_nlsh_home().context("failed to locate the nlsh home directory")?;
    NlshConfig::load(&home).map_err(Into::into)
}
