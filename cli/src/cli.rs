use clap::Args;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum Color {
    Always,
    Never,
    #[default]
    Auto,
}

impl Color {
    /// Whether to emit ANSI styling on stdout.
    pub fn stdout_enabled(self) -> bool {
        match self {
            Color::Always => true,
            Color::Never => false,
            Color::Auto => supports_color::on_cached(supports_color::Stream::Stdout).is_some(),
        }
    }

    pub fn stderr_enabled(self) -> bool {
        match self {
            Color::Always => true,
            Color::Never => false,
            Color::Auto => supports_color::on_cached(supports_color::Stream::Stderr).is_some(),
        }
    }
}

#[derive(Debug, Default, Args)]
pub struct ServeArgs {
    /// Interface to bind; defaults to `http.host` or 0.0.0.0.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind; defaults to `$PORT`, then `http.port`, then 5000.
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Debug, Args)]
pub struct InterpretArgs {
    /// Request to interpret, e.g. `delete old_logs`.
    #[arg(required = true, num_args = 1.., value_name = "TEXT")]
    pub text: Vec<String>,

    /// Pretty-print the JSON result.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}
