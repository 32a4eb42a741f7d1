use anyhow::Result;
use clap::{Parser, Subcommand};
use gn::{Arg, ColorMode, MessageKind, Printer, StructuredError, UserMessage};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gn")]
#[command(about = "Print friendly status lines with icons and inline color tags")]
#[command(version)]
struct Cli {
    /// When to color tagged text: auto, always or never
    #[arg(long, global = true, default_value = "auto")]
    color: ColorMode,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a message without an icon
    Message(MessageArgs),
    /// Print a warning
    Warn(MessageArgs),
    /// Print an informational message
    Info(MessageArgs),
    /// Print a progress message
    Progress(MessageArgs),
    /// Print a success message
    Success(MessageArgs),
    /// Report a structured error and exit with status 1
    Error {
        #[command(flatten)]
        message: MessageArgs,
        /// Numeric error code
        #[arg(long, default_value_t = 1)]
        code: i32,
        /// Underlying error text shown on the plain error line
        #[arg(long)]
        cause: Option<String>,
    },
}

#[derive(clap::Args)]
struct MessageArgs {
    /// Template with printf directives and <title>, <warn>, <em>, <err> tags
    template: String,
    /// Values substituted into the template, in order
    #[arg(allow_negative_numbers = true)]
    vars: Vec<String>,
}

impl MessageArgs {
    fn vars(&self) -> Vec<Arg> {
        self.vars.iter().map(|v| Arg::parse_loose(v)).collect()
    }

    fn print(&self, kind: MessageKind) -> Result<()> {
        log::debug!("Printing {:?} message", kind);
        let vars = self.vars();
        Printer::stdout().print(&UserMessage::new(kind, &self.template, &vars))?;
        Ok(())
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    cli.color.apply();

    match cli.command {
        Commands::Message(args) => args.print(MessageKind::Generic)?,
        Commands::Warn(args) => args.print(MessageKind::Warning)?,
        Commands::Info(args) => args.print(MessageKind::Info)?,
        Commands::Progress(args) => args.print(MessageKind::Progress)?,
        Commands::Success(args) => args.print(MessageKind::Success)?,
        Commands::Error {
            message,
            code,
            cause,
        } => {
            let mut err =
                StructuredError::new(code, message.template.clone()).with_vars(message.vars());
            if let Some(cause) = cause {
                err = err.with_cause(anyhow::anyhow!(cause));
            }
            Printer::stdout().report_error(&anyhow::Error::new(err))?;
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
