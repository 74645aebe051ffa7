use anyhow::Context;
use clap::{builder::BoolishValueParser, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use folio::commands::{
    email::EmailCommand,
    serve::{serve, status_lines},
};
use folio_utils::folio_version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing(cli.log_pretty);

    let config = folio_config::load().context("Failed to load config")?;

    match cli.command {
        Command::Serve => serve(config).await?,
        Command::Email { command } => command.invoke(config).await?,
        Command::CheckConfig { verbose } => {
            let status = config.status();
            for (name, defined) in status_lines(status) {
                println!("{name}: {}", if defined { "defined" } else { "missing" });
            }
            verbose.then(|| println!("{config:#?}"));
            if !status.is_complete() {
                anyhow::bail!("Missing configuration: {}", status.missing().join(", "));
            }
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = folio_version())]
struct Cli {
    /// Use the multi-line human readable log format
    #[arg(
        long,
        global = true,
        env = "RUST_LOG_PRETTY",
        value_parser = BoolishValueParser::new()
    )]
    log_pretty: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the REST API server to relay contact messages
    #[command(aliases(["run", "start", "r", "s"]))]
    Serve,
    /// Test email deliverability
    #[command(aliases(["e"]))]
    Email {
        #[command(subcommand)]
        command: EmailCommand,
    },
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(pretty: bool) {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let fmt_layer = if pretty {
        fmt_layer.pretty().boxed()
    } else {
        fmt_layer.boxed()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_pretty_flag() {
        let cli = Cli::try_parse_from(["folio", "serve", "--log-pretty"]).unwrap();
        assert!(cli.log_pretty);
        assert!(matches!(cli.command, Command::Serve));

        let cli = Cli::try_parse_from(["folio", "run"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }
}
