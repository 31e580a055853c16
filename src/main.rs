//! qrgen command-line entrypoint

use clap::{Args, Parser, Subcommand};
use qrgen::output::{GenerateOptions, QrSource, generate, render_notice};
use qrgen::{Controller, QrgenConfig, Result, WifiCredentials, WifiEncryption, logging, shell};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::BufReader;

#[derive(Parser, Debug)]
#[command(
    name = "qrgen",
    version,
    about = "Generate QR codes for text, URLs and WiFi networks"
)]
struct Cli {
    /// Optional configuration file (toml/yaml). Defaults to qrgen.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Override the log level (e.g. debug, qrgen=trace)
    #[arg(long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Encode free-form text or a URL
    Text {
        /// Text or URL to encode (surrounding whitespace is trimmed)
        input: String,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Encode WiFi network credentials
    Wifi {
        /// Network name
        #[arg(long)]
        ssid: String,

        /// Network password (not trimmed)
        #[arg(long, default_value = "")]
        password: String,

        /// Security type: wpa, wep or nopass
        #[arg(long, value_name = "TYPE", default_value = "wpa")]
        security: WifiEncryption,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Walk through the generator screens interactively
    Shell,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Destination image (png/jpg); defaults to the configured filename
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print a JSON summary instead of human-readable text
    #[arg(long)]
    json: bool,

    /// Decode the rendered image and check it matches the payload before saving
    #[arg(long)]
    verify: bool,

    /// Also draw the code in the terminal
    #[arg(long)]
    print: bool,
}

impl OutputArgs {
    fn options(&self) -> GenerateOptions {
        GenerateOptions {
            path: self.output.clone(),
            verify: self.verify,
            print: self.print,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", render_notice(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = QrgenConfig::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    logging::init(&config.logging)?;

    let (source, args) = match cli.command {
        CliCommand::Text { input, output } => (QrSource::Text(input), output),
        CliCommand::Wifi {
            ssid,
            password,
            security,
            output,
        } => {
            let credentials = WifiCredentials {
                ssid,
                password,
                encryption: security,
            };
            (QrSource::Wifi(credentials), output)
        }
        CliCommand::Shell => {
            let mut controller = Controller::new();
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            return shell::run(stdin, &mut stdout, &mut controller, &config.output).await;
        }
    };

    let rendered = generate(&source, &args.options(), &config.output)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rendered.json)?);
    } else {
        for line in &rendered.human {
            println!("{line}");
        }
    }
    Ok(())
}
