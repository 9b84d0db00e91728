use clap::Parser;
use resimg::config::{self, Overrides};
use resimg::{logger, process};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "resimg")]
#[command(version)]
#[command(about = "Shrink images to fit a bounding box")]
#[command(long_about = "\
Shrink images to fit a bounding box

Every FILE is scaled down (never up) to fit the box given by --size, keeping
its aspect ratio, and written under the same name into --dir. The output has
the same format as the input: GIF, JPEG or PNG, detected from the content.
Handy for shrinking photos before mailing them.

Sizes:
  small   320x240
  medium  640x480
  large   800x600
  WxH     any explicit box, e.g. 300x200

Preset names may be abbreviated: `-s m` is `-s medium`.")]
struct Cli {
    /// Images to resize
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Destination directory [default: /tmp/small]
    #[arg(short, long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// small, medium, large (or a prefix), or WxH [default: medium]
    #[arg(short, long, value_name = "SIZE")]
    size: Option<String>,

    /// Log what is being done to stderr
    #[arg(short, long)]
    verbose: bool,

    /// TOML file with defaults for dir, size and verbose
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("resimg: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let overrides = Overrides {
        dir: cli.dir,
        size: cli.size,
        verbose: cli.verbose,
    };
    let run_config = config::resolve_config(cli.config.as_deref(), overrides)?;
    logger::init(run_config.verbose);

    process::run(&run_config, &cli.files)?;
    Ok(())
}
