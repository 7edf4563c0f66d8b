//! tonik - expand summary theme documents into theme JSON and CSS
//! custom properties

mod watch;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tonik_tokens::BuildOptions;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tonik", version, about)]
struct Args {
    /// Input file path
    #[arg(short, long)]
    input: PathBuf,

    /// The path used to save the generated theme file
    #[arg(short, long, default_value = "./theme.json")]
    theme: PathBuf,

    /// The path used to save the generated css properties file
    #[arg(short, long, default_value = "./_variables.css")]
    css: PathBuf,

    /// Run build in watch mode
    #[arg(short, long)]
    watch: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let opts = BuildOptions {
        theme_path: args.theme,
        css_path: args.css,
    };

    if args.watch {
        let mut watcher = watch::WatchLoop::new();
        watcher.start(&args.input, opts).await?;
    } else {
        tonik_tokens::build(&args.input, &opts)?;
    }

    Ok(())
}
