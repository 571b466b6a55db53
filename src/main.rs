use clap::{Parser, Subcommand};
use simple_landing::{config, content, generate, output, simulate};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "simple-landing")]
#[command(about = "Static landing page generator with a scriptable interaction model")]
#[command(long_about = "\
Static landing page generator with a scriptable interaction model

The page is described by a content directory:

  content/
  ├── page.toml      # Title, nav links, sections, tabs, slides, modal copy
  └── config.toml    # Site config (optional, overrides stock defaults)

Interactive behavior (slider, modal, tabs, hover fade, sticky nav, section
reveal, lazy images) can be exercised without a browser by replaying an
event script:

  click next
  click dot 2
  key Escape
  intersect section section--1 yes

Set RUST_LOG=debug to trace every state change on stderr.

Run 'simple-landing gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the landing page to static HTML
    Generate,
    /// Validate content and config without writing anything
    Check,
    /// Replay an event script against a fresh page session
    Simulate {
        /// Event script, one event per line
        script: PathBuf,
        /// Print the final state as JSON instead of one line per event
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate => {
            let site_config = config::load_config(&cli.source)?;
            let page = content::load_page(&cli.source)?;
            let written = generate::generate(&page, &site_config, &cli.output)?;
            output::print_generate_output(&page, &written);
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let page = content::load_page(&cli.source)?;
            output::print_check_output(&page, &site_config);
            println!("==> Content is valid");
        }
        Command::Simulate { script, json } => {
            let site_config = config::load_config(&cli.source)?;
            let page = content::load_page(&cli.source)?;
            let events = simulate::load_script(&script)?;
            let replay = simulate::replay(events, &page, &site_config)?;
            if json {
                println!("{}", replay.snapshot_json()?);
            } else {
                for step in &replay.steps {
                    output::print_step(
                        step.index,
                        &step.event,
                        &step.reactions,
                        &step.dots_before,
                        &step.dots_after,
                    );
                }
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
