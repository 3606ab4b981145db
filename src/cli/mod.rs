mod commands;

use std::io::Write;
use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::SiteConfig;
use crate::error::SiteResult;
use crate::server;

#[derive(Parser)]
#[command(name = "landing")]
#[command(author, version, about = "Serverless landing page", long_about = None)]
pub struct Cli {
    /// YAML site configuration (defaults apply when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the hero image URL (takes precedence over LANDING_HERO_SRC)
    #[arg(long, global = true)]
    pub hero_src: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the page over HTTP
    Serve {
        /// Host address to bind to
        #[arg(long, default_value_t = server::Config::default().host)]
        host: IpAddr,
        /// Port to listen on
        #[arg(short, long, default_value_t = server::Config::default().port, env = "LANDING_PORT")]
        port: u16,
    },
    /// Render the page to a file, or stdout when no file is given
    Render {
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

impl Cli {
    /// Config from file and env, with CLI overrides on top.
    fn site_config(&self) -> SiteResult<SiteConfig> {
        let config = SiteConfig::resolve(self.config.as_deref())?;
        Ok(match &self.hero_src {
            Some(src) => config.with_hero_src(src.clone()),
            None => config,
        })
    }
}

/// Write `landing render` output. A summary line gets a newline; the
/// document already ends with one, so stdout matches the `--out` file.
fn write_render_output(w: &mut impl Write, output: &str, to_file: bool) -> std::io::Result<()> {
    if to_file {
        writeln!(w, "{}", output)
    } else {
        write!(w, "{}", output)
    }
}

pub async fn run() -> SiteResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Serve { host, port }) => {
            let config = cli.site_config()?;
            commands::serve::serve(&config, *host, *port).await
        }
        Some(Commands::Render { out }) => {
            let config = cli.site_config()?;
            let output = commands::render::render(&config, out.as_deref())?;
            write_render_output(&mut std::io::stdout(), &output, out.is_some())?;
            Ok(())
        }
        None => {
            // Show help when no command provided
            let _ = Cli::parse_from(["landing", "--help"]);
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
