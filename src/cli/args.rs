// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for zpodgen

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "zpodgen")]
#[command(about = "Render deployment artifacts from zPod metadata and Handlebars templates")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        long,
        global = true,
        env = "ZPODFACTORY_HOST",
        help = "zpodapi host URL (e.g. http://zpodfactory.example.com:8000)"
    )]
    pub host: Option<String>,

    #[arg(
        long,
        global = true,
        env = "ZPODFACTORY_TOKEN",
        hide_env_values = true,
        help = "zpodapi access token"
    )]
    pub token: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template with metadata from a zPod
    Generate {
        #[arg(help = "Name of the zPod to fetch")]
        zpod_name: String,

        #[arg(short, long, help = "Path to the Handlebars template file")]
        template: PathBuf,

        #[arg(
            short,
            long = "extra-vars",
            help = "Path to a JSON file with extra template variables"
        )]
        extra_vars: Option<PathBuf>,

        #[arg(short, long, help = "Write rendered output to file instead of stdout")]
        output: Option<PathBuf>,

        #[arg(long, help = "Fail when derived network values cannot be computed")]
        require_network: bool,

        #[arg(long, help = "Reject extra variables that collide with computed keys")]
        strict_overrides: bool,
    },

    /// List available zPods and exit
    List,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_command_parsing() {
        let args = Args::parse_from([
            "zpodgen",
            "--host",
            "http://zpodfactory.example.com:8000",
            "--token",
            "secret",
            "generate",
            "demo",
            "--template",
            "netplan.hbs",
            "--require-network",
        ]);

        assert_eq!(
            args.host.as_deref(),
            Some("http://zpodfactory.example.com:8000")
        );
        match args.command {
            Commands::Generate {
                zpod_name,
                template,
                require_network,
                strict_overrides,
                ..
            } => {
                assert_eq!(zpod_name, "demo");
                assert_eq!(template, PathBuf::from("netplan.hbs"));
                assert!(require_network);
                assert!(!strict_overrides);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_list_command_parsing() {
        let args = Args::parse_from(["zpodgen", "list"]);
        assert!(matches!(args.command, Commands::List));
    }

    #[test]
    fn test_generate_requires_template() {
        let result = Args::try_parse_from(["zpodgen", "generate", "demo"]);
        assert!(result.is_err());
    }
}
