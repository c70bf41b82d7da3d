use crate::dockerfile::StartCommandPolicy;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Node.js project inspector and Dockerfile generator
#[derive(Parser, Debug)]
#[command(
    name = "nodepack",
    about = "Node.js project inspector and Dockerfile generator",
    version,
    author,
    long_about = "nodepack inspects a Node.js project directory, infers its framework, package \
                  manager, Node.js version and build/start commands, and renders a Dockerfile \
                  for it. It can also run as an HTTP service that clones and inspects a git \
                  repository per request."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Inspect a project directory",
        long_about = "Classifies the project at PATH and prints the inspection result.\n\n\
                      Examples:\n  \
                      nodepack analyze .\n  \
                      nodepack analyze ./app --format dockerfile --output Dockerfile\n  \
                      nodepack analyze ./app --start-policy npm-start"
    )]
    Analyze(AnalyzeArgs),

    #[command(
        about = "Run the HTTP inspection service",
        long_about = "Serves POST /analyze, which clones {\"repoUrl\"} into a scratch directory \
                      and returns the inspection result, and GET /health.\n\n\
                      Examples:\n  \
                      nodepack serve\n  \
                      nodepack serve --port 8080"
    )]
    Serve(ServeArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    #[arg(value_name = "PATH", help = "Path to the project root")]
    pub path: PathBuf,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "json",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        value_enum,
        help = "Behaviour when the project has no start command (overrides NODEPACK_START_POLICY)"
    )]
    pub start_policy: Option<StartPolicyArg>,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, value_name = "ADDR", help = "Bind address (overrides NODEPACK_BIND)")]
    pub bind: Option<String>,

    #[arg(short = 'p', long, value_name = "PORT", help = "Port (overrides PORT)")]
    pub port: Option<u16>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
    Dockerfile,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
            OutputFormatArg::Dockerfile => super::output::OutputFormat::Dockerfile,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPolicyArg {
    Reject,
    NpmStart,
}

impl From<StartPolicyArg> for StartCommandPolicy {
    fn from(arg: StartPolicyArg) -> Self {
        match arg {
            StartPolicyArg::Reject => StartCommandPolicy::Reject,
            StartPolicyArg::NpmStart => StartCommandPolicy::NpmStart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_default_analyze_args() {
        let args = CliArgs::parse_from(["nodepack", "analyze", "/tmp/app"]);
        match args.command {
            Commands::Analyze(analyze_args) => {
                assert_eq!(analyze_args.path, PathBuf::from("/tmp/app"));
                assert_eq!(analyze_args.format, OutputFormatArg::Json);
                assert!(analyze_args.output.is_none());
                assert!(analyze_args.start_policy.is_none());
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_analyze_requires_path() {
        assert!(CliArgs::try_parse_from(["nodepack", "analyze"]).is_err());
    }

    #[test]
    fn test_analyze_with_options() {
        let args = CliArgs::parse_from([
            "nodepack",
            "analyze",
            ".",
            "--format",
            "dockerfile",
            "--output",
            "Dockerfile",
            "--start-policy",
            "npm-start",
        ]);

        match args.command {
            Commands::Analyze(analyze_args) => {
                assert_eq!(analyze_args.format, OutputFormatArg::Dockerfile);
                assert_eq!(analyze_args.output, Some(PathBuf::from("Dockerfile")));
                assert_eq!(analyze_args.start_policy, Some(StartPolicyArg::NpmStart));
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_serve_command() {
        let args = CliArgs::parse_from(["nodepack", "serve", "--port", "8080"]);
        match args.command {
            Commands::Serve(serve_args) => {
                assert_eq!(serve_args.port, Some(8080));
                assert!(serve_args.bind.is_none());
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let args = CliArgs::parse_from(["nodepack", "-v", "analyze", "."]);
        assert!(args.verbose);
        assert!(!args.quiet);

        let args = CliArgs::parse_from(["nodepack", "--log-level", "debug", "serve"]);
        assert_eq!(args.log_level, Some("debug".to_string()));

        assert!(CliArgs::try_parse_from(["nodepack", "-v", "-q", "serve"]).is_err());
    }

    #[test]
    fn test_start_policy_conversion() {
        assert_eq!(
            StartCommandPolicy::from(StartPolicyArg::Reject),
            StartCommandPolicy::Reject
        );
        assert_eq!(
            StartCommandPolicy::from(StartPolicyArg::NpmStart),
            StartCommandPolicy::NpmStart
        );
    }
}
