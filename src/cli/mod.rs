pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{AnalyzeArgs, CliArgs, Commands, OutputFormatArg, ServeArgs, StartPolicyArg};
pub use handlers::{handle_analyze, handle_serve};
pub use output::{OutputFormat, OutputFormatter};
