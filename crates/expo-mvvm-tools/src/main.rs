//! expo-mvvm-template CLI - Apply the MVVM template to an existing Expo project

use anyhow::Result;
use clap::{CommandFactory, Parser};
use deployer_core::DeployArgs;
use std::path::PathBuf;

const USAGE_NOTES: &str = "\
This template will:
  - Add a login/ screen with authentication stubs
  - Add (drawer)/ with (tabs)/ containing home/ and profile/ screens
  - Add drawer screens: settings/ and about/
  - Add api/, components/, context/, hooks/, store/, types/, utils/ directories
  - Add tsconfig.json with path mappings for @/ imports
  - Update package.json with required dependencies including axios, expo-router,
    vector-icons, and React Navigation v7 (required by Expo Router)
  - Preserve your existing assets/ and configuration files

Warning: this replaces existing app/, components/, etc. directories!";

#[derive(Parser, Debug)]
#[command(name = "expo-mvvm-template")]
#[command(about = "Apply the Expo MVVM template to an existing Expo project")]
#[command(version)]
#[command(after_help = USAGE_NOTES)]
pub struct Args {
    /// Project directory name, or "." to apply to the current directory
    pub project: Option<String>,

    /// Local directory to use for the template instead of the bundled one (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    // No project argument: print usage and fail, the run is destructive
    let Some(project) = args.project else {
        Args::command().print_help()?;
        std::process::exit(1);
    };

    let result = deployer_core::run(DeployArgs {
        project,
        template_dir: args.template_dir,
        yes: args.yes,
    })
    .await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
