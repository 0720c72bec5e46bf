use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use genfence_config::load;
use genfence_scope::Matcher;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ScopeCommand {
    /// Path to genfence.yml (defaults to ./genfence.yml)
    #[arg(short, long, default_value = "genfence.yml")]
    pub config: PathBuf,

    /// Generator whose output scope to test against
    #[arg(short, long)]
    pub generator: String,

    /// Paths (relative to the build root) to classify
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

impl ScopeCommand {
    pub fn run(&self) -> Result<()> {
        let config = load(Some(self.config.as_path()), "").unwrap_or_exit();
        let generator = config.generators.get(&self.generator).unwrap_or_exit();

        // Scopes were already validated at load.
        let scope = generator.output_scope.compile()?;

        let mut out_of_scope = false;
        for path in &self.paths {
            if scope.is_match(path) {
                println!("in scope:     {}", path.display());
            } else {
                out_of_scope = true;
                println!("out of scope: {}", path.display());
            }
        }

        // Out-of-scope paths are a failure signal for scripted callers.
        if out_of_scope {
            std::process::exit(1);
        }
        Ok(())
    }
}
