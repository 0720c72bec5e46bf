use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use genfence_config::load;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to genfence.yml (defaults to ./genfence.yml)
    #[arg(short, long, default_value = "genfence.yml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = load(Some(self.config.as_path()), "").unwrap_or_exit();

        println!("✓ {} is valid\n", self.config.display());

        let count = config.generators.len();
        println!(
            "  {} generator{}:",
            count,
            if count == 1 { "" } else { "s" }
        );
        for name in config.generators.sorted_names() {
            let generator = config.generators.get(&name).unwrap_or_exit();
            let rules = generator.output_scope.rule_count();
            println!(
                "    {} (working-dir: {}, {} scope rule{}, {} env var{})",
                name,
                display_dir(&generator.working_dir),
                rules,
                if rules == 1 { "" } else { "s" },
                generator.environment.len(),
                if generator.environment.len() == 1 { "" } else { "s" },
            );
        }

        Ok(())
    }
}

fn display_dir(dir: &std::path::Path) -> String {
    if dir.as_os_str().is_empty() {
        ".".to_string()
    } else {
        dir.display().to_string()
    }
}
