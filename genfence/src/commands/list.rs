use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use genfence_config::load;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to genfence.yml (defaults to ./genfence.yml)
    #[arg(short, long, default_value = "genfence.yml")]
    pub config: PathBuf,

    /// Also print each generator's working directory
    #[arg(long)]
    pub working_dirs: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let config = load(Some(self.config.as_path()), "").unwrap_or_exit();

        if config.generators.is_empty() {
            println!("No generators defined");
            return Ok(());
        }

        for name in config.generators.sorted_names() {
            if self.working_dirs {
                let generator = config.generators.get(&name).unwrap_or_exit();
                println!("{}\t{}", name, generator.working_dir.display());
            } else {
                println!("{name}");
            }
        }

        Ok(())
    }
}
