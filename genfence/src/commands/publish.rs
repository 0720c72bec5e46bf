use std::io;
use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use genfence_publish::LocalPublisher;

#[derive(Args)]
pub struct PublishCommand {
    /// Destination repository root
    #[arg(long)]
    pub to: PathBuf,

    /// Product path under the destination root (e.g. com/example/app/1.0.0)
    #[arg(long)]
    pub product: PathBuf,

    /// Artifact files to copy
    #[arg(required = true)]
    pub artifacts: Vec<PathBuf>,
}

impl PublishCommand {
    pub fn run(&self) -> Result<()> {
        let publisher = LocalPublisher::new(&self.to);
        publisher.publish(&self.product, &self.artifacts, &mut io::stdout())?;
        Ok(())
    }
}
