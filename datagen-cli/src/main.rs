use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use datagen::writer::{DataWriter, DEFAULT_BASE_DIR, DEFAULT_FILE_NAME};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Directory the JSON file is written into, created if missing
    #[clap(long, env = "DATAGEN_BASE_DIR", default_value = DEFAULT_BASE_DIR)]
    pub(crate) base_dir: PathBuf,
    /// Name of the JSON file inside the base directory
    #[clap(long, env = "DATAGEN_FILE_NAME", default_value = DEFAULT_FILE_NAME)]
    pub(crate) file_name: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    println!("Processing data...");
    let writer = DataWriter::new(cli.base_dir, cli.file_name);
    debug!("Configured {:?}", writer);

    let path = writer.run()?;
    println!("Data saved to {}", path.display());
    println!("Processing completed successfully: {}", path.display());

    Ok(())
}
