use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use gridform::core::{config, schema};
use gridform::tui;

#[derive(Parser)]
#[command(name = "gridform", about = "Schema-driven record entry with workbook exchange")]
struct Args {
    /// Path to the schema file (overrides config and GRIDFORM_SCHEMA)
    #[arg(short, long)]
    schema: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize file logger - writes to gridform.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("gridform.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config()?;
    let resolved = config::resolve(&file_config, args.schema.as_deref());
    log::info!(
        "Gridform starting up with schema file {}",
        resolved.schema_path.display()
    );

    // Any schema failure other than a missing file is fatal at startup.
    let fields = schema::load_schema(&resolved.schema_path)?;

    tui::run(resolved, fields)?;
    Ok(())
}
