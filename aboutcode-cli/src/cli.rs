use aboutcode_common::Severity;
use aboutcode_gen::GenerationAction;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "about")]
#[command(version)]
#[command(about = "Inventory, check and generate ABOUT files")]
#[command(long_about = "
about works with ABOUT files: small key/value records stored next to the
software they document, carrying provenance and license metadata.

Global arguments can be used with any command:
  --verbose     Show trace output
  --debug       Show debug output
  --quiet       Only log errors

Settings are read from ~/.aboutcode/config.*, ./.aboutcode/config.* and
ABOUTCODE_* environment variables.

Example usage:
  about check thirdparty/                     # Report problems in every record
  about inventory thirdparty/ inventory.csv   # Export all records to CSV
  about attrib thirdparty/ NOTICE.html        # Render an attribution document
  about gen inventory.csv thirdparty/         # Create records from a CSV
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress everything but errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect ABOUT files and write them to a CSV inventory
    Inventory {
        /// ABOUT file or directory to scan
        location: PathBuf,
        /// CSV file to write
        output: PathBuf,
    },
    /// Collect ABOUT files and report their issues
    #[command(long_about = "
Collect ABOUT files and report their issues.

Exit codes:
  0  no ERROR or CRITICAL issue
  1  at least one ERROR issue
  2  at least one CRITICAL issue
")]
    Check {
        /// ABOUT file or directory to scan
        location: PathBuf,
        /// Hide issues below this severity (info, warning, error, critical)
        #[arg(long)]
        min_severity: Option<Severity>,
    },
    /// Render an attribution document from ABOUT files
    Attrib {
        /// ABOUT file or directory to scan
        location: PathBuf,
        /// Document to write
        output: PathBuf,
        /// Liquid template to render instead of the built-in HTML one
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// Generate ABOUT files from a CSV inventory
    Gen {
        /// CSV file with an about_file column and one column per field
        input: PathBuf,
        /// Directory to write records into
        target: PathBuf,
        /// What to do with records that already exist: 0 create if absent,
        /// 1 update license info, 2 update non-empty values, 3 overwrite
        #[arg(long, default_value_t = GenerationAction::CreateIfAbsent)]
        action: GenerationAction,
        /// Write every record directly under the target directory
        #[arg(long)]
        all_in_one: bool,
        /// Directory of license texts, named by license_file or <key>.LICENSE
        #[arg(long)]
        license_dir: Option<PathBuf>,
        /// Rename input columns with the configured mapping table
        #[arg(long)]
        mapping: bool,
    },
}
