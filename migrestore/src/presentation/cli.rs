use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Restore files from Windows backup sets", long_about = None)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay every backup set up to a restore point into an output directory
    Restore {
        /// Folder holding the "Backup Files" directories; prompted for when missing
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Existing directory to restore into; prompted for when missing
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Restore point index as listed by `points`; prompted for when missing
        #[arg(long)]
        point: Option<usize>,

        /// Never prompt; invalid or missing input is an error
        #[arg(long, requires_all = ["path", "output", "point"])]
        no_input: bool,

        /// Print the run summary as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// List restore points, earliest first
    Points {
        #[arg(short, long)]
        path: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Show the snapshots and archives a restore would apply, in order
    Plan {
        #[arg(short, long)]
        path: PathBuf,

        #[arg(long)]
        point: usize,

        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_input_needs_everything_up_front() {
        assert!(Cli::try_parse_from(["migrestore", "restore", "--no-input", "-p", "x"]).is_err());
        let ok = Cli::try_parse_from([
            "migrestore", "restore", "--no-input", "-p", "x", "-o", "y", "--point", "0",
        ]);
        assert!(ok.is_ok());
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::try_parse_from(["migrestore", "points", "-p", "r", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
