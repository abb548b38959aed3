//! rosterdb CLI
//!
//! Runs one command against the data file and writes it back if it changed.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rosterdb::record::check_token;
use rosterdb::{Command, Config, Date, Outcome, Record, RecordFields, SortKey, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// rosterdb CLI
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(about = "Employee record store backed by a plain text file")]
#[command(version)]
struct Args {
    /// Data file (one record per line)
    #[arg(short, long, env = "ROSTERDB_DATA_FILE", default_value = "employees.txt")]
    data_file: PathBuf,

    /// Refuse to grow the collection past this many records
    #[arg(long)]
    capacity_limit: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every record
    List,

    /// Add a record
    Add {
        #[arg(allow_negative_numbers = true)]
        id: i32,
        #[arg(value_parser = dept_token)]
        dept: String,
        #[arg(value_parser = name_token)]
        name: String,
        #[arg(allow_negative_numbers = true)]
        salary: i32,
        /// Hire date, year.month.day
        begin: Date,
        /// Termination date, year.month.day
        end: Date,
    },

    /// Remove the first record with this id
    Remove {
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },

    /// Replace everything but the id of the first record with this id
    Edit {
        #[arg(allow_negative_numbers = true)]
        id: i32,
        #[arg(value_parser = dept_token)]
        dept: String,
        #[arg(value_parser = name_token)]
        name: String,
        #[arg(allow_negative_numbers = true)]
        salary: i32,
        /// Hire date, year.month.day
        begin: Date,
        /// Termination date, year.month.day
        end: Date,
    },

    /// Sort records and save them in the new order
    Sort {
        #[arg(value_enum)]
        key: SortKey,
    },
}

fn dept_token(s: &str) -> rosterdb::Result<String> {
    check_token("dept", s).map(|_| s.to_string())
}

fn name_token(s: &str) -> rosterdb::Result<String> {
    check_token("name", s).map(|_| s.to_string())
}

impl Commands {
    /// Map to a store command; `None` for read-only commands
    fn into_command(self) -> Option<Command> {
        match self {
            Commands::List => None,
            Commands::Add {
                id,
                dept,
                name,
                salary,
                begin,
                end,
            } => Some(Command::Append(Record::new(id, dept, name, salary, begin, end))),
            Commands::Remove { id } => Some(Command::Remove { id }),
            Commands::Edit {
                id,
                dept,
                name,
                salary,
                begin,
                end,
            } => Some(Command::Edit {
                id,
                fields: RecordFields::new(dept, name, salary, begin, end),
            }),
            Commands::Sort { key } => Some(Command::Sort(key)),
        }
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,rosterdb=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("rosterdb v{}", rosterdb::VERSION);
    tracing::debug!("Data file: {}", args.data_file.display());

    // Build config from args
    let mut builder = Config::builder().data_file(&args.data_file);
    if let Some(limit) = args.capacity_limit {
        builder = builder.capacity_limit(limit);
    }
    let config = builder.build();

    let mut store = match Store::open(config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    if store.load_report().was_truncated() {
        tracing::warn!(
            "Only the first {} records of {} could be read",
            store.load_report().records_loaded,
            args.data_file.display()
        );
    }

    let Some(command) = args.command.into_command() else {
        for record in store.collection() {
            println!("{}", record);
        }
        return;
    };

    let target_id = match &command {
        Command::Remove { id } | Command::Edit { id, .. } => Some(*id),
        _ => None,
    };

    match store.execute(command) {
        Ok(Outcome::Applied) => {}
        Ok(Outcome::NotFound) => {
            tracing::error!("No record with id {}", target_id.unwrap_or_default());
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = store.close() {
        tracing::error!("Failed to save {}: {}", args.data_file.display(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("rosterdb").chain(argv.iter().copied()))
    }

    #[test]
    fn test_remove_accepts_negative_id() {
        let args = parse(&["remove", "-5"]).unwrap();
        assert_eq!(args.command.into_command(), Some(Command::Remove { id: -5 }));
    }

    #[test]
    fn test_add_accepts_negative_id_and_salary() {
        let args = parse(&["add", "-1", "ops", "Ann", "-100", "2020.1.1", "2021.1.1"]).unwrap();
        let expected = Record::new(-1, "ops", "Ann", -100, Date::new(2020, 1, 1), Date::new(2021, 1, 1));
        assert_eq!(args.command.into_command(), Some(Command::Append(expected)));
    }

    #[test]
    fn test_edit_accepts_negative_id() {
        let args = parse(&["edit", "-7", "ops", "Ann", "10", "2020.1.1", "2021.1.1"]).unwrap();
        assert!(matches!(args.command.into_command(), Some(Command::Edit { id: -7, .. })));
    }

    #[test]
    fn test_add_rejects_empty_or_spaced_tokens() {
        assert!(parse(&["add", "1", "", "Ann", "10", "2020.1.1", "2021.1.1"]).is_err());
        assert!(parse(&["add", "1", "ops", "", "10", "2020.1.1", "2021.1.1"]).is_err());
        assert!(parse(&["edit", "1", "ops", "Van Dyke", "10", "2020.1.1", "2021.1.1"]).is_err());
    }

    #[test]
    fn test_sort_key_argument() {
        let args = parse(&["sort", "salary"]).unwrap();
        assert_eq!(args.command.into_command(), Some(Command::Sort(SortKey::Salary)));
    }
}
