use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "addrbook",
    bin_name = "addrbook",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Keep named address books of contacts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Address book to operate on (defaults to the default-book setting)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub book: Option<String>,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Books,
    Contacts,
    Queries,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Books => "Book Commands:",
            CommandGroup::Contacts => "Contact Commands:",
            CommandGroup::Queries => "Query Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "new" | "books" | "drop" => Some(CommandGroup::Books),
            "add" | "edit" | "delete" | "list" | "view" => Some(CommandGroup::Contacts),
            "city" | "state" => Some(CommandGroup::Queries),
            "config" | "init" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Books,
            CommandGroup::Contacts,
            CommandGroup::Queries,
            CommandGroup::Misc,
        ]
    }
}

pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("addrbook {version}\n"));
    output.push_str("Keep named address books of contacts\n");
    output.push('\n');
    output.push_str("Usage: addrbook [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();
    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| CommandGroup::for_command(sc.get_name()) == Some(*group))
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", sc.get_name(), about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -b, --book <NAME>  Address book to operate on\n");
    output.push_str("  -h, --help         Print help\n");
    output.push_str("  -V, --version      Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name, falling back to the grouped help.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();
    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            print!("{}", subcmd.render_help());
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Books(c) => match c {
            BookCommands::New { .. } => "new",
            BookCommands::Books => "books",
            BookCommands::Drop { .. } => "drop",
        },
        Commands::Contacts(c) => match c {
            ContactCommands::Add(_) => "add",
            ContactCommands::Edit { .. } => "edit",
            ContactCommands::Delete { .. } => "delete",
            ContactCommands::List { .. } => "list",
            ContactCommands::View { .. } => "view",
        },
        Commands::Queries(c) => match c {
            QueryCommands::City { .. } => "city",
            QueryCommands::State { .. } => "state",
        },
        Commands::Misc(c) => match c {
            MiscCommands::Config { .. } => "config",
            MiscCommands::Init => "init",
            MiscCommands::Help { .. } => "help",
        },
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Books(BookCommands),

    #[command(flatten)]
    Contacts(ContactCommands),

    #[command(flatten)]
    Queries(QueryCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum BookCommands {
    /// Create a new address book
    #[command(display_order = 1)]
    New { name: String },

    /// Show every address book and its contacts
    #[command(alias = "ls-books", display_order = 2)]
    Books,

    /// Delete an address book and all its contacts
    #[command(display_order = 3)]
    Drop { name: String },
}

#[derive(clap::Args, Debug)]
pub struct NewContact {
    #[arg(long)]
    pub first: String,
    #[arg(long)]
    pub last: String,
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub state: String,
    /// Six digits
    #[arg(long)]
    pub zip: String,
    /// Ten digits
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub email: String,
}

#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    /// Add a contact to the book
    #[command(alias = "a", display_order = 10)]
    Add(NewContact),

    /// Change one field of a contact
    #[command(alias = "e", display_order = 11)]
    Edit {
        /// Full name, e.g. "Asha Rao"
        full_name: String,
        /// first, last, address, city, state, zip, phone or email
        field: String,
        value: String,
    },

    /// Delete a contact
    #[command(alias = "rm", display_order = 12)]
    Delete {
        /// Full name, e.g. "Asha Rao"
        full_name: String,
    },

    /// List the book's contacts
    #[command(alias = "ls", display_order = 13)]
    List {
        /// Re-order the book by city, state or zip first
        #[arg(long, short = 's', value_name = "KEY")]
        sort_by: Option<String>,
    },

    /// Show one contact
    #[command(alias = "v", display_order = 14)]
    View {
        /// Full name, e.g. "Asha Rao"
        full_name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum QueryCommands {
    /// Contacts living in a city
    #[command(display_order = 20)]
    City { city: String },

    /// Names of contacts living in a state
    #[command(display_order = 21)]
    State { state: String },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (data-file, log-file, log-level, default-book)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory and an empty address book file
    #[command(display_order = 31)]
    Init,

    /// Print help for addrbook or a subcommand
    #[command(display_order = 32)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_global_book() {
        let cli = Cli::try_parse_from([
            "addrbook", "add", "-b", "Work", "--first", "Asha", "--last", "Rao", "--address",
            "12 MG Road", "--city", "Pune", "--state", "MH", "--zip", "411001", "--phone",
            "9876543210", "--email", "asha@x.com",
        ])
        .unwrap();

        assert_eq!(cli.book.as_deref(), Some("Work"));
        match cli.command {
            Some(Commands::Contacts(ContactCommands::Add(c))) => {
                assert_eq!(c.first, "Asha");
                assert_eq!(c.zip, "411001");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_edit_arguments() {
        let cli = Cli::try_parse_from(["addrbook", "edit", "Asha Rao", "city", "Nashik"]).unwrap();
        match cli.command {
            Some(Commands::Contacts(ContactCommands::Edit {
                full_name,
                field,
                value,
            })) => {
                assert_eq!(full_name, "Asha Rao");
                assert_eq!(field, "city");
                assert_eq!(value, "Nashik");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_list_sort_key() {
        let cli = Cli::try_parse_from(["addrbook", "ls", "--sort-by", "zip"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Contacts(ContactCommands::List { sort_by: Some(ref k) })) if k == "zip"
        ));
    }

    #[test]
    fn add_requires_every_field() {
        assert!(Cli::try_parse_from(["addrbook", "add", "--first", "Asha"]).is_err());
    }

    #[test]
    fn grouped_help_lists_all_groups() {
        let help = get_grouped_help();
        for group in CommandGroup::all() {
            assert!(help.contains(group.heading()));
        }
        assert!(help.contains("books"));
        assert!(help.contains("state"));
    }

    #[test]
    fn every_subcommand_has_a_group() {
        let cmd = Cli::command();
        for sc in cmd.get_subcommands() {
            assert!(
                CommandGroup::for_command(sc.get_name()).is_some(),
                "{} has no help group",
                sc.get_name()
            );
        }
    }
}
