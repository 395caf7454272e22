//! Context setup, dispatch and per-command handlers.
//!
//! Handlers validate raw input, call the API, and hand the `CmdResult` to `print`.
//! Errors bubble up to `main`, which prints them and exits non-zero.

use super::print::{
    print_books, print_contact_detail, print_contacts, print_groups, print_messages,
};
use super::setup::{
    command_name, print_grouped_help, print_help_for_command, BookCommands, Cli, Commands,
    ContactCommands, MiscCommands, NewContact, QueryCommands,
};
use addrbook::api::{AddressBookApi, AddressBookPaths, ConfigAction};
use addrbook::config::AddressBookConfig;
use addrbook::error::{AddressBookError, Result};
use addrbook::events::LogFacade;
use addrbook::logger;
use addrbook::model::{Contact, ContactField};
use addrbook::store::fs::FileStore;
use addrbook::validation::validate_field;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

const HOME_ENV: &str = "ADDRBOOK_HOME";

struct AppContext {
    api: AddressBookApi<FileStore, LogFacade>,
    book: Option<String>,
}

impl AppContext {
    fn book(&self) -> Result<&str> {
        self.book.as_deref().ok_or_else(|| {
            AddressBookError::InvalidInput(
                "no address book selected; pass --book or set default-book".to_string(),
            )
        })
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.help {
        match &cli.command {
            Some(command) => print_help_for_command(command_name(command)),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        match command {
            Some(name) => print_help_for_command(name),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Books(cmd)) => match cmd {
            BookCommands::New { name } => handle_new_book(&mut ctx, &name),
            BookCommands::Books => handle_books(&ctx),
            BookCommands::Drop { name } => handle_drop_book(&mut ctx, &name),
        },
        Some(Commands::Contacts(cmd)) => match cmd {
            ContactCommands::Add(contact) => handle_add(&mut ctx, contact),
            ContactCommands::Edit {
                full_name,
                field,
                value,
            } => handle_edit(&mut ctx, &full_name, &field, &value),
            ContactCommands::Delete { full_name } => handle_delete(&mut ctx, &full_name),
            ContactCommands::List { sort_by } => handle_list(&mut ctx, sort_by.as_deref()),
            ContactCommands::View { full_name } => handle_view(&ctx, &full_name),
        },
        Some(Commands::Queries(cmd)) => match cmd {
            QueryCommands::City { city } => handle_city(&ctx, &city),
            QueryCommands::State { state } => handle_state(&ctx, &state),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
            MiscCommands::Init => handle_init(&mut ctx),
            MiscCommands::Help { .. } => Ok(()),
        },
        None => handle_books(&ctx),
    }
}

fn home_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "addrbook", "addrbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AddressBookError::Config("could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = home_dir()?;
    let config = match AddressBookConfig::load(&home) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}; using default settings", e);
            AddressBookConfig::default()
        }
    };

    match logger::parse_level(&config.log_level) {
        Ok(level) => {
            if let Err(e) = logger::setup(config.log_path(&home), level) {
                eprintln!("Warning: logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    let paths = AddressBookPaths {
        data_file: config.data_path(&home),
        home,
    };
    let store = FileStore::new(&paths.data_file);
    let api = AddressBookApi::new(store, LogFacade, paths);
    print_messages(api.load_warnings());

    Ok(AppContext {
        api,
        book: cli.book.clone().or(config.default_book),
    })
}

fn handle_new_book(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.create_book(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_books(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_books()?;
    print_books(&result.books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_drop_book(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.delete_book(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, input: NewContact) -> Result<()> {
    let fields = [
        (ContactField::FirstName, &input.first),
        (ContactField::LastName, &input.last),
        (ContactField::Address, &input.address),
        (ContactField::City, &input.city),
        (ContactField::State, &input.state),
        (ContactField::ZipCode, &input.zip),
        (ContactField::PhoneNumber, &input.phone),
        (ContactField::Email, &input.email),
    ];
    for (field, value) in fields {
        validate_field(field, value)?;
    }

    let contact = Contact::new(input.first, input.last)
        .with_address(input.address)
        .with_city(input.city)
        .with_state(input.state)
        .with_zip_code(input.zip)
        .with_phone_number(input.phone)
        .with_email(input.email);

    let book = ctx.book()?.to_string();
    let result = ctx.api.add_contact(&book, contact)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, full_name: &str, field: &str, value: &str) -> Result<()> {
    // Unknown field names are left for the API to reject.
    if let Ok(parsed) = field.parse::<ContactField>() {
        validate_field(parsed, value)?;
    }

    let book = ctx.book()?.to_string();
    let result = ctx.api.edit_contact(&book, full_name, field, value)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, full_name: &str) -> Result<()> {
    let book = ctx.book()?.to_string();
    let result = ctx.api.delete_contact(&book, full_name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, sort_by: Option<&str>) -> Result<()> {
    let book = ctx.book()?.to_string();
    let result = ctx.api.list_contacts(&book, sort_by)?;
    print_contacts(&result.listed_contacts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, full_name: &str) -> Result<()> {
    let result = ctx.api.view_contact(ctx.book()?, full_name)?;
    for contact in &result.listed_contacts {
        print_contact_detail(contact);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_city(ctx: &AppContext, city: &str) -> Result<()> {
    let result = ctx.api.find_by_city(ctx.book()?, city)?;
    print_contacts(&result.listed_contacts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_state(ctx: &AppContext, state: &str) -> Result<()> {
    let result = ctx.api.group_by_state(ctx.book()?, state)?;
    print_groups(&result.groups);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        for key in addrbook::config::KEYS {
            println!("{} = {}", key, config.get(key).unwrap_or_default());
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
