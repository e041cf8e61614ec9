use chrono::Local;
use clap::Parser;
use rlog::application::{
    ListEntriesService, OpenEntryService, SettingsService, ShowMonthService,
};
use rlog::cli::{output, Cli, Commands};
use rlog::domain::DateRef;
use rlog::error::RlogError;
use rlog::infrastructure::LogStore;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!(
                "{}",
                output::error_message(Local::now(), &e.display_with_suggestions())
            );
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), RlogError> {
    match cli.command {
        Some(Commands::Open { date_ref, print }) => open_entry(&date_ref, !print),
        Some(Commands::Cal { month }) => {
            let store = LogStore::discover()?;
            let grid = ShowMonthService::new(store).execute(month.as_deref())?;
            print!(
                "{}",
                output::render_month_grid(&grid, Local::now().date_naive())
            );
            Ok(())
        }
        Some(Commands::List { from, to, limit }) => {
            let store = LogStore::discover()?;
            let entries =
                ListEntriesService::new(store).execute(from.as_deref(), to.as_deref(), limit)?;
            println!("{}", output::format_entry_list(&entries).trim_end());
            Ok(())
        }
        Some(Commands::Path { date_ref }) => {
            let store = LogStore::discover()?;
            let date = DateRef::parse(&date_ref)?.resolve(Local::now().date_naive());
            println!("{}", store.path_for(date).display());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let store = LogStore::discover()?;
            let service = SettingsService::new(store);

            if list {
                let settings = service.list();
                println!("dark_mode = {}", settings.dark_mode);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: rlog config [--list | <key> [<value>]]");
                println!("Valid keys: dark_mode");
                Ok(())
            }
        }
        Some(Commands::Root) => {
            let store = LogStore::discover()?;
            println!("{}", store.root().display());
            Ok(())
        }
        None => {
            if let Some(date_ref) = cli.date_ref {
                open_entry(&date_ref, true)
            } else {
                println!("rlog - Research log manager");
                println!("Use --help for usage information");
                Ok(())
            }
        }
    }
}

fn open_entry(date_ref: &str, launch_editor: bool) -> Result<(), RlogError> {
    let store = LogStore::discover()?;
    let opened = OpenEntryService::new(store).execute(date_ref, launch_editor)?;

    if launch_editor {
        println!("{}", output::loaded_message(opened.date, opened.created));
    } else {
        println!("{}", opened.path.display());
    }

    Ok(())
}
