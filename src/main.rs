use clap::Parser;
use simpletodo::application::{ConfigService, EditItemService, EditOutcome, ListController};
use simpletodo::cli::{format_item_list, Cli, Commands, ConfirmationPrinter};
use simpletodo::domain::SaveStatus;
use simpletodo::error::{Result, TodoError};
use simpletodo::infrastructure::{
    init_logging, resolve_app_dir, Config, EditorSession, FileItemStore, ItemStore,
};
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let app_dir = resolve_app_dir()?;
    let config = Config::load_from_dir(&app_dir)?;
    init_logging(&app_dir, config.log_level.to_level_filter());
    log::debug!("Using app directory {}", app_dir.display());

    match cli.command.unwrap_or(Commands::List) {
        Commands::List => {
            let controller = ListController::new(FileItemStore::in_dir(&app_dir));
            println!("{}", format_item_list(controller.items()).trim_end_matches('\n'));
            Ok(())
        }
        Commands::Add { text } => {
            let mut controller = open_controller(&app_dir, &config);
            let status = controller.add(&text)?;
            ensure_saved(status, &controller)
        }
        Commands::Remove { index } => {
            let mut controller = open_controller(&app_dir, &config);
            let status = controller.remove(index)?;
            ensure_saved(status, &controller)
        }
        Commands::Edit { index, text } => {
            let mut controller = open_controller(&app_dir, &config);
            match text {
                Some(text) => {
                    let status = controller.update(index, &text)?;
                    ensure_saved(status, &controller)
                }
                None => {
                    let editor = EditorSession::new(config.get_editor());
                    let service = EditItemService::new(editor, app_dir.clone());
                    match service.execute(&mut controller, index)? {
                        EditOutcome::Updated(status) => ensure_saved(status, &controller),
                        EditOutcome::Cancelled => {
                            println!("Edit cancelled; item unchanged");
                            Ok(())
                        }
                    }
                }
            }
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(app_dir);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.get_editor());
                println!("notifications = {}", config.notifications);
                println!("log_level = {}", config.log_level.as_str());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: simpletodo config [--list | <key> [<value>]]");
                println!("Valid keys: editor, notifications, log_level");
                Ok(())
            }
        }
    }
}

fn open_controller(app_dir: &Path, config: &Config) -> ListController<FileItemStore> {
    let mut controller = ListController::new(FileItemStore::in_dir(app_dir));
    if config.notifications {
        controller.subscribe(Box::new(ConfirmationPrinter));
    }
    controller
}

/// Turn a failed save into an error so the CLI exits non-zero.
fn ensure_saved<S: ItemStore>(status: SaveStatus, controller: &ListController<S>) -> Result<()> {
    match status {
        SaveStatus::Saved => Ok(()),
        SaveStatus::Failed => Err(TodoError::SaveFailed(controller.store().location())),
    }
}
