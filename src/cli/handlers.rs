use std::path::Path;

use crate::io::config_io::read_config;
use crate::io::store::{BoardStore, StoreError};
use crate::model::{Board, EntryKind};
use crate::ops::board_ops::{self, BoardError};

use super::commands::{Cli, Commands, EventCmd, FocusPeriod, LinkCmd, TaskCmd};
use super::output;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("could not serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load the board, run one command against it, save if it mutated.
pub fn dispatch(cli: Cli) -> Result<(), CliError> {
    let config = read_config();
    let dir_override = cli.data_dir.as_deref().map(Path::new);
    let store = BoardStore::resolve(dir_override, &config);
    let mut board = store.load();

    let Some(command) = cli.command else {
        return Ok(());
    };

    match command {
        Commands::Show => {
            if cli.json {
                output::print_board_json(&board)?;
            } else {
                output::print_card(&board);
            }
        }
        Commands::Task(cmd) => handle_task(cmd, &mut board, &store, cli.json)?,
        Commands::Event(cmd) => handle_event(cmd, &mut board, &store, cli.json)?,
        Commands::Link(cmd) => handle_link(cmd, &mut board, &store, cli.json)?,
        Commands::Focus(args) => {
            let field: fn(&Board) -> &str = match args.period {
                FocusPeriod::Week => |b| &b.week_focus,
                FocusPeriod::Month => |b| &b.month_focus,
                FocusPeriod::Quarter => |b| &b.quarter_focus,
            };
            match args.text {
                Some(text) => {
                    match args.period {
                        FocusPeriod::Week => board.week_focus = text,
                        FocusPeriod::Month => board.month_focus = text,
                        FocusPeriod::Quarter => board.quarter_focus = text,
                    }
                    store.save(&board)?;
                    println!("{}", field(&board));
                }
                None => println!("{}", field(&board)),
            }
        }
        Commands::Quote(args) => match args.text {
            Some(text) => {
                board.quote = text;
                store.save(&board)?;
                println!("{}", board.quote);
            }
            None => println!("{}", board.quote),
        },
    }

    Ok(())
}

fn handle_task(
    cmd: TaskCmd,
    board: &mut Board,
    store: &BoardStore,
    json: bool,
) -> Result<(), CliError> {
    match cmd {
        TaskCmd::Add(args) => {
            let id = board_ops::add_task(board, &args.text)?;
            store.save(board)?;
            report_id(json, "added task", id)?;
        }
        TaskCmd::Done(args) => {
            let completed = board_ops::toggle_task(board, args.id)?;
            store.save(board)?;
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "id": args.id, "completed": completed })
                );
            } else if completed {
                println!("task {} done", args.id);
            } else {
                println!("task {} reopened", args.id);
            }
        }
        TaskCmd::Edit(args) => {
            board_ops::edit_task(board, args.id, &args.text)?;
            store.save(board)?;
            report_id(json, "edited task", args.id)?;
        }
        TaskCmd::Rm(args) => {
            board_ops::remove_task(board, args.id)?;
            store.save(board)?;
            report_id(json, "removed task", args.id)?;
        }
    }
    Ok(())
}

fn handle_event(
    cmd: EventCmd,
    board: &mut Board,
    store: &BoardStore,
    json: bool,
) -> Result<(), CliError> {
    match cmd {
        EventCmd::Add(args) => {
            let kind = EntryKind::parse(&args.kind)
                .ok_or_else(|| BoardError::UnknownKind(args.kind.clone()))?;
            let id = board_ops::add_event(board, &args.time, &args.title, kind)?;
            store.save(board)?;
            report_id(json, "added event", id)?;
        }
        EventCmd::Rm(args) => {
            board_ops::remove_event(board, args.id)?;
            store.save(board)?;
            report_id(json, "removed event", args.id)?;
        }
    }
    Ok(())
}

fn handle_link(
    cmd: LinkCmd,
    board: &mut Board,
    store: &BoardStore,
    json: bool,
) -> Result<(), CliError> {
    match cmd {
        LinkCmd::Add(args) => {
            let id = board_ops::add_link(board, &args.title, &args.url)?;
            store.save(board)?;
            report_id(json, "added link", id)?;
        }
        LinkCmd::Rm(args) => {
            board_ops::remove_link(board, args.id)?;
            store.save(board)?;
            report_id(json, "removed link", args.id)?;
        }
    }
    Ok(())
}

fn report_id(json: bool, verb: &str, id: u64) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::json!({ "id": id }));
    } else {
        println!("{} {}", verb, id);
    }
    Ok(())
}
