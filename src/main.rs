//! WorkoutMap - Map-based workout log
//!
//! Main entry point. Reads commands from stdin and prints the workout list and
//! map activity as text.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use workoutmap::command::{Command, HELP};
use workoutmap::geolocation::FixedPosition;
use workoutmap::storage::config::{load_config, StorageBackend};
use workoutmap::storage::slot::{FileStore, KeyValueStore, MemoryStore};
use workoutmap::ui::{ConsoleList, ConsoleMap};
use workoutmap::{App, Coords, PersistenceGateway, SubmitOutcome};

type ConsoleApp = App<ConsoleMap<io::Stdout>, ConsoleList<io::Stdout>>;

fn main() -> anyhow::Result<()> {
    let config = load_config().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting WorkoutMap v{}", env!("CARGO_PKG_VERSION"));

    let store: Box<dyn KeyValueStore> = match config.storage.backend {
        StorageBackend::File => Box::new(FileStore::new(config.data_dir.clone())),
        StorageBackend::Memory => Box::new(MemoryStore::new()),
    };
    tracing::info!(
        "{} storage, slot '{}'",
        config.storage.backend,
        config.storage.key
    );
    let gateway = PersistenceGateway::new(store, config.storage.key.clone());

    let mut app = App::new(
        &config,
        gateway,
        ConsoleMap::new(io::stdout()),
        ConsoleList::new(io::stdout()),
    );

    let mut position = FixedPosition::new(config.map.home.map(Coords::from));
    if let Err(e) = app.init_map(&mut position) {
        println!("{}", e);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => handle(&mut app, command),
            Err(e) => println!("{}", e),
        }
    }

    tracing::info!("Exiting");
    Ok(())
}

fn handle(app: &mut ConsoleApp, command: Command) {
    match command {
        Command::Click(coords) => {
            app.map_clicked(coords);
            println!("Location set to {}", coords);
        }
        Command::Submit(input) => match app.submit(&input) {
            Ok(SubmitOutcome::Created(workout)) => println!("Logged {}", workout.description()),
            Ok(SubmitOutcome::Edited(workout)) => println!("Updated {}", workout.id()),
            Ok(SubmitOutcome::Discarded) => println!("Workout no longer exists"),
            Err(e) => println!("{}", e),
        },
        Command::Edit(id) => match app.begin_edit(&id) {
            Some(values) => println!("Editing {}: {:?}", id, values),
            None => println!("No workout {}", id),
        },
        Command::Cancel => app.cancel_edit(),
        Command::Delete(id) => {
            if app.delete(&id).is_none() {
                println!("No workout {}", id);
            }
        }
        Command::Clear => app.clear(),
        Command::Sort => {
            if app.toggle_sort().is_none() {
                println!("Nothing to sort");
            }
        }
        Command::Overview => app.overview(),
        Command::Focus(id) => {
            if !app.focus(&id) {
                println!("No workout {}", id);
            }
        }
        Command::List => {
            for workout in app.workouts() {
                println!(
                    "{}  {}  {} km  {} min",
                    workout.id(),
                    workout.description(),
                    workout.distance(),
                    workout.duration()
                );
            }
        }
        Command::Reset => app.reset(),
        Command::Help => println!("{}", HELP),
        Command::Quit => {}
    }
}
