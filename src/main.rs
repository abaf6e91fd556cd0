use std::{io, thread};

use sparselife::{CellWindow, GameOfLife, PositionEncoder, Pos2, RunLengthEncoded};
use thiserror::Error;

mod console;
mod options;
mod stats;

use stats::{Recorder, Sample};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Args(#[from] options::ArgsError),
    #[error("failed to decode pattern: {0}")]
    Decode(#[from] sparselife::DecodeError),
}

fn args_to_alive(args: &options::Args) -> Result<Vec<Pos2>, AppError> {
    if let Some(file_name) = args.input_file() {
        let encoded_str = std::fs::read_to_string(file_name)?;
        return Ok(RunLengthEncoded::default().decode(&encoded_str)?);
    }

    // setup the alive cells based on args
    let (grid_w, grid_h) = args.grid_size();
    Ok(args.fill_mode().create_alive(grid_w, grid_h, args.seed()))
}

fn sample(game: &GameOfLife) -> Sample {
    Sample {
        alive: game.live_count(),
        active: game.active_count(),
    }
}

fn run_console(
    args: &options::Args,
    game: &mut GameOfLife,
    stats: &mut stats::SwitchRecorder,
) -> Result<(), AppError> {
    let mut console = console::ConsoleRender::new()?;
    let sleep = args.sleep();
    game.set_running(!args.paused());

    while game.generation() < args.generations() {
        while let Some(cmd) = console.poll_events()? {
            let edited = match cmd {
                console::ConsoleCommand::Exit => return Ok(()),
                console::ConsoleCommand::TogglePause => {
                    game.set_running(!game.is_running());
                    false
                }
                // edits only go to the engine while paused
                _ if game.is_running() => false,
                console::ConsoleCommand::Insert(pos) => game.edit_insert(pos),
                console::ConsoleCommand::Erase(pos) => game.edit_erase(pos),
                console::ConsoleCommand::Clear => game.edit_clear(),
                console::ConsoleCommand::Handled => false,
            };
            if edited {
                stats.observe(sample(game));
            }
        }

        if stats.has_report() {
            console.set_report(stats.report());
        }
        console.render(game)?;

        if game.step() {
            stats.record(sample(game));
        }
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
    Ok(())
}

fn run_headless(
    args: &options::Args,
    game: &mut GameOfLife,
    stats: &mut stats::SwitchRecorder,
) {
    let sleep = args.sleep();
    game.set_running(true);

    while game.generation() < args.generations() {
        // report metrics every 500ms
        if stats.has_report() {
            println!("{}", stats.report());
        }

        game.step();
        stats.record(sample(game));
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
}

fn main() -> Result<(), AppError> {
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };

    let alive = args_to_alive(&args)?;
    println!("alive: {}", alive.len());

    // setup the engine and reporting metrics
    let mut game = GameOfLife::from_alive(alive).with_strategy(args.strategy());
    let mut stats = stats::SwitchRecorder::new(sample(&game), args.stats_file().is_some());

    if args.console() {
        run_console(&args, &mut game, &mut stats)?;
    } else {
        run_headless(&args, &mut game, &mut stats);
    }
    println!("{}", stats.report());

    if let Some(file_name) = args.stats_file() {
        stats.save(file_name)?;
    }
    if args.print() {
        println!("{}", CellWindow::fit(game.live_set()));
    }
    if let Some(file_name) = args.output_file() {
        let encoder = RunLengthEncoded::default().set_name("sparselife generated pattern");
        let encoded_game = encoder.encode(&game.take().sorted());
        std::fs::write(file_name, encoded_game)?;
    }

    Ok(())
}
