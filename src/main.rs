use std::fs;
use std::io;

use clap::{Arg, Command};
use log::info;

use sneak::input::{self, Task};
use sneak::search::Strategy;
use sneak::simulation::GameSimulator;
use sneak::trace_writer;

/// Board size used by the batch driver. The library itself is generic
/// over the size; tests exercise other sizes.
const SIZE: usize = 5;

fn main() -> io::Result<()> {
    let matches = Command::new("sneak")
        .version("0.1")
        .about("Batch adversarial search for the territory-capture game")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .env("SNEAK_INPUT")
                .value_name("FILE")
                .help("Task input file")
                .num_args(1)
                .required(true),
        )
        .arg(
            Arg::new("logfile")
                .short('l')
                .long("logfile")
                .env("SNEAK_LOGFILE")
                .value_name("sneak.log")
                .help("Name of debug logfile")
                .num_args(1),
        )
        .get_matches();

    init_logging(matches.get_one::<String>("logfile"))?;

    let input_path = matches.get_one::<String>("input").unwrap();
    let text = fs::read_to_string(input_path)?;
    let task: Task<SIZE> = input::parse_task(&text)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

    match task {
        Task::SingleMove {
            algorithm,
            player,
            depth,
            board,
        } => {
            let strategy = algorithm.strategy::<SIZE>(player, depth);
            let (trace, next_state) = strategy.choose_move(&board);
            let mut state_out = fs::File::create("next_state.txt")?;
            trace_writer::write_board(&mut state_out, &next_state)?;
            if !trace.is_empty() {
                let mut trace_out = fs::File::create("traverse_log.txt")?;
                trace_writer::write_trace_log(&mut trace_out, &trace)?;
                info!("wrote next_state.txt and traverse_log.txt");
            } else {
                info!("wrote next_state.txt");
            }
        }
        Task::Simulation { players, board } => {
            let [first, second] = players;
            let simulator = GameSimulator::new(
                board,
                [
                    first.algorithm.strategy(first.player, first.depth),
                    second.algorithm.strategy(second.player, second.depth),
                ],
            );
            let states = simulator.play();
            info!("game finished after {} turns", states.len());
            let mut states_out = fs::File::create("trace_state.txt")?;
            trace_writer::write_states(&mut states_out, &states)?;
        }
    }
    Ok(())
}

fn init_logging(logfile: Option<&String>) -> io::Result<()> {
    let log_dispatcher = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{}[{}][{}] {}",
            chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
            record.target(),
            record.level(),
            message
        ))
    });

    if let Some(logfile) = logfile {
        log_dispatcher
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Debug)
                    .chain(fern::log_file(logfile)?),
            )
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Warn)
                    .chain(io::stderr()),
            )
            .apply()
            .unwrap()
    } else {
        log_dispatcher
            .level(log::LevelFilter::Warn)
            .chain(io::stderr())
            .apply()
            .unwrap()
    }
    Ok(())
}
