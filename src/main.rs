#![deny(clippy::unwrap_used)]
#![warn(clippy::all, clippy::perf, clippy::missing_const_for_fn)]

use clap::Parser;
use log::{debug, LevelFilter};
use simple_logger::SimpleLogger;
use std::io::BufWriter;

use volumetric_core::prelude::*;
use volumetric_shared::prelude::*;

mod test;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(required = true, help = "The input files and their units.\nBy default it takes a list of json strings ({\"file_path\": \"part.stl\", \"units\": \"in\"|\"mm\"}).\nSee simple_input for an alternative command.")]
    input: Vec<String>,
    #[arg(short = 'v', action = clap::ArgAction::Count, conflicts_with = "message", help = "Sets the level of verbosity")]
    verbose: u8,
    #[arg(
        short = 'm',
        help = "Use the Message System (useful for interprocess communication)"
    )]
    message: bool,
    #[arg( long="simple_input",help = "The input should only be a list of files; each is assumed to use the units given by --units.")]
    simple_input: bool,
    #[arg(
        short = 'u',
        long = "units",
        default_value = "in",
        help = "Units for files given through simple_input"
    )]
    units: String,
    #[arg(
        short = 'j',
        help = "Sets the number of threads to use in the thread pool (defaults to number of CPUs)"
    )]
    thread_count: Option<usize>,
}

fn main() {
    let args: Args = Args::parse();

    // set number of cores for rayon
    if let Some(number_of_threads) = args.thread_count {
        rayon::ThreadPoolBuilder::new()
            .num_threads(number_of_threads)
            .build_global()
            .expect("Only call to build global");
    }

    let send_messages = args.message;

    if !send_messages {
        // Vary the output based on how many times the user used the "verbose" flag
        // (i.e. 'myprog -v -v -v' or 'myprog -vvv' vs 'myprog -v'

        SimpleLogger::new()
            .with_level(match args.verbose {
                0 => LevelFilter::Error,
                1 => LevelFilter::Warn,
                2 => LevelFilter::Info,
                3 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            })
            .init()
            .expect("Only Logger Setup");
    }

    display_state_update("Loading Inputs", send_messages);

    let inputs = handle_err_or_return(
        input::parse_inputs(args.input, args.simple_input, &args.units),
        send_messages,
    );

    let files = handle_err_or_return(input::load_files(inputs), send_messages);

    debug!("Loaded {} files", files.len());

    let results = if send_messages {
        volume_pipeline(&files, &mut MessageCallbacks)
    } else {
        volume_pipeline(&files, &mut ProfilingCallbacks::new())
    };

    if send_messages {
        let message = Message::Volumes(results);
        bincode::serialize_into(BufWriter::new(std::io::stdout()), &message)
            .expect("Write Limit should not be hit");
    }
}

/// Callbacks for a host GUI driving this process over stdout
struct MessageCallbacks;

impl PipelineCallbacks for MessageCallbacks {
    fn handle_state_update(&mut self, state_message: &str) {
        display_state_update(state_message, true);
    }

    fn handle_volumes(&mut self, results: &[Result<VolumeResult, EstimatorErrors>]) {
        for warning in suspect_warnings(results) {
            send_warning_message(warning);
        }
    }
}

fn handle_err_or_return<T>(res: Result<T, EstimatorErrors>, send_message: bool) -> T {
    match res {
        Ok(data) => data,
        Err(estimator_error) => {
            if send_message {
                send_error_message(estimator_error);
            } else {
                show_error_message(&estimator_error);
            }
            std::process::exit(-1);
        }
    }
}
