use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::error;

use display_tuner::backends::{self, DisplayBackend};
use display_tuner::{apply, inventory, ChangeRequest};

fn cli() -> Command<'static> {
    let backend_arg = Arg::new("backend")
        .long("backend")
        .takes_value(true)
        .value_parser(["sway", "xorg"])
        .help("Display backend to use instead of auto-detection");

    Command::new("display-tuner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("List attached displays and change their resolution and DPI scaling")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List display sources with their ids, resolution and scaling")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the source list as JSON"),
                )
                .arg(backend_arg.clone()),
        )
        .subcommand(
            Command::new("set")
                .about("Apply a resolution and/or scaling change")
                .arg(
                    Arg::new("id")
                        .long("id")
                        .takes_value(true)
                        .value_parser(clap::value_parser!(u32))
                        .help("Target a single source by id (see list)"),
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .help("Target every active source"),
                )
                .arg(
                    Arg::new("width")
                        .long("width")
                        .takes_value(true)
                        .value_parser(clap::value_parser!(u32))
                        .help("New horizontal resolution in pixels"),
                )
                .arg(
                    Arg::new("height")
                        .long("height")
                        .takes_value(true)
                        .value_parser(clap::value_parser!(u32))
                        .help("New vertical resolution in pixels"),
                )
                .arg(
                    Arg::new("scaling")
                        .long("scaling")
                        .takes_value(true)
                        .value_parser(clap::value_parser!(u32))
                        .help("New DPI scaling percentage (100 = unscaled)"),
                )
                .arg(
                    Arg::new("scaling-only")
                        .long("scaling-only")
                        .action(ArgAction::SetTrue)
                        .help("Change scaling without touching resolution"),
                )
                .arg(backend_arg),
        )
}

fn pick_backend(matches: &ArgMatches) -> display_tuner::Result<Box<dyn DisplayBackend>> {
    match matches.get_one::<String>("backend") {
        Some(name) => backends::by_name(name),
        None => backends::detect(),
    }
}

fn run_list(matches: &ArgMatches) -> display_tuner::Result<i32> {
    let mut backend = pick_backend(matches)?;
    let sources = inventory::enumerate(backend.as_mut())?;

    if matches.get_flag("json") {
        let json = serde_json::to_string_pretty(&sources)
            .expect("display sources serialize to JSON");
        println!("{}", json);
    } else {
        for source in &sources {
            println!("{}", source);
        }
    }
    Ok(0)
}

fn run_set(matches: &ArgMatches) -> display_tuner::Result<i32> {
    let request = ChangeRequest::from_flags(
        matches.get_one::<u32>("id").copied(),
        matches.get_flag("all"),
        matches.get_one::<u32>("width").copied(),
        matches.get_one::<u32>("height").copied(),
        matches.get_one::<u32>("scaling").copied(),
        matches.get_flag("scaling-only"),
    )?;

    let mut backend = pick_backend(matches)?;
    let sources = inventory::enumerate(backend.as_mut())?;
    let outcome = apply::apply(&request, &sources, backend.as_mut())?;

    for result in &outcome.results {
        match &result.error_detail {
            None => println!("[id:{}] ok", result.source_id),
            Some(detail) => println!("[id:{}] failed: {}", result.source_id, detail),
        }
    }

    Ok(if outcome.all_succeeded() { 0 } else { 1 })
}

fn main() {
    pretty_env_logger::init();

    let matches = cli().get_matches();
    let result = match matches.subcommand() {
        Some(("list", sub)) => run_list(sub),
        Some(("set", sub)) => run_set(sub),
        _ => unreachable!("subcommand is required"),
    };

    // 0: every target succeeded; 1: at least one apply failure;
    // 2: validation or query error before anything was touched.
    let code = match result {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            2
        }
    };
    process::exit(code);
}
