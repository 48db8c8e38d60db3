use anyhow::Result;
use clap::{crate_version, App, Arg, ArgMatches};
use std::path::Path;
use team_roster::build::build_roster;
use team_roster::config::Config;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let matches = App::new("team-roster")
        .version(crate_version!())
        .about("Renders the team roster into HTML fragments")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .help("Roster file to load instead of searching for `team.yaml`"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("PATH")
                .takes_value(true)
                .help("Where to write the fragments"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log every rendered entry"),
        )
        .get_matches();

    let filter = if matches.is_present("verbose") {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    if let Err(e) = run(&matches) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = Config::load(
        matches.value_of("config").map(Path::new),
        matches.value_of("output").map(Path::new),
        &std::env::current_dir()?,
    )?;
    build_roster(&config)?;
    Ok(())
}
