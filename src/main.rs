use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{debug, LevelFilter};

use pasteme::cli::{handle_paste, stdin_is_piped, ConnectionArgs, PasteArgs, ShareLink};
use pasteme::config::{ConfigPaths, Settings};
use pasteme::display::success_message;
use pasteme::PastemeResult;

#[derive(Parser)]
#[command(
    name = "pasteme",
    version,
    about = "Share your pastes securely",
    long_about = "Share your pastes securely. The name and body are encrypted \
                  locally with a fresh random passphrase; the server only ever \
                  receives ciphertext. The passphrase is printed as the fragment \
                  of the share link and is the only way to read the paste."
)]
struct Cli {
    #[command(flatten)]
    paste: PasteArgs,

    #[command(flatten)]
    connection: ConnectionArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(link) => {
            println!("{}", success_message(&link.url));
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!("{}", err);
            eprintln!("{}", err.user_message());
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> PastemeResult<ShareLink> {
    let paths = ConfigPaths::new()?;
    let settings = cli.connection.apply(Settings::load_or_default(&paths)?);
    debug!("Using paste endpoint {}", settings.api_url);

    let stdin = std::io::stdin();
    let piped = stdin_is_piped().then(|| stdin.lock());

    handle_paste(&cli.paste, &settings, piped)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    pretty_env_logger::formatted_timed_builder()
        .format_timestamp_millis()
        .filter_level(level)
        .parse_default_env()
        .init();
}
