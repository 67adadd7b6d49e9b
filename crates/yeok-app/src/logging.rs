use tracing_subscriber::EnvFilter;
use yeok_config::Config;

/// Install the global subscriber; logs go to stderr so stdout stays for the shell
pub fn init(config: &Config, verbose: u8) {
    let level = match verbose {
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let json = config.log_json || !atty::is(atty::Stream::Stderr);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("failed to initialize logging: {e}");
    }
}
