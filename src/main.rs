use std::io::Write;

use clap::Parser;
use color_eyre::Result;
use log::debug;

mod cache;
mod config;
mod diff;
mod error;
mod feed;
mod presenter;
mod signature;

use cache::CacheStore;
use config::Config;
use feed::FeedClient;

/// Get list of latest bug bounty writeups.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Print the N most recent writeups instead of only the new ones.
    count: Option<usize>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut out = std::io::stdout().lock();
    presenter::print_banner(&mut out)?;

    let config = Config::from_env()?;
    debug!("{config:?}");
    let feed = FeedClient::new(&config)?.fetch()?;

    match args.count {
        Some(count) => diff::run_override(&feed, count, &mut out)?,
        None => {
            let store = CacheStore::new(config.cache_path()?);
            diff::run_diff(&feed, &store, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_argument_runs_diff_mode() {
        let args = Args::try_parse_from(["bbw"]).unwrap();
        assert_eq!(args.count, None);
    }

    #[test]
    fn numeric_argument_sets_count() {
        let args = Args::try_parse_from(["bbw", "3"]).unwrap();
        assert_eq!(args.count, Some(3));
    }

    #[test]
    fn non_numeric_argument_is_rejected() {
        assert!(Args::try_parse_from(["bbw", "abc"]).is_err());
        assert!(Args::try_parse_from(["bbw", "-1"]).is_err());
    }
}
