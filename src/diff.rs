use std::io::Write;

use log::{info, warn};

use crate::cache::CacheStore;
use crate::error::{BbwError, Result};
use crate::feed::{Writeup, WriteupFeed};
use crate::presenter::print_details;
use crate::signature::is_same;

pub const NO_NEW_WRITEUPS: &str = "No new writeups available.";
pub const HUGE_NUMBER: &str = "That's a huge number of writeups!";

/// Outcome of comparing the feed against the cached writeup.
#[derive(Debug, PartialEq, Eq)]
pub enum WriteupDiff<'a> {
    /// No cache yet: only the newest writeup is shown.
    FirstRun(&'a Writeup),
    Unchanged,
    /// The cached writeup was found after these entries.
    New(&'a [Writeup]),
    /// The cached writeup is no longer in the feed.
    CacheMissing(&'a [Writeup]),
}

pub fn compute_diff<'a>(
    feed: &'a WriteupFeed,
    cached: Option<&Writeup>,
) -> Result<WriteupDiff<'a>> {
    let latest = feed.first().ok_or(BbwError::EmptyFeed)?;
    let Some(cached) = cached else {
        return Ok(WriteupDiff::FirstRun(latest));
    };

    Ok(match feed.iter().position(|w| is_same(w, cached)) {
        Some(0) => WriteupDiff::Unchanged,
        Some(seen) => WriteupDiff::New(&feed[..seen]),
        None => WriteupDiff::CacheMissing(feed),
    })
}

/// Prints whatever is new since the last run and records the newest writeup.
pub fn run_diff(feed: &WriteupFeed, store: &CacheStore, out: &mut impl Write) -> Result<()> {
    let cached = store.load()?;
    match compute_diff(feed, cached.as_ref())? {
        WriteupDiff::FirstRun(latest) => {
            info!("First run, showing the latest writeup only");
            print_details(out, latest)?;
            store.save(latest)?;
        }
        WriteupDiff::Unchanged => writeln!(out, "{NO_NEW_WRITEUPS}")?,
        WriteupDiff::New(new) => {
            info!("{} new writeups", new.len());
            for writeup in new {
                print_details(out, writeup)?;
            }
            store.save(&feed[0])?;
        }
        WriteupDiff::CacheMissing(all) => {
            for writeup in all {
                print_details(out, writeup)?;
            }
            // TODO: keep a set of recent signatures so this case can advance the cache.
            warn!(
                "Last seen writeup is no longer in the feed; {} left unchanged",
                store.path().display()
            );
        }
    }
    Ok(())
}

/// Prints the `count` newest writeups without touching the cache.
pub fn run_override(feed: &WriteupFeed, count: usize, out: &mut impl Write) -> Result<()> {
    if count > feed.len() {
        writeln!(out, "{HUGE_NUMBER}")?;
        return Ok(());
    }
    for writeup in &feed[..count] {
        print_details(out, writeup)?;
    }
    Ok(())
}
