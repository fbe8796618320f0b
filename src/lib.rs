// mixshuffle: print the integers 1..N in random order (library)
// a message-order generator: emits sequence numbers 1..N mixed up, one line
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

pub mod error;
pub mod shuffler;

use anyhow::{Context, Error, Result};
use clap::{Arg, Command};
use log::debug;
use rand::thread_rng;
use std::{ffi::OsString, io::Write};

pub use error::ShuffleError;
pub use shuffler::{mixed_sequence, ordered_sequence, parse_count, shuffle_sequence, write_sequence};

// constants
const COUNT_PARAM: &str = "count";
const IGNORED_PARAM: &str = "ignored";

// command line data
struct CliOpts {
    count: Option<String>,
}

// command-line interface definition
fn command() -> Command {
    Command::new("mixshuffle")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the integers 1 through N in random order on one line")
        .arg(
            Arg::new(COUNT_PARAM)
                .value_name("N")
                .help("upper bound of the range to shuffle; no output if omitted")
                .num_args(1)
                .required(false)
                .allow_negative_numbers(true),
        )
        .arg(
            // anything after N is accepted and ignored
            Arg::new(IGNORED_PARAM)
                .num_args(0..)
                .required(false)
                .allow_hyphen_values(true)
                .hide(true),
        )
}

// process command line and return values
fn process_cli<I, T>(args: I) -> Result<CliOpts, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    Ok(CliOpts {
        count: matches.get_one::<String>(COUNT_PARAM).cloned(),
    })
}

// run: library side of command line called from main()
pub fn run<I, T, W>(args: I, out: &mut W) -> Result<(), Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write + ?Sized,
{
    let cli = process_cli(args)?;

    // no count given: nothing to do
    let Some(count_arg) = cli.count else {
        debug!("no count argument, exiting without output");
        return Ok(());
    };
    let count = parse_count(&count_arg)?;
    debug!("count {}", count);

    // build and shuffle 1..=count
    let mut rng = thread_rng();
    let seq = mixed_sequence(count, &mut rng)?;
    debug!("shuffled {} elements", seq.len());

    // print it
    write_sequence(out, &seq).context("failed to write sequence to standard output")?;
    out.flush().context("failed to flush standard output")?;

    Ok(())
}
