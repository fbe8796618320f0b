// mixshuffle: print the integers 1..N in random order
// usage: mixshuffle [N]
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use std::{
    env,
    io::{self, BufWriter},
    process,
};

// mainline - parse N, shuffle 1..N, output it
fn main() {
    // diagnostics go to stderr, quiet unless RUST_LOG asks for more
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = mixshuffle::run(env::args_os(), &mut out);
    drop(out);

    if let Err(e) = result {
        // help, version and usage errors keep clap's own output and exit codes
        if let Some(clap_err) = e.downcast_ref::<clap::Error>() {
            clap_err.exit();
        }
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
