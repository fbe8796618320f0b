// mixshuffle: print the integers 1..N in random order (error types)
// one of the mixshuffle sources: see lib.rs for the library entry point
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShuffleError {
    // count argument was not a base-10 integer
    #[error("invalid count \"{input}\"")]
    Parse {
        input: String,
        #[source]
        source: ParseIntError,
    },

    // count parsed but 1..=count cannot be held in memory
    #[error("count {count} is too large for in-memory shuffle")]
    TooLarge { count: i64 },
}

pub type Result<T> = std::result::Result<T, ShuffleError>;
