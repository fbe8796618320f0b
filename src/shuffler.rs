// mixshuffle: print the integers 1..N in random order (shuffler)
// one of the mixshuffle sources: see lib.rs for the library entry point
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use crate::error::{Result, ShuffleError};
use rand::{seq::SliceRandom, Rng};
use std::io::{self, Write};

// parse the count argument N
// surrounding whitespace is ignored and a leading sign accepted; negative values
// are valid integers and simply produce an empty sequence
pub fn parse_count(arg: &str) -> Result<i64> {
    arg.trim()
        .parse::<i64>()
        .map_err(|source| ShuffleError::Parse {
            input: arg.to_string(),
            source,
        })
}

// build the ordered sequence 1..=n, empty when n < 1
pub fn ordered_sequence(n: i64) -> Result<Vec<u64>> {
    if n < 1 {
        return Ok(Vec::new());
    }

    // reserve up front so an impossible length is an error, not an allocator panic
    let len = usize::try_from(n).map_err(|_| ShuffleError::TooLarge { count: n })?;
    let mut seq: Vec<u64> = Vec::new();
    seq.try_reserve_exact(len)
        .map_err(|_| ShuffleError::TooLarge { count: n })?;
    seq.extend(1..=n as u64);
    Ok(seq)
}

// permute a sequence in place, uniformly over all orderings
pub fn shuffle_sequence<R: Rng + ?Sized>(seq: &mut [u64], rng: &mut R) {
    seq.shuffle(rng);
}

// build 1..=n and shuffle it with the given random source
pub fn mixed_sequence<R: Rng + ?Sized>(n: i64, rng: &mut R) -> Result<Vec<u64>> {
    let mut seq = ordered_sequence(n)?;
    shuffle_sequence(&mut seq, rng);
    Ok(seq)
}

// write a sequence as one space-separated line terminated by a newline
// elements are streamed one at a time; an empty sequence writes just "\n"
pub fn write_sequence<W: Write + ?Sized>(out: &mut W, seq: &[u64]) -> io::Result<()> {
    let mut iter = seq.iter();
    if let Some(first) = iter.next() {
        write!(out, "{}", first)?;
        for value in iter {
            write!(out, " {}", value)?;
        }
    }
    writeln!(out)
}
