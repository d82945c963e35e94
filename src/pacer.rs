use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::info;

/// Uniform draw from the closed interval [min_secs, max_secs]. An external
/// config may supply the bounds inverted; they are swapped rather than
/// panicking mid-run.
pub fn pick_delay(min_secs: f64, max_secs: f64, rng: &mut impl Rng) -> f64 {
    let (low, high) = if min_secs <= max_secs {
        (min_secs, max_secs)
    } else {
        (max_secs, min_secs)
    };
    rng.gen_range(low..=high)
}

/// Sleeps a randomized duration so runs don't land on a fixed cadence.
pub fn rate_limit(min_secs: f64, max_secs: f64, rng: &mut impl Rng) {
    let delay = pick_delay(min_secs, max_secs, rng);
    info!("sleeping for {delay:.2} seconds to avoid detection");
    thread::sleep(Duration::from_secs_f64(delay));
}
