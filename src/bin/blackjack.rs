//! Console blackjack against the dealer.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjstate::{GameOptions, Session};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    info!(seed, "starting blackjack session");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::new(
        stdin,
        stdout,
        ChaCha8Rng::seed_from_u64(seed),
        GameOptions::default(),
    );

    match session.run() {
        Ok(summary) => {
            info!(?summary, "session finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "session aborted");
            ExitCode::FAILURE
        }
    }
}
