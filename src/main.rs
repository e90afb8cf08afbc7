use env_logger::{fmt::Formatter, Builder, Env};
use log::Record;
use qpick::app::{run, Outcome};
use qpick::qpick::seeded_rng;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf: &mut Formatter, record: &Record| {
            writeln!(
                buf,
                "[{}] [{}] - {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        })
        .init();

    let mut rng = seeded_rng();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(std::env::args().skip(1), &mut rng, &mut out) {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            log::error!("Failed to write output: {}", err);
            Outcome::Failure.into()
        }
    }
}
