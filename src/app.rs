use crate::qpick::{parse_args, weighted_random, ParsedArgs};
use crate::report::{write_report, HELP};
use rand::Rng;
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> ExitCode {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::from(1),
        }
    }
}

///
/// Parses `tokens`, picks a name with `rng` and writes everything the user sees to `out`.
///
/// User errors are written to `out` and reported as [`Outcome::Failure`]; only
/// failing to write is an `Err`.
///
pub fn run<I, S, R, W>(tokens: I, rng: &mut R, out: &mut W) -> io::Result<Outcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    let entries = match parse_args(tokens) {
        Ok(ParsedArgs::Entries(entries)) if !entries.is_empty() => entries,
        Ok(_) => {
            writeln!(out, "{}", HELP)?;
            return Ok(Outcome::Success);
        }
        Err(err) => {
            log::debug!("Parse failed: {:?}", err);
            writeln!(out, "{}", err)?;
            writeln!(out, "Pass -h or --help to see usage")?;
            return Ok(Outcome::Failure);
        }
    };

    let pick = match weighted_random(&entries, rng) {
        Ok(pick) => pick,
        Err(err) => {
            log::debug!("Selection failed: {:?}", err);
            writeln!(out, "{}", err)?;
            return Ok(Outcome::Failure);
        }
    };
    log::info!("Picked {}", pick.entry);
    write_report(out, &entries, &pick)?;
    Ok(Outcome::Success)
}
