use crate::qpick::{Entry, Pick};
use std::io::{self, Write};

const NAME_WIDTH: usize = 20;
const RULE_WIDTH: usize = 40;

pub const HELP: &str = "Usage: qpick [...names]

Randomly picks a name from a list.

By default, all names have an equal chance (q=1.0) of being picked.
To override the chance for a name, place a '-q' and a number before it.

Examples:
    qpick apple banana pear
        apple : banana : pear = 1 : 1 : 1 chance of being picked

    qpick dog -q 1.2 cat -q0.1 mouse
        dog : cat : mouse = 1 : 1.2 : 0.1 chance of being picked

To see this message, use -h or --help.";

/// Percentage chance of each entry being picked, in entry order.
pub fn chances(entries: &[Entry]) -> Vec<f64> {
    let total: f64 = entries.iter().map(|entry| entry.weight).sum();
    entries
        .iter()
        .map(|entry| entry.weight / total * 100.0)
        .collect()
}

///
/// Writes each entry's chance, a rule, and then the picked name with its roll.
///
pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    entries: &[Entry],
    pick: &Pick,
) -> io::Result<()> {
    for (entry, chance) in entries.iter().zip(chances(entries)) {
        writeln!(
            out,
            "{:<width$}: {:>7.3}%",
            entry.name,
            chance,
            width = NAME_WIDTH
        )?;
    }
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "{} (rolled {:.6})", pick.entry.name, pick.roll)
}
