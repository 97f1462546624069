use crate::has_long_prefix;
use crate::has_short_prefix;
use crate::is_numerical;
use crate::ASSIGNMENT;
use crate::FILE_OPERAND;
use crate::LONG_PREFIX;
use crate::SHORT_PREFIX;
use crate::STOP_OPERAND;

/// Normalize raw arguments so every flag occurrence is its own token
///
/// Single left-to-right pass:
/// - everything after the first [`STOP_OPERAND`] is passed through untouched
/// - empty tokens before it are dropped
/// - [`FILE_OPERAND`] and bare prefixes are values and never split
/// - `--name=value` becomes `--name`, `value` (split at the first `=`; empty
///   halves are dropped)
/// - `--=value` has no name and is passed through whole, so it can never
///   produce a [`STOP_OPERAND`]
/// - `-abc` becomes `-a`, `-b`, `-c` unless it [looks numeric][is_numerical]
pub fn expand<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut expanded = Vec::new();
    let mut stopped = false;

    for token in tokens {
        let token = token.into();
        if stopped {
            expanded.push(token);
            continue;
        }
        if token.is_empty() {
            continue;
        }
        if token == STOP_OPERAND {
            expanded.push(token);
            stopped = true;
            continue;
        }
        if token == FILE_OPERAND || token == SHORT_PREFIX || token == LONG_PREFIX {
            expanded.push(token);
            continue;
        }

        let nameless = token
            .strip_prefix(LONG_PREFIX)
            .map_or(false, |rest| rest.starts_with(ASSIGNMENT));
        if nameless {
            expanded.push(token);
        } else if has_long_prefix(&token) {
            expanded.extend(
                token
                    .splitn(2, ASSIGNMENT)
                    .filter(|piece| !piece.is_empty())
                    .map(ToOwned::to_owned),
            );
        } else if has_short_prefix(&token) && !is_numerical(&token) {
            expanded.extend(
                token[SHORT_PREFIX.len()..]
                    .chars()
                    .map(|c| format!("{SHORT_PREFIX}{c}")),
            );
        } else {
            expanded.push(token);
        }
    }

    expanded
}
