use crate::config::DEFAULT_RATE;
use crate::error::RateError;

pub const RATE_PARAM: &str = "rate";

/// First `rate` value among decoded query pairs, if any.
pub fn rate_param(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == RATE_PARAM)
        .map(|(_, value)| value.as_str())
}

/// Parses the growth rate, falling back to `DEFAULT_RATE` when the parameter
/// is missing or empty. There is no domain check, but a finite literal that
/// overflows to infinity is rejected; only an explicit `inf`/`infinity`
/// spelling yields an infinite rate.
pub fn resolve_rate(raw: Option<&str>) -> Result<f64, RateError> {
    let input = match raw {
        None | Some("") => return Ok(DEFAULT_RATE),
        Some(input) => input,
    };

    let rate = input.parse::<f64>().map_err(|source| RateError::Parse {
        input: input.to_string(),
        source,
    })?;
    if rate.is_infinite() && !spells_infinity(input) {
        return Err(RateError::OutOfRange(input.to_string()));
    }
    Ok(rate)
}

fn spells_infinity(input: &str) -> bool {
    let unsigned = input.strip_prefix(['+', '-']).unwrap_or(input);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
