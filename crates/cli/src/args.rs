//! Tokenizing and value parsing for shell input.

use anyhow::{Context, anyhow, bail};

use stockroom_inventory::ExpirationDate;

/// Oldest year the shell accepts for an expiration date.
pub const MIN_YEAR: i32 = 1900;

/// Split a line on whitespace; double quotes group words (`"Wheat flour"`).
pub fn split_args(line: &str) -> anyhow::Result<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        bail!("unterminated quote");
    }
    if has_token {
        args.push(current);
    }
    Ok(args)
}

/// Parse `day-month-year` or `day/month/year`.
///
/// The year must be at least [`MIN_YEAR`] and the day must exist in that month.
pub fn parse_date(raw: &str) -> anyhow::Result<ExpirationDate> {
    let parts: Vec<&str> = raw.split(['-', '/']).collect();
    let [day, month, year] = parts.as_slice() else {
        bail!("date `{raw}` must look like day-month-year");
    };

    let day: u32 = day.parse().with_context(|| format!("invalid day in `{raw}`"))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("invalid month in `{raw}`"))?;
    let year: i32 = year.parse().with_context(|| format!("invalid year in `{raw}`"))?;

    if year < MIN_YEAR {
        bail!("year {year} is before {MIN_YEAR}");
    }

    Ok(ExpirationDate::from_dmy(day, month, year)?)
}

/// A finite number; used for thresholds.
pub fn parse_number(raw: &str) -> anyhow::Result<f64> {
    let value: f64 = raw
        .parse()
        .map_err(|_| anyhow!("`{raw}` is not a number"))?;
    if !value.is_finite() {
        bail!("`{raw}` is not a finite number");
    }
    Ok(value)
}

/// A strictly positive number; used for stock quantities.
pub fn parse_quantity(raw: &str) -> anyhow::Result<f64> {
    let value = parse_number(raw)?;
    if value <= 0.0 {
        bail!("quantity must be greater than zero, got {raw}");
    }
    Ok(value)
}
