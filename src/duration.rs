use std::io::{Result, Error, ErrorKind};
use std::time::Duration;

static MINUTE: u64 = 60;
static HOUR: u64 = 60 * MINUTE;
static DAY: u64 = 24 * HOUR;

// Parses compound duration strings such as "5s", "500ms" or "1m10s".
pub fn parse(s: &str) -> Result<Duration> {
    let s = s.trim();

    if s.is_empty() {
        return Err(invalid(s));
    }

    let mut res = Duration::ZERO;
    let mut rest = s;

    while !rest.is_empty() {
        let digits = rest.find(|ch: char| !ch.is_ascii_digit()).unwrap_or(rest.len());
        if digits == 0 || digits == rest.len() {
            return Err(invalid(s));
        }

        let (num, tail) = rest.split_at(digits);
        let n: u64 = num.parse().map_err(|_| invalid(s))?;

        let unit_len = tail.find(|ch: char| ch.is_ascii_digit()).unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);

        res += to_duration(n, unit).ok_or_else(|| invalid(s))?;
        rest = tail;
    }

    Ok(res)
}

fn to_duration(n: u64, unit: &str) -> Option<Duration> {
    match unit {
        "ns" => Some(Duration::from_nanos(n)),
        "µs" | "us" => Some(Duration::from_micros(n)),
        "ms" => Some(Duration::from_millis(n)),
        "s" | "S" => Some(Duration::from_secs(n)),
        "m" | "M" => Some(Duration::from_secs(n * MINUTE)),
        "h" | "H" => Some(Duration::from_secs(n * HOUR)),
        "d" | "D" => Some(Duration::from_secs(n * DAY)),
        _ => None,
    }
}

fn invalid(s: &str) -> Error {
    Error::new(ErrorKind::InvalidInput, format!("{} is an invalid duration", s))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn time_units() {
        assert_eq!(parse("12s").ok(), Some(Duration::from_secs(12)));
        assert_eq!(parse("500ms").ok(), Some(Duration::from_millis(500)));
        assert_eq!(parse("1m10s").ok(), Some(Duration::from_secs(70)));
        assert_eq!(parse("1h15m10s").ok(), Some(Duration::from_secs(HOUR + (15 * MINUTE) + 10)));

        assert_eq!(parse("1G").ok(), None);
        assert_eq!(parse("1h34m23g").ok(), None);
        assert_eq!(parse("12").ok(), None);
        assert_eq!(parse("s").ok(), None);
        assert_eq!(parse("").ok(), None);
    }
}
