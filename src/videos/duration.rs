use crate::error::{RegistryError, Result};
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt},
    sequence::preceded,
    IResult, Parser,
};

/// Leading field of any width
fn number(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |s: &str| s.parse::<u32>()).parse(input)
}

/// Two-digit minutes or seconds field
fn sexagesimal(input: &str) -> IResult<&str, u32> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
        |s: &str| s.parse::<u32>(),
    )
    .parse(input)
}

/// `m:ss` or `h:mm:ss`
fn clock(input: &str) -> IResult<&str, (u32, u32, Option<u32>)> {
    (
        number,
        preceded(char(':'), sexagesimal),
        opt(preceded(char(':'), sexagesimal)),
    )
        .parse(input)
}

/// Parse a video duration string into seconds
pub fn parse_duration(s: &str) -> Result<u32> {
    let invalid = || RegistryError::InvalidDuration(s.to_string());

    let (_, (first, second, third)) = all_consuming(clock).parse(s).map_err(|_| invalid())?;
    let (hours, minutes, seconds) = match third {
        Some(seconds) => {
            if second >= 60 {
                return Err(invalid());
            }
            (first, second, seconds)
        }
        None => (0, first, second),
    };
    if seconds >= 60 {
        return Err(invalid());
    }

    hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(invalid)
}
