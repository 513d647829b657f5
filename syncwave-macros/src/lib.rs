use proc_macro::TokenStream;
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// Creates a millisecond duration at compile time from a string literal.
///
/// This macro parses the duration string at compile time and expands to a
/// plain `u32` literal, so it costs nothing at runtime and can be used in
/// `const` items and hot paths alike.
///
/// # Format
///
/// One or more `<integer><unit>` groups, optionally separated by whitespace:
/// - `h` hours
/// - `m` minutes
/// - `s` seconds
/// - `ms` milliseconds
///
/// The total must fit in a `u32` (a little over 49 days).
///
/// # Examples
///
/// ```ignore
/// use syncwave::millis;
///
/// const BLINK: u32 = millis!("250ms");
/// let fade = millis!("1s 500ms");
/// let slow = millis!("1m30s");
/// ```
#[proc_macro]
pub fn millis(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let duration_str = input.value();

    match parse_duration(&duration_str) {
        Ok(total) => {
            let expanded = quote! { #total };
            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid duration '{}': {}", duration_str, e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Hours,
    Minutes,
    Seconds,
    Millis,
}

impl Unit {
    fn factor(&self) -> u64 {
        match self {
            Unit::Hours => 3_600_000,
            Unit::Minutes => 60_000,
            Unit::Seconds => 1_000,
            Unit::Millis => 1,
        }
    }
}

fn parse_unit(s: &str) -> Result<Unit, String> {
    match s {
        "h" => Ok(Unit::Hours),
        "m" => Ok(Unit::Minutes),
        "s" => Ok(Unit::Seconds),
        "ms" => Ok(Unit::Millis),
        "" => Err("missing unit".to_string()),
        _ => Err(format!("unknown unit '{}'", s)),
    }
}

fn parse_duration(s: &str) -> Result<u32, String> {
    let mut rest = s.trim_start();
    if rest.is_empty() {
        return Err("empty string".to_string());
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_end == 0 {
            return Err(format!("expected a number at '{}'", rest));
        }
        let amount = rest[..digits_end]
            .parse::<u64>()
            .map_err(|_| format!("number '{}' is too large", &rest[..digits_end]))?;
        rest = &rest[digits_end..];

        let unit_end = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        let unit = parse_unit(&rest[..unit_end])?;
        rest = rest[unit_end..].trim_start();

        total = amount
            .checked_mul(unit.factor())
            .and_then(|ms| total.checked_add(ms))
            .ok_or_else(|| "duration overflows".to_string())?;
    }

    u32::try_from(total).map_err(|_| format!("{}ms does not fit in a u32", total))
}
