use proc_macro::TokenStream;
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// Converts a decibel literal to a linear gain at compile time.
///
/// The string is parsed when the crate is compiled and the macro expands to
/// the `f64` value `10^(db / 20)`, so it costs nothing at runtime.
///
/// # Format
///
/// `<number>[ ]["dB"]`: a decimal number with an optional sign, optionally
/// followed by the unit `dB` (any case, with or without a space). The value
/// must be finite.
///
/// # Examples
///
/// ```ignore
/// use scalekit::db;
///
/// let unity = db!("0 dB");     // 1.0
/// let half = db!("-6.0206dB"); // ~0.5
/// let plain = db!("+20");      // 10.0
/// ```
#[proc_macro]
pub fn db(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let db_str = input.value();

    match parse_decibels(&db_str).and_then(gain_for) {
        Ok(gain) => {
            let expanded = quote! {
                { #gain }
            };
            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid decibel string '{}': {}", db_str, e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

fn parse_decibels(s: &str) -> Result<f64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty string".to_string());
    }

    let number = match s.len().checked_sub(2) {
        Some(split) if s.is_char_boundary(split) && s[split..].eq_ignore_ascii_case("db") => {
            s[..split].trim_end()
        }
        _ => s,
    };
    if number.is_empty() {
        return Err("missing value".to_string());
    }

    let value = number
        .parse::<f64>()
        .map_err(|_| format!("invalid number '{}'", number))?;

    if !value.is_finite() {
        return Err(format!("value {} is not finite", value));
    }

    Ok(value)
}

fn decibels_to_linear(decibels: f64) -> f64 {
    10.0_f64.powf(0.05 * decibels)
}

fn gain_for(decibels: f64) -> Result<f64, String> {
    let gain = decibels_to_linear(decibels);
    if gain.is_finite() {
        Ok(gain)
    } else {
        Err(format!("{} dB overflows the linear gain", decibels))
    }
}
