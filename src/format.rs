//! printf-style template substitution.
//!
//! Substitution never fails. Problems are reported inline in the produced
//! text, the same way the printf family reports them:
//!
//! - `%!d(MISSING)` when a directive has no argument left,
//! - `%!d(string=abc)` when the verb does not apply to the argument,
//! - `%!(NOVERB)` for a trailing lone `%`,
//! - `%!(BADWIDTH)` / `%!(BADPREC)` for a width or precision above
//!   [`MAX_WIDTH`], in place of the whole directive,
//! - `%!(EXTRA int=1, string=a)` for surplus arguments.

use crate::arg::Arg;
use std::fmt::Write;
use std::iter::Peekable;
use std::str::Chars;

/// Largest accepted width or precision. `core::fmt` limits precision to 16 bits.
pub const MAX_WIDTH: usize = u16::MAX as usize;

#[derive(Debug, Default)]
struct Directive {
    minus: bool,
    plus: bool,
    sharp: bool,
    zero: bool,
    space: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

impl Directive {
    fn out_of_range(&self) -> Option<&'static str> {
        if self.width.is_some_and(|w| w > MAX_WIDTH) {
            Some("%!(BADWIDTH)")
        } else if self.precision.is_some_and(|p| p > MAX_WIDTH) {
            Some("%!(BADPREC)")
        } else {
            None
        }
    }
}

enum Piece {
    Text(String),
    Number {
        negative: bool,
        prefix: &'static str,
        digits: String,
        /// `false` for integers with an explicit precision.
        zero_pad: bool,
    },
}

/// Substitutes `args` into `template` positionally.
pub fn sprintf(template: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut remaining = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let directive = parse_directive(&mut chars);
        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if let Some(marker) = directive.out_of_range() {
            out.push_str(marker);
            if verb != '%' {
                remaining.next();
            }
            continue;
        }
        if verb == '%' {
            out.push('%');
            continue;
        }

        match remaining.next() {
            Some(arg) => out.push_str(&format_arg(verb, &directive, arg)),
            None => {
                let _ = write!(out, "%!{verb}(MISSING)");
            }
        }
    }

    let extra: Vec<String> = remaining
        .map(|arg| format!("{}={}", arg.type_name(), arg))
        .collect();
    if !extra.is_empty() {
        let _ = write!(out, "%!(EXTRA {})", extra.join(", "));
    }

    out
}

fn parse_directive(chars: &mut Peekable<Chars<'_>>) -> Directive {
    let mut directive = Directive::default();
    while let Some(&flag) = chars.peek() {
        match flag {
            '-' => directive.minus = true,
            '+' => directive.plus = true,
            '#' => directive.sharp = true,
            '0' => directive.zero = true,
            ' ' => directive.space = true,
            _ => break,
        }
        chars.next();
    }
    directive.width = read_number(chars);
    if chars.peek() == Some(&'.') {
        chars.next();
        directive.precision = Some(read_number(chars).unwrap_or(0));
    }
    directive
}

fn read_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
        chars.next();
    }
    value
}

fn format_arg(verb: char, directive: &Directive, arg: &Arg) -> String {
    let piece = match (verb, arg) {
        ('v' | 's', Arg::Str(s) | Arg::Display(s)) => {
            Some(Piece::Text(truncate(s, directive.precision)))
        }
        ('v' | 't', Arg::Bool(b)) => Some(Piece::Text(b.to_string())),
        ('v', Arg::Int(n)) => Some(integer(*n, 10, directive)),
        ('v', Arg::Float(x)) => Some(float(*x, 'g', directive)),
        ('q', Arg::Str(s) | Arg::Display(s)) => Some(Piece::Text(format!("{s:?}"))),
        ('d', Arg::Int(n)) => Some(integer(*n, 10, directive)),
        ('b', Arg::Int(n)) => Some(integer(*n, 2, directive)),
        ('o', Arg::Int(n)) => Some(integer(*n, 8, directive)),
        ('x', Arg::Int(n)) => Some(integer(*n, 16, directive)),
        ('X', Arg::Int(n)) => Some(upper(integer(*n, 16, directive))),
        ('x', Arg::Str(s) | Arg::Display(s)) => Some(Piece::Text(hex_bytes(s))),
        ('X', Arg::Str(s) | Arg::Display(s)) => Some(Piece::Text(hex_bytes(s).to_uppercase())),
        ('c', Arg::Int(n)) => Some(Piece::Text(
            u32::try_from(*n)
                .ok()
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER)
                .to_string(),
        )),
        ('f' | 'F' | 'e' | 'g', Arg::Float(x)) => Some(float(*x, verb, directive)),
        ('E' | 'G', Arg::Float(x)) => Some(upper(float(*x, verb.to_ascii_lowercase(), directive))),
        _ => None,
    };

    match piece {
        Some(piece) => pad(piece, directive),
        None => format!("%!{verb}({}={})", arg.type_name(), arg),
    }
}

fn truncate(s: &str, precision: Option<usize>) -> String {
    match precision {
        Some(p) => s.chars().take(p).collect(),
        None => s.to_string(),
    }
}

fn hex_bytes(s: &str) -> String {
    s.bytes().fold(String::with_capacity(s.len() * 2), |mut acc, b| {
        let _ = write!(acc, "{b:02x}");
        acc
    })
}

fn upper(piece: Piece) -> Piece {
    match piece {
        Piece::Text(s) => Piece::Text(s.to_uppercase()),
        Piece::Number {
            negative,
            prefix,
            digits,
            zero_pad,
        } => Piece::Number {
            negative,
            prefix: if prefix == "0x" { "0X" } else { prefix },
            digits: digits.to_uppercase(),
            zero_pad,
        },
    }
}

fn integer(n: i128, radix: u32, directive: &Directive) -> Piece {
    let magnitude = n.unsigned_abs();
    let mut digits = match radix {
        2 => format!("{magnitude:b}"),
        8 => format!("{magnitude:o}"),
        16 => format!("{magnitude:x}"),
        _ => magnitude.to_string(),
    };
    if let Some(p) = directive.precision {
        if digits.len() < p {
            digits.insert_str(0, &"0".repeat(p - digits.len()));
        }
    }
    let prefix = match (directive.sharp, radix) {
        (true, 2) => "0b",
        (true, 8) => "0",
        (true, 16) => "0x",
        _ => "",
    };
    Piece::Number {
        negative: n < 0,
        prefix,
        digits,
        zero_pad: directive.precision.is_none(),
    }
}

/// Formats a float for the lowercase verbs `f`, `e` and `g`.
fn float(x: f64, verb: char, directive: &Directive) -> Piece {
    if x.is_nan() {
        return Piece::Text("NaN".to_string());
    }
    if x.is_infinite() {
        let sign = if x < 0.0 {
            "-"
        } else if directive.plus {
            "+"
        } else {
            ""
        };
        return Piece::Text(format!("{sign}Inf"));
    }

    let abs = x.abs();
    let digits = match verb {
        'f' | 'F' => format!("{:.*}", directive.precision.unwrap_or(6), abs),
        'e' => exponent_form(&format!("{:.*e}", directive.precision.unwrap_or(6), abs)),
        _ => general(abs, directive),
    };
    Piece::Number {
        negative: x.is_sign_negative() && x != 0.0,
        prefix: "",
        digits,
        zero_pad: true,
    }
}

/// `%g`: exponent form for very large or small magnitudes, plain otherwise.
/// Without a precision the shortest digits are used and the switch happens
/// at exponent 6, as for a precision of 6.
fn general(abs: f64, directive: &Directive) -> String {
    let Some(precision) = directive.precision else {
        let shortest = format!("{abs:e}");
        let exp = exponent_of(&shortest);
        return if !(-4..6).contains(&exp) {
            exponent_form(&shortest)
        } else {
            abs.to_string()
        };
    };

    let precision = precision.max(1);
    let exp = exponent_of(&format!("{:.*e}", precision - 1, abs));
    let rendered = if exp < -4 || exp >= precision as i32 {
        exponent_form(&format!("{:.*e}", precision - 1, abs))
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        format!("{:.*}", decimals, abs)
    };
    if directive.sharp {
        rendered
    } else {
        strip_trailing_zeros(&rendered)
    }
}

fn exponent_of(rust_exp: &str) -> i32 {
    rust_exp
        .split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0)
}

/// Rewrites Rust's `1.5e3` as `1.5e+03`.
fn exponent_form(rust_exp: &str) -> String {
    match rust_exp.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        None => rust_exp.to_string(),
    }
}

fn strip_trailing_zeros(s: &str) -> String {
    let (mantissa, exp) = match s.find('e') {
        Some(idx) => s.split_at(idx),
        None => (s, ""),
    };
    if !mantissa.contains('.') {
        return s.to_string();
    }
    let trimmed = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}{exp}")
}

fn pad(piece: Piece, directive: &Directive) -> String {
    let body = match piece {
        Piece::Text(s) => s,
        Piece::Number {
            negative,
            prefix,
            digits,
            zero_pad,
        } => {
            let sign = if negative {
                "-"
            } else if directive.plus {
                "+"
            } else if directive.space {
                " "
            } else {
                ""
            };
            let used = sign.len() + prefix.len() + digits.len();
            match directive.width {
                Some(width) if zero_pad && directive.zero && !directive.minus && used < width => {
                    format!("{sign}{prefix}{}{digits}", "0".repeat(width - used))
                }
                _ => format!("{sign}{prefix}{digits}"),
            }
        }
    };

    let len = body.chars().count();
    match directive.width {
        Some(width) if width > len => {
            let fill = " ".repeat(width - len);
            if directive.minus {
                body + &fill
            } else {
                fill + &body
            }
        }
        _ => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Processing %d items", &[Arg::Int(5)], "Processing 5 items"; "integer")]
    #[test_case("test %s %d", &[Arg::from("hello"), Arg::Int(42)], "test hello 42"; "string and integer")]
    #[test_case("%v|%v|%v", &[Arg::Bool(true), Arg::Float(2.5), Arg::from("x")], "true|2.5|x"; "natural forms")]
    #[test_case("%d%% free", &[Arg::Int(3)], "3% free"; "escaped percent")]
    #[test_case("%5d|%-5d|%05d", &[Arg::Int(42), Arg::Int(42), Arg::Int(-42)], "   42|42   |-0042"; "integer width")]
    #[test_case("%+d %x %X %#x %b %o", &[Arg::Int(7), Arg::Int(255), Arg::Int(255), Arg::Int(255), Arg::Int(5), Arg::Int(8)], "+7 ff FF 0xff 101 10"; "integer verbs")]
    #[test_case("%.2f|%f|%8.3f", &[Arg::Float(3.14159), Arg::Float(1.5), Arg::Float(-2.0)], "3.14|1.500000|  -2.000"; "fixed point")]
    #[test_case("%e|%.2E", &[Arg::Float(1500.0), Arg::Float(0.000123)], "1.500000e+03|1.23E-04"; "exponent")]
    #[test_case("%g|%g|%.3g", &[Arg::Float(100000.0), Arg::Float(1e21), Arg::Float(3.14159)], "100000|1e+21|3.14"; "general")]
    #[test_case("%g|%v|%v", &[Arg::Float(1e6), Arg::Float(1e6), Arg::Float(123456789.0)], "1e+06|1e+06|1.23456789e+08"; "general switches at exponent six")]
    #[test_case("%g|%v", &[Arg::Float(0.0001), Arg::Float(0.00001)], "0.0001|1e-05"; "general small magnitudes")]
    #[test_case("[%08.3d]|[%06.2f]", &[Arg::Int(5), Arg::Float(1.5)], "[     005]|[001.50]"; "precision disables integer zero padding")]
    #[test_case("%q|%.3s|%x", &[Arg::from("a\"b"), Arg::from("abcdef"), Arg::from("hi")], "\"a\\\"b\"|abc|6869"; "string verbs")]
    #[test_case("%t %c", &[Arg::Bool(false), Arg::Int(65)], "false A"; "bool and char")]
    fn substitutes(template: &str, args: &[Arg], expected: &str) {
        assert_eq!(sprintf(template, args), expected);
    }

    #[test_case("%d and %s", &[Arg::Int(1)], "1 and %!s(MISSING)"; "missing argument")]
    #[test_case("%d", &[Arg::from("abc")], "%!d(string=abc)"; "wrong type")]
    #[test_case("%s", &[Arg::Int(4)], "%!s(int=4)"; "string verb on integer")]
    #[test_case("%z", &[Arg::Int(4)], "%!z(int=4)"; "unknown verb")]
    #[test_case("100%", &[Arg::Int(1)], "100%!(NOVERB)%!(EXTRA int=1)"; "trailing percent")]
    #[test_case("%d", &[Arg::Int(1), Arg::from("a"), Arg::Bool(true)], "1%!(EXTRA string=a, bool=true)"; "extra arguments")]
    #[test_case("%99999999999999999999d", &[Arg::Int(1)], "%!(BADWIDTH)"; "huge width")]
    #[test_case("%.99999999999999999999f", &[Arg::Float(1.0)], "%!(BADPREC)"; "huge precision")]
    #[test_case("%65536s and %d", &[Arg::from("a"), Arg::Int(2)], "%!(BADWIDTH) and 2"; "bad width consumes its argument")]
    #[test_case("%.70000g|%.65536d", &[Arg::Float(1.0), Arg::Int(1)], "%!(BADPREC)|%!(BADPREC)"; "precision above limit")]
    fn degrades_without_failing(template: &str, args: &[Arg], expected: &str) {
        assert_eq!(sprintf(template, args), expected);
    }

    #[test]
    fn non_finite_floats() {
        assert_eq!(sprintf("%f %f", &[Arg::Float(f64::NAN), Arg::Float(f64::NEG_INFINITY)]), "NaN -Inf");
        assert_eq!(sprintf("%+.1f", &[Arg::Float(f64::INFINITY)]), "+Inf");
    }

    #[test]
    fn width_counts_characters() {
        assert_eq!(sprintf("[%4s]", &[Arg::from("né")]), "[  né]");
    }
}
