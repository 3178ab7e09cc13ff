//! Petal label templates such as `"{size}"` or `"{percentage:.1f}%"`.
//!
//! Recognised fields are `size`, `percentage` and `logic`. A field may carry
//! a format spec after `:` in the familiar `[[fill]align][0][width][,][.precision][type]`
//! form, with `type` one of `d`, `f`, `s`, `%`. Literal braces are written as
//! `{{` and `}}`.

use crate::error::{Result, VennError};
use num_format::{Locale, ToFormattedString};
use regex::Regex;
use std::sync::LazyLock;

static SPEC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<fill>.)?(?P<align>[<>^]))?(?P<zero>0)?(?P<width>\d+)?(?P<group>,)?(?:\.(?P<prec>\d+))?(?P<kind>[dfs%])?$")
        .expect("static format-spec regex")
});

/// Values available to a template for one petal.
#[derive(Debug, Clone, Copy)]
pub struct PetalValues<'a> {
    pub size: usize,
    pub percentage: f64,
    pub logic: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Size,
    Percentage,
    Logic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FormatSpec {
    fill: char,
    align: Option<Align>,
    width: usize,
    grouping: bool,
    precision: Option<usize>,
    kind: Option<char>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Field(Field, FormatSpec),
}

/// A parsed label template; parse once, render per petal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTemplate {
    pieces: Vec<Piece>,
}

impl LabelTemplate {
    pub fn parse(fmt: &str) -> Result<Self> {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut chars = fmt.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => {
                    return Err(VennError::Template(format!(
                        "single '}}' encountered in '{fmt}'"
                    )));
                }
                '{' => {
                    let mut body = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        body.push(c);
                    }
                    if !closed {
                        return Err(VennError::Template(format!(
                            "unclosed '{{' in '{fmt}'"
                        )));
                    }
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(parse_field(&body)?);
                }
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }
        Ok(Self { pieces })
    }

    pub fn render(&self, values: &PetalValues<'_>) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Literal(s) => out.push_str(s),
                Piece::Field(field, spec) => {
                    let body = match field {
                        Field::Size => format_int(values.size, spec),
                        Field::Percentage => format_float(values.percentage, spec),
                        Field::Logic => format_str(values.logic, spec),
                    };
                    out.push_str(&pad(body, spec, *field != Field::Logic));
                }
            }
        }
        out
    }
}

fn parse_field(body: &str) -> Result<Piece> {
    let (name, spec) = match body.split_once(':') {
        Some((n, s)) => (n.trim(), s),
        None => (body.trim(), ""),
    };
    let field = match name {
        "size" => Field::Size,
        "percentage" => Field::Percentage,
        "logic" => Field::Logic,
        other => {
            return Err(VennError::Template(format!(
                "unknown field '{other}', expected size, percentage or logic"
            )));
        }
    };
    let caps = SPEC_RE
        .captures(spec)
        .ok_or_else(|| VennError::Template(format!("invalid format spec '{spec}'")))?;

    let align = caps.name("align").map(|m| match m.as_str() {
        "<" => Align::Left,
        "^" => Align::Center,
        _ => Align::Right,
    });
    let zero = caps.name("zero").is_some();
    // A leading `0` on the width pads with zeros unless a fill is spelled out.
    let fill = caps
        .name("fill")
        .and_then(|m| m.as_str().chars().next())
        .unwrap_or(if zero { '0' } else { ' ' });
    let width = caps
        .name("width")
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    let precision = caps.name("prec").and_then(|m| m.as_str().parse().ok());
    let kind = caps.name("kind").and_then(|m| m.as_str().chars().next());
    let grouping = caps.name("group").is_some();

    let compatible = match (field, kind) {
        (_, None) => true,
        (Field::Size, Some(k)) => matches!(k, 'd' | 'f' | '%'),
        (Field::Percentage, Some(k)) => matches!(k, 'f' | '%'),
        (Field::Logic, Some(k)) => k == 's',
    };
    if zero && grouping {
        return Err(VennError::Template(format!(
            "zero padding cannot be combined with ',' in '{spec}'"
        )));
    }
    if !compatible || (field == Field::Logic && grouping) {
        return Err(VennError::Template(format!(
            "format spec '{spec}' does not apply to field '{name}'"
        )));
    }
    if field == Field::Size && kind.is_none_or(|k| k == 'd') && precision.is_some() {
        return Err(VennError::Template(format!(
            "precision not allowed for integer field '{name}'"
        )));
    }

    Ok(Piece::Field(
        field,
        FormatSpec {
            fill,
            align,
            width,
            grouping,
            precision,
            kind,
        },
    ))
}

fn format_int(v: usize, spec: &FormatSpec) -> String {
    match spec.kind {
        Some('f') | Some('%') => format_float(v as f64, spec),
        _ if spec.grouping => v.to_formatted_string(&Locale::en),
        _ => v.to_string(),
    }
}

fn format_float(v: f64, spec: &FormatSpec) -> String {
    let (v, suffix) = if spec.kind == Some('%') {
        (v * 100.0, "%")
    } else {
        (v, "")
    };
    let body = match (spec.kind, spec.precision) {
        (Some('f') | Some('%'), p) => format!("{:.*}", p.unwrap_or(6), v),
        (_, Some(p)) => format!("{:.*}", p, v),
        (_, None) => float_repr(v),
    };
    let body = if spec.grouping { group_thousands(&body) } else { body };
    format!("{body}{suffix}")
}

fn format_str(v: &str, spec: &FormatSpec) -> String {
    match spec.precision {
        Some(p) => v.chars().take(p).collect(),
        None => v.to_string(),
    }
}

/// Shortest round-trip text, keeping a trailing `.0` on whole numbers.
fn float_repr(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

fn group_thousands(num: &str) -> String {
    let (sign, rest) = match num.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", num),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };
    let grouped = match int_part.parse::<u64>() {
        Ok(n) => n.to_formatted_string(&Locale::en),
        Err(_) => int_part.to_string(),
    };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

fn pad(body: String, spec: &FormatSpec, numeric: bool) -> String {
    let len = body.chars().count();
    if len >= spec.width {
        return body;
    }
    let missing = spec.width - len;
    let align = spec
        .align
        .unwrap_or(if numeric { Align::Right } else { Align::Left });
    let fill = |n: usize| std::iter::repeat_n(spec.fill, n).collect::<String>();
    match align {
        Align::Left => format!("{body}{}", fill(missing)),
        Align::Right => format!("{}{body}", fill(missing)),
        Align::Center => {
            let left = missing / 2;
            format!("{}{body}{}", fill(left), fill(missing - left))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> PetalValues<'static> {
        PetalValues {
            size: 1234,
            percentage: 37.5,
            logic: "101",
        }
    }

    fn render(fmt: &str) -> String {
        LabelTemplate::parse(fmt).unwrap().render(&values())
    }

    #[test]
    fn plain_fields() {
        assert_eq!(render("{size}"), "1234");
        assert_eq!(render("{percentage}"), "37.5");
        assert_eq!(render("{logic}"), "101");
        assert_eq!(render("{logic}: {size}"), "101: 1234");
    }

    #[test]
    fn format_specs() {
        assert_eq!(render("{percentage:.1f}%"), "37.5%");
        assert_eq!(render("{percentage:.0f}"), "38");
        assert_eq!(render("{size:,}"), "1,234");
        assert_eq!(render("{size:>6}"), "  1234");
        assert_eq!(render("{logic:*^7}"), "**101**");
        assert_eq!(render("{size:.2f}"), "1234.00");
    }

    #[test]
    fn zero_padding() {
        assert_eq!(render("{size:06}"), "001234");
        assert_eq!(render("{percentage:06.2f}"), "037.50");
        assert_eq!(render("{percentage:08.1%}"), "03750.0%");
        assert_eq!(render("{size:>06}"), "001234");
        assert_eq!(render("{size:*<06}"), "1234**");
        assert_eq!(render("{logic:05}"), "10100");
        assert_eq!(render("{size:010}"), "0000001234");
        assert_eq!(render("{size:10}"), "      1234");
    }

    #[test]
    fn whole_percentages_keep_a_decimal() {
        let v = PetalValues {
            size: 1,
            percentage: 50.0,
            logic: "11",
        };
        let t = LabelTemplate::parse("{percentage}").unwrap();
        assert_eq!(t.render(&v), "50.0");
    }

    #[test]
    fn escaped_braces() {
        assert_eq!(render("{{{size}}}"), "{1234}");
    }

    #[test]
    fn rejects_bad_templates() {
        for bad in ["{count}", "{size", "size}", "{logic:.2f}", "{size:.2}", "{size:x}", "{size:08,}"] {
            assert!(
                matches!(LabelTemplate::parse(bad), Err(VennError::Template(_))),
                "template {bad:?} should be rejected"
            );
        }
    }
}
