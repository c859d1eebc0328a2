//! Attribute key dispatch and value parsers.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use super::attributes::Attributes;
use crate::placement::PlacementRule;

const PREFIX: &str = "data-";

/// Parse attribute pairs into Attributes + warnings.
pub(crate) fn parse_attributes<'a, I>(attrs: I) -> (Attributes, Vec<ParseWarning>)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = Attributes::new();
    let mut warnings = Vec::new();

    for (raw_key, value) in attrs {
        let key = raw_key.trim().to_ascii_lowercase();
        if let Some(name) = key.strip_prefix(PREFIX) {
            dispatch_key(name, value, &mut out, &mut warnings);
        }
    }

    (out, warnings)
}

fn dispatch_key(name: &str, value: &str, out: &mut Attributes, warnings: &mut Vec<ParseWarning>) {
    match name {
        "rule" => match PlacementRule::parse(value) {
            Some(rule) => set_or_warn(&mut out.rule, rule, "data-rule", value, warnings),
            None => warnings.push(ParseWarning::ValueInvalid {
                key: "data-rule",
                value: String::from(value),
                reason: "expected cover|contain|top-left|top-right|bottom-left|bottom-right|center",
            }),
        },
        "scale" => match parse_scale(value) {
            Some(s) => set_or_warn(&mut out.scale, s, "data-scale", value, warnings),
            None => warnings.push(ParseWarning::ValueInvalid {
                key: "data-scale",
                value: String::from(value),
                reason: "expected a positive number",
            }),
        },
        "width" => match parse_length(value) {
            Some(w) => set_or_warn(&mut out.width, w, "data-width", value, warnings),
            None => warnings.push(ParseWarning::ValueInvalid {
                key: "data-width",
                value: String::from(value),
                reason: "expected a non-negative length",
            }),
        },
        "height" => match parse_length(value) {
            Some(h) => set_or_warn(&mut out.height, h, "data-height", value, warnings),
            None => warnings.push(ParseWarning::ValueInvalid {
                key: "data-height",
                value: String::from(value),
                reason: "expected a non-negative length",
            }),
        },
        "src" => {
            let src = value.trim();
            if src.is_empty() {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "data-src",
                    value: String::from(value),
                    reason: "expected a non-empty location",
                });
            } else {
                set_or_warn(&mut out.src, String::from(src), "data-src", value, warnings);
            }
        }
        _ => warnings.push(ParseWarning::KeyNotRecognized {
            key: alloc::format!("{PREFIX}{name}"),
            value: String::from(value),
        }),
    }
}

fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: T,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if field.is_some() {
        warnings.push(ParseWarning::DuplicateKey {
            key: String::from(key),
            value: String::from(value),
        });
    }
    *field = Some(parsed);
}

// ---- Value parsers ----

fn parse_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Scale factor, with an optional trailing `x` (`"2x"`).
fn parse_scale(s: &str) -> Option<f64> {
    let s = s.trim();
    let s = s
        .strip_suffix('x')
        .or_else(|| s.strip_suffix('X'))
        .unwrap_or(s);
    parse_f64(s).filter(|&v| v > 0.0)
}

/// Length in linear units, with an optional trailing `px`.
fn parse_length(s: &str) -> Option<f64> {
    let s = s.trim();
    let s = s
        .strip_suffix("px")
        .or_else(|| s.strip_suffix("PX"))
        .unwrap_or(s);
    parse_f64(s).filter(|&v| v >= 0.0)
}
