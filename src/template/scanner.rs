use super::cursor::Cursor;
use super::parameter::parse_route_parameter;
use super::{TemplateError, TemplatePart, TemplatePattern};

const SEPARATOR: u8 = b'/';
const OPEN_BRACE: u8 = b'{';
const CLOSE_BRACE: u8 = b'}';

/// Parses a route template into an ordered part list plus diagnostics.
///
/// This function is total: malformed syntax is reported through
/// [`TemplatePattern::errors`], never as a panic or an `Err`. On the first
/// error the scanner stops; parts collected up to that point are kept but are
/// not authoritative.
#[tracing::instrument(level = "trace", fields(template = %template))]
pub fn parse_template(template: &str) -> TemplatePattern {
    let trimmed = trim_prefix(template);

    let mut parts = Vec::new();
    let mut errors = Vec::new();

    if trimmed.is_empty() {
        // Canonical root path.
        parts.push(TemplatePart::literal("/"));
        return TemplatePattern::new("/", parts, errors);
    }

    let mut cursor = Cursor::new(trimmed);
    while !cursor.at_end() {
        let before = cursor.index();

        if cursor.current() == Some(SEPARATOR) {
            // The trimmed template never starts with '/' and parsing a
            // segment consumes up to its trailing separator, so landing on
            // one here means two separators in a row.
            errors.push(TemplateError::ConsecutiveSeparator);
            break;
        }

        if let Err(error) = parse_segment(&mut cursor, &mut parts) {
            errors.push(error);
            break;
        }

        // A successful segment parse lands on a separator or the end.
        debug_assert!(cursor.at_end() || cursor.current() == Some(SEPARATOR));

        if cursor.index() <= before {
            errors.push(TemplateError::ParserStalled);
            break;
        }

        cursor.move_next();
    }

    TemplatePattern::new(template, parts, errors)
}

fn parse_segment(
    cursor: &mut Cursor<'_>,
    parts: &mut Vec<TemplatePart>,
) -> Result<(), TemplateError> {
    loop {
        let before = cursor.index();

        if cursor.current() == Some(OPEN_BRACE) {
            if !cursor.move_next() {
                // Dangling open brace at the end of the template.
                return Err(TemplateError::IncompleteParameter);
            }

            if cursor.current() == Some(OPEN_BRACE) {
                // An escaped brace in a literal, like "{{foo".
                cursor.back();
                parse_literal(cursor, parts)?;
            } else {
                cursor.back();
                parse_parameter(cursor, parts)?;
            }
        } else {
            parse_literal(cursor, parts)?;
        }

        if cursor.current() == Some(SEPARATOR) || cursor.at_end() {
            break;
        }

        if cursor.index() <= before {
            return Err(TemplateError::ParserStalled);
        }
    }

    Ok(())
}

fn parse_parameter(
    cursor: &mut Cursor<'_>,
    parts: &mut Vec<TemplatePart>,
) -> Result<(), TemplateError> {
    debug_assert_eq!(cursor.current(), Some(OPEN_BRACE));
    cursor.mark();
    cursor.move_next();

    loop {
        cursor.seek_brace();

        match cursor.current() {
            Some(OPEN_BRACE) => {
                if !cursor.move_next() {
                    // Dangling open brace, e.g. "{p:regex(^\d{".
                    return Err(TemplateError::IncompleteParameter);
                }

                if cursor.current() != Some(OPEN_BRACE) {
                    // A lone '{' inside a parameter body, e.g. "{p:regex(^\d{3".
                    return Err(TemplateError::UnescapedBraceInParameter);
                }
            }
            Some(CLOSE_BRACE) => {
                if !cursor.move_next() {
                    // End of the template and a complete parameter.
                    break;
                }

                if cursor.current() != Some(CLOSE_BRACE) {
                    // This '}' closes the parameter; a "}}" pair would be an
                    // escaped brace inside the body, as in "{p:regex(([}}])\w+)}".
                    break;
                }
            }
            _ => {
                // Ran off the end without a closing brace.
                return Err(TemplateError::IncompleteParameter);
            }
        }

        if !cursor.move_next() {
            return Err(TemplateError::IncompleteParameter);
        }
    }

    let Some(text) = cursor.capture() else {
        return Err(TemplateError::ParserStalled);
    };

    if text == "{}" {
        return Err(TemplateError::EmptyParameterName);
    }

    let interior = &text[1..text.len() - 1];
    let decoded = decode_braces(interior);
    let descriptor = parse_route_parameter(&decoded);

    // The descriptor parser has no error channel of its own; the flag
    // combinations are rejected here.
    if decoded.starts_with('*') && decoded.ends_with('?') {
        return Err(TemplateError::OptionalCatchAll);
    }

    if descriptor.is_optional && descriptor.default_value.is_some() {
        return Err(TemplateError::OptionalWithDefaultValue);
    }

    parts.push(TemplatePart::Parameter {
        text: text.to_string(),
        name: descriptor.name,
        is_catch_all: descriptor.is_catch_all,
        is_optional: descriptor.is_optional,
        default_value: descriptor.default_value,
        constraints: descriptor.constraints,
    });

    Ok(())
}

fn parse_literal(
    cursor: &mut Cursor<'_>,
    parts: &mut Vec<TemplatePart>,
) -> Result<(), TemplateError> {
    cursor.mark();

    loop {
        cursor.seek_delimiter();

        match cursor.current() {
            None | Some(SEPARATOR) => {
                // End of the segment.
                break;
            }
            Some(OPEN_BRACE) => {
                if !cursor.move_next() {
                    // Dangling open brace, which is not allowed.
                    return Err(TemplateError::IncompleteParameter);
                }

                if cursor.current() != Some(OPEN_BRACE) {
                    // Start of a parameter; back up and hand control to the
                    // segment loop.
                    cursor.back();
                    break;
                }
            }
            Some(CLOSE_BRACE) => {
                if !cursor.move_next() {
                    // Dangling close brace, which is not allowed.
                    return Err(TemplateError::IncompleteParameter);
                }

                if cursor.current() != Some(CLOSE_BRACE) {
                    // An unbalanced '}' in a literal.
                    return Err(TemplateError::IncompleteParameter);
                }
            }
            Some(_) => {
                // seek_delimiter only stops on the bytes handled above.
                return Err(TemplateError::ParserStalled);
            }
        }

        if !cursor.move_next() {
            break;
        }
    }

    let encoded = cursor.capture().unwrap_or_default();
    parts.push(TemplatePart::literal(decode_braces(encoded)));
    Ok(())
}

/// Collapses `}}` then `{{` escapes, in that order, matching the reference
/// decoding of brace escapes.
fn decode_braces(encoded: &str) -> String {
    encoded.replace("}}", "}").replace("{{", "{")
}

fn trim_prefix(template: &str) -> &str {
    if let Some(rest) = template.strip_prefix("~/") {
        rest
    } else if let Some(rest) = template.strip_prefix('/') {
        rest
    } else if let Some(rest) = template.strip_prefix('~') {
        rest
    } else {
        template
    }
}
