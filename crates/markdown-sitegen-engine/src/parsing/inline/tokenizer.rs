use super::{
    kinds::{Bold, CodeSpan, Image, Italic, Link, LinkMatch},
    types::{InlineError, SpanKind, TextSpan},
};

/// Tokenizes inline markdown into a sequence of [`TextSpan`]s.
///
/// # Pass Order
/// 1. Images (`![alt](url)`) so a leading `!` is never swallowed by a link
/// 2. Links (`[text](url)`)
/// 3. Bold (`**`)
/// 4. Italic (`_`)
/// 5. Code (`` ` ``)
///
/// Every pass only splits `Plain` spans; spans produced by an earlier pass
/// pass through untouched. Emphasis is not nested: `**_x_**` yields a bold
/// span with the literal content `_x_`.
///
/// # Errors
/// Returns [`InlineError::UnterminatedInlineSpan`] if any delimiter is left
/// unpaired. No partial result is returned.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, InlineError> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_spans_image(spans);
    let spans = split_spans_link(spans);
    let spans = split_spans_delimiter(spans, Bold::DELIMITER, SpanKind::Bold)?;
    let spans = split_spans_delimiter(spans, Italic::DELIMITER, SpanKind::Italic)?;
    split_spans_delimiter(spans, CodeSpan::DELIMITER, SpanKind::Code)
}

/// Splits every plain span on a literal delimiter.
///
/// Segments at odd positions become `kind`, the others stay plain, and empty
/// segments are dropped. An even number of segments means one delimiter was
/// never closed.
pub fn split_spans_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, InlineError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let sections: Vec<&str> = span.content.split(delimiter).collect();
        if sections.len() % 2 == 0 {
            return Err(InlineError::UnterminatedInlineSpan { delimiter });
        }

        for (i, section) in sections.into_iter().enumerate() {
            if section.is_empty() {
                continue;
            }
            let section_kind = if i % 2 == 0 {
                SpanKind::Plain
            } else {
                kind.clone()
            };
            out.push(TextSpan::new(section, section_kind));
        }
    }

    Ok(out)
}

/// Splits `![alt](url)` images out of every plain span.
pub fn split_spans_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_pattern(spans, Image::find_all, |m| TextSpan::image(m.label, m.url))
}

/// Splits `[text](url)` links out of every plain span.
pub fn split_spans_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_pattern(spans, Link::find_all, |m| TextSpan::link(m.label, m.url))
}

fn split_spans_pattern(
    spans: Vec<TextSpan>,
    find: fn(&str) -> Vec<LinkMatch>,
    to_span: fn(LinkMatch) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.content.as_str();
        let mut last_index = 0;

        for m in find(text) {
            if m.range.start > last_index {
                out.push(TextSpan::plain(&text[last_index..m.range.start]));
            }
            last_index = m.range.end;
            out.push(to_span(m));
        }

        if last_index < text.len() {
            out.push(TextSpan::plain(&text[last_index..]));
        }
    }

    out
}
