//! String scanning over the fixed profile page layout.
//!
//! The page is one known layout, so targeted class-marker scanning is
//! enough; this is not a general HTML parser.

/// Find the next `<tag ...>` element carrying `class` as one of its class
/// tokens, at or after `from`. Returns the byte range spanning the opening
/// tag through the matching close tag.
///
/// Nesting-aware for same-name children: the ratings container holds nested
/// divs, so the close tag cannot be taken as the first one seen.
pub fn class_block(doc: &str, tag: &str, class: &str, from: usize) -> Option<(usize, usize)> {
    let open_marker = format!("<{tag}");
    let close_marker = format!("</{tag}");

    let mut pos = from;
    loop {
        let start = doc.get(pos..)?.find(&open_marker)? + pos;
        let open_end = doc[start..].find('>')? + start + 1;
        if !has_class(&doc[start..open_end], class) {
            pos = open_end;
            continue;
        }

        let mut depth = 1usize;
        let mut cursor = open_end;
        while depth > 0 {
            let next_close = doc[cursor..].find(&close_marker)? + cursor;
            let next_open = doc[cursor..].find(&open_marker).map(|i| i + cursor);
            match next_open {
                Some(o) if o < next_close => {
                    depth += 1;
                    cursor = doc[o..].find('>')? + o + 1;
                }
                _ => {
                    depth -= 1;
                    cursor = doc[next_close..].find('>')? + next_close + 1;
                }
            }
        }
        return Some((start, cursor));
    }
}

/// Content between an element's opening tag and its final close tag.
pub fn inner(block: &str) -> &str {
    let open_end = match block.find('>') {
        Some(i) => i + 1,
        None => return "",
    };
    let close_start = match block.rfind('<') {
        Some(i) => i,
        None => return "",
    };
    if close_start <= open_end {
        ""
    } else {
        &block[open_end..close_start]
    }
}

/// Drop markup, decode the entities the page uses, collapse whitespace.
pub fn text_content(s: &str) -> String {
    normalize_ws(&decode_entities(&strip_tags(s)))
}

pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

// Decoded after tag stripping, so a literal &lt; cannot open a phantom tag.
fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

/// Whether an opening tag carries `name` as one of its class tokens.
/// Token-exact: `profile-top-rating-data` must not match
/// `profile-top-rating-dataCont`.
fn has_class(open_tag: &str, name: &str) -> bool {
    class_attr(open_tag)
        .map(|v| v.split_whitespace().any(|t| t == name))
        .unwrap_or(false)
}

fn class_attr(open_tag: &str) -> Option<&str> {
    let i = open_tag.find("class=")?;
    let rest = &open_tag[i + "class=".len()..];
    let quote = rest.chars().next()?;
    if quote != '"' && quote != '\'' {
        return None;
    }
    let body = &rest[1..];
    let end = body.find(quote)?;
    Some(&body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_block_spans_nested_children() {
        let doc = r#"<div class="outer"><div class="inner">a</div><div class="inner">b</div></div><p>tail</p>"#;
        let (s, e) = class_block(doc, "div", "outer", 0).unwrap();
        assert_eq!(
            &doc[s..e],
            r#"<div class="outer"><div class="inner">a</div><div class="inner">b</div></div>"#
        );
    }

    #[test]
    fn class_matching_is_token_exact() {
        let doc = r#"<div class="profile-top-rating-dataCont"><div class="profile-top-rating-data">x</div></div>"#;
        let (s, _) = class_block(doc, "div", "profile-top-rating-data", 0).unwrap();
        assert!(doc[s..].starts_with(r#"<div class="profile-top-rating-data">"#));
        assert!(class_block(doc, "div", "profile-top-rating-dataDesc", 0).is_none());
    }

    #[test]
    fn class_block_resumes_from_offset() {
        let doc = r#"<div class="row">a</div><div class="row">b</div>"#;
        let (_, e1) = class_block(doc, "div", "row", 0).unwrap();
        let (s2, e2) = class_block(doc, "div", "row", e1).unwrap();
        assert_eq!(&doc[s2..e2], r#"<div class="row">b</div>"#);
        assert!(class_block(doc, "div", "row", e2).is_none());
    }

    #[test]
    fn unclosed_element_is_not_found() {
        let doc = r#"<div class="row">never closed"#;
        assert!(class_block(doc, "div", "row", 0).is_none());
    }

    #[test]
    fn inner_extracts_element_content() {
        assert_eq!(inner(r#"<div class="x"><b>bold</b> text</div>"#), "<b>bold</b> text");
        assert_eq!(inner(r#"<div class="x"></div>"#), "");
    }

    #[test]
    fn text_content_strips_and_normalizes() {
        assert_eq!(
            text_content("  <b>Magnus</b>&nbsp;\n  Carlsen  "),
            "Magnus Carlsen"
        );
        assert_eq!(text_content("A &amp; B"), "A & B");
        assert_eq!(text_content(""), "");
    }

    #[test]
    fn normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("a\t\t b\n\nc "), "a b c");
    }
}
