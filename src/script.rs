use crate::notify::Notification;

/// Escapes text for use inside an AppleScript double-quoted string.
///
/// Backslashes are doubled before quotes are escaped, so the backslash
/// introduced for a quote is never doubled again. Line breaks and tabs
/// become plain spaces to keep the script on one line.
pub fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace(['\n', '\r', '\t'], " ")
}

/// Builds the `display notification` expression for `osascript -e`.
pub fn build_script(n: &Notification) -> String {
    let mut parts = vec![format!(
        r#"display notification "{}""#,
        escape_applescript(&n.informative_text)
    )];
    if !n.title.is_empty() {
        parts.push(format!(r#"with title "{}""#, escape_applescript(&n.title)));
    }
    if !n.subtitle.is_empty() {
        parts.push(format!(r#"subtitle "{}""#, escape_applescript(&n.subtitle)));
    }
    if !n.sound_name.is_empty() {
        parts.push(format!(r#"sound name "{}""#, escape_applescript(&n.sound_name)));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_empty() {
        assert_eq!(escape_applescript(""), "");
    }

    #[test]
    fn escape_plain_text_unchanged() {
        assert_eq!(escape_applescript("hello world"), "hello world");
    }

    #[test]
    fn escape_double_quotes() {
        assert_eq!(escape_applescript(r#"say "hello""#), r#"say \"hello\""#);
    }

    #[test]
    fn escape_backslashes() {
        assert_eq!(escape_applescript(r"path\to\file"), r"path\\to\\file");
    }

    #[test]
    fn escape_backslash_before_quote() {
        assert_eq!(escape_applescript(r#""back\slash""#), r#"\"back\\slash\""#);
        assert_eq!(escape_applescript(r#"\""#), r#"\\\""#);
    }

    #[test]
    fn escape_whitespace_controls() {
        assert_eq!(escape_applescript("tabs\there"), "tabs here");
        assert_eq!(escape_applescript("line1\nline2"), "line1 line2");
        assert_eq!(escape_applescript("line1\rline2"), "line1 line2");
        assert_eq!(escape_applescript("a\tb\nc\rd"), "a b c d");
        assert_eq!(escape_applescript("crlf\r\nend"), "crlf  end");
    }

    #[test]
    fn escape_keeps_non_ascii() {
        assert_eq!(escape_applescript("알림 ✓ café"), "알림 ✓ café");
    }

    #[test]
    fn escape_is_not_idempotent() {
        let once = escape_applescript(r"a\b");
        assert_eq!(once, r"a\\b");
        assert_eq!(escape_applescript(&once), r"a\\\\b");
    }

    #[test]
    fn escaped_output_has_no_bare_quotes_or_line_breaks() {
        let input = "x\"\\\"\n\r\t\"\\y\"";
        let out = escape_applescript(input);
        assert!(!out.contains(['\n', '\r', '\t']));
        let chars: Vec<char> = out.chars().collect();
        for (i, c) in chars.iter().enumerate() {
            if *c == '"' {
                let backslashes = chars[..i].iter().rev().take_while(|&&b| b == '\\').count();
                assert_eq!(backslashes % 2, 1, "unescaped quote at {i} in {out:?}");
            }
        }
    }

    #[test]
    fn build_message_only() {
        let n = Notification::new("hello");
        assert_eq!(build_script(&n), r#"display notification "hello""#);
    }

    #[test]
    fn build_all_fields() {
        let n = Notification::new("Body")
            .title("Title")
            .subtitle("Sub")
            .sound_name("Ping");
        assert_eq!(
            build_script(&n),
            r#"display notification "Body" with title "Title" subtitle "Sub" sound name "Ping""#
        );
    }

    #[test]
    fn build_title_and_message() {
        let n = Notification::new("M").title("T");
        assert_eq!(build_script(&n), r#"display notification "M" with title "T""#);
    }

    #[test]
    fn build_subtitle_and_sound_without_title() {
        let n = Notification::new("M").sound_name("Glass").subtitle("S");
        assert_eq!(
            build_script(&n),
            r#"display notification "M" subtitle "S" sound name "Glass""#
        );
    }

    #[test]
    fn build_escapes_fields() {
        let n = Notification::new(r"path\to\file").title(r#"He said "hi""#);
        assert_eq!(
            build_script(&n),
            r#"display notification "path\\to\\file" with title "He said \"hi\"""#
        );
    }

    #[test]
    fn build_ignores_content_image() {
        let n = Notification::new("msg").content_image("/some/image.png");
        assert_eq!(build_script(&n), r#"display notification "msg""#);
    }

    #[test]
    fn build_empty_body_still_emits_clause() {
        let n = Notification::default();
        assert_eq!(build_script(&n), r#"display notification """#);
    }
}
