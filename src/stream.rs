//! Menu descriptions read one directive per line (`--stdin`).
//!
//! ```text
//! # comment
//! --submenu "Editors"
//! --item Edit: gedit
//! --submenu-end
//! --separator
//! ```

use std::io::BufRead;

use crate::error::{Error, Result};
use crate::menu::{split_entry, MenuDescription, MenuItem};

/// Reads directives until end of stream. The first bad line aborts the whole load.
pub fn read_menu<R: BufRead>(reader: R) -> Result<MenuDescription> {
    let mut menu = MenuDescription::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(Error::Read)?;
        if let Some(item) = parse_line(&line, idx + 1)? {
            menu.push(item);
        }
    }
    tracing::debug!(items = menu.len(), "read menu from stream");
    Ok(menu)
}

/// Parses every line of an in-memory description.
pub fn parse_menu(text: &str) -> Result<MenuDescription> {
    read_menu(text.as_bytes())
}

/// Parses one line; `Ok(None)` for comment lines.
///
/// A blank line has an empty directive and is rejected like any unknown one.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<MenuItem>> {
    let line = line.trim();
    if line.starts_with('#') {
        return Ok(None);
    }

    let (kind, arg) = match line.split_once(' ') {
        Some((kind, rest)) => (kind, unquote(rest.trim())),
        None => (line, ""),
    };

    let item = match kind {
        "--separator" => MenuItem::Separator,
        "--submenu" => MenuItem::submenu(arg),
        "--submenu-end" => MenuItem::SubmenuEnd,
        "--item" => split_entry(arg)?,
        _ => {
            return Err(Error::MalformedDirective {
                directive: kind.to_string(),
                line: line_no,
            })
        }
    };
    Ok(Some(item))
}

/// Strips one matching pair of outer `"` or `'`. No escape processing.
pub fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unquote_matching_pairs_only() {
        assert_eq!(unquote("'My Menu'"), "My Menu");
        assert_eq!(unquote("\"My Menu\""), "My Menu");
        assert_eq!(unquote("\"My Menu'"), "\"My Menu'");
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote("''"), "");
        assert_eq!(unquote("'a'b'"), "a'b");
    }

    #[test]
    fn comments_skipped() {
        assert_eq!(parse_line("# comment", 1).unwrap(), None);
        assert_eq!(parse_line("   # comment", 1).unwrap(), None);
        assert_eq!(parse_line("#--item A: a", 1).unwrap(), None);
    }

    #[test]
    fn blank_line_is_bad_directive() {
        for line in ["", " \t "] {
            let err = parse_line(line, 4).unwrap_err();
            assert!(matches!(
                err,
                Error::MalformedDirective { ref directive, line: 4 } if directive.is_empty()
            ));
        }
    }

    #[test]
    fn blank_line_aborts_whole_stream() {
        let err = parse_menu("--separator\n\n--item A: a\n").unwrap_err();
        assert!(matches!(err, Error::MalformedDirective { line: 2, .. }));
    }

    #[test]
    fn directive_without_argument() {
        assert_eq!(parse_line("--separator", 1).unwrap(), Some(MenuItem::Separator));
        assert_eq!(
            parse_line("  --submenu-end  ", 1).unwrap(),
            Some(MenuItem::SubmenuEnd)
        );
        assert_eq!(parse_line("--submenu", 1).unwrap(), Some(MenuItem::submenu("")));
    }

    #[test]
    fn quoted_item_is_split_after_unquoting() {
        assert_eq!(
            parse_line("--item 'Files:  nautilus ~'", 1).unwrap(),
            Some(MenuItem::entry("Files", "nautilus ~"))
        );
    }

    #[test]
    fn argument_spacing_is_trimmed() {
        assert_eq!(
            parse_line("--submenu    \"Tools\"  ", 1).unwrap(),
            Some(MenuItem::submenu("Tools"))
        );
    }

    #[test]
    fn bad_directive_names_line() {
        let err = parse_menu("--separator\n# note\n--frobnicate now\n").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedDirective { ref directive, line: 3 } if directive == "--frobnicate"
        ));
    }
}
