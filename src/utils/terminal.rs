//! Terminal output sanitization for picker labels
//!
//! Entry names come straight from the filesystem, and a directory name can legally carry
//! ANSI escape sequences. Labels are passed through [`sanitize_label`] before being drawn so
//! a crafted name cannot clear the screen, move the cursor or retitle the terminal.

/// Strips ANSI CSI and OSC escape sequences and control characters from a string
///
/// # Examples
///
/// ```
/// use findit::utils::terminal::sanitize_label;
///
/// let text = "\x1b[31mred-app\x1b[0m";
/// assert_eq!(sanitize_label(text), "red-app");
/// ```
pub fn sanitize_label(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            match chars.peek().copied() {
                // CSI: ESC [ ... final letter
                Some('[') => {
                    chars.next();
                    for next_ch in chars.by_ref() {
                        if next_ch.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
                // OSC: ESC ] ... terminated by BEL or ESC \
                Some(']') => {
                    chars.next();
                    while let Some(next_ch) = chars.next() {
                        if next_ch == '\x07' {
                            break;
                        }
                        if next_ch == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        // Labels are single-line; drop every control character including newlines
        if ch.is_control() {
            continue;
        }

        result.push(ch);
    }

    result
}
