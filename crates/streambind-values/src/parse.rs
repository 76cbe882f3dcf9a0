use streambind_frame::MessageStructure;

/// Split one decoded text message into string tokens per the active
/// structure.
///
/// Double-quoted substrings are kept as a single token regardless of the
/// separators they contain; the quote characters stay in the token text.
/// `NoSeparation` yields the whole line as one token, preceded by the
/// literal token `"Value"` when `first_value_is_name` is on — a naming
/// convenience so the line lands in a slot called "Value".
///
/// Byte structures have no string tokens; they yield an empty vec and are
/// bound positionally by the table instead.
pub fn tokenize(
    message: &str,
    structure: MessageStructure,
    first_value_is_name: bool,
) -> Vec<String> {
    if message.is_empty() {
        return Vec::new();
    }

    if structure == MessageStructure::NoSeparation {
        let mut tokens = Vec::with_capacity(2);
        if first_value_is_name {
            tokens.push("Value".to_string());
        }
        tokens.push(message.to_string());
        return tokens;
    }

    let Some(separator) = structure.separator() else {
        return Vec::new();
    };

    split_quoted(message, separator)
}

fn split_quoted(message: &str, separator: char) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in message.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
            current.push(ch);
        } else if ch == separator && !in_quotes {
            tokens.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    tokens.push(current);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_separated() {
        let tokens = tokenize("Speed 10", MessageStructure::SpaceSeparated, true);
        assert_eq!(tokens, vec!["Speed", "10"]);
    }

    #[test]
    fn every_separator_kind() {
        let cases = [
            (MessageStructure::TabSeparated, "a\tb"),
            (MessageStructure::CommaSeparated, "a,b"),
            (MessageStructure::ColonSeparated, "a:b"),
            (MessageStructure::SemicolonSeparated, "a;b"),
            (MessageStructure::EqualsSeparated, "a=b"),
        ];
        for (structure, message) in cases {
            assert_eq!(tokenize(message, structure, true), vec!["a", "b"]);
        }
    }

    #[test]
    fn quoted_substring_is_one_token() {
        let tokens = tokenize(
            "say \"hello world\" twice",
            MessageStructure::SpaceSeparated,
            true,
        );
        assert_eq!(tokens, vec!["say", "\"hello world\"", "twice"]);
    }

    #[test]
    fn consecutive_separators_keep_empty_tokens() {
        let tokens = tokenize("a,,b", MessageStructure::CommaSeparated, false);
        assert_eq!(tokens, vec!["a", "", "b"]);
    }

    #[test]
    fn no_separation_with_name_policy() {
        let tokens = tokenize("raw payload", MessageStructure::NoSeparation, true);
        assert_eq!(tokens, vec!["Value", "raw payload"]);

        let tokens = tokenize("raw payload", MessageStructure::NoSeparation, false);
        assert_eq!(tokens, vec!["raw payload"]);
    }

    #[test]
    fn empty_message_yields_no_tokens() {
        assert!(tokenize("", MessageStructure::SpaceSeparated, true).is_empty());
        assert!(tokenize("", MessageStructure::NoSeparation, true).is_empty());
    }

    #[test]
    fn byte_structures_have_no_string_tokens() {
        assert!(tokenize("abc", MessageStructure::OneValuePerByte, true).is_empty());
        assert!(tokenize("abc", MessageStructure::FourByteFloatGroups, false).is_empty());
    }
}
