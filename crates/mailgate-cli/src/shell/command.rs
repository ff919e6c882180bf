//! Parsing of one line of shell input into a [`Command`].

/// A single shell instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// Blank line; ignored.
    Empty,
    Exit,
    Help,
    Domains,
    /// `add <domain>`; the argument may be empty.
    Add(&'a str),
    /// `remove <domain>`; the argument may be empty.
    Remove(&'a str),
    /// Anything else: one or more addresses to validate.
    Validate(&'a str),
}

impl<'a> Command<'a> {
    /// Parse a raw input line.  Keywords are case-insensitive; arguments keep
    /// their original case.
    pub fn parse(input: &'a str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return Self::Empty;
        }

        if is_keyword(input, &["exit", "quit"]) {
            return Self::Exit;
        }
        if is_keyword(input, &["help", "?"]) {
            return Self::Help;
        }
        if is_keyword(input, &["domains"]) {
            return Self::Domains;
        }
        if let Some(domain) = argument(input, "add") {
            return Self::Add(domain);
        }
        if let Some(domain) = argument(input, "remove") {
            return Self::Remove(domain);
        }

        Self::Validate(input)
    }
}

fn is_keyword(input: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| input.eq_ignore_ascii_case(k))
}

/// `Some(rest)` when `input` is `keyword` alone or `keyword` + whitespace + rest.
fn argument<'a>(input: &'a str, keyword: &str) -> Option<&'a str> {
    let head = input.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }

    let rest = &input[keyword.len()..];
    if rest.is_empty() {
        return Some(rest);
    }
    rest.starts_with(char::is_whitespace).then(|| rest.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(Command::parse("EXIT"), Command::Exit);
        assert_eq!(Command::parse("  Quit "), Command::Exit);
        assert_eq!(Command::parse("Help"), Command::Help);
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse("DOMAINS"), Command::Domains);
    }

    #[test]
    fn blank_is_empty() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse(" \t "), Command::Empty);
    }

    #[test]
    fn add_and_remove_keep_argument_case() {
        assert_eq!(Command::parse("ADD Example.org"), Command::Add("Example.org"));
        assert_eq!(Command::parse("add    corp.io  "), Command::Add("corp.io"));
        assert_eq!(Command::parse("Remove GMAIL.com"), Command::Remove("GMAIL.com"));
        assert_eq!(Command::parse("remove\tyahoo.com"), Command::Remove("yahoo.com"));
    }

    #[test]
    fn bare_add_or_remove_has_empty_argument() {
        assert_eq!(Command::parse("add"), Command::Add(""));
        assert_eq!(Command::parse("REMOVE  "), Command::Remove(""));
    }

    #[test]
    fn keyword_prefix_without_space_is_an_email() {
        assert_eq!(
            Command::parse("address@gmail.com"),
            Command::Validate("address@gmail.com")
        );
        assert_eq!(
            Command::parse("removed@yahoo.com"),
            Command::Validate("removed@yahoo.com")
        );
        assert_eq!(Command::parse("exits"), Command::Validate("exits"));
    }

    #[test]
    fn non_ascii_input_does_not_panic() {
        assert_eq!(Command::parse("äöü"), Command::Validate("äöü"));
        assert_eq!(Command::parse("ré"), Command::Validate("ré"));
    }
}
