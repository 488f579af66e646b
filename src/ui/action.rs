#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    List,
    Update,
    Remove,
    Search,
    Export,
    Exit,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Add,
        Action::List,
        Action::Update,
        Action::Remove,
        Action::Search,
        Action::Export,
        Action::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::Add => "Add task",
            Action::List => "List tasks",
            Action::Update => "Update task",
            Action::Remove => "Remove task",
            Action::Search => "Search tasks",
            Action::Export => "Export tasks",
            Action::Exit => "Exit",
        }
    }

    /// Accepts the 1-based menu number, the full label, or its first word,
    /// ignoring case.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(n) = input.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied());
        }
        let input = input.to_lowercase();
        Self::ALL.into_iter().find(|a| {
            let label = a.label().to_lowercase();
            label == input || label.split_whitespace().next() == Some(input.as_str())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_labels() {
        assert_eq!(Action::parse("1"), Some(Action::Add));
        assert_eq!(Action::parse("7"), Some(Action::Exit));
        assert_eq!(Action::parse("Search Task"), None);
        assert_eq!(Action::parse("search tasks"), Some(Action::Search));
        assert_eq!(Action::parse("SEARCH"), Some(Action::Search));
        assert_eq!(Action::parse(" export "), Some(Action::Export));
    }

    #[test]
    fn rejects_unknown_choices() {
        assert_eq!(Action::parse("0"), None);
        assert_eq!(Action::parse("8"), None);
        assert_eq!(Action::parse("archive"), None);
        assert_eq!(Action::parse(""), None);
    }
}
