#[cfg(test)]
mod test {

    use linked_stack::{command, BrowserHistoryStack, Error};

    const GOOGLE: &str = "https://www.google.com";
    const FACEBOOK: &str = "https://www.facebook.com";
    const MICROSOFT: &str = "https://www.microsoft.com";
    const GITHUB: &str = "https://www.github.com";

    fn history() -> BrowserHistoryStack<String> {
        let mut history = BrowserHistoryStack::new();
        history.push(GOOGLE.to_owned());
        history.push(FACEBOOK.to_owned());
        history.push(MICROSOFT.to_owned());
        history
    }

    fn contains(history: &BrowserHistoryStack<String>, url: &str) -> bool {
        history.contains(&url.to_owned())
    }

    #[test]
    fn test_history() {
        let mut history = history();
        assert_eq!(history.size(), 3);
        assert_eq!(
            history.stack_string(),
            r#"(3 elements): "https://www.google.com" --> "https://www.facebook.com" --> "https://www.microsoft.com""#
        );

        assert_eq!(history.peek().map(String::as_str), Some(MICROSOFT));
        assert_eq!(history.size(), 3);

        assert_eq!(history.pop().as_deref(), Some(MICROSOFT));
        assert_eq!(history.size(), 2);
        assert_eq!(
            history.stack_string(),
            r#"(2 elements): "https://www.google.com" --> "https://www.facebook.com""#
        );
        assert!(contains(&history, GOOGLE));
        assert!(contains(&history, FACEBOOK));
        assert!(!contains(&history, MICROSOFT));
    }

    #[test]
    fn test_history_push() {
        let mut history = history();
        history.push(GITHUB.to_owned());
        assert_eq!(history.size(), 4);
        for url in [GOOGLE, FACEBOOK, MICROSOFT, GITHUB] {
            assert!(contains(&history, url));
        }
        assert_eq!(
            history.stack_string(),
            r#"(4 elements): "https://www.google.com" --> "https://www.facebook.com" --> "https://www.microsoft.com" --> "https://www.github.com""#
        );
    }

    #[test]
    fn test_history_pop() {
        let mut history = history();
        assert_eq!(history.pop().as_deref(), Some(MICROSOFT));
        assert_eq!(history.pop().as_deref(), Some(FACEBOOK));
        assert_eq!(history.stack_string(), r#"(1 elements): "https://www.google.com""#);
        assert_eq!(history.pop().as_deref(), Some(GOOGLE));
        assert_eq!(history.size(), 0);
        assert!(history.is_empty());
        assert!(!contains(&history, GOOGLE));
        assert_eq!(history.stack_string(), "empty list");
        assert_eq!(history.pop(), None);
        assert_eq!(history.peek(), None);
    }

    #[test]
    fn test_history_script() {
        let mut history = BrowserHistoryStack::new();
        let script = format!("# session\npush {}\npush {}\npop\npeek\nprint\n", GOOGLE, GITHUB);
        let output = command::run_script(&script, &mut history).unwrap();
        assert_eq!(
            output,
            vec![
                "".to_owned(),
                "".to_owned(),
                GITHUB.to_owned(),
                GOOGLE.to_owned(),
                r#"(1 elements): "https://www.google.com""#.to_owned(),
            ]
        );
    }

    #[test]
    fn test_history_script_error() {
        let mut history = BrowserHistoryStack::new();
        let err = command::run_script("push a\ncontains\n", &mut history).unwrap_err();
        assert_eq!(err.to_string(), "line 2: command `contains` needs an argument");
        assert!(matches!(err, Error::InvalidLine { line: 2, .. }));
        assert!(history.is_empty());
    }
}
