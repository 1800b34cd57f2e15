//! Narration sinks
//!
//! Every behavior in the crate describes what it does as human-readable
//! lines. Those lines are the program's product output, so they go through a
//! [`Narrator`] rather than straight to stdout: the CLI prints them, tests
//! collect them in a [`Transcript`].

/// Destination for narration lines
pub trait Narrator {
    fn say(&mut self, line: String);

    /// Emit an empty separator line
    fn blank(&mut self) {
        self.say(String::new());
    }

    /// Emit a `=====` framed section title
    fn banner(&mut self, title: &str, width: usize) {
        let rule = "=".repeat(width);
        self.say(rule.clone());
        self.say(title.to_string());
        self.say(rule);
    }
}

/// Writes narration to standard output
#[derive(Debug, Default)]
pub struct ConsoleNarrator;

impl Narrator for ConsoleNarrator {
    fn say(&mut self, line: String) {
        println!("{}", line);
    }
}

/// Collects narration in memory
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True if any line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    /// Index of the first line containing `needle`
    pub fn position(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.contains(needle))
    }

    /// Number of lines containing `needle`
    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|l| l.contains(needle)).count()
    }
}

impl Narrator for Transcript {
    fn say(&mut self, line: String) {
        self.lines.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_queries() {
        let mut t = Transcript::new();
        t.say("Feeding Simba".to_string());
        t.blank();
        t.say("Feeding Dumbo".to_string());

        assert_eq!(t.lines().len(), 3);
        assert_eq!(t.position("Dumbo"), Some(2));
        assert_eq!(t.count("Feeding"), 2);
        assert!(!t.contains("Polly"));
    }

    #[test]
    fn test_banner() {
        let mut t = Transcript::new();
        t.banner("Zoo", 4);
        assert_eq!(t.lines(), &["====", "Zoo", "===="]);
    }
}
