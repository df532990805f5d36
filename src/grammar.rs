use std::{fs, io, path::Path};

/// A descriptive grammar rule table loaded from a BNF-style file.
///
/// The table exists purely for inspection: the `--grammar` flag loads a
/// grammar-description file and prints the rules it contains. The parser
/// and evaluator never consult it.
///
/// The file format is line-oriented:
///
/// ```text
///     expression ::= term (op term)*
///     op         ::= '+' | '-' | '*'
///                  | '==' | '!='
/// ```
/// A line containing `::=` starts a new rule whose alternatives are split
/// on `|`; a line without `::=` continues the most recent rule with more
/// alternatives. Blank lines, and continuation lines appearing before any
/// rule, are ignored.
pub struct GrammarTable {
    rules: Vec<(String, Vec<String>)>,
}

impl GrammarTable {
    /// Builds a rule table from grammar-description text.
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        let mut rules: Vec<(String, Vec<String>)> = Vec::new();

        for line in source.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Some((lhs, rhs)) = trimmed.split_once("::=") {
                rules.push((lhs.trim().to_string(), split_alternatives(rhs)));
            } else if let Some((_, alternatives)) = rules.last_mut() {
                alternatives.extend(split_alternatives(trimmed));
            }
        }

        Self { rules }
    }

    /// Loads a rule table from a grammar-description file.
    ///
    /// # Errors
    /// Returns the underlying I/O error when the file cannot be read.
    pub fn load(path: &Path) -> io::Result<Self> {
        Ok(Self::from_source(&fs::read_to_string(path)?))
    }

    /// The parsed rules, in file order.
    #[must_use]
    pub fn rules(&self) -> &[(String, Vec<String>)] {
        &self.rules
    }

    /// Returns `true` when the table holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn split_alternatives(rhs: &str) -> Vec<String> {
    rhs.split('|')
       .map(|alternative| alternative.trim().to_string())
       .filter(|alternative| !alternative.is_empty())
       .collect()
}

impl std::fmt::Display for GrammarTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.rules
                        .iter()
                        .map(|(lhs, _)| lhs.len())
                        .max()
                        .unwrap_or(0);

        for (lhs, alternatives) in &self.rules {
            writeln!(f, "{lhs:<width$} ::= {}", alternatives.join(" | "))?;
        }

        Ok(())
    }
}
