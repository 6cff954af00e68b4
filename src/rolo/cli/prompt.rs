//! Terminal stand-ins for the library's surfaces.
//!
//! Prompts go to stderr so stdout stays clean for piping. Answers are read from
//! stdin line by line, which also works when stdin is a pipe.

use super::styles;
use console::Term;
use rolo::model::Contact;
use rolo::surface::{Confirm, RenderSurface};
use std::io::{self, BufRead};

/// Fields given on the command line; they skip the prompts entirely.
#[derive(Debug, Default)]
pub(super) struct FieldOverrides {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl FieldOverrides {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    /// `current` with every given field replaced.
    pub fn apply(self, current: &Contact) -> Contact {
        Contact {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            email: self.email.unwrap_or_else(|| current.email.clone()),
            phone: self.phone.unwrap_or_else(|| current.phone.clone()),
        }
    }
}

pub(super) struct TerminalConfirm {
    term: Term,
}

impl TerminalConfirm {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        let question = format!("{} [y/N] ", styles::PROMPT.apply_to(prompt));
        if self.term.write_str(&question).is_err() {
            return false;
        }
        match read_answer() {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }
}

/// Asks for each field in turn. An empty answer (or EOF) keeps the current value.
pub(super) fn prompt_contact(current: &Contact) -> io::Result<Contact> {
    let term = Term::stderr();
    Ok(Contact {
        name: prompt_field(&term, "Name", &current.name)?,
        email: prompt_field(&term, "Email", &current.email)?,
        phone: prompt_field(&term, "Phone", &current.phone)?,
    })
}

fn prompt_field(term: &Term, label: &str, current: &str) -> io::Result<String> {
    term.write_str(&format!(
        "{} {}: ",
        styles::PROMPT.apply_to(label),
        styles::CURRENT_VALUE.apply_to(format!("[{}]", current))
    ))?;
    let answer = read_answer()?.unwrap_or_default();
    if answer.trim().is_empty() {
        Ok(current.to_string())
    } else {
        Ok(answer)
    }
}

/// One line from stdin without its line ending. `None` at EOF.
fn read_answer() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Writes the rendered markup to stdout.
pub(super) struct HtmlOutput;

impl RenderSurface for HtmlOutput {
    fn render(&mut self, markup: &str, count_label: &str) {
        print!("{}", markup);
        println!("<p class=\"contact-count\">{}</p>", count_label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_fields() {
        let current = Contact::new("Ada", "ada@x.io", "5551234567");
        let overrides = FieldOverrides {
            email: Some("ada@engine.org".to_string()),
            ..Default::default()
        };
        assert!(!overrides.is_empty());
        assert_eq!(
            overrides.apply(&current),
            Contact::new("Ada", "ada@engine.org", "5551234567")
        );
    }

    #[test]
    fn no_overrides_is_empty() {
        assert!(FieldOverrides::default().is_empty());
    }
}
