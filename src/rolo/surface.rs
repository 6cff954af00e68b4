//! External collaborators.
//!
//! The library never draws, prompts, or reads input on its own. A host (the CLI, a
//! web shell, a test) hands these in to the [`RoloApi`](crate::api::RoloApi)
//! methods that need them.

use crate::commands::MessageLevel;
use crate::model::Contact;

/// Receives one markup string per render pass.
pub trait RenderSurface {
    fn render(&mut self, markup: &str, count_label: &str);
}

/// The add/edit form: three text fields and a submit button with a mutable label.
pub trait FormSurface {
    fn read(&self) -> Contact;
    fn fill(&mut self, contact: &Contact);
    fn reset(&mut self);
    fn set_submit_label(&mut self, label: &str);
}

/// Blocking yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Where transient status text goes.
pub trait MessageSurface {
    fn show(&mut self, level: MessageLevel, text: &str);
    fn clear(&mut self);
}

/// Answers every prompt the same way (`--yes`, scripted hosts).
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

/// In-memory surfaces for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub markup: String,
    pub count_label: String,
    pub renders: usize,
    pub fields: Option<Contact>,
    pub submit_label: String,
    pub message: Option<(MessageLevel, String)>,
    pub prompts: Vec<String>,
    pub answer: bool,
}

impl RenderSurface for Recorder {
    fn render(&mut self, markup: &str, count_label: &str) {
        self.markup = markup.to_string();
        self.count_label = count_label.to_string();
        self.renders += 1;
    }
}

impl FormSurface for Recorder {
    fn read(&self) -> Contact {
        self.fields
            .clone()
            .unwrap_or_else(|| Contact::new("", "", ""))
    }

    fn fill(&mut self, contact: &Contact) {
        self.fields = Some(contact.clone());
    }

    fn reset(&mut self) {
        self.fields = None;
    }

    fn set_submit_label(&mut self, label: &str) {
        self.submit_label = label.to_string();
    }
}

impl Confirm for Recorder {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answer
    }
}

impl MessageSurface for Recorder {
    fn show(&mut self, level: MessageLevel, text: &str) {
        self.message = Some((level, text.to_string()));
    }

    fn clear(&mut self) {
        self.message = None;
    }
}
