//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every rolo operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the instance state: the [`DataStore`] and the [`ContactBook`]
//! - **Dispatches** to the appropriate command function
//! - **Consults collaborators** the commands must not know about (delete confirmation)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! The `*_with` methods are the event-handler flavour: they take the host's
//! [surfaces](crate::surface) and push the outcome into them (form reset, submit
//! label, re-render) the way a browser handler would.
//!
//! ## Generic Over DataStore
//!
//! `RoloApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RoloApi<FileStore>`
//! - Testing: `RoloApi<InMemoryStore>`

use crate::commands;
use crate::config::RoloConfig;
use crate::error::Result;
use crate::markup;
use crate::model::Contact;
use crate::session::ContactBook;
use crate::store::DataStore;
use crate::surface::{Confirm, FormSurface, MessageSurface, RenderSurface};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this contact?";

/// The main API facade for rolo operations.
pub struct RoloApi<S: DataStore> {
    store: S,
    book: ContactBook,
    config_dir: PathBuf,
}

impl<S: DataStore> RoloApi<S> {
    /// Loads the collection from `store`. A missing or unreadable collection starts empty.
    pub fn new(store: S, config: &RoloConfig, config_dir: PathBuf) -> Self {
        let book = ContactBook::load(&store, config);
        Self {
            store,
            book,
            config_dir,
        }
    }

    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.book)
    }

    pub fn search(&mut self, term: &str) -> CmdResult {
        commands::list::search(&mut self.book, term)
    }

    pub fn add_contact(&mut self, contact: Contact) -> Result<CmdResult> {
        commands::create::run(&mut self.book, &mut self.store, contact)
    }

    pub fn update_contact(&mut self, index: usize, contact: Contact) -> Result<CmdResult> {
        commands::update::run(&mut self.book, &mut self.store, index, contact)
    }

    /// Asks `confirm` first. A declined prompt is not an error.
    pub fn delete_contact<C: Confirm>(
        &mut self,
        index: usize,
        confirm: &mut C,
    ) -> Result<CmdResult> {
        self.book.collection().check_index(index)?;
        if !confirm.confirm(DELETE_PROMPT) {
            let mut result = CmdResult::rendered(&self.book);
            result.add_message(CmdMessage::info("Delete cancelled."));
            return Ok(result);
        }
        commands::delete::run(&mut self.book, &mut self.store, index)
    }

    pub fn begin_edit(&mut self, index: usize) -> Result<CmdResult> {
        commands::edit::begin(&mut self.book, index)
    }

    pub fn save_edit(&mut self, contact: Contact) -> Result<CmdResult> {
        commands::edit::save(&mut self.book, &mut self.store, contact)
    }

    pub fn cancel_edit(&mut self) -> CmdResult {
        commands::edit::cancel(&mut self.book)
    }

    pub fn submit(&mut self, contact: Contact) -> Result<CmdResult> {
        commands::edit::submit(&mut self.book, &mut self.store, contact)
    }

    pub fn move_contact(&mut self, source: usize, target: usize) -> Result<CmdResult> {
        commands::move_contact::run(&mut self.book, &mut self.store, source, target)
    }

    pub fn drag_start(&mut self, index: usize) -> bool {
        commands::move_contact::drag_start(&mut self.book, index)
    }

    pub fn drag_over(&mut self, index: usize) {
        commands::move_contact::drag_over(&mut self.book, index)
    }

    pub fn drag_leave(&mut self, index: usize) {
        commands::move_contact::drag_leave(&mut self.book, index)
    }

    pub fn drop_on(&mut self, target: usize) -> Result<CmdResult> {
        commands::move_contact::drop_on(&mut self.book, &mut self.store, target)
    }

    pub fn drag_end(&mut self) {
        commands::move_contact::drag_end(&mut self.book)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    /// Clears an expired flash. Returns `true` if something was cleared.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        self.book.tick(now)
    }

    // --- Surface-driven handlers ---

    pub fn render_with<R: RenderSurface>(&self, surface: &mut R) {
        let view = ListView::of(&self.book);
        surface.render(&markup::render_contacts(&view), &view.count_label());
    }

    /// The form's submit button: create or update depending on the edit session.
    /// On success the form is reset; on a validation error it is left as typed.
    pub fn submit_with<F, R>(&mut self, form: &mut F, surface: &mut R) -> Result<CmdResult>
    where
        F: FormSurface,
        R: RenderSurface,
    {
        let result = self.submit(form.read())?;
        form.reset();
        form.set_submit_label(self.book.submit_mode().label());
        self.render_with(surface);
        Ok(result)
    }

    pub fn begin_edit_with<F, R>(
        &mut self,
        index: usize,
        form: &mut F,
        surface: &mut R,
    ) -> Result<CmdResult>
    where
        F: FormSurface,
        R: RenderSurface,
    {
        let result = self.begin_edit(index)?;
        if let Some(contact) = &result.form {
            form.fill(contact);
        }
        form.set_submit_label(self.book.submit_mode().label());
        self.render_with(surface);
        Ok(result)
    }

    pub fn cancel_edit_with<F, R>(&mut self, form: &mut F, surface: &mut R) -> CmdResult
    where
        F: FormSurface,
        R: RenderSurface,
    {
        let result = self.cancel_edit();
        form.reset();
        form.set_submit_label(self.book.submit_mode().label());
        self.render_with(surface);
        result
    }

    pub fn delete_with<C, R>(
        &mut self,
        index: usize,
        confirm: &mut C,
        surface: &mut R,
    ) -> Result<CmdResult>
    where
        C: Confirm,
        R: RenderSurface,
    {
        let result = self.delete_contact(index, confirm)?;
        self.render_with(surface);
        Ok(result)
    }

    /// Mirrors the flash into `surface`, clearing it once expired.
    pub fn show_message_with<M: MessageSurface>(&mut self, surface: &mut M, now: DateTime<Utc>) {
        self.book.tick(now);
        match self.book.flash() {
            Some(flash) => surface.show(flash.level(), flash.text()),
            None => surface.clear(),
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, ListView, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoloError;
    use crate::session::EditState;
    use crate::store::memory::fixtures::{numbered, StoreFixture};
    use crate::store::memory::InMemoryStore;
    use crate::surface::{AutoConfirm, Recorder};
    use chrono::Duration;

    fn api(n: usize) -> RoloApi<InMemoryStore> {
        let fx = StoreFixture::new().with_numbered(n);
        RoloApi::new(fx.store, &RoloConfig::default(), PathBuf::from("/nonexistent"))
    }

    #[test]
    fn loads_on_construction() {
        let api = api(3);
        assert_eq!(api.list().view.total, 3);
    }

    #[test]
    fn delete_asks_before_removing() {
        let mut api = api(3);
        let mut ui = Recorder::default();

        let result = api.delete_contact(1, &mut ui).unwrap();
        assert_eq!(ui.prompts, vec![DELETE_PROMPT.to_string()]);
        assert_eq!(result.messages[0].content, "Delete cancelled.");
        assert_eq!(api.book().collection().len(), 3);

        api.delete_contact(1, &mut AutoConfirm(true)).unwrap();
        assert_eq!(
            api.book().collection().contacts(),
            vec![numbered(1), numbered(3)]
        );
    }

    #[test]
    fn delete_out_of_range_does_not_prompt() {
        let mut api = api(3);
        let mut ui = Recorder {
            answer: true,
            ..Default::default()
        };
        let err = api.delete_contact(3, &mut ui).unwrap_err();
        assert!(matches!(err, RoloError::IndexOutOfRange { .. }));
        assert!(ui.prompts.is_empty());
    }

    #[test]
    fn form_flow_add_then_edit() {
        let mut api = api(0);
        let mut form = Recorder::default();
        let mut list = Recorder::default();

        form.fill(&Contact::new("Ada", "ada@x.io", "5551234567"));
        api.submit_with(&mut form, &mut list).unwrap();
        assert_eq!(form.fields, None);
        assert_eq!(form.submit_label, "Add Contact");
        assert_eq!(list.count_label, "1 contact");
        assert!(list.markup.contains("Ada"));

        api.begin_edit_with(0, &mut form, &mut list).unwrap();
        assert_eq!(form.read(), Contact::new("Ada", "ada@x.io", "5551234567"));
        assert_eq!(form.submit_label, "Update Contact");
        assert!(list.markup.contains("contact-item-editing"));

        form.fill(&Contact::new("Ada L.", "ada@x.io", "5551234567"));
        api.submit_with(&mut form, &mut list).unwrap();
        assert_eq!(api.book().edit_state(), EditState::Idle);
        assert_eq!(form.submit_label, "Add Contact");
        assert_eq!(api.book().collection().len(), 1);
        assert!(list.markup.contains("Ada L."));
    }

    #[test]
    fn invalid_submit_keeps_form() {
        let mut api = api(0);
        let mut form = Recorder::default();
        let mut list = Recorder::default();
        form.fill(&Contact::new("Ada", "ada", "5551234567"));

        assert!(api.submit_with(&mut form, &mut list).is_err());
        assert!(form.fields.is_some());
        assert_eq!(list.renders, 0);
    }

    #[test]
    fn cancel_with_resets_form_and_label() {
        let mut api = api(2);
        let mut form = Recorder::default();
        let mut list = Recorder::default();
        api.begin_edit_with(1, &mut form, &mut list).unwrap();
        api.cancel_edit_with(&mut form, &mut list);
        assert_eq!(form.fields, None);
        assert_eq!(form.submit_label, "Add Contact");
        assert!(!list.markup.contains("contact-item-editing"));
    }

    #[test]
    fn message_surface_clears_after_ttl() {
        let mut api = api(0);
        let mut messages = Recorder::default();
        api.add_contact(numbered(1)).unwrap();

        let posted = api.book().flash().unwrap().posted_at;
        api.show_message_with(&mut messages, posted);
        assert_eq!(
            messages.message,
            Some((MessageLevel::Success, "Contact added successfully!".to_string()))
        );

        api.show_message_with(&mut messages, posted + Duration::seconds(3));
        assert_eq!(messages.message, None);
    }

    #[test]
    fn drag_and_drop_through_api() {
        let mut api = api(4);
        assert!(api.drag_start(0));
        api.drag_over(2);
        api.drop_on(2).unwrap();
        api.drag_end();
        assert_eq!(
            api.book().collection().contacts(),
            vec![numbered(2), numbered(1), numbered(3), numbered(4)]
        );
    }
}
