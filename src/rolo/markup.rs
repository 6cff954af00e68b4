//! # Markup Rendering
//!
//! Builds the HTML fragment for a contact list. The output is a plain string meant
//! for a [`RenderSurface`](crate::surface::RenderSurface); styling belongs to the
//! host page.
//!
//! Every user-controlled value goes through [`escape_html`] before it is placed in
//! the markup, whether it lands in text content or in an attribute.
//!
//! Row shapes:
//! - the row in edit mode renders as an inline form with Save/Cancel
//! - other rows render name/email/phone with Edit/Delete actions
//! - rows are `draggable` only when the view is unfiltered
//! - during a drag the source row gets `dragging` and the highlighted row `drag-over`
//!
//! Each row carries `data-index` with its **canonical** index.

use crate::commands::ListView;
use crate::index::DisplayContact;
use std::fmt::Write;

/// Encodes `& < > " '` as character references.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_contacts(view: &ListView) -> String {
    if view.contacts.is_empty() {
        return render_empty(view.filtered);
    }

    let mut out = String::new();
    for dc in &view.contacts {
        if view.editing == Some(dc.index) {
            render_edit_row(&mut out, dc);
        } else {
            render_row(&mut out, dc, view);
        }
    }
    out
}

fn render_empty(filtered: bool) -> String {
    let hint = if filtered {
        "Try a different search term"
    } else {
        "Add your first contact above!"
    };
    format!(
        "<div class=\"empty-state\">\n  <span class=\"empty-icon\">📋</span>\n  <p>No contacts found.</p>\n  <p class=\"empty-hint\">{}</p>\n</div>\n",
        hint
    )
}

// `write!` into a String cannot fail; results are ignored below.

fn render_row(out: &mut String, dc: &DisplayContact, view: &ListView) {
    let drag_attr = if view.reorderable() { " draggable=\"true\"" } else { "" };
    let mut class = String::from("contact-item");
    if view.dragging == Some(dc.index) {
        class.push_str(" dragging");
    }
    if view.drop_target == Some(dc.index) {
        class.push_str(" drag-over");
    }
    let _ = write!(
        out,
        "<div class=\"{class}\" data-index=\"{idx}\"{drag}>\n\
         \x20 <div class=\"contact-info\">\n\
         \x20   <div class=\"contact-name\">{name}</div>\n\
         \x20   <div class=\"contact-email\">{email}</div>\n\
         \x20   <div class=\"contact-phone\">{phone}</div>\n\
         \x20 </div>\n\
         \x20 <div class=\"contact-actions\">\n\
         \x20   <button class=\"btn-edit\" data-action=\"edit\" data-index=\"{idx}\">Edit</button>\n\
         \x20   <button class=\"btn-delete\" data-action=\"delete\" data-index=\"{idx}\">Delete</button>\n\
         \x20 </div>\n\
         </div>\n",
        class = class,
        idx = dc.index,
        drag = drag_attr,
        name = escape_html(&dc.contact.name),
        email = escape_html(&dc.contact.email),
        phone = escape_html(&dc.contact.phone),
    );
}

fn render_edit_row(out: &mut String, dc: &DisplayContact) {
    let _ = write!(
        out,
        "<div class=\"contact-item contact-item-editing\" data-index=\"{idx}\">\n\
         \x20 <div class=\"contact-edit-form\">\n\
         \x20   <input type=\"text\" class=\"contact-edit-input\" value=\"{name}\" data-field=\"name\">\n\
         \x20   <input type=\"email\" class=\"contact-edit-input\" value=\"{email}\" data-field=\"email\">\n\
         \x20   <input type=\"tel\" class=\"contact-edit-input\" value=\"{phone}\" data-field=\"phone\">\n\
         \x20   <div class=\"contact-actions\">\n\
         \x20     <button class=\"btn-save\" data-action=\"save\" data-index=\"{idx}\">Save</button>\n\
         \x20     <button class=\"btn-cancel\" data-action=\"cancel\">Cancel</button>\n\
         \x20   </div>\n\
         \x20 </div>\n\
         </div>\n",
        idx = dc.index,
        name = escape_html(&dc.contact.name),
        email = escape_html(&dc.contact.email),
        phone = escape_html(&dc.contact.phone),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Contact;

    fn view(contacts: Vec<(usize, Contact)>, filtered: bool, editing: Option<usize>) -> ListView {
        let total = contacts.len();
        ListView {
            contacts: contacts
                .into_iter()
                .map(|(index, contact)| DisplayContact { index, contact })
                .collect(),
            filtered,
            editing,
            total,
            ..Default::default()
        }
    }

    #[test]
    fn escapes_all_five() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn user_fields_never_reach_markup_raw() {
        let evil = Contact::new(
            "<script>alert(1)</script>",
            "x\"onmouseover=\"y@z.co",
            "5550000000'",
        );
        let html = render_contacts(&view(vec![(0, evil.clone())], false, None));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("x\"onmouseover"));

        let html = render_contacts(&view(vec![(0, evil)], false, Some(0)));
        assert!(html.contains("value=\"x&quot;onmouseover=&quot;y@z.co\""));
    }

    #[test]
    fn rows_carry_canonical_index() {
        let html = render_contacts(&view(
            vec![(4, Contact::new("Ada", "ada@x.io", "5550000000"))],
            true,
            None,
        ));
        assert!(html.contains("data-index=\"4\""));
        assert!(!html.contains("data-index=\"0\""));
    }

    #[test]
    fn draggable_only_when_unfiltered() {
        let rows = vec![(0, Contact::new("Ada", "ada@x.io", "5550000000"))];
        assert!(render_contacts(&view(rows.clone(), false, None)).contains("draggable=\"true\""));
        assert!(!render_contacts(&view(rows, true, None)).contains("draggable"));
    }

    #[test]
    fn editing_row_renders_form() {
        let rows = vec![
            (0, Contact::new("Ada", "ada@x.io", "5550000000")),
            (1, Contact::new("Bob", "bob@x.io", "5550000001")),
        ];
        let html = render_contacts(&view(rows, false, Some(1)));
        assert_eq!(html.matches("contact-item-editing").count(), 1);
        assert!(html.contains("value=\"Bob\""));
        assert!(html.contains("<div class=\"contact-name\">Ada</div>"));
    }

    #[test]
    fn empty_state_hint_depends_on_filter() {
        assert!(
            render_contacts(&view(vec![], false, None)).contains("Add your first contact above!")
        );
        assert!(render_contacts(&view(vec![], true, None)).contains("Try a different search term"));
    }

    #[test]
    fn drag_classes_mark_source_and_target() {
        let rows = vec![
            (0, Contact::new("Ada", "ada@x.io", "5550000000")),
            (1, Contact::new("Bob", "bob@x.io", "5550000001")),
            (2, Contact::new("Cy", "cy@x.io", "5550000002")),
        ];
        let mut v = view(rows, false, None);
        v.dragging = Some(0);
        v.drop_target = Some(2);
        let html = render_contacts(&v);
        assert!(html.contains("<div class=\"contact-item dragging\" data-index=\"0\""));
        assert!(html.contains("<div class=\"contact-item\" data-index=\"1\""));
        assert!(html.contains("<div class=\"contact-item drag-over\" data-index=\"2\""));
    }
}
