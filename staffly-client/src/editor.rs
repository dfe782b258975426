//! Field patch editor
//!
//! Per-field Viewing/Editing state machine issuing single-field
//! partial updates. The persisted attribute name is an explicit
//! mapping on [`EmployeeField`], never derived from the display label,
//! so labels are free to be localized or renamed.

use shared::models::{Employee, EmployeeUpdate};

use crate::store::EmployeeDetailStore;
use crate::{ClientError, ClientResult, EmployeeApi};

/// Editable employee fields with their display label and persisted
/// attribute name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    Name,
    Phone,
    Instagram,
    Telegram,
    Whatsapp,
    Viber,
    Photo,
}

impl EmployeeField {
    /// Display label shown next to the field
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Instagram => "Instagram",
            Self::Telegram => "Telegram",
            Self::Whatsapp => "WhatsApp",
            Self::Viber => "Viber",
            Self::Photo => "Photo",
        }
    }

    /// Persisted attribute name, as the PATCH payload carries it
    pub fn attribute(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Instagram => "instagram",
            Self::Telegram => "telegram",
            Self::Whatsapp => "whatsapp",
            Self::Viber => "viber",
            Self::Photo => "photo",
        }
    }

    /// Current value of this field on an employee
    pub fn value_of<'a>(&self, employee: &'a Employee) -> Option<&'a str> {
        match self {
            Self::Name => Some(employee.name.as_str()),
            Self::Phone => employee.phone.as_deref(),
            Self::Instagram => employee.instagram.as_deref(),
            Self::Telegram => employee.telegram.as_deref(),
            Self::Whatsapp => employee.whatsapp.as_deref(),
            Self::Viber => employee.viber.as_deref(),
            Self::Photo => employee.photo.as_deref(),
        }
    }

    /// Write a confirmed value onto an employee, touching nothing else
    pub fn apply(&self, employee: &mut Employee, value: String) {
        match self {
            Self::Name => employee.name = value,
            Self::Phone => employee.phone = Some(value),
            Self::Instagram => employee.instagram = Some(value),
            Self::Telegram => employee.telegram = Some(value),
            Self::Whatsapp => employee.whatsapp = Some(value),
            Self::Viber => employee.viber = Some(value),
            Self::Photo => employee.photo = Some(value),
        }
    }

    /// Build a partial update carrying exactly this one field
    pub fn patch(&self, value: String) -> EmployeeUpdate {
        let mut update = EmployeeUpdate::default();
        match self {
            Self::Name => update.name = Some(value),
            Self::Phone => update.phone = Some(value),
            Self::Instagram => update.instagram = Some(value),
            Self::Telegram => update.telegram = Some(value),
            Self::Whatsapp => update.whatsapp = Some(value),
            Self::Viber => update.viber = Some(value),
            Self::Photo => update.photo = Some(value),
        }
        update
    }
}

/// Editor state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Viewing,
    Editing,
}

/// Per-field editor state machine
#[derive(Debug, Clone)]
pub struct FieldEditor {
    field: EmployeeField,
    state: EditorState,
    draft: String,
}

impl FieldEditor {
    pub fn new(field: EmployeeField) -> Self {
        Self {
            field,
            state: EditorState::Viewing,
            draft: String::new(),
        }
    }

    pub fn field(&self) -> EmployeeField {
        self.field
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == EditorState::Editing
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// A row with no value renders nothing while not being edited
    pub fn is_hidden(&self, current: Option<&str>) -> bool {
        !self.is_editing() && current.map_or(true, str::is_empty)
    }

    /// Viewing -> Editing, draft seeded from the current value
    pub fn begin(&mut self, current: Option<&str>) {
        self.draft = current.unwrap_or_default().to_string();
        self.state = EditorState::Editing;
    }

    /// Replace the draft text
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Editing -> Viewing without a network call, draft restored to
    /// the last-known value
    pub fn cancel(&mut self, current: Option<&str>) {
        self.draft = current.unwrap_or_default().to_string();
        self.state = EditorState::Viewing;
    }

    /// Commit the draft: PATCH the single field, merge the confirmed
    /// value into the open record, return to Viewing.
    ///
    /// On failure the editor stays in Editing with the draft intact so
    /// the user can retry; no automatic retry happens here.
    pub async fn commit(
        &mut self,
        api: &EmployeeApi,
        detail: &EmployeeDetailStore,
    ) -> ClientResult<Employee> {
        let id = detail
            .open_id()
            .ok_or_else(|| ClientError::NotFound("No employee is open".into()))?;

        let update = self.field.patch(self.draft.clone());
        let employee = api.update(id, &update).await?;

        // Merge what the server stored, not the draft; the two differ
        // when the server canonicalizes the value
        let confirmed = self
            .field
            .value_of(&employee)
            .unwrap_or_default()
            .to_string();
        detail.update_field(self.field, confirmed);
        self.state = EditorState::Viewing;
        Ok(employee)
    }
}
