use std::fmt;

pub const TITLE_MAX_LENGTH: usize = 50;
pub const DESCRIPTION_MAX_LENGTH: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormFieldKind {
	Title,
	Description,
}

impl fmt::Display for FormFieldKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FormFieldKind::Title => write!(f, "title"),
			FormFieldKind::Description => write!(f, "description"),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormField {
	pub value: String,
	pub touched: bool,
}

/// Inputs of the new ballot modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBallotForm {
	pub title: FormField,
	pub description: FormField,
}

impl NewBallotForm {
	pub fn new() -> NewBallotForm {
		NewBallotForm::default()
	}

	pub fn field(&self, kind: FormFieldKind) -> &FormField {
		match kind {
			FormFieldKind::Title => &self.title,
			FormFieldKind::Description => &self.description,
		}
	}

	fn field_mut(&mut self, kind: FormFieldKind) -> &mut FormField {
		match kind {
			FormFieldKind::Title => &mut self.title,
			FormFieldKind::Description => &mut self.description,
		}
	}

	pub fn set_value(&mut self, kind: FormFieldKind, value: impl Into<String>) {
		self.field_mut(kind).value = value.into();
	}

	/// Field left by the user
	pub fn touch(&mut self, kind: FormFieldKind) {
		self.field_mut(kind).touched = true;
	}

	pub fn error(&self, kind: FormFieldKind) -> Option<&'static str> {
		let length = self.field(kind).value.chars().count();
		match kind {
			FormFieldKind::Title if length == 0 => Some("Title is required"),
			FormFieldKind::Title if length > TITLE_MAX_LENGTH => Some("Title must have up to 50 characters"),
			FormFieldKind::Description if length == 0 => Some("Description is required"),
			FormFieldKind::Description if length > DESCRIPTION_MAX_LENGTH =>
				Some("Description must have up to 200 characters"),
			_ => None,
		}
	}

	pub fn errors(&self) -> Vec<(FormFieldKind, &'static str)> {
		[FormFieldKind::Title, FormFieldKind::Description]
			.into_iter()
			.filter_map(|kind| self.error(kind).map(|message| (kind, message)))
			.collect()
	}

	pub fn is_valid(&self) -> bool {
		self.errors().is_empty()
	}

	pub fn display_error(&self, kind: FormFieldKind) -> bool {
		self.field(kind).touched && self.error(kind).is_some()
	}

	pub fn display_success(&self, kind: FormFieldKind) -> bool {
		self.field(kind).touched && self.error(kind).is_none()
	}

	/// Submit-time check. Failing fields are marked touched so their errors show.
	pub fn validate(&mut self) -> bool {
		let errors = self.errors();
		for (kind, _) in &errors {
			self.touch(*kind);
		}
		errors.is_empty()
	}

	pub fn reset(&mut self) {
		*self = NewBallotForm::default();
	}
}
