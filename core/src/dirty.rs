// Live form values and unsaved-change detection

use crate::models::Slide;
use crate::validation::{FieldKind, ValidationError};

/// Live values of the editor form
///
/// Numeric inputs are kept as the text the user typed; the display time is
/// in seconds while the record stores milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideForm {
    pub markup: String,
    pub name: String,
    pub owner: String,
    pub time: String,
    pub index: String,
    pub enabled: bool,
}

impl Default for SlideForm {
    fn default() -> Self {
        Self::empty()
    }
}

impl SlideForm {
    /// Form contents when no slide is selected
    pub fn empty() -> Self {
        Self {
            markup: String::new(),
            name: String::new(),
            owner: String::new(),
            time: "1".to_string(),
            index: String::new(),
            enabled: false,
        }
    }

    /// Populate the form from a record
    pub fn from_slide(slide: &Slide) -> Self {
        Self {
            markup: slide.markup.clone(),
            name: slide.name.clone(),
            owner: slide.owner.clone().unwrap_or_default(),
            time: format_seconds(slide.time),
            index: slide.index.to_string(),
            enabled: slide.enabled,
        }
    }

    /// Values fed to the validation gate
    pub fn validated_values(&self) -> [(FieldKind, &str); 3] {
        [
            (FieldKind::Name, self.name.as_str()),
            (FieldKind::Time, self.time.as_str()),
            (FieldKind::Index, self.index.as_str()),
        ]
    }

    /// Build the record to persist from `base` and the live values
    ///
    /// The owner is not editable and is carried over from `base`.
    pub fn to_slide(&self, base: &Slide) -> Result<Slide, ValidationError> {
        let time = parse_whole(&self.time)
            .and_then(|seconds| seconds.checked_mul(1000))
            .ok_or_else(|| ValidationError {
                field: FieldKind::Time,
                message: "The time must be a whole number of seconds.".to_string(),
            })?;
        let index = parse_whole(&self.index)
            .and_then(|i| u32::try_from(i).ok())
            .ok_or_else(|| ValidationError {
                field: FieldKind::Index,
                message: "The index must be an integer value.".to_string(),
            })?;

        Ok(Slide {
            id: base.id.clone(),
            name: self.name.clone(),
            owner: base.owner.clone(),
            time,
            markup: self.markup.clone(),
            index,
            enabled: self.enabled,
        })
    }
}

/// Form fields compared against the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirtyField {
    Markup,
    Name,
    Owner,
    Time,
    Index,
    Enabled,
}

/// Fields whose live value differs from the snapshot
pub fn changed_fields(snapshot: &Slide, form: &SlideForm) -> Vec<DirtyField> {
    let mut changed = Vec::new();
    if form.markup != snapshot.markup {
        changed.push(DirtyField::Markup);
    }
    if form.name != snapshot.name {
        changed.push(DirtyField::Name);
    }
    if form.owner != snapshot.owner.as_deref().unwrap_or("") {
        changed.push(DirtyField::Owner);
    }
    if !numeric_eq(&form.time, snapshot.time as f64 / 1000.0) {
        changed.push(DirtyField::Time);
    }
    if !numeric_eq(&form.index, f64::from(snapshot.index)) {
        changed.push(DirtyField::Index);
    }
    if form.enabled != snapshot.enabled {
        changed.push(DirtyField::Enabled);
    }
    changed
}

/// True when a slide is selected and any form field differs from it
pub fn is_dirty(snapshot: Option<&Slide>, form: &SlideForm) -> bool {
    match snapshot {
        Some(slide) => !changed_fields(slide, form).is_empty(),
        None => false,
    }
}

/// Compare typed text to a stored number; unparseable text never matches
fn numeric_eq(text: &str, value: f64) -> bool {
    text.trim().parse::<f64>().is_ok_and(|parsed| parsed == value)
}

/// Parse a non-negative whole number, truncating any fraction
fn parse_whole(text: &str) -> Option<u64> {
    let value = text.trim().parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value.trunc() as u64)
}

fn format_seconds(millis: u64) -> String {
    if millis % 1000 == 0 {
        (millis / 1000).to_string()
    } else {
        (millis as f64 / 1000.0).to_string()
    }
}
