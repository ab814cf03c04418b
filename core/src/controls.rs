// Enabled/disabled gating of the editor inputs and actions

/// Input and action gating for the editor form
///
/// `save_permitted` mirrors the validation gate. `remove_permitted` is
/// false for a record that has never been persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorControlState {
    #[default]
    Disabled,
    Enabled {
        save_permitted: bool,
        remove_permitted: bool,
    },
}

impl EditorControlState {
    /// Enable after a record became the selected record
    pub fn enable(&mut self, form_valid: bool, persisted: bool) {
        *self = EditorControlState::Enabled {
            save_permitted: form_valid,
            remove_permitted: persisted,
        };
    }

    pub fn disable(&mut self) {
        *self = EditorControlState::Disabled;
    }

    /// Apply the latest validation gate flag; ignored while disabled
    pub fn set_save_permitted(&mut self, permitted: bool) {
        if let EditorControlState::Enabled { save_permitted, .. } = self {
            *save_permitted = permitted;
        }
    }

    /// Ignored while disabled
    pub fn set_remove_permitted(&mut self, permitted: bool) {
        if let EditorControlState::Enabled {
            remove_permitted, ..
        } = self
        {
            *remove_permitted = permitted;
        }
    }

    pub fn inputs_enabled(&self) -> bool {
        matches!(self, EditorControlState::Enabled { .. })
    }

    pub fn save_enabled(&self) -> bool {
        matches!(
            self,
            EditorControlState::Enabled {
                save_permitted: true,
                ..
            }
        )
    }

    pub fn remove_enabled(&self) -> bool {
        matches!(
            self,
            EditorControlState::Enabled {
                remove_permitted: true,
                ..
            }
        )
    }
}
