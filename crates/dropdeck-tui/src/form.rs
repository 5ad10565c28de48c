use crossterm::event::{KeyCode, KeyEvent};
use dropdeck_core::InputState;
use dropdeck_domain::ProjectDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    People,
}

pub enum FormAction {
    None,
    Cancel,
    Submit,
}

/// State of the create-project popup: one editing buffer per field plus
/// the last validation message.
pub struct ProjectForm {
    pub title: InputState,
    pub description: InputState,
    pub people: InputState,
    pub focus: FormField,
    pub error: Option<String>,
}

impl ProjectForm {
    pub fn new(default_people: u8) -> Self {
        let mut people = InputState::new();
        people.set(default_people.to_string());
        Self {
            title: InputState::new(),
            description: InputState::new(),
            people,
            focus: FormField::Title,
            error: None,
        }
    }

    /// Clear all fields back to their initial state.
    pub fn reset(&mut self, default_people: u8) {
        self.title.clear();
        self.description.clear();
        self.people.set(default_people.to_string());
        self.focus = FormField::Title;
        self.error = None;
    }

    pub fn draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.as_str().to_string(),
            description: self.description.as_str().to_string(),
            people: self.people.as_str().to_string(),
        }
    }

    pub fn focused_input(&self) -> &InputState {
        match self.focus {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::People => &self.people,
        }
    }

    fn focused_input_mut(&mut self) -> &mut InputState {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::People => &mut self.people,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::People,
            FormField::People => FormField::Title,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::People,
            FormField::Description => FormField::Title,
            FormField::People => FormField::Description,
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Esc => return FormAction::Cancel,
            KeyCode::Enter => return FormAction::Submit,
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Char(c) => {
                self.focused_input_mut().insert_char(c);
                self.error = None;
            }
            KeyCode::Backspace => {
                self.focused_input_mut().backspace();
                self.error = None;
            }
            KeyCode::Left => self.focused_input_mut().move_left(),
            KeyCode::Right => self.focused_input_mut().move_right(),
            KeyCode::Home => self.focused_input_mut().move_home(),
            KeyCode::End => self.focused_input_mut().move_end(),
            _ => {}
        }
        FormAction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_new_form_prefills_people() {
        let form = ProjectForm::new(3);
        assert_eq!(form.people.as_str(), "3");
        assert_eq!(form.focus, FormField::Title);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = ProjectForm::new(1);
        form.handle_key(key(KeyCode::Char('a')));
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Char('b')));
        assert_eq!(form.title.as_str(), "a");
        assert_eq!(form.description.as_str(), "b");
    }

    #[test]
    fn test_focus_cycles_through_fields() {
        let mut form = ProjectForm::new(1);
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus, FormField::Description);
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus, FormField::People);
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus, FormField::Title);
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focus, FormField::People);
    }

    #[test]
    fn test_editing_clears_error() {
        let mut form = ProjectForm::new(1);
        form.error = Some("Title is required".to_string());
        form.handle_key(key(KeyCode::Char('x')));
        assert!(form.error.is_none());
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut form = ProjectForm::new(2);
        form.handle_key(key(KeyCode::Char('x')));
        form.error = Some("nope".to_string());
        form.reset(2);
        assert!(form.title.is_empty());
        assert_eq!(form.people.as_str(), "2");
        assert!(form.error.is_none());
    }
}
