use boxlabel_core::error::LabelerError;

/// A save precondition the user has to fix before continuing.
#[derive(Clone, Debug, PartialEq)]
pub struct Warning {
    pub title: &'static str,
    pub message: String,
}

impl Warning {
    pub fn from_error(err: &LabelerError) -> Option<Self> {
        let title = match err {
            LabelerError::MissingClass => "Missing class",
            LabelerError::MissingBox => "Missing box",
            _ => return None,
        };
        Some(Self {
            title,
            message: err.to_string(),
        })
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Log messages.
    pub log_messages: Vec<String>,

    /// Open warning dialog. Input to the rest of the window is ignored while set.
    pub warning: Option<Warning>,
}

impl UIState {
    pub fn is_blocked(&self) -> bool {
        self.warning.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_titles() {
        let w = Warning::from_error(&LabelerError::MissingClass).unwrap();
        assert_eq!(w.title, "Missing class");
        assert_eq!(w.message, "Please select a class before saving.");

        let w = Warning::from_error(&LabelerError::MissingBox).unwrap();
        assert_eq!(w.title, "Missing box");
    }

    #[test]
    fn test_other_errors_are_not_warnings() {
        let err = LabelerError::InvalidConfig("x".into());
        assert!(Warning::from_error(&err).is_none());
    }

    #[test]
    fn test_blocked_while_warning_open() {
        let mut state = UIState::default();
        assert!(!state.is_blocked());
        state.warning = Warning::from_error(&LabelerError::MissingBox);
        assert!(state.is_blocked());
    }
}
