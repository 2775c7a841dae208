//! Collaborators provided by the hosting screen.

/// Blocking message with a single acknowledgement action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: &'static str,
    /// Label of the only button.
    pub acknowledge: &'static str,
}

impl Alert {
    /// Shown when submit is attempted with invalid fields.
    pub const WRONG_INPUT: Alert = Alert {
        title: "Wrong input!",
        message: "Please check the errors in the form.",
        acknowledge: "Okay",
    };
}

/// Navigation and alert surface of the screen that owns a session.
pub trait ScreenHost: Send + Sync {
    /// Return the user to the previous screen.
    fn go_back(&self);

    /// Present `alert` and wait for acknowledgement.
    fn show_alert(&self, alert: &Alert);
}
