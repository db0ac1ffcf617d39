/// Element ids and class names the login page markup provides.
pub const LOGIN_BTN_ID: &str = "login-btn";
pub const LOGIN_BTN_SECONDARY_ID: &str = "login-btn-secondary";
pub const CLOSE_LOGIN_ID: &str = "close-login";
pub const LOGIN_MODAL_ID: &str = "login-modal";
pub const HIDDEN_CLASS: &str = "hidden";

/// Wiring for a single modal: which elements open it, which closes it, and
/// the marker class that hides it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalConfig {
    pub open_trigger_ids: [&'static str; 2],
    pub close_trigger_id: &'static str,
    /// Required; initialization fails without it.
    pub root_id: &'static str,
    pub hidden_class: &'static str,
    pub log_level: log::Level,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            open_trigger_ids: [LOGIN_BTN_ID, LOGIN_BTN_SECONDARY_ID],
            close_trigger_id: CLOSE_LOGIN_ID,
            root_id: LOGIN_MODAL_ID,
            hidden_class: HIDDEN_CLASS,
            log_level: log::Level::Info,
        }
    }
}
