use crate::constants::{
    SEND_HANDOFF_AT_MS, SEND_RESTORE_DELAY_MS, SEND_SUCCESS_DELAY_MS, SEND_TAKEOFF_AT_MS,
    SEND_WARP_AT_MS,
};

/// Fields read from the contact form on submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn subject(&self) -> String {
        format!("Contato Portfólio: {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Nome: {}\nEmail: {}\n\nMensagem:\n{}",
            self.name, self.email, self.message
        )
    }
}

/// Build the `mailto:` URI handed to the OS mail client.
///
/// `encode` escapes a query component; the web build passes the browser's
/// `encodeURIComponent`.
pub fn mailto_uri(recipient: &str, msg: &ContactMessage, encode: impl Fn(&str) -> String) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        encode(&msg.subject()),
        encode(&msg.body())
    )
}

/// Stage of the send-button choreography.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendPhase {
    Collapsing,
    Takeoff,
    HandedOff,
    Success,
    Restored,
}

pub const SEND_SUCCESS_AT_MS: u32 = SEND_HANDOFF_AT_MS + SEND_SUCCESS_DELAY_MS;
pub const SEND_RESTORE_AT_MS: u32 = SEND_SUCCESS_AT_MS + SEND_RESTORE_DELAY_MS;

impl SendPhase {
    pub const ALL: [SendPhase; 5] = [
        SendPhase::Collapsing,
        SendPhase::Takeoff,
        SendPhase::HandedOff,
        SendPhase::Success,
        SendPhase::Restored,
    ];

    /// Phase in effect `elapsed_ms` after submit.
    pub fn at(elapsed_ms: u32) -> Self {
        match elapsed_ms {
            t if t < SEND_TAKEOFF_AT_MS => SendPhase::Collapsing,
            t if t < SEND_HANDOFF_AT_MS => SendPhase::Takeoff,
            t if t < SEND_SUCCESS_AT_MS => SendPhase::HandedOff,
            t if t < SEND_RESTORE_AT_MS => SendPhase::Success,
            _ => SendPhase::Restored,
        }
    }

    pub fn starts_at_ms(&self) -> u32 {
        match self {
            SendPhase::Collapsing => 0,
            SendPhase::Takeoff => SEND_TAKEOFF_AT_MS,
            SendPhase::HandedOff => SEND_HANDOFF_AT_MS,
            SendPhase::Success => SEND_SUCCESS_AT_MS,
            SendPhase::Restored => SEND_RESTORE_AT_MS,
        }
    }

    /// CSS class the submit button carries during this phase.
    pub fn button_class(&self) -> Option<&'static str> {
        match self {
            SendPhase::Collapsing => Some("send-collapsing"),
            SendPhase::Takeoff => Some("send-takeoff"),
            SendPhase::HandedOff | SendPhase::Success => Some("send-gone"),
            SendPhase::Restored => None,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        *self != SendPhase::Restored
    }
}

/// Something the page must do at a point of the send sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendCue {
    Warp,
    Enter(SendPhase),
}

/// Every cue of one send sequence with its offset from submit, in firing order.
pub fn send_cues() -> Vec<(u32, SendCue)> {
    let mut cues: Vec<(u32, SendCue)> = SendPhase::ALL
        .iter()
        .map(|p| (p.starts_at_ms(), SendCue::Enter(*p)))
        .collect();
    cues.push((SEND_WARP_AT_MS, SendCue::Warp));
    cues.sort_by_key(|(ms, _)| *ms);
    cues
}
