// Host-side tests for the contact hand-off: mailto composition and send schedule.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod contact {
    include!("../src/core/contact.rs");
}

use constants::*;
use contact::*;

fn sample() -> ContactMessage {
    ContactMessage {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        message: "Olá!\nVamos conversar?".to_string(),
    }
}

// Minimal query escaping so assertions can see the separators.
fn escape(s: &str) -> String {
    s.replace('%', "%25")
        .replace(' ', "%20")
        .replace('\n', "%0A")
        .replace('&', "%26")
        .replace('?', "%3F")
}

#[test]
fn subject_and_body_follow_template() {
    let m = sample();
    assert_eq!(m.subject(), "Contato Portfólio: Ana");
    assert_eq!(
        m.body(),
        "Nome: Ana\nEmail: ana@example.com\n\nMensagem:\nOlá!\nVamos conversar?"
    );
}

#[test]
fn mailto_uri_encodes_both_components() {
    let uri = mailto_uri(CONTACT_RECIPIENT, &sample(), escape);
    assert!(uri.starts_with("mailto:dev.lombardo@gmail.com?subject="));
    let (subject, body) = uri
        .split_once("?subject=")
        .and_then(|(_, rest)| rest.split_once("&body="))
        .unwrap();
    assert_eq!(subject, "Contato%20Portfólio:%20Ana");
    assert!(body.starts_with("Nome:%20Ana%0AEmail:"));
    assert!(body.contains("conversar%3F"));
    assert!(!body.contains('\n'));
}

#[test]
fn empty_fields_still_build_a_uri() {
    let uri = mailto_uri("me@example.com", &ContactMessage::default(), |s| s.to_string());
    assert_eq!(
        uri,
        "mailto:me@example.com?subject=Contato Portfólio: &body=Nome: \nEmail: \n\nMensagem:\n"
    );
}

#[test]
fn send_phase_boundaries() {
    assert_eq!(SendPhase::at(0), SendPhase::Collapsing);
    assert_eq!(SendPhase::at(499), SendPhase::Collapsing);
    assert_eq!(SendPhase::at(500), SendPhase::Takeoff);
    assert_eq!(SendPhase::at(1699), SendPhase::Takeoff);
    assert_eq!(SendPhase::at(1700), SendPhase::HandedOff);
    assert_eq!(SendPhase::at(2199), SendPhase::HandedOff);
    assert_eq!(SendPhase::at(2200), SendPhase::Success);
    assert_eq!(SendPhase::at(6199), SendPhase::Success);
    assert_eq!(SendPhase::at(6200), SendPhase::Restored);
    assert_eq!(SendPhase::at(u32::MAX), SendPhase::Restored);
}

#[test]
fn every_phase_starts_where_at_says() {
    for phase in SendPhase::ALL {
        assert_eq!(SendPhase::at(phase.starts_at_ms()), phase);
    }
    assert!(SendPhase::Success.is_running());
    assert!(!SendPhase::Restored.is_running());
    assert_eq!(SendPhase::Restored.button_class(), None);
}

#[test]
fn cues_fire_in_order_with_warp_before_takeoff() {
    let cues = send_cues();
    assert_eq!(cues.len(), SendPhase::ALL.len() + 1);
    assert!(cues.windows(2).all(|w| w[0].0 <= w[1].0));
    assert_eq!(cues[0], (0, SendCue::Enter(SendPhase::Collapsing)));
    assert_eq!(cues[1], (SEND_WARP_AT_MS, SendCue::Warp));
    assert_eq!(cues[2], (SEND_TAKEOFF_AT_MS, SendCue::Enter(SendPhase::Takeoff)));
    assert_eq!(
        cues.last(),
        Some(&(SEND_RESTORE_AT_MS, SendCue::Enter(SendPhase::Restored)))
    );
}
