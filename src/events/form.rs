use crate::constants::{
    CONTACT_FORM_ID, CONTACT_RECIPIENT, FORM_FIELD_SELECTOR, SUCCESS_MSG_CLASS,
};
use crate::core::contact::{self, ContactMessage, SendCue, SendPhase};
use crate::dom;
use crate::frame::{FrameClock, SharedScene};
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Focused form fields pull the orbs toward their on-screen centre.
pub fn wire_form_focus(document: &web::Document, scene: SharedScene) {
    let Ok(fields) = document.query_selector_all(FORM_FIELD_SELECTOR) else {
        return;
    };
    for i in 0..fields.length() {
        let Some(field) = fields.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };

        let scene_focus = scene.clone();
        let field_for_rect = field.clone();
        dom::add_listener(&field, "focus", move |_ev: web::FocusEvent| {
            let rect = field_for_rect.get_bounding_client_rect();
            let mut s = scene_focus.borrow_mut();
            let c = input::rect_center_ndc(
                rect.left() as f32,
                rect.top() as f32,
                rect.width() as f32,
                rect.height() as f32,
                s.viewport(),
            );
            s.set_input_focus(c.x, c.y);
        });

        let scene_blur = scene.clone();
        dom::add_listener(&field, "blur", move |_ev: web::FocusEvent| {
            scene_blur.borrow_mut().clear_input_focus();
        });
    }
    log::info!("[form] focus tracking on {} fields", fields.length());
}

/// State shared by the timeouts of one send sequence.
struct SendRun {
    form: web::HtmlFormElement,
    button: Option<web::Element>,
    mailto: String,
    scene: SharedScene,
    clock: FrameClock,
    sending: Rc<RefCell<bool>>,
}

pub fn wire_contact_submit(document: &web::Document, scene: SharedScene, clock: FrameClock) {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::warn!("[form] #{} not found; send animation disabled", CONTACT_FORM_ID);
        return;
    };
    let button = form.query_selector("button").ok().flatten();
    if button.is_none() {
        log::warn!("[form] contact form has no button; send animation disabled");
        return;
    }

    let sending = Rc::new(RefCell::new(false));
    let form_for_submit = form.clone();
    dom::add_listener(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        if *sending.borrow() {
            return;
        }
        *sending.borrow_mut() = true;

        let msg = read_message(&form_for_submit);
        let mailto = contact::mailto_uri(CONTACT_RECIPIENT, &msg, |s| {
            String::from(js_sys::encode_uri_component(s))
        });
        let run = Rc::new(SendRun {
            form: form_for_submit.clone(),
            button: button.clone(),
            mailto,
            scene: scene.clone(),
            clock,
            sending: sending.clone(),
        });
        for (at_ms, cue) in contact::send_cues() {
            let run = run.clone();
            dom::set_timeout(at_ms, move || apply_cue(&run, cue));
        }
    });
}

fn read_message(form: &web::HtmlFormElement) -> ContactMessage {
    let Ok(data) = web::FormData::new_with_form(form) else {
        return ContactMessage::default();
    };
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    ContactMessage {
        name: field("name"),
        email: field("email"),
        message: field("message"),
    }
}

fn apply_cue(run: &SendRun, cue: SendCue) {
    let phase = match cue {
        SendCue::Warp => {
            run.scene.borrow_mut().trigger_warp(run.clock.now());
            return;
        }
        SendCue::Enter(phase) => phase,
    };

    if let Some(button) = &run.button {
        let classes = button.class_list();
        for p in SendPhase::ALL {
            if let Some(c) = p.button_class() {
                _ = classes.remove_1(c);
            }
        }
        if let Some(c) = phase.button_class() {
            _ = classes.add_1(c);
        }
    }

    match phase {
        SendPhase::HandedOff => {
            if let Some(window) = web::window() {
                _ = window.location().set_href(&run.mailto);
            }
        }
        SendPhase::Success => {
            remove_success_message(&run.form);
            if let Some(document) = dom::window_document() {
                if let Ok(msg) = document.create_element("div") {
                    _ = msg.class_list().add_1(SUCCESS_MSG_CLASS);
                    msg.set_text_content(Some("✨ Redirecionando para seu email..."));
                    _ = run.form.append_child(&msg);
                }
            }
            run.form.reset();
        }
        SendPhase::Restored => remove_success_message(&run.form),
        SendPhase::Collapsing | SendPhase::Takeoff => {}
    }

    if !phase.is_running() {
        *run.sending.borrow_mut() = false;
        log::debug!("[form] send sequence finished");
    }
}

fn remove_success_message(form: &web::HtmlFormElement) {
    if let Ok(Some(old)) = form.query_selector(&format!(".{}", SUCCESS_MSG_CLASS)) {
        old.remove();
    }
}
