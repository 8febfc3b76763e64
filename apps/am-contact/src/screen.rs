//! Contact screen
//!
//! Sending is simulated: after [`SEND_DELAY`] the form reports success and
//! clears. The completion only holds a weak reference, so a screen that was
//! unmounted in the meantime simply never hears about it.

use crate::form::{ContactForm, FormField, SendStatus, ValidationError};
use am_core::SoundKind;
use am_widgets::{PanelContext, PanelScreen, PanelView};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

pub const SEND_DELAY: Duration = Duration::from_millis(1500);

const DIRECT_CHANNEL: &str = "alex@example.com";

#[derive(Debug, Default)]
struct ContactState {
    form: ContactForm,
    status: SendStatus,
    error: Option<ValidationError>,
}

pub struct ContactScreen {
    ctx: PanelContext,
    state: Arc<Mutex<ContactState>>,
}

impl ContactScreen {
    pub fn new(ctx: PanelContext) -> Self {
        Self {
            ctx,
            state: Arc::new(Mutex::new(ContactState::default())),
        }
    }

    pub fn status(&self) -> SendStatus {
        self.state.lock().status
    }

    pub fn form(&self) -> ContactForm {
        self.state.lock().form.clone()
    }

    pub fn set_field(&self, field: FormField, value: &str) {
        self.state.lock().form.set(field, value);
    }

    /// Validate and start sending
    pub fn send(&self) {
        let result = {
            let mut state = self.state.lock();
            if state.status == SendStatus::Sending {
                return;
            }
            let result = state.form.validate();
            match &result {
                Ok(()) => {
                    state.status = SendStatus::Sending;
                    state.error = None;
                }
                Err(e) => {
                    state.status = SendStatus::Error;
                    state.error = Some(e.clone());
                }
            }
            result
        };

        if let Err(e) = result {
            ::log::debug!("Contact form rejected: {}", e);
            self.ctx.sound.play(SoundKind::Error);
            return;
        }

        let weak = Arc::downgrade(&self.state);
        self.ctx.scheduler.schedule(
            SEND_DELAY,
            Box::new(move || {
                let Some(state) = weak.upgrade() else {
                    ::log::debug!("Contact screen gone before send completed");
                    return;
                };
                let mut state = state.lock();
                state.status = SendStatus::Sent;
                state.form.clear();
            }),
        );
    }
}

impl PanelScreen for ContactScreen {
    fn render(&self) -> PanelView {
        let state = self.state.lock();
        let mut view = PanelView::new().line("// Open Comm Channel").blank();

        for field in FormField::ALL {
            let value = state.form.get(field);
            let shown = if value.is_empty() {
                format!("<{}>", field.placeholder())
            } else {
                value.to_string()
            };
            let required = if field.is_required() { "*" } else { " " };
            view = view.line(format!("{}{:<8} {}", required, field, shown));
        }

        view = view.blank();
        view = match state.status {
            SendStatus::Sent => view.line("[OK] Transmission sent"),
            SendStatus::Error => {
                let view = view.line("[ERR] Transmission failed");
                match &state.error {
                    Some(e) => view.line(format!("      {}", e)),
                    None => view,
                }
            }
            SendStatus::Idle | SendStatus::Sending => view,
        };
        let button = if state.status == SendStatus::Sending {
            "Transmitting..."
        } else {
            "[TX] Transmit  (send)"
        };

        view.line(button)
            .blank()
            .line("// Direct channel:")
            .line(DIRECT_CHANNEL)
    }

    fn handle_command(&mut self, verb: &str, args: &[&str]) -> bool {
        match (verb, args) {
            ("set", [field, rest @ ..]) => match field.parse::<FormField>() {
                Ok(field) => {
                    self.set_field(field, &rest.join(" "));
                    true
                }
                Err(()) => false,
            },
            ("send", []) => {
                self.send();
                true
            }
            ("clear", []) => {
                self.state.lock().form.clear();
                true
            }
            _ => false,
        }
    }

    fn commands(&self) -> &'static [&'static str] {
        &["set <name|email|subject|message> <text>", "send", "clear"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use am_core::{AudioContext, AudioContextFactory, AudioError, ManualScheduler};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts context requests; each one is a cue that got past the sound gate
    struct CueCounter(Arc<AtomicUsize>);

    impl AudioContextFactory for CueCounter {
        fn create(&self) -> Result<Arc<dyn AudioContext>, AudioError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(AudioError::Disabled)
        }
    }

    fn screen() -> (ContactScreen, Arc<ManualScheduler>, Arc<AtomicUsize>) {
        let scheduler = Arc::new(ManualScheduler::new());
        let cues = Arc::new(AtomicUsize::new(0));
        let ctx = PanelContext::ephemeral(scheduler.clone(), Box::new(CueCounter(cues.clone())));
        (ContactScreen::new(ctx), scheduler, cues)
    }

    fn fill(contact: &mut ContactScreen) {
        contact.handle_command("set", &["name", "Ada", "Lovelace"]);
        contact.handle_command("set", &["email", "ada@example.com"]);
        contact.handle_command("set", &["message", "hello", "there"]);
    }

    #[test]
    fn test_missing_fields_error() {
        let (mut contact, scheduler, cues) = screen();
        contact.handle_command("set", &["name", "Ada"]);
        assert!(contact.handle_command("send", &[]));

        assert_eq!(contact.status(), SendStatus::Error);
        assert_eq!(cues.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.pending(), 0);
        let view = contact.render();
        assert!(view.contains("[ERR] Transmission failed"));
        assert!(view.contains("email is required"));
    }

    #[test]
    fn test_send_then_sent() {
        let (mut contact, scheduler, cues) = screen();
        fill(&mut contact);
        assert_eq!(contact.form().name, "Ada Lovelace");

        contact.handle_command("send", &[]);
        assert_eq!(contact.status(), SendStatus::Sending);
        assert!(contact.render().contains("Transmitting..."));

        scheduler.advance_ms(1499);
        assert_eq!(contact.status(), SendStatus::Sending);
        scheduler.advance_ms(1);
        assert_eq!(contact.status(), SendStatus::Sent);
        assert_eq!(contact.form(), ContactForm::default());
        assert_eq!(cues.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_send_while_sending_ignored() {
        let (mut contact, scheduler, _) = screen();
        fill(&mut contact);
        contact.send();
        contact.send();
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_completion_after_unmount_dropped() {
        let (mut contact, scheduler, _) = screen();
        fill(&mut contact);
        contact.send();
        drop(contact);
        scheduler.run_until_idle();
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_unknown_field() {
        let (mut contact, _, _) = screen();
        assert!(!contact.handle_command("set", &["phone", "123"]));
        assert!(!contact.handle_command("set", &[]));
    }
}
