//! Text rendering of the landing view and the three form screens.

use std::fmt::Write;

use crate::form::is_required;
use crate::models::{Flag, FormSnapshot, SubmissionStatus, TextField, ValidatedField};

pub const REGULATIONS_URL: &str = "https://storage.yandexcloud.net/storagevideo/%D0%BF%D0%BE%D0%BB%D0%BE%D0%B6%D0%B5%D0%BD%D0%B8%D0%B5_%D0%B1%D0%B5%D0%B7_%D0%BA%D0%B5%D0%B9%D1%81%D0%BE%D0%B2.pdf";

pub const CONSENT_URL: &str = "https://storage.yandexcloud.net/storagevideo/tic2026_%D1%81%D0%BE%D0%B3%D0%BB%D0%B0%D1%81%D0%B8%D0%B5_%D0%BD%D0%B0_%D0%BE%D0%B1%D1%80%D0%B0%D0%B1%D0%BE%D1%82%D0%BA%D1%83_%D0%BF%D0%B5%D1%80%D1%81%D0%BE%D0%BD%D0%B0%D0%BB%D1%8C%D0%BD%D1%8B%D1%85_%D0%B4%D0%B0%D0%BD%D0%BD%D1%8B%D1%85.pdf";

pub const HELP: &str = "\
commands:
  start                      open the registration form
  set <field> <value>        edit a field (surname, name, patronymic, organization,
                             email, phoneNumber, telegramName, teamName)
  check <flag> on|off        searchingCommand, teamLead
  agree on|off               consent to personal data processing
  submit | retry | close | show | help | quit";

pub fn render_landing() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ITUPOLEV");
    let _ = writeln!(out, "TUPOLEV IT CHALLENGE");
    let _ = writeln!(out, "registration open");
    let _ = writeln!(out, "21-24 February, IT park, Peterburgskaya st. 52");
    let _ = writeln!(out, "Hackathon regulations: {}", REGULATIONS_URL);
    let _ = write!(out, "Press Enter (or type `start`) to apply");
    out
}

pub fn render_form(snapshot: &FormSnapshot) -> String {
    match snapshot.status {
        SubmissionStatus::Idle => render_idle(snapshot),
        SubmissionStatus::Success => {
            "CONGRATULATIONS!\nYou are registered.\n[close]".to_string()
        }
        SubmissionStatus::Error => format!(
            "ERROR!\nThe data could not be sent.\n  {}\n[close] [retry]",
            snapshot.error_message.as_deref().unwrap_or_default()
        ),
    }
}

fn render_idle(snapshot: &FormSnapshot) -> String {
    let record = &snapshot.record;
    let mut out = String::new();
    let _ = writeln!(out, "APPLICATION");

    for field in TextField::ALL {
        let mut label = field.label().to_string();
        if field == TextField::TeamName && snapshot.team_name_locked {
            label.push_str(" (not required)");
        } else if is_required(record, field) {
            label.push('*');
        }
        let _ = write!(out, "  {:<28} {}", label, record.text(field));

        let error = ValidatedField::from_text_field(field).and_then(|f| snapshot.errors.get(f));
        if let Some(message) = error {
            let _ = write!(out, "  ! {}", message);
        }
        let _ = writeln!(out);
    }

    for flag in [Flag::SearchingCommand, Flag::TeamLead] {
        let mark = if record.flag(flag) { 'x' } else { ' ' };
        let locked = flag == Flag::TeamLead && snapshot.team_lead_locked;
        let _ = writeln!(
            out,
            "  [{}] {}{}",
            mark,
            flag.label(),
            if locked { " (disabled)" } else { "" }
        );
    }

    let mark = if snapshot.consent { 'x' } else { ' ' };
    let _ = writeln!(
        out,
        "  [{}] I consent to the processing of personal data: {}",
        mark, CONSENT_URL
    );

    let submit = if snapshot.in_flight {
        "sending..."
    } else if snapshot.submit_enabled {
        "ready"
    } else {
        "disabled: consent required"
    };
    let _ = write!(out, "Register: {}", submit);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::messages;
    use crate::models::{FieldErrors, RegistrationRecord};

    fn snapshot() -> FormSnapshot {
        FormSnapshot {
            record: RegistrationRecord::default(),
            errors: FieldErrors::default(),
            status: SubmissionStatus::Idle,
            error_message: None,
            in_flight: false,
            consent: false,
            team_lead_locked: false,
            team_name_locked: false,
            submit_enabled: false,
        }
    }

    #[test]
    fn test_idle_form_shows_inline_errors() {
        let mut snapshot = snapshot();
        snapshot.errors.set(ValidatedField::Email, messages::INVALID_EMAIL);

        let text = render_form(&snapshot);
        assert!(text.contains("! invalid email address"));
        assert!(text.contains("disabled: consent required"));
    }

    #[test]
    fn test_locked_team_fields_are_marked() {
        let mut snapshot = snapshot();
        snapshot.record.searching_command = true;
        snapshot.team_lead_locked = true;
        snapshot.team_name_locked = true;

        let text = render_form(&snapshot);
        assert!(text.contains("Team name (not required)"));
        assert!(text.contains("I am the captain (disabled)"));
        assert!(text.contains("[x] Looking for a team"));
    }

    #[test]
    fn test_outcome_screens() {
        let mut snapshot = snapshot();
        snapshot.status = SubmissionStatus::Error;
        snapshot.error_message = Some("duplicate email".to_string());
        let text = render_form(&snapshot);
        assert!(text.contains("duplicate email"));
        assert!(text.contains("[retry]"));

        snapshot.status = SubmissionStatus::Success;
        assert!(render_form(&snapshot).starts_with("CONGRATULATIONS!"));
    }

    #[test]
    fn test_in_flight_shows_sending() {
        let mut snapshot = snapshot();
        snapshot.in_flight = true;
        assert!(render_form(&snapshot).ends_with("Register: sending..."));
    }
}
