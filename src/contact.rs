pub const SERVICE_ID: &str = "service_t6ey6ao";
pub const TEMPLATE_ID: &str = "template_0v5805r";
pub const PUBLIC_KEY: &str = "C1oeo1j2tQEI0UpWB";

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#00ff88",
            Self::Error => "#ff4757",
            Self::Info => "#00d4ff",
        }
    }

    pub fn foreground(self) -> &'static str {
        match self {
            Self::Success => "#000",
            Self::Error => "#fff",
            Self::Info => "#fff",
        }
    }
}

#[derive(Clone, Default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub honeypot: String,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MailPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub time: String,
}

pub enum SubmitDecision {
    Drop,
    Send(MailPayload),
}

pub fn gate_submission(fields: FormFields, time: String) -> SubmitDecision {
    if !fields.honeypot.is_empty() {
        return SubmitDecision::Drop;
    }

    SubmitDecision::Send(MailPayload {
        name: fields.name,
        email: fields.email,
        subject: fields.subject,
        message: fields.message,
        time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> FormFields {
        FormFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "A question about a project.".to_string(),
            honeypot: String::new(),
        }
    }

    #[test]
    fn a_filled_honeypot_silently_drops_the_submission() {
        let mut fields = valid_fields();
        fields.honeypot = "http://spam.example".to_string();

        assert!(matches!(
            gate_submission(fields, "now".to_string()),
            SubmitDecision::Drop
        ));
    }

    #[test]
    fn a_clean_submission_carries_every_field_and_the_stamp() {
        let decision = gate_submission(valid_fields(), "2025-08-07 10:00".to_string());

        let SubmitDecision::Send(payload) = decision else {
            panic!("clean submission should be sent");
        };
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.subject, "Hello");
        assert_eq!(payload.message, "A question about a project.");
        assert_eq!(payload.time, "2025-08-07 10:00");
    }

    #[test]
    fn severity_maps_to_its_fixed_presentation() {
        assert_eq!(Severity::Success.as_str(), "success");
        assert_eq!(Severity::Success.background(), "#00ff88");
        assert_eq!(Severity::Success.foreground(), "#000");
        assert_eq!(Severity::Error.background(), "#ff4757");
        assert_eq!(Severity::Info.background(), "#00d4ff");
    }
}
