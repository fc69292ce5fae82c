//! Registration record matching the registration endpoint's JSON body.

use serde::{Deserialize, Serialize};

/// Everything the participant enters into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub email: String,
    pub team_lead: bool,
    pub searching_command: bool,
    pub organization: String,
    pub team_name: String,
    pub telegram_name: String,
    pub phone_number: String,
}

impl RegistrationRecord {
    /// Read a text field.
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Surname => &self.surname,
            TextField::Patronymic => &self.patronymic,
            TextField::Organization => &self.organization,
            TextField::Email => &self.email,
            TextField::PhoneNumber => &self.phone_number,
            TextField::TelegramName => &self.telegram_name,
            TextField::TeamName => &self.team_name,
        }
    }

    pub(crate) fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::Surname => &mut self.surname,
            TextField::Patronymic => &mut self.patronymic,
            TextField::Organization => &mut self.organization,
            TextField::Email => &mut self.email,
            TextField::PhoneNumber => &mut self.phone_number,
            TextField::TelegramName => &mut self.telegram_name,
            TextField::TeamName => &mut self.team_name,
        }
    }

    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::SearchingCommand => self.searching_command,
            Flag::TeamLead => self.team_lead,
        }
    }
}

/// Text inputs of the form, in the order they are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Surname,
    Name,
    Patronymic,
    Organization,
    Email,
    PhoneNumber,
    TelegramName,
    TeamName,
}

impl TextField {
    pub const ALL: [TextField; 8] = [
        TextField::Surname,
        TextField::Name,
        TextField::Patronymic,
        TextField::Organization,
        TextField::Email,
        TextField::PhoneNumber,
        TextField::TelegramName,
        TextField::TeamName,
    ];

    /// Wire name, identical to the JSON key.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextField::Name => "name",
            TextField::Surname => "surname",
            TextField::Patronymic => "patronymic",
            TextField::Organization => "organization",
            TextField::Email => "email",
            TextField::PhoneNumber => "phoneNumber",
            TextField::TelegramName => "telegramName",
            TextField::TeamName => "teamName",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == s)
    }

    /// Human-readable label used by the presenter.
    pub fn label(&self) -> &'static str {
        match self {
            TextField::Name => "Name",
            TextField::Surname => "Surname",
            TextField::Patronymic => "Patronymic",
            TextField::Organization => "Organization / University",
            TextField::Email => "Email",
            TextField::PhoneNumber => "Phone",
            TextField::TelegramName => "Telegram",
            TextField::TeamName => "Team name",
        }
    }
}

/// Boolean checkboxes of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    SearchingCommand,
    TeamLead,
}

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::SearchingCommand => "searchingCommand",
            Flag::TeamLead => "teamLead",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "searchingCommand" => Some(Flag::SearchingCommand),
            "teamLead" => Some(Flag::TeamLead),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Flag::SearchingCommand => "Looking for a team",
            Flag::TeamLead => "I am the captain",
        }
    }
}

/// Fields that carry a format rule and can hold an inline error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatedField {
    Email,
    PhoneNumber,
    TelegramName,
}

impl ValidatedField {
    pub fn from_text_field(field: TextField) -> Option<Self> {
        match field {
            TextField::Email => Some(ValidatedField::Email),
            TextField::PhoneNumber => Some(ValidatedField::PhoneNumber),
            TextField::TelegramName => Some(ValidatedField::TelegramName),
            _ => None,
        }
    }

    pub fn text_field(&self) -> TextField {
        match self {
            ValidatedField::Email => TextField::Email,
            ValidatedField::PhoneNumber => TextField::PhoneNumber,
            ValidatedField::TelegramName => TextField::TelegramName,
        }
    }
}
