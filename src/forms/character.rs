use serde::Serialize;

use crate::fields::RuleSchema;
use crate::fields::character::{self, Gender};

/// Pages of the character application, in order. Navigation clamps at both
/// ends rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    Identity,
    ShortDescription,
    Description,
    Backstory,
}

impl WizardStep {
    pub fn next(self) -> Self {
        match self {
            WizardStep::Identity => WizardStep::ShortDescription,
            WizardStep::ShortDescription => WizardStep::Description,
            WizardStep::Description => WizardStep::Backstory,
            WizardStep::Backstory => WizardStep::Backstory,
        }
    }

    pub fn back(self) -> Self {
        match self {
            WizardStep::Identity => WizardStep::Identity,
            WizardStep::ShortDescription => WizardStep::Identity,
            WizardStep::Description => WizardStep::ShortDescription,
            WizardStep::Backstory => WizardStep::Description,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterNotifs {
    pub name: bool,
    pub short_description: bool,
    pub description: bool,
    pub backstory: bool,
}

/// Reactive state for the four-step character application. Field updates
/// travel to the server per step through the declarative exchange layer;
/// this state only decides what is valid and which page is showing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterApplication {
    pub step: WizardStep,
    pub name: String,
    pub gender: Gender,
    pub short_description: String,
    pub description: String,
    pub backstory: String,
    pub name_valid: bool,
    pub short_description_valid: bool,
    pub description_valid: bool,
    pub backstory_valid: bool,
    pub notifs: CharacterNotifs,
    #[serde(skip)]
    schema: RuleSchema,
}

impl CharacterApplication {
    pub fn new(schema: RuleSchema) -> Self {
        Self {
            step: WizardStep::Identity,
            name: String::new(),
            gender: Gender::default(),
            short_description: String::new(),
            description: String::new(),
            backstory: String::new(),
            name_valid: false,
            short_description_valid: false,
            description_valid: false,
            backstory_valid: false,
            notifs: CharacterNotifs::default(),
            schema,
        }
    }

    pub fn set_name(&mut self, raw: impl Into<String>) {
        self.name = raw.into();
        self.name_valid = character::ensure_valid_name(&self.name, self.schema).is_ok();
    }

    /// Gender is a closed selection: unknown values snap to the default
    /// instead of failing validation.
    pub fn set_gender(&mut self, raw: &str) {
        self.gender = Gender::from_submission(raw);
    }

    pub fn set_short_description(&mut self, raw: impl Into<String>) {
        self.short_description = raw.into();
        self.short_description_valid =
            character::ensure_valid_short_description(&self.short_description).is_ok();
    }

    pub fn set_description(&mut self, raw: impl Into<String>) {
        self.description = raw.into();
        self.description_valid = character::ensure_valid_description(&self.description).is_ok();
    }

    pub fn set_backstory(&mut self, raw: impl Into<String>) {
        self.backstory = raw.into();
        self.backstory_valid = character::ensure_valid_backstory(&self.backstory).is_ok();
    }

    pub fn step_complete(&self) -> bool {
        match self.step {
            WizardStep::Identity => self.name_valid,
            WizardStep::ShortDescription => self.short_description_valid,
            WizardStep::Description => self.description_valid,
            WizardStep::Backstory => self.backstory_valid,
        }
    }

    /// Moves forward only once the current page holds up.
    pub fn advance(&mut self) {
        if self.step_complete() {
            self.step = self.step.next();
        }
    }

    /// Going back is always allowed.
    pub fn retreat(&mut self) {
        self.step = self.step.back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backstory_text() -> String {
        "Born dockside, raised on brine and bad luck. ".repeat(12)
    }

    #[test]
    fn test_navigation_clamps_at_both_ends() {
        assert_eq!(WizardStep::Backstory.next(), WizardStep::Backstory);
        assert_eq!(WizardStep::Identity.back(), WizardStep::Identity);
    }

    #[test]
    fn test_advance_requires_a_complete_step() {
        let mut app = CharacterApplication::new(RuleSchema::V1);
        app.advance();
        assert_eq!(app.step, WizardStep::Identity);

        app.set_name("Ashe");
        app.advance();
        assert_eq!(app.step, WizardStep::ShortDescription);
    }

    #[test]
    fn test_retreat_is_unconditional() {
        let mut app = CharacterApplication::new(RuleSchema::V1);
        app.set_name("Ashe");
        app.advance();
        app.retreat();
        assert_eq!(app.step, WizardStep::Identity);
    }

    #[test]
    fn test_field_validity_tracks_input() {
        let mut app = CharacterApplication::new(RuleSchema::V1);

        app.set_name("Al");
        assert!(!app.name_valid);
        app.set_name("Alder");
        assert!(app.name_valid);

        app.set_short_description("a tall, weathered sailor");
        assert!(app.short_description_valid);

        app.set_description("short");
        assert!(!app.description_valid);
        app.set_description("A tall sailor, weathered by salt. Keeps a parrot (loudly)!");
        assert!(app.description_valid);

        app.set_backstory("too short");
        assert!(!app.backstory_valid);
        app.set_backstory(backstory_text());
        assert!(app.backstory_valid);
    }

    #[test]
    fn test_gender_snaps_to_default() {
        let mut app = CharacterApplication::new(RuleSchema::V1);
        app.set_gender("Female");
        assert_eq!(app.gender, Gender::Female);
        app.set_gender("???");
        assert_eq!(app.gender, Gender::NonBinary);
    }

    #[test]
    fn test_wizard_walkthrough_reaches_the_last_page() {
        let mut app = CharacterApplication::new(RuleSchema::V1);
        app.set_name("Alder");
        app.advance();
        app.set_short_description("a tall, weathered sailor");
        app.advance();
        app.set_description("A tall sailor, weathered by salt. Keeps a parrot (loudly)!");
        app.advance();
        app.set_backstory(backstory_text());
        app.advance();
        assert_eq!(app.step, WizardStep::Backstory);
        assert!(app.step_complete());
    }
}
