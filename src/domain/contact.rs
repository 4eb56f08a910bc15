use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the contact book.
///
/// Every field is optional and opaque. The serialized keys are the ones the
/// contact file has always used (`nombre`, `poblacion`, ...); the English
/// names are accepted as aliases when loading. Keys that are not recognized
/// are kept in `extra` and written back untouched.
///
/// A recognized key holding `null` loads as `None` and is not written back.
/// An object carrying both a key and its alias (`nombre` and `name`) does not
/// load.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Contact {
    #[serde(rename = "nombre", alias = "name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "telefono", alias = "phone", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(
        rename = "poblacion",
        alias = "population",
        alias = "locality",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub population: Option<String>,

    #[serde(rename = "unidad", alias = "unit", default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(rename = "moderador", alias = "moderator", default, skip_serializing_if = "Option::is_none")]
    pub moderator: Option<String>,

    #[serde(
        rename = "tel_moderador",
        alias = "moderator_phone",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub moderator_phone: Option<String>,

    #[serde(rename = "archipretazgo", alias = "deanery", default, skip_serializing_if = "Option::is_none")]
    pub deanery: Option<String>,

    #[serde(rename = "arcipreste", alias = "dean", default, skip_serializing_if = "Option::is_none")]
    pub dean: Option<String>,

    #[serde(
        rename = "tel_arcipreste",
        alias = "dean_phone",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub dean_phone: Option<String>,

    #[serde(rename = "animador", alias = "animator", default, skip_serializing_if = "Option::is_none")]
    pub animator: Option<String>,

    #[serde(
        rename = "tel_animador",
        alias = "animator_phone",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub animator_phone: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Partial update for a [`Contact`]. `Some` overwrites the field, `None`
/// leaves it as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub population: Option<String>,
    pub unit: Option<String>,
    pub moderator: Option<String>,
    pub moderator_phone: Option<String>,
    pub deanery: Option<String>,
    pub dean: Option<String>,
    pub dean_phone: Option<String>,
    pub animator: Option<String>,
    pub animator_phone: Option<String>,
}

impl Contact {
    pub fn new(name: String, phone: String, email: String, population: String) -> Self {
        Contact {
            name: Some(name),
            phone: Some(phone),
            email: Some(email),
            population: Some(population),
            ..Default::default()
        }
    }

    /// Population used for searching. A missing field reads as "".
    pub fn population_or_empty(&self) -> &str {
        self.population.as_deref().unwrap_or_default()
    }

    pub fn lives_in(&self, population: &str) -> bool {
        self.population_or_empty().to_lowercase() == population.to_lowercase()
    }

    pub fn apply(&mut self, patch: ContactPatch) {
        let ContactPatch {
            name,
            phone,
            email,
            population,
            unit,
            moderator,
            moderator_phone,
            deanery,
            dean,
            dean_phone,
            animator,
            animator_phone,
        } = patch;

        overwrite(&mut self.name, name);
        overwrite(&mut self.phone, phone);
        overwrite(&mut self.email, email);
        overwrite(&mut self.population, population);
        overwrite(&mut self.unit, unit);
        overwrite(&mut self.moderator, moderator);
        overwrite(&mut self.moderator_phone, moderator_phone);
        overwrite(&mut self.deanery, deanery);
        overwrite(&mut self.dean, dean);
        overwrite(&mut self.dean_phone, dean_phone);
        overwrite(&mut self.animator, animator);
        overwrite(&mut self.animator_phone, animator_phone);
    }

    /// Known fields with their display labels, in form order.
    pub fn labelled_fields(&self) -> [(&'static str, Option<&str>); 12] {
        [
            ("Name", self.name.as_deref()),
            ("Phone", self.phone.as_deref()),
            ("Email", self.email.as_deref()),
            ("Population", self.population.as_deref()),
            ("Unit", self.unit.as_deref()),
            ("Moderator", self.moderator.as_deref()),
            ("Moderator phone", self.moderator_phone.as_deref()),
            ("Deanery", self.deanery.as_deref()),
            ("Dean", self.dean.as_deref()),
            ("Dean phone", self.dean_phone.as_deref()),
            ("Animator", self.animator.as_deref()),
            ("Animator phone", self.animator_phone.as_deref()),
        ]
    }
}

impl ContactPatch {
    pub fn is_empty(&self) -> bool {
        *self == ContactPatch::default()
    }
}

fn overwrite(field: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *field = value;
    }
}
