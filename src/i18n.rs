//! Static English/Bengali label lookup. A `Lang` tag selects a fixed set of
//! strings; there is no locale framework behind this.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::age::Age;
use crate::input::BirthdateError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Bn,
}

/// The fixed strings for one language.
pub struct Labels {
    pub title: &'static str,
    pub input_label: &'static str,
    pub alert_empty: &'static str,
    pub alert_future: &'static str,
    pub alert_format: &'static str,
}

impl Lang {
    pub fn labels(self) -> Labels {
        match self {
            Lang::En => Labels {
                title: "Age Calculator",
                input_label: "Enter your date of birth",
                alert_empty: "Please enter your birthday",
                alert_future: "Birthday cannot be in the future!",
                alert_format: "Please enter the date as YYYY-MM-DD",
            },
            Lang::Bn => Labels {
                title: "বয়স ক্যালকুলেটর",
                input_label: "আপনার জন্ম তারিখ দিন",
                alert_empty: "অনুগ্রহ করে জন্ম তারিখ দিন",
                alert_future: "জন্ম তারিখ ভবিষ্যতে হতে পারে না!",
                alert_format: "অনুগ্রহ করে YYYY-MM-DD ফরম্যাটে তারিখ দিন",
            },
        }
    }

    /// The one-line age sentence shown to the user.
    ///
    /// English pluralizes with a `> 1` rule, so 0 takes the singular
    /// ("0 year"); Bengali nouns have no plural form here.
    pub fn result_line(self, age: &Age) -> String {
        match self {
            Lang::En => format!(
                "Your age is {} year{}, {} month{}, and {} day{}",
                age.years,
                plural(age.years),
                age.months,
                plural(age.months),
                age.days,
                plural(age.days)
            ),
            Lang::Bn => format!(
                "আপনার বয়স {} বছর, {} মাস, এবং {} দিন",
                age.years, age.months, age.days
            ),
        }
    }
}

impl Labels {
    /// Picks the alert string for a rejected birthdate.
    pub fn alert(&self, err: &BirthdateError) -> &'static str {
        match err {
            BirthdateError::Empty => self.alert_empty,
            BirthdateError::InvalidFormat { .. } => self.alert_format,
            BirthdateError::Future { .. } => self.alert_future,
        }
    }
}

fn plural(n: i32) -> &'static str {
    if n > 1 { "s" } else { "" }
}
