pub mod age;
pub mod i18n;
pub mod input;
pub mod logger;
pub mod svg;

pub use age::{age_between, Age};
pub use i18n::{Labels, Lang};
pub use input::{parse_birthdate, parse_date, BirthdateError};
pub use svg::{generate_svg, Theme};
