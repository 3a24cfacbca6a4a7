use chrono::format::{Fixed, Item, StrftimeItems};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::{Rng, RngCore};

use tabgen_core::FieldType;

use crate::constraints::Constraints;
use crate::errors::GenerationError;
use crate::generators::{GeneratedValue, Generator, GeneratorRegistry};

const DEFAULT_INT_MIN: i64 = 0;
const DEFAULT_INT_MAX: i64 = 1000;
const DEFAULT_FLOAT_MIN: f64 = 0.0;
const DEFAULT_FLOAT_MAX: f64 = 1000.0;
const DEFAULT_FLOAT_PRECISION: i64 = 2;
const DEFAULT_STRING_LENGTH: i64 = 10;
const DEFAULT_CHARSET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const DEFAULT_TRUE_PROBABILITY: f64 = 0.5;
const DEFAULT_DATE_START: &str = "2020-01-01";
const DEFAULT_DATE_END: &str = "2024-12-31";
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
const DEFAULT_DATETIME_START: &str = "2020-01-01 00:00:00";
const DEFAULT_DATETIME_END: &str = "2024-12-31 23:59:59";
const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_BOUND_FORMAT: &str = "%Y-%m-%d";
const DATETIME_BOUND_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register(FieldType::Integer, |constraints| {
        Box::new(IntegerGenerator { constraints })
    });
    registry.register(FieldType::Float, |constraints| {
        Box::new(FloatGenerator { constraints })
    });
    registry.register(FieldType::String, |constraints| {
        Box::new(StringGenerator { constraints })
    });
    registry.register(FieldType::Boolean, |constraints| {
        Box::new(BooleanGenerator { constraints })
    });
    registry.register(FieldType::Uuid, |constraints| {
        Box::new(UuidGenerator { constraints })
    });
    registry.register(FieldType::Date, |constraints| {
        Box::new(DateGenerator { constraints })
    });
    registry.register(FieldType::DateTime, |constraints| {
        Box::new(DateTimeGenerator { constraints })
    });
}

struct IntegerGenerator {
    constraints: Constraints,
}

impl Generator for IntegerGenerator {
    fn field_type(&self) -> FieldType {
        FieldType::Integer
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<GeneratedValue, GenerationError> {
        let min = self.constraints.get_i64("min").unwrap_or(DEFAULT_INT_MIN);
        let max = self.constraints.get_i64("max").unwrap_or(DEFAULT_INT_MAX);
        if min > max {
            return Err(GenerationError::Constraint(format!(
                "integer min {min} must be <= max {max}"
            )));
        }
        Ok(GeneratedValue::Int(rng.random_range(min..=max)))
    }
}

struct FloatGenerator {
    constraints: Constraints,
}

impl Generator for FloatGenerator {
    fn field_type(&self) -> FieldType {
        FieldType::Float
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<GeneratedValue, GenerationError> {
        let min = self.constraints.get_f64("min").unwrap_or(DEFAULT_FLOAT_MIN);
        let max = self.constraints.get_f64("max").unwrap_or(DEFAULT_FLOAT_MAX);
        if min > max {
            return Err(GenerationError::Constraint(format!(
                "float min {min} must be <= max {max}"
            )));
        }
        let precision = self
            .constraints
            .get_i64("precision")
            .unwrap_or(DEFAULT_FLOAT_PRECISION)
            .clamp(0, 15) as i32;
        let value = rng.random_range(min..=max);
        let factor = 10_f64.powi(precision);
        Ok(GeneratedValue::Float((value * factor).round() / factor))
    }
}

struct StringGenerator {
    constraints: Constraints,
}

impl Generator for StringGenerator {
    fn field_type(&self) -> FieldType {
        FieldType::String
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<GeneratedValue, GenerationError> {
        let length = self
            .constraints
            .get_i64("length")
            .unwrap_or(DEFAULT_STRING_LENGTH);
        let min_length = self.constraints.get_i64("min_length").unwrap_or(length);
        let max_length = self.constraints.get_i64("max_length").unwrap_or(length);
        if min_length > max_length {
            return Err(GenerationError::Constraint(format!(
                "string min_length {min_length} must be <= max_length {max_length}"
            )));
        }
        // A fixed-width range falls back to `length`, not to the bound value.
        let target = if min_length != max_length {
            rng.random_range(min_length..=max_length)
        } else {
            length
        };
        if target < 0 {
            return Err(GenerationError::Constraint(format!(
                "string length must be >= 0, got {target}"
            )));
        }

        let charset = self.constraints.get_str("charset").unwrap_or(DEFAULT_CHARSET);
        if charset.is_empty() {
            return Err(GenerationError::Constraint(
                "string charset must not be empty".to_string(),
            ));
        }
        let chars: Vec<char> = charset.chars().collect();
        let value: String = (0..target)
            .map(|_| chars[rng.random_range(0..chars.len())])
            .collect();
        Ok(GeneratedValue::Text(value))
    }
}

struct BooleanGenerator {
    constraints: Constraints,
}

impl Generator for BooleanGenerator {
    fn field_type(&self) -> FieldType {
        FieldType::Boolean
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<GeneratedValue, GenerationError> {
        let probability = self
            .constraints
            .get_f64("true_probability")
            .unwrap_or(DEFAULT_TRUE_PROBABILITY);
        if !(0.0..=1.0).contains(&probability) {
            return Err(GenerationError::Constraint(format!(
                "true_probability must be within [0.0, 1.0], got {probability}"
            )));
        }
        Ok(GeneratedValue::Bool(rng.random::<f64>() < probability))
    }
}

struct UuidGenerator {
    constraints: Constraints,
}

impl Generator for UuidGenerator {
    fn field_type(&self) -> FieldType {
        FieldType::Uuid
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<GeneratedValue, GenerationError> {
        // Only version 4 is produced; the constraint is accepted and ignored.
        let _version = self.constraints.get_i64("version").unwrap_or(4);
        let mut bytes = [0_u8; 16];
        rng.fill_bytes(&mut bytes);
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Ok(GeneratedValue::Text(
            uuid::Uuid::from_bytes(bytes).to_string(),
        ))
    }
}

struct DateGenerator {
    constraints: Constraints,
}

impl Generator for DateGenerator {
    fn field_type(&self) -> FieldType {
        FieldType::Date
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<GeneratedValue, GenerationError> {
        let start = self.constraints.get_str("start").unwrap_or(DEFAULT_DATE_START);
        let end = self.constraints.get_str("end").unwrap_or(DEFAULT_DATE_END);
        let format = self
            .constraints
            .get_str("format")
            .unwrap_or(DEFAULT_DATE_FORMAT);

        let start = parse_date_bound(start)?;
        let end = parse_date_bound(end)?;
        let span = (end - start).num_days();
        if span < 0 {
            return Err(GenerationError::DateParse(format!(
                "end date {end} precedes start date {start}"
            )));
        }
        let offset = rng.random_range(0..=span);
        let date = start + Duration::days(offset);
        render_datetime(date.and_time(NaiveTime::MIN), format)
    }
}

struct DateTimeGenerator {
    constraints: Constraints,
}

impl Generator for DateTimeGenerator {
    fn field_type(&self) -> FieldType {
        FieldType::DateTime
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<GeneratedValue, GenerationError> {
        let start = self
            .constraints
            .get_str("start")
            .unwrap_or(DEFAULT_DATETIME_START);
        let end = self
            .constraints
            .get_str("end")
            .unwrap_or(DEFAULT_DATETIME_END);
        let format = self
            .constraints
            .get_str("format")
            .unwrap_or(DEFAULT_DATETIME_FORMAT);

        let start = parse_datetime_bound(start)?;
        let end = parse_datetime_bound(end)?;
        let span = (end - start).num_seconds();
        if span < 0 {
            return Err(GenerationError::DateParse(format!(
                "end datetime {end} precedes start datetime {start}"
            )));
        }
        let offset = rng.random_range(0..=span);
        render_datetime(start + Duration::seconds(offset), format)
    }
}

fn parse_date_bound(value: &str) -> Result<NaiveDate, GenerationError> {
    NaiveDate::parse_from_str(value, DATE_BOUND_FORMAT).map_err(|_| {
        GenerationError::DateParse(format!(
            "'{value}' does not match {DATE_BOUND_FORMAT}"
        ))
    })
}

fn parse_datetime_bound(value: &str) -> Result<NaiveDateTime, GenerationError> {
    NaiveDateTime::parse_from_str(value, DATETIME_BOUND_FORMAT).map_err(|_| {
        GenerationError::DateParse(format!(
            "'{value}' does not match {DATETIME_BOUND_FORMAT}"
        ))
    })
}

fn render_datetime(value: NaiveDateTime, format: &str) -> Result<GeneratedValue, GenerationError> {
    let items = strftime_items(format)?;
    Ok(GeneratedValue::Text(
        value.format_with_items(items.into_iter()).to_string(),
    ))
}

/// Parse a strftime format up front so a malformed or timezone-requiring
/// specifier fails with an error instead of aborting inside `Display`.
fn strftime_items(format: &str) -> Result<Vec<Item<'_>>, GenerationError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    let supported = items.iter().all(|item| {
        !matches!(
            item,
            Item::Error
                | Item::Fixed(
                    Fixed::TimezoneName
                        | Fixed::TimezoneOffset
                        | Fixed::TimezoneOffsetColon
                        | Fixed::TimezoneOffsetColonZ
                        | Fixed::TimezoneOffsetDoubleColon
                        | Fixed::TimezoneOffsetTripleColon
                        | Fixed::TimezoneOffsetZ
                        | Fixed::RFC2822
                        | Fixed::RFC3339
                )
        )
    });
    if !supported {
        return Err(GenerationError::DateParse(format!(
            "unsupported format string '{format}'"
        )));
    }
    Ok(items)
}
