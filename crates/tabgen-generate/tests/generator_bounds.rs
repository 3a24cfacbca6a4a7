use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tabgen_core::{FieldSchema, FieldType};
use tabgen_generate::{GeneratedValue, Generator, GenerationError, GeneratorRegistry};

fn build(field: &FieldSchema) -> Box<dyn Generator> {
    GeneratorRegistry::new().build(field).expect("build generator")
}

#[test]
fn integer_stays_within_bounds_and_spreads() {
    let field = FieldSchema::new("n", FieldType::Integer)
        .constraint("min", 0)
        .constraint("max", 9);
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let mut counts = [0_u32; 10];
    for _ in 0..10_000 {
        let value = generator
            .generate(&mut rng)
            .expect("generate integer")
            .as_i64()
            .expect("integer value");
        assert!((0..=9).contains(&value), "value {value} out of range");
        counts[value as usize] += 1;
    }

    // Roughly uniform: every bucket populated, none wildly off 1000.
    for (value, count) in counts.iter().enumerate() {
        assert!(
            (700..=1300).contains(count),
            "value {value} drawn {count} times"
        );
    }
}

#[test]
fn integer_rejects_inverted_bounds() {
    let field = FieldSchema::new("n", FieldType::Integer)
        .constraint("min", 10)
        .constraint("max", 1);
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    assert!(matches!(
        generator.generate(&mut rng),
        Err(GenerationError::Constraint(_))
    ));
}

#[test]
fn float_honors_precision_and_range() {
    let field = FieldSchema::new("score", FieldType::Float)
        .constraint("min", 0.0)
        .constraint("max", 10.0)
        .constraint("precision", 2);
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    for _ in 0..1000 {
        let value = generator
            .generate(&mut rng)
            .expect("generate float")
            .as_f64()
            .expect("float value");
        assert!((0.0..=10.0).contains(&value), "value {value} out of range");
        assert_eq!(
            (value * 100.0).round() / 100.0,
            value,
            "value {value} has more than 2 fractional digits"
        );
    }
}

#[test]
fn float_rejects_inverted_bounds() {
    let field = FieldSchema::new("score", FieldType::Float)
        .constraint("min", 5.0)
        .constraint("max", 1.0);
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    assert!(matches!(
        generator.generate(&mut rng),
        Err(GenerationError::Constraint(_))
    ));
}

#[test]
fn string_fixed_length_uses_charset() {
    let field = FieldSchema::new("code", FieldType::String)
        .constraint("length", 8)
        .constraint("charset", "abc");
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    for _ in 0..500 {
        let value = generator.generate(&mut rng).expect("generate string");
        let text = value.as_str().expect("string value");
        assert_eq!(text.chars().count(), 8);
        assert!(text.chars().all(|ch| "abc".contains(ch)), "bad char in {text}");
    }
}

#[test]
fn string_variable_length_range() {
    let field = FieldSchema::new("code", FieldType::String)
        .constraint("min_length", 3)
        .constraint("max_length", 6);
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    for _ in 0..500 {
        let value = generator.generate(&mut rng).expect("generate string");
        let len = value.as_str().expect("string value").chars().count();
        assert!((3..=6).contains(&len), "length {len} out of range");
    }
}

#[test]
fn string_rejects_empty_charset() {
    let field = FieldSchema::new("code", FieldType::String).constraint("charset", "");
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    assert!(matches!(
        generator.generate(&mut rng),
        Err(GenerationError::Constraint(_))
    ));
}

#[test]
fn string_rejects_inverted_length_range() {
    let field = FieldSchema::new("code", FieldType::String)
        .constraint("min_length", 6)
        .constraint("max_length", 3);
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    assert!(matches!(
        generator.generate(&mut rng),
        Err(GenerationError::Constraint(_))
    ));
}

#[test]
fn boolean_probability_extremes() {
    let never = FieldSchema::new("flag", FieldType::Boolean).constraint("true_probability", 0.0);
    let always = FieldSchema::new("flag", FieldType::Boolean).constraint("true_probability", 1.0);
    let never = build(&never);
    let always = build(&always);
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    for _ in 0..1000 {
        assert_eq!(never.generate(&mut rng).expect("draw").as_bool(), Some(false));
        assert_eq!(always.generate(&mut rng).expect("draw").as_bool(), Some(true));
    }
}

#[test]
fn boolean_rejects_probability_outside_unit_interval() {
    let field = FieldSchema::new("flag", FieldType::Boolean).constraint("true_probability", 1.5);
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    assert!(matches!(
        generator.generate(&mut rng),
        Err(GenerationError::Constraint(_))
    ));
}

#[test]
fn date_zero_width_range_is_exact() {
    let field = FieldSchema::new("day", FieldType::Date)
        .constraint("start", "2024-01-01")
        .constraint("end", "2024-01-01");
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    for _ in 0..100 {
        let value = generator.generate(&mut rng).expect("generate date");
        assert_eq!(value, GeneratedValue::Text("2024-01-01".to_string()));
    }
}

#[test]
fn date_honors_custom_format() {
    let field = FieldSchema::new("day", FieldType::Date)
        .constraint("start", "2024-03-05")
        .constraint("end", "2024-03-05")
        .constraint("format", "%d/%m/%Y");
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let value = generator.generate(&mut rng).expect("generate date");
    assert_eq!(value, GeneratedValue::Text("05/03/2024".to_string()));
}

#[test]
fn date_rejects_end_before_start() {
    let field = FieldSchema::new("day", FieldType::Date)
        .constraint("start", "2024-06-01")
        .constraint("end", "2024-01-01");
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    assert!(matches!(
        generator.generate(&mut rng),
        Err(GenerationError::DateParse(_))
    ));
}

#[test]
fn date_rejects_malformed_bound() {
    let field = FieldSchema::new("day", FieldType::Date).constraint("start", "not-a-date");
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    assert!(matches!(
        generator.generate(&mut rng),
        Err(GenerationError::DateParse(_))
    ));
}

#[test]
fn date_rejects_malformed_format_string() {
    let field = FieldSchema::new("day", FieldType::Date).constraint("format", "%Q");
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    assert!(matches!(
        generator.generate(&mut rng),
        Err(GenerationError::DateParse(_))
    ));
}

#[test]
fn datetime_stays_within_bounds() {
    let field = FieldSchema::new("at", FieldType::DateTime)
        .constraint("start", "2024-01-01 00:00:00")
        .constraint("end", "2024-01-01 00:00:10");
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(6);

    for _ in 0..200 {
        let value = generator.generate(&mut rng).expect("generate datetime");
        let text = value.as_str().expect("datetime value");
        let parsed = chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
            .expect("parse generated datetime");
        let start = chrono::NaiveDateTime::parse_from_str("2024-01-01 00:00:00", "%Y-%m-%d %H:%M:%S")
            .expect("parse start");
        let offset = (parsed - start).num_seconds();
        assert!((0..=10).contains(&offset), "offset {offset} out of range");
    }
}

#[test]
fn uuid_is_version_four() {
    let field = FieldSchema::new("id", FieldType::Uuid);
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    for _ in 0..100 {
        let value = generator.generate(&mut rng).expect("generate uuid");
        let parsed = uuid::Uuid::parse_str(value.as_str().expect("uuid text"))
            .expect("well-formed uuid");
        assert_eq!(parsed.get_version_num(), 4);
    }
}

#[test]
fn email_uses_constrained_domain() {
    let field = FieldSchema::new("email", FieldType::Email).constraint("domain", "test.dev");
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    for _ in 0..100 {
        let value = generator.generate(&mut rng).expect("generate email");
        let text = value.as_str().expect("email text");
        let (local, domain) = text.split_once('@').expect("email has one separator");
        assert!(!local.is_empty());
        assert_eq!(domain, "test.dev");
    }
}

#[test]
fn email_without_domain_delegates_to_provider() {
    let field = FieldSchema::new("email", FieldType::Email);
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    let value = generator.generate(&mut rng).expect("generate email");
    assert!(value.as_str().expect("email text").contains('@'));
}

#[test]
fn name_variants_are_nonempty() {
    for name_type in ["full", "first", "last"] {
        let field = FieldSchema::new("who", FieldType::Name).constraint("type", name_type);
        let generator = build(&field);
        let mut rng = ChaCha8Rng::seed_from_u64(10);

        let value = generator.generate(&mut rng).expect("generate name");
        assert!(!value.as_str().expect("name text").is_empty());
    }
}

#[test]
fn phone_format_is_accepted_but_undifferentiated() {
    let field = FieldSchema::new("phone", FieldType::Phone).constraint("format", "US");
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let value = generator.generate(&mut rng).expect("generate phone");
    assert!(!value.as_str().expect("phone text").is_empty());
}

#[test]
fn unknown_constraint_keys_are_ignored() {
    let field = FieldSchema::new("n", FieldType::Integer)
        .constraint("min", 1)
        .constraint("max", 2)
        .constraint("wat", "ignored");
    let generator = build(&field);
    let mut rng = ChaCha8Rng::seed_from_u64(12);

    let value = generator.generate(&mut rng).expect("generate integer");
    assert!(matches!(value, GeneratedValue::Int(1..=2)));
}
