use rand::RngCore;

use tabgen_core::FieldType;

use crate::constraints::Constraints;
use crate::errors::GenerationError;
use crate::faker::FakerAdapter;
use crate::generators::{GeneratedValue, Generator, GeneratorRegistry};

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register(FieldType::Email, |constraints| {
        Box::new(EmailGenerator { constraints })
    });
    registry.register(FieldType::Phone, |constraints| {
        Box::new(PhoneGenerator { constraints })
    });
    registry.register(FieldType::Name, |constraints| {
        Box::new(NameGenerator { constraints })
    });
    registry.register(FieldType::Address, |_| Box::new(AddressGenerator));
    registry.register(FieldType::City, |_| Box::new(CityGenerator));
    registry.register(FieldType::Country, |_| Box::new(CountryGenerator));
    registry.register(FieldType::Company, |_| Box::new(CompanyGenerator));
    registry.register(FieldType::Url, |_| Box::new(UrlGenerator));
}

struct EmailGenerator {
    constraints: Constraints,
}

impl Generator for EmailGenerator {
    fn field_type(&self) -> FieldType {
        FieldType::Email
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<GeneratedValue, GenerationError> {
        let value = match self.constraints.get_str("domain") {
            Some(domain) if !domain.is_empty() => {
                format!("{}@{domain}", FakerAdapter::username(rng))
            }
            _ => FakerAdapter::email(rng),
        };
        Ok(GeneratedValue::Text(value))
    }
}

struct PhoneGenerator {
    constraints: Constraints,
}

impl Generator for PhoneGenerator {
    fn field_type(&self) -> FieldType {
        FieldType::Phone
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<GeneratedValue, GenerationError> {
        // "format" is accepted but not differentiated; every value comes from
        // the same provider.
        let _format = self.constraints.get_str("format").unwrap_or("US");
        Ok(GeneratedValue::Text(FakerAdapter::phone_number(rng)))
    }
}

struct NameGenerator {
    constraints: Constraints,
}

impl Generator for NameGenerator {
    fn field_type(&self) -> FieldType {
        FieldType::Name
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<GeneratedValue, GenerationError> {
        let value = match self.constraints.get_str("type").unwrap_or("full") {
            "first" => FakerAdapter::first_name(rng),
            "last" => FakerAdapter::last_name(rng),
            _ => FakerAdapter::full_name(rng),
        };
        Ok(GeneratedValue::Text(value))
    }
}

struct AddressGenerator;

impl Generator for AddressGenerator {
    fn field_type(&self) -> FieldType {
        FieldType::Address
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<GeneratedValue, GenerationError> {
        Ok(GeneratedValue::Text(FakerAdapter::street_address(rng)))
    }
}

struct CityGenerator;

impl Generator for CityGenerator {
    fn field_type(&self) -> FieldType {
        FieldType::City
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<GeneratedValue, GenerationError> {
        Ok(GeneratedValue::Text(FakerAdapter::city(rng)))
    }
}

struct CountryGenerator;

impl Generator for CountryGenerator {
    fn field_type(&self) -> FieldType {
        FieldType::Country
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<GeneratedValue, GenerationError> {
        Ok(GeneratedValue::Text(FakerAdapter::country(rng)))
    }
}

struct CompanyGenerator;

impl Generator for CompanyGenerator {
    fn field_type(&self) -> FieldType {
        FieldType::Company
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<GeneratedValue, GenerationError> {
        Ok(GeneratedValue::Text(FakerAdapter::company(rng)))
    }
}

struct UrlGenerator;

impl Generator for UrlGenerator {
    fn field_type(&self) -> FieldType {
        FieldType::Url
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<GeneratedValue, GenerationError> {
        Ok(GeneratedValue::Text(FakerAdapter::url(rng)))
    }
}
