//! Adapter over the `fake` crate for realistic text values.
//!
//! The semantic generators never touch the faker library directly; everything
//! goes through this adapter so the provider stays swappable and every value
//! is drawn from the injected random source.

use fake::Fake;
use fake::faker::address::en::{
    BuildingNumber, CityName, CountryName, StateAbbr, StreetName, StreetSuffix, ZipCode,
};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{DomainSuffix, FreeEmail, Username};
use fake::faker::lorem::en::Word;
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use rand::RngCore;

pub struct FakerAdapter;

impl FakerAdapter {
    pub fn username(rng: &mut dyn RngCore) -> String {
        Username().fake_with_rng(rng)
    }

    pub fn email(rng: &mut dyn RngCore) -> String {
        FreeEmail().fake_with_rng(rng)
    }

    pub fn phone_number(rng: &mut dyn RngCore) -> String {
        PhoneNumber().fake_with_rng(rng)
    }

    pub fn full_name(rng: &mut dyn RngCore) -> String {
        Name().fake_with_rng(rng)
    }

    pub fn first_name(rng: &mut dyn RngCore) -> String {
        FirstName().fake_with_rng(rng)
    }

    pub fn last_name(rng: &mut dyn RngCore) -> String {
        LastName().fake_with_rng(rng)
    }

    /// Single-line street address: number, street, city, state, zip.
    pub fn street_address(rng: &mut dyn RngCore) -> String {
        let number: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);
        let suffix: String = StreetSuffix().fake_with_rng(rng);
        let city: String = CityName().fake_with_rng(rng);
        let state: String = StateAbbr().fake_with_rng(rng);
        let zip: String = ZipCode().fake_with_rng(rng);
        format!("{number} {street} {suffix}, {city}, {state} {zip}")
    }

    pub fn city(rng: &mut dyn RngCore) -> String {
        CityName().fake_with_rng(rng)
    }

    pub fn country(rng: &mut dyn RngCore) -> String {
        CountryName().fake_with_rng(rng)
    }

    pub fn company(rng: &mut dyn RngCore) -> String {
        CompanyName().fake_with_rng(rng)
    }

    pub fn url(rng: &mut dyn RngCore) -> String {
        let word: String = Word().fake_with_rng(rng);
        let suffix: String = DomainSuffix().fake_with_rng(rng);
        format!("https://www.{word}.{suffix}/")
    }
}
