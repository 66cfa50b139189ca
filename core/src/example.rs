//! Built-in record used when no input file is given.

use serde_json::Map;

use crate::types::{Category, Pet, Tag};

pub const EXAMPLE_PET_ID: i64 = 9_574_394;

const EXAMPLE_PHOTO: &str =
    "https://www.petfoodindustry.com/ext/resources/Images-by-month-year/18_08/dog-business-office-computer.jpg";

pub fn example_pet() -> Pet {
    Pet {
        id: EXAMPLE_PET_ID,
        category: Some(Category {
            id: 0,
            name: "dog".to_string(),
            extra: Map::new(),
        }),
        name: Some("Ralph".to_string()),
        photo_urls: vec![EXAMPLE_PHOTO.to_string()],
        tags: vec![Tag {
            id: 0,
            name: format!("ralph_{EXAMPLE_PET_ID}"),
            extra: Map::new(),
        }],
        status: Some("availableForAdoption".to_string()),
        extra: Map::new(),
    }
}

/// The example pet after its rename: new name, first tag re-labelled to match.
pub fn renamed_example_pet(name: &str) -> Pet {
    let mut pet = example_pet();
    pet.name = Some(name.to_string());
    if let Some(tag) = pet.tags.first_mut() {
        tag.name = format!("{name}_{EXAMPLE_PET_ID}");
    }
    pet
}
