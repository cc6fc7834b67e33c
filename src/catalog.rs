//! Built-in destination catalog
//!
//! The catalog is compiled in and constructed once on first access. An
//! external catalog may replace it at startup (see [`crate::loader`]).

use std::sync::LazyLock;

use crate::models::{Catalog, CountryGroup, DestinationRecord};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(build_catalog);

/// The process-wide built-in catalog
#[must_use]
pub fn builtin() -> &'static Catalog {
    &BUILTIN
}

fn build_catalog() -> Catalog {
    Catalog {
        countries: vec![
            CountryGroup {
                id: 1,
                name: "Australia".to_string(),
                cities: vec![
                    DestinationRecord::new(
                        "Sydney, Australia",
                        "https://i.postimg.cc/gxX0hr6t/temp-Imagee-AG2f5.avif",
                        "A vibrant city known for its iconic landmarks like the Sydney Opera House and Sydney Harbour Bridge.",
                        "Australia/Sydney",
                    ),
                    DestinationRecord::new(
                        "Melbourne, Australia",
                        "https://i.postimg.cc/QF2dJsQ8/Melburnian-Skyline-b.jpg",
                        "A cultural hub famous for its art, food, and diverse neighborhoods.",
                        "Australia/Melbourne",
                    ),
                ],
            },
            CountryGroup {
                id: 2,
                name: "Japan".to_string(),
                cities: vec![
                    DestinationRecord::new(
                        "Tokyo, Japan",
                        "https://i.postimg.cc/mPHbDq00/gettyimages-1390815938.avif",
                        "A bustling metropolis blending tradition and modernity, famous for its cherry blossoms and rich culture.",
                        "Asia/Tokyo",
                    ),
                    DestinationRecord::new(
                        "Kyoto, Japan",
                        "https://i.postimg.cc/JDP8vWkB/map-of-kyoto-japan-travel-scaled-jpg.webp",
                        "Known for its historic temples, gardens, and traditional tea houses.",
                        "Asia/Tokyo",
                    ),
                ],
            },
            CountryGroup {
                id: 3,
                name: "Brazil".to_string(),
                cities: vec![
                    DestinationRecord::new(
                        "Rio de Janeiro, Brazil",
                        "https://i.postimg.cc/w34HkgzC/christ-the-redeemer-rio-1600x900-f50-50.webp",
                        "A lively city known for its stunning beaches, vibrant carnival celebrations, and iconic landmarks.",
                        "America/Sao_Paulo",
                    ),
                    DestinationRecord::new(
                        "São Paulo, Brazil",
                        "https://i.postimg.cc/mtc4XJ2t/saopaulo.jpg",
                        "The financial hub with diverse culture, arts, and a vibrant nightlife.",
                        "America/Sao_Paulo",
                    ),
                ],
            },
        ],
        temples: vec![
            DestinationRecord::new(
                "Angkor Wat, Cambodia",
                "https://i.postimg.cc/Q94LSk2Q/overview-complex-Angkor-Wat-Cambodia-jpg.webp",
                "A UNESCO World Heritage site and the largest religious monument in the world.",
                "Asia/Phnom_Penh",
            )
            .with_id(1),
            DestinationRecord::new(
                "Taj Mahal, India",
                "https://i.postimg.cc/3WNQNVGn/taj-mahal-agra-india-TAJ0217-9eab8f20d11d4391901867ed1ce222b8.jpg",
                "An iconic symbol of love and a masterpiece of Mughal architecture.",
                "Asia/Kolkata",
            )
            .with_id(2),
        ],
        beaches: vec![
            DestinationRecord::new(
                "Bora Bora, French Polynesia",
                "https://i.postimg.cc/8JC9Ff7j/leonardo-352069-179204733-160537.jpg",
                "An island known for its stunning turquoise waters and luxurious overwater bungalows.",
                "Pacific/Tahiti",
            )
            .with_id(1),
            DestinationRecord::new(
                "Copacabana Beach, Brazil",
                "https://i.postimg.cc/kR6HsrFC/thumbnail-23.jpg",
                "A famous beach in Rio de Janeiro, Brazil, with a vibrant atmosphere and scenic views.",
                "America/Sao_Paulo",
            )
            .with_id(2),
        ],
    }
}
