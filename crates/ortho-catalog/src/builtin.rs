//! Built-in demo product set.
//!
//! The storefront has no product backend; it renders this fixed list. IDs
//! are stable across runs so cart snapshots survive restarts.

use ortho_schemas::{Money, Product};
use uuid::Uuid;

fn product(
    n: u128,
    name: &str,
    description: &str,
    category: &str,
    cents: i64,
    image: &str,
) -> Product {
    Product {
        id: Uuid::from_u128(n),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price: Money::from_cents(cents),
        image: Some(image.to_string()),
        in_stock: true,
    }
}

/// The static storefront catalog.
pub fn demo_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Vector carbon foot",
            "Energy-return carbon fiber foot for moderate to high activity levels.",
            "Lower Limb",
            249_999,
            "/img/vector-carbon-foot.jpg",
        ),
        product(
            2,
            "Stride polycentric knee",
            "Four-bar polycentric knee joint with adjustable stance flexion.",
            "Lower Limb",
            389_500,
            "/img/stride-knee.jpg",
        ),
        product(
            3,
            "Grasp myoelectric hand",
            "Dual-electrode myoelectric hand with proportional grip control.",
            "Upper Limb",
            1_249_000,
            "/img/grasp-myo-hand.jpg",
        ),
        product(
            4,
            "Axis body-powered hook",
            "Voluntary-opening stainless hook with cable harness mount.",
            "Upper Limb",
            84_900,
            "/img/axis-hook.jpg",
        ),
        product(
            5,
            "ComfortSeal gel liner",
            "Silicone gel liner, 6mm uniform profile, sizes 22-32.",
            "Liners & Sleeves",
            18_500,
            "/img/comfortseal-liner.jpg",
        ),
        product(
            6,
            "FlexGuard suspension sleeve",
            "Knitted suspension sleeve with anti-slip silicone band.",
            "Liners & Sleeves",
            9_900,
            "/img/flexguard-sleeve.jpg",
        ),
        product(
            7,
            "Titanium pylon kit",
            "30mm titanium pylon with pyramid adapters, cut-to-length.",
            "Components",
            45_000,
            "/img/titanium-pylon.jpg",
        ),
        product(
            8,
            "Rotation adapter",
            "Pyramid rotation adapter for transfemoral alignment.",
            "Components",
            32_500,
            "/img/rotation-adapter.jpg",
        ),
        product(
            9,
            "Residual limb care kit",
            "Cleanser, moisturizer and antibacterial wipes for daily liner care.",
            "Care",
            4_950,
            "/img/care-kit.jpg",
        ),
        product(
            10,
            "Shrinker sock pair",
            "Graduated compression shrinker socks, below-knee, pair.",
            "Care",
            6_800,
            "/img/shrinker-socks.jpg",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_ids_are_unique_and_stable() {
        let items = demo_products();
        let mut ids: Vec<Uuid> = items.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
        assert_eq!(demo_products()[0].id, items[0].id);
    }
}
