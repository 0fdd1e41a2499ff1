//! Built-in starter content.
//!
//! A fresh or reset library comes preloaded with five presentations,
//! each carrying the same five study slides, so the app is never empty
//! on first launch.

use crate::domain::entities::Presentation;
use crate::domain::ordering::OrderAssigner;

pub(crate) const SEED_PRESENTATION_TITLES: [&str; 5] = [
    "CFM: January 2",
    "CFM: January 9",
    "CFM: January 16",
    "CFM: January 23",
    "CFM: January 30",
];

const SEED_SLIDES: [(&str, &str); 5] = [
    (
        "Under the direction of Heavenly Father, Jesus Christ created the earth.",
        "Elder D. Todd Christofferson said, \u{201c}Whatever the details of the creation process, we know that it was not accidental but that it was directed by God the Father and implemented by Jesus Christ\u{201d}",
    ),
    (
        "Genesis 1:27\u{2013}28",
        "27 So God created man in his own image, in the image of God created he him; male and female created he them.\n\n28 And God blessed them, and God said unto them, Be fruitful, and multiply, and replenish the earth, and subdue it: and have dominion over the fish of the sea, and over the fowl of the air, and over every living thing that moveth upon the earth.",
    ),
    (
        "Genesis 2:2\u{2013}3",
        "2 And on the seventh day God ended his work which he had made; and he rested on the seventh day from all his work which he had made.\n\n3 And God blessed the seventh day, and sanctified it: because that in it he had rested from all his work which God created and made.",
    ),
    (
        "The Sabbath is God\u{2019}s time",
        "Elder David A. Bednar taught, \u{201c}The Sabbath is God\u{2019}s time, a sacred time specifically set apart for worshipping Him and for receiving and remembering His great and precious promises\u{201d}",
    ),
    (
        "Abraham 4:28",
        "28 And the Gods said: We will bless them. And the Gods said: We will cause them to be fruitful and multiply, and replenish the earth, and subdue it, and to have dominion over the fish of the sea, and over the fowl of the air, and over every living thing that moveth upon the earth.",
    ),
];

/// Builds the five starter presentations, drawing fresh creation-order
/// keys from the given assigner.
pub(crate) fn seed_presentations(orders: &mut OrderAssigner) -> Vec<Presentation> {
    SEED_PRESENTATION_TITLES
        .iter()
        .map(|title| {
            let mut presentation = Presentation::new(*title, orders.next());
            for (slide_title, slide_content) in SEED_SLIDES {
                presentation.add_slide(slide_title, slide_content);
            }
            presentation
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let mut orders = OrderAssigner::new();
        let seeded = seed_presentations(&mut orders);

        assert_eq!(seeded.len(), 5);
        assert!(seeded.iter().all(|p| p.slide_count() == 5));
        assert_eq!(orders.last(), 5);
    }
}
