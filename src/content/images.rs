//! Image fallback and rotation for hero tiles and sector cards.
//!
//! Tiles carry up to three image URLs. Blank slots are backfilled from their
//! neighbours, a fully blank tile gets a placeholder picked by keywords in its
//! title, and a load failure moves to the next candidate exactly once.

use std::time::Duration;

use futures::{stream, Stream};
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::fallback::is_present;

pub const GENERIC_PLACEHOLDER: &str = "/placeholders/generic.jpg";

const KEYWORD_PLACEHOLDERS: &[(&[&str], &str)] = &[
    (&["bathroom"], "/placeholders/bathroom.jpg"),
    (&["ceramic", "tile"], "/placeholders/ceramic-tiles.jpg"),
    (&["coffee", "avocado", "agri"], "/placeholders/agriculture.jpg"),
    (&["news"], "/placeholders/news.jpg"),
];

/// Rotation periods per component.
pub mod intervals {
    use std::time::Duration;

    pub const HERO_CARD: Duration = Duration::from_millis(3000);
    pub const HERO_SLIDE: Duration = Duration::from_millis(4000);
    pub const SECTOR_CARD: Duration = Duration::from_millis(2500);
}

/// Placeholder chosen by case-insensitive keyword match on the title.
pub fn placeholder_for(title: &str) -> &'static str {
    let title = title.to_lowercase();
    KEYWORD_PLACEHOLDERS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| title.contains(k)))
        .map(|(_, url)| *url)
        .unwrap_or(GENERIC_PLACEHOLDER)
}

/// Fill all three slots.
///
/// A blank slot takes the nearest earlier non-blank slot, else the nearest later
/// one. When every slot is blank each becomes the title's placeholder.
pub fn resolve_images(slots: [Option<&str>; 3], title: &str) -> [String; 3] {
    let present: Vec<Option<&str>> = slots
        .iter()
        .map(|s| s.filter(|v| is_present(Some(*v))).map(str::trim))
        .collect();

    std::array::from_fn(|i| {
        present[i]
            .or_else(|| present[..i].iter().rev().find_map(|s| *s))
            .or_else(|| present[i + 1..].iter().find_map(|s| *s))
            .unwrap_or_else(|| placeholder_for(title))
            .to_string()
    })
}

/// Every candidate a tile may display, in fallback order, without repeats.
pub fn fallback_chain(images: &[String], title: &str) -> Vec<String> {
    let mut chain: Vec<String> = Vec::with_capacity(images.len() + 2);
    let candidates = images
        .iter()
        .map(String::as_str)
        .chain([placeholder_for(title), GENERIC_PLACEHOLDER]);

    for candidate in candidates {
        if !chain.iter().any(|c| c == candidate) {
            chain.push(candidate.to_string());
        }
    }
    chain
}

/// Candidate to try after `failed` did not load. `None` once the chain is used up.
pub fn next_fallback<'a>(chain: &'a [String], failed: &str) -> Option<&'a str> {
    match chain.iter().position(|c| c == failed) {
        Some(pos) => chain.get(pos + 1).map(String::as_str),
        None => chain.first().map(String::as_str),
    }
}

// ============================================================================
// Rotation
// ============================================================================

/// Displayed image index, wrapping at the list length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }
}

/// One advanced index per `period`, starting one period from now.
///
/// The timer lives inside the stream; dropping the stream stops it.
pub fn rotation_ticks(len: usize, period: Duration) -> impl Stream<Item = usize> {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    stream::unfold(
        (ticker, Rotation::new(len)),
        |(mut ticker, mut rotation)| async move {
            ticker.tick().await;
            let index = rotation.advance();
            Some((index, (ticker, rotation)))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn urls(images: &[String; 3]) -> [&str; 3] {
        [&images[0], &images[1], &images[2]]
    }

    #[test]
    fn secondary_backfills_both_neighbours() {
        let images = resolve_images([Some(""), Some("https://x/a.jpg"), Some("")], "Coffee");
        assert_eq!(
            urls(&images),
            ["https://x/a.jpg", "https://x/a.jpg", "https://x/a.jpg"]
        );
    }

    #[test]
    fn later_blanks_take_nearest_earlier_image() {
        let images = resolve_images(
            [Some("https://x/a.jpg"), Some("https://x/b.jpg"), None],
            "Tiles",
        );
        assert_eq!(
            urls(&images),
            ["https://x/a.jpg", "https://x/b.jpg", "https://x/b.jpg"]
        );

        let images = resolve_images([Some("https://x/a.jpg"), Some("  "), Some("https://x/c.jpg")], "");
        assert_eq!(
            urls(&images),
            ["https://x/a.jpg", "https://x/a.jpg", "https://x/c.jpg"]
        );
    }

    #[test]
    fn all_blank_uses_keyword_placeholder() {
        let cases = [
            ("Modern Bathroom Fittings", "/placeholders/bathroom.jpg"),
            ("Ceramic Works", "/placeholders/ceramic-tiles.jpg"),
            ("Floor TILES", "/placeholders/ceramic-tiles.jpg"),
            ("Ethiopian Coffee Export", "/placeholders/agriculture.jpg"),
            ("Avocado Oil", "/placeholders/agriculture.jpg"),
            ("Agriculture", "/placeholders/agriculture.jpg"),
            ("Latest News", "/placeholders/news.jpg"),
            ("Real Estate", GENERIC_PLACEHOLDER),
            ("", GENERIC_PLACEHOLDER),
        ];

        for (title, expected) in cases {
            let images = resolve_images([None, Some(""), Some(" ")], title);
            assert_eq!(urls(&images), [expected; 3], "title {title:?}");
        }
    }

    #[test]
    fn fallback_chain_ends_with_placeholders() {
        let images = resolve_images([Some("https://x/a.jpg"), None, None], "Coffee");
        let chain = fallback_chain(&images, "Coffee");
        assert_eq!(
            chain,
            vec![
                "https://x/a.jpg".to_string(),
                "/placeholders/agriculture.jpg".to_string(),
                GENERIC_PLACEHOLDER.to_string(),
            ]
        );

        let generic = fallback_chain(&resolve_images([None, None, None], "Other"), "Other");
        assert_eq!(generic, vec![GENERIC_PLACEHOLDER.to_string()]);
    }

    #[test]
    fn load_errors_advance_once_per_candidate() {
        let chain = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(next_fallback(&chain, "a"), Some("b"));
        assert_eq!(next_fallback(&chain, "b"), Some("c"));
        assert_eq!(next_fallback(&chain, "c"), None);
        assert_eq!(next_fallback(&chain, "unknown"), Some("a"));
        assert_eq!(next_fallback(&[], "a"), None);
    }

    #[test]
    fn rotation_wraps_and_tolerates_empty_lists() {
        let mut rotation = Rotation::new(3);
        let seen: Vec<usize> = (0..4).map(|_| rotation.advance()).collect();
        assert_eq!(seen, vec![1, 2, 0, 1]);

        let mut empty = Rotation::new(0);
        assert_eq!(empty.advance(), 0);
        assert_eq!(empty.index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_interval() {
        let period = intervals::HERO_CARD;
        let start = Instant::now();
        let ticks = rotation_ticks(3, period);
        tokio::pin!(ticks);

        // Nothing before the first full period
        let early = tokio::time::timeout(period - Duration::from_millis(1), ticks.next()).await;
        assert!(early.is_err());

        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(ticks.next().await.unwrap());
        }

        assert_eq!(seen, vec![1, 2, 0, 1]);
        assert_eq!(start.elapsed(), period * 4);
    }
}
