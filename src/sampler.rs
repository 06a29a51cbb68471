//! Deterministic preview selection
//!
//! A gallery shows one of its images as a preview. Rather than storing a
//! cover choice, the image is picked by hashing a seed made from the
//! gallery id and its `updated_at` timestamp: the preview stays the same
//! across renders and reloads, and changes by itself whenever the gallery is
//! edited. Not suitable for anything security related.

use crate::records::{GalleryEntry, Record};
use chrono::SecondsFormat;

const MODULUS: u64 = 2_147_483_647;

/// Pick an index in `0..len` from `seed`; 0 when `len` is 0
///
/// Rolling hash over the UTF-16 code units of the seed:
/// `acc = (acc * 31 + c) mod (2^31 - 1)`.
#[must_use]
pub fn pick(seed: &str, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let acc = seed
        .encode_utf16()
        .fold(0u64, |acc, unit| (acc * 31 + u64::from(unit)) % MODULUS);
    // acc < 2^31, so it fits in usize on every supported target
    (acc % len as u64) as usize
}

/// Seed for a record's preview: `"{id}-{updated_at}"` in RFC 3339 (UTC, `Z`)
#[must_use]
pub fn preview_seed(record: &Record) -> String {
    format!(
        "{}-{}",
        record.id,
        record.updated_at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    )
}

/// The image entry shown as a gallery's preview
///
/// Returns `None` for galleries without image entries and for non-gallery
/// records.
#[must_use]
pub fn preview_entry(record: &Record) -> Option<&GalleryEntry> {
    let images: Vec<&GalleryEntry> = record.entries().iter().filter(|e| e.is_image()).collect();
    if images.is_empty() {
        return None;
    }
    let index = pick(&preview_seed(record), images.len());
    images.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{at, gallery};
    use chrono::Duration;

    #[test]
    fn test_pick_zero_length() {
        assert_eq!(pick("anything", 0), 0);
        assert_eq!(pick("", 0), 0);
    }

    #[test]
    fn test_pick_known_values() {
        // "ab" = (97 * 31 + 98) = 3105
        assert_eq!(pick("ab", 10_000), 3105);
        assert_eq!(pick("ab", 4), 3105 % 4);
        assert_eq!(pick("", 7), 0);
    }

    #[test]
    fn test_pick_wraps_modulus() {
        // Long seeds overflow 31 bits many times; the result must stay in range
        let seed = "z".repeat(500);
        for len in 1..50 {
            assert!(pick(&seed, len) < len);
        }
    }

    #[test]
    fn test_pick_is_deterministic_and_in_range() {
        let seed = "gallery-1-2024-01-01T00:00:00Z";
        let k = pick(seed, 3);
        assert!(k < 3);
        for _ in 0..10 {
            assert_eq!(pick(seed, 3), k);
        }
        assert!(pick(seed, 4) < 4);
    }

    #[test]
    fn test_pick_uses_utf16_units() {
        // U+1F600 is a surrogate pair: 0xD83D, 0xDE00
        let expected = (0xD83Du64 * 31 + 0xDE00) % MODULUS;
        assert_eq!(pick("😀", usize::MAX), expected as usize);
    }

    #[test]
    fn test_preview_seed_format() {
        let record = gallery("gallery-1", "x").updated(at(2024, 1, 1)).build();
        assert_eq!(preview_seed(&record), "gallery-1-2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_preview_entry_only_considers_images() {
        let record = gallery("g1", "x")
            .note_entry("n1", "just text")
            .model_entry("m1", "model-1", "Net")
            .image_entry("i1", "img-1", "Only image")
            .build();
        let entry = preview_entry(&record).unwrap();
        assert_eq!(entry.id, "i1");
    }

    #[test]
    fn test_preview_entry_none_without_images() {
        let record = gallery("g1", "x").note_entry("n1", "text").build();
        assert!(preview_entry(&record).is_none());
    }

    #[test]
    fn test_preview_stable_until_updated() {
        let mut builder = gallery("g1", "Trip").updated(at(2024, 5, 1));
        for i in 0..8 {
            builder = builder.image_entry(&format!("e{i}"), &format!("i{i}"), "pic");
        }
        let record = builder.build();
        let first = preview_entry(&record).map(|e| e.id.clone());
        assert_eq!(preview_entry(&record).map(|e| e.id.clone()), first);

        let expected_index = pick(&preview_seed(&record), 8);
        assert_eq!(first, Some(format!("e{expected_index}")));

        let mut edited = record.clone();
        edited.updated_at += Duration::seconds(1);
        let edited_index = pick(&preview_seed(&edited), 8);
        assert_eq!(
            preview_entry(&edited).map(|e| e.id.clone()),
            Some(format!("e{edited_index}"))
        );
    }
}
