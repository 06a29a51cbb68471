//! Testing utilities for facetr
//!
//! This module provides record fixtures for writing tests: builder
//! shortcuts for each record kind plus a few canned collections.
//!
//! Only available when compiled with `cfg(test)`.

use crate::records::{
    EntryAsset, EntryKind, Gallery, GalleryEntry, ImageAsset, ModelAsset, Owner, Record, RecordKind,
    Tag, Visibility,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Midnight UTC on the given date
///
/// # Panics
/// Panics if the date does not exist.
#[must_use]
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid fixture date")
}

/// Start building a model record
pub fn model(id: impl Into<String>, title: impl Into<String>) -> RecordBuilder {
    RecordBuilder::new(id, title, RecordKind::Model(ModelAsset::default()))
}

/// Start building an image record
pub fn image(id: impl Into<String>, title: impl Into<String>) -> RecordBuilder {
    RecordBuilder::new(id, title, RecordKind::Image(ImageAsset::default()))
}

/// Start building a gallery record
pub fn gallery(id: impl Into<String>, title: impl Into<String>) -> RecordBuilder {
    RecordBuilder::new(id, title, RecordKind::Gallery(Gallery::default()))
}

/// `n` models titled "model {i}"
///
/// Owners alternate between `u0` and `u1`, tags between `t0` and `t1`, every
/// third model carries the `lora` type tag, even models have a small file
/// size and each model is one hour newer than the previous one.
#[must_use]
pub fn numbered_models(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let parity = i % 2;
            let mut builder = model(format!("m{i:03}"), format!("model {i}"))
                .owner(format!("u{parity}"), format!("User {parity}"))
                .tag(format!("t{parity}"), format!("tag {parity}"), "style")
                .updated(at(2024, 1, 1) + Duration::hours(i64::try_from(i).unwrap_or_default()));
            if i % 3 == 0 {
                builder = builder.tag("lora", "LoRA", "type");
            }
            if parity == 0 {
                builder = builder.size(1_000 * (i as u64 + 1));
            }
            builder.build()
        })
        .collect()
}

/// Fluent builder over a [`Record`]
///
/// Setters that do not apply to the record's kind are ignored.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    fn new(id: impl Into<String>, title: impl Into<String>, kind: RecordKind) -> Self {
        Self {
            record: Record {
                id: id.into(),
                title: title.into(),
                owner: Owner::new("owner", "Owner"),
                updated_at: at(2024, 1, 1),
                visibility: Visibility::Public,
                kind,
            },
        }
    }

    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        if let RecordKind::Model(m) = &mut self.record.kind {
            m.slug = slug.into();
        }
        self
    }

    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        let text = Some(text.into());
        match &mut self.record.kind {
            RecordKind::Model(m) => m.description = text,
            RecordKind::Image(i) => i.description = text,
            RecordKind::Gallery(g) => g.description = text,
        }
        self
    }

    #[must_use]
    pub fn version_label(mut self, label: impl Into<String>) -> Self {
        if let RecordKind::Model(m) = &mut self.record.kind {
            m.version_label = Some(label.into());
        }
        self
    }

    #[must_use]
    pub fn object_name(mut self, name: impl Into<String>) -> Self {
        let name = Some(name.into());
        match &mut self.record.kind {
            RecordKind::Model(m) => m.object_name = name,
            RecordKind::Image(i) => i.object_name = name,
            RecordKind::Gallery(_) => {}
        }
        self
    }

    #[must_use]
    pub fn owner(mut self, id: impl Into<String>, display_name: impl Into<String>) -> Self {
        self.record.owner = Owner::new(id, display_name);
        self
    }

    #[must_use]
    pub fn tag(mut self, id: impl Into<String>, label: impl Into<String>, category: impl Into<String>) -> Self {
        let tag = Tag::new(id, label, category);
        match &mut self.record.kind {
            RecordKind::Model(m) => m.tags.push(tag),
            RecordKind::Image(i) => i.tags.push(tag),
            RecordKind::Gallery(_) => {}
        }
        self
    }

    #[must_use]
    pub fn size(mut self, bytes: u64) -> Self {
        match &mut self.record.kind {
            RecordKind::Model(m) => m.file_size = Some(bytes),
            RecordKind::Image(i) => i.file_size = Some(bytes),
            RecordKind::Gallery(_) => {}
        }
        self
    }

    #[must_use]
    pub const fn visibility(mut self, visibility: Visibility) -> Self {
        self.record.visibility = visibility;
        self
    }

    #[must_use]
    pub const fn updated(mut self, when: DateTime<Utc>) -> Self {
        self.record.updated_at = when;
        self
    }

    #[must_use]
    pub fn image_entry(self, entry_id: impl Into<String>, asset_id: impl Into<String>, title: impl Into<String>) -> Self {
        self.asset_entry(entry_id, EntryKind::Image, asset_id, title)
    }

    #[must_use]
    pub fn model_entry(self, entry_id: impl Into<String>, asset_id: impl Into<String>, title: impl Into<String>) -> Self {
        self.asset_entry(entry_id, EntryKind::Model, asset_id, title)
    }

    /// Entry with a note and no asset
    #[must_use]
    pub fn note_entry(self, entry_id: impl Into<String>, note: impl Into<String>) -> Self {
        self.entry(GalleryEntry {
            id: entry_id.into(),
            asset: None,
            note: Some(note.into()),
        })
    }

    fn asset_entry(
        self,
        entry_id: impl Into<String>,
        kind: EntryKind,
        asset_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.entry(GalleryEntry {
            id: entry_id.into(),
            asset: Some(EntryAsset {
                kind,
                id: asset_id.into(),
                title: title.into(),
            }),
            note: None,
        })
    }

    fn entry(mut self, entry: GalleryEntry) -> Self {
        if let RecordKind::Gallery(g) = &mut self.record.kind {
            g.entries.push(entry);
        }
        self
    }

    #[must_use]
    pub fn build(self) -> Record {
        self.record
    }
}
