//! Sprite placeholder catalog
//!
//! The renderer never loads image files directly; it asks the catalog for a
//! drawable per sprite kind. Every kind always resolves to *something*, so
//! missing art is absorbed here and never reaches the simulation.

/// Visual category of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Cat,
    Cloud,
    Yarn,
    TreatBowl,
    Sky,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 5] = [
        SpriteKind::Cat,
        SpriteKind::Cloud,
        SpriteKind::Yarn,
        SpriteKind::TreatBowl,
        SpriteKind::Sky,
    ];

    fn index(self) -> usize {
        match self {
            SpriteKind::Cat => 0,
            SpriteKind::Cloud => 1,
            SpriteKind::Yarn => 2,
            SpriteKind::TreatBowl => 3,
            SpriteKind::Sky => 4,
        }
    }
}

/// A flat-color stand-in for a sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placeholder {
    pub color: [f32; 4],
}

/// Explicit kind -> placeholder mapping, fixed at configuration time
#[derive(Debug, Clone)]
pub struct SpriteCatalog {
    placeholders: [Placeholder; 5],
}

impl Default for SpriteCatalog {
    fn default() -> Self {
        Self {
            placeholders: [
                Placeholder { color: [1.0, 0.65, 0.0, 1.0] },   // cat: orange
                Placeholder { color: [1.0, 1.0, 1.0, 1.0] },    // cloud: white
                Placeholder { color: [1.0, 0.0, 0.0, 1.0] },    // yarn: red
                Placeholder { color: [0.55, 0.27, 0.07, 1.0] }, // treat bowl: brown
                Placeholder { color: [0.53, 0.81, 0.92, 1.0] }, // sky blue
            ],
        }
    }
}

impl SpriteCatalog {
    /// Resolve a sprite kind; total, never fails
    pub fn placeholder(&self, kind: SpriteKind) -> Placeholder {
        self.placeholders[kind.index()]
    }

    /// Override one placeholder (e.g. from settings at startup)
    pub fn set(&mut self, kind: SpriteKind, placeholder: Placeholder) {
        self.placeholders[kind.index()] = placeholder;
    }
}
