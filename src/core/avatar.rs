use crate::core::seed::{code_unit_sum, seeded_fraction};
use crate::models::{AvatarConfig, AvatarPalette, Gender, HairStyle, Seed};

/// Static palette entry, turned into an owned [`AvatarPalette`] on use
#[derive(Debug, Clone, Copy)]
pub struct PaletteSpec {
    pub skin: &'static str,
    pub outfit: &'static str,
    pub hair: &'static str,
    pub aura: &'static str,
    pub accent: &'static str,
}

impl PaletteSpec {
    pub fn to_palette(&self) -> AvatarPalette {
        AvatarPalette {
            skin: self.skin.to_string(),
            outfit: self.outfit.to_string(),
            hair: self.hair.to_string(),
            aura: self.aura.to_string(),
            accent: self.accent.to_string(),
        }
    }
}

pub const PALETTES: [PaletteSpec; 5] = [
    PaletteSpec { skin: "#f5d8b9", outfit: "#3f9b4b", hair: "#2f4f2f", aura: "#7de48b", accent: "#d9ffd6" },
    PaletteSpec { skin: "#f4c9a7", outfit: "#df5f2d", hair: "#5e2323", aura: "#ff8f6b", accent: "#ffe1aa" },
    PaletteSpec { skin: "#efc7a2", outfit: "#8d6a3a", hair: "#59412e", aura: "#9dc978", accent: "#b7eb8f" },
    PaletteSpec { skin: "#efd5c0", outfit: "#7f8da6", hair: "#3d465f", aura: "#c4d9ff", accent: "#eaf2ff" },
    PaletteSpec { skin: "#ebcfbe", outfit: "#2f66cc", hair: "#1d2a4f", aura: "#7fc0ff", accent: "#b1e5ff" },
];

/// Motif pairs, parallel to [`PALETTES`]
pub const MOTIFS: [[&str; 2]; 5] = [
    ["leaf-crown", "vines"],
    ["ember-glow", "sun-flare"],
    ["green-leaves", "stone-badge"],
    ["gear-halo", "silver-pin"],
    ["wave-ribbon", "droplet-orb"],
];

/// Palette slot a vibe maps to
#[inline]
pub fn palette_index(vibe: &str) -> usize {
    (code_unit_sum(vibe) % PALETTES.len() as Seed) as usize
}

/// Generate the avatar for a vibe
///
/// Palette and motifs depend on the vibe alone; the seed is carried for
/// rendering variation and the gender only picks the hair style.
pub fn generate_avatar(vibe: &str, seed: Seed, gender: Gender) -> AvatarConfig {
    let idx = palette_index(vibe);
    AvatarConfig {
        palette: PALETTES[idx].to_palette(),
        motifs: MOTIFS[idx].iter().map(|m| m.to_string()).collect(),
        seed,
        hair_style: Some(match gender {
            Gender::Female => HairStyle::Long,
            Gender::Male => HairStyle::Short,
        }),
    }
}

/// Accent decoration drawn from the avatar's first motif
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentMark {
    Leaf,
    Wave,
    Gear,
    Ember,
    None,
}

impl AccentMark {
    fn from_motif(motif: &str) -> Self {
        if motif.contains("leaf") {
            AccentMark::Leaf
        } else if motif.contains("wave") {
            AccentMark::Wave
        } else if motif.contains("gear") {
            AccentMark::Gear
        } else if motif.contains("ember") {
            AccentMark::Ember
        } else {
            AccentMark::None
        }
    }
}

/// Seed-derived details a renderer needs beyond the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarFeatures {
    pub hair_style: HairStyle,
    /// Horizontal eye spread, 0 or 1 pixel
    pub eye_offset: u8,
    pub accent: AccentMark,
}

impl AvatarFeatures {
    pub fn derive(avatar: &AvatarConfig) -> Self {
        let hair_style = avatar.hair_style.unwrap_or_else(|| {
            let r = seeded_fraction(avatar.seed, 1);
            if r > 0.66 {
                HairStyle::Long
            } else if r > 0.33 {
                HairStyle::Medium
            } else {
                HairStyle::Short
            }
        });

        let eye_offset = if seeded_fraction(avatar.seed, 2) > 0.5 { 1 } else { 0 };

        let accent = avatar
            .motifs
            .first()
            .map(|m| AccentMark::from_motif(m))
            .unwrap_or(AccentMark::None);

        Self {
            hair_style,
            eye_offset,
            accent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_index_by_vibe() {
        assert_eq!(palette_index("cozy"), 3);
        assert_eq!(palette_index("playful"), 0);
        assert_eq!(palette_index(""), 0);
    }

    #[test]
    fn test_generate_avatar_cozy() {
        let avatar = generate_avatar("cozy", 42, Gender::Female);

        assert_eq!(avatar.palette.outfit, "#7f8da6");
        assert_eq!(avatar.motifs, vec!["gear-halo", "silver-pin"]);
        assert_eq!(avatar.seed, 42);
        assert_eq!(avatar.hair_style, Some(HairStyle::Long));
    }

    #[test]
    fn test_gender_only_changes_hair() {
        let female = generate_avatar("romantic", 9, Gender::Female);
        let male = generate_avatar("romantic", 9, Gender::Male);

        assert_eq!(female.palette, male.palette);
        assert_eq!(female.motifs, male.motifs);
        assert_eq!(male.hair_style, Some(HairStyle::Short));
    }

    #[test]
    fn test_generate_avatar_is_deterministic() {
        for seed in [0, 1, 977, 123_456] {
            assert_eq!(
                generate_avatar("adventurous", seed, Gender::Male),
                generate_avatar("adventurous", seed, Gender::Male)
            );
        }
    }

    #[test]
    fn test_features_from_seed() {
        let mut avatar = generate_avatar("playful", 100, Gender::Male);
        avatar.hair_style = None;

        let features = AvatarFeatures::derive(&avatar);
        // (100 + 31) % 100 = 31 -> short, (100 + 62) % 100 = 62 -> offset
        assert_eq!(features.hair_style, HairStyle::Short);
        assert_eq!(features.eye_offset, 1);
        assert_eq!(features.accent, AccentMark::Leaf);
    }

    #[test]
    fn test_features_keep_configured_hair() {
        let avatar = generate_avatar("cozy", 50, Gender::Female);
        let features = AvatarFeatures::derive(&avatar);

        assert_eq!(features.hair_style, HairStyle::Long);
        assert_eq!(features.eye_offset, 0);
        assert_eq!(features.accent, AccentMark::Gear);
    }
}
