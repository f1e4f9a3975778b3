use crate::core::avatar::{PaletteSpec, PALETTES};
use crate::core::seed::Mulberry32;
use crate::models::{AvatarConfig, HairStyle, LobbyAvatar, Seed};

/// Avatars wandering the landing page
pub const LOBBY_SIZE: usize = 30;
/// Fixed seed so every visitor sees the same crowd
pub const LOBBY_SEED: u32 = 20_260_301;
/// Two avatars closer than this (in percent of the stage) may pair up
pub const MEETING_DISTANCE: f64 = 6.2;

const LOBBY_EXTRA_PALETTE: PaletteSpec = PaletteSpec {
    skin: "#f5d8b9",
    outfit: "#9b59b6",
    hair: "#2a1f3a",
    aura: "#d7a6ff",
    accent: "#f2dfff",
};

const LOBBY_MOTIFS: [&str; 6] = [
    "leaf-crown",
    "ember-glow",
    "gear-halo",
    "wave-ribbon",
    "green-leaves",
    "stone-badge",
];

const HAIR_CYCLE: [HairStyle; 3] = [HairStyle::Short, HairStyle::Medium, HairStyle::Long];

fn lobby_palette(i: usize) -> PaletteSpec {
    let slot = i % (PALETTES.len() + 1);
    PALETTES.get(slot).copied().unwrap_or(LOBBY_EXTRA_PALETTE)
}

/// Spawn `count` lobby avatars
///
/// Positions, velocities and match biases come from one Mulberry32 stream,
/// drawn in that order per avatar, so the crowd is identical on every call.
pub fn spawn_lobby(count: usize) -> Vec<LobbyAvatar> {
    let mut rand = Mulberry32::new(LOBBY_SEED);

    (0..count)
        .map(|i| {
            let avatar = AvatarConfig {
                palette: lobby_palette(i).to_palette(),
                motifs: vec![LOBBY_MOTIFS[i % LOBBY_MOTIFS.len()].to_string()],
                seed: 100 + 13 * i as Seed,
                hair_style: Some(HAIR_CYCLE[i % HAIR_CYCLE.len()]),
            };

            let x = 8.0 + rand.next_f64() * 84.0;
            let y = 10.0 + rand.next_f64() * 80.0;
            let vx = (rand.next_f64() - 0.5) * 0.9;
            let vy = (rand.next_f64() - 0.5) * 0.9;
            let match_bias = rand.next_f64() * 2.0 - 1.0;

            LobbyAvatar {
                id: i,
                avatar,
                x,
                y,
                vx,
                vy,
                match_bias,
            }
        })
        .collect()
}

/// Chance two meeting avatars pair up, kept within [0.15, 0.85]
pub fn pair_match_chance(a: &LobbyAvatar, b: &LobbyAvatar) -> f64 {
    (0.5 + (a.match_bias + b.match_bias) * 0.16).clamp(0.15, 0.85)
}

pub fn within_meeting_range(a: &LobbyAvatar, b: &LobbyAvatar) -> bool {
    (b.x - a.x).hypot(b.y - a.y) <= MEETING_DISTANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_lobby_layout() {
        let lobby = spawn_lobby(LOBBY_SIZE);
        assert_eq!(lobby.len(), 30);

        assert_eq!(lobby[0].avatar.seed, 100);
        assert_eq!(lobby[2].avatar.seed, 126);
        assert_eq!(lobby[1].avatar.hair_style, Some(HairStyle::Medium));
        assert_eq!(lobby[5].avatar.palette.outfit, "#9b59b6");
        assert_eq!(lobby[6].avatar.palette.outfit, "#3f9b4b");
        assert_eq!(lobby[4].avatar.motifs, vec!["green-leaves"]);
    }

    #[test]
    fn test_spawn_lobby_bounds() {
        for avatar in spawn_lobby(LOBBY_SIZE) {
            assert!((8.0..92.0).contains(&avatar.x));
            assert!((10.0..90.0).contains(&avatar.y));
            assert!(avatar.vx.abs() <= 0.45);
            assert!(avatar.vy.abs() <= 0.45);
            assert!((-1.0..1.0).contains(&avatar.match_bias));
        }
    }

    #[test]
    fn test_spawn_lobby_is_reproducible() {
        assert_eq!(spawn_lobby(LOBBY_SIZE), spawn_lobby(LOBBY_SIZE));
        // a shorter crowd is a prefix of a longer one
        assert_eq!(spawn_lobby(5)[..], spawn_lobby(LOBBY_SIZE)[..5]);
    }

    #[test]
    fn test_pair_match_chance_clamped() {
        let mut a = spawn_lobby(2).remove(0);
        let mut b = a.clone();

        a.match_bias = 0.0;
        b.match_bias = 0.0;
        assert!((pair_match_chance(&a, &b) - 0.5).abs() < 1e-9);

        a.match_bias = 1.0;
        b.match_bias = 1.0;
        assert_eq!(pair_match_chance(&a, &b), 0.85);

        a.match_bias = -1.0;
        b.match_bias = -1.0;
        assert_eq!(pair_match_chance(&a, &b), 0.15);
    }

    #[test]
    fn test_within_meeting_range() {
        let a = spawn_lobby(1).remove(0);
        let mut b = a.clone();
        b.x += 3.0;
        b.y += 4.0;
        assert!(within_meeting_range(&a, &b));
        b.x += 5.0;
        assert!(!within_meeting_range(&a, &b));
    }
}
