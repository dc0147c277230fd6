//! Static achievement definitions.

use super::types::{AchievementDef, Catalog};
use crate::constants::GRID_SIZE;

/// All achievement definitions, row by row across the 5x5 grid.
///
/// The table is the full site catalog, so saved progress stays compatible
/// with it. The terminal desktop only triggers part of it: wiki, blog, drag
/// and guestbook entries have no terminal counterpart, which also leaves
/// `completionist` out of reach here.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // ROW 0: getting around the desktop
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "window-shopper",
        title: "Window Shopper",
        description: "Open three desktop windows at once",
        x: 0,
        y: 0,
        icon: "🪟",
    },
    AchievementDef {
        id: "drag-racer",
        title: "Drag Racer",
        description: "Drag a window across the whole screen",
        x: 1,
        y: 0,
        icon: "🏁",
    },
    AchievementDef {
        id: "night-owl",
        title: "Night Owl",
        description: "Visit between midnight and 4am",
        x: 2,
        y: 0,
        icon: "🦉",
    },
    AchievementDef {
        id: "pane-breaker",
        title: "Pane Breaker",
        description: "Shatter a desktop window",
        x: 3,
        y: 0,
        icon: "🔨",
    },
    AchievementDef {
        id: "minimalist",
        title: "Minimalist",
        description: "Close every open window",
        x: 4,
        y: 0,
        icon: "🧹",
    },
    // ═══════════════════════════════════════════════════════════════
    // ROW 1: the wiki
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "bookworm",
        title: "Bookworm",
        description: "Read ten wiki pages",
        x: 0,
        y: 1,
        icon: "📚",
    },
    AchievementDef {
        id: "tag-along",
        title: "Tag Along",
        description: "Browse pages by tag",
        x: 1,
        y: 1,
        icon: "🏷️",
    },
    AchievementDef {
        id: "deep-link",
        title: "Deep Link",
        description: "Follow a link five pages deep",
        x: 2,
        y: 1,
        icon: "🔗",
    },
    AchievementDef {
        id: "grid-gazer",
        title: "Grid Gazer",
        description: "Open the achievement grid",
        x: 3,
        y: 1,
        icon: "🔳",
    },
    AchievementDef {
        id: "completionist",
        title: "Completionist",
        description: "Unlock every other achievement",
        x: 4,
        y: 1,
        icon: "🏆",
    },
    // ═══════════════════════════════════════════════════════════════
    // ROW 2: first steps (first-login sits in the center)
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "searcher",
        title: "Searcher",
        description: "Search the wiki",
        x: 0,
        y: 2,
        icon: "🔍",
    },
    AchievementDef {
        id: "blog-reader",
        title: "Blog Reader",
        description: "Read a blog post to the end",
        x: 1,
        y: 2,
        icon: "📰",
    },
    AchievementDef {
        id: "first-login",
        title: "Hello, World",
        description: "Boot up the desktop",
        x: 2,
        y: 2,
        icon: "💾",
    },
    AchievementDef {
        id: "sphere-smasher",
        title: "Sphere Smasher",
        description: "Shatter the wireframe sphere",
        x: 3,
        y: 2,
        icon: "🌐",
    },
    AchievementDef {
        id: "chain-reaction",
        title: "Chain Reaction",
        description: "Shatter the sphere and a window at the same time",
        x: 4,
        y: 2,
        icon: "💥",
    },
    // ═══════════════════════════════════════════════════════════════
    // ROW 3: the terminal
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "terminal-velocity",
        title: "Terminal Velocity",
        description: "Open the terminal",
        x: 0,
        y: 3,
        icon: "⌨️",
    },
    AchievementDef {
        id: "sudo",
        title: "Sudo Make Me a Sandwich",
        description: "Try to run a command as root",
        x: 1,
        y: 3,
        icon: "🥪",
    },
    AchievementDef {
        id: "ls-la",
        title: "Nothing to Hide",
        description: "List hidden files",
        x: 2,
        y: 3,
        icon: "📂",
    },
    AchievementDef {
        id: "patience",
        title: "Patience",
        description: "Watch the sphere spin for a full minute",
        x: 3,
        y: 3,
        icon: "⏳",
    },
    AchievementDef {
        id: "rm-rf",
        title: "Scorched Earth",
        description: "Reset all achievements",
        x: 4,
        y: 3,
        icon: "🔥",
    },
    // ═══════════════════════════════════════════════════════════════
    // ROW 4: secrets
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "konami",
        title: "Up Up Down Down",
        description: "Enter the Konami code",
        x: 0,
        y: 4,
        icon: "🎮",
    },
    AchievementDef {
        id: "easter-egg",
        title: "Egg Hunter",
        description: "Find the hidden page",
        x: 1,
        y: 4,
        icon: "🥚",
    },
    AchievementDef {
        id: "view-source",
        title: "View Source",
        description: "Peek at how the site is built",
        x: 2,
        y: 4,
        icon: "🧾",
    },
    AchievementDef {
        id: "rage-quit",
        title: "Rage Quit",
        description: "Shatter ten things in one visit",
        x: 3,
        y: 4,
        icon: "😤",
    },
    AchievementDef {
        id: "guestbook",
        title: "Guestbook",
        description: "Say hello",
        x: 4,
        y: 4,
        icon: "✉️",
    },
];

impl Catalog {
    /// The site's 5x5 catalog.
    pub fn standard() -> Catalog {
        // validity of the table is covered by test_standard_catalog_is_valid
        Catalog::from_static(ALL_ACHIEVEMENTS, GRID_SIZE)
    }
}

/// Look up a definition by id.
pub fn get_achievement_def(id: &str) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|d| d.id == id)
}
