//! Read-only world themes.  Colours and flags are hints for the presentation
//! layer; the simulation only uses a theme's position in [`THEMES`].

pub type Rgb = (u8, u8, u8);

#[derive(Clone, Debug, PartialEq)]
pub struct WorldTheme {
    pub name: &'static str,
    pub sky: Rgb,
    pub platform: Rgb,
    pub accent: Rgb,
    pub has_clouds: bool,
    pub has_parallax: bool,
}

pub static THEMES: [WorldTheme; 5] = [
    WorldTheme {
        name: "Mushroom Kingdom",
        sky: (135, 206, 250),
        platform: (34, 180, 34),
        accent: (255, 215, 0),
        has_clouds: true,
        has_parallax: true,
    },
    WorldTheme {
        name: "Desert Dunes",
        sky: (255, 200, 100),
        platform: (194, 154, 108),
        accent: (255, 140, 90),
        has_clouds: false,
        has_parallax: true,
    },
    WorldTheme {
        name: "Ocean Paradise",
        sky: (0, 100, 200),
        platform: (0, 64, 128),
        accent: (173, 216, 230),
        has_clouds: true,
        has_parallax: true,
    },
    WorldTheme {
        name: "Crystal Caverns",
        sky: (100, 50, 150),
        platform: (105, 105, 150),
        accent: (200, 150, 255),
        has_clouds: false,
        has_parallax: true,
    },
    WorldTheme {
        name: "Bowser's Castle",
        sky: (50, 0, 0),
        platform: (139, 0, 0),
        accent: (255, 100, 0),
        has_clouds: false,
        has_parallax: false,
    },
];

/// Theme for a 0-based world index, if one exists.
pub fn theme(index: usize) -> Option<&'static WorldTheme> {
    THEMES.get(index)
}
