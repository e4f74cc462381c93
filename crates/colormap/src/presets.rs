//! Predefined gradient tables.
//!
//! Nine read-only tables built once per process, each with
//! [`DEFAULT_STEPS`] entries. [`HEAT`] is the default used by
//! [`draw`](crate::draw) when no gradient is supplied.

use std::sync::LazyLock;

use crate::gradient::Gradient;
use heatgrid_core::Color;

/// Step count used for all preset tables.
pub const DEFAULT_STEPS: usize = 500;

/// Maroon to gold.
pub static MAROON_TO_GOLD: LazyLock<Gradient> =
    LazyLock::new(|| Gradient::linear(Color::rgb(160, 0, 0), Color::rgb(255, 255, 0), DEFAULT_STEPS));

/// Blue to red.
pub static BLUE_TO_RED: LazyLock<Gradient> =
    LazyLock::new(|| Gradient::linear(Color::rgb(0, 0, 255), Color::rgb(255, 0, 0), DEFAULT_STEPS));

/// Black to white.
pub static BLACK_TO_WHITE: LazyLock<Gradient> =
    LazyLock::new(|| Gradient::linear(Color::black(), Color::white(), DEFAULT_STEPS));

/// Red to green.
pub static RED_TO_GREEN: LazyLock<Gradient> =
    LazyLock::new(|| Gradient::linear(Color::rgb(255, 0, 0), Color::rgb(0, 255, 0), DEFAULT_STEPS));

/// Green over yellow and orange to red.
pub static GREEN_YELLOW_ORANGE_RED: LazyLock<Gradient> = LazyLock::new(|| {
    Gradient::multi(
        &[
            Color::rgb(0, 255, 0),
            Color::rgb(255, 255, 0),
            Color::rgb(255, 165, 0),
            Color::rgb(255, 0, 0),
        ],
        DEFAULT_STEPS,
    )
});

/// Six-stop rainbow, violet to red.
pub static RAINBOW: LazyLock<Gradient> = LazyLock::new(|| {
    Gradient::multi(
        &[
            Color::rgb(181, 32, 255),
            Color::rgb(0, 0, 255),
            Color::rgb(0, 255, 0),
            Color::rgb(255, 255, 0),
            Color::rgb(255, 165, 0),
            Color::rgb(255, 0, 0),
        ],
        DEFAULT_STEPS,
    )
});

/// Black-body style ramp, black through red and yellow to white.
pub static HOT: LazyLock<Gradient> = LazyLock::new(|| {
    Gradient::multi(
        &[
            Color::rgb(0, 0, 0),
            Color::rgb(87, 0, 0),
            Color::rgb(255, 0, 0),
            Color::rgb(255, 165, 0),
            Color::rgb(255, 255, 0),
            Color::rgb(255, 255, 255),
        ],
        DEFAULT_STEPS,
    )
});

/// The default heat ramp.
pub static HEAT: LazyLock<Gradient> = LazyLock::new(|| {
    Gradient::multi(
        &[
            Color::rgb(0, 0, 0),
            Color::rgb(105, 0, 0),
            Color::rgb(192, 23, 0),
            Color::rgb(255, 150, 38),
            Color::rgb(255, 255, 255),
        ],
        DEFAULT_STEPS,
    )
});

/// Red, orange, yellow.
pub static ROY: LazyLock<Gradient> = LazyLock::new(|| {
    Gradient::multi(
        &[Color::rgb(255, 0, 0), Color::rgb(255, 165, 0), Color::rgb(255, 255, 0)],
        DEFAULT_STEPS,
    )
});

/// Names of all presets, in the order accepted by [`by_name`].
pub const NAMES: &[&str] = &[
    "maroon-to-gold",
    "blue-to-red",
    "black-to-white",
    "red-to-green",
    "green-yellow-orange-red",
    "rainbow",
    "hot",
    "heat",
    "roy",
];

/// Look a preset up by name. Useful for CLI and config plumbing.
pub fn by_name(name: &str) -> Option<&'static Gradient> {
    match name {
        "maroon-to-gold" => Some(&MAROON_TO_GOLD),
        "blue-to-red" => Some(&BLUE_TO_RED),
        "black-to-white" => Some(&BLACK_TO_WHITE),
        "red-to-green" => Some(&RED_TO_GREEN),
        "green-yellow-orange-red" => Some(&GREEN_YELLOW_ORANGE_RED),
        "rainbow" => Some(&RAINBOW),
        "hot" => Some(&HOT),
        "heat" => Some(&HEAT),
        "roy" => Some(&ROY),
        _ => None,
    }
}
